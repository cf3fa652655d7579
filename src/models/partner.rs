use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Partner (driver) sign-up request as `GET /partners/getpartners` returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemotePartnerRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "vehicleType", default, deserialize_with = "null_as_default")]
    pub vehicle_type: String,
    #[serde(rename = "vehicleNumber", default, deserialize_with = "null_as_default")]
    pub vehicle_number: String,
    #[serde(rename = "dlDocument", default, deserialize_with = "null_as_default")]
    pub dl_document: String,
    #[serde(rename = "poaDocument", default, deserialize_with = "null_as_default")]
    pub poa_document: String,
    #[serde(rename = "poiDocument", default, deserialize_with = "null_as_default")]
    pub poi_document: String,
    #[serde(rename = "rcDocument", default, deserialize_with = "null_as_default")]
    pub rc_document: String,
    #[serde(rename = "bikePhoto", default, deserialize_with = "null_as_default")]
    pub bike_photo: String,
    #[serde(rename = "profilePicture", default, deserialize_with = "null_as_default")]
    pub profile_picture: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub disapproved: bool,
    #[serde(default)]
    pub registered: bool,
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "updatedAt", default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalFlags {
    pub approved: bool,
    pub disapproved: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Pending,
    Approved,
    Disapproved,
}

impl PartnerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PartnerStatus::Pending => "pending",
            PartnerStatus::Approved => "approved",
            PartnerStatus::Disapproved => "disapproved",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            PartnerStatus::Pending => "Pending Review",
            PartnerStatus::Approved => "Approved",
            PartnerStatus::Disapproved => "Disapproved",
        }
    }
}

impl fmt::Display for PartnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentKind {
    DrivingLicence,
    ProofOfAddress,
    ProofOfIdentity,
    RegistrationCertificate,
    BikePhoto,
    ProfilePicture,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::DrivingLicence => "Driving License",
            DocumentKind::ProofOfAddress => "Proof of Address",
            DocumentKind::ProofOfIdentity => "Proof of Identity",
            DocumentKind::RegistrationCertificate => "RC Document",
            DocumentKind::BikePhoto => "Bike Photo",
            DocumentKind::ProfilePicture => "Profile Picture",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartnerDocuments {
    pub driving_licence: String,
    pub proof_of_address: String,
    pub proof_of_identity: String,
    pub registration_certificate: String,
    pub bike_photo: String,
    pub profile_picture: String,
}

impl PartnerDocuments {
    pub fn get(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::DrivingLicence => &self.driving_licence,
            DocumentKind::ProofOfAddress => &self.proof_of_address,
            DocumentKind::ProofOfIdentity => &self.proof_of_identity,
            DocumentKind::RegistrationCertificate => &self.registration_certificate,
            DocumentKind::BikePhoto => &self.bike_photo,
            DocumentKind::ProfilePicture => &self.profile_picture,
        }
    }

    /// Documents that were actually uploaded, in review order.
    pub fn uploaded(&self) -> Vec<(DocumentKind, &str)> {
        [
            DocumentKind::DrivingLicence,
            DocumentKind::ProofOfAddress,
            DocumentKind::ProofOfIdentity,
            DocumentKind::RegistrationCertificate,
            DocumentKind::BikePhoto,
            DocumentKind::ProfilePicture,
        ]
        .into_iter()
        .map(|kind| (kind, self.get(kind)))
        .filter(|(_, uri)| !uri.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub status: PartnerStatus,
    pub documents: PartnerDocuments,
    pub registered: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
