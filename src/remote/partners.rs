use tracing::info;

use crate::engine::mapper::map_partner;
use crate::error::AppError;
use crate::models::partner::{PartnerRequest, RemotePartnerRecord};
use crate::remote::{ApiClient, require_id};

impl ApiClient {
    pub async fn get_partner_requests(&self) -> Result<Vec<PartnerRequest>, AppError> {
        let records: Vec<RemotePartnerRecord> = self
            .get_json("get_partner_requests", "partners/getpartners")
            .await?;

        self.metrics()
            .records_fetched
            .with_label_values(&["partners"])
            .set(records.len() as i64);

        Ok(records.iter().map(map_partner).collect())
    }

    pub async fn get_partner_request_details(
        &self,
        partner_id: &str,
    ) -> Result<PartnerRequest, AppError> {
        require_id("partner id", partner_id)?;

        self.get_partner_requests()
            .await?
            .into_iter()
            .find(|partner| partner.id == partner_id)
            .ok_or_else(|| AppError::NotFound(format!("partner request {partner_id}")))
    }

    pub async fn approve_partner_request(&self, partner_id: &str) -> Result<(), AppError> {
        require_id("partner id", partner_id)?;

        let url = self.url(&format!("partners/approve/{partner_id}"));
        self.send("approve_partner_request", self.http.put(url))
            .await?;

        info!(partner_id, "partner request approved");
        Ok(())
    }

    pub async fn disapprove_partner_request(&self, partner_id: &str) -> Result<(), AppError> {
        require_id("partner id", partner_id)?;

        let url = self.url(&format!("partners/disapprove/{partner_id}"));
        self.send("disapprove_partner_request", self.http.put(url))
            .await?;

        info!(partner_id, "partner request disapproved");
        Ok(())
    }

    pub async fn delete_partner_request(&self, partner_id: &str) -> Result<(), AppError> {
        require_id("partner id", partner_id)?;

        let url = self.url(&format!("partners/delete/{partner_id}"));
        self.send("delete_partner_request", self.http.delete(url))
            .await?;

        info!(partner_id, "partner request deleted");
        Ok(())
    }
}
