use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "Phone", default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(rename = "Locality", default, deserialize_with = "null_as_default")]
    pub locality: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridian {
    Am,
    Pm,
}

impl<'de> Deserialize<'de> for Meridian {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridian::Am),
            "PM" => Ok(Meridian::Pm),
            other => Err(de::Error::unknown_variant(other, &["AM", "PM"])),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub meridian: Meridian,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridian = match self.meridian {
            Meridian::Am => "AM",
            Meridian::Pm => "PM",
        };
        write!(f, "{}:{:02} {}", self.hours, self.minutes, meridian)
    }
}

/// A null or malformed `Time` drops to `None` instead of failing the whole list.
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

/// Order record exactly as `GET /orders/getorder` returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteOrderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "PickupDetails")]
    pub pickup_details: ContactDetails,
    #[serde(rename = "DeliveryDetails")]
    pub delivery_details: ContactDetails,
    #[serde(rename = "Time", default, deserialize_with = "lenient_time")]
    pub time: Option<TimeOfDay>,
    #[serde(rename = "userPhone", default, deserialize_with = "null_as_default")]
    pub user_phone: String,
    #[serde(rename = "Item", default, deserialize_with = "null_as_default")]
    pub item: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: String,
    #[serde(rename = "parcelValue", default)]
    pub parcel_value: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "paymentType", default, deserialize_with = "null_as_default")]
    pub payment_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instruction: String,
    #[serde(rename = "Date", default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "updatedAt", default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub picked: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub canceled: bool,
    #[serde(rename = "paymentSettled", default)]
    pub payment_settled: bool,
    #[serde(rename = "paymentDue", default)]
    pub payment_due: bool,
    #[serde(rename = "RiderName", default)]
    pub rider_name: Option<String>,
    #[serde(rename = "RiderPhone", default)]
    pub rider_phone: Option<String>,
    #[serde(rename = "canceledBy", default)]
    pub canceled_by: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifecycleFlags {
    pub accepted: bool,
    pub picked: bool,
    pub completed: bool,
    pub canceled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Pickup,
    Delivering,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Pickup => "pickup",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Pickup => "Ready for Pickup",
            OrderStatus::Delivering => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub customer_name: String,
    pub address: String,
    pub items: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub assigned_driver: Option<String>,
    pub pickup: ContactDetails,
    pub delivery: ContactDetails,
    pub price: Option<f64>,
    pub parcel_value: Option<f64>,
    pub payment_type: String,
    pub instruction: String,
    pub weight: String,
    pub time: Option<TimeOfDay>,
    pub date: String,
    pub flags: LifecycleFlags,
    pub payment_settled: bool,
    pub payment_due: bool,
    pub canceled_by: Option<String>,
    pub rider_phone: Option<String>,
}

impl Order {
    pub fn primary_item(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverContact {
    pub name: String,
    pub phone: Option<String>,
}

/// An order enriched with the fields the detail view needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub customer_phone: String,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    pub delivery_notes: Option<String>,
    pub assigned_driver_details: Option<DriverContact>,
}
