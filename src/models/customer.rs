use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub phone: String,
    pub name: String,
    pub address: String,
    pub locality: String,
    pub total_orders: usize,
    pub last_order_at: Option<DateTime<Utc>>,
}
