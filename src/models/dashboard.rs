use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub orders_today: usize,
    pub pending_pickups: usize,
    pub out_for_delivery: usize,
    pub delivered: usize,
    pub cancelled: usize,
}
