use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::models::order::{Order, OrderStatus};
use crate::models::partner::{PartnerRequest, PartnerStatus};

/// What the filter/sort engine needs to know about a listable entity.
pub trait Record: Clone {
    type Status: Copy + PartialEq + Debug;

    fn id(&self) -> &str;
    fn sort_name(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn status_label(&self) -> &'static str;
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Fields free-text search looks at; any one containing the query is a match.
    fn search_fields(&self) -> Vec<&str>;

    fn payment_type(&self) -> Option<&str> {
        None
    }
}

impl Record for Order {
    type Status = OrderStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_name(&self) -> &str {
        &self.customer_name
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.customer_name.as_str(), self.address.as_str()];
        if let Some(item) = self.primary_item() {
            fields.push(item);
        }
        fields.push(self.id.as_str());
        fields
    }

    fn payment_type(&self) -> Option<&str> {
        Some(&self.payment_type)
    }
}

impl Record for PartnerRequest {
    type Status = PartnerStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> PartnerStatus {
        self.status
    }

    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.vehicle_number.as_str(),
        ]
    }
}
