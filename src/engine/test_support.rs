use chrono::{DateTime, Utc};

use crate::models::order::{
    ContactDetails, LifecycleFlags, Meridian, Order, OrderStatus, TimeOfDay,
};
use crate::models::partner::{PartnerDocuments, PartnerRequest, PartnerStatus};

pub fn order(id: &str, customer: &str, status: OrderStatus, created_at: Option<DateTime<Utc>>) -> Order {
    Order {
        id: id.to_string(),
        status,
        customer_name: customer.to_string(),
        address: format!("{id} Main St, City"),
        items: vec![format!("Parcel {id}")],
        created_at,
        assigned_driver: None,
        pickup: ContactDetails::default(),
        delivery: ContactDetails {
            address: format!("{id} Main St, City"),
            phone: format!("90000000{id}"),
            locality: "Central".to_string(),
            name: Some(customer.to_string()),
        },
        price: Some(100.0),
        parcel_value: None,
        payment_type: "COD".to_string(),
        instruction: String::new(),
        weight: "1kg".to_string(),
        time: Some(TimeOfDay {
            hours: 10,
            minutes: 0,
            meridian: Meridian::Am,
        }),
        date: "2024-03-20".to_string(),
        flags: LifecycleFlags::default(),
        payment_settled: false,
        payment_due: false,
        canceled_by: None,
        rider_phone: None,
    }
}

pub fn partner(id: &str, name: &str, status: PartnerStatus, created_at: Option<DateTime<Utc>>) -> PartnerRequest {
    PartnerRequest {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: format!("98765432{id}"),
        address: "4 Lake View".to_string(),
        vehicle_type: "bike".to_string(),
        vehicle_number: format!("KA01AB00{id}"),
        status,
        documents: PartnerDocuments::default(),
        registered: false,
        created_at,
        updated_at: created_at,
    }
}
