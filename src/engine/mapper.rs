use chrono::{DateTime, Utc};

use crate::engine::status::{derive_order_status, derive_partner_status, derive_payment_status};
use crate::models::order::{
    DriverContact, LifecycleFlags, Order, OrderDetails, RemoteOrderRecord,
};
use crate::models::partner::{ApprovalFlags, PartnerDocuments, PartnerRequest, RemotePartnerRecord};
use crate::models::user::{AdminUser, RemoteUserRecord};

const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn map_order(record: &RemoteOrderRecord) -> Order {
    let flags = LifecycleFlags {
        accepted: record.accepted,
        picked: record.picked,
        completed: record.completed,
        canceled: record.canceled,
    };

    Order {
        id: record.id.clone(),
        status: derive_order_status(flags),
        customer_name: non_blank(record.delivery_details.name.as_ref())
            .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
        address: record.delivery_details.address.clone(),
        items: vec![record.item.clone()],
        created_at: parse_timestamp(&record.created_at),
        assigned_driver: non_blank(record.rider_name.as_ref()),
        pickup: record.pickup_details.clone(),
        delivery: record.delivery_details.clone(),
        price: record.price,
        parcel_value: record.parcel_value,
        payment_type: record.payment_type.clone(),
        instruction: record.instruction.clone(),
        weight: record.weight.clone(),
        time: record.time,
        date: record.date.clone(),
        flags,
        payment_settled: record.payment_settled,
        payment_due: record.payment_due,
        canceled_by: non_blank(record.canceled_by.as_ref()),
        rider_phone: non_blank(record.rider_phone.as_ref()),
    }
}

pub fn order_details(order: Order) -> OrderDetails {
    let assigned_driver_details = order.assigned_driver.as_ref().map(|name| DriverContact {
        name: name.clone(),
        phone: order.rider_phone.clone(),
    });

    OrderDetails {
        customer_phone: order.delivery.phone.clone(),
        total_amount: order.price.unwrap_or(0.0),
        payment_status: derive_payment_status(order.payment_settled, order.payment_due),
        delivery_notes: non_blank(Some(&order.instruction)),
        assigned_driver_details,
        order,
    }
}

pub fn map_partner(record: &RemotePartnerRecord) -> PartnerRequest {
    let flags = ApprovalFlags {
        approved: record.approved,
        disapproved: record.disapproved,
    };

    PartnerRequest {
        id: record.id.clone(),
        name: format!("{} {}", record.firstname.trim(), record.lastname.trim())
            .trim()
            .to_string(),
        email: record.email.clone(),
        phone: record.phone.clone(),
        address: record.address.clone(),
        vehicle_type: record.vehicle_type.clone(),
        vehicle_number: record.vehicle_number.clone(),
        status: derive_partner_status(flags),
        documents: PartnerDocuments {
            driving_licence: record.dl_document.clone(),
            proof_of_address: record.poa_document.clone(),
            proof_of_identity: record.poi_document.clone(),
            registration_certificate: record.rc_document.clone(),
            bike_photo: record.bike_photo.clone(),
            profile_picture: record.profile_picture.clone(),
        },
        registered: record.registered,
        created_at: parse_timestamp(&record.created_at),
        updated_at: parse_timestamp(&record.updated_at),
    }
}

pub fn map_user(record: &RemoteUserRecord) -> AdminUser {
    AdminUser {
        id: record.id.clone(),
        name: record.name.clone(),
        phone: record.phone.clone(),
        email: record.email.clone(),
        pending_payment: record.pending_payment,
        is_admin: record.is_admin,
        is_rider: record.is_rider,
        on_duty: record.on_duty,
        created_at: parse_timestamp(&record.created_at),
    }
}
