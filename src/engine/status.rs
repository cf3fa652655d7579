use crate::models::order::{LifecycleFlags, OrderStatus, PaymentStatus};
use crate::models::partner::{ApprovalFlags, PartnerStatus};

/// Collapses the backend's independent lifecycle flags into one status.
/// Cancellation outranks everything, then the furthest lifecycle step reached.
pub fn derive_order_status(flags: LifecycleFlags) -> OrderStatus {
    if flags.canceled {
        OrderStatus::Cancelled
    } else if flags.completed {
        OrderStatus::Delivered
    } else if flags.picked {
        OrderStatus::Delivering
    } else if flags.accepted {
        OrderStatus::Pickup
    } else {
        OrderStatus::Pending
    }
}

pub fn derive_partner_status(flags: ApprovalFlags) -> PartnerStatus {
    if flags.disapproved {
        PartnerStatus::Disapproved
    } else if flags.approved {
        PartnerStatus::Approved
    } else {
        PartnerStatus::Pending
    }
}

pub fn derive_payment_status(settled: bool, due: bool) -> PaymentStatus {
    if settled {
        PaymentStatus::Paid
    } else if due {
        PaymentStatus::Failed
    } else {
        PaymentStatus::Pending
    }
}
