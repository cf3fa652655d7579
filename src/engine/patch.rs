use crate::models::order::{Order, OrderStatus};

/// Optimistic local update after a status change: returns a new list with the
/// matching order's status replaced. Unknown ids leave the list unchanged.
pub fn patch_order_status(orders: &[Order], order_id: &str, status: OrderStatus) -> Vec<Order> {
    orders
        .iter()
        .map(|order| {
            if order.id == order_id {
                Order {
                    status,
                    ..order.clone()
                }
            } else {
                order.clone()
            }
        })
        .collect()
}
