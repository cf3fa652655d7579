use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::engine::filter::DateRange;
use crate::engine::sort::compare_names;
use crate::models::customer::Customer;
use crate::models::dashboard::DashboardStats;
use crate::models::order::{Order, OrderStatus};

pub fn dashboard_stats(orders: &[Order], now: DateTime<Utc>) -> DashboardStats {
    let mut stats = DashboardStats::default();

    for order in orders {
        if DateRange::Today.contains(order.created_at, now) {
            stats.orders_today += 1;
        }

        match order.status {
            OrderStatus::Pending | OrderStatus::Pickup => stats.pending_pickups += 1,
            OrderStatus::Delivering => stats.out_for_delivery += 1,
            OrderStatus::Delivered => stats.delivered += 1,
            OrderStatus::Cancelled => stats.cancelled += 1,
        }
    }

    stats
}

/// One entry per delivery contact, keyed by phone number (or name when the
/// phone is blank). Contact details come from the customer's latest order.
pub fn customers_from_orders(orders: &[Order]) -> Vec<Customer> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut customers: Vec<Customer> = Vec::new();

    for order in orders {
        let phone = order.delivery.phone.trim();
        let key = if phone.is_empty() {
            format!("name:{}", order.customer_name.to_lowercase())
        } else {
            format!("phone:{phone}")
        };

        match index.get(&key) {
            Some(&slot) => {
                let customer = &mut customers[slot];
                customer.total_orders += 1;
                if order.created_at > customer.last_order_at {
                    customer.name = order.customer_name.clone();
                    customer.address = order.address.clone();
                    customer.locality = order.delivery.locality.clone();
                    customer.last_order_at = order.created_at;
                }
            }
            None => {
                index.insert(key, customers.len());
                customers.push(Customer {
                    phone: phone.to_string(),
                    name: order.customer_name.clone(),
                    address: order.address.clone(),
                    locality: order.delivery.locality.clone(),
                    total_orders: 1,
                    last_order_at: order.created_at,
                });
            }
        }
    }

    customers.sort_by(|a, b| {
        b.total_orders
            .cmp(&a.total_orders)
            .then_with(|| compare_names(&a.name, &b.name))
    });
    customers
}
