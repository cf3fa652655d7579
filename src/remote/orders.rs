use tracing::info;

use crate::engine::mapper::{map_order, order_details};
use crate::error::AppError;
use crate::models::order::{Order, OrderDetails, OrderStatus, RemoteOrderRecord};
use crate::remote::{ApiClient, require_id};

impl ApiClient {
    pub async fn get_orders(&self) -> Result<Vec<Order>, AppError> {
        let records: Vec<RemoteOrderRecord> = self.get_json("get_orders", "orders/getorder").await?;

        self.metrics()
            .records_fetched
            .with_label_values(&["orders"])
            .set(records.len() as i64);

        Ok(records.iter().map(map_order).collect())
    }

    /// The backend has no single-order endpoint, so this re-fetches every
    /// order and scans for `order_id`.
    pub async fn get_order_details(&self, order_id: &str) -> Result<OrderDetails, AppError> {
        require_id("order id", order_id)?;

        let order = self
            .get_orders()
            .await?
            .into_iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

        Ok(order_details(order))
    }

    /// Not wired to the backend yet: the change only lives in the caller's
    /// local list (see `engine::patch::patch_order_status`).
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        require_id("order id", order_id)?;

        info!(order_id, status = %status, "order status change recorded locally");
        Ok(())
    }

    /// Not wired to the backend yet.
    pub async fn assign_driver(&self, order_id: &str, driver_id: &str) -> Result<(), AppError> {
        require_id("order id", order_id)?;
        require_id("driver id", driver_id)?;

        info!(order_id, driver_id, "driver assignment recorded locally");
        Ok(())
    }
}
