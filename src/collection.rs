//! Fetch, map, filter, sort pipeline shared by every list screen.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::engine::filter::{FilterCriteria, apply_filters_at};
use crate::engine::patch::patch_order_status;
use crate::engine::record::Record;
use crate::engine::sort::{SortField, SortSpec, apply_sort};
use crate::error::AppError;
use crate::models::order::{Order, OrderStatus};
use crate::models::partner::PartnerRequest;
use crate::remote::ApiClient;

/// A backend collection that can be fetched in one request.
pub trait Resource {
    type Item: Record;
    const NAME: &'static str;

    fn fetch(client: &ApiClient) -> impl Future<Output = Result<Vec<Self::Item>, AppError>> + Send;
}

pub struct Orders;

impl Resource for Orders {
    type Item = Order;
    const NAME: &'static str = "orders";

    fn fetch(client: &ApiClient) -> impl Future<Output = Result<Vec<Order>, AppError>> + Send {
        client.get_orders()
    }
}

pub struct PartnerRequests;

impl Resource for PartnerRequests {
    type Item = PartnerRequest;
    const NAME: &'static str = "partner requests";

    fn fetch(
        client: &ApiClient,
    ) -> impl Future<Output = Result<Vec<PartnerRequest>, AppError>> + Send {
        client.get_partner_requests()
    }
}

/// Locally held copy of a remote collection plus the view state applied to it.
/// Every refresh replaces the whole list.
pub struct RemoteCollection<R: Resource> {
    client: Arc<ApiClient>,
    items: Vec<R::Item>,
    criteria: FilterCriteria<<R::Item as Record>::Status>,
    sort: SortSpec,
    last_refreshed: Option<DateTime<Utc>>,
}

impl<R: Resource> RemoteCollection<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            items: Vec::new(),
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            last_refreshed: None,
        }
    }

    /// On failure the previously loaded items are kept.
    pub async fn refresh(&mut self) -> Result<usize, AppError> {
        match R::fetch(&self.client).await {
            Ok(items) => {
                self.items = items;
                self.last_refreshed = Some(Utc::now());
                info!(resource = R::NAME, count = self.items.len(), "collection refreshed");
                Ok(self.items.len())
            }
            Err(err) => {
                warn!(resource = R::NAME, error = %err, "collection refresh failed");
                Err(err)
            }
        }
    }

    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    pub fn criteria(&self) -> &FilterCriteria<<R::Item as Record>::Status> {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria<<R::Item as Record>::Status>) {
        self.criteria = criteria;
    }

    pub fn clear_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
    }

    pub fn view(&self) -> Vec<R::Item> {
        self.view_at(Utc::now())
    }

    pub fn view_at(&self, now: DateTime<Utc>) -> Vec<R::Item> {
        let filtered = apply_filters_at(&self.items, &self.criteria, now);
        apply_sort(&filtered, self.sort.field, self.sort.direction)
    }

    pub fn find(&self, id: &str) -> Option<&R::Item> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl RemoteCollection<Orders> {
    /// Sends the status change and, once accepted, patches the local copy.
    pub async fn change_status(&mut self, order_id: &str, status: OrderStatus) -> Result<(), AppError> {
        if self.find(order_id).is_none() {
            return Err(AppError::NotFound(format!("order {order_id}")));
        }

        self.client.update_order_status(order_id, status).await?;
        self.items = patch_order_status(&self.items, order_id, status);
        Ok(())
    }
}

impl RemoteCollection<PartnerRequests> {
    pub async fn approve(&mut self, partner_id: &str) -> Result<(), AppError> {
        self.client.approve_partner_request(partner_id).await?;
        self.refresh().await.map(|_| ())
    }

    pub async fn disapprove(&mut self, partner_id: &str) -> Result<(), AppError> {
        self.client.disapprove_partner_request(partner_id).await?;
        self.refresh().await.map(|_| ())
    }

    pub async fn delete(&mut self, partner_id: &str) -> Result<(), AppError> {
        self.client.delete_partner_request(partner_id).await?;
        self.refresh().await.map(|_| ())
    }
}
