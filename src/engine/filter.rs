use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::record::Record;

/// Rolling creation-date windows, measured back from "now" at filter time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    None,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn contains(self, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let Some(created_at) = created_at else {
            return self == DateRange::None;
        };

        match self {
            DateRange::None => true,
            DateRange::Today => created_at.date_naive() == now.date_naive(),
            DateRange::Week => created_at >= now - Duration::days(7),
            DateRange::Month => created_at >= now - Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria<S> {
    pub query: String,
    pub status: Option<S>,
    pub payment_type: Option<String>,
    pub date_range: DateRange,
}

impl<S> Default for FilterCriteria<S> {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: None,
            payment_type: None,
            date_range: DateRange::None,
        }
    }
}

impl<S> FilterCriteria<S> {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = Some(payment_type.into());
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    fn active_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    fn active_payment_type(&self) -> Option<&str> {
        self.payment_type
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.active_query().is_some()
            || self.status.is_some()
            || self.active_payment_type().is_some()
            || self.date_range != DateRange::None
    }
}

pub fn apply_filters<R: Record>(all: &[R], criteria: &FilterCriteria<R::Status>) -> Vec<R> {
    apply_filters_at(all, criteria, Utc::now())
}

pub fn apply_filters_at<R: Record>(
    all: &[R],
    criteria: &FilterCriteria<R::Status>,
    now: DateTime<Utc>,
) -> Vec<R> {
    let query = criteria.active_query();
    let payment_type = criteria.active_payment_type();

    all.iter()
        .filter(|record| {
            query
                .as_deref()
                .is_none_or(|needle| matches_query(*record, needle))
                && criteria
                    .status
                    .is_none_or(|status| record.status() == status)
                && payment_type.is_none_or(|wanted| {
                    record
                        .payment_type()
                        .is_some_and(|actual| actual.trim().eq_ignore_ascii_case(wanted))
                })
                && criteria.date_range.contains(record.created_at(), now)
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{DateRange, FilterCriteria, apply_filters_at};
    use crate::engine::test_support::{order, partner};
    use crate::models::order::OrderStatus;
    use crate::models::partner::PartnerStatus;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 15, 0, 0).unwrap()
    }

    fn sample_orders() -> Vec<crate::models::order::Order> {
        let now = now();
        vec![
            order("1", "John Doe", OrderStatus::Pending, Some(now - Duration::hours(2))),
            order("2", "Jane Smith", OrderStatus::Delivering, Some(now - Duration::days(3))),
            order("3", "Johnny Cash", OrderStatus::Delivered, Some(now - Duration::days(20))),
            order("4", "Alice Brown", OrderStatus::Cancelled, Some(now - Duration::days(45))),
            order("5", "Bob Stone", OrderStatus::Pending, None),
        ]
    }

    fn ids(orders: &[crate::models::order::Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn no_criteria_returns_equal_list() {
        let orders = sample_orders();
        let criteria = FilterCriteria::default();

        assert!(!criteria.is_active());
        assert_eq!(apply_filters_at(&orders, &criteria, now()), orders);
    }

    #[test]
    fn search_is_case_insensitive() {
        let orders = sample_orders();
        let criteria = FilterCriteria::default().with_query("john");

        assert_eq!(ids(&apply_filters_at(&orders, &criteria, now())), vec!["1", "3"]);
    }

    #[test]
    fn search_covers_address_item_and_id() {
        let orders = sample_orders();

        let by_address = FilterCriteria::default().with_query("2 MAIN ST");
        assert_eq!(ids(&apply_filters_at(&orders, &by_address, now())), vec!["2"]);

        let by_item = FilterCriteria::default().with_query("parcel 4");
        assert_eq!(ids(&apply_filters_at(&orders, &by_item, now())), vec!["4"]);

        let by_id = FilterCriteria::default().with_query("5");
        assert_eq!(ids(&apply_filters_at(&orders, &by_id, now())), vec!["5"]);
    }

    #[test]
    fn blank_query_is_inactive() {
        let orders = sample_orders();
        let criteria = FilterCriteria::default().with_query("   ");

        assert!(!criteria.is_active());
        assert_eq!(apply_filters_at(&orders, &criteria, now()).len(), orders.len());
    }

    #[test]
    fn predicates_compose_with_and() {
        let orders = sample_orders();
        let criteria = FilterCriteria::default()
            .with_query("o")
            .with_status(OrderStatus::Pending)
            .with_date_range(DateRange::Week);

        assert_eq!(ids(&apply_filters_at(&orders, &criteria, now())), vec!["1"]);
    }

    #[test]
    fn date_ranges_are_rolling_windows() {
        let orders = sample_orders();

        let today = FilterCriteria::default().with_date_range(DateRange::Today);
        assert_eq!(ids(&apply_filters_at(&orders, &today, now())), vec!["1"]);

        let week = FilterCriteria::default().with_date_range(DateRange::Week);
        assert_eq!(ids(&apply_filters_at(&orders, &week, now())), vec!["1", "2"]);

        let month = FilterCriteria::default().with_date_range(DateRange::Month);
        assert_eq!(ids(&apply_filters_at(&orders, &month, now())), vec!["1", "2", "3"]);
    }

    #[test]
    fn week_window_boundary_is_inclusive() {
        let edge = order("9", "Edge Case", OrderStatus::Pending, Some(now() - Duration::days(7)));
        let criteria = FilterCriteria::default().with_date_range(DateRange::Week);

        assert_eq!(apply_filters_at(&[edge], &criteria, now()).len(), 1);
    }

    #[test]
    fn month_window_boundary_is_inclusive() {
        let edge = order("9", "Edge Case", OrderStatus::Pending, Some(now() - Duration::days(30)));
        let past = order(
            "10",
            "Too Old",
            OrderStatus::Pending,
            Some(now() - Duration::days(30) - Duration::seconds(1)),
        );
        let criteria = FilterCriteria::default().with_date_range(DateRange::Month);

        let found = apply_filters_at(&[edge, past], &criteria, now());
        assert_eq!(ids(&found), vec!["9"]);
    }

    #[test]
    fn today_follows_the_utc_calendar_day_across_midnight() {
        let just_after_midnight = Utc.with_ymd_and_hms(2024, 3, 21, 0, 1, 0).unwrap();
        let orders = vec![
            order(
                "1",
                "Late Yesterday",
                OrderStatus::Pending,
                Some(Utc.with_ymd_and_hms(2024, 3, 20, 23, 59, 0).unwrap()),
            ),
            order(
                "2",
                "Early Today",
                OrderStatus::Pending,
                Some(Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 30).unwrap()),
            ),
        ];
        let criteria = FilterCriteria::default().with_date_range(DateRange::Today);

        assert_eq!(ids(&apply_filters_at(&orders, &criteria, just_after_midnight)), vec!["2"]);
    }

    #[test]
    fn payment_type_matches_ignoring_case() {
        let mut orders = sample_orders();
        orders[1].payment_type = "Online".to_string();

        let criteria = FilterCriteria::default().with_payment_type("online");
        assert_eq!(ids(&apply_filters_at(&orders, &criteria, now())), vec!["2"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let orders = sample_orders();
        let criteria = FilterCriteria::default()
            .with_query("j")
            .with_date_range(DateRange::Month);

        let once = apply_filters_at(&orders, &criteria, now());
        let twice = apply_filters_at(&once, &criteria, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn partners_search_by_vehicle_number_and_filter_by_status() {
        let partners = vec![
            partner("1", "Asha Verma", PartnerStatus::Pending, Some(now())),
            partner("2", "Ravi Kumar", PartnerStatus::Approved, Some(now())),
        ];

        let by_vehicle = FilterCriteria::default().with_query("ka01ab002");
        let found = apply_filters_at(&partners, &by_vehicle, now());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ravi Kumar");

        let pending = FilterCriteria::default().with_status(PartnerStatus::Pending);
        let found = apply_filters_at(&partners, &pending, now());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Asha Verma");
    }

    #[test]
    fn payment_filter_excludes_records_without_payment_type() {
        let partners = vec![partner("1", "Asha Verma", PartnerStatus::Pending, Some(now()))];
        let criteria = FilterCriteria::default().with_payment_type("COD");

        assert!(apply_filters_at(&partners, &criteria, now()).is_empty());
    }
}
