use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::engine::record::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Status,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Selecting the active field again flips direction; a new field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.reversed(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Case-insensitive ordering; on a case-only tie lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare<R: Record>(a: &R, b: &R, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(a.sort_name(), b.sort_name()),
        SortField::Status => a.status_label().cmp(b.status_label()),
        // A missing timestamp sorts as the oldest possible date.
        SortField::Date => a.created_at().cmp(&b.created_at()),
    }
}

pub fn apply_sort<R: Record>(list: &[R], field: SortField, direction: SortDirection) -> Vec<R> {
    let mut sorted = list.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| compare(a, b, field)),
        SortDirection::Desc => sorted.sort_by(|a, b| compare(a, b, field).reverse()),
    }
    sorted
}
