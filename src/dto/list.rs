use chrono::NaiveDate;
use serde::Serialize;

use crate::dto::display::StatusOption;

/// Filter values echoed back into a list screen's filter bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListFilters {
    pub search: String,
    /// Selected status key, `all` when unfiltered.
    pub status: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub per_page: usize,
    pub page_sizes: &'static [usize],
    pub status_options: Vec<StatusOption>,
}
