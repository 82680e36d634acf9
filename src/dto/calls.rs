use serde::Serialize;

use crate::domain::call::CallPhase;
use crate::domain::shop::Shop;
use crate::dto::display::StatusBadge;

/// Data required to render the AI call demo page.
#[derive(Debug, Serialize)]
pub struct CallPageData {
    pub shop: Shop,
    pub phase: CallPhase,
    pub badge: StatusBadge,
    /// Start instant as passed back in the query string.
    pub started: Option<String>,
    pub elapsed_secs: Option<i64>,
    /// Seconds until the page should reload to pick up the next phase.
    pub refresh_secs: Option<i64>,
}
