use serde::Serialize;

use crate::domain::alert::Alert;
use crate::dto::bookings::BookingRow;
use crate::dto::display::{StatCard, StatusBadge};

#[derive(Debug, Clone, Serialize)]
pub struct AlertRow {
    pub alert: Alert,
    pub badge: StatusBadge,
}

impl From<Alert> for AlertRow {
    fn from(alert: Alert) -> Self {
        Self {
            badge: StatusBadge::of(alert.level),
            alert,
        }
    }
}

/// Data required to render the dashboard overview.
#[derive(Debug)]
pub struct DashboardPageData {
    pub stats: Vec<StatCard>,
    /// Latest unresolved alerts, newest first.
    pub alerts: Vec<AlertRow>,
    /// Next bookings still holding a table, soonest first.
    pub upcoming_bookings: Vec<BookingRow>,
}
