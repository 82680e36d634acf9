use serde::Serialize;

use crate::domain::booking::Booking;
use crate::dto::display::StatusBadge;
use crate::dto::list::ListFilters;
use crate::pagination::Paginated;

#[derive(Debug, Clone, Serialize)]
pub struct BookingRow {
    pub booking: Booking,
    /// Short reservation code printed on confirmations.
    pub code: String,
    pub source: &'static str,
    pub badge: StatusBadge,
}

impl From<Booking> for BookingRow {
    fn from(booking: Booking) -> Self {
        Self {
            code: booking.code.short(),
            source: booking.source.label(),
            badge: StatusBadge::of(booking.status),
            booking,
        }
    }
}

/// Data required to render the bookings index page.
#[derive(Debug)]
pub struct BookingsPageData {
    pub bookings: Paginated<BookingRow>,
    pub filters: ListFilters,
}
