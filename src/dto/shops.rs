//! DTOs shaped for the shop list and shop detail templates.

use serde::Serialize;

use crate::domain::shop::Shop;
use crate::dto::bookings::BookingRow;
use crate::dto::conversations::ConversationRow;
use crate::dto::display::StatusBadge;
use crate::dto::list::ListFilters;
use crate::pagination::Paginated;

#[derive(Debug, Clone, Serialize)]
pub struct ShopRow {
    pub shop: Shop,
    pub badge: StatusBadge,
}

impl From<Shop> for ShopRow {
    fn from(shop: Shop) -> Self {
        Self {
            badge: StatusBadge::of(shop.status),
            shop,
        }
    }
}

/// Data required to render the shops index page.
#[derive(Debug)]
pub struct ShopsPageData {
    pub shops: Paginated<ShopRow>,
    pub filters: ListFilters,
}

/// Aggregated data required to render the shop details page.
#[derive(Debug)]
pub struct ShopPageData {
    pub shop: ShopRow,
    pub upcoming_bookings: Vec<BookingRow>,
    pub recent_conversations: Vec<ConversationRow>,
    pub total_bookings: usize,
    pub total_conversations: usize,
    /// Whether the AI call demo can be started for this shop.
    pub can_call: bool,
}
