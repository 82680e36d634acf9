//! In-memory repository backed by a fixed dataset.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::alert::Alert;
use crate::domain::booking::Booking;
use crate::domain::conversation::Conversation;
use crate::domain::shop::Shop;
use crate::domain::types::ShopId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AlertReader, BookingReader, ConversationReader, ShopReader, seed};

/// Every record the dashboard knows about.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub shops: Vec<Shop>,
    pub bookings: Vec<Booking>,
    pub conversations: Vec<Conversation>,
    pub alerts: Vec<Alert>,
}

/// Read-only repository shared between request handlers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    data: Arc<Dataset>,
}

impl InMemoryRepository {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Repository filled with the demo dataset anchored at `today`.
    pub fn seeded(today: NaiveDate) -> RepositoryResult<Self> {
        let data = seed::demo_dataset(today)?;
        log::info!(
            "Seeded {} shops, {} bookings, {} conversations and {} alerts",
            data.shops.len(),
            data.bookings.len(),
            data.conversations.len(),
            data.alerts.len()
        );
        Ok(Self::new(data))
    }
}

impl ShopReader for InMemoryRepository {
    fn get_shop_by_id(&self, id: ShopId) -> RepositoryResult<Option<Shop>> {
        Ok(self.data.shops.iter().find(|shop| shop.id == id).cloned())
    }

    fn list_shops(&self) -> RepositoryResult<Vec<Shop>> {
        Ok(self.data.shops.clone())
    }
}

impl BookingReader for InMemoryRepository {
    fn list_bookings(&self) -> RepositoryResult<Vec<Booking>> {
        Ok(self.data.bookings.clone())
    }

    fn list_bookings_for_shop(&self, shop_id: ShopId) -> RepositoryResult<Vec<Booking>> {
        Ok(self
            .data
            .bookings
            .iter()
            .filter(|booking| booking.shop_id == shop_id)
            .cloned()
            .collect())
    }
}

impl ConversationReader for InMemoryRepository {
    fn list_conversations(&self) -> RepositoryResult<Vec<Conversation>> {
        Ok(self.data.conversations.clone())
    }

    fn list_conversations_for_shop(
        &self,
        shop_id: ShopId,
    ) -> RepositoryResult<Vec<Conversation>> {
        Ok(self
            .data
            .conversations
            .iter()
            .filter(|conversation| conversation.shop_id == shop_id)
            .cloned()
            .collect())
    }
}

impl AlertReader for InMemoryRepository {
    fn list_alerts(&self) -> RepositoryResult<Vec<Alert>> {
        Ok(self.data.alerts.clone())
    }
}
