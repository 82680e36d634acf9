//! Read access to the dashboard records.
//!
//! Records are served whole: filtering and pagination happen in
//! [`crate::collection`] on the caller's side.

use crate::{
    domain::{
        alert::Alert,
        booking::Booking,
        conversation::Conversation,
        shop::Shop,
        types::ShopId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod seed;

pub use memory::{Dataset, InMemoryRepository};

pub trait ShopReader {
    fn get_shop_by_id(&self, id: ShopId) -> RepositoryResult<Option<Shop>>;
    fn list_shops(&self) -> RepositoryResult<Vec<Shop>>;
}

pub trait BookingReader {
    fn list_bookings(&self) -> RepositoryResult<Vec<Booking>>;
    fn list_bookings_for_shop(&self, shop_id: ShopId) -> RepositoryResult<Vec<Booking>>;
}

pub trait ConversationReader {
    fn list_conversations(&self) -> RepositoryResult<Vec<Conversation>>;
    fn list_conversations_for_shop(&self, shop_id: ShopId)
    -> RepositoryResult<Vec<Conversation>>;
}

pub trait AlertReader {
    fn list_alerts(&self) -> RepositoryResult<Vec<Alert>>;
}
