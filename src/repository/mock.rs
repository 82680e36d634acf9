//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::alert::Alert;
use crate::domain::booking::Booking;
use crate::domain::conversation::Conversation;
use crate::domain::shop::Shop;
use crate::domain::types::ShopId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AlertReader, BookingReader, ConversationReader, ShopReader};

mock! {
    pub Repository {}

    impl ShopReader for Repository {
        fn get_shop_by_id(&self, id: ShopId) -> RepositoryResult<Option<Shop>>;
        fn list_shops(&self) -> RepositoryResult<Vec<Shop>>;
    }

    impl BookingReader for Repository {
        fn list_bookings(&self) -> RepositoryResult<Vec<Booking>>;
        fn list_bookings_for_shop(&self, shop_id: ShopId) -> RepositoryResult<Vec<Booking>>;
    }

    impl ConversationReader for Repository {
        fn list_conversations(&self) -> RepositoryResult<Vec<Conversation>>;
        fn list_conversations_for_shop(
            &self,
            shop_id: ShopId,
        ) -> RepositoryResult<Vec<Conversation>>;
    }

    impl AlertReader for Repository {
        fn list_alerts(&self) -> RepositoryResult<Vec<Alert>>;
    }
}
