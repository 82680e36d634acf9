//! Services backing the shop list and shop detail screens.

use chrono::NaiveDateTime;

use crate::domain::shop::ShopStatus;
use crate::domain::types::ShopId;
use crate::dto::shops::{ShopPageData, ShopRow, ShopsPageData};
use crate::forms::list::ListQuery;
use crate::repository::{BookingReader, ConversationReader, ShopReader};
use crate::services::{ServiceError, ServiceResult, paginate_list};

/// Number of bookings and conversations previewed on the shop page.
const PREVIEW_LEN: usize = 5;

/// Loads one page of shops, ordered by name.
pub fn load_shops_page<R>(
    repo: &R,
    query: &ListQuery,
    default_per_page: usize,
) -> ServiceResult<ShopsPageData>
where
    R: ShopReader + ?Sized,
{
    let mut shops = repo.list_shops().map_err(|err| {
        log::error!("Failed to list shops: {err}");
        err
    })?;
    shops.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));

    let (page, filters) = paginate_list(shops, query, default_per_page);

    Ok(ShopsPageData {
        shops: page.map(ShopRow::from),
        filters,
    })
}

/// Loads a shop with its next bookings and latest conversations.
pub fn load_shop_page<R>(repo: &R, shop_id: i32, now: NaiveDateTime) -> ServiceResult<ShopPageData>
where
    R: ShopReader + BookingReader + ConversationReader + ?Sized,
{
    let shop_id = ShopId::new(shop_id)?;

    let shop = repo
        .get_shop_by_id(shop_id)
        .map_err(|err| {
            log::error!("Failed to load shop {shop_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let bookings = repo.list_bookings_for_shop(shop_id)?;
    let total_bookings = bookings.len();
    let mut upcoming: Vec<_> = bookings
        .into_iter()
        .filter(|booking| booking.is_upcoming(now))
        .collect();
    upcoming.sort_by_key(|booking| booking.reserved_for);
    upcoming.truncate(PREVIEW_LEN);

    let mut conversations = repo.list_conversations_for_shop(shop_id)?;
    let total_conversations = conversations.len();
    conversations.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    conversations.truncate(PREVIEW_LEN);

    Ok(ShopPageData {
        can_call: shop.status == ShopStatus::Active,
        shop: ShopRow::from(shop),
        upcoming_bookings: upcoming.into_iter().map(Into::into).collect(),
        recent_conversations: conversations.into_iter().map(Into::into).collect(),
        total_bookings,
        total_conversations,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::repository::InMemoryRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn shops_are_sorted_by_name() {
        let repo = InMemoryRepository::seeded(today()).unwrap();
        let query = ListQuery::default();

        let data = load_shops_page(&repo, &query, 20).unwrap();

        let names: Vec<_> = data
            .shops
            .items
            .iter()
            .map(|row| row.shop.name.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(data.shops.total_items, 12);
    }

    #[test]
    fn repository_failures_propagate() {
        let mut repo = MockRepository::new();
        repo.expect_list_shops()
            .returning(|| Err(RepositoryError::Unexpected("boom".to_string())));

        let result = load_shops_page(&repo, &ListQuery::default(), 10);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn missing_shop_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_shop_by_id().returning(|_| Ok(None));

        let result = load_shop_page(&repo, 99, now());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn invalid_id_is_rejected() {
        let repo = MockRepository::new();

        let result = load_shop_page(&repo, 0, now());

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn shop_page_previews_upcoming_bookings() {
        let repo = InMemoryRepository::seeded(today()).unwrap();

        let data = load_shop_page(&repo, 1, now()).unwrap();

        assert_eq!(data.shop.shop.name.as_str(), "Sakura Sushi Tokyo");
        assert!(data.can_call);
        assert!(data.upcoming_bookings.len() <= PREVIEW_LEN);
        assert!(
            data.upcoming_bookings
                .iter()
                .all(|row| row.booking.is_upcoming(now()))
        );
        assert!(
            data.upcoming_bookings
                .windows(2)
                .all(|w| w[0].booking.reserved_for <= w[1].booking.reserved_for)
        );
        assert!(
            data.recent_conversations
                .windows(2)
                .all(|w| w[0].conversation.started_at >= w[1].conversation.started_at)
        );
    }
}
