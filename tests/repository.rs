use std::collections::HashSet;

use chrono::NaiveDate;

use reservation_dashboard::domain::booking::BookingStatus;
use reservation_dashboard::domain::shop::ShopStatus;
use reservation_dashboard::domain::types::ShopId;
use reservation_dashboard::repository::{
    AlertReader, BookingReader, ConversationReader, InMemoryRepository, ShopReader,
};

fn repo() -> InMemoryRepository {
    InMemoryRepository::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap()
}

#[test]
fn test_seeded_shops() {
    let repo = repo();

    let shops = repo.list_shops().unwrap();
    assert_eq!(shops.len(), 12);

    let ids: HashSet<_> = shops.iter().map(|shop| shop.id).collect();
    assert_eq!(ids.len(), shops.len());

    let sakura = repo.get_shop_by_id(ShopId::new(1).unwrap()).unwrap().unwrap();
    assert_eq!(sakura.name.as_str(), "Sakura Sushi Tokyo");
    assert_eq!(sakura.status, ShopStatus::Active);

    assert!(repo.get_shop_by_id(ShopId::new(500).unwrap()).unwrap().is_none());
}

#[test]
fn test_bookings_belong_to_active_shops() {
    let repo = repo();
    let active: HashSet<_> = repo
        .list_shops()
        .unwrap()
        .into_iter()
        .filter(|shop| shop.status == ShopStatus::Active)
        .map(|shop| shop.id)
        .collect();

    let bookings = repo.list_bookings().unwrap();
    assert!(!bookings.is_empty());
    assert!(bookings.iter().all(|booking| active.contains(&booking.shop_id)));

    let codes: HashSet<_> = bookings.iter().map(|booking| booking.code).collect();
    assert_eq!(codes.len(), bookings.len());
}

#[test]
fn test_past_bookings_are_settled() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let bookings = repo().list_bookings().unwrap();

    assert!(
        bookings
            .iter()
            .filter(|booking| booking.reserved_for.date() < today)
            .all(|booking| !matches!(
                booking.status,
                BookingStatus::Pending | BookingStatus::Confirmed
            ))
    );
}

#[test]
fn test_per_shop_listings() {
    let repo = repo();
    let shop_id = ShopId::new(1).unwrap();

    let bookings = repo.list_bookings_for_shop(shop_id).unwrap();
    assert!(bookings.iter().all(|booking| booking.shop_id == shop_id));

    let conversations = repo.list_conversations_for_shop(shop_id).unwrap();
    assert!(
        conversations
            .iter()
            .all(|conversation| conversation.shop_id == shop_id)
    );
    assert_eq!(repo.list_conversations().unwrap().len(), 28);
}

#[test]
fn test_alerts_reference_known_shops() {
    let repo = repo();

    for alert in repo.list_alerts().unwrap() {
        if let Some(shop_id) = alert.shop_id {
            let shop = repo.get_shop_by_id(shop_id).unwrap().unwrap();
            assert_eq!(Some(shop.name), alert.shop_name);
        }
    }
}
