//! Demo records served by [`super::InMemoryRepository`].
//!
//! Dates are relative to an anchor day so the dashboard always shows
//! bookings around "today".

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::domain::alert::{Alert, AlertLevel};
use crate::domain::booking::{Booking, BookingSource, BookingStatus};
use crate::domain::conversation::{Conversation, ConversationStatus};
use crate::domain::shop::{Shop, ShopStatus};
use crate::domain::types::{
    AlertId, AlertMessage, BookingId, ConversationId, PersonName, PhoneNumber, ReservationCode,
    ShopId, ShopName,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::memory::Dataset;

struct ShopSeed {
    name: &'static str,
    owner: &'static str,
    area: &'static str,
    cuisine: &'static str,
    phone: &'static str,
    seats: u32,
    status: ShopStatus,
    registered_days_ago: i64,
}

const SHOPS: &[ShopSeed] = &[
    ShopSeed {
        name: "Sakura Sushi Tokyo",
        owner: "Haruto Sato",
        area: "Shibuya",
        cuisine: "Sushi",
        phone: "+81 3-6384-9000",
        seats: 24,
        status: ShopStatus::Active,
        registered_days_ago: 120,
    },
    ShopSeed {
        name: "Milano Pasta House",
        owner: "Giulia Rossi",
        area: "Ginza",
        cuisine: "Italian",
        phone: "+81 3-3561-2200",
        seats: 40,
        status: ShopStatus::Active,
        registered_days_ago: 98,
    },
    ShopSeed {
        name: "Tempura Kondo",
        owner: "Kenji Kondo",
        area: "Ginza",
        cuisine: "Tempura",
        phone: "+81 3-5568-0923",
        seats: 12,
        status: ShopStatus::Active,
        registered_days_ago: 85,
    },
    ShopSeed {
        name: "Le Petit Bistro",
        owner: "Claire Martin",
        area: "Roppongi",
        cuisine: "French",
        phone: "+81 3-3405-1111",
        seats: 30,
        status: ShopStatus::Pending,
        registered_days_ago: 6,
    },
    ShopSeed {
        name: "Ramen Ichigo",
        owner: "Yuki Tanaka",
        area: "Shinjuku",
        cuisine: "Ramen",
        phone: "+81 3-3354-2020",
        seats: 18,
        status: ShopStatus::Active,
        registered_days_ago: 70,
    },
    ShopSeed {
        name: "Seoul Kitchen",
        owner: "Min-jun Park",
        area: "Shin-Okubo",
        cuisine: "Korean",
        phone: "+81 3-3209-5050",
        seats: 28,
        status: ShopStatus::Suspended,
        registered_days_ago: 200,
    },
    ShopSeed {
        name: "Taj Spice",
        owner: "Arjun Mehta",
        area: "Akasaka",
        cuisine: "Indian",
        phone: "+81 3-3585-7777",
        seats: 36,
        status: ShopStatus::Active,
        registered_days_ago: 45,
    },
    ShopSeed {
        name: "Yakitori Tori-en",
        owner: "Daiki Mori",
        area: "Ebisu",
        cuisine: "Yakitori",
        phone: "+81 3-3444-8888",
        seats: 20,
        status: ShopStatus::Active,
        registered_days_ago: 33,
    },
    ShopSeed {
        name: "Casa Lisboa",
        owner: "Ana Costa",
        area: "Nakameguro",
        cuisine: "Portuguese",
        phone: "+81 3-3711-4321",
        seats: 26,
        status: ShopStatus::Pending,
        registered_days_ago: 2,
    },
    ShopSeed {
        name: "Green Leaf Vegan",
        owner: "Emma Wilson",
        area: "Shimokitazawa",
        cuisine: "Vegan",
        phone: "+81 3-3412-6060",
        seats: 22,
        status: ShopStatus::Active,
        registered_days_ago: 15,
    },
    ShopSeed {
        name: "Sushi Zen Omakase",
        owner: "Takumi Ito",
        area: "Azabu",
        cuisine: "Sushi",
        phone: "+81 3-3583-9191",
        seats: 10,
        status: ShopStatus::Active,
        registered_days_ago: 160,
    },
    ShopSeed {
        name: "Dragon Dim Sum",
        owner: "Wei Chen",
        area: "Yokohama",
        cuisine: "Chinese",
        phone: "+81 45-681-2323",
        seats: 60,
        status: ShopStatus::Suspended,
        registered_days_ago: 300,
    },
];

const GUESTS: &[(&str, &str)] = &[
    ("Aiko Yamada", "+81 90-1234-5678"),
    ("John Smith", "+81 80-2345-6789"),
    ("Mei Suzuki", "+81 70-3456-7890"),
    ("Lucas Dubois", "+81 90-4567-8901"),
    ("Sofia Garcia", "+81 80-5678-9012"),
    ("Ren Takahashi", "+81 90-6789-0123"),
    ("Hannah Becker", "+81 70-7890-1234"),
    ("Sota Watanabe", "+81 80-8901-2345"),
    ("Olivia Brown", "+81 90-9012-3456"),
    ("Kaito Nakamura", "+81 80-0123-4567"),
];

const NOTES: &[Option<&str>] = &[
    None,
    Some("Window seat please"),
    None,
    Some("Birthday dinner"),
    Some("Allergy: shellfish"),
    None,
    Some("High chair needed"),
];

const BOOKING_COUNT: usize = 36;
const CONVERSATION_COUNT: usize = 28;

fn at(day: NaiveDate, hour: u32, minute: u32) -> RepositoryResult<NaiveDateTime> {
    day.and_hms_opt(hour, minute, 0)
        .ok_or_else(|| RepositoryError::Unexpected(format!("invalid seed time {hour}:{minute}")))
}

fn shops(today: NaiveDate) -> RepositoryResult<Vec<Shop>> {
    SHOPS
        .iter()
        .zip(1..)
        .map(|(seed, id)| {
            Ok(Shop {
                id: ShopId::new(id)?,
                name: ShopName::new(seed.name)?,
                owner_name: PersonName::new(seed.owner)?,
                area: seed.area.to_string(),
                cuisine: seed.cuisine.to_string(),
                phone: PhoneNumber::new(seed.phone)?,
                seats: seed.seats,
                status: seed.status,
                registered_at: at(today - TimeDelta::days(seed.registered_days_ago), 10, 0)?,
            })
        })
        .collect()
}

fn booking_status(index: usize, in_past: bool) -> BookingStatus {
    match (in_past, index % 6) {
        (true, 0) => BookingStatus::NoShow,
        (true, 1) => BookingStatus::Cancelled,
        (true, _) => BookingStatus::Seated,
        (false, 0) => BookingStatus::Pending,
        (false, 1) => BookingStatus::Cancelled,
        (false, _) => BookingStatus::Confirmed,
    }
}

fn bookings(today: NaiveDate, shops: &[Shop]) -> RepositoryResult<Vec<Booking>> {
    let open_shops: Vec<&Shop> = shops
        .iter()
        .filter(|shop| shop.status == ShopStatus::Active)
        .collect();
    if open_shops.is_empty() {
        return Ok(Vec::new());
    }

    (0..BOOKING_COUNT)
        .map(|index| {
            let shop = open_shops[index % open_shops.len()];
            let (guest, phone) = GUESTS[index % GUESTS.len()];
            let day_offset = (index % 15) as i64 - 7;
            let reserved_for = at(
                today + TimeDelta::days(day_offset),
                17 + (index % 5) as u32,
                if index % 2 == 0 { 0 } else { 30 },
            )?;
            let source = BookingSource::ALL[index % BookingSource::ALL.len()];

            Ok(Booking {
                id: BookingId::new(index as i32 + 1)?,
                code: ReservationCode::new(),
                shop_id: shop.id,
                shop_name: shop.name.clone(),
                guest_name: PersonName::new(guest)?,
                phone: PhoneNumber::new(phone)?,
                party_size: 2 + (index % 7) as u32,
                source,
                status: booking_status(index, day_offset < 0),
                note: NOTES[index % NOTES.len()].map(str::to_string),
                reserved_for,
                created_at: reserved_for - TimeDelta::days(3 + (index % 10) as i64),
            })
        })
        .collect()
}

fn conversation_status(index: usize) -> ConversationStatus {
    if index == 0 {
        ConversationStatus::InProgress
    } else if index % 7 == 0 {
        ConversationStatus::Missed
    } else if index % 5 == 0 {
        ConversationStatus::Transferred
    } else {
        ConversationStatus::Completed
    }
}

fn conversations(
    today: NaiveDate,
    shops: &[Shop],
    bookings: &[Booking],
) -> RepositoryResult<Vec<Conversation>> {
    if shops.is_empty() {
        return Ok(Vec::new());
    }

    (0..CONVERSATION_COUNT)
        .map(|index| {
            let status = conversation_status(index);
            let booking = bookings
                .get(index)
                .filter(|booking| booking.source == BookingSource::AiCall)
                .filter(|_| status == ConversationStatus::Completed);
            let shop = match booking {
                Some(booking) => shops
                    .iter()
                    .find(|shop| shop.id == booking.shop_id)
                    .ok_or(RepositoryError::NotFound)?,
                None => &shops[index % shops.len()],
            };
            let (caller, phone) = GUESTS[(index * 3) % GUESTS.len()];

            let summary = match (status, booking) {
                (_, Some(booking)) => format!(
                    "Reserved a table for {} on {}",
                    booking.party_size,
                    booking.reserved_for.format("%b %d at %H:%M")
                ),
                (ConversationStatus::InProgress, None) => {
                    "Asking about tonight's availability".to_string()
                }
                (ConversationStatus::Missed, None) => {
                    "Caller hung up before the greeting".to_string()
                }
                (ConversationStatus::Transferred, None) => {
                    "Requested a private room, transferred to staff".to_string()
                }
                (ConversationStatus::Completed, None) => match index % 3 {
                    0 => "Asked about opening hours".to_string(),
                    1 => "Asked whether a vegan menu is available".to_string(),
                    _ => "Changed an existing reservation time".to_string(),
                },
            };

            let duration_secs = match status {
                ConversationStatus::Missed => 4 + (index % 5) as u32,
                _ => 45 + (index as u32 * 37) % 240,
            };

            Ok(Conversation {
                id: ConversationId::new(index as i32 + 1)?,
                shop_id: shop.id,
                shop_name: shop.name.clone(),
                caller_name: PersonName::new(caller)?,
                phone: PhoneNumber::new(phone)?,
                summary,
                status,
                duration_secs,
                booking_id: booking.map(|booking| booking.id),
                started_at: at(
                    today - TimeDelta::days((index % 10) as i64),
                    11 + (index % 9) as u32,
                    ((index * 7) % 60) as u32,
                )?,
            })
        })
        .collect()
}

fn alerts(today: NaiveDate, shops: &[Shop]) -> RepositoryResult<Vec<Alert>> {
    let table: &[(AlertLevel, &str, Option<usize>, i64, bool)] = &[
        (AlertLevel::Critical, "Monthly plan payment failed", Some(5), 0, false),
        (AlertLevel::Warning, "AI receptionist missed 3 calls in a row", Some(4), 0, false),
        (AlertLevel::Info, "New shop registration awaiting review", Some(8), 2, false),
        (AlertLevel::Info, "New shop registration awaiting review", Some(3), 6, false),
        (AlertLevel::Warning, "No-show rate above 15% this week", Some(1), 1, false),
        (AlertLevel::Info, "Menu updated", Some(9), 3, true),
        (AlertLevel::Critical, "Call provider latency above threshold", None, 4, true),
    ];

    table
        .iter()
        .zip(1..)
        .map(|(&(level, message, shop_index, days_ago, resolved), id)| {
            let shop = shop_index.and_then(|index| shops.get(index));
            Ok(Alert {
                id: AlertId::new(id)?,
                level,
                message: AlertMessage::new(message)?,
                shop_id: shop.map(|shop| shop.id),
                shop_name: shop.map(|shop| shop.name.clone()),
                resolved,
                created_at: at(today - TimeDelta::days(days_ago), 9 + id as u32, 15)?,
            })
        })
        .collect()
}

/// Builds the demo dataset with dates around `today`.
pub fn demo_dataset(today: NaiveDate) -> RepositoryResult<Dataset> {
    let shops = shops(today)?;
    let bookings = bookings(today, &shops)?;
    let conversations = conversations(today, &shops, &bookings)?;
    let alerts = alerts(today, &shops)?;

    Ok(Dataset {
        shops,
        bookings,
        conversations,
        alerts,
    })
}
