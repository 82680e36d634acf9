//! Service backing the dashboard overview.

use chrono::NaiveDateTime;

use crate::domain::alert::AlertLevel;
use crate::domain::shop::ShopStatus;
use crate::dto::dashboard::DashboardPageData;
use crate::dto::display::{StatCard, StatIcon, Tone};
use crate::repository::{AlertReader, BookingReader, ConversationReader, ShopReader};
use crate::services::ServiceResult;

const ALERTS_SHOWN: usize = 5;
const UPCOMING_SHOWN: usize = 5;

/// Loads the stat cards, open alerts and upcoming bookings shown on `/`.
pub fn load_dashboard<R>(repo: &R, now: NaiveDateTime) -> ServiceResult<DashboardPageData>
where
    R: ShopReader + BookingReader + ConversationReader + AlertReader + ?Sized,
{
    let today = now.date();

    let shops = repo.list_shops().map_err(|err| {
        log::error!("Failed to list shops: {err}");
        err
    })?;
    let bookings = repo.list_bookings().map_err(|err| {
        log::error!("Failed to list bookings: {err}");
        err
    })?;
    let conversations = repo.list_conversations().map_err(|err| {
        log::error!("Failed to list conversations: {err}");
        err
    })?;
    let alerts = repo.list_alerts().map_err(|err| {
        log::error!("Failed to list alerts: {err}");
        err
    })?;

    let active_shops = shops
        .iter()
        .filter(|shop| shop.status == ShopStatus::Active)
        .count();
    let bookings_today = bookings
        .iter()
        .filter(|booking| booking.reserved_for.date() == today)
        .count();
    let conversations_today = conversations
        .iter()
        .filter(|conversation| conversation.started_at.date() == today)
        .count();

    let mut open_alerts: Vec<_> = alerts.into_iter().filter(|alert| !alert.resolved).collect();
    open_alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let alert_tone = if open_alerts
        .iter()
        .any(|alert| alert.level == AlertLevel::Critical)
    {
        Tone::Danger
    } else {
        Tone::Warning
    };

    let stats = vec![
        StatCard::new("Active shops", active_shops, StatIcon::Store, Tone::Success),
        StatCard::new("Bookings today", bookings_today, StatIcon::Calendar, Tone::Info),
        StatCard::new(
            "Conversations today",
            conversations_today,
            StatIcon::Phone,
            Tone::Info,
        ),
        StatCard::new("Open alerts", open_alerts.len(), StatIcon::Alert, alert_tone),
    ];

    let mut upcoming: Vec<_> = bookings
        .into_iter()
        .filter(|booking| booking.is_upcoming(now))
        .collect();
    upcoming.sort_by_key(|booking| booking.reserved_for);

    Ok(DashboardPageData {
        stats,
        alerts: open_alerts
            .into_iter()
            .take(ALERTS_SHOWN)
            .map(Into::into)
            .collect(),
        upcoming_bookings: upcoming
            .into_iter()
            .take(UPCOMING_SHOWN)
            .map(Into::into)
            .collect(),
    })
}
