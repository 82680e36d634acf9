//! Fixed rendering tables for badges and stat card icons.

use serde::Serialize;

use crate::domain::StatusKind;
use crate::domain::alert::AlertLevel;
use crate::domain::booking::BookingStatus;
use crate::domain::call::CallPhase;
use crate::domain::conversation::ConversationStatus;
use crate::domain::shop::ShopStatus;

/// Colour variant of a badge or card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Secondary,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
            Tone::Secondary => "secondary",
        }
    }
}

/// Icon shown on a dashboard stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Store,
    Calendar,
    Phone,
    Alert,
}

impl StatIcon {
    pub fn icon_name(self) -> &'static str {
        match self {
            StatIcon::Store => "bi-shop",
            StatIcon::Calendar => "bi-calendar-check",
            StatIcon::Phone => "bi-telephone",
            StatIcon::Alert => "bi-exclamation-triangle",
        }
    }
}

impl From<ShopStatus> for Tone {
    fn from(status: ShopStatus) -> Self {
        match status {
            ShopStatus::Active => Tone::Success,
            ShopStatus::Pending => Tone::Warning,
            ShopStatus::Suspended => Tone::Danger,
        }
    }
}

impl From<BookingStatus> for Tone {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => Tone::Warning,
            BookingStatus::Confirmed => Tone::Success,
            BookingStatus::Seated => Tone::Info,
            BookingStatus::Cancelled => Tone::Secondary,
            BookingStatus::NoShow => Tone::Danger,
        }
    }
}

impl From<ConversationStatus> for Tone {
    fn from(status: ConversationStatus) -> Self {
        match status {
            ConversationStatus::Completed => Tone::Success,
            ConversationStatus::InProgress => Tone::Info,
            ConversationStatus::Missed => Tone::Danger,
            ConversationStatus::Transferred => Tone::Warning,
        }
    }
}

impl From<AlertLevel> for Tone {
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Info => Tone::Info,
            AlertLevel::Warning => Tone::Warning,
            AlertLevel::Critical => Tone::Danger,
        }
    }
}

impl From<CallPhase> for Tone {
    fn from(phase: CallPhase) -> Self {
        match phase {
            CallPhase::Idle => Tone::Secondary,
            CallPhase::Connecting => Tone::Warning,
            CallPhase::Active => Tone::Info,
            CallPhase::Completed => Tone::Success,
        }
    }
}

/// Badge as rendered by the templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl StatusBadge {
    pub fn new(label: &'static str, tone: Tone) -> Self {
        Self {
            label,
            class: tone.css_class(),
        }
    }

    pub fn of<S>(status: S) -> Self
    where
        S: StatusKind + Into<Tone>,
    {
        Self::new(status.label(), status.into())
    }
}

impl From<CallPhase> for StatusBadge {
    fn from(phase: CallPhase) -> Self {
        StatusBadge::new(phase.label(), phase.into())
    }
}

/// Summary tile on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub icon: &'static str,
    pub class: &'static str,
}

impl StatCard {
    pub fn new(title: &'static str, value: usize, icon: StatIcon, tone: Tone) -> Self {
        Self {
            title,
            value,
            icon: icon.icon_name(),
            class: tone.css_class(),
        }
    }
}

/// Drop-down entry for a status filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Options for a status drop-down, starting with the "all" sentinel.
pub fn status_options<S: StatusKind>(selected: &str) -> Vec<StatusOption> {
    std::iter::once(StatusOption {
        key: "all",
        label: "All statuses",
        selected: selected == "all",
    })
    .chain(S::all().iter().map(|status| StatusOption {
        key: status.key(),
        label: status.label(),
        selected: status.key() == selected,
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_use_the_status_table() {
        assert_eq!(
            StatusBadge::of(BookingStatus::NoShow),
            StatusBadge {
                label: "No-show",
                class: "danger"
            }
        );
        assert_eq!(StatusBadge::of(ShopStatus::Active).class, "success");
        assert_eq!(StatusBadge::from(CallPhase::Connecting).class, "warning");
    }

    #[test]
    fn status_options_mark_the_selection() {
        let options = status_options::<ShopStatus>("pending");
        assert_eq!(options.len(), ShopStatus::ALL.len() + 1);
        assert_eq!(options[0].key, "all");
        let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.key).collect();
        assert_eq!(selected, vec!["pending"]);
    }

    #[test]
    fn stat_card_resolves_icon_and_class() {
        let card = StatCard::new("Open alerts", 3, StatIcon::Alert, Tone::Danger);
        assert_eq!(card.icon, "bi-exclamation-triangle");
        assert_eq!(card.class, "danger");
    }
}
