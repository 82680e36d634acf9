use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::collection::Filterable;
use crate::domain::types::{BookingId, ConversationId, PersonName, PhoneNumber, ShopId, ShopName};

status_enum! {
    /// Outcome of a call handled by the AI receptionist.
    ConversationStatus {
        Completed => ("completed", "Completed"),
        InProgress => ("in_progress", "In progress"),
        Missed => ("missed", "Missed"),
        Transferred => ("transferred", "Transferred to staff"),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub shop_id: ShopId,
    pub shop_name: ShopName,
    pub caller_name: PersonName,
    pub phone: PhoneNumber,
    pub summary: String,
    pub status: ConversationStatus,
    pub duration_secs: u32,
    /// Booking created during the call, if any.
    pub booking_id: Option<BookingId>,
    pub started_at: NaiveDateTime,
}

impl Conversation {
    /// Call length formatted as `m:ss`.
    pub fn duration_label(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

impl Filterable for Conversation {
    type Status = ConversationStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.caller_name.as_str(),
            self.phone.as_str(),
            self.summary.as_str(),
            self.shop_name.as_str(),
        ]
    }

    fn status(&self) -> &ConversationStatus {
        &self.status
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.started_at
    }
}
