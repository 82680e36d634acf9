use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::collection::Filterable;
use crate::domain::types::{BookingId, PersonName, PhoneNumber, ReservationCode, ShopId, ShopName};

status_enum! {
    /// Lifecycle of a table reservation.
    BookingStatus {
        Pending => ("pending", "Pending"),
        Confirmed => ("confirmed", "Confirmed"),
        Seated => ("seated", "Seated"),
        Cancelled => ("cancelled", "Cancelled"),
        NoShow => ("no_show", "No-show"),
    }
}

status_enum! {
    /// Channel a booking arrived through.
    BookingSource {
        AiCall => ("ai_call", "AI call"),
        Web => ("web", "Web"),
        WalkIn => ("walk_in", "Walk-in"),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub code: ReservationCode,
    pub shop_id: ShopId,
    pub shop_name: ShopName,
    pub guest_name: PersonName,
    pub phone: PhoneNumber,
    pub party_size: u32,
    pub source: BookingSource,
    pub status: BookingStatus,
    pub note: Option<String>,
    /// Date and time the table is reserved for.
    pub reserved_for: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Booking {
    /// Bookings that still hold a table.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.reserved_for >= now
            && matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl Filterable for Booking {
    type Status = BookingStatus;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.guest_name.as_str(),
            self.phone.as_str(),
            self.shop_name.as_str(),
        ];
        if let Some(note) = &self.note {
            fields.push(note);
        }
        fields
    }

    fn status(&self) -> &BookingStatus {
        &self.status
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.reserved_for
    }
}
