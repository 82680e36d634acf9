use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::collection::Filterable;
use crate::domain::types::{PersonName, PhoneNumber, ShopId, ShopName};

status_enum! {
    /// Onboarding state of a restaurant.
    ShopStatus {
        Active => ("active", "Active"),
        Pending => ("pending", "Pending review"),
        Suspended => ("suspended", "Suspended"),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    pub id: ShopId,
    pub name: ShopName,
    pub owner_name: PersonName,
    pub area: String,
    pub cuisine: String,
    pub phone: PhoneNumber,
    pub seats: u32,
    pub status: ShopStatus,
    pub registered_at: NaiveDateTime,
}

impl Filterable for Shop {
    type Status = ShopStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.owner_name.as_str(),
            self.area.as_str(),
            self.cuisine.as_str(),
            self.phone.as_str(),
        ]
    }

    fn status(&self) -> &ShopStatus {
        &self.status
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.registered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keys_round_trip() {
        for status in ShopStatus::ALL {
            assert_eq!(status.key().parse::<ShopStatus>(), Ok(*status));
        }
        assert!("closed".parse::<ShopStatus>().is_err());
        assert_eq!(ShopStatus::Pending.to_string(), "pending");
        assert_eq!(ShopStatus::Pending.label(), "Pending review");
    }
}
