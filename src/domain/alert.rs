use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::collection::Filterable;
use crate::domain::types::{AlertId, AlertMessage, ShopId, ShopName};

status_enum! {
    /// Severity of a dashboard alert.
    AlertLevel {
        Info => ("info", "Info"),
        Warning => ("warning", "Warning"),
        Critical => ("critical", "Critical"),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub level: AlertLevel,
    pub message: AlertMessage,
    pub shop_id: Option<ShopId>,
    pub shop_name: Option<ShopName>,
    pub resolved: bool,
    pub created_at: NaiveDateTime,
}

impl Filterable for Alert {
    type Status = AlertLevel;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.message.as_str()];
        if let Some(shop_name) = &self.shop_name {
            fields.push(shop_name.as_str());
        }
        fields
    }

    fn status(&self) -> &AlertLevel {
        &self.level
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.created_at
    }
}
