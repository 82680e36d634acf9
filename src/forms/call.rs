use chrono::{DateTime, NaiveDateTime, TimeDelta};
use serde::Deserialize;

/// Query string of the call page: the start instant as epoch milliseconds.
#[derive(Debug, Default, Deserialize)]
pub struct CallQueryForm {
    pub started: Option<String>,
}

impl CallQueryForm {
    /// Start instant of the call, if present, well formed and no more than
    /// `max_ahead` after `now`.
    pub fn started_at(&self, now: NaiveDateTime, max_ahead: TimeDelta) -> Option<NaiveDateTime> {
        let millis = self.started.as_deref()?.trim().parse::<i64>().ok()?;
        let started_at = DateTime::from_timestamp_millis(millis)?.naive_utc();
        if started_at.signed_duration_since(now) > max_ahead {
            log::debug!("Ignoring call start {started_at} in the future");
            return None;
        }
        Some(started_at)
    }
}

/// Encodes a start instant for [`CallQueryForm::started`].
pub fn started_param(started_at: NaiveDateTime) -> String {
    started_at.and_utc().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap()
    }

    fn max_ahead() -> TimeDelta {
        TimeDelta::seconds(7)
    }

    #[test]
    fn started_param_round_trips() {
        let at = now() + TimeDelta::milliseconds(5_250);
        let form = CallQueryForm {
            started: Some(started_param(at)),
        };
        assert_eq!(form.started_at(now(), max_ahead()), Some(at));
    }

    #[test]
    fn garbage_is_ignored() {
        let form = CallQueryForm {
            started: Some("soon".to_string()),
        };
        assert_eq!(form.started_at(now(), max_ahead()), None);
        assert_eq!(CallQueryForm::default().started_at(now(), max_ahead()), None);
    }

    #[test]
    fn far_future_start_is_ignored() {
        let form = CallQueryForm {
            started: Some("8210266876799999".to_string()),
        };
        assert_eq!(form.started_at(now(), max_ahead()), None);

        let tomorrow = CallQueryForm {
            started: Some(started_param(now() + TimeDelta::days(1))),
        };
        assert_eq!(tomorrow.started_at(now(), max_ahead()), None);
    }
}
