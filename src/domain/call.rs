//! Simulated AI receptionist call.
//!
//! There is no telephony behind this: a call is a start instant plus two
//! fixed delays, and its phase is derived from how much time has passed.

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::domain::types::ShopId;

/// Phase of a simulated call: `Idle -> Connecting -> Active -> Completed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPhase {
    Idle,
    Connecting,
    Active,
    Completed,
}

impl CallPhase {
    pub fn label(self) -> &'static str {
        match self {
            CallPhase::Idle => "Ready to call",
            CallPhase::Connecting => "Connecting…",
            CallPhase::Active => "AI receptionist on the line",
            CallPhase::Completed => "Call completed",
        }
    }

    /// True while the phase can still change on its own.
    pub fn is_running(self) -> bool {
        matches!(self, CallPhase::Connecting | CallPhase::Active)
    }
}

/// Fixed delays driving the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallTimings {
    /// Time spent connecting before the call becomes active.
    pub connect_delay: TimeDelta,
    /// Time the call stays active before completing.
    pub complete_delay: TimeDelta,
}

impl CallTimings {
    pub fn from_secs(connect_secs: u32, complete_secs: u32) -> Self {
        Self {
            connect_delay: TimeDelta::seconds(i64::from(connect_secs)),
            complete_delay: TimeDelta::seconds(i64::from(complete_secs)),
        }
    }

    /// Time from start until the call completes, saturating on overflow.
    pub fn total(&self) -> TimeDelta {
        self.connect_delay
            .checked_add(&self.complete_delay)
            .unwrap_or(TimeDelta::MAX)
    }
}

impl Default for CallTimings {
    fn default() -> Self {
        Self::from_secs(2, 5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSession {
    pub shop_id: ShopId,
    pub started_at: Option<NaiveDateTime>,
}

impl CallSession {
    pub fn idle(shop_id: ShopId) -> Self {
        Self {
            shop_id,
            started_at: None,
        }
    }

    pub fn started(shop_id: ShopId, started_at: NaiveDateTime) -> Self {
        Self {
            shop_id,
            started_at: Some(started_at),
        }
    }

    /// Phase of the call at `now`. A start instant in the future counts as connecting.
    pub fn phase_at(&self, now: NaiveDateTime, timings: &CallTimings) -> CallPhase {
        let Some(started_at) = self.started_at else {
            return CallPhase::Idle;
        };

        let elapsed = now - started_at;
        if elapsed < timings.connect_delay {
            CallPhase::Connecting
        } else if elapsed < timings.total() {
            CallPhase::Active
        } else {
            CallPhase::Completed
        }
    }

    /// Instant of the next phase change, if one is still pending at `now`.
    pub fn next_transition_at(
        &self,
        now: NaiveDateTime,
        timings: &CallTimings,
    ) -> Option<NaiveDateTime> {
        let started_at = self.started_at?;
        let delay = match self.phase_at(now, timings) {
            CallPhase::Connecting => timings.connect_delay,
            CallPhase::Active => timings.total(),
            CallPhase::Idle | CallPhase::Completed => return None,
        };
        started_at.checked_add_signed(delay)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    fn shop() -> ShopId {
        ShopId::new(1).unwrap()
    }

    #[test]
    fn never_started_call_is_idle() {
        let session = CallSession::idle(shop());
        assert_eq!(session.phase_at(t0(), &CallTimings::default()), CallPhase::Idle);
        assert_eq!(session.next_transition_at(t0(), &CallTimings::default()), None);
    }

    #[test]
    fn phases_follow_the_fixed_delays() {
        let timings = CallTimings::default();
        let session = CallSession::started(shop(), t0());
        let at = |ms: i64| t0() + TimeDelta::milliseconds(ms);

        assert_eq!(session.phase_at(at(0), &timings), CallPhase::Connecting);
        assert_eq!(session.phase_at(at(1_999), &timings), CallPhase::Connecting);
        assert_eq!(session.phase_at(at(2_000), &timings), CallPhase::Active);
        assert_eq!(session.phase_at(at(6_999), &timings), CallPhase::Active);
        assert_eq!(session.phase_at(at(7_000), &timings), CallPhase::Completed);
        assert_eq!(session.phase_at(at(60_000), &timings), CallPhase::Completed);
    }

    #[test]
    fn future_start_counts_as_connecting() {
        let session = CallSession::started(shop(), t0() + TimeDelta::seconds(30));
        assert_eq!(
            session.phase_at(t0(), &CallTimings::default()),
            CallPhase::Connecting
        );
    }

    #[test]
    fn next_transition_points_at_the_pending_change() {
        let timings = CallTimings::from_secs(1, 3);
        let session = CallSession::started(shop(), t0());

        assert_eq!(
            session.next_transition_at(t0(), &timings),
            Some(t0() + TimeDelta::seconds(1))
        );
        assert_eq!(
            session.next_transition_at(t0() + TimeDelta::seconds(2), &timings),
            Some(t0() + TimeDelta::seconds(4))
        );
        assert_eq!(
            session.next_transition_at(t0() + TimeDelta::seconds(4), &timings),
            None
        );
        assert!(!session.phase_at(t0() + TimeDelta::seconds(4), &timings).is_running());
    }

    #[test]
    fn start_at_the_end_of_time_has_no_transition() {
        let session = CallSession::started(shop(), NaiveDateTime::MAX);

        assert_eq!(
            session.phase_at(t0(), &CallTimings::default()),
            CallPhase::Connecting
        );
        assert_eq!(session.next_transition_at(t0(), &CallTimings::default()), None);
    }
}
