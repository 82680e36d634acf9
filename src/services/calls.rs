//! Services driving the simulated AI receptionist call.

use chrono::NaiveDateTime;

use crate::domain::call::{CallSession, CallTimings};
use crate::domain::shop::ShopStatus;
use crate::domain::types::ShopId;
use crate::dto::calls::CallPageData;
use crate::forms::call::started_param;
use crate::repository::ShopReader;
use crate::services::{ServiceError, ServiceResult};

/// Starts a call to an active shop at `now`.
pub fn start_call<R>(repo: &R, shop_id: i32, now: NaiveDateTime) -> ServiceResult<CallSession>
where
    R: ShopReader + ?Sized,
{
    let shop_id = ShopId::new(shop_id)?;

    let shop = repo
        .get_shop_by_id(shop_id)
        .map_err(|err| {
            log::error!("Failed to load shop {shop_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    if shop.status != ShopStatus::Active {
        return Err(ServiceError::Form(format!(
            "{} is not accepting calls ({})",
            shop.name,
            shop.status.label()
        )));
    }

    log::info!("Starting demo call to shop {shop_id}");
    Ok(CallSession::started(shop.id, now))
}

/// Loads the call page for a call started at `started_at`, or an idle call.
pub fn load_call_page<R>(
    repo: &R,
    shop_id: i32,
    started_at: Option<NaiveDateTime>,
    now: NaiveDateTime,
    timings: &CallTimings,
) -> ServiceResult<CallPageData>
where
    R: ShopReader + ?Sized,
{
    let shop_id = ShopId::new(shop_id)?;

    let shop = repo
        .get_shop_by_id(shop_id)
        .map_err(|err| {
            log::error!("Failed to load shop {shop_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let session = match started_at {
        Some(started_at) => CallSession::started(shop.id, started_at),
        None => CallSession::idle(shop.id),
    };
    let phase = session.phase_at(now, timings);

    // Whole seconds, rounded up.
    let refresh_secs = session.next_transition_at(now, timings).map(|at| {
        let millis = (at - now).num_milliseconds();
        ((millis + 999) / 1000).max(1)
    });

    Ok(CallPageData {
        shop,
        phase,
        badge: phase.into(),
        started: started_at.map(started_param),
        elapsed_secs: started_at.map(|at| (now - at).num_seconds().max(0)),
        refresh_secs,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use super::*;
    use crate::domain::call::CallPhase;
    use crate::forms::call::CallQueryForm;
    use crate::repository::InMemoryRepository;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn repo() -> InMemoryRepository {
        InMemoryRepository::seeded(now().date()).unwrap()
    }

    #[test]
    fn active_shop_can_be_called() {
        let session = start_call(&repo(), 1, now()).unwrap();

        assert_eq!(session.started_at, Some(now()));
        assert_eq!(
            session.phase_at(now(), &CallTimings::default()),
            CallPhase::Connecting
        );
    }

    #[test]
    fn pending_shop_cannot_be_called() {
        let result = start_call(&repo(), 4, now());

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn unknown_shop_is_not_found() {
        let result = start_call(&repo(), 404, now());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn call_page_without_start_is_idle() {
        let data = load_call_page(&repo(), 1, None, now(), &CallTimings::default()).unwrap();

        assert_eq!(data.phase, CallPhase::Idle);
        assert_eq!(data.refresh_secs, None);
        assert_eq!(data.started, None);
    }

    #[test]
    fn call_page_follows_elapsed_time() {
        let timings = CallTimings::default();
        let started = now() - TimeDelta::milliseconds(1500);

        let connecting = load_call_page(&repo(), 1, Some(started), now(), &timings).unwrap();
        assert_eq!(connecting.phase, CallPhase::Connecting);
        assert_eq!(connecting.refresh_secs, Some(1));
        assert_eq!(connecting.badge.class, "warning");

        let later = now() + TimeDelta::seconds(3);
        let active = load_call_page(&repo(), 1, Some(started), later, &timings).unwrap();
        assert_eq!(active.phase, CallPhase::Active);
        assert_eq!(active.elapsed_secs, Some(4));
        assert_eq!(active.refresh_secs, Some(3));

        let done = now() + TimeDelta::seconds(10);
        let completed = load_call_page(&repo(), 1, Some(started), done, &timings).unwrap();
        assert_eq!(completed.phase, CallPhase::Completed);
        assert_eq!(completed.refresh_secs, None);
    }

    #[test]
    fn extreme_start_instants_do_not_fault() {
        let timings = CallTimings::default();
        let form = CallQueryForm {
            started: Some("8210266876799999".to_string()),
        };

        let dropped = form.started_at(now(), timings.total());
        let data = load_call_page(&repo(), 1, dropped, now(), &timings).unwrap();
        assert_eq!(data.phase, CallPhase::Idle);

        let unchecked =
            load_call_page(&repo(), 1, Some(NaiveDateTime::MAX), now(), &timings).unwrap();
        assert_eq!(unchecked.phase, CallPhase::Connecting);
        assert_eq!(unchecked.refresh_secs, None);
    }
}
