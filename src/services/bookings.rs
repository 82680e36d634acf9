//! Services backing the bookings screen and its CSV export.

use crate::domain::booking::Booking;
use crate::dto::bookings::{BookingRow, BookingsPageData};
use crate::forms::list::ListQuery;
use crate::repository::BookingReader;
use crate::services::{ServiceError, ServiceResult, build_collection, paginate_list};

const CSV_HEADER: [&str; 7] = [
    "code",
    "shop",
    "guest",
    "phone",
    "party_size",
    "reserved_for",
    "status",
];

fn newest_first<R>(repo: &R) -> ServiceResult<Vec<Booking>>
where
    R: BookingReader + ?Sized,
{
    let mut bookings = repo.list_bookings().map_err(|err| {
        log::error!("Failed to list bookings: {err}");
        err
    })?;
    bookings.sort_by(|a, b| b.reserved_for.cmp(&a.reserved_for));
    Ok(bookings)
}

/// Loads one page of bookings, latest reservation first.
pub fn load_bookings_page<R>(
    repo: &R,
    query: &ListQuery,
    default_per_page: usize,
) -> ServiceResult<BookingsPageData>
where
    R: BookingReader + ?Sized,
{
    let bookings = newest_first(repo)?;

    let (page, filters) = paginate_list(bookings, query, default_per_page);

    Ok(BookingsPageData {
        bookings: page.map(BookingRow::from),
        filters,
    })
}

/// Renders every booking matching the filters of `query` as CSV.
///
/// The page and page size of `query` are ignored.
pub fn export_bookings_csv<R>(repo: &R, query: &ListQuery) -> ServiceResult<String>
where
    R: BookingReader + ?Sized,
{
    let bookings = newest_first(repo)?;
    let collection = build_collection(bookings, query, 1);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for booking in collection.filtered() {
        writer.write_record([
            booking.code.short().as_str(),
            booking.shop_name.as_str(),
            booking.guest_name.as_str(),
            booking.phone.as_str(),
            booking.party_size.to_string().as_str(),
            booking.reserved_for.format("%Y-%m-%d %H:%M").to_string().as_str(),
            booking.status.key(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| {
        log::error!("Failed to flush bookings export: {err}");
        ServiceError::Export(err.to_string())
    })?;
    String::from_utf8(bytes).map_err(|err| ServiceError::Export(err.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::booking::BookingStatus;
    use crate::repository::InMemoryRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn repo() -> InMemoryRepository {
        InMemoryRepository::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap()
    }

    #[test]
    fn bookings_are_newest_first() {
        let data = load_bookings_page(&repo(), &ListQuery::default(), 10).unwrap();

        assert_eq!(data.bookings.items.len(), 10);
        assert!(
            data.bookings
                .items
                .windows(2)
                .all(|w| w[0].booking.reserved_for >= w[1].booking.reserved_for)
        );
    }

    #[test]
    fn status_filter_narrows_bookings() {
        let query = ListQuery {
            status: Some("confirmed".to_string()),
            per_page: Some(100),
            ..Default::default()
        };

        let data = load_bookings_page(&repo(), &query, 10).unwrap();

        assert!(
            data.bookings
                .items
                .iter()
                .all(|row| row.booking.status == BookingStatus::Confirmed)
        );
        assert_eq!(data.filters.status, "confirmed");
    }

    #[test]
    fn export_covers_every_page() {
        let repo = repo();
        let query = ListQuery {
            per_page: Some(5),
            page: Some(2),
            ..Default::default()
        };
        let total = repo.list_bookings().unwrap().len();

        let csv = export_bookings_csv(&repo, &query).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("code,shop,guest,phone,party_size,reserved_for,status")
        );
        assert_eq!(lines.count(), total);
    }

    #[test]
    fn export_applies_filters() {
        let query = ListQuery {
            search: Some("Sakura".to_string()),
            ..Default::default()
        };

        let csv = export_bookings_csv(&repo(), &query).unwrap();

        assert!(csv.lines().skip(1).all(|line| line.contains("Sakura Sushi Tokyo")));
    }

    #[test]
    fn export_propagates_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_list_bookings()
            .returning(|| Err(RepositoryError::Unexpected("down".to_string())));

        let result = export_bookings_csv(&repo, &ListQuery::default());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
