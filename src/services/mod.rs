//! Screen services: load records from a repository and shape them for a page.

use thiserror::Error;

use crate::collection::{DateRange, Filterable, FilteredCollection, StatusFilter};
use crate::domain::StatusKind;
use crate::dto::display::status_options;
use crate::dto::list::ListFilters;
use crate::forms::list::{ListQuery, PAGE_SIZE_OPTIONS};
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryError;

pub mod bookings;
pub mod calls;
pub mod conversations;
pub mod dashboard;
pub mod shops;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
    #[error("{0}")]
    Form(String),
    #[error("export failed: {0}")]
    Export(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Builds a collection with every filter and the page from `query` applied.
///
/// Filters are applied before the page so that an explicit `page` survives the
/// reset every filter change performs.
pub(crate) fn build_collection<T>(
    items: Vec<T>,
    query: &ListQuery,
    default_per_page: usize,
) -> FilteredCollection<T>
where
    T: Filterable,
    T::Status: StatusKind,
{
    let mut collection = FilteredCollection::new(items, default_per_page);
    if let Some(per_page) = query.per_page {
        collection.set_items_per_page(per_page);
    }
    if let Some(search) = &query.search {
        collection.set_search(search.as_str());
    }
    collection.set_status(StatusFilter::parse(query.status.as_deref()));
    collection.set_date_range(DateRange::new(query.from, query.to));
    collection.set_page(query.page.unwrap_or(1));
    collection
}

/// Runs `items` through a collection configured from `query` and returns the
/// requested page together with the filter values to echo back.
pub(crate) fn paginate_list<T>(
    items: Vec<T>,
    query: &ListQuery,
    default_per_page: usize,
) -> (Paginated<T>, ListFilters)
where
    T: Filterable + Clone,
    T::Status: StatusKind,
{
    let collection = build_collection(items, query, default_per_page);

    let status = collection.filter().status.key();
    let filters = ListFilters {
        search: collection.filter().search.clone(),
        status_options: status_options::<T::Status>(&status),
        status,
        from: query.from,
        to: query.to,
        per_page: collection.items_per_page(),
        page_sizes: PAGE_SIZE_OPTIONS,
    };

    (Paginated::from(collection.view()), filters)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::shop::{Shop, ShopStatus};
    use crate::repository::seed::demo_dataset;

    fn shops() -> Vec<Shop> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        demo_dataset(today).unwrap().shops
    }

    #[test]
    fn explicit_page_survives_filter_reset() {
        let query = ListQuery {
            per_page: Some(5),
            page: Some(2),
            ..Default::default()
        };

        let (page, filters) = paginate_list(shops(), &query, 10);

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(filters.per_page, 5);
        assert_eq!(filters.status, "all");
    }

    #[test]
    fn status_and_search_are_echoed() {
        let query = ListQuery {
            search: Some("sushi".to_string()),
            status: Some("active".to_string()),
            ..Default::default()
        };

        let (page, filters) = paginate_list(shops(), &query, 10);

        assert!(page.items.iter().all(|shop| shop.status == ShopStatus::Active));
        assert!(!page.items.is_empty());
        assert_eq!(filters.search, "sushi");
        assert_eq!(filters.status, "active");
        assert!(
            filters
                .status_options
                .iter()
                .any(|option| option.key == "active" && option.selected)
        );
    }

    #[test]
    fn unknown_status_lists_everything() {
        let query = ListQuery {
            status: Some("closed".to_string()),
            per_page: Some(100),
            ..Default::default()
        };

        let (page, filters) = paginate_list(shops(), &query, 10);

        assert_eq!(page.total_items, 12);
        assert_eq!(filters.status, "all");
    }

    #[test]
    fn template_context_serializes_filters_and_page_links() {
        let query = ListQuery {
            from: NaiveDate::from_ymd_opt(2023, 1, 1),
            per_page: Some(1),
            page: Some(6),
            ..Default::default()
        };

        let (page, filters) = paginate_list(shops(), &query, 10);
        let filters = serde_json::to_value(&filters).unwrap();
        let page = serde_json::to_value(&page).unwrap();

        assert_eq!(filters["from"], json!("2023-01-01"));
        assert_eq!(filters["to"], Value::Null);
        assert_eq!(filters["status"], json!("all"));
        assert_eq!(filters["page_sizes"], json!([10, 20, 50]));
        assert_eq!(filters["status_options"][0]["key"], json!("all"));
        assert_eq!(page["page"], json!(6));
        assert_eq!(page["total_pages"], json!(12));
        assert_eq!(page["pages"], json!([1, null, 5, 6, 7, null, 12]));
    }
}
