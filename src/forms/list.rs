//! Filter and pagination parameters shared by the list screens.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Page sizes offered by the page-size drop-down.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 50];

/// Raw query string as typed by the user.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryForm {
    pub search: Option<String>,
    pub status: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Parsed list parameters. Missing values mean "use the default".
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct ListQuery {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    non_blank(value)?.parse().ok()
}

fn parse_number(value: Option<String>) -> Option<usize> {
    non_blank(value)?.parse().ok()
}

impl From<ListQueryForm> for ListQuery {
    fn from(form: ListQueryForm) -> Self {
        let mut query = ListQuery {
            search: non_blank(form.search),
            status: non_blank(form.status),
            from: parse_date(form.from),
            to: parse_date(form.to),
            page: parse_number(form.page),
            per_page: parse_number(form.per_page),
        };

        if let Err(errors) = query.validate() {
            log::debug!("Ignoring invalid list parameters: {errors}");
            let fields = errors.field_errors();
            if fields.contains_key("search") {
                query.search = None;
            }
            if fields.contains_key("page") {
                query.page = None;
            }
            if fields.contains_key("per_page") {
                query.per_page = None;
            }
        }

        query
    }
}
