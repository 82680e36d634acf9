use crate::dto::conversations::{ConversationRow, ConversationsPageData};
use crate::forms::list::ListQuery;
use crate::repository::ConversationReader;
use crate::services::{ServiceResult, paginate_list};

/// Loads one page of AI receptionist conversations, most recent first.
pub fn load_conversations_page<R>(
    repo: &R,
    query: &ListQuery,
    default_per_page: usize,
) -> ServiceResult<ConversationsPageData>
where
    R: ConversationReader + ?Sized,
{
    let mut conversations = repo.list_conversations().map_err(|err| {
        log::error!("Failed to list conversations: {err}");
        err
    })?;
    conversations.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    let (page, filters) = paginate_list(conversations, query, default_per_page);

    Ok(ConversationsPageData {
        conversations: page.map(ConversationRow::from),
        filters,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::conversation::ConversationStatus;
    use crate::repository::InMemoryRepository;

    fn repo() -> InMemoryRepository {
        InMemoryRepository::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap()
    }

    #[test]
    fn conversations_are_most_recent_first() {
        let data = load_conversations_page(&repo(), &ListQuery::default(), 10).unwrap();

        assert_eq!(data.conversations.total_items, 28);
        assert_eq!(data.conversations.total_pages, 3);
        assert!(
            data.conversations
                .items
                .windows(2)
                .all(|w| w[0].conversation.started_at >= w[1].conversation.started_at)
        );
    }

    #[test]
    fn missed_calls_can_be_isolated() {
        let query = ListQuery {
            status: Some("missed".to_string()),
            ..Default::default()
        };

        let data = load_conversations_page(&repo(), &query, 10).unwrap();

        assert!(data.conversations.total_items > 0);
        assert!(
            data.conversations
                .items
                .iter()
                .all(|row| row.conversation.status == ConversationStatus::Missed)
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let query = ListQuery {
            page: Some(40),
            ..Default::default()
        };

        let data = load_conversations_page(&repo(), &query, 10).unwrap();

        assert_eq!(data.conversations.page, 3);
        assert_eq!(data.conversations.items.len(), 8);
    }
}
