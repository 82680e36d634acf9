use serde::Serialize;

use crate::domain::conversation::Conversation;
use crate::dto::display::StatusBadge;
use crate::dto::list::ListFilters;
use crate::pagination::Paginated;

#[derive(Debug, Clone, Serialize)]
pub struct ConversationRow {
    pub conversation: Conversation,
    pub duration: String,
    pub badge: StatusBadge,
}

impl From<Conversation> for ConversationRow {
    fn from(conversation: Conversation) -> Self {
        Self {
            duration: conversation.duration_label(),
            badge: StatusBadge::of(conversation.status),
            conversation,
        }
    }
}

/// Data required to render the conversations index page.
#[derive(Debug)]
pub struct ConversationsPageData {
    pub conversations: Paginated<ConversationRow>,
    pub filters: ListFilters,
}
