//! NewsState - Session News Items and Draft

use crate::domain::news::{NewsDraft, NewsItem};

/// In-memory news list plus the publish form.
///
/// Items live for the session only; nothing is persisted.
#[derive(Debug)]
pub struct NewsState {
    items: Vec<NewsItem>,
    pub draft: NewsDraft,
}

impl Default for NewsState {
    fn default() -> Self {
        Self {
            items: NewsItem::seed(),
            draft: NewsDraft::default(),
        }
    }
}

impl NewsState {
    /// Newest first
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Publish the current draft: prepend it and reset the form.
    ///
    /// A draft without a title is rejected and left untouched.
    pub fn publish(&mut self) -> bool {
        if !self.draft.is_publishable() {
            return false;
        }
        let draft = std::mem::take(&mut self.draft);
        self.items.insert(0, NewsItem::from_draft(draft));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_prepends_and_clears_the_draft() {
        let mut state = NewsState::default();
        state.draft.title = "Resolución de franjas".to_string();
        state.draft.source = "MinCIT".to_string();

        assert!(state.publish());
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[0].title, "Resolución de franjas");
        assert_eq!(state.items()[1].source, "DIAN");
        assert_eq!(state.draft, NewsDraft::default());
    }

    #[test]
    fn publish_without_title_is_rejected() {
        let mut state = NewsState::default();
        state.draft.detail = "Texto sin título".to_string();

        assert!(!state.publish());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.draft.detail, "Texto sin título");
    }

    #[test]
    fn published_items_get_distinct_ids() {
        let mut state = NewsState::default();
        state.draft.title = "Primera".to_string();
        state.publish();
        state.draft.title = "Segunda".to_string();
        state.publish();

        assert_ne!(state.items()[0].id, state.items()[1].id);
    }
}
