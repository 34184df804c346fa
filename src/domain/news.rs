//! News - Customs News and Alert Items

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published news or alert item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique ID
    pub id: Uuid,
    /// Publication date as free text (YYYY-MM-DD), may be empty
    pub date: String,
    /// Headline
    pub title: String,
    /// Body text
    pub detail: String,
    /// Issuing source, may be empty
    pub source: String,
    /// External link, may be empty
    pub url: String,
}

/// Form fields for a news item about to be published
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsDraft {
    pub date: String,
    pub title: String,
    pub detail: String,
    pub source: String,
    pub url: String,
}

impl NewsDraft {
    /// A draft needs at least a title to be publishable
    pub fn is_publishable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl NewsItem {
    /// Build a published item from a draft
    pub fn from_draft(draft: NewsDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            title: draft.title,
            detail: draft.detail,
            source: draft.source,
            url: draft.url,
        }
    }

    /// Items preloaded at startup
    pub fn seed() -> Vec<NewsItem> {
        vec![NewsItem {
            id: Uuid::new_v4(),
            date: "2025-01-13".to_string(),
            title: "Circular DIAN sobre procedimientos aduaneros".to_string(),
            detail: "Actualiza pautas operativas; revisar impactos en liquidación y control documental.".to_string(),
            source: "DIAN".to_string(),
            url: "https://www.dian.gov.co/".to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_needs_a_title() {
        let mut draft = NewsDraft::default();
        assert!(!draft.is_publishable());

        draft.title = "   ".to_string();
        assert!(!draft.is_publishable());

        draft.title = "Nueva circular".to_string();
        assert!(draft.is_publishable());
    }

    #[test]
    fn from_draft_keeps_all_fields() {
        let item = NewsItem::from_draft(NewsDraft {
            date: "2025-02-01".to_string(),
            title: "Ajuste de subpartidas".to_string(),
            detail: "Cambios en capítulo 87.".to_string(),
            source: "MinCIT".to_string(),
            url: String::new(),
        });
        assert_eq!(item.date, "2025-02-01");
        assert_eq!(item.title, "Ajuste de subpartidas");
        assert_eq!(item.source, "MinCIT");
        assert!(item.url.is_empty());
    }

    #[test]
    fn seed_has_the_dian_circular() {
        let seed = NewsItem::seed();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].source, "DIAN");
        assert_eq!(seed[0].date, "2025-01-13");
    }
}
