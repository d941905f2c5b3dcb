use crate::time::Instant;
use serde_derive::{Deserialize, Serialize};

/// Active timeline filters. Unset bounds, an empty search text and an empty
/// category list each leave the corresponding dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFilters {
    #[serde(default, with = "crate::time::serialize::optional_instant")]
    pub start_date: Option<Instant>,
    #[serde(default, with = "crate::time::serialize::optional_instant")]
    pub end_date: Option<Instant>,
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl TimelineFilters {
    pub fn is_unconstrained(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.search_text.is_empty()
            && self.categories.is_empty()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|selected| selected == category)
    }
}
