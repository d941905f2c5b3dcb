use crate::time::Instant;
use serde_derive::Serialize;
use std::fmt;

/// Item identifier; run ids and annotation ids share one namespace on the
/// timeline and never collide because they differ in kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Run(i64),
    Annotation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Point,
}

/// Renderable entry handed to a timeline adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: ItemId,
    pub content: String,
    #[serde(with = "crate::time::serialize::instant")]
    pub start: Instant,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::time::serialize::optional_instant::serialize"
    )]
    pub end: Option<Instant>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
    pub class_name: String,
    pub title: String,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ItemId::Run(id) => write!(f, "run {}", id),
            ItemId::Annotation(id) => f.write_str(id),
        }
    }
}
