use crate::model::{Annotation, AnnotationDraft};
use uuid::Uuid;

const ID_PREFIX: &str = "annotation-";

/// Ordered, in-memory collection of annotations.
///
/// Entries are only ever appended or replaced wholesale; there is no removal
/// or in-place edit.
#[derive(Debug, Default, Clone)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `draft` under a fresh identifier and returns the stored value.
    pub fn add(&mut self, draft: AnnotationDraft) -> Annotation {
        let annotation = draft.into_annotation(self.fresh_id());
        debug!(
            "Adding annotation {} '{}' at {}",
            annotation.id, annotation.category, annotation.time
        );
        self.annotations.push(annotation.clone());
        annotation
    }

    pub fn replace_all(&mut self, annotations: Vec<Annotation>) {
        debug!(
            "Replacing {} annotations with {}",
            self.annotations.len(),
            annotations.len()
        );
        self.annotations = annotations;
    }

    #[inline]
    pub fn all(&self) -> &[Annotation] {
        self.annotations.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for annotation in &self.annotations {
            if !categories.contains(&annotation.category.as_str()) {
                categories.push(annotation.category.as_str());
            }
        }
        categories
    }

    // Imported ids are arbitrary text, so a random id is still checked
    // against what is already stored.
    fn fresh_id(&self) -> String {
        loop {
            let id = format!("{}{}", ID_PREFIX, Uuid::new_v4().to_simple());
            if !self.annotations.iter().any(|existing| existing.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn draft(category: &str) -> AnnotationDraft {
        AnnotationDraft {
            time: Utc.timestamp_millis(1_000),
            content: "Cache flushed".to_owned(),
            category: category.to_owned(),
            color: "#f97316".to_owned(),
        }
    }

    #[test]
    fn test_add_assigns_id_and_appends() {
        let mut store = AnnotationStore::new();
        let stored = store.add(draft("maintenance"));

        assert!(stored.id.starts_with(ID_PREFIX));
        assert_eq!(stored.category, "maintenance");
        assert_eq!(store.all(), &[stored][..]);
    }

    #[test]
    fn test_identical_drafts_get_distinct_ids() {
        let mut store = AnnotationStore::new();
        let first = store.add(draft("deploy"));
        let second = store.add(draft("deploy"));

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0], first);
        assert_eq!(store.all()[1], second);
    }

    #[test]
    fn test_many_adds_never_collide() {
        let mut store = AnnotationStore::new();
        for _ in 0..500 {
            store.add(draft("deploy"));
        }
        let ids: HashSet<&str> = store.all().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_replace_all_discards_previous_contents() {
        let mut store = AnnotationStore::new();
        store.add(draft("deploy"));
        let imported = vec![
            draft("incident").into_annotation("imported-1".to_owned()),
            draft("incident").into_annotation("imported-2".to_owned()),
        ];
        store.replace_all(imported.clone());

        assert_eq!(store.all(), imported.as_slice());

        store.replace_all(Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_categories_are_distinct_in_first_seen_order() {
        let mut store = AnnotationStore::new();
        store.add(draft("incident"));
        store.add(draft("deploy"));
        store.add(draft("incident"));

        assert_eq!(store.categories(), vec!["incident", "deploy"]);
    }
}
