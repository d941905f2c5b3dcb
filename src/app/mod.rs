pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod items;
pub(crate) mod snapshot;
pub(crate) mod store;

use crate::app::error::TimelineError;
use crate::app::snapshot::{DecodedSnapshot, SnapshotDocument};
use crate::app::store::AnnotationStore;
use crate::model::{Annotation, AnnotationDraft, TestRun, TimelineFilters, TimelineItem};
use crate::reporter::TimelineAdapter;
use derivative::*;
use std::path::Path;

/// What an import request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported {
        annotations: usize,
        filters_restored: bool,
    },
    /// No file was chosen or it could not be read; nothing changed.
    Skipped,
}

/// Owns the run data set, the active filters and the annotation store, and
/// re-renders the adapter synchronously after every change.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct App<A: TimelineAdapter> {
    #[derivative(Debug = "ignore")]
    runs: Vec<TestRun>,
    filters: TimelineFilters,
    store: AnnotationStore,
    adapter: A,
}

impl<A: TimelineAdapter> App<A> {
    pub fn new(runs: Vec<TestRun>, adapter: A) -> Self {
        let mut app = App {
            runs,
            filters: TimelineFilters::default(),
            store: AnnotationStore::new(),
            adapter,
        };
        app.refresh();
        app
    }

    #[inline]
    pub fn runs(&self) -> &[TestRun] {
        self.runs.as_slice()
    }

    #[inline]
    pub fn filters(&self) -> &TimelineFilters {
        &self.filters
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        self.store.all()
    }

    pub fn known_categories(&self) -> Vec<&str> {
        self.store.categories()
    }

    #[inline]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn visible_runs(&self) -> Vec<TestRun> {
        filter::visible_runs(&self.runs, &self.filters, self.store.all())
    }

    pub fn items(&self) -> Vec<TimelineItem> {
        items::timeline_items(&self.visible_runs(), self.store.all())
    }

    pub fn on_filter_change(&mut self, filters: TimelineFilters) {
        debug!("Filters changed to {:?}", filters);
        self.filters = filters;
        self.refresh();
    }

    pub fn on_add_annotation(&mut self, draft: AnnotationDraft) -> Annotation {
        let annotation = self.store.add(draft);
        self.refresh();
        annotation
    }

    /// Reads and applies a snapshot file.
    ///
    /// `None` or an unreadable file is a no-op. A malformed document fails
    /// with [`TimelineError::Format`] before anything is changed.
    pub async fn on_import(&mut self, path: Option<&Path>) -> Result<ImportOutcome, TimelineError> {
        let path = match path {
            Some(path) => path,
            None => {
                debug!("No snapshot selected for import");
                return Ok(ImportOutcome::Skipped);
            }
        };
        let bytes = match read_file(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("Import skipped: {}", err);
                return Ok(ImportOutcome::Skipped);
            }
        };
        self.import_bytes(&bytes)
    }

    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<ImportOutcome, TimelineError> {
        let DecodedSnapshot {
            annotations,
            filters,
        } = snapshot::decode(bytes)?;
        let outcome = ImportOutcome::Imported {
            annotations: annotations.len(),
            filters_restored: filters.is_some(),
        };
        self.store.replace_all(annotations);
        if let Some(filters) = filters {
            self.filters = filters;
        }
        info!(
            "Imported snapshot: {:?}, {} annotations stored",
            outcome,
            self.store.len()
        );
        self.refresh();
        Ok(outcome)
    }

    pub fn snapshot(&self) -> SnapshotDocument {
        if self.store.is_empty() {
            debug!("Snapshot holds no annotations");
        }
        snapshot::encode(self.store.all(), &self.filters)
    }

    /// Writes the current annotations and filters to `path`.
    pub async fn on_export(&self, path: &Path) -> Result<SnapshotDocument, TimelineError> {
        let document = self.snapshot();
        let bytes = document.to_bytes()?;
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| TimelineError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            "Exported {} annotations to {}",
            document.annotations.len(),
            path.display()
        );
        Ok(document)
    }

    fn refresh(&mut self) {
        let items = self.items();
        trace!("Rendering {} timeline items", items.len());
        self.adapter.render(&items);
    }
}

/// Loads a JSON array of test runs.
pub async fn load_runs(path: &Path) -> Result<Vec<TestRun>, TimelineError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| TimelineError::Data {
        path: path.to_path_buf(),
        source,
    })
}

async fn read_file(path: &Path) -> Result<Vec<u8>, TimelineError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| TimelineError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
}
