use crate::model::{Annotation, ItemId, ItemKind, TestRun, TimelineItem};

/// Builds the adapter input: visible runs first, then every annotation as a
/// point item.
pub fn timeline_items(runs: &[TestRun], annotations: &[Annotation]) -> Vec<TimelineItem> {
    runs.iter()
        .filter_map(run_item)
        .chain(annotations.iter().map(annotation_item))
        .collect()
}

/// Range item for `run`, or `None` when either bound is an invalid instant.
pub fn run_item(run: &TestRun) -> Option<TimelineItem> {
    match (run.begin(), run.end()) {
        (Some(start), Some(end)) => Some(TimelineItem {
            id: ItemId::Run(run.run_id),
            content: run.name.clone(),
            start,
            end: Some(end),
            kind: None,
            class_name: run.status.class_name().to_owned(),
            title: run.tooltip(),
        }),
        _ => {
            warn!(
                "Run {} '{}' has unreadable times ({:?} .. {:?}), leaving it off the timeline",
                run.run_id, run.name, run.begin_time, run.end_time
            );
            None
        }
    }
}

pub fn annotation_item(annotation: &Annotation) -> TimelineItem {
    TimelineItem {
        id: ItemId::Annotation(annotation.id.clone()),
        content: annotation.content.clone(),
        start: annotation.time,
        end: None,
        kind: Some(ItemKind::Point),
        class_name: annotation.class_name(),
        title: annotation.tooltip(),
    }
}
