//! Visibility rules for test runs.
//!
//! A run is shown when its begin instant lies inside the date bounds, its
//! name contains the search text, and, if categories are selected, at least
//! one annotation of a selected category falls inside the run's time span.
//! The category rule looks at annotations only; runs carry no category of
//! their own.

use crate::model::{Annotation, TestRun, TimelineFilters};
use crate::time::Instant;

/// Returns the runs that pass every active filter, in input order.
pub fn visible_runs(
    runs: &[TestRun],
    filters: &TimelineFilters,
    annotations: &[Annotation],
) -> Vec<TestRun> {
    let visible: Vec<TestRun> = runs
        .iter()
        .filter(|run| is_visible(run, filters, annotations))
        .cloned()
        .collect();
    trace!("{} of {} runs visible", visible.len(), runs.len());
    visible
}

pub fn is_visible(run: &TestRun, filters: &TimelineFilters, annotations: &[Annotation]) -> bool {
    let begin = run.begin();
    matches_date_range(begin, filters)
        && matches_search(run.name.as_str(), filters.search_text.as_str())
        && matches_categories(begin, run, filters, annotations)
}

// Comparisons against an invalid instant (`None`) are always false.
fn matches_date_range(begin: Option<Instant>, filters: &TimelineFilters) -> bool {
    let after_start = match filters.start_date {
        Some(start) => begin.map_or(false, |begin| begin >= start),
        None => true,
    };
    let before_end = match filters.end_date {
        Some(end) => begin.map_or(false, |begin| begin <= end),
        None => true,
    };
    after_start && before_end
}

fn matches_search(name: &str, search_text: &str) -> bool {
    name.to_lowercase().contains(&search_text.to_lowercase())
}

fn matches_categories(
    begin: Option<Instant>,
    run: &TestRun,
    filters: &TimelineFilters,
    annotations: &[Annotation],
) -> bool {
    if filters.categories.is_empty() {
        return true;
    }
    let end = run.end();
    annotations.iter().any(|annotation| {
        filters.has_category(annotation.category.as_str())
            && begin.map_or(false, |begin| annotation.time >= begin)
            && end.map_or(false, |end| annotation.time <= end)
    })
}
