pub mod annotation;
pub mod filters;
pub mod item;
pub mod status;
pub mod test_run;

pub use self::annotation::{Annotation, AnnotationDraft};
pub use self::filters::TimelineFilters;
pub use self::item::{ItemId, ItemKind, TimelineItem};
pub use self::status::RunStatus;
pub use self::test_run::TestRun;
