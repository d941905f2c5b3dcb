pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod common {
    pub const ENV_PREFIX: &str = "RUNLINE";
    pub const DEFAULT_ANNOTATION_COLOR: &str = "#f97316";
    pub const DEFAULT_OUTPUT_FORMAT: &str = "text";
}
