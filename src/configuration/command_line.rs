use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::configuration::settings::AnnotationSettings;
use crate::model::{AnnotationDraft, TimelineFilters};
use crate::reporter::OutputFormat;
use crate::time::epoch::parse_instant;
use crate::time::Instant;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// JSON file with the test runs to place on the timeline
    #[structopt(parse(from_os_str))]
    pub runs: PathBuf,

    /// Settings file. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    /// Snapshot to import before filtering. A missing file is ignored
    #[structopt(long, short = "i", parse(from_os_str))]
    pub import: Option<PathBuf>,

    /// Write a snapshot of annotations and filters once all changes are applied
    #[structopt(long, short = "e", parse(from_os_str))]
    pub export: Option<PathBuf>,

    /// Only show runs beginning at or after this time (RFC 3339, YYYY-MM-DD or epoch ms)
    #[structopt(long, parse(try_from_str = parse_instant))]
    pub from: Option<Instant>,

    /// Only show runs beginning at or before this time
    #[structopt(long, parse(try_from_str = parse_instant))]
    pub to: Option<Instant>,

    /// Case-insensitive text the run name must contain
    #[structopt(long, short = "s")]
    pub search: Option<String>,

    /// Only show runs overlapping an annotation of this category (repeatable)
    #[structopt(long = "category", short = "C", number_of_values = 1)]
    pub categories: Vec<String>,

    /// Add an annotation: "<time>|<category>|<content>[|<color>]" (repeatable)
    #[structopt(long = "annotate", short = "a", number_of_values = 1)]
    pub annotations: Vec<AnnotationArg>,

    /// Output format of the rendered timeline
    #[structopt(long, short = "f", case_insensitive = true, possible_values = &OutputFormat::variants())]
    pub format: Option<OutputFormat>,
}

/// Annotation given on the command line, before a color is settled.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationArg {
    pub time: Instant,
    pub category: String,
    pub content: String,
    pub color: Option<String>,
}

impl Opt {
    /// Applies the filter flags on top of `current`; flags that were not
    /// given leave the corresponding filter untouched.
    pub fn filters_over(&self, current: &TimelineFilters) -> TimelineFilters {
        let mut filters = current.clone();
        if self.from.is_some() {
            filters.start_date = self.from;
        }
        if self.to.is_some() {
            filters.end_date = self.to;
        }
        if let Some(search) = &self.search {
            filters.search_text = search.clone();
        }
        if !self.categories.is_empty() {
            let mut categories: Vec<String> = Vec::with_capacity(self.categories.len());
            for category in &self.categories {
                if !categories.contains(category) {
                    categories.push(category.clone());
                }
            }
            filters.categories = categories;
        }
        filters
    }
}

impl FromStr for AnnotationArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(4, '|').map(str::trim).collect();
        match parts.as_slice() {
            [time, category, content] | [time, category, content, _]
                if !category.is_empty() && !content.is_empty() =>
            {
                let time = parse_instant(time).map_err(|err| err.to_string())?;
                let color = parts
                    .get(3)
                    .filter(|color| !color.is_empty())
                    .map(|color| (*color).to_owned());
                Ok(Self {
                    time,
                    category: (*category).to_owned(),
                    content: (*content).to_owned(),
                    color,
                })
            }
            _ => Err(format!(
                "'{}' is not an annotation, expected \"<time>|<category>|<content>[|<color>]\"",
                s
            )),
        }
    }
}

impl AnnotationArg {
    pub fn into_draft(self, settings: &AnnotationSettings) -> AnnotationDraft {
        let color = match self.color {
            Some(color) => color,
            None => settings.color_for(self.category.as_str()).to_owned(),
        };
        AnnotationDraft {
            time: self.time,
            content: self.content,
            category: self.category,
            color,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
