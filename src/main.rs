#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod app;
mod configuration;
mod model;
mod reporter;
mod time;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::app::{error::TimelineError, load_runs, App, ImportOutcome};
use self::{
    configuration::command_line::{LogLevel, Opt},
    configuration::settings::Settings,
    reporter::FrameBuffer,
};

#[tokio::main]
async fn main() {
    let mut options = Opt::from_args();
    let level = options.logging.take().unwrap_or(LogLevel::Info).into();

    if let Err(e) = init_logging(level, &options.log_output_file) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(2);
    }

    if let Err(e) = run(options).await {
        if e.is_format() {
            error!("Import failed, please make sure the file is a timeline export: {}", e);
        } else {
            error!("{}", e);
        }
        exit(1);
    }
}

async fn run(options: Opt) -> Result<(), TimelineError> {
    let settings = Settings::load(options.config.as_deref())?;
    debug!("Loaded settings {:#?}", settings);

    let runs = load_runs(&options.runs).await?;
    info!(
        "Loaded {} test runs from {}",
        runs.len(),
        options.runs.display()
    );
    let mut app = App::new(runs, FrameBuffer::default());

    match app.on_import(options.import.as_deref()).await? {
        ImportOutcome::Imported { annotations, .. } => {
            info!("Restored {} annotations", annotations)
        }
        ImportOutcome::Skipped => debug!("Starting without a snapshot"),
    }

    let filters = options.filters_over(app.filters());
    if &filters != app.filters() {
        app.on_filter_change(filters);
    }

    for arg in options.annotations.iter().cloned() {
        let annotation = app.on_add_annotation(arg.into_draft(&settings.annotation));
        info!(
            "Added annotation {} ({}) at {}",
            annotation.id, annotation.category, annotation.time
        );
    }

    if app.filters().is_unconstrained() {
        debug!("No filters active");
    }
    let known = app.known_categories();
    for category in &app.filters().categories {
        if !known.contains(&category.as_str()) {
            warn!(
                "No annotation has category '{}', known categories: [{}]",
                category,
                known.join(", ")
            );
        }
    }

    let format = match options.format {
        Some(format) => format,
        None => settings.render.output_format()?,
    };
    info!(
        "{} of {} runs visible, {} annotations",
        app.visible_runs().len(),
        app.runs().len(),
        app.annotations().len()
    );
    debug!(
        "Rendered {} frames, {} with changes",
        app.adapter().renders(),
        app.adapter().changes()
    );
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    reporter::write(format, app.adapter().items(), &mut out).map_err(|source| {
        TimelineError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        }
    })?;

    if let Some(path) = &options.export {
        app.on_export(path).await?;
    }
    Ok(())
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
