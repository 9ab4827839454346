use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use symdoc::config::{LogLevel, find_settings_file};
use symdoc::{AnnotationStore, GenerateError, GenerateReport, Generator, GeneratorSettings};

const ANNOTATIONS_EXTENSION: &str = "annotations.json";

#[derive(Parser, Debug)]
#[command(name = "symdoc", version, about)]
struct Args {
    /// JSON symbol model to document.
    model: PathBuf,

    /// Annotation store; defaults to the model path with `.annotations.json`.
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Ignore annotations and document from the symbol model only.
    #[arg(long)]
    no_annotations: bool,

    #[arg(long)]
    out: Option<PathBuf>,

    /// Name of the root directory of the page tree.
    #[arg(long)]
    root: Option<String>,

    /// Write a single Markdown file instead of a page tree.
    #[arg(long)]
    slim: bool,

    /// Space out overloads on method group pages.
    #[arg(long)]
    mgspace: bool,

    /// Settings file; otherwise the nearest `symdoc.toml` above the model.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output threads, 0 for one per core.
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = resolve_settings(&args);
    let level = match (&settings, args.verbose) {
        (_, true) => LogLevel::Debug,
        (Ok(settings), false) => settings.logging.level,
        (Err(_), false) => LogLevel::default(),
    };
    init_logging(level, args.log_file.as_deref());

    let result = settings.and_then(|settings| run(&args, settings));
    match result {
        Ok(report) => {
            if !report.is_clean() {
                warn!("Documentation is partial; see the warnings above");
            }
            info!("Done");
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(
    level: LogLevel,
    log_file: Option<&Path>,
) {
    let directive = format!("symdoc={}", level.as_filter());

    let file_layer = log_file.map(|path| {
        let appender = tracing_appender::rolling::never(
            path.parent().unwrap_or(Path::new(".")),
            path.file_name().unwrap_or(std::ffi::OsStr::new("symdoc.log")),
        );
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(&directive))
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(&directive));

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

/// File settings first, then command-line overrides.
fn resolve_settings(args: &Args) -> Result<GeneratorSettings, GenerateError> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => args.model.parent().and_then(find_settings_file),
    };
    let mut settings = match path {
        Some(path) => GeneratorSettings::load(&path)?,
        None => GeneratorSettings::default(),
    };

    if let Some(out) = &args.out {
        settings.output.directory = out.clone();
    }
    if let Some(root) = &args.root {
        settings.output.root_name = root.clone();
    }
    if args.slim {
        settings.output.slim = true;
    }
    if args.mgspace {
        settings.pages.method_group_spacing = true;
    }
    if let Some(threads) = args.threads {
        settings.thread_pool.worker_threads = threads;
    }
    settings.normalize();
    Ok(settings)
}

fn run(
    args: &Args,
    settings: GeneratorSettings,
) -> Result<GenerateReport, GenerateError> {
    info!("Building docs for {}", args.model.display());
    let assembly = Generator::load_model(&args.model)?;

    let annotations = if args.no_annotations {
        info!("Annotations disabled, using the symbol model only");
        AnnotationStore::new()
    } else {
        let path = args.annotations.clone().unwrap_or_else(|| args.model.with_extension(ANNOTATIONS_EXTENSION));
        AnnotationStore::load(&path)?
    };

    Generator::new(settings).generate(&assembly, &annotations)
}
