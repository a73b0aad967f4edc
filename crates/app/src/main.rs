use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::model::LessonContent;
use services::{
    Clock, LessonController, LessonSettings, check_content, load_content_file, load_settings_file,
};
use ui::{App, UiApp, build_app_context};

const CONTENT_ENV: &str = "PRIME_LESSON_CONTENT";
const SETTINGS_ENV: &str = "PRIME_LESSON_SETTINGS";
const WINDOW_TITLE: &str = "数字大冒险";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    content: Arc<LessonContent>,
    settings: LessonSettings,
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    fn settings(&self) -> LessonSettings {
        self.settings
    }
}

#[derive(Debug, Default)]
struct Args {
    content: Option<PathBuf>,
    settings: Option<PathBuf>,
    check: bool,
    verbose: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--content <file.json>] [--settings <file.json>] [--check] [--verbose]"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --content <file>  lesson content JSON (default: bundled lesson)");
    eprintln!("  --settings <file> timing and column limits JSON (default: built-in)");
    eprintln!("  --check           validate content and settings, then exit");
    eprintln!("  --verbose         debug logging (RUST_LOG overrides)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {CONTENT_ENV}, {SETTINGS_ENV}, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let env_path = |name: &str| {
            std::env::var_os(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        let mut parsed = Args {
            content: env_path(CONTENT_ENV),
            settings: env_path(SETTINGS_ENV),
            ..Args::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => {
                    let value = require_value(args, "--content")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--content" });
                    }
                    parsed.content = Some(PathBuf::from(value));
                }
                "--settings" => {
                    let value = require_value(args, "--settings")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--settings" });
                    }
                    parsed.settings = Some(PathBuf::from(value));
                }
                "--check" => parsed.check = true,
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn load_content(path: Option<&PathBuf>) -> Result<LessonContent, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_content_file(path)?),
        None => {
            let content = LessonContent::bundled();
            check_content(&content)?;
            Ok(content)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing(args.verbose);

    let content = Arc::new(load_content(args.content.as_ref())?);
    let settings = match args.settings.as_ref() {
        Some(path) => load_settings_file(path)?,
        None => LessonSettings::default(),
    };

    // Fail before opening a window if the lesson cannot start.
    LessonController::new(Arc::clone(&content), settings, Clock::system())?;

    if args.check {
        tracing::info!(
            quiz_items = content.quiz.len(),
            source = %args.content.as_ref().map_or("bundled".into(), |p| p.display().to_string()),
            "lesson content ok"
        );
        println!("lesson content ok");
        return Ok(());
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { content, settings });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    tracing::info!("launching lesson window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
