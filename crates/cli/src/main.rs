use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use linefold_core::{
    format_output, EngineConfig, FoldingEngine, IdDecoding, Language, LineBuffer, OutputFormat,
    Renderer, Viewport,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mta_rust_linefold")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Viewport-bounded code folding for source files")]
#[command(long_about = "Detects foldable line ranges with fast, pattern-based heuristics \
    instead of a full parser, so it works on any text file:\n\n\
    - Bracket blocks ({...} and [...])\n\
    - Runs of single-line comments\n\
    - Function and class blocks (JavaScript, TypeScript, Python, Java)\n\n\
    Only the requested line window is scanned.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List foldable ranges detected in a file
    Detect {
        /// File to analyze
        file: PathBuf,

        /// First line of the window (0-indexed)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Last line of the window (0-indexed, defaults to end of file)
        #[arg(long)]
        end: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Json)]
        format: OutputFormatArg,
    },

    /// Print a file with ranges collapsed
    View {
        /// File to render
        file: PathBuf,

        /// First line of the window (0-indexed)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Last line of the window (0-indexed, defaults to end of file)
        #[arg(long)]
        end: Option<usize>,

        /// Range id to collapse (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        collapse: Vec<String>,

        /// Collapse every range detected in the window
        #[arg(long)]
        collapse_all: bool,

        /// Let comment-* and function-* ids hide lines too
        #[arg(long)]
        structured_ids: bool,

        /// Output with ANSI colors
        #[arg(long)]
        ansi: bool,

        /// Disable colors even on a terminal
        #[arg(long)]
        no_color: bool,

        /// Hide the line-number gutter
        #[arg(long)]
        no_line_numbers: bool,
    },

    /// Show the extension to language table
    Languages,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Detect {
            file,
            start,
            end,
            format,
        } => run_detect(&file, start, end, format, config),
        Commands::View {
            file,
            start,
            end,
            collapse,
            collapse_all,
            structured_ids,
            ansi,
            no_color,
            no_line_numbers,
        } => {
            let config = if structured_ids {
                config.with_id_decoding(IdDecoding::Structured)
            } else {
                config
            };
            let colored = ansi || (atty::is(atty::Stream::Stdout) && !no_color);
            let view = ViewOptions {
                collapse,
                collapse_all,
                colored,
                line_numbers: !no_line_numbers,
            };
            run_view(&file, start, end, view, config)
        }
        Commands::Languages => {
            run_languages();
            Ok(())
        }
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => {
            let config = EngineConfig::from_toml_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            info!(path = %path.display(), "loaded engine config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Read `file` into a fresh engine positioned on the requested window
fn open_engine(
    file: &Path,
    start: usize,
    end: Option<usize>,
    config: EngineConfig,
) -> anyhow::Result<FoldingEngine> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let buffer = LineBuffer::from_text(&content);
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let viewport = resolve_viewport(start, end, buffer.len());
    debug!(file = %file_name, lines = buffer.len(), ?viewport, "opening file");

    let mut engine = FoldingEngine::new(config);
    engine.load(&file_name, buffer);
    engine.set_viewport(viewport);
    Ok(engine)
}

fn resolve_viewport(start: usize, end: Option<usize>, len: usize) -> Viewport {
    let end = end.unwrap_or_else(|| len.saturating_sub(1));
    Viewport::new(start, end)
}

fn run_detect(
    file: &Path,
    start: usize,
    end: Option<usize>,
    format: OutputFormatArg,
    config: EngineConfig,
) -> anyhow::Result<()> {
    let mut engine = open_engine(file, start, end, config)?;
    let report = engine.report();
    println!("{}", format_output(&report, format.into())?);
    Ok(())
}

struct ViewOptions {
    collapse: Vec<String>,
    collapse_all: bool,
    colored: bool,
    line_numbers: bool,
}

fn run_view(
    file: &Path,
    start: usize,
    end: Option<usize>,
    view: ViewOptions,
    config: EngineConfig,
) -> anyhow::Result<()> {
    let mut engine = open_engine(file, start, end, config)?;

    if view.collapse_all {
        engine.collapse_all();
    }
    for id in &view.collapse {
        if !engine.fold_state().is_collapsed(id) {
            engine.toggle(id);
        }
    }

    let ranges = engine.foldable_ranges();
    let visible = engine.visible_lines();
    let renderer = Renderer::new()
        .with_line_numbers(view.line_numbers)
        .with_id_decoding(engine.config().id_decoding);

    let output = if view.colored {
        renderer.render_ansi(&visible, &ranges, engine.fold_state())
    } else {
        renderer.render(&visible, &ranges, engine.fold_state())
    };
    print!("{}", output);

    info!(
        total = engine.buffer().len(),
        visible = visible.len(),
        collapsed = engine.fold_state().len(),
        "rendered folded view"
    );
    Ok(())
}

fn run_languages() {
    for (ext, language) in Language::extension_table() {
        let folding = if language.supports_folding() { "fold" } else { "" };
        println!("{:<14} {:<12} {}", ext, language.as_str(), folding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_defaults_to_whole_file() {
        assert_eq!(resolve_viewport(0, None, 12), Viewport::new(0, 11));
        assert_eq!(resolve_viewport(3, Some(7), 12), Viewport::new(3, 7));
        assert_eq!(resolve_viewport(0, None, 0), Viewport::new(0, 0));
    }

    #[test]
    fn test_view_args_parse() {
        let args = Args::try_parse_from([
            "mta_rust_linefold",
            "view",
            "src/app.js",
            "--collapse",
            "0-5",
            "--collapse",
            "comment-7-9",
            "--structured-ids",
        ])
        .unwrap();

        match args.command {
            Commands::View {
                collapse,
                structured_ids,
                ..
            } => {
                assert_eq!(collapse, vec!["0-5", "comment-7-9"]);
                assert!(structured_ids);
            }
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_missing_config_file_errors() {
        assert!(load_config(Some(Path::new("/nonexistent/linefold.toml"))).is_err());
        assert_eq!(load_config(None).unwrap(), EngineConfig::default());
    }
}
