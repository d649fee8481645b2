use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use mushaf_index::corpus::{CleanOptions, Corpus};
use mushaf_index::index::{load_index, stats, verify, Locator};
use mushaf_index::output;
use mushaf_index::pipeline::{self, ConvertJob};
use mushaf_index::utils::{get_config_path, AppConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "mushaf-index")]
#[command(about = "Convert a relative mushaf page index into absolute line numbers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, global = true, value_name = "WHEN")]
    color: Option<ColorWhen>,

    /// Only print errors and warnings
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the corpus and convert the page index (default)
    Convert {
        /// Relative page index
        #[arg(long)]
        pages: Option<PathBuf>,

        /// Absolute page index to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Raw corpus text
        #[arg(long)]
        source: Option<PathBuf>,

        /// Cleaned corpus text
        #[arg(long)]
        text: Option<PathBuf>,

        /// Read the cleaned text as is, without regenerating it
        #[arg(long)]
        skip_clean: bool,

        /// Glue small pause marks to the preceding word
        #[arg(long)]
        join_small_stops: bool,
    },
    /// Only clean the corpus text
    Clean {
        /// Raw corpus text
        #[arg(long)]
        source: Option<PathBuf>,

        /// Cleaned corpus text
        #[arg(long)]
        text: Option<PathBuf>,

        /// Glue small pause marks to the preceding word
        #[arg(long)]
        join_small_stops: bool,
    },
    /// Check an absolute page index for gaps and coverage
    Verify {
        /// Absolute page index
        index: Option<PathBuf>,

        /// Corpus text to check coverage against
        #[arg(long)]
        text: Option<PathBuf>,
    },
    /// Show page index statistics
    Stats {
        /// Page index
        index: Option<PathBuf>,
    },
    /// Find the page and line of an ayah, the ayah on a line, or what a page holds
    #[command(group(ArgGroup::new("target").required(true).args(["surah", "line", "page"])))]
    Locate {
        /// Surah number
        #[arg(short, long)]
        surah: Option<i64>,

        /// Ayah number within the surah
        #[arg(short, long, default_value_t = 1, requires = "surah")]
        ayah: i64,

        /// Absolute corpus line
        #[arg(short, long)]
        line: Option<i64>,

        /// Page number, 1-based
        #[arg(short, long)]
        page: Option<usize>,

        /// Absolute page index
        #[arg(long)]
        index: Option<PathBuf>,

        /// Corpus text, for printing the ayah
        #[arg(long)]
        text: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let choice = match cli.color {
        Some(ColorWhen::Auto) => ColorChoice::Auto,
        Some(ColorWhen::Always) => ColorChoice::Always,
        Some(ColorWhen::Never) => ColorChoice::Never,
        None => output::color_choice(config.color),
    };

    let command = cli.command.unwrap_or(Commands::Convert {
        pages: None,
        output: None,
        source: None,
        text: None,
        skip_clean: false,
        join_small_stops: false,
    });

    match command {
        Commands::Convert {
            pages,
            output,
            source,
            text,
            skip_clean,
            join_small_stops,
        } => {
            let mut options = config.clean_options();
            options.join_small_stops |= join_small_stops;

            let job = ConvertJob {
                pages_path: pages.unwrap_or(config.pages_path),
                output_path: output.unwrap_or(config.output_path),
                source_path: source.unwrap_or(config.source_path),
                text_path: text.unwrap_or(config.text_path),
                clean: (!skip_clean).then_some(options),
            };

            let outcome = pipeline::run(&job)?;

            if !cli.quiet {
                output::print_convert_report(&outcome, choice)?;
            } else if !outcome.is_consistent() {
                eprintln!(
                    "warning: final line {} does not match corpus line count {}",
                    outcome.conversion.final_line, outcome.corpus_lines
                );
            }
        }

        Commands::Clean {
            source,
            text,
            join_small_stops,
        } => {
            let options = CleanOptions {
                clean_glyphs: true,
                join_small_stops: config.join_small_stops || join_small_stops,
            };
            let text_path = text.unwrap_or(config.text_path);
            let lines = pipeline::clean(
                &source.unwrap_or(config.source_path),
                &text_path,
                options,
            )?;

            if !cli.quiet {
                println!("Total Quran lines: {}", lines);
                println!("Cleaned text saved to {}", text_path.display());
            }
        }

        Commands::Verify { index, text } => {
            let index = load_index(&index.unwrap_or(config.output_path))?;
            let corpus_lines = match text {
                Some(path) => Some(Corpus::load(&path)?.line_count()),
                None => None,
            };

            let violations = verify(&index, corpus_lines);
            if !cli.quiet || !violations.is_empty() {
                output::print_violations(&violations, choice)?;
            }
            if !violations.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Stats { index } => {
            stats::show_stats(&index.unwrap_or(config.output_path))?;
        }

        Commands::Locate {
            surah,
            ayah,
            line,
            page,
            index,
            text,
        } => {
            let index = load_index(&index.unwrap_or(config.output_path))?;
            let locator = Locator::new(&index);

            if let Some(page) = page {
                let summary = page.checked_sub(1).and_then(|p| locator.describe_page(p));
                let Some(summary) = summary else {
                    bail!("Page {} is not in the page index", page);
                };
                output::print_page(&summary, choice)?;
                return Ok(ExitCode::SUCCESS);
            }

            let location = match (surah, line) {
                (Some(surah), _) => locator
                    .locate_ayah(surah, ayah)
                    .with_context(|| format!("Ayah {}:{} is not in the page index", surah, ayah))?,
                (None, Some(line)) => locator
                    .locate_line(line)
                    .with_context(|| format!("Line {} is not in the page index", line))?,
                (None, None) => bail!("Nothing to locate"),
            };

            let text_path = text.unwrap_or(config.text_path);
            let corpus = if text_path.exists() {
                Some(Corpus::load(&text_path)?)
            } else {
                None
            };
            let verse = corpus.as_ref().and_then(|c| c.line(location.line));

            output::print_location(&location, verse, choice)?;
        }

        Commands::Config { init } => {
            let path = cli.config.or_else(get_config_path);

            if init {
                let Some(path) = path else {
                    bail!("Could not determine config directory");
                };
                if path.exists() {
                    println!("Config already exists: {}", path.display());
                } else {
                    AppConfig::default().save_to(&path)?;
                    println!("Wrote default config to {}", path.display());
                }
                return Ok(ExitCode::SUCCESS);
            }

            match &path {
                Some(path) if path.exists() => println!("Config file: {}", path.display()),
                Some(path) => println!("Config file: {} (not present, using defaults)", path.display()),
                None => println!("Config file: none (using defaults)"),
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
