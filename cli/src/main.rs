//! docrank CLI - persona-relevant document outlining tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docrank::{
    process_batch, Depth, JsonFormat, Pipeline, PipelineOptions, PlainTextExtractor,
    RelevancePolicy, RunConfig,
};

#[derive(Parser)]
#[command(name = "docrank")]
#[command(version)]
#[command(about = "Rank document sections by persona relevance", long_about = None)]
struct Cli {
    /// Input text file or directory of text files
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output directory for JSON results
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze documents and write one JSON result per input file
    Analyze {
        /// Input text file or directory of .txt files
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory (defaults to "<input>_output")
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Persona role (e.g. "Food Contractor", "Student")
        #[arg(short, long)]
        persona: Option<String>,

        /// Job to be done (free-text task description)
        #[arg(short, long)]
        job: Option<String>,

        /// Run configuration JSON file (persona/job_to_be_done fields)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Analysis depth
        #[arg(long, value_enum, default_value = "standard")]
        depth: DepthLevel,

        /// Subsection relevance policy
        #[arg(long, value_enum, default_value = "key-points")]
        relevance: RelevanceMode,

        /// Disable the long-section score bonus
        #[arg(long)]
        no_length_bonus: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the ranked outline of one document on stdout
    Outline {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Persona role
        #[arg(short, long)]
        persona: Option<String>,

        /// Job to be done
        #[arg(short, long)]
        job: Option<String>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum DepthLevel {
    /// First page only, one paragraph per section
    Instant,
    /// First five pages, no table/image pass-through
    Fast,
    /// All pages (default)
    Standard,
}

impl From<DepthLevel> for Depth {
    fn from(level: DepthLevel) -> Self {
        match level {
            DepthLevel::Instant => Depth::Instant,
            DepthLevel::Fast => Depth::Fast,
            DepthLevel::Standard => Depth::Standard,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum RelevanceMode {
    /// Score = number of extracted key points (default)
    KeyPoints,
    /// Score = persona keyword hits in the paragraph
    KeywordHits,
}

impl From<RelevanceMode> for RelevancePolicy {
    fn from(mode: RelevanceMode) -> Self {
        match mode {
            RelevanceMode::KeyPoints => RelevancePolicy::KeyPointCount,
            RelevanceMode::KeywordHits => RelevancePolicy::KeywordHits,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            persona,
            job,
            config,
            depth,
            relevance,
            no_length_bonus,
            compact,
        }) => cmd_analyze(
            &input,
            output.as_deref(),
            persona.as_deref(),
            job.as_deref(),
            config.as_deref(),
            depth,
            relevance,
            no_length_bonus,
            compact,
        ),
        Some(Commands::Outline {
            input,
            persona,
            job,
        }) => cmd_outline(&input, persona.as_deref(), job.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: analyze if input is provided
            if let Some(input) = cli.input {
                cmd_analyze(
                    &input,
                    cli.output.as_deref(),
                    None,
                    None,
                    None,
                    DepthLevel::Standard,
                    RelevanceMode::KeyPoints,
                    false,
                    false,
                )
            } else {
                println!("{}", "Usage: docrank <INPUT> [OUTPUT]".yellow());
                println!("       docrank --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Build the run configuration from a config file and/or flag overrides.
fn load_config(
    config_path: Option<&Path>,
    persona: Option<&str>,
    job: Option<&str>,
) -> RunConfig {
    let mut config = match config_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(json) => RunConfig::from_json(&json),
            Err(e) => {
                log::warn!("cannot read config {}: {e}, using defaults", path.display());
                RunConfig::default()
            }
        },
        None => RunConfig::default(),
    };

    if let Some(role) = persona {
        config.persona = Some(docrank::PersonaDescriptor::Role(role.to_string()));
    }
    if let Some(task) = job {
        config.job_to_be_done = Some(docrank::JobDescriptor::Task(task.to_string()));
    }
    config
}

/// Collect input files: a single file as-is, a directory's *.txt entries
/// sorted by name.
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "txt").unwrap_or(false))
        .collect();
    files.sort();
    Ok(files)
}

#[allow(clippy::too_many_arguments)]
fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    persona: Option<&str>,
    job: Option<&str>,
    config_path: Option<&Path>,
    depth: DepthLevel,
    relevance: RelevanceMode,
    no_length_bonus: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = collect_inputs(input)?;
    if files.is_empty() {
        // an empty batch is a valid outcome, not an error
        println!("{}", "No input documents found".yellow());
        return Ok(());
    }

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });
    fs::create_dir_all(&output_dir)?;

    let config = load_config(config_path, persona, job);
    let options = PipelineOptions::with_depth(depth.into())
        .with_relevance_policy(relevance.into())
        .with_length_bonus(!no_length_bonus);
    let pipeline = Pipeline::with_options(options);

    println!(
        "{} {} document(s)...",
        "Analyzing".cyan().bold(),
        files.len()
    );
    let summary = process_batch(&files, &PlainTextExtractor::new(), &config, &pipeline);

    // the batch returns all results at once; the bar tracks the write phase
    let pb = ProgressBar::new(summary.results.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Writing results...");

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    for result in &summary.results {
        let stem = Path::new(&result.filename)
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let path = output_dir.join(format!("{stem}.json"));
        fs::write(&path, docrank::to_json(result, format)?)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{} {} analyzed, {} degraded → {}",
        "Done:".green().bold(),
        summary.succeeded,
        summary.degraded,
        output_dir.display()
    );
    Ok(())
}

fn cmd_outline(
    input: &Path,
    persona: Option<&str>,
    job: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(None, persona, job);
    let result = Pipeline::new().process_file(&PlainTextExtractor::new(), input, &config);

    println!(
        "{} {} ({} sections, persona: {})",
        "Outline:".cyan().bold(),
        result.filename,
        result.metadata.total_sections,
        result.metadata.persona
    );
    for section in &result.sections {
        println!(
            "  {:>3}. [{:>3}] {}",
            section.rank,
            section.score,
            section.title.bold()
        );
    }
    if result.is_degraded() {
        println!("{}", "  (degraded: extraction failed)".yellow());
    }
    Ok(())
}

fn cmd_version() {
    println!("docrank {}", env!("CARGO_PKG_VERSION"));
}
