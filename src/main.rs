//! Command-line interface for polysyl-rs
//!
//! Usage:
//!   polysyl [OPTIONS] [FILES]...
//!   cat interview.txt | polysyl

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use polysyl_rs::resources::{self, LanguageResources};
use polysyl_rs::{AnalysisConfig, Analyzer, BatchReport, Document, DocumentAnalysis, Language};

#[derive(Debug, Parser)]
#[command(
    name = "polysyl",
    version,
    about = "Extract 5-10 syllable terms, keyword sentiment and co-occurrence graphs from Thai and English text"
)]
struct Cli {
    /// Text files to analyze (reads stdin when none are given)
    files: Vec<PathBuf>,

    /// Resource directory (default: ~/Documents/polysyl-rs/resources)
    #[arg(short, long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Download missing resources first
    #[arg(long)]
    download: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of graph edges
    #[arg(short = 'k', long, value_name = "N")]
    top_k: Option<usize>,

    /// Keep adjacent pairs of the same term as self-loops
    #[arg(long)]
    keep_repeated_pairs: bool,

    /// Force the language instead of detecting it (th or en)
    #[arg(short, long, value_name = "LANG")]
    language: Option<Language>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> polysyl_rs::Result<AnalysisConfig> {
    let mut config = match cli.config {
        Some(ref path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(k) = cli.top_k {
        config.top_k = k;
    }
    if cli.keep_repeated_pairs {
        config.skip_repeated_pairs = false;
    }
    config.validate()?;
    Ok(config)
}

fn load_resources(cli: &Cli) -> LanguageResources {
    let base = cli.resources.as_deref();
    let loaded = if cli.download {
        LanguageResources::acquire(base, true)
    } else {
        let path = base
            .map(PathBuf::from)
            .unwrap_or_else(resources::default_base_path);
        LanguageResources::load(&path)
    };
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "falling back to built-in resources");
        LanguageResources::builtin()
    })
}

fn read_documents(files: &[PathBuf]) -> io::Result<Vec<Document>> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![Document::new("stdin", text)]);
    }

    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        match Document::from_path(path) {
            Ok(doc) => documents.push(doc),
            Err(e) => error!(error = %e, "skipping unreadable file"),
        }
    }
    Ok(documents)
}

fn print_document(analysis: &DocumentAnalysis, config: &AnalysisConfig) {
    println!("== {} ==", analysis.id);
    println!("Language: {}", analysis.language);
    println!(
        "Sentiment: {} (positive {}, negative {})",
        analysis.sentiment.decorated(),
        analysis.sentiment_score.positive,
        analysis.sentiment_score.negative
    );

    if !analysis.has_terms() {
        println!(
            "No words found with {}-{} syllables.",
            config.min_syllables, config.max_syllables
        );
    } else {
        println!();
        println!("{:<32}\tCount", "Word");
        for entry in analysis.table(config.table_limit) {
            println!("{:<32}\t{}", entry.term, entry.count);
        }
    }

    println!();
    if analysis.graph.is_empty() {
        println!("Insufficient data for network visualization.");
    } else {
        println!("Word network:");
        for edge in analysis.graph.edges() {
            println!("  {} -- {}\t{}", edge.source, edge.target, edge.weight);
        }
    }
    println!();
}

fn print_summary(report: &BatchReport) {
    println!("== Overall Summary ==");
    println!("{:<32}\t{:<8}\tSentiment", "Filename", "Language");
    for row in &report.summary {
        println!(
            "{:<32}\t{:<8}\t{}",
            row.filename,
            row.language.to_string(),
            row.sentiment.decorated()
        );
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let documents = match read_documents(&cli.files) {
        Ok(d) => d,
        Err(e) => {
            error!("Error reading stdin: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if documents.is_empty() {
        error!("No input documents");
        return ExitCode::FAILURE;
    }

    let resources = Arc::new(load_resources(&cli));
    let analyzer = Analyzer::new(resources, config).with_language(cli.language);
    let report = analyzer.analyze_batch(&documents);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Error serializing to JSON: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for analysis in &report.documents {
            print_document(analysis, analyzer.config());
        }
        print_summary(&report);
    }

    ExitCode::SUCCESS
}
