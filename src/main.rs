//! `resume-match` command-line entrypoint.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;

use resume_match::config::Config;
use resume_match::document::{Document, DocumentKind};
use resume_match::embedding::SentenceEmbedder;
use resume_match::pipeline::{EvaluationResult, MatchPipeline};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: resume-match <resume.pdf> <job_description.txt> [--json]";

struct Args {
    resume: PathBuf,
    job_description: PathBuf,
    json: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut json = false;
    let mut paths = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'\n{USAGE}"),
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    let [resume, job_description]: [PathBuf; 2] = paths
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly two file arguments\n{USAGE}"))?;

    Ok(Args {
        resume,
        job_description,
        json,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = parse_args()?;

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        model_id = %config.model_id,
        model_path = ?config.model_path,
        stub = config.embedder_stub,
        "resume-match starting"
    );

    let limit = config.max_document_bytes;
    let resume = Document::from_path_with_limit(DocumentKind::Resume, &args.resume, limit)
        .with_context(|| format!("cannot load resume {}", args.resume.display()))?;
    let job_description =
        Document::from_path_with_limit(DocumentKind::JobDescription, &args.job_description, limit)
            .with_context(|| {
                format!(
                    "cannot load job description {}",
                    args.job_description.display()
                )
            })?;

    let embedder = Arc::new(SentenceEmbedder::load(config.embedder_config()));
    let pipeline = MatchPipeline::from_config(&config, embedder)?;

    let result = pipeline.evaluate(&resume, &job_description)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    Ok(())
}

fn print_report(result: &EvaluationResult) {
    println!("Match score: {}", result.score);
    println!("{}", result.feedback());

    for warning in &result.warnings {
        println!("warning: {warning}");
    }

    println!();
    println!(
        "Resume: {} words, {} characters",
        result.resume_stats.word_count, result.resume_stats.char_count
    );
    println!(
        "Job description: {} words, {} characters",
        result.job_description_stats.word_count, result.job_description_stats.char_count
    );

    println!();
    println!("--- Resume preview ---");
    println!("{}", result.resume_preview);
    println!();
    println!("--- Job description preview ---");
    println!("{}", result.job_description_preview);
}
