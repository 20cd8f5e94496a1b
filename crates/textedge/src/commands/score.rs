//! Score command: advantage score, metrics, and advice.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use tracing::{debug, instrument};

use textedge_core::{ScoreReport, score_text};

use super::{read_input_file, read_input_stream};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score. Reads stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Minimum acceptable advantage score (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

impl ScoreArgs {
    /// The file to read, or `None` for stdin.
    fn input_file(&self) -> Option<&Utf8PathBuf> {
        self.file.as_ref().filter(|f| f.as_str() != "-")
    }

    fn label(&self) -> String {
        self.input_file()
            .map_or_else(|| "<stdin>".to_string(), ToString::to_string)
    }
}

/// Score a file or stdin and print the report.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.label()))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing score command");

    let label = args.label();
    let content = match args.input_file() {
        Some(path) => read_input_file(path, max_input_bytes)?,
        None => read_input_stream(std::io::stdin().lock(), max_input_bytes)?,
    };

    let min_score = args.min_score.or(config_min_score);
    let report = score_text(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&label, &report);
    }

    if !report.passes(min_score) {
        bail!(
            "{label} advantage score {} is below minimum {}. See the tips above.",
            report.metrics.advantage,
            min_score.unwrap_or_default(),
        );
    }

    Ok(())
}

fn print_report(label: &str, report: &ScoreReport) {
    let m = &report.metrics;

    let score = m.advantage.to_string();
    let score_str = if m.advantage >= 70 {
        score.if_supports_color(Stdout, |t| t.green()).to_string()
    } else if m.advantage >= 50 {
        score.if_supports_color(Stdout, |t| t.yellow()).to_string()
    } else {
        score.if_supports_color(Stdout, |t| t.red()).to_string()
    };

    println!("{}", label.if_supports_color(Stdout, |t| t.bold()));
    println!("\n  {} {score_str}/100", heading("Advantage:"));
    println!(
        "  {} {:.1}, {} words ({} unique)",
        heading("Readability:"),
        m.readability,
        m.token_count,
        m.unique_words,
    );
    println!(
        "  {} {:.1}% jargon, structure {:.2}, novelty {:.2}",
        heading("Signals:"),
        m.jargon_density * 100.0,
        m.structure_score,
        m.novelty_score,
    );

    println!("\n  {}", heading("Tips:"));
    for tip in &report.advice {
        println!("    - {tip}");
    }
}

fn heading(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.cyan()).to_string()
}
