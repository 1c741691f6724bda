//! molscan: highlight molecular data in free-form text.
//!
//! Reads a message from a file or stdin, classifies it, and renders
//! the result as ANSI-highlighted text, JSON segments, a per-category
//! summary, or HTML.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::{Color, Colorize};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use molscan_core::{
    render_html, style_for, HighlightColor, HighlightSummary, MolecularClassifier, Segment,
};

#[derive(Parser)]
#[command(name = "molscan", version, about = "Highlight molecular data in text")]
struct Cli {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Classify a truncated preview of at most this many characters
    #[arg(long, value_name = "CHARS")]
    max_length: Option<usize>,

    /// Disable ANSI colors in text output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// ANSI-highlighted text
    Text,
    /// JSON segment list
    Json,
    /// Per-category match counts
    Summary,
    /// HTML spans
    Html,
}

static INIT: Once = Once::new();

/// Initialize logging from `MOLSCAN_LOG`; defaults to warnings only.
fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MOLSCAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("molscan=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn terminal_color(color: HighlightColor) -> Option<Color> {
    match color {
        HighlightColor::None => None,
        HighlightColor::Blue => Some(Color::Blue),
        HighlightColor::Emerald => Some(Color::Green),
        HighlightColor::Violet => Some(Color::Magenta),
        HighlightColor::Amber => Some(Color::Yellow),
        HighlightColor::Cyan => Some(Color::Cyan),
        HighlightColor::Pink => Some(Color::BrightMagenta),
    }
}

fn render_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let style = style_for(segment.category);
        match terminal_color(style.color) {
            Some(color) => {
                out.push_str(&segment.text.as_str().color(color).underline().to_string());
            }
            None => out.push_str(&segment.text),
        }
    }
    out
}

fn render_summary(summary: &HighlightSummary) -> String {
    if !summary.has_molecular_data() {
        return "no molecular data detected".to_string();
    }
    let mut out = String::new();
    for (category, count) in &summary.counts {
        out.push_str(&format!("{}: {}\n", style_for(*category).label, count));
    }
    out.push_str(&format!(
        "{} match(es) across {} data type(s)",
        summary.total_matches(),
        summary.category_count()
    ));
    out
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let text = read_input(cli.input.as_ref())?;
    let classifier = MolecularClassifier::new()?;

    let segments = match cli.max_length {
        Some(max) => classifier.classify_preview(&text, max),
        None => classifier.classify(&text),
    };
    debug!(segments = segments.len(), "classification complete");

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&segments)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
        OutputFormat::Summary => {
            let summary = HighlightSummary::from_segments(&segments);
            println!("{}", render_summary(&summary));
        }
        OutputFormat::Html => println!("{}", render_html(&segments)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use molscan_core::classify;

    #[test]
    fn test_render_text_without_color_is_lossless() {
        colored::control::set_override(false);
        let text = "Compare 4INS and 1BOM for insulin variants";
        assert_eq!(render_text(&classify(text)), text);
    }

    #[test]
    fn test_render_summary_plain() {
        let summary = HighlightSummary::from_segments(&classify("hello there"));
        assert_eq!(render_summary(&summary), "no molecular data detected");
    }

    #[test]
    fn test_render_summary_counts() {
        let summary = HighlightSummary::from_segments(&classify("see 1UBQ and 4INS"));
        let rendered = render_summary(&summary);
        assert!(rendered.contains("PDB Structure ID: 2"));
        assert!(rendered.contains("2 match(es) across 1 data type(s)"));
    }
}
