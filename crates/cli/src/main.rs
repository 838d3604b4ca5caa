use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use serplens_core::{AnalyzerOutcome, AuditConfig, Auditor, SeoReport};

mod echo;

use echo::{colored_score, print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Audit a web page across six SEO dimensions
#[derive(Parser, Debug)]
#[command(name = "serplens")]
#[command(author = "Serplens Contributors")]
#[command(version = VERSION)]
#[command(about = "Audit a web page across six SEO dimensions", long_about = None)]
struct Args {
    /// URL of the page to audit
    #[arg(value_name = "URL")]
    url: String,

    /// Competitor page URL to compare against
    #[arg(long, value_name = "URL")]
    competitor: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// How many external links to check for liveness
    #[arg(long, default_value = "5", value_name = "NUM")]
    sample_size: usize,

    /// Skip external link liveness checks
    #[arg(long)]
    no_sampling: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Render the report as plain text, for file output.
fn render_plain(report: &SeoReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("SEO report for {}\n", report.url));
    if report.final_url != report.url {
        out.push_str(&format!("Resolved to {}\n", report.final_url));
    }
    out.push_str(&format!("Status: {}\n", report.status_code));
    out.push_str(&format!("Overall score: {}/100\n", report.overall_score()));

    for (dimension, outcome) in report.dimensions() {
        out.push('\n');
        match outcome {
            AnalyzerOutcome::Scored { score, insights } => {
                out.push_str(&format!("{:<22} {:>3}/100\n", dimension.label(), score));
                for insight in insights {
                    out.push_str(&format!("  - {}\n", insight));
                }
            }
            AnalyzerOutcome::Failed { kind, reason } => {
                out.push_str(&format!(
                    "{:<22} could not be scored: {} ({})\n",
                    dimension.label(),
                    reason,
                    kind.as_str()
                ));
            }
        }
    }

    out
}

/// Print the report to the terminal with styling.
fn print_styled(report: &SeoReport) {
    println!();
    println!("{} {}", "SEO report for".bold(), report.url.bright_white().underline());
    if report.final_url != report.url {
        println!("{} {}", "Resolved to".dimmed(), report.final_url.dimmed());
    }
    println!("{} {}", "Status:".dimmed(), report.status_code.to_string().bright_white());
    println!(
        "{} {}",
        "Overall score:".bold(),
        colored_score(report.overall_score())
    );

    for (dimension, outcome) in report.dimensions() {
        println!();
        match outcome {
            AnalyzerOutcome::Scored { score, insights } => {
                println!("{} {}", format!("{:<22}", dimension.label()).bold(), colored_score(*score));
                for insight in insights {
                    println!("  {} {}", "-".dimmed(), insight);
                }
            }
            AnalyzerOutcome::Failed { kind, reason } => {
                println!(
                    "{} {} {}",
                    format!("{:<22}", dimension.label()).bold(),
                    "could not be scored:".bright_yellow(),
                    reason
                );
                println!("  {} {}", "-".dimmed(), kind.as_str().dimmed());
            }
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("serplens_core=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let sample_size = if args.no_sampling { 0 } else { args.sample_size };
    let mut builder = AuditConfig::builder().timeout(args.timeout).sample_size(sample_size);
    if let Some(ua) = args.user_agent {
        builder = builder.user_agent(ua);
    }
    let auditor = Auditor::with_config(builder.build());

    if args.verbose {
        print_step(1, 2, &format!("Analyzing {}", args.url.bright_white().underline()));
        if let Some(competitor) = &args.competitor {
            eprintln!("  {} {}", "Competitor:".dimmed(), competitor.bright_white());
        }
    }

    let report = auditor
        .analyze_with_competitor(&args.url, args.competitor.as_deref())
        .await
        .with_context(|| format!("Failed to analyze {}", args.url))?;

    if args.verbose {
        print_step(2, 2, "Rendering report");
        eprintln!();
    }

    let output = if args.json {
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        render_plain(&report)
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            if args.json {
                println!("{}", output);
            } else {
                print_styled(&report);
            }
        }
    }

    Ok(())
}
