//! manuscribe - Leanpub manuscript rewriter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use manuscribe::markdown::{site_fragment, slugify};
use manuscribe::{RewriteConfig, RunReport};

#[derive(Parser)]
#[command(name = "manuscribe")]
#[command(version, about = "Rewrite a manuscript's site markup into Leanpub markup", long_about = None)]
#[command(after_help = "EXAMPLES:
    manuscribe                          Rewrite every file in manuscript/Book.txt
    manuscribe --dry-run --json         Report what would change, as JSON
    manuscribe slug \"The DOM: Nodes\"    Show the anchor for a heading")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory the manifest entries are relative to
    #[arg(long, value_name = "DIR", default_value = "manuscript")]
    manuscript: PathBuf,

    /// Manifest listing the files to rewrite, relative to the manuscript directory
    #[arg(long, value_name = "FILE", default_value = "Book.txt")]
    manifest: PathBuf,

    /// Rewrite in memory without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the anchor slug and site fragment for a title
    Slug {
        #[arg(value_name = "TITLE", required = true)]
        title: Vec<String>,
    },
}

/// Log to stderr so stdout stays clean for `--json` and `slug`.
fn init_tracing(quiet: bool) {
    let default = if quiet { "manuscribe=warn" } else { "manuscribe=info" };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if let Some(Command::Slug { title }) = &cli.command {
        let title = title.join(" ");
        println!("{}", slugify(&title));
        println!("{}", site_fragment(&title));
        return ExitCode::SUCCESS;
    }

    let config = RewriteConfig {
        manuscript_dir: cli.manuscript,
        manifest: cli.manifest,
        dry_run: cli.dry_run,
    };

    match manuscribe::run(&config) {
        Ok(report) => match print_report(&report, cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &RunReport, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
        println!("{out}");
    } else if report.naked_urls() > 0 {
        eprintln!("{} naked URLs found", report.naked_urls());
    }
    Ok(())
}
