use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hanzi_practice_pdf::layout::LayoutMode;
use hanzi_practice_pdf::{DirectorySource, GeometryProfile, WorksheetConfig, generate_worksheet};

/// Generate a printable hanzi handwriting practice worksheet as PDF.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Characters to practice; non-hanzi input is ignored
    #[arg(required_unless_present = "list_papers")]
    characters: Vec<String>,

    /// Output PDF path
    #[arg(short, long, default_value = "worksheet.pdf")]
    output: PathBuf,

    /// Paper profile (see --list-papers)
    #[arg(short, long, default_value = "a6")]
    paper: String,

    /// Directory holding hanzi-writer-data `<character>.json` files
    #[arg(short, long, default_value = "hanzi-writer-data")]
    data_dir: PathBuf,

    /// Fill each row with progressively revealed strokes to trace over
    #[arg(long)]
    tracing: bool,

    /// Show a stroke-order hint strip above each character (ignored with --tracing)
    #[arg(long)]
    hint: bool,

    /// Print the available paper profiles and exit
    #[arg(long)]
    list_papers: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.list_papers {
        for name in GeometryProfile::names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let profile = match GeometryProfile::lookup(&cli.paper) {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = WorksheetConfig::new(profile, LayoutMode::new(cli.tracing, cli.hint));
    let source = DirectorySource::new(&cli.data_dir);
    log::debug!("Stroke data directory: {}", source.dir().display());
    let text = cli.characters.concat();

    match generate_worksheet(&text, &config, &source, &cli.output) {
        Ok(report) => {
            println!(
                "Wrote {} ({} characters, {} skipped, {} pages)",
                cli.output.display(),
                report.rendered.len(),
                report.skipped.len(),
                report.pages
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to generate worksheet: {e}");
            ExitCode::FAILURE
        }
    }
}
