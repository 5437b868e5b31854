use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cohort;
mod load;
mod models;
mod report;

#[derive(Parser)]
#[command(name = "lp-analytics")]
#[command(about = "Descriptive reports over an AngelList syndicate LP export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bracket distribution and cohort retention reports
    #[command(name = "analyze_syndicate")]
    AnalyzeSyndicate {
        /// LP roster export with the platform's original column headers
        #[arg(long)]
        input_csv: PathBuf,
        /// Reserved for file-based report output
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::AnalyzeSyndicate { input_csv, out_dir } => {
            let records = load::read_investors(&input_csv)?;
            debug!(rows = records.len(), "loaded {}", input_csv.display());

            let summary = cohort::status_summary(&records);
            info!(
                "investment status mix: {}",
                serde_json::to_string_pretty(&summary)?
            );

            let brackets = report::bracket_distribution(&records);
            println!("{}", report::BRACKET_CAPTION);
            print!("{}", report::render_bracket_table(&brackets));

            let pivot = cohort::build_cohort_pivot(&records)?;
            println!("{}", report::COHORT_CAPTION);
            print!("{}", report::render_cohort_table(&pivot));

            println!("{}", report::COHORT_PERCENT_CAPTION);
            print!("{}", report::render_cohort_percent_table(&pivot));

            if let Some(dir) = out_dir {
                debug!(
                    "ignoring --out-dir {}; file reports are not implemented yet",
                    dir.display()
                );
            }
        }
    }

    Ok(())
}
