use clap::Parser;
use exam_index_core::config::{DEFAULT_DATA_DIR, INDEX_FILE_NAME, MATCH_SUFFIX};
use exam_index_core::{CoreError, IndexBuilder, IndexConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "gen_index=warn,exam_index_core=warn";

#[derive(Parser, Debug)]
#[command(name = "gen_index", about = "Write a sorted index.json of the question files")]
struct Args {
    /// Directory holding the question files
    #[arg(default_value = DEFAULT_DATA_DIR)]
    dir: PathBuf,

    /// Index file name, written inside DIR and excluded from the listing
    #[arg(long, default_value = INDEX_FILE_NAME)]
    output_name: String,

    /// Only entries whose name ends with this are listed
    #[arg(long, default_value = MATCH_SUFFIX)]
    suffix: String,

    /// Print the report as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Log scan decisions at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let cfg = IndexConfig::for_dir(&args.dir)
        .with_output_name(args.output_name)
        .with_suffix(args.suffix);
    tracing::debug!(?cfg, "resolved config");

    match IndexBuilder::build(&cfg) {
        Ok(report) => {
            if args.json {
                match report.to_json_pretty() {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("gen_index error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                for line in report.summary_lines() {
                    println!("{}", line);
                }
            }
        }
        Err(CoreError::DirectoryNotFound(dir)) => {
            println!("Error: Directory {} not found", dir.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("gen_index error: {}", e);
            std::process::exit(1);
        }
    }
}

// Logs go to stderr; stdout carries only the summary.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
