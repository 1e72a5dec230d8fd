// ABOUTME: CLI binary for the minjust-parties scraper.
// ABOUTME: Reads a saved page, extracts the party list, prints a report, writes JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use minjust_parties::options::{DEFAULT_BASE_ORIGIN, DEFAULT_INPUT, DEFAULT_OUTPUT};
use minjust_parties::report::{print_report, save_json};
use minjust_parties::{Options, Pipeline};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "parties")]
#[command(about = "Extract the registered political parties list from a saved page")]
struct Args {
    /// Pre-downloaded HTML page to parse
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output JSON file
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Origin prepended to site-relative document links
    #[arg(long = "base-origin", default_value = DEFAULT_BASE_ORIGIN)]
    base_origin: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Validate args
    let base_origin = match Url::parse(&args.base_origin) {
        Ok(url) if url.has_host() => args.base_origin.trim_end_matches('/').to_string(),
        _ => {
            eprintln!("error: --base-origin must be an absolute URL with a host");
            return ExitCode::from(1);
        }
    };

    println!(
        "parsing political parties from local HTML file {:?}...",
        args.input
    );

    let pipeline = Pipeline::new(Options {
        input_path: args.input,
        output_path: args.output,
        base_origin,
    });

    let records = match pipeline.run() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(1);
        }
    };

    print_report(&records);

    // A failed write is diagnosed but does not fail the run.
    let output_path = &pipeline.options().output_path;
    match save_json(&records, output_path) {
        Ok(()) => println!("saved to {}", output_path.display()),
        Err(e) => eprintln!("error: {}", e),
    }

    ExitCode::SUCCESS
}
