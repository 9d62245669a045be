use clap::Parser;
use email_harvester::report::build_report;
use email_harvester::utils::logger;
use std::path::Path;

const USAGE: &str = "Usage: show-first-email <input-file>

This script shows the first email for each business entry in the CSV file.

Example:
  show-first-email hvac-in-chicago-with-emails.csv
  show-first-email new-lenox.csv";

#[derive(Parser)]
#[command(name = "show-first-email")]
#[command(about = "Show the first valid email for each business in a CSV file")]
#[command(disable_help_flag = true)]
struct Args {
    /// CSV file produced by email-harvester
    input_file: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => usage_and_exit(),
    };

    logger::init_cli_logger(args.verbose);

    let Some(input_file) = args.input_file else {
        usage_and_exit();
    };

    println!("Showing first email for each business in: {}", input_file);
    println!("{}", "=".repeat(50));

    if !Path::new(&input_file).is_file() {
        eprintln!("Error: File \"{}\" not found.", input_file);
        std::process::exit(1);
    }

    let content = match std::fs::read(&input_file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    };

    tracing::debug!("Read {} bytes from {}", content.len(), input_file);
    print!("{}", build_report(&content));
}

fn usage_and_exit() -> ! {
    println!("{}", USAGE);
    std::process::exit(1);
}
