use clap::Parser;
use flagquiz::ScoringRule;
use flagquiz::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "flagquiz", about = "Guess the flag in your terminal")]
struct Args {
    /// How wrong answers are scored
    #[arg(short, long, value_enum)]
    scoring: Option<ScoringRule>,

    /// Seed for the round generator (repeatable games)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip scheduling practice reminders
    #[arg(long)]
    no_reminders: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flagquiz.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flagquiz.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("flagquiz: {e}");
            std::process::exit(2);
        }
    };

    let overrides = config::CliOverrides {
        scoring: args.scoring,
        seed: args.seed,
        no_reminders: args.no_reminders,
    };
    let resolved = match config::resolve(&file_config, &overrides) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("flagquiz: {e}");
            std::process::exit(2);
        }
    };

    log::info!(
        "flagquiz starting up: scoring={}, {} countries",
        resolved.scoring.label(),
        resolved.countries.len()
    );

    flagquiz::tui::run(resolved)
}
