use chrono::Local;
use chrono_notes::application::{ConfigService, OpenNoteService};
use chrono_notes::cli::{format_config_report, format_outcome, Cli, Commands};
use chrono_notes::error::ChronoNoteError;
use chrono_notes::infrastructure::{ConfigProvider, FileSystemProvider, SystemOpener};
use clap::Parser;
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::error!("{} failure", e.name());
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr so stdout carries only command output
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ChronoNoteError> {
    let config = ConfigProvider::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Config { interval }) => {
            let report = ConfigService::new(config).report(interval);
            print!("{}", format_config_report(&report));
            Ok(())
        }
        None => {
            if let Some(chrono_arg) = cli.chrono_arg {
                let reference_date = cli.date.unwrap_or_else(|| Local::now().date_naive());
                let files = FileSystemProvider::from_env()?;
                let service =
                    OpenNoteService::new(config, files, SystemOpener::from_env(), reference_date);

                let outcome = service.execute(&chrono_arg, !cli.no_open)?;
                println!("{}", format_outcome(&outcome));
                Ok(())
            } else {
                // No command and no chrono argument, show usage
                println!("chrono-notes - Open periodic Obsidian notes");
                println!("Usage: chrono-notes <Current|Next|Previous><Daily|Weekly|Monthly|Quarterly|Annually>");
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}
