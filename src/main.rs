use clap::{Parser, Subcommand};
use nfl_standings::server::{self, ServerConfig};
use nfl_standings::standings::{self, fetch, print::StandingsTable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "NFL standings scraped from pro-football-reference")]
struct Cli {
    /// Page snapshot to read or write, overrides CACHE_PATH
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the standings over HTTP (default)
    Serve,
    /// Download the standings page and store it as the snapshot
    Fetch,
    /// Print standings from the snapshot
    Print {
        /// Table ids to print
        #[arg(default_values_t = [String::from("AFC"), String::from("NFC")])]
        conferences: Vec<String>,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with RUST_LOG=debug to see what gets fetched and parsed
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env();
    if let Some(cache) = cli.cache {
        config.cache_path = cache;
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::serve(config).await?,
        Command::Fetch => {
            let html = fetch::fetch_page(&config.source_url).await?;
            fetch::save_html_to_file(&config.cache_path, &html)?;
            println!("Saved {} to {}", config.source_url, config.cache_path.display());
        }
        Command::Print { conferences, json } => {
            let html = fetch::read_html_from_file(&config.cache_path)?;
            for conference in conferences {
                let standings = match standings::extract_standings(&conference, &html) {
                    Ok(standings) => standings,
                    Err(e) => {
                        eprintln!("{}", e);
                        vec![]
                    }
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(&standings)?);
                } else {
                    println!("{}", conference);
                    print!("{}", StandingsTable(&standings));
                }
            }
        }
    }
    Ok(())
}
