use anyhow::Result;
use clap::{Parser, Subcommand};
use emojigraph::config::AppConfig;
use emojigraph::sentiment::analyze_sentiment;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "emojigraph",
    version,
    about = "Heuristic sentiment analysis with a retro terminal dashboard"
)]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score text once and print the result
    Analyze {
        /// Text to analyze; reads stdin when omitted
        text: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Some(Command::Analyze { text, json }) => run_analyze(text, json),
        None => emojigraph::ui::run(config).await,
    }
}

fn run_analyze(words: Vec<String>, json: bool) -> Result<()> {
    let text = if words.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        words.join(" ")
    };

    let result = analyze_sentiment(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("sentiment: {}", result.sentiment.as_str());
        println!("score:     {}/100", result.score);
        println!(
            "breakdown: {} positive / {} neutral / {} negative",
            result.breakdown.positive, result.breakdown.neutral, result.breakdown.negative
        );
        println!("best:      {}", result.best_snippet);
        println!("neutral:   {}", result.neutral_snippet);
        println!("worst:     {}", result.worst_snippet);
    }

    Ok(())
}
