mod display;

use clap::{Parser, Subcommand, ValueEnum};
use polisight_core::{RegistryConfig, SentimentConfig};
use polisight_engine::{InvestmentAnalyzer, SentimentAnalyzer};
use polisight_registry::{RegistryClient, SentimentClient};

#[derive(Parser)]
#[command(name = "polisight", version, about = "Legislative impact and investment scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an investment against pending legislation in its sector
    Analyze {
        #[arg(long, value_enum)]
        sector: Sector,
        /// Investment amount in dollars
        #[arg(long)]
        amount: String,
        /// Estimated return in dollars
        #[arg(long = "return")]
        estimated_return: String,
        /// Free-text description of the investment plan
        #[arg(long)]
        description: String,
        /// Public feedback to run through the sentiment path as well
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Classify market sentiment of public feedback text
    Sentiment {
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Sector {
    Housing,
    Education,
    Healthcare,
}

impl Sector {
    fn as_str(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("polisight v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            sector,
            amount,
            estimated_return,
            description,
            feedback,
        } => {
            let registry = RegistryClient::new(RegistryConfig::from_env()?)?;
            let analyzer = InvestmentAnalyzer::new(registry);
            let result = analyzer
                .analyze_investment(sector.as_str(), &amount, &estimated_return, &description)
                .await;
            display::print_analysis(&result);

            if let Some(feedback) = feedback {
                let report = sentiment_analyzer()?
                    .analyze_market_sentiment(&feedback)
                    .await;
                display::print_sentiment(&report);
            }
        }
        Command::Sentiment { text } => {
            let report = sentiment_analyzer()?.analyze_market_sentiment(&text).await;
            display::print_sentiment(&report);
        }
    }

    Ok(())
}

fn sentiment_analyzer() -> anyhow::Result<SentimentAnalyzer<SentimentClient>> {
    let client = SentimentClient::new(SentimentConfig::from_env())?;
    Ok(SentimentAnalyzer::new(client))
}
