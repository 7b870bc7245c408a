use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use fashion_mate::clients::{GeminiClient, RecommendationClient};
use fashion_mate::config::Config;
use fashion_mate::models::StylistResponse;
use fashion_mate::prompts::SUGGESTED_OCCASIONS;
use fashion_mate::session::{Phase, StylistSession};
use fashion_mate::store::{FileStore, SavedOutfits};
use fashion_mate::validation::Field;

#[derive(Parser)]
#[command(name = "fashion-mate", about = "AI outfit recommendations from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request an outfit recommendation
    Recommend {
        /// Event or occasion to dress for
        #[arg(long)]
        occasion: String,
        /// Style focus guiding the recommendation (Female, Male, Non-Binary)
        #[arg(long)]
        style_focus: String,
        /// Optional extra notes or preferences
        #[arg(long)]
        preferences: Option<String>,
        /// Save the primary outfit after a successful recommendation
        #[arg(long)]
        save: bool,
    },
    /// Manage the saved-outfit collection
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
    /// Print quick occasion suggestions
    Suggestions,
}

#[derive(Subcommand)]
enum SavedCommand {
    /// List saved outfits
    List,
    /// Remove a saved outfit by title
    Remove {
        #[arg(long)]
        title: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    fashion_mate::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fashion_mate=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Recommend {
            occasion,
            style_focus,
            preferences,
            save,
        } => {
            recommend(&config, occasion, style_focus, preferences, save).await?;
        }
        Command::Saved { command } => {
            let saved = SavedOutfits::new(FileStore::new(config.data_dir()));
            match command {
                SavedCommand::List => {
                    let outfits = saved.saved();
                    if outfits.is_empty() {
                        println!("No saved outfits yet.");
                    }
                    for outfit in outfits {
                        println!("{}", outfit.title);
                        println!("  {} / {} / {}", outfit.top, outfit.bottom, outfit.footwear);
                    }
                }
                SavedCommand::Remove { title } => {
                    if saved.remove(&title) {
                        println!("Removed \"{title}\".");
                    } else {
                        println!("No saved outfit titled \"{title}\".");
                    }
                }
            }
        }
        Command::Suggestions => {
            for suggestion in SUGGESTED_OCCASIONS {
                println!("{suggestion}");
            }
        }
    }

    Ok(())
}

async fn recommend(
    config: &Config,
    occasion: String,
    style_focus: String,
    preferences: Option<String>,
    save: bool,
) -> Result<()> {
    let client = RecommendationClient::new(GeminiClient::new(&config.gemini)?);
    let saved = SavedOutfits::new(FileStore::new(config.data_dir()));
    let mut session = StylistSession::new(client, saved);

    let form = session.form_mut();
    form.set_value(Field::Occasion, occasion);
    form.set_value(Field::GenderFocus, style_focus);
    form.set_value(Field::Preferences, preferences.unwrap_or_default());

    info!("requesting recommendation");
    let phase = session.submit().await.clone();
    match phase {
        Phase::Ready(response) => {
            print_response(&response);
            if save {
                match session.toggle_save_current() {
                    Some(true) => println!("\nSaved \"{}\".", response.primary_outfit.title),
                    Some(false) => println!("\nUnsaved \"{}\".", response.primary_outfit.title),
                    None => {}
                }
            }
            Ok(())
        }
        Phase::Failed(message) => bail!("{message}"),
        Phase::Editing => {
            let form = session.form();
            for field in [Field::Occasion, Field::GenderFocus, Field::Preferences] {
                let message = form.error(field);
                if !message.is_empty() {
                    eprintln!("{field}: {message}");
                }
            }
            bail!("invalid input")
        }
        Phase::Loading => unreachable!("submit resolves before returning"),
    }
}

fn print_response(response: &StylistResponse) {
    let primary = &response.primary_outfit;
    println!("Primary Outfit: {}", primary.title);
    println!("  Top:         {}", primary.top);
    println!("  Bottom:      {}", primary.bottom);
    println!("  Footwear:    {}", primary.footwear);
    println!("  Accessories: {}", primary.accessories.join(", "));
    println!("  Why:         {}", primary.reasoning);

    println!("\nMore ways to wear it:");
    for suggestion in &response.additional_suggestions {
        println!("  {}: {}", suggestion.label, suggestion.outfit_summary);
    }

    println!("\nStyling notes: {}", response.styling_notes);
}
