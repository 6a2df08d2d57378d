mod batch;
mod entry;
mod error;
mod fetch;
mod parser;
mod settings;
mod store;
mod wordlist;

use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::fetch::KbbiClient;
use crate::settings::Settings;
use crate::store::Store;

#[derive(Parser)]
#[command(name = "kbbi_scraper", about = "KBBI Daring entry scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every headword listed by kbbi.vercel.app
    All {
        /// Skip the list up to and including this word
        resume_after: Option<String>,
    },
    /// Fetch every word in the Katla word list
    Katla {
        /// Skip the list up to and including this word
        resume_after: Option<String>,
    },
    /// Write the stored five-letter headwords to the word list file
    List,
    /// Fetch and store a single word, e.g. `kbbi_scraper makan`.
    /// Put `--` before words that start with `-` or clash with a command
    /// name: `kbbi_scraper -- -kah`, `kbbi_scraper -- list`.
    #[command(external_subcommand)]
    Word(Vec<String>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(?settings, "Settings loaded");

    let store = Store::new(&settings.data_dir);

    let result = match cli.command {
        Commands::Word(args) => {
            let word = args.join(" ");
            let client = KbbiClient::new(&settings)?;
            batch::define_single(&client, &store, &word, settings.max_redirect_depth).await;
            Ok(())
        }
        Commands::All { resume_after } => {
            let http = reqwest::Client::new();
            let words = wordlist::fetch_index_words(&http, &settings.index_url).await?;
            run_batch(&settings, &store, &words, resume_after.as_deref()).await
        }
        Commands::Katla { resume_after } => {
            let http = reqwest::Client::new();
            let words = wordlist::fetch_katla_words(&http, &settings.katla_url).await?;
            run_batch(&settings, &store, &words, resume_after.as_deref()).await
        }
        Commands::List => {
            let count = store::write_word_list(&store, &settings.word_list_path)?;
            println!(
                "Wrote {} five-letter words to {}",
                count,
                settings.word_list_path.display()
            );
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

async fn run_batch(
    settings: &Settings,
    store: &Store,
    words: &[String],
    resume_after: Option<&str>,
) -> anyhow::Result<()> {
    let remaining = wordlist::remaining_after(words, resume_after);
    let client = KbbiClient::new(settings)?;
    let stats = batch::define_all(&client, store, remaining, settings.max_redirect_depth).await?;
    println!(
        "Done: {} words ({} stored, {} missing).",
        stats.total, stats.stored, stats.missing
    );
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_is_an_external_subcommand() {
        let cli = Cli::try_parse_from(["kbbi_scraper", "makan"]).unwrap();
        assert!(matches!(cli.command, Commands::Word(ref w) if w == &["makan"]));

        let cli = Cli::try_parse_from(["kbbi_scraper", "air", "mata"]).unwrap();
        assert!(matches!(cli.command, Commands::Word(ref w) if w.join(" ") == "air mata"));
    }

    #[test]
    fn double_dash_passes_hyphenated_words() {
        assert!(Cli::try_parse_from(["kbbi_scraper", "-kah"]).is_err());

        let cli = Cli::try_parse_from(["kbbi_scraper", "--", "-kah"]).unwrap();
        assert!(matches!(cli.command, Commands::Word(ref w) if w == &["-kah"]));

        let cli = Cli::try_parse_from(["kbbi_scraper", "--", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Word(ref w) if w == &["list"]));
    }

    #[test]
    fn bulk_commands_take_optional_resume_word() {
        let cli = Cli::try_parse_from(["kbbi_scraper", "all", "abadi"]).unwrap();
        assert!(matches!(cli.command, Commands::All { resume_after: Some(ref w) } if w == "abadi"));

        let cli = Cli::try_parse_from(["kbbi_scraper", "katla"]).unwrap();
        assert!(matches!(cli.command, Commands::Katla { resume_after: None }));

        let cli = Cli::try_parse_from(["kbbi_scraper", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(std::time::Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(std::time::Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(std::time::Duration::from_secs(3725)), "1h 2m 5s");
    }
}
