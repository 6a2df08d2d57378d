use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use crate::fetch::{self, PageSource};
use crate::store::Store;

/// Counts returned after a bulk run.
#[derive(Debug, Default, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub stored: usize,
    pub missing: usize,
}

enum Outcome {
    Stored,
    Missing,
}

async fn define_word<S>(source: &S, store: &Store, word: &str, max_depth: usize) -> Result<Outcome>
where
    S: PageSource + ?Sized,
{
    let entries = fetch::resolve(source, word, max_depth).await?;
    if entries.is_empty() {
        warn!("Word {} does not exist", word);
        return Ok(Outcome::Missing);
    }
    let path = store.save(word, &entries)?;
    info!("Definition for word {} stored ({} entries, {})", word, entries.len(), path.display());
    Ok(Outcome::Stored)
}

/// Resolve and store one word. Failures are logged, never returned.
pub async fn define_single<S>(source: &S, store: &Store, word: &str, max_depth: usize)
where
    S: PageSource + ?Sized,
{
    if let Err(e) = define_word(source, store, word, max_depth).await {
        error!("Failed to get definitions for {}: {:#}", word, e);
    }
}

/// Resolve and store `words` in order. Missing words are skipped; any other
/// failure stops the run, since it usually means we are being throttled.
pub async fn define_all<S>(
    source: &S,
    store: &Store,
    words: &[String],
    max_depth: usize,
) -> Result<BatchStats>
where
    S: PageSource + ?Sized,
{
    let mut stats = BatchStats {
        total: words.len(),
        ..Default::default()
    };
    info!("Fetching definitions, {} words remaining", words.len());

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut last_done: Option<&str> = None;
    for word in words {
        pb.set_message(word.clone());
        match define_word(source, store, word, max_depth).await {
            Ok(Outcome::Stored) => stats.stored += 1,
            Ok(Outcome::Missing) => stats.missing += 1,
            Err(e) => {
                pb.abandon();
                match last_done {
                    Some(last) => error!("Stopping batch at {}; resume after {}", word, last),
                    None => error!("Stopping batch at {}, nothing processed yet", word),
                }
                return Err(e).with_context(|| format!("Failed to get definitions for {}", word));
            }
        }
        last_done = Some(word.as_str());
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Processed {} words ({} stored, {} missing)",
        stats.total, stats.stored, stats.missing
    );
    Ok(stats)
}
