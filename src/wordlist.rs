use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct EntryIndex {
    entries: Vec<String>,
}

/// Fetch the kbbi.vercel.app index and turn its entry paths into headwords.
pub async fn fetch_index_words(client: &reqwest::Client, url: &str) -> Result<Vec<String>> {
    info!("Fetching entry index: {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()
        .context("Failed to fetch entry index")?
        .text()
        .await
        .context("Failed to fetch entry index")?;

    let index: EntryIndex = serde_json::from_str(&body).context("Malformed entry index")?;
    info!("Total entries in index: {}", index.entries.len());

    let words: Vec<String> = index
        .entries
        .iter()
        .filter_map(|path| headword_from_path(path))
        .collect();
    info!("Headwords after filtering: {}", words.len());
    Ok(words)
}

/// Fetch the Katla word list, a plain JSON array of words.
pub async fn fetch_katla_words(client: &reqwest::Client, url: &str) -> Result<Vec<String>> {
    info!("Fetching Katla words: {}", url);
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()
        .context("Failed to fetch Katla words")?
        .text()
        .await
        .context("Failed to fetch Katla words")?;

    let words: Vec<String> = serde_json::from_str(&body).context("Malformed Katla word list")?;
    info!("Total Katla words: {}", words.len());
    Ok(words)
}

/// `"/entri/air%20mata"` → `"air mata"`. Query-like entries are dropped.
fn headword_from_path(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let word = percent_decode_str(segment).decode_utf8().ok()?;
    if word.contains('?') {
        return None;
    }
    Some(word.into_owned())
}

/// Words left to process when resuming after `resume_after`.
/// An unknown or missing resume word means starting from the top.
pub fn remaining_after<'a>(words: &'a [String], resume_after: Option<&str>) -> &'a [String] {
    let start = resume_after
        .and_then(|last| words.iter().position(|w| w == last))
        .map_or(0, |i| i + 1);
    &words[start..]
}
