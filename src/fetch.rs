use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::entry::EntryRecord;
use crate::error::ResolveError;
use crate::parser::{self, EntryBody};
use crate::settings::Settings;

/// Anything that can hand back the entry page HTML for a headword.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, word: &str) -> Result<String, ResolveError>;
}

/// Fetches entry pages from KBBI Daring, one request at a time.
pub struct KbbiClient {
    client: reqwest::Client,
    entry_url: String,
}

impl KbbiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            entry_url: settings.entry_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PageSource for KbbiClient {
    async fn fetch_page(&self, word: &str) -> Result<String, ResolveError> {
        let url = format!("{}/{}", self.entry_url, word);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::RateLimited {
                word: word.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Fetch and parse every entry for `word`, following non-standard spellings
/// to their standard form at most `max_depth` hops deep.
///
/// An empty result means the page had no entries, i.e. the word does not exist.
pub async fn resolve<S>(
    source: &S,
    word: &str,
    max_depth: usize,
) -> Result<Vec<EntryRecord>, ResolveError>
where
    S: PageSource + ?Sized,
{
    resolve_at(source, word, 0, max_depth).await
}

async fn resolve_at<S>(
    source: &S,
    word: &str,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<EntryRecord>, ResolveError>
where
    S: PageSource + ?Sized,
{
    if depth > max_depth {
        return Err(ResolveError::RedirectDepthExceeded {
            word: word.to_string(),
            depth: max_depth,
        });
    }

    let html = source.fetch_page(word).await?;
    let entries = parser::parse_entries(&html);

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let record = match entry.body {
            EntryBody::Senses(senses) => entry.heading.into_record(senses),
            EntryBody::Redirect { target, display } => {
                debug!("{} redirects to {}", word, target);
                let standard = Box::pin(resolve_at(source, &target, depth + 1, max_depth)).await?;
                let senses = standard
                    .into_iter()
                    .next()
                    .map(|first| first.senses)
                    .ok_or_else(|| ResolveError::RedirectUnresolved {
                        word: word.to_string(),
                        target: target.clone(),
                    })?;
                entry.heading.into_redirect_record(display, senses)
            }
        };
        records.push(record);
    }

    Ok(records)
}
