use thiserror::Error;

/// Failures that stop a word from resolving. Bulk runs abort on any of them.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// KBBI answers anything but 200 once it starts throttling.
    #[error("rate limited while fetching {word:?} (HTTP {status})")]
    RateLimited { word: String, status: u16 },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("redirect chain from {word:?} is deeper than {depth}")]
    RedirectDepthExceeded { word: String, depth: usize },

    #[error("{word:?} redirects to {target:?}, which has no entries")]
    RedirectUnresolved { word: String, target: String },
}
