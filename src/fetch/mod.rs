//! Raw paste fetching over HTTP.
//!
//! One blocking GET per fetch via the curl crate. No retry, no caching, and
//! no timeout override beyond libcurl's defaults; failures are classified so
//! the caller can report them verbatim.

mod reference;

pub use reference::{raw_url, resolve_reference};

use thiserror::Error;

/// Base URL pastes are fetched from.
pub const RENTRY_BASE: &str = "https://rentry.co/";

/// Fixed versioned User-Agent identifying this tool.
pub const USER_AGENT: &str = "rentry-raw/0.1";

/// Header carrying the API key.
const AUTH_HEADER: &str = "rentry-auth";

/// Why a fetch produced no paste.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Input matched neither a rentry URL nor a bare letters-only page id.
    #[error("{input:?} is not a valid rentry url")]
    InvalidReference { input: String },
    /// Server answered with a status other than 200.
    #[error("rentry returned status {status} for url {url}")]
    Remote { status: u32, url: String },
    /// The fetched document had no content after trimming whitespace.
    #[error("the fetched document is empty")]
    Empty,
    /// Transport-level failure (connection, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(#[from] curl::Error),
}

/// Performs the GET for `url` and returns the body text.
///
/// Sends the API key under `rentry-auth` only when one is set; an unset key
/// means anonymous access. Redirects are followed.
pub fn fetch_raw(url: &str, api_key: &str, user_agent: &str) -> Result<String, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.useragent(user_agent)?;

    if !api_key.is_empty() {
        let mut list = curl::easy::List::new();
        list.append(&format!("{}: {}", AUTH_HEADER, api_key))?;
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if status != 200 {
        tracing::error!("fetch failed: status {} for url {}", status, url);
        return Err(FetchError::Remote {
            status,
            url: url.to_string(),
        });
    }

    let text = String::from_utf8_lossy(&body).into_owned();
    if text.trim().is_empty() {
        tracing::error!("fetch failed: document at {} is empty", url);
        return Err(FetchError::Empty);
    }
    Ok(text)
}
