//! Spreadsheet-backed points lookup.
//!
//! One HTTP GET against the Sheets `values` endpoint per lookup, using the
//! curl crate. The blocking transfer runs on the tokio blocking pool; the
//! join on that task is the async caller's only suspension point.

mod parse;

pub use parse::ValueRange;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::SheetsConfig;

/// Characters escaped in the range descriptor: everything non-alphanumeric
/// except the unreserved marks, so `Sheet1!A:B` becomes `Sheet1!A%3AB`.
const RANGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failure to obtain a usable 2xx response. Data-shape problems inside a
/// 2xx body never error; they degrade to a zero value instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The response carried a non-2xx status. Not retried.
    #[error("sheets API returned HTTP {0}")]
    Http(u32),
    /// Transport-level failure before any HTTP status existed.
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// The configured endpoint/id/range do not form a valid request URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// The blocking transfer task did not complete.
    #[error("lookup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Client for one spreadsheet range. Holds the injected configuration;
/// nothing is shared or cached between lookups.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self { config }
    }

    /// Fetches the points value recorded for `name`.
    ///
    /// Exactly one GET per call; no cache, no retry, no coalescing between
    /// concurrent callers. A missing name or malformed cell yields `0.0`;
    /// only transport failures and non-2xx statuses are errors.
    pub async fn fetch_points_by_name(&self, name: &str) -> Result<f64, FetchError> {
        let client = self.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || client.fetch_points_by_name_blocking(&name)).await?
    }

    /// Blocking variant of [`fetch_points_by_name`]. Runs on the current
    /// thread; call from `spawn_blocking` if used from async code.
    pub fn fetch_points_by_name_blocking(&self, name: &str) -> Result<f64, FetchError> {
        let url = self.request_url()?;
        let body = http_get(url.as_str())?;
        Ok(parse::points_from_body(&body, name))
    }

    /// `{endpoint}/v4/spreadsheets/{id}/values/{range}?key={api_key}`,
    /// with the range percent-encoded.
    fn request_url(&self) -> Result<Url, url::ParseError> {
        let base = Url::parse(&self.config.endpoint)?;
        let range = utf8_percent_encode(&self.config.range, RANGE_ENCODE_SET);
        let mut url = base.join(&format!(
            "v4/spreadsheets/{}/values/{}",
            self.config.sheet_id, range
        ))?;
        url.query_pairs_mut()
            .append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

/// Performs the GET and returns the raw response body.
/// Follows redirects; connect/total timeouts bound a hung peer.
fn http_get(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SheetsConfig {
        SheetsConfig {
            api_key: "k123".to_string(),
            sheet_id: "sheet-1".to_string(),
            range: "Sheet1!A:B".to_string(),
            endpoint: "https://sheets.googleapis.com".to_string(),
        }
    }

    #[test]
    fn request_url_encodes_range_and_key() {
        let url = SheetsClient::new(config()).request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-1/values/Sheet1!A%3AB?key=k123"
        );
    }

    #[test]
    fn request_url_accepts_local_endpoint() {
        let mut cfg = config();
        cfg.endpoint = "http://127.0.0.1:8080".to_string();
        let url = SheetsClient::new(cfg).request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/v4/spreadsheets/sheet-1/values/Sheet1!A%3AB?key=k123"
        );
    }

    #[test]
    fn request_url_rejects_bad_endpoint() {
        let mut cfg = config();
        cfg.endpoint = "not a url".to_string();
        assert!(SheetsClient::new(cfg).request_url().is_err());
    }
}
