//! The range API client and its response-stream scanner.

use std::time::Duration;

use futures_util::TryStreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::io::StreamReader;

use crate::PREFIX_LEN;
use crate::digest::sha1_upper_hex;
use crate::error::Error;

/// Base URL for the V2 Pwned Passwords API.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

/// Request timeout applied when no custom HTTP client is supplied.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can report how many times a password appears in known
/// breaches. [`RangeClient`] is the network-backed implementation; tests can
/// substitute a fixed-response double.
#[allow(async_fn_in_trait)]
pub trait PasswordLookup {
    async fn count(&self, password: &str) -> Result<u64, Error>;
}

/// Client for the V2 range endpoint.
///
/// Construction fills in all defaults, so a `RangeClient` is immutable once
/// built. It is cheap to clone and safe to share: concurrent `count` calls
/// hold no shared mutable state.
#[derive(Debug, Clone)]
pub struct RangeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RangeClient {
    /// Creates a client with the default endpoint and timeout.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> RangeClientBuilder {
        RangeClientBuilder::default()
    }

    /// Returns the number of times `password` appears in the breach corpus.
    ///
    /// Only the first 5 hex characters of the password's SHA1 digest are
    /// sent; the response lines are scanned against the remaining 35
    /// characters locally. `Ok(0)` means the password was not found in the
    /// queried range, which is not an error.
    ///
    /// The response body is scanned as a stream and the connection is
    /// released as soon as a match is found. Dropping the returned future
    /// cancels the request.
    pub async fn count(&self, password: &str) -> Result<u64, Error> {
        let digest = sha1_upper_hex(password);
        if digest.len() < PREFIX_LEN {
            return Err(Error::ShortDigest { len: digest.len() });
        }
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);

        let url = format!("{}/range/{}", self.base_url, prefix);
        tracing::debug!(prefix, "querying range endpoint");

        let response = self.http.get(&url).send().await.map_err(|source| {
            Error::HttpRequest { prefix: prefix.to_string(), source }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        let reader = StreamReader::new(Box::pin(stream));

        scan_for_suffix(reader, suffix, prefix).await
    }
}

impl PasswordLookup for RangeClient {
    async fn count(&self, password: &str) -> Result<u64, Error> {
        RangeClient::count(self, password).await
    }
}

/// Scan response lines of the form `{35-hex-suffix}:{count}` for the given
/// suffix, returning its count on the first match.
///
/// Rows that don't split into at least two `:`-separated fields are skipped,
/// as are rows whose hash field doesn't match; the range API response carries
/// hundreds of candidate rows and only one of them can be ours. A read error
/// is only surfaced if no match has been found yet.
async fn scan_for_suffix<R>(reader: R, suffix: &str, prefix: &str) -> Result<u64, Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(0),
            Err(source) => {
                return Err(Error::BodyRead { prefix: prefix.to_string(), source });
            }
        };

        let mut fields = line.split(':');
        let (Some(candidate), Some(count)) = (fields.next(), fields.next()) else {
            continue;
        };

        if candidate.eq_ignore_ascii_case(suffix) {
            return count.parse::<u64>().map_err(|source| Error::CountParse {
                text: count.to_string(),
                source,
            });
        }
    }
}

/// Builder for [`RangeClient`] with explicit defaulting: unset fields are
/// filled in by [`build`](RangeClientBuilder::build), never at call time.
#[derive(Debug, Default)]
pub struct RangeClientBuilder {
    base_url: Option<String>,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl RangeClientBuilder {
    /// Overrides the lookup endpoint. A trailing slash is trimmed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supplies a pre-built HTTP client. Its own timeout applies;
    /// [`timeout`](Self::timeout) is ignored in that case.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Request timeout for the default HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RangeClient, Error> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(Error::ClientBuild)?,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(RangeClient { http, base_url })
    }
}
