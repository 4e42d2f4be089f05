use crate::PREFIX_LEN;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("hex encoded digest is too short: {len} chars, need at least {PREFIX_LEN}")]
    ShortDigest { len: usize },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },

    #[error("failed reading response body for prefix {prefix}: {source}")]
    BodyRead {
        prefix: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid breach count {text:?} on matching line: {source}")]
    CountParse {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
