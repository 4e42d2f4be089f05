//! Client for the [Have I Been Pwned](https://haveibeenpwned.com/Passwords)
//! range API, which reports how many times a password appears in known data
//! breaches.
//!
//! The API uses a k-anonymity scheme: only the first 5 hex characters of the
//! password's SHA1 digest are ever sent over the wire. The service responds
//! with every known hash suffix under that prefix (typically several hundred
//! lines), and the match is resolved locally against the remaining 35 hex
//! characters. The full hash, and therefore the password, never leaves the
//! machine.
//!
//! # Usage
//!
//! ```no_run
//! use hibp_range_client::RangeClient;
//!
//! # async fn run() -> Result<(), hibp_range_client::Error> {
//! let client = RangeClient::new()?;
//! let count = client.count("password").await?;
//! println!("{count}");
//! # Ok(())
//! # }
//! ```
//!
//! A count of zero means the password was not found in the queried range,
//! which is the normal outcome for any decent password.
//!
//! The default client targets `https://api.pwnedpasswords.com` with a 5
//! second timeout; both are overridable through [`RangeClient::builder`].
//!
//! # Cancellation
//!
//! `count` is an ordinary future: dropping it aborts the in-flight request
//! and releases the connection. Callers wanting a per-call deadline tighter
//! than the client timeout can wrap it in `tokio::time::timeout`.

pub mod client;
mod digest;
pub mod error;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PasswordLookup, RangeClient, RangeClientBuilder,
};
pub use error::Error;

/// The length of a SHA1 hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;
