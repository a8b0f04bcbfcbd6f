//! Status polling
//!
//! One poll fetches the backend's aggregate status document and decodes it
//! into a [`StatusSnapshot`].

pub mod fetcher;
pub mod snapshot;

pub use fetcher::{FetchError, StatusFetcher, BODY_BUFFER_SIZE};
pub use snapshot::{DecodeError, DecodeErrorKind, StatusSnapshot};
