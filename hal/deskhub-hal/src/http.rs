//! HTTP client abstractions
//!
//! A deliberately small surface: one GET at a time, no headers, no request
//! body. Connection handling and response framing belong to the
//! implementation.

/// HTTP status code for a successful exchange
pub const STATUS_OK: u16 = 200;

/// Completed HTTP exchange
#[derive(Debug, PartialEq, Eq)]
pub struct Response<'a> {
    /// Response status code
    pub status: u16,
    /// Response body, empty when the status is not [`STATUS_OK`]
    pub body: &'a [u8],
}

impl<'a> Response<'a> {
    /// A response whose body was read into the caller's buffer
    pub fn ok(body: &'a [u8]) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    /// A response whose body was left unread
    pub fn status_only(status: u16) -> Self {
        Self { status, body: &[] }
    }

    /// Check for a `200 OK` status
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// HTTP client
///
/// Implementations must only read the body into `body` when the status is
/// [`STATUS_OK`]. Any other status returns [`Response::status_only`] and the
/// body is discarded with the connection.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    /// Error type for exchanges that could not complete
    type Error;

    /// Issue a GET request and wait for the exchange to complete
    ///
    /// - `url`: Absolute `http://` URL
    /// - `body`: Receive buffer; a body larger than this is an error
    async fn get<'a>(&mut self, url: &str, body: &'a mut [u8])
        -> Result<Response<'a>, Self::Error>;
}
