//! Status fetcher
//!
//! Issues one GET per call and turns the outcome into a snapshot or a
//! [`FetchError`]. No retries and no caching; the agent's fixed cadence is
//! the retry policy.

use deskhub_hal::HttpClient;

use super::snapshot::{DecodeError, StatusSnapshot};

/// Receive buffer size for the response body
pub const BODY_BUFFER_SIZE: usize = 4096;

/// Reasons a cycle produced no snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchError {
    /// Link was down when the cycle started; no request was made
    NotConnected,
    /// The HTTP exchange could not complete
    Transport,
    /// The backend answered with a status other than 200
    Http(u16),
    /// The body was not a JSON document
    Decode(DecodeError),
}

impl FetchError {
    /// Short category name for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            FetchError::NotConnected => "not connected",
            FetchError::Transport => "transport error",
            FetchError::Http(_) => "http error",
            FetchError::Decode(_) => "json error",
        }
    }
}

impl From<DecodeError> for FetchError {
    fn from(e: DecodeError) -> Self {
        FetchError::Decode(e)
    }
}

/// Fetches and decodes the backend status document
pub struct StatusFetcher<C> {
    client: C,
    body: [u8; BODY_BUFFER_SIZE],
}

impl<C: HttpClient> StatusFetcher<C> {
    /// Create a fetcher over an HTTP client
    pub fn new(client: C) -> Self {
        Self {
            client,
            body: [0; BODY_BUFFER_SIZE],
        }
    }

    /// Get access to the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch one status snapshot
    ///
    /// Suspends until the transport completes or fails. The body is only
    /// decoded for a `200 OK` response.
    pub async fn fetch(&mut self, url: &str) -> Result<StatusSnapshot, FetchError> {
        let response = self
            .client
            .get(url, &mut self.body)
            .await
            .map_err(|_| FetchError::Transport)?;

        if !response.is_ok() {
            return Err(FetchError::Http(response.status));
        }

        Ok(StatusSnapshot::from_json(response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::snapshot::DecodeErrorKind;
    use crate::testing::{MockHttp, Reply};
    use embassy_futures::block_on;

    const URL: &str = "http://192.168.0.104:8000/status";

    fn fetch_once(reply: Reply) -> (Result<StatusSnapshot, FetchError>, MockHttp) {
        let mut fetcher = StatusFetcher::new(MockHttp::with_replies([reply]));
        let result = block_on(fetcher.fetch(URL));
        (result, fetcher.client)
    }

    #[test]
    fn test_ok_response_decodes() {
        let (result, http) = fetch_once(Reply::Status(
            200,
            br#"{"email":{"unread":3,"latest_subject":"Meeting at 3"},"weather":{"temp":21.4,"description":"Cloudy"}}"#,
        ));
        let snapshot = result.unwrap();
        assert_eq!(snapshot.unread_count(), 3);
        assert_eq!(snapshot.latest_subject(), "Meeting at 3");
        assert_eq!(snapshot.temperature(), 21.4f32);
        assert_eq!(snapshot.weather_description(), "Cloudy");
        assert_eq!(http.requests, [URL]);
    }

    #[test]
    fn test_empty_document_defaults() {
        let (result, _) = fetch_once(Reply::Status(200, b"{}"));
        assert_eq!(result.unwrap(), StatusSnapshot::default());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let (result, _) = fetch_once(Reply::Status(200, b"Internal Server Error"));
        assert!(matches!(
            result,
            Err(FetchError::Decode(DecodeError {
                kind: DecodeErrorKind::Syntax,
                line: 1,
                ..
            }))
        ));
    }

    #[test]
    fn test_error_status_skips_decode() {
        // The mock hands back a body even for errors; a valid document must
        // still not be decoded
        for status in [404, 500, 503] {
            let (result, _) = fetch_once(Reply::Status(status, b"{}"));
            assert_eq!(result, Err(FetchError::Http(status)));
        }
    }

    #[test]
    fn test_error_status_with_garbage_body() {
        let (result, _) = fetch_once(Reply::Status(500, b"<html>oops"));
        assert_eq!(result, Err(FetchError::Http(500)));
    }

    #[test]
    fn test_transport_failure() {
        let (result, _) = fetch_once(Reply::Fail);
        assert_eq!(result, Err(FetchError::Transport));
    }

    #[test]
    fn test_oversized_body_is_transport_error() {
        static BIG: [u8; BODY_BUFFER_SIZE + 1] = [b' '; BODY_BUFFER_SIZE + 1];
        let (result, _) = fetch_once(Reply::Status(200, &BIG));
        assert_eq!(result, Err(FetchError::Transport));
    }

    #[test]
    fn test_no_retry_within_one_fetch() {
        let mut fetcher = StatusFetcher::new(MockHttp::with_replies([
            Reply::Fail,
            Reply::Status(200, b"{}"),
        ]));
        assert_eq!(block_on(fetcher.fetch(URL)), Err(FetchError::Transport));
        assert_eq!(fetcher.client().requests.len(), 1);
    }

    #[test]
    fn test_categories() {
        assert_eq!(FetchError::NotConnected.category(), "not connected");
        assert_eq!(FetchError::Http(404).category(), "http error");
        let decode = DecodeError {
            kind: DecodeErrorKind::Eof,
            line: 1,
            column: 9,
        };
        assert_eq!(FetchError::from(decode), FetchError::Decode(decode));
        assert_eq!(FetchError::Decode(decode).category(), "json error");
    }
}
