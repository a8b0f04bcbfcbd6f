//! Status snapshot decoding
//!
//! Wire format served by the backend:
//!
//! ```text
//! {
//!   "email":   { "unread": <integer>, "latest_subject": <string> },
//!   "weather": { "temp": <number>, "description": <string> }
//! }
//! ```
//!
//! Every field is optional. A field that is absent or has the wrong type
//! takes its default; only a body that is not JSON at all fails to decode.
//! Decoding stops after the first complete value, so trailing bytes after
//! the document are ignored.
//! Other keys the backend sends (`calendar`, `todos`) are ignored.

use alloc::string::{String, ToString};

use serde::Deserialize;
use serde_json::error::Category;
use serde_json::{Deserializer, Value};

/// Subject shown when the backend reports none
pub const DEFAULT_SUBJECT: &str = "No mail";

/// Weather text shown when the backend reports none
pub const DEFAULT_DESCRIPTION: &str = "N/A";

/// Why a body could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeErrorKind {
    /// Invalid JSON syntax
    Syntax,
    /// Body ended before the document was complete
    Eof,
    /// Semantically invalid input
    Data,
    /// Failure reading the input
    Io,
}

/// Body is not a JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    /// 1-based line of the offending byte
    pub line: u32,
    /// 1-based column of the offending byte
    pub column: u32,
}

impl DecodeError {
    /// Short reason for diagnostics
    pub fn reason(&self) -> &'static str {
        match self.kind {
            DecodeErrorKind::Syntax => "invalid input",
            DecodeErrorKind::Eof => "incomplete input",
            DecodeErrorKind::Data => "invalid data",
            DecodeErrorKind::Io => "read error",
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        let kind = match e.classify() {
            Category::Syntax => DecodeErrorKind::Syntax,
            Category::Eof => DecodeErrorKind::Eof,
            Category::Data => DecodeErrorKind::Data,
            Category::Io => DecodeErrorKind::Io,
        };
        Self {
            kind,
            line: u32::try_from(e.line()).unwrap_or(u32::MAX),
            column: u32::try_from(e.column()).unwrap_or(u32::MAX),
        }
    }
}

/// Decoded result of one poll
///
/// Always fully populated: defaults are applied while decoding, so
/// consumers never see a missing field.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    unread_count: u32,
    latest_subject: String,
    temperature: f32,
    weather_description: String,
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            unread_count: 0,
            latest_subject: DEFAULT_SUBJECT.to_string(),
            temperature: 0.0,
            weather_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl StatusSnapshot {
    /// Create a snapshot from explicit values
    pub fn new(
        unread_count: u32,
        latest_subject: impl Into<String>,
        temperature: f32,
        weather_description: impl Into<String>,
    ) -> Self {
        Self {
            unread_count,
            latest_subject: latest_subject.into(),
            temperature,
            weather_description: weather_description.into(),
        }
    }

    /// Decode a response body
    ///
    /// Only the first JSON value is read; anything after it is ignored.
    pub fn from_json(body: &[u8]) -> Result<Self, DecodeError> {
        let mut de = Deserializer::from_slice(body);
        let document = Value::deserialize(&mut de)?;
        Ok(Self::from_document(&document))
    }

    /// Extract fields from an already parsed document
    ///
    /// Indexing a missing key or a non-object yields `null`, which then
    /// falls through to the field default.
    pub fn from_document(document: &Value) -> Self {
        let email = &document["email"];
        let weather = &document["weather"];

        Self {
            unread_count: email["unread"]
                .as_u64()
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(0),
            latest_subject: text_or(&email["latest_subject"], DEFAULT_SUBJECT),
            temperature: weather["temp"].as_f64().map(|t| t as f32).unwrap_or(0.0),
            weather_description: text_or(&weather["description"], DEFAULT_DESCRIPTION),
        }
    }

    /// Unread message count
    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    /// Subject of the newest unread message
    pub fn latest_subject(&self) -> &str {
        &self.latest_subject
    }

    /// Outdoor temperature in °C
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Human readable weather condition
    pub fn weather_description(&self) -> &str {
        &self.weather_description
    }
}

fn text_or(value: &Value, default: &str) -> String {
    value.as_str().unwrap_or(default).to_string()
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "StatusSnapshot {{ unread: {}, subject: {}, temp: {}, weather: {} }}",
            self.unread_count,
            self.latest_subject.as_str(),
            self.temperature,
            self.weather_description.as_str()
        );
    }
}
