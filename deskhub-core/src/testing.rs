//! Test doubles for the hardware seams

use core::net::Ipv4Addr;
use std::collections::VecDeque;
use std::string::{String, ToString};
use std::vec::Vec;

use deskhub_display::{Color, DisplayBackend, DisplayError, TextSize};
use deskhub_hal::{HttpClient, LinkStatus, Response, WifiRadio};
use embedded_hal_async::delay::DelayNs;

use crate::config::{DeviceConfig, WifiConfig};

pub const CONFIG_TOML: &str = r#"
[wifi]
ssid = "office"
passphrase = "hunter22"

[backend]
host = "192.168.0.104"
port = 8000
path = "/status"
"#;

pub fn device_config() -> DeviceConfig {
    DeviceConfig::from_toml(CONFIG_TOML).unwrap()
}

pub fn credentials() -> WifiConfig {
    device_config().wifi
}

/// Radio that replays a scripted sequence of link statuses
///
/// Once the script runs out the last status repeats.
pub struct MockRadio {
    script: VecDeque<LinkStatus>,
    current: LinkStatus,
    pub begun: Vec<(String, String)>,
    pub begin_calls: u32,
    pub begin_failures: u32,
    pub address: Option<Ipv4Addr>,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::scripted([])
    }

    pub fn scripted(script: impl IntoIterator<Item = LinkStatus>) -> Self {
        Self {
            script: script.into_iter().collect(),
            current: LinkStatus::Down,
            begun: Vec::new(),
            begin_calls: 0,
            begin_failures: 0,
            address: None,
        }
    }
}

#[derive(Debug)]
pub struct RadioRejected;

impl WifiRadio for MockRadio {
    type Error = RadioRejected;

    fn begin(&mut self, ssid: &str, passphrase: &str) -> Result<(), Self::Error> {
        self.begin_calls += 1;
        if self.begin_failures > 0 {
            self.begin_failures -= 1;
            return Err(RadioRejected);
        }
        self.begun.push((ssid.to_string(), passphrase.to_string()));
        Ok(())
    }

    fn link_status(&mut self) -> LinkStatus {
        if let Some(next) = self.script.pop_front() {
            self.current = next;
        }
        self.current
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        if self.current.is_up() {
            self.address
        } else {
            None
        }
    }
}

/// Canned reply for one request
pub enum Reply {
    /// Respond with a status and a body
    Status(u16, &'static [u8]),
    /// Exchange could not complete
    Fail,
}

#[derive(Debug)]
pub struct TransportFailure;

/// HTTP client that answers from a queue of replies
///
/// Unlike a real client it hands back the body for every status, so callers
/// must check the status before looking at the body.
pub struct MockHttp {
    replies: VecDeque<Reply>,
    pub requests: Vec<String>,
}

impl MockHttp {
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            requests: Vec::new(),
        }
    }
}

impl HttpClient for MockHttp {
    type Error = TransportFailure;

    async fn get<'a>(
        &mut self,
        url: &str,
        body: &'a mut [u8],
    ) -> Result<Response<'a>, Self::Error> {
        self.requests.push(url.to_string());
        match self.replies.pop_front().unwrap_or(Reply::Fail) {
            Reply::Fail => Err(TransportFailure),
            Reply::Status(status, payload) => {
                let buf = body.get_mut(..payload.len()).ok_or(TransportFailure)?;
                buf.copy_from_slice(payload);
                Ok(Response { status, body: buf })
            }
        }
    }
}

/// Delay that records requested waits instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    FillRect(u16, u16, u16, u16, Color),
    HLine(u16, u16, u16, Color),
    Text(u16, u16, String, TextSize, Color),
    Flush,
}

/// Display backend that records every call
///
/// Keeps a simple model of what is visible: a clear wipes everything, a
/// filled rectangle wipes the text and lines that start inside it.
#[derive(Default)]
pub struct RecordingBackend {
    pub ops: Vec<DrawOp>,
    visible: Vec<DrawOp>,
    pub fail: bool,
}

impl RecordingBackend {
    /// Text currently on screen, top to bottom in drawing order
    pub fn visible_text(&self) -> Vec<&str> {
        self.visible
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(_, _, text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Everything currently on screen
    pub fn visible(&self) -> &[DrawOp] {
        &self.visible
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(_)))
            .count()
    }

    fn record(&mut self, op: DrawOp) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        match &op {
            DrawOp::Clear(_) => self.visible.clear(),
            DrawOp::FillRect(x, y, w, h, _) => {
                let inside = |px: u16, py: u16| px >= *x && px < x + w && py >= *y && py < y + h;
                self.visible.retain(|kept| match kept {
                    DrawOp::Text(px, py, ..) | DrawOp::HLine(px, py, ..) => !inside(*px, *py),
                    _ => true,
                });
            }
            DrawOp::HLine(..) | DrawOp::Text(..) => self.visible.push(op.clone()),
            DrawOp::Flush => {}
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DisplayBackend for RecordingBackend {
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.record(DrawOp::Clear(color))
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.record(DrawOp::FillRect(x, y, width, height, color))
    }

    fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.record(DrawOp::HLine(x, y, length, color))
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        size: TextSize,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.record(DrawOp::Text(x, y, text.to_string(), size, color))
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.record(DrawOp::Flush)
    }
}
