//! reqwless HTTP adapter
//!
//! One connection per GET over embassy-net TCP and DNS sockets. Plain
//! HTTP only.

use defmt::*;
use deskhub_hal::{HttpClient, Response, STATUS_OK};
use embassy_net::dns::DnsSocket;
use embassy_net::tcp::client::{TcpClient, TcpClientState};
use reqwless::client::HttpClient as Reqwless;
use reqwless::request::Method;

/// Socket count and TCP buffer sizes for the HTTP client
const SOCKETS: usize = 1;
const TCP_TX_SIZE: usize = 1024;
const TCP_RX_SIZE: usize = 1024;

/// Backing storage for the TCP client sockets
pub type TcpClientPool = TcpClientState<SOCKETS, TCP_TX_SIZE, TCP_RX_SIZE>;

/// HTTP client over the embassy-net stack
pub struct ReqwlessClient<'d> {
    tcp: TcpClient<'d, SOCKETS, TCP_TX_SIZE, TCP_RX_SIZE>,
    dns: DnsSocket<'d>,
}

impl<'d> ReqwlessClient<'d> {
    pub fn new(
        tcp: TcpClient<'d, SOCKETS, TCP_TX_SIZE, TCP_RX_SIZE>,
        dns: DnsSocket<'d>,
    ) -> Self {
        Self { tcp, dns }
    }
}

impl HttpClient for ReqwlessClient<'_> {
    type Error = reqwless::Error;

    async fn get<'a>(
        &mut self,
        url: &str,
        body: &'a mut [u8],
    ) -> Result<Response<'a>, Self::Error> {
        info!("GET {}", url);

        let mut client = Reqwless::new(&self.tcp, &self.dns);
        let mut request = client.request(Method::GET, url).await.inspect_err(|e| {
            warn!("HTTP connect failed: {:?}", e);
        })?;
        let response = request.send(body).await.inspect_err(|e| {
            warn!("HTTP request failed: {:?}", e);
        })?;

        let status = response.status.0;
        info!("HTTP code: {}", status);
        if status != STATUS_OK {
            return Ok(Response::status_only(status));
        }

        let payload = response.body().read_to_end().await.inspect_err(|e| {
            warn!("HTTP body read failed: {:?}", e);
        })?;
        trace!("payload: {=[u8]:a}", payload);

        Ok(Response::ok(payload))
    }
}
