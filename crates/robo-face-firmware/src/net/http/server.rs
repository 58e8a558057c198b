use embassy_net::{Stack, tcp::TcpSocket};

use super::{HttpResult, connection::HttpConnection};
use crate::config;

pub(crate) trait HttpHandler {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult;
}

/// Serves one connection at a time on a single socket.
pub(crate) struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub(crate) fn new(handler: &'a T) -> Self {
        Self { handler }
    }

    pub(crate) async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> ! {
        log::info!("http: listening on port {}", port);
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(config::HTTP.socket_timeout));

            if let Err(e) = socket.accept(port).await {
                log::warn!("http: accept error: {:?}", e);
                continue;
            }
            log::debug!("http: connection from {:?}", socket.remote_endpoint());

            let conn = match HttpConnection::from_socket(socket).await {
                Ok(connection) => connection,
                Err(e) => {
                    log::debug!("http: dropped before request: {:?}", e);
                    continue;
                }
            };

            if let Err(e) = self.handler.handle_request(conn).await {
                log::warn!("http: connection error: {:?}", e);
            }
        }
    }
}
