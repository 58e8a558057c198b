use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use robo_face_core::http::{PageResponse, Receipt, RequestBuffer};

use super::{Error, HttpResult};

const RX_CHUNK_SIZE: usize = 128;

/// HTTP connection context
pub(crate) struct HttpConnection<'a> {
    socket: TcpSocket<'a>,
    request: RequestBuffer,
}

impl<'a> HttpConnection<'a> {
    /// Read the request head from a freshly accepted socket.
    ///
    /// Receipts are collected until the blank line or until the buffer is
    /// full. A peer that stops sending after the request line is still
    /// answered. One that goes away before it yields [`Error::Closed`] and
    /// gets no response.
    pub(crate) async fn from_socket(mut socket: TcpSocket<'a>) -> Result<Self, Error> {
        let mut request = RequestBuffer::new();
        let mut chunk = [0u8; RX_CHUNK_SIZE];
        loop {
            let n = socket.read(&mut chunk).await?;
            match request.receive(&chunk[..n]) {
                Receipt::Pending => {}
                Receipt::Complete => break,
                Receipt::Ended => {
                    log::debug!("http: peer ended the head after the request line");
                    break;
                }
                Receipt::Overflow => {
                    log::warn!("http: request head over {} bytes, truncated", request.len());
                    break;
                }
                Receipt::Closed => {
                    socket.close();
                    return Err(Error::Closed);
                }
            }
        }
        log::debug!("http: request head of {} bytes", request.len());

        Ok(Self { socket, request })
    }

    /// Split into the request head and the half that answers it.
    pub(crate) fn into_request(self) -> (RequestBuffer, ResponseWriter<'a>) {
        (
            self.request,
            ResponseWriter {
                socket: self.socket,
            },
        )
    }
}

/// Write half of a connection whose request was handed off.
pub(crate) struct ResponseWriter<'a> {
    socket: TcpSocket<'a>,
}

impl ResponseWriter<'_> {
    /// Render the page, send it and close the connection.
    pub(crate) async fn write_page(mut self, page: &PageResponse) -> HttpResult {
        let rendered = page.render()?;
        let result = self.write_all(rendered.as_bytes()).await;
        self.close().await;
        result
    }

    async fn write_all(&mut self, buf: &[u8]) -> HttpResult {
        self.socket.write_all(buf).await?;
        self.socket.flush().await?;
        Ok(())
    }

    async fn close(&mut self) {
        self.socket.close();
        // let the FIN go out before the socket is dropped
        if let Err(e) = self.socket.flush().await {
            log::debug!("http: flush on close failed: {:?}", e);
        }
    }
}
