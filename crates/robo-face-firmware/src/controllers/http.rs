use crate::{
    infrastructure::exchange::{REQUESTS, RESPONSES},
    net::http::{HttpConnection, HttpHandler, HttpResult},
};

/// Hands each request head to the main loop and writes back the page it
/// produces.
#[derive(Debug, Default)]
pub struct RoboHttpController;

impl HttpHandler for RoboHttpController {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult {
        let (request, writer) = conn.into_request();
        REQUESTS.send(request).await;
        let page = RESPONSES.receive().await;
        writer.write_page(&page).await
    }
}
