//! Minimal HTTP/1.1 surface: just enough to route the page's buttons.

pub mod headers;
pub mod request;
pub mod response;

pub use headers::{ContentHeaders, ContentType, HttpMethod, ResponseHeaders, TargetWriter};
pub use request::{Receipt, RequestBuffer, route};
pub use response::PageResponse;
