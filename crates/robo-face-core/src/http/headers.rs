use core::fmt::Write;

/// HTTP Content Type.
#[derive(Debug, Clone, Copy)]
pub enum ContentType {
    TextHtml,
}

impl ContentType {
    /// Convert the content type to a string.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html",
        }
    }
}

pub trait TargetWriter {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
#[derive(Debug, Clone, Copy)]
pub struct ContentHeaders {
    content_type: ContentType,
}

impl ContentHeaders {
    /// Create a new content headers with a content type.
    pub const fn new(content_type: ContentType) -> Self {
        Self { content_type }
    }
}

impl TargetWriter for ContentHeaders {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}\r\n", self.content_type.as_str())
    }
}

/// Response Headers.
///
/// Every response is a `200 OK`. No `Connection` or `Content-Length` header
/// is sent: the server closes the socket after every response.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHeaders {
    content: Option<ContentHeaders>,
}

impl ResponseHeaders {
    /// Create success headers without content headers.
    pub const fn success() -> Self {
        Self { content: None }
    }

    /// Set the content headers.
    #[must_use]
    pub const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }
}

impl TargetWriter for ResponseHeaders {
    /// Write the status line and headers, including the blank line that ends
    /// them.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        writer.write_str("HTTP/1.1 200 OK\r\n")?;
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }
        write!(writer, "\r\n")?;
        Ok(())
    }
}

/// Request methods the router acts on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(HttpMethod::Get),
            _ => None,
        }
    }
}

/// Parse a request line without its line terminator.
///
/// Returns the method and the raw request target.
pub fn parse_request_line(line: &str) -> Option<(HttpMethod, &str)> {
    let mut parts = line.split_whitespace();
    let method = parts.next().and_then(HttpMethod::parse)?;
    let target = parts.next()?;
    Some((method, target))
}
