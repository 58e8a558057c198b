use core::fmt::Write;

use heapless::String;

use super::headers::{ContentHeaders, ContentType, ResponseHeaders, TargetWriter};
use crate::{command::Command, config::RESPONSE_CAPACITY};

const PAGE_HEAD: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<title>Robot Controller</title>\n\
<style>\n\
body { font-family: Arial, sans-serif; text-align: center; margin-top: 50px; }\n\
h1 { font-size: 64px; margin-bottom: 30px; }\n\
h2 { font-size: 16px; margin-bottom: 8px; }\n\
button { font-size: 36px; margin: 10px; padding: 20px 40px; border-radius: 10px; }\n\
.temperature { font-size: 48px; margin-top: 30px; color: #333; }\n\
</style>\n\
</head>\n\
<body>\n\
<h1>Robot Controller</h1>\n";

const PAGE_FOOTER: &str = "<h2>Pico W Robot Face</h2>\n</body>\n</html>\n";

/// The controller page, carrying the temperature sampled for this request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageResponse {
    temperature: Option<f32>,
}

impl PageResponse {
    /// `None` renders a placeholder in place of the reading.
    pub const fn new(temperature: Option<f32>) -> Self {
        Self { temperature }
    }

    pub const fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    pub const fn headers(&self) -> ResponseHeaders {
        ResponseHeaders::success().with_content(ContentHeaders::new(ContentType::TextHtml))
    }

    /// Render headers and body into an owned buffer.
    pub fn render(&self) -> Result<String<RESPONSE_CAPACITY>, core::fmt::Error> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }
}

impl TargetWriter for PageResponse {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        self.headers().write_to(writer)?;
        writer.write_str(PAGE_HEAD)?;
        for command in Command::ALL {
            let Some(path) = command.path() else {
                continue;
            };
            writeln!(
                writer,
                "<form action=\".{}\"><button>{}</button></form>",
                path,
                command.label()
            )?;
        }
        match self.temperature {
            Some(celsius) => writeln!(
                writer,
                "<p class=\"temperature\">Internal temperature: {celsius:.2} &deg;C</p>"
            )?,
            None => writer
                .write_str("<p class=\"temperature\">Internal temperature: -- &deg;C</p>\n")?,
        }
        writer.write_str(PAGE_FOOTER)
    }
}
