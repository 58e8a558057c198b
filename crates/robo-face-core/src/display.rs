use heapless::String;

use crate::{
    config::{DISPLAY_MAX_CHARS, GLYPH_HEIGHT, GLYPH_WIDTH},
    error::PeripheralError,
    ports::TextDisplay,
};

// Room for the longest caption even if every char is four bytes of UTF-8.
const TEXT_CAPACITY: usize = DISPLAY_MAX_CHARS * 4;

/// Single-slot mailbox for the next caption.
///
/// Requests overwrite each other until the main loop drains the slot, so
/// only the most recent caption is ever rendered.
#[derive(Debug, Default)]
pub struct DisplayQueue {
    pending: Option<String<TEXT_CAPACITY>>,
}

impl DisplayQueue {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Replace the pending caption, truncated to [`DISPLAY_MAX_CHARS`].
    pub fn request_message(&mut self, text: &str) {
        let mut message = String::new();
        for ch in text.chars().take(DISPLAY_MAX_CHARS) {
            // capacity covers DISPLAY_MAX_CHARS chars of any width
            let _ = message.push(ch);
        }
        self.pending = Some(message);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_text(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Render the pending caption centered on `display`.
    ///
    /// Returns whether something was rendered. The slot is emptied even when
    /// the display fails, so a broken display never stalls the loop.
    pub fn drain_if_pending<X: TextDisplay>(
        &mut self,
        display: &mut X,
    ) -> Result<bool, PeripheralError> {
        let Some(text) = self.pending.take() else {
            return Ok(false);
        };
        let (x, y) = centered_origin(display.width(), display.height(), text.chars().count());
        display.clear();
        display.draw_text(x, y, &text)?;
        display.flush()?;
        Ok(true)
    }
}

/// Top-left corner that centers `chars` glyphs on a `width` x `height` screen.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn centered_origin(width: u32, height: u32, chars: usize) -> (i32, i32) {
    let text_width = chars as i32 * GLYPH_WIDTH;
    let x = (width as i32 - text_width) / 2;
    let y = (height as i32 - GLYPH_HEIGHT) / 2;
    (x, y)
}
