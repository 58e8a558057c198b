//! Static pictures shown on the LED matrix.

use smart_leds::RGB8;

use crate::matrix::Frame;

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
const FACE: RGB8 = RGB8 { r: 0, g: 0, b: 128 };
const MOUTH: RGB8 = RGB8 { r: 0, g: 0, b: 100 };
const EYE_OPEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
const EYE_CLOSED: RGB8 = RGB8 { r: 128, g: 128, b: 128 };

/// Blue face with green eyes.
pub const EYES_OPEN: Frame = [
    [FACE, FACE, FACE, FACE, FACE],
    [FACE, EYE_OPEN, FACE, EYE_OPEN, FACE],
    [FACE, FACE, FACE, FACE, FACE],
    [FACE, MOUTH, FACE, MOUTH, FACE],
    [FACE, FACE, MOUTH, FACE, FACE],
];

/// Blue face with white, shut eyes.
pub const EYES_CLOSED: Frame = [
    [FACE, FACE, FACE, FACE, FACE],
    [FACE, EYE_CLOSED, FACE, EYE_CLOSED, FACE],
    [FACE, FACE, FACE, FACE, FACE],
    [FACE, MOUTH, FACE, MOUTH, FACE],
    [FACE, FACE, MOUTH, FACE, FACE],
];

pub const BLANK: Frame = [[OFF; 5]; 5];
