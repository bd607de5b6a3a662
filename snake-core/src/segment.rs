//! Sixteen-segment display decoding.
//!
//! Every glyph is a 16-bit mask; bit *n* lights segment *n*. Segment
//! geometry is a fixed table of line endpoints relative to the glyph anchor
//! (its lower-left corner).

use alloc::vec::Vec;

use crate::constants::{GLYPH_PITCH, SEGMENT_COUNT};
use crate::geometry::Position;

pub const ZERO: u16 = 0x44FF;
pub const ONE: u16 = 0x2200;
pub const TWO: u16 = 0x8877;
pub const THREE: u16 = 0x883F;
pub const FOUR: u16 = 0x888C;
pub const FIVE: u16 = 0x88BB;
pub const SIX: u16 = 0x88FB;
pub const SEVEN: u16 = 0x000F;
pub const EIGHT: u16 = 0x88FF;
pub const NINE: u16 = 0x888F;

pub const A: u16 = 0x88CF;
pub const B: u16 = 0x94F3;
pub const C: u16 = 0x00F3;
pub const D: u16 = 0x41C0;
pub const E: u16 = 0x80F3;
pub const F: u16 = 0x80C3;
pub const G: u16 = 0x08FB;
pub const H: u16 = 0x88CC;
pub const I: u16 = 0x2233;
pub const J: u16 = 0x003C;
pub const K: u16 = 0x94C0;
pub const L: u16 = 0x00F0;
pub const M: u16 = 0x05CC;
pub const N: u16 = 0x11CC;
pub const O: u16 = 0x00FF;
pub const P: u16 = 0x88C7;
pub const Q: u16 = 0x10FF;
pub const R: u16 = 0x98C7;
pub const S: u16 = 0x88BB;
pub const T: u16 = 0x2203;
pub const U: u16 = 0x00FC;
pub const V: u16 = 0x44C0;
pub const W: u16 = 0x50CC;
pub const X: u16 = 0x5500;
pub const Y: u16 = 0x2500;
pub const Z: u16 = 0x4433;

const DIGITS: [u16; 10] = [ZERO, ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE];

const LETTERS: [u16; 26] = [
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
];

/// Endpoints of each segment's line, offset from the glyph anchor.
const SEGMENT_LINES: [((f32, f32), (f32, f32)); SEGMENT_COUNT] = [
    ((4.0, 81.0), (22.0, 81.0)),
    ((24.0, 81.0), (42.0, 81.0)),
    ((43.0, 80.0), (43.0, 43.0)),
    ((43.0, 41.0), (43.0, 4.0)),
    ((24.0, 3.0), (42.0, 3.0)),
    ((4.0, 3.0), (22.0, 3.0)),
    ((3.0, 5.0), (3.0, 41.0)),
    ((3.0, 44.0), (3.0, 80.0)),
    ((6.0, 78.0), (19.0, 44.0)),
    ((23.0, 43.0), (23.0, 80.0)),
    ((27.0, 45.0), (40.0, 78.0)),
    ((24.0, 42.0), (42.0, 42.0)),
    ((26.0, 39.0), (41.0, 5.0)),
    ((23.0, 5.0), (23.0, 40.0)),
    ((20.0, 39.0), (6.0, 5.0)),
    ((4.0, 42.0), (22.0, 42.0)),
];

/// Mask for an ASCII digit or letter (either case).
pub fn glyph_mask(c: char) -> Option<u16> {
    match c {
        '0'..='9' => Some(DIGITS[c as usize - '0' as usize]),
        'a'..='z' => Some(LETTERS[c as usize - 'a' as usize]),
        'A'..='Z' => Some(LETTERS[c as usize - 'A' as usize]),
        _ => None,
    }
}

/// Lit segments of `mask`, lowest bit first.
pub fn segments(mask: u16) -> Segments {
    Segments { mask, next: 0 }
}

pub fn decode_char(c: char) -> Option<Segments> {
    glyph_mask(c).map(segments)
}

#[derive(Clone, Debug)]
pub struct Segments {
    mask: u16,
    next: u8,
}

impl Iterator for Segments {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while (self.next as usize) < SEGMENT_COUNT {
            let index = self.next;
            self.next += 1;
            if self.mask & (1 << index) != 0 {
                return Some(index);
            }
        }
        None
    }
}

/// World-space endpoints of segment `index` for a glyph anchored at `anchor`.
/// Returns `None` for indices past the last segment.
pub fn segment_line(index: u8, anchor: Position) -> Option<(Position, Position)> {
    let ((x0, y0), (x1, y1)) = *SEGMENT_LINES.get(index as usize)?;
    Some((
        anchor + Position::new(x0, y0),
        anchor + Position::new(x1, y1),
    ))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub character: char,
    pub mask: u16,
    pub anchor: Position,
}

/// Places each character of `text` at a fixed pitch from `(x, y)`.
/// Characters without a glyph are dropped but still take up their slot.
pub fn layout(text: &str, x: f32, y: f32) -> Vec<GlyphPlacement> {
    text.chars()
        .enumerate()
        .filter_map(|(slot, character)| {
            glyph_mask(character).map(|mask| GlyphPlacement {
                character,
                mask,
                anchor: Position::new(x + GLYPH_PITCH * slot as f32, y),
            })
        })
        .collect()
}
