use anyhow::{bail, Context, Result};
use serde::Serialize;
use snake_core::input::{encode_input_byte, FrameInput, KeyboardState};
use snake_core::{Game, GameConfig, WorldSnapshot};

use crate::draw_log::{DrawCall, DrawLog};

pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;

/// Turns a move script into one input byte per frame.
///
/// `U`, `D`, `L`, `R` press an arrow, `S` presses Start and `.` is an idle
/// frame. Any of them may be followed by a decimal repeat count, so `R.30`
/// is one Right frame then thirty idle ones. Whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<u8>> {
    let mut frames = Vec::new();
    let mut chars = script.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let mut input = FrameInput::default();
        match c.to_ascii_uppercase() {
            'U' => input.up = true,
            'D' => input.down = true,
            'L' => input.left = true,
            'R' => input.right = true,
            'S' => input.start = true,
            '.' => {}
            other => bail!("unexpected '{other}' at offset {offset} in move script"),
        }

        let mut count: usize = 0;
        let mut has_count = false;
        while let Some((_, digit)) = chars.peek().copied() {
            let Some(value) = digit.to_digit(10) else {
                break;
            };
            count = match count
                .checked_mul(10)
                .and_then(|n| n.checked_add(value as usize))
            {
                Some(n) => n,
                None => bail!("repeat count at offset {offset} is too large"),
            };
            has_count = true;
            chars.next();
        }

        let repeat = if has_count { count } else { 1 };
        frames.extend(std::iter::repeat(encode_input_byte(input)).take(repeat));
    }

    Ok(frames)
}

#[derive(Debug, Clone, Serialize)]
pub struct RunArtifact {
    pub snapshot: WorldSnapshot,
    pub last_frame: Vec<DrawCall>,
}

/// Plays `inputs` through a fresh game, one byte per frame.
///
/// With `strict` set, every invariant is checked after each frame and the
/// first violation aborts the run.
pub fn run_inputs(
    config: GameConfig,
    inputs: &[u8],
    frame_dt: f64,
    strict: bool,
) -> Result<RunArtifact> {
    if !(frame_dt.is_finite() && frame_dt >= 0.0) {
        bail!("frame time must be a non-negative number, got {frame_dt}");
    }

    let mut game = Game::new(config).context("invalid game config")?;
    let mut keyboard = KeyboardState::new();

    for input in inputs {
        keyboard.update_from_byte(*input);
        let outcome = game.update(frame_dt, &keyboard);
        let frame = game.frame_count();

        if outcome.stepped {
            let head = game.player().head();
            tracing::debug!(frame, x = head.x, y = head.y, "step");
        }
        if outcome.collisions.cherry {
            tracing::info!(frame, tail = game.player().tail_size(), "cherry collected");
        }
        if outcome.collisions.coin {
            tracing::info!(frame, tail = game.player().tail_size(), "coin collected");
        }
        if let Some(cause) = outcome.collisions.death {
            tracing::info!(frame, cause = cause.as_str(), "player died");
        }

        if strict {
            if let Err(rule) = game.validate_invariants() {
                bail!("rule violation at frame {frame}: {rule}");
            }
        }
    }

    let mut log = DrawLog::new();
    snake_core::render::draw_scene(&mut log, &game);
    tracing::debug!(
        quads = log.quad_count(),
        lines = log.line_count(),
        "rendered final frame"
    );

    Ok(RunArtifact {
        snapshot: game.snapshot(),
        last_frame: log.into_calls(),
    })
}

pub fn run_script(
    config: GameConfig,
    script: &str,
    frame_dt: f64,
    strict: bool,
) -> Result<RunArtifact> {
    let inputs = parse_script(script)?;
    run_inputs(config, &inputs, frame_dt, strict)
}

#[derive(Debug, Clone, Serialize)]
pub struct GlyphReport {
    pub character: char,
    pub mask: String,
    pub x: f32,
    pub y: f32,
    pub segments: Vec<u8>,
}

/// Lays `text` out at `(x, y)` and lists the lit segments of each glyph.
pub fn glyph_report(text: &str, x: f32, y: f32) -> Vec<GlyphReport> {
    snake_core::segment::layout(text, x, y)
        .into_iter()
        .map(|placed| GlyphReport {
            character: placed.character,
            mask: format!("0x{:04X}", placed.mask),
            x: placed.anchor.x,
            y: placed.anchor.y,
            segments: snake_core::segment::segments(placed.mask).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_expands_repeat_counts() -> Result<()> {
        let frames = parse_script("R .3 s")?;
        assert_eq!(frames, vec![0x08, 0, 0, 0, 0x10]);
        Ok(())
    }

    #[test]
    fn zero_count_drops_the_frame() -> Result<()> {
        assert_eq!(parse_script("U0D")?, vec![0x02]);
        Ok(())
    }

    #[test]
    fn unknown_characters_are_rejected() {
        let err = parse_script("RX").expect_err("X is not a move");
        assert!(err.to_string().contains("offset 1"));
    }

    #[test]
    fn negative_frame_time_is_rejected() {
        assert!(run_inputs(GameConfig::default(), &[], -1.0, false).is_err());
    }

    #[test]
    fn glyph_report_lists_segments() {
        let report = glyph_report("A1", 0.0, 0.0);
        assert_eq!(report.len(), 2);
        assert_eq!(report[1].x, 50.0);
        assert!(!report[0].segments.is_empty());
        assert!(report[0].mask.starts_with("0x"));
    }
}
