//! Color gradient sampled by a normalized position.
//!
//! A [`Gradient`] is a short, sorted list of color keys (at most
//! [`MAX_GRADIENT_KEYS`]). [`Gradient::evaluate`] blends linearly between the
//! two keys around `t`; positions before the first key or after the last key
//! take that key's color.
//!
//! # Text format
//!
//! Gradients are written in config files as `|`-separated `time:r,g,b,a`
//! keys (`;` starts an INI comment):
//!
//! ```ini
//! gradient = 0.0:255,0,0,255 | 0.5:255,255,0,255 | 1.0:255,255,255,255
//! ```

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::math::Color;

pub const MAX_GRADIENT_KEYS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientKey {
    /// Position in `[0, 1]`.
    pub time: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gradient {
    keys: ArrayVec<GradientKey, MAX_GRADIENT_KEYS>,
}

impl Gradient {
    /// Build a gradient from keys in any order.
    ///
    /// Returns `None` for an empty key list; more than
    /// [`MAX_GRADIENT_KEYS`] keys is an error.
    pub fn new(keys: &[GradientKey]) -> Result<Option<Self>, String> {
        if keys.is_empty() {
            return Ok(None);
        }
        if keys.len() > MAX_GRADIENT_KEYS {
            return Err(format!(
                "Gradient has {} keys, at most {} are supported",
                keys.len(),
                MAX_GRADIENT_KEYS
            ));
        }
        let mut sorted: ArrayVec<GradientKey, MAX_GRADIENT_KEYS> = ArrayVec::new();
        for key in keys {
            sorted.push(GradientKey {
                time: key.time.clamp(0.0, 1.0),
                color: key.color,
            });
        }
        sorted.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(Some(Self { keys: sorted }))
    }

    /// Two-key gradient from `from` at 0 to `to` at 1.
    pub fn two_keys(from: Color, to: Color) -> Self {
        let mut keys = ArrayVec::new();
        keys.push(GradientKey {
            time: 0.0,
            color: from,
        });
        keys.push(GradientKey {
            time: 1.0,
            color: to,
        });
        Self { keys }
    }

    pub fn keys(&self) -> &[GradientKey] {
        &self.keys
    }

    /// Color at position `t`, clamped to `[0, 1]`.
    pub fn evaluate(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let first = self.keys[0];
        if t <= first.time {
            return first.color;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.time {
                let span = b.time - a.time;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.time) / span);
            }
        }
        self.keys[self.keys.len() - 1].color
    }

    /// Parse the `time:r,g,b,a | ...` config format.
    ///
    /// An empty string yields `Ok(None)`.
    pub fn parse(s: &str) -> Result<Option<Self>, String> {
        let mut keys: Vec<GradientKey> = Vec::new();
        for entry in s.split('|').map(str::trim).filter(|e| !e.is_empty()) {
            let (time, color) = entry
                .split_once(':')
                .ok_or_else(|| format!("Invalid gradient key '{}': expected time:color", entry))?;
            let time = time
                .trim()
                .parse::<f32>()
                .map_err(|e| format!("Invalid gradient time '{}': {}", time, e))?;
            keys.push(GradientKey {
                time,
                color: Color::parse(color)?,
            });
        }
        Self::new(&keys)
    }

    /// Inverse of [`Gradient::parse`].
    pub fn to_config_string(&self) -> String {
        self.keys
            .iter()
            .map(|k| format!("{}:{}", k.time, k.color))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
