//! 8-bit RGBA [`Color`].
//!
//! Colors are stored as bytes so that interpolation always lands on a
//! representable value and equality checks in the hit-feedback animations are
//! exact.

use serde::Serialize;

/// RGBA color with one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const BLANK: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha channel as a float in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Copy of this color with the alpha channel replaced by `alpha` (`[0, 1]`).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Linear interpolation towards `to`, `t` clamped to `[0, 1]`.
    ///
    /// `t >= 1` returns `to` exactly.
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return to;
        }
        let ch = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: ch(self.r, to.r),
            g: ch(self.g, to.g),
            b: ch(self.b, to.b),
            a: ch(self.a, to.a),
        }
    }

    /// Parse `"r,g,b,a"` (alpha optional, defaults to 255).
    pub fn parse(s: &str) -> Result<Color, String> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!("Invalid color '{}': expected r,g,b[,a]", s));
        }
        let mut channels = [255u8; 4];
        for (i, part) in parts.iter().enumerate() {
            channels[i] = part
                .parse::<u8>()
                .map_err(|e| format!("Invalid color channel '{}' in '{}': {}", part, s, e))?;
        }
        Ok(Color::new(channels[0], channels[1], channels[2], channels[3]))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::new(0, 0, 0, 255);
        let b = Color::new(200, 100, 50, 255);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 3.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn test_lerp_midpoint_rounds() {
        let a = Color::new(0, 0, 0, 0);
        let b = Color::new(255, 100, 51, 255);
        let m = a.lerp(b, 0.5);
        assert_eq!(m, Color::new(128, 50, 26, 128));
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.5);
        assert_eq!(c.a, 128);
        assert_eq!(Color::WHITE.with_alpha(2.0).a, 255);
        assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Color::parse("255, 0, 0").unwrap(), Color::RED);
        assert_eq!(
            Color::parse("10,20,30,40").unwrap(),
            Color::new(10, 20, 30, 40)
        );
        assert!(Color::parse("10,20").is_err());
        assert!(Color::parse("300,0,0").is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let c = Color::new(1, 2, 3, 4);
        assert_eq!(Color::parse(&c.to_string()).unwrap(), c);
    }
}
