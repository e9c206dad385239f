use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Window size and screen offset, written as `WxH+X+Y`.
///
/// Offsets may be negative (`800x600+-8+0` or `800x600-8+0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryParseError {
    #[error("missing 'x' between width and height in {0:?}")]
    MissingSeparator(String),
    #[error("missing position offsets in {0:?}")]
    MissingOffset(String),
    #[error("invalid number {value:?} in {input:?}")]
    InvalidNumber { input: String, value: String },
}

impl WindowGeometry {
    pub fn new(width: u32, height: u32, x: i32, y: i32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }

    /// Grow the size to at least `min` on both axes.
    pub fn clamp_to_min(self, min: (u32, u32)) -> Self {
        Self {
            width: self.width.max(min.0),
            height: self.height.max(min.1),
            ..self
        }
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

impl FromStr for WindowGeometry {
    type Err = GeometryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let (width, rest) = input
            .split_once('x')
            .ok_or_else(|| GeometryParseError::MissingSeparator(input.to_string()))?;

        let offset_start = rest
            .find(['+', '-'])
            .ok_or_else(|| GeometryParseError::MissingOffset(input.to_string()))?;
        let (height, offsets) = rest.split_at(offset_start);

        let (x, y) = split_offsets(offsets)
            .ok_or_else(|| GeometryParseError::MissingOffset(input.to_string()))?;

        Ok(Self {
            width: parse_number(input, width)?,
            height: parse_number(input, height)?,
            x: parse_number(input, x)?,
            y: parse_number(input, y)?,
        })
    }
}

/// Split `+X+Y` / `-X-Y` / `+-X+Y` into signed number strings.
fn split_offsets(offsets: &str) -> Option<(&str, &str)> {
    let body = offsets.strip_prefix('+').unwrap_or(offsets);
    // The second offset starts at the first sign that is not the leading sign of X.
    let second = body
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map(|(i, _)| i)?;
    let (x, y) = body.split_at(second);
    Some((x, y.strip_prefix('+').unwrap_or(y)))
}

fn parse_number<T: FromStr>(input: &str, value: &str) -> Result<T, GeometryParseError> {
    value
        .parse()
        .map_err(|_| GeometryParseError::InvalidNumber {
            input: input.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_descriptor() {
        let g: WindowGeometry = "800x600+100+100".parse().unwrap();
        assert_eq!(g, WindowGeometry::new(800, 600, 100, 100));
        assert_eq!(g.to_string(), "800x600+100+100");
    }

    #[test]
    fn parses_negative_offsets() {
        assert_eq!(
            "1024x768+-8+0".parse::<WindowGeometry>().unwrap(),
            WindowGeometry::new(1024, 768, -8, 0)
        );
        assert_eq!(
            "1024x768-8-20".parse::<WindowGeometry>().unwrap(),
            WindowGeometry::new(1024, 768, -8, -20)
        );
        assert_eq!(
            WindowGeometry::new(10, 20, -5, 3).to_string(),
            "10x20+-5+3"
        );
    }

    #[test]
    fn rejects_malformed_descriptors() {
        assert!(matches!(
            "800600+1+1".parse::<WindowGeometry>(),
            Err(GeometryParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "800x600".parse::<WindowGeometry>(),
            Err(GeometryParseError::MissingOffset(_))
        ));
        assert!(matches!(
            "800x600+1".parse::<WindowGeometry>(),
            Err(GeometryParseError::MissingOffset(_))
        ));
        assert!(matches!(
            "wide x600+1+1".parse::<WindowGeometry>(),
            Err(GeometryParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn clamps_to_minimum_size() {
        let g = WindowGeometry::new(640, 900, 1, 2).clamp_to_min((800, 600));
        assert_eq!(g, WindowGeometry::new(800, 900, 1, 2));
    }
}
