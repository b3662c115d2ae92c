use std::{fmt, ops::Add, str::FromStr};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
  pub x: i32,
  pub y: i32,
}

/// Adds two vectors field by field.
///
/// Overflow wraps in two's complement, in debug and release builds alike.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn Vec2_add(first: Vec2, second: Vec2) -> Vec2 {
  Vec2 {
    x: first.x.wrapping_add(second.x),
    y: first.y.wrapping_add(second.y),
  }
}

impl Vec2 {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// Same as `Vec2_add(self, other)`.
  pub fn add(self, other: Vec2) -> Vec2 {
    Vec2_add(self, other)
  }
}

impl Add for Vec2 {
  type Output = Vec2;

  fn add(self, other: Vec2) -> Vec2 {
    Vec2_add(self, other)
  }
}

impl fmt::Display for Vec2 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{{},{}}}", self.x, self.y)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVec2Error {
  #[error("expected `x,y`, found `{0}`")]
  Shape(String),
  #[error("invalid coordinate `{0}`")]
  Coordinate(String),
}

impl FromStr for Vec2 {
  type Err = ParseVec2Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let inner = trimmed
      .strip_prefix('{')
      .and_then(|rest| rest.strip_suffix('}'))
      .unwrap_or(trimmed);

    let (x, y) = inner
      .split_once(',')
      .ok_or_else(|| ParseVec2Error::Shape(s.to_string()))?;

    let coordinate = |part: &str| {
      let part = part.trim();
      part
        .parse::<i32>()
        .map_err(|_| ParseVec2Error::Coordinate(part.to_string()))
    };

    Ok(Vec2::new(coordinate(x)?, coordinate(y)?))
  }
}
