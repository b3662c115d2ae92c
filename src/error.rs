use mathtest::Vec2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
  #[error("testAlloc returned a null pointer")]
  NullAllocation,
  #[error("Vec2::add gave {method} but Vec2_add gave {direct}")]
  WrapperMismatch { method: Vec2, direct: Vec2 },
}
