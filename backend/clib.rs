use std::fmt;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExampleStaticStruct {
  pub value: i32,
}

impl fmt::Display for ExampleStaticStruct {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{{}}}", self.value)
  }
}

/// Allocates one integer on the heap, initialised to zero.
///
/// The caller owns the allocation and must hand it back to [`testFree`]
/// exactly once.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn testAlloc() -> Box<i32> {
  Box::new(0)
}

/// Releases an allocation made by [`testAlloc`]. Null is ignored.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn testFree(alloc: Option<Box<i32>>) {
  drop(alloc);
}

/// Returns `value` reinterpreted as an unsigned integer.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "C" fn useCLib(ess: ExampleStaticStruct) -> u32 {
  ess.value as u32
}
