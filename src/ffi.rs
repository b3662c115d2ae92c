use mathtest::{ExampleStaticStruct, Vec2};

#[allow(non_snake_case)]
extern "C" {
  fn Vec2_add(first: Vec2, second: Vec2) -> Vec2;
  fn testAlloc() -> *mut i32;
  fn testFree(alloc: *mut i32);
  fn useCLib(ess: ExampleStaticStruct) -> u32;
}

/// The calls the host makes into the static library.
///
/// # Safety
///
/// `test_alloc` must return either null or a pointer to a valid, aligned,
/// readable and writable `i32` that the caller owns until it is handed to
/// `test_free`. The host dereferences that pointer without further checks.
pub unsafe trait StaticLib {
  fn vec2_add(&self, first: Vec2, second: Vec2) -> Vec2;

  /// Returns storage the caller must release with [`StaticLib::test_free`].
  fn test_alloc(&self) -> *mut i32;

  /// # Safety
  ///
  /// `alloc` must be null or come from [`StaticLib::test_alloc`] on the same
  /// library, and must not be used afterwards.
  unsafe fn test_free(&self, alloc: *mut i32);

  fn use_c_lib(&self, ess: ExampleStaticStruct) -> u32;
}

/// Calls the exported C symbols of the linked library.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linked;

// `testAlloc` returns a live `Box<i32>`.
unsafe impl StaticLib for Linked {
  fn vec2_add(&self, first: Vec2, second: Vec2) -> Vec2 {
    unsafe { Vec2_add(first, second) }
  }

  fn test_alloc(&self) -> *mut i32 {
    unsafe { testAlloc() }
  }

  unsafe fn test_free(&self, alloc: *mut i32) {
    unsafe { testFree(alloc) }
  }

  fn use_c_lib(&self, ess: ExampleStaticStruct) -> u32 {
    unsafe { useCLib(ess) }
  }
}
