use std::{fmt, ptr::NonNull};

use log::{debug, trace};
use mathtest::{ExampleStaticStruct, Vec2};

use crate::{error::HostError, ffi::StaticLib};

const PROBE_VALUE: i32 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs {
  pub value: i32,
  pub lhs: Vec2,
  pub rhs: Vec2,
}

impl Default for Inputs {
  fn default() -> Self {
    Inputs {
      value: 3,
      lhs: Vec2::new(2, 1),
      rhs: Vec2::new(0, 1),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
  pub clib: u32,
  pub sum: Vec2,
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "ExampleStaticStruct: {{{}}}", self.clib)?;
    write!(f, "Vec2: {}", self.sum)
  }
}

/// Owns one `testAlloc` allocation and frees it on drop.
///
/// Reads and writes go straight through the pointer, relying on the
/// [`StaticLib`] safety contract.
pub struct Allocation<'lib, L: StaticLib + ?Sized> {
  lib: &'lib L,
  ptr: NonNull<i32>,
}

impl<'lib, L: StaticLib + ?Sized> Allocation<'lib, L> {
  pub fn new(lib: &'lib L) -> Result<Self, HostError> {
    let ptr = NonNull::new(lib.test_alloc()).ok_or(HostError::NullAllocation)?;
    trace!("testAlloc -> {:p}", ptr);
    Ok(Allocation { lib, ptr })
  }

  pub fn get(&self) -> i32 {
    unsafe { self.ptr.as_ptr().read() }
  }

  pub fn set(&mut self, value: i32) {
    unsafe { self.ptr.as_ptr().write(value) }
  }
}

impl<L: StaticLib + ?Sized> Drop for Allocation<'_, L> {
  fn drop(&mut self) {
    trace!("testFree({:p})", self.ptr);
    unsafe { self.lib.test_free(self.ptr.as_ptr()) };
  }
}

pub fn run<L: StaticLib + ?Sized>(lib: &L, inputs: Inputs) -> Result<Report, HostError> {
  probe_allocation(lib)?;

  let ess = ExampleStaticStruct {
    value: inputs.value,
  };
  let clib = lib.use_c_lib(ess);
  debug!("useCLib({}) = {}", ess, clib);

  let method = inputs.lhs.add(inputs.rhs);
  let direct = lib.vec2_add(inputs.lhs, inputs.rhs);
  debug!("Vec2_add({}, {}) = {}", inputs.lhs, inputs.rhs, direct);
  if method != direct {
    return Err(HostError::WrapperMismatch { method, direct });
  }

  Ok(Report { clib, sum: method })
}

fn probe_allocation<L: StaticLib + ?Sized>(lib: &L) -> Result<(), HostError> {
  let mut alloc = Allocation::new(lib)?;

  trace!("testAlloc storage starts at {}", alloc.get());

  alloc.set(PROBE_VALUE);
  let read = alloc.get();
  debug_assert_eq!(read, PROBE_VALUE);
  debug!("testAlloc storage holds {}", read);
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;
  use crate::ffi::Linked;

  struct Fake {
    initial: Option<i32>,
    skew: i32,
    allocs: Cell<usize>,
    frees: Cell<usize>,
  }

  impl Fake {
    fn new() -> Self {
      Fake {
        initial: Some(0),
        skew: 0,
        allocs: Cell::new(0),
        frees: Cell::new(0),
      }
    }
  }

  // Storage comes from `Box::into_raw`.
  unsafe impl StaticLib for Fake {
    fn vec2_add(&self, first: Vec2, second: Vec2) -> Vec2 {
      let sum = mathtest::Vec2_add(first, second);
      Vec2::new(sum.x + self.skew, sum.y)
    }

    fn test_alloc(&self) -> *mut i32 {
      match self.initial {
        Some(value) => {
          self.allocs.set(self.allocs.get() + 1);
          Box::into_raw(Box::new(value))
        }
        None => std::ptr::null_mut(),
      }
    }

    unsafe fn test_free(&self, alloc: *mut i32) {
      if !alloc.is_null() {
        self.frees.set(self.frees.get() + 1);
        drop(unsafe { Box::from_raw(alloc) });
      }
    }

    fn use_c_lib(&self, ess: ExampleStaticStruct) -> u32 {
      ess.value as u32
    }
  }

  #[test]
  fn test_run_linked() {
    let report = run(&Linked, Inputs::default()).unwrap();
    assert_eq!(
      report,
      Report {
        clib: 3,
        sum: Vec2::new(2, 2),
      }
    );
    assert_eq!(report.to_string(), "ExampleStaticStruct: {3}\nVec2: {2,2}");
  }

  #[test]
  fn test_run_linked_with_inputs() {
    let inputs = Inputs {
      value: -1,
      lhs: Vec2::new(1, 2),
      rhs: Vec2::new(1, 0),
    };
    let report = run(&Linked, inputs).unwrap();
    assert_eq!(report.clib, u32::MAX);
    assert_eq!(report.sum, Vec2::new(2, 2));
  }

  #[test]
  fn test_allocation_freed_once() {
    let fake = Fake::new();
    {
      let mut alloc = Allocation::new(&fake).unwrap();
      alloc.set(7);
      assert_eq!(alloc.get(), 7);
    }
    assert_eq!(fake.allocs.get(), 1);
    assert_eq!(fake.frees.get(), 1);

    run(&fake, Inputs::default()).unwrap();
    assert_eq!(fake.allocs.get(), 2);
    assert_eq!(fake.frees.get(), 2);
  }

  #[test]
  fn test_null_allocation() {
    let fake = Fake {
      initial: None,
      ..Fake::new()
    };
    assert_eq!(
      run(&fake, Inputs::default()),
      Err(HostError::NullAllocation)
    );
    assert_eq!(fake.frees.get(), 0);
  }

  #[test]
  fn test_nonzero_allocation_is_accepted() {
    let fake = Fake {
      initial: Some(9),
      ..Fake::new()
    };
    let report = run(&fake, Inputs::default()).unwrap();
    assert_eq!(report.sum, Vec2::new(2, 2));
    assert_eq!(fake.frees.get(), 1);
  }

  #[test]
  fn test_allocation_reads_back_written_value() {
    let fake = Fake {
      initial: Some(-3),
      ..Fake::new()
    };
    let mut alloc = Allocation::new(&fake).unwrap();
    assert_eq!(alloc.get(), -3);
    alloc.set(PROBE_VALUE);
    assert_eq!(alloc.get(), PROBE_VALUE);
  }

  #[test]
  fn test_wrapper_mismatch() {
    let fake = Fake {
      skew: 1,
      ..Fake::new()
    };
    assert_eq!(
      run(&fake, Inputs::default()),
      Err(HostError::WrapperMismatch {
        method: Vec2::new(2, 2),
        direct: Vec2::new(3, 2),
      })
    );
  }
}
