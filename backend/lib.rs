//! C-linkage math helpers, built as a static library.
//!
//! Every exported function uses the C calling convention and an unmangled
//! symbol name. The generated header lives in `lib/mathtest.h`.

mod clib;
mod vec2;

pub use clib::{testAlloc, testFree, useCLib, ExampleStaticStruct};
pub use vec2::{ParseVec2Error, Vec2, Vec2_add};
