//! the test_utils folder here will share utils or test components between unit
//! tests
mod common;

pub use common::*;
pub use entry_builder::*;
