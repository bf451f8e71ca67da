//! Utility helpers: planar math, id allocation, logging and step profiling.

pub mod allocator;
pub mod logging;
pub mod math;
pub mod profiling;

pub use allocator::{EntityId, IdAllocator};
pub use math::*;
pub use profiling::StepProfiler;
