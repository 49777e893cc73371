//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Temp cleanup: Removes stale upload artifacts at configured intervals

mod cleanup;

pub use cleanup::{ReaperConfig, ReaperHandle, TempFileReaper, TickReport};
