//! Logging abstractions for runtime-agnostic logging
//!
//! The loader and provider never write to a global sink; they receive a
//! [`SharedLogger`] from whoever builds them.

mod traits;
mod level;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use level::LogLevel;
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
