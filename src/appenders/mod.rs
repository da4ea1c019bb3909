//! Appender implementations

pub mod console;

pub use console::ConsoleAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
