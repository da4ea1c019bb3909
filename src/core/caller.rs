//! Caller location lookup
//!
//! Frames are counted the same way for every resolver: frame 0 is the
//! resolver's own `resolve` call, frame 1 its caller, and so on. Inlined
//! functions count as frames of their own when debug info is available.

use std::panic::Location;
use std::path::Path;

/// Returned when the requested frame does not exist or has no location.
pub const UNKNOWN_CALLER: &str = "unknown:0";

/// Source of `file:line` strings for log lines.
pub trait CallerResolver: Send + Sync {
    /// Location of the frame `skip` positions above this call.
    fn resolve(&self, skip: usize) -> String;
}

/// Resolves callers by walking the live call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackResolver;

impl CallerResolver for StackResolver {
    #[inline(never)]
    fn resolve(&self, skip: usize) -> String {
        // One extra frame for this method on top of `caller_info`.
        caller_info(skip.saturating_add(1))
    }
}

/// `file:line` of the frame `skip` positions above this function.
///
/// `caller_info(0)` names this function itself. Asking for a frame past the
/// top of the stack yields [`UNKNOWN_CALLER`].
///
/// File and line come from the binary's debug info. Without it (Cargo's
/// default release profile) every frame resolves to [`UNKNOWN_CALLER`];
/// loggers then fall back to the `#[track_caller]` location of the logging
/// call.
#[inline(never)]
pub fn caller_info(skip: usize) -> String {
    let mut anchored = false;
    let mut remaining = skip;
    let mut found: Option<Option<String>> = None;

    backtrace::trace(|frame| {
        let mut symbols = 0usize;
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            symbols += 1;
            if !anchored {
                anchored = symbol
                    .name()
                    .map(|name| format!("{:#}", name).ends_with("caller::caller_info"))
                    .unwrap_or(false);
                if !anchored {
                    return;
                }
            }
            if remaining == 0 {
                found = Some(location(symbol.filename(), symbol.lineno()));
            } else {
                remaining -= 1;
            }
        });
        // A frame without symbols still occupies one slot once anchored.
        if symbols == 0 && anchored && found.is_none() {
            if remaining == 0 {
                found = Some(None);
            } else {
                remaining -= 1;
            }
        }
        found.is_none()
    });

    found
        .flatten()
        .unwrap_or_else(|| UNKNOWN_CALLER.to_string())
}

/// `file:line` of a compile-time call site, using the same file name rules
/// as [`caller_info`].
pub fn site_location(site: &Location<'_>) -> String {
    location(Some(Path::new(site.file())), Some(site.line()))
        .unwrap_or_else(|| UNKNOWN_CALLER.to_string())
}

fn location(file: Option<&Path>, line: Option<u32>) -> Option<String> {
    let file = file?;
    let line = line?;
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| file.to_string_lossy());
    Some(format!("{}:{}", name, line))
}
