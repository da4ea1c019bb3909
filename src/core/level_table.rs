//! Declarative level table
//!
//! Every level the logger knows about is listed exactly once here. Other
//! modules pass a callback macro to [`for_each_level!`] to stamp out the
//! level enum, the per-level logger methods and the global free functions,
//! so adding a level is a one-line change.
//!
//! Row layout:
//! `(Variant, ordinal, "TAG", foreground, background, plain, formatted, keyed)`

macro_rules! for_each_level {
    ($callback:ident) => {
        $callback! {
            (Trace, 0, "TRC", Some($crate::core::level::Color::BrightBlack), None, trace, tracef, trace_ex),
            (Verbose, 1, "VRB", Some($crate::core::level::Color::Cyan), None, verbose, verbosef, verbose_ex),
            (Debug, 2, "DBG", Some($crate::core::level::Color::Blue), None, debug, debugf, debug_ex),
            (Info, 3, "INF", Some($crate::core::level::Color::Green), None, info, infof, info_ex),
            (Warning, 4, "WRN", Some($crate::core::level::Color::Yellow), None, warning, warningf, warning_ex),
            (Error, 5, "ERR", Some($crate::core::level::Color::Red), None, error, errorf, error_ex),
            (Critical, 6, "CRT", Some($crate::core::level::Color::BrightRed), None, critical, criticalf, critical_ex),
            (Fatal, 7, "FTL", Some($crate::core::level::Color::White), Some($crate::core::level::Color::Red), fatal, fatalf, fatal_ex),
        }
    };
}
