// Copyright (C) Brian G. Milnes 2025

//! Logmigrate - one-shot migration of legacy Kotlin logging to StructuredLogger
//!
//! Rewrites the two legacy call forms (`Timber.tag(X).d(...)` and
//! `Log.d("TAG", ...)`) into `logger.<level>("<context>", ...)`, deletes
//! calls classified as noise, and idempotently injects the StructuredLogger
//! import and per-class logger field. Regex-driven and line-oriented by
//! design: correct on the common case, safely idempotent, never
//! double-applies.

pub mod args;
pub mod changes;
pub mod context;
pub mod logging;
pub mod patterns;
pub mod rewrite;
pub mod transform;

// Re-export commonly used items
pub use args::args::{find_kotlin_files, MigrateArgs, ReportFormat};
pub use changes::changes::ChangeRecord;
pub use context::context::enclosing_function;
pub use logging::logging::ToolLogger;
pub use patterns::patterns::{CallSite, LegacyForm, Level, Patterns};
pub use rewrite::rewrite::rewrite_call;
pub use transform::transform::{
    convert_file, convert_source, Conversion, FeatureTag, LOGGER_FIELD_MARKER, LOGGER_IMPORT,
};
