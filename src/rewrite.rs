// Copyright (C) Brian G. Milnes 2025

//! Rewrites one matched legacy call into the StructuredLogger form
//!
//! Noise calls produce empty text (the transformer drops the line). Error
//! level calls split a trailing exception argument out of the message text,
//! and the two legacy forms carry it on opposite sides:
//! - Timber convention: `e(exception, "message")` - exception first
//! - Log convention: `Log.e("TAG", "message", exception)` - exception last
//!
//! Both converge on `logger.error("<context>", message, exception)`. The
//! first-comma/last-comma split asymmetry mirrors those conventions and is
//! preserved as observed, not unified.

pub mod rewrite {
    use crate::changes::changes::ChangeRecord;
    use crate::patterns::patterns::{LegacyForm, Level, Patterns};

    /// Rewrite the raw text of one matched call span
    ///
    /// Returns empty text for deleted noise, the converted call for a
    /// recognized legacy form, and the input unchanged otherwise.
    pub fn rewrite_call(
        patterns: &Patterns,
        raw: &str,
        line: usize,
        context: &str,
        changes: &mut Vec<ChangeRecord>,
    ) -> String {
        if patterns.is_noise(raw) {
            changes.push(ChangeRecord::at_line(line, "REMOVED unnecessary log"));
            return String::new();
        }

        let call = match patterns.match_legacy_call(raw, line) {
            Some(call) => call,
            None => return raw.to_string(),
        };

        let method = call.level.method_name();

        let converted = match call.form {
            LegacyForm::Timber if call.level == Level::Error && call.message.contains(',') => {
                let (exception, message) = split_first_comma(&call.message);
                format!("logger.{method}(\"{context}\", {message}, {exception})")
            }
            LegacyForm::Log if call.level == Level::Error && call.message.contains(',') => {
                let (message, exception) = split_last_comma(&call.message);
                format!("logger.{method}(\"{context}\", {message}, {exception})")
            }
            _ => format!("logger.{method}(\"{context}\", {})", call.message.trim()),
        };

        let source_name = match call.form {
            LegacyForm::Timber => "Timber",
            LegacyForm::Log => "Log",
        };
        changes.push(ChangeRecord::at_line(
            line,
            format!("Converted {source_name}.{}() to logger.{method}()", call.letter),
        ));

        converted
    }

    /// Timber error convention: exception before the first comma, message
    /// after it (empty-string literal when nothing follows)
    fn split_first_comma(message: &str) -> (String, String) {
        match message.split_once(',') {
            Some((exception, msg)) => {
                let msg = msg.trim();
                let msg = if msg.is_empty() { "\"\"" } else { msg };
                (exception.trim().to_string(), msg.to_string())
            }
            None => (message.trim().to_string(), "\"\"".to_string()),
        }
    }

    /// Log error convention: message up to the last comma, exception after it
    fn split_last_comma(message: &str) -> (String, String) {
        match message.rsplit_once(',') {
            Some((msg, exception)) => (msg.trim().to_string(), exception.trim().to_string()),
            None => (message.trim().to_string(), String::new()),
        }
    }
}
