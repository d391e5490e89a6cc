// Copyright (C) Brian G. Milnes 2025

//! Nearest-enclosing-function resolution by bounded backward scan
//!
//! Deliberately a heuristic, not a scope resolver: the scan does not track
//! brace balance, so a call inside an anonymous block can be attributed to an
//! outer named function. The label is cosmetic (it replaces the legacy free
//! text tag), so this mis-attribution is accepted rather than fixed - making
//! the scan brace-aware would change observable output.

pub mod context {
    use regex::Regex;

    /// How many lines above a call site the scan is willing to look
    const SCAN_WINDOW: usize = 50;

    /// Label used when no declaration is found within the window
    pub const UNKNOWN_CONTEXT: &str = "unknown";

    /// Find the name of the nearest `fun` declaration at or above the given
    /// 1-based line number, scanning strictly backward within the window
    pub fn enclosing_function(source: &str, line_number: usize) -> String {
        let fun_decl = Regex::new(r"fun\s+(\w+)\s*\(").unwrap();
        let lines: Vec<&str> = source.split('\n').collect();

        let start = line_number.saturating_sub(1).min(lines.len().saturating_sub(1));
        let stop = line_number.saturating_sub(SCAN_WINDOW);

        for i in ((stop + 1)..=start).rev() {
            if let Some(caps) = fun_decl.captures(lines[i]) {
                return caps[1].to_string();
            }
        }

        UNKNOWN_CONTEXT.to_string()
    }
}
