// Copyright (C) Brian G. Milnes 2025

//! Pattern library for legacy logging call recognition
//!
//! Two independent questions per line of Kotlin source:
//! - is this call noise that should be deleted outright?
//! - is this one of the two legacy call forms (Timber.tag().x or Log.x)?

pub mod patterns {
    use regex::Regex;
    use std::ops::Range;

    /// Which legacy invocation shape a call site was matched from
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LegacyForm {
        /// `Timber.tag(X).d(...)` - bracketed tag, then level letter
        Timber,
        /// `Log.d("TAG", ...)` - level letter, quoted tag, then arguments
        Log,
    }

    /// Canonical log level after migration
    ///
    /// The legacy verbose level folds into Debug.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Level {
        Debug,
        Error,
        Info,
        Warn,
    }

    impl Level {
        /// Decode a legacy single-letter level selector
        ///
        /// Total over {d, e, i, w, v}; anything unexpected falls back to Debug
        /// the way the legacy tooling did.
        pub fn from_letter(letter: char) -> Level {
            match letter {
                'e' => Level::Error,
                'i' => Level::Info,
                'w' => Level::Warn,
                _ => Level::Debug, // 'd' and 'v'
            }
        }

        /// The StructuredLogger method name for this level
        pub fn method_name(self) -> &'static str {
            match self {
                Level::Debug => "debug",
                Level::Error => "error",
                Level::Info => "info",
                Level::Warn => "warn",
            }
        }
    }

    /// One matched legacy logging invocation, consumed immediately by the
    /// rewriter and never persisted
    #[derive(Debug, Clone)]
    pub struct CallSite {
        /// 1-based source line number
        pub line: usize,
        /// Raw matched call text
        pub raw: String,
        pub form: LegacyForm,
        /// Legacy level selector letter as written
        pub letter: char,
        pub level: Level,
        /// Message expression text, captured opaquely (no nested-paren parsing)
        pub message: String,
        /// Quoted tag literal; only the Log form carries one, and it is
        /// discarded in favor of the resolved context label
        pub tag: Option<String>,
    }

    /// Compiled recognizers, built once and read-only afterwards
    pub struct Patterns {
        noise: Vec<Regex>,
        timber_call: Regex,
        log_call: Regex,
        call_span: Regex,
        log_candidate: Regex,
    }

    impl Patterns {
        pub fn new() -> Patterns {
            // Ordered disjunction of noise signatures; order affects only
            // short-circuit speed, never the result.
            let noise = [
                r"(?i)============.*============", // decorative separators
                r"(?i)\[DEBUG\]",
                r"(?i)println",
                r"(?i)Log\.v\(", // verbose logs, usually too noisy to keep
                r"(?i)TODO|FIXME",
                r"(?i)Testing|Debugging",
                r"(?i)All keys in",
                r"(?i)Inclusion states JSON",
            ]
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();

            Patterns {
                noise,
                timber_call: Regex::new(r"Timber\.tag\([^)]+\)\.([deiwv])\((.*)\)").unwrap(),
                log_call: Regex::new(r#"Log\.([deiwv])\("([^"]+)",\s*(.*)\)"#).unwrap(),
                call_span: Regex::new(
                    r"Timber\.tag\([^)]+\)\.[deiwv]\([^)]*\)|Log\.[deiwv]\([^)]*\)",
                )
                .unwrap(),
                log_candidate: Regex::new(r"Log\.[deiwv]\(").unwrap(),
            }
        }

        /// True if the call text matches any noise signature and should be
        /// deleted rather than converted
        pub fn is_noise(&self, text: &str) -> bool {
            self.noise.iter().any(|p| p.is_match(text))
        }

        /// Cheap pre-filter: could this line hold a legacy call at all?
        pub fn is_candidate_line(&self, line: &str) -> bool {
            line.contains("Timber.tag") || self.log_candidate.is_match(line)
        }

        /// Locate the byte span of the first legacy call on a line
        pub fn find_call_span(&self, line: &str) -> Option<Range<usize>> {
            self.call_span.find(line).map(|m| m.range())
        }

        /// Try both legacy forms against the matched call text
        pub fn match_legacy_call(&self, text: &str, line: usize) -> Option<CallSite> {
            if let Some(caps) = self.timber_call.captures(text) {
                let letter = caps[1].chars().next().unwrap_or('d');
                return Some(CallSite {
                    line,
                    raw: text.to_string(),
                    form: LegacyForm::Timber,
                    letter,
                    level: Level::from_letter(letter),
                    message: caps[2].to_string(),
                    tag: None,
                });
            }

            if let Some(caps) = self.log_call.captures(text) {
                let letter = caps[1].chars().next().unwrap_or('d');
                return Some(CallSite {
                    line,
                    raw: text.to_string(),
                    form: LegacyForm::Log,
                    letter,
                    level: Level::from_letter(letter),
                    message: caps[3].to_string(),
                    tag: Some(caps[2].to_string()),
                });
            }

            None
        }
    }

    impl Default for Patterns {
        fn default() -> Self {
            Patterns::new()
        }
    }
}
