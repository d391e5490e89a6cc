// Copyright (C) Brian G. Milnes 2025

//! Per-file transformation pipeline
//!
//! Pure function from (path, source text) to (new text, converted flag,
//! change log); file I/O stays in a thin wrapper so the engine is testable
//! on in-memory sources.
//!
//! Migration safety is pure text containment: a file holding the canonical
//! logger field declaration is treated as already migrated and skipped, so
//! the rewrite never double-applies. The injected import and field strings
//! must therefore stay bit-exact across runs.

pub mod transform {
    use crate::changes::changes::ChangeRecord;
    use crate::context::context::enclosing_function;
    use crate::patterns::patterns::Patterns;
    use crate::rewrite::rewrite::rewrite_call;
    use anyhow::{Context, Result};
    use regex::Regex;
    use serde::Serialize;
    use std::fs;
    use std::path::Path;

    /// Canonical import injected into migrated files
    pub const LOGGER_IMPORT: &str = "import com.expensemanager.app.utils.logging.StructuredLogger";

    /// Substring marking a file as already migrated
    pub const LOGGER_FIELD_MARKER: &str = "private val logger = StructuredLogger";

    /// Alternate spelling of an existing logger field (explicitly typed)
    const LOGGER_FIELD_TYPED_MARKER: &str = "private val logger:";

    const TIMBER_IMPORT: &str = "import timber.log.Timber";
    const ANDROID_LOG_IMPORT: &str = "import android.util.Log";

    /// Coarse feature-area tag derived from the file path, embedded in the
    /// injected logger field declaration
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum FeatureTag {
        Dashboard,
        Sms,
        Transaction,
        Categories,
        Merchant,
        Insights,
        Database,
        Network,
        Migration,
        App,
    }

    impl FeatureTag {
        /// Classify a file path by case-insensitive substring match, fixed
        /// priority order, first match wins
        pub fn from_path(path: &Path) -> FeatureTag {
            let path = path.to_string_lossy().to_lowercase();
            if path.contains("dashboard") {
                FeatureTag::Dashboard
            } else if path.contains("message") || path.contains("sms") {
                FeatureTag::Sms
            } else if path.contains("transaction") {
                FeatureTag::Transaction
            } else if path.contains("categor") {
                FeatureTag::Categories
            } else if path.contains("merchant") {
                FeatureTag::Merchant
            } else if path.contains("insight") {
                FeatureTag::Insights
            } else if path.contains("database") || path.contains("dao") || path.contains("repository") {
                FeatureTag::Database
            } else if path.contains("network") || path.contains("api") {
                FeatureTag::Network
            } else if path.contains("migration") {
                FeatureTag::Migration
            } else {
                FeatureTag::App
            }
        }

        /// Kotlin constant reference used in the injected field declaration
        pub fn qualified(self) -> &'static str {
            match self {
                FeatureTag::Dashboard => "LogConfig.FeatureTags.DASHBOARD",
                FeatureTag::Sms => "LogConfig.FeatureTags.SMS",
                FeatureTag::Transaction => "LogConfig.FeatureTags.TRANSACTION",
                FeatureTag::Categories => "LogConfig.FeatureTags.CATEGORIES",
                FeatureTag::Merchant => "LogConfig.FeatureTags.MERCHANT",
                FeatureTag::Insights => "LogConfig.FeatureTags.INSIGHTS",
                FeatureTag::Database => "LogConfig.FeatureTags.DATABASE",
                FeatureTag::Network => "LogConfig.FeatureTags.NETWORK",
                FeatureTag::Migration => "LogConfig.FeatureTags.MIGRATION",
                FeatureTag::App => "LogConfig.FeatureTags.APP",
            }
        }
    }

    /// Result of converting one file's text
    #[derive(Debug)]
    pub struct Conversion {
        pub text: String,
        pub converted: bool,
        pub changes: Vec<ChangeRecord>,
    }

    impl Conversion {
        fn skipped(source: &str) -> Conversion {
            Conversion {
                text: source.to_string(),
                converted: false,
                changes: Vec::new(),
            }
        }
    }

    /// Convert one file's source text
    ///
    /// Skips (converted = false, text unchanged) when the file is already
    /// migrated or contains no legacy logging markers. Otherwise runs the
    /// full pipeline: line rewrite, import fixup, logger field injection.
    pub fn convert_source(path: &Path, source: &str) -> Conversion {
        if source.contains(LOGGER_FIELD_MARKER) {
            return Conversion::skipped(source);
        }
        if !source.contains("Timber") && !source.contains("Log.d") && !source.contains("Log.e") {
            return Conversion::skipped(source);
        }

        let patterns = Patterns::new();
        let tag = FeatureTag::from_path(path);
        let class_name = declared_class_name(source, path);

        let mut changes = Vec::new();
        let text = rewrite_lines(&patterns, source, &mut changes);
        let text = fix_imports(&text);
        let text = inject_logger_field(&text, tag, &class_name, &mut changes);

        Conversion {
            text,
            converted: true,
            changes,
        }
    }

    /// Read, convert, and (unless dry-run or skipped) write back in one
    /// full-buffer operation
    pub fn convert_file(path: &Path, dry_run: bool) -> Result<Conversion> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let conversion = convert_source(path, &source);

        if conversion.converted && !dry_run {
            fs::write(path, &conversion.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(conversion)
    }

    /// Primary declared type name, falling back to the filename stem
    fn declared_class_name(source: &str, path: &Path) -> String {
        let class_decl = Regex::new(r"class\s+(\w+)").unwrap();
        match class_decl.captures(source) {
            Some(caps) => caps[1].to_string(),
            None => path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Unknown")
                .to_string(),
        }
    }

    /// Rewrite every candidate line; a line left blank by a deleted noise
    /// call is dropped entirely, not kept as an empty line
    fn rewrite_lines(patterns: &Patterns, source: &str, changes: &mut Vec<ChangeRecord>) -> String {
        let mut out = Vec::new();

        for (idx, line) in source.split('\n').enumerate() {
            let line_number = idx + 1;

            if !patterns.is_candidate_line(line) {
                out.push(line.to_string());
                continue;
            }

            let new_line = match patterns.find_call_span(line) {
                Some(span) => {
                    let raw = &line[span.clone()];
                    // Context is resolved against the original full text
                    let context = enclosing_function(source, line_number);
                    let replacement = rewrite_call(patterns, raw, line_number, &context, changes);
                    format!("{}{}{}", &line[..span.start], replacement, &line[span.end..])
                }
                None => line.to_string(),
            };

            if !new_line.trim().is_empty() {
                out.push(new_line);
            }
        }

        out.join("\n")
    }

    /// Drop the two legacy import lines and insert the canonical import
    /// before the first remaining import, if not already present
    fn fix_imports(source: &str) -> String {
        let mut lines: Vec<&str> = source
            .split('\n')
            .filter(|line| *line != TIMBER_IMPORT && *line != ANDROID_LOG_IMPORT)
            .collect();

        if !source.contains(LOGGER_IMPORT) {
            if let Some(pos) = lines.iter().position(|line| line.starts_with("import ")) {
                lines.insert(pos, LOGGER_IMPORT);
            }
        }

        lines.join("\n")
    }

    /// Insert the logger field right after the first class-body opening
    /// brace, unless a logger field in either recognized spelling exists
    fn inject_logger_field(
        source: &str,
        tag: FeatureTag,
        class_name: &str,
        changes: &mut Vec<ChangeRecord>,
    ) -> String {
        if source.contains(LOGGER_FIELD_MARKER) || source.contains(LOGGER_FIELD_TYPED_MARKER) {
            return source.to_string();
        }

        let class_decl = Regex::new(r"class\s+\w+[^{]*\{").unwrap();
        let open_brace_end = match class_decl.find(source) {
            Some(m) => m.end(),
            None => return source.to_string(), // no class body, nothing to inject into
        };

        let field = format!(
            "\n    private val logger = StructuredLogger({}, \"{}\")\n",
            tag.qualified(),
            class_name
        );

        let mut out = String::with_capacity(source.len() + field.len());
        out.push_str(&source[..open_brace_end]);
        out.push_str(&field);
        out.push_str(&source[open_brace_end..]);

        changes.push(ChangeRecord::file_level(format!(
            "Added logger instance to {class_name}"
        )));

        out
    }
}
