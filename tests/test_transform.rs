// Copyright (C) Brian G. Milnes 2025

//! Tests for the per-file transformation pipeline

use logmigrate::{convert_source, FeatureTag, LOGGER_IMPORT};
use std::path::Path;

const FOO_REPOSITORY: &str = "\
package com.example.database

import android.util.Log
import com.example.Thing

class FooRepository {

    fun load(n: Int) {
        Log.d(\"Foo\", \"loaded $n items\")
    }
}
";

#[test]
fn test_full_conversion_scenario() {
    let path = Path::new("app/src/database/FooRepository.kt");
    let result = convert_source(path, FOO_REPOSITORY);

    assert!(result.converted);
    assert!(result.text.contains("logger.debug(\"load\", \"loaded $n items\")"));
    assert!(!result.text.contains("Log.d"));
    assert!(!result.text.contains("import android.util.Log"));

    // Canonical import inserted before the first existing import
    let lines: Vec<&str> = result.text.split('\n').collect();
    let import_pos = lines.iter().position(|l| *l == LOGGER_IMPORT).unwrap();
    let thing_pos = lines.iter().position(|l| *l == "import com.example.Thing").unwrap();
    assert!(import_pos < thing_pos);

    // Logger field sits right after the class opening brace
    let class_pos = lines.iter().position(|l| *l == "class FooRepository {").unwrap();
    assert_eq!(
        lines[class_pos + 1],
        "    private val logger = StructuredLogger(LogConfig.FeatureTags.DATABASE, \"FooRepository\")"
    );
}

#[test]
fn test_idempotence() {
    let path = Path::new("app/src/database/FooRepository.kt");
    let first = convert_source(path, FOO_REPOSITORY);
    assert!(first.converted);

    let second = convert_source(path, &first.text);
    assert!(!second.converted);
    assert_eq!(second.text, first.text);
    assert!(second.changes.is_empty());
}

#[test]
fn test_untouched_file_invariant() {
    let source = "\
package com.example

class Plain {
    fun run() {
        compute()
    }
}
";
    let result = convert_source(Path::new("app/src/Plain.kt"), source);
    assert!(!result.converted);
    assert_eq!(result.text, source);
}

#[test]
fn test_noise_deletion_leaves_no_blank_line() {
    let source = "\
class CacheManager {
    fun refresh() {
        Log.d(\"Cache\", \"[DEBUG] dumping state\")
        reload()
    }
}
";
    let result = convert_source(Path::new("app/src/cache/CacheManager.kt"), source);

    assert!(result.converted);
    assert!(!result.text.contains("[DEBUG]"));
    // The physical line is gone, not replaced by an empty one
    assert!(result.text.contains("fun refresh() {\n        reload()"));
    assert!(result
        .changes
        .iter()
        .any(|c| c.to_string() == "Line 3: REMOVED unnecessary log"));
}

#[test]
fn test_verbose_calls_are_deleted_as_noise() {
    let source = "\
class SyncWorker {
    fun sync() {
        Log.v(\"Sync\", \"entering loop\")
        Log.d(\"Sync\", \"synced $count records\")
    }
}
";
    let result = convert_source(Path::new("app/src/sync/SyncWorker.kt"), source);

    assert!(!result.text.contains("Log.v"));
    assert!(!result.text.contains("entering loop"));
    assert!(result.text.contains("logger.debug(\"sync\", \"synced $count records\")"));
}

#[test]
fn test_timber_import_removed() {
    let source = "\
package com.example

import com.example.Clock
import timber.log.Timber

class SyncWorker {
    fun sync() {
        Timber.tag(\"Sync\").i(\"sync finished\")
    }
}
";
    let result = convert_source(Path::new("app/src/sync/SyncWorker.kt"), source);

    assert!(!result.text.contains("import timber.log.Timber"));
    assert!(result.text.contains(LOGGER_IMPORT));
    assert!(result.text.contains("logger.info(\"sync\", \"sync finished\")"));
}

#[test]
fn test_injection_uniqueness_with_many_call_sites() {
    let source = "\
package com.example

import android.util.Log
import com.example.Thing

class MultiCall {
    fun one() {
        Log.d(\"T\", \"one\")
    }
    fun two() {
        Log.i(\"T\", \"two\")
    }
    fun three() {
        Log.e(\"T\", \"three\", e)
    }
}
";
    let result = convert_source(Path::new("app/src/MultiCall.kt"), source);

    assert_eq!(result.text.matches(LOGGER_IMPORT).count(), 1);
    assert_eq!(
        result.text.matches("private val logger = StructuredLogger").count(),
        1
    );
    assert!(result.text.contains("logger.debug(\"one\", \"one\")"));
    assert!(result.text.contains("logger.info(\"two\", \"two\")"));
    assert!(result.text.contains("logger.error(\"three\", \"three\", e)"));
}

#[test]
fn test_existing_typed_logger_field_blocks_injection() {
    let source = "\
class HasLogger {
    private val logger: AppLogger = AppLogger()

    fun run() {
        Log.d(\"T\", \"running\")
    }
}
";
    let result = convert_source(Path::new("app/src/HasLogger.kt"), source);

    assert!(result.converted);
    // Call still converted, but no second field is injected
    assert!(result.text.contains("logger.debug(\"run\", \"running\")"));
    assert!(!result.text.contains("StructuredLogger(LogConfig"));
}

#[test]
fn test_file_without_class_body_converts_calls_only() {
    let source = "\
package com.example

import android.util.Log

fun topLevelHelper() {
    Log.d(\"T\", \"helping\")
}
";
    let result = convert_source(Path::new("app/src/Helpers.kt"), source);

    assert!(result.converted);
    assert!(result.text.contains("logger.debug(\"topLevelHelper\", \"helping\")"));
    assert!(!result.text.contains("private val logger = StructuredLogger"));
}

#[test]
fn test_classification_priority_and_default() {
    // database wins over network when both substrings are present
    assert_eq!(
        FeatureTag::from_path(Path::new("app/src/database/network/Foo.kt")),
        FeatureTag::Database
    );
    assert_eq!(
        FeatureTag::from_path(Path::new("app/src/Dashboard/MainView.kt")),
        FeatureTag::Dashboard
    );
    assert_eq!(
        FeatureTag::from_path(Path::new("app/src/util/Strings.kt")),
        FeatureTag::App
    );
    assert_eq!(FeatureTag::Database.qualified(), "LogConfig.FeatureTags.DATABASE");
}

#[test]
fn test_object_file_converts_without_field_injection() {
    let source = "\
package com.example

import android.util.Log

object Registry {
    fun register() {
        Log.i(\"Reg\", \"registered\")
    }
}
";
    let result = convert_source(Path::new("app/src/Registry.kt"), source);

    assert!(result.converted);
    assert!(result.text.contains("logger.info(\"register\", \"registered\")"));
    // No class body to inject into
    assert!(!result.text.contains("private val logger"));
}
