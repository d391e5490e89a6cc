// Copyright (C) Brian G. Milnes 2025

//! Migrate Timber/Android Log calls to StructuredLogger across a Kotlin tree
//!
//! Walks the project directory for .kt files, converts each in place, and
//! reports per-file changes plus a converted/skipped summary. Safe to re-run:
//! already-migrated files are skipped by the engine.
//!
//! Binary: logmigrate

use anyhow::Result;
use logmigrate::{convert_file, find_kotlin_files, ChangeRecord, MigrateArgs, ReportFormat, ToolLogger};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    changes: Vec<ChangeRecord>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    converted: usize,
    skipped: usize,
    errors: usize,
    files: Vec<FileReport>,
}

fn relative_path(file: &Path, base: &Path) -> String {
    file.strip_prefix(base).unwrap_or(file).display().to_string()
}

fn main() -> Result<()> {
    let args = MigrateArgs::validated()?;
    let text_report = args.format == ReportFormat::Text;
    let mut logger = ToolLogger::new("logmigrate");

    if text_report {
        logger.log(&format!("Converting logging in: {}", args.project_dir.display()));
        logger.log(&"=".repeat(80));
        if args.dry_run {
            logger.log("DRY RUN MODE: Will not modify files");
        }
    }

    let files = find_kotlin_files(&args.project_dir);
    if text_report {
        logger.log(&format!("Found {} Kotlin files", files.len()));
    }

    let mut reports = Vec::new();
    let mut converted_count = 0;
    let mut skipped_count = 0;
    let mut error_count = 0;

    for file in &files {
        match convert_file(file, args.dry_run) {
            Ok(conversion) if conversion.converted => {
                converted_count += 1;
                let rel_path = relative_path(file, &args.project_dir);
                if text_report {
                    logger.log("");
                    let verb = if args.dry_run { "Would convert" } else { "Converted" };
                    logger.log(&format!("✓ {verb}: {rel_path}"));
                    for change in &conversion.changes {
                        logger.log(&format!("    {change}"));
                    }
                } else {
                    reports.push(FileReport {
                        path: rel_path,
                        changes: conversion.changes,
                    });
                }
            }
            Ok(_) => {
                skipped_count += 1;
            }
            Err(e) => {
                // Per-file failures are isolated, never fatal to the run
                error_count += 1;
                eprintln!("✗ Error processing {}: {}", file.display(), e);
            }
        }
    }

    if text_report {
        logger.log("");
        logger.log(&"=".repeat(80));
        let mut summary = format!(
            "Conversion complete!\n  - Converted: {converted_count} files\n  - Skipped: {skipped_count} files"
        );
        if error_count > 0 {
            summary.push_str(&format!("\n  - Errors: {error_count} files"));
        }
        logger.finalize(&summary);
    } else {
        let report = RunReport {
            converted: converted_count,
            skipped: skipped_count,
            errors: error_count,
            files: reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
