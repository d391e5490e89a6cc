// Copyright (C) Brian G. Milnes 2025

//! Command line arguments and source file discovery

pub mod args {
    use anyhow::Result;
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use walkdir::WalkDir;

    /// Output format for the run report
    #[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
    pub enum ReportFormat {
        Text,
        Json,
    }

    #[derive(Parser, Debug)]
    #[command(
        name = "logmigrate",
        about = "Convert Timber/Android Log calls to StructuredLogger across a Kotlin source tree"
    )]
    pub struct MigrateArgs {
        /// Root directory of the Kotlin project to migrate
        pub project_dir: PathBuf,

        /// Report what would change without writing any file
        #[arg(long)]
        pub dry_run: bool,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        pub format: ReportFormat,
    }

    impl MigrateArgs {
        /// Parse and validate: the project directory must exist before any
        /// file is touched
        pub fn validated() -> Result<MigrateArgs> {
            let args = MigrateArgs::parse();
            if !args.project_dir.is_dir() {
                anyhow::bail!("Directory not found: {}", args.project_dir.display());
            }
            Ok(args)
        }
    }

    /// Find all Kotlin files under a directory, sorted for deterministic
    /// reporting order
    pub fn find_kotlin_files(root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("kt"))
            .collect();
        files.sort();
        files
    }
}
