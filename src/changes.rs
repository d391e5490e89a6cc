// Copyright (C) Brian G. Milnes 2025

//! Per-file change log for reporting

pub mod changes {
    use serde::Serialize;
    use std::fmt;

    /// One human-readable change description, appended in order during a
    /// file's processing; used only for reporting, never for control flow
    #[derive(Debug, Clone, Serialize)]
    pub struct ChangeRecord {
        /// 1-based source line the change applied to, when line-scoped
        pub line: Option<usize>,
        pub description: String,
    }

    impl ChangeRecord {
        pub fn at_line(line: usize, description: impl Into<String>) -> ChangeRecord {
            ChangeRecord {
                line: Some(line),
                description: description.into(),
            }
        }

        pub fn file_level(description: impl Into<String>) -> ChangeRecord {
            ChangeRecord {
                line: None,
                description: description.into(),
            }
        }
    }

    impl fmt::Display for ChangeRecord {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.line {
                Some(line) => write!(f, "Line {}: {}", line, self.description),
                None => write!(f, "{}", self.description),
            }
        }
    }
}
