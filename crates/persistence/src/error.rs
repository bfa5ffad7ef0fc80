// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing a container file failed.
    Io {
        /// The file involved.
        path: String,
        /// The underlying error message.
        message: String,
    },
    /// A container file could not be encoded or decoded.
    Serialization {
        /// The file involved.
        path: String,
        /// The underlying error message.
        message: String,
    },
    /// Some container files exist and others are missing. The system loads
    /// all five or starts empty; partial presence is not supported.
    PartialState {
        /// The container files found.
        present: Vec<String>,
        /// The container files missing.
        missing: Vec<String>,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "I/O error on {path}: {message}"),
            Self::Serialization { path, message } => {
                write!(f, "Serialization error on {path}: {message}")
            }
            Self::PartialState { present, missing } => {
                write!(
                    f,
                    "Partial saved state: found [{}], missing [{}]",
                    present.join(", "),
                    missing.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for PersistenceError {}
