//! Run configuration.

use std::path::PathBuf;

/// Default input table, relative to the invocation directory.
pub const DEFAULT_INPUT: &str = "8b_10b_code_groups_pcs.txt";

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Code-group table to read
    pub input: PathBuf,

    /// Directory receiving the memory files
    pub out_dir: PathBuf,

    /// Reject skipped lines and decoder collisions instead of warning about them
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { input: PathBuf::from(DEFAULT_INPUT), out_dir: PathBuf::from(DEFAULT_OUT_DIR), strict: false }
    }
}

impl Config {
    /// Name of the input used in file headers.
    pub fn source_name(&self) -> String {
        match self.input.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.input.display().to_string(),
        }
    }
}
