//! Memory initialization files.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use thiserror::Error;

use crate::*;

/// Header format line of the encoder memories.
pub const ENCODE_FORMAT: &str = "10-bit binary code groups";

/// Header format line of the decoder memories.
pub const DECODE_FORMAT: &str = "{valid_bit, control_bit, 8bit_data}, address = 10-bit code group";

/// Memory file that failed to be written.
#[derive(Debug)]
pub struct WriteFailure {
    /// Path of the file
    pub path: PathBuf,

    /// Cause
    pub error: io::Error,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file system error: {error:?}")]
    Fs { error: io::Error },

    #[error("failed to write {}", paths(.failures))]
    Write { failures: Vec<WriteFailure> },
}

fn paths(failures: &[WriteFailure]) -> String {
    failures.iter().map(|failure| failure.path.display()).join(", ")
}

/// Contents of one `.mem` file, readable by `$readmemb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemFile {
    /// File name
    pub name: String,

    /// Comment lines, without the `//` marker
    pub header: [String; 2],

    /// One binary word per address
    pub lines: Vec<String>,
}

impl MemFile {
    /// Renders a memory in ascending address order.
    pub fn new<W: Num, const DEPTH: usize>(
        name: impl Into<String>, source: &str, format: &str, mem: &MemArray<W, DEPTH>,
    ) -> Self {
        let name = name.into();
        let header = [format!("{} - Generated from {}", name, source), format!("Format: {}", format)];
        let lines = mem.iter().map(|word| word.to_string()).collect();
        Self { name, header, lines }
    }
}

impl fmt::Display for MemFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.header {
            writeln!(f, "// {}", line)?;
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Name of an encoder memory file.
pub fn encode_file_name(kind: CodeKind, disparity: Disparity) -> String {
    let table = match kind {
        CodeKind::Control => "ctrl",
        CodeKind::Data | CodeKind::Other => "data",
    };
    format!("{}_table_{}.mem", table, disparity.suffix())
}

/// Name of a decoder memory file.
pub fn decode_file_name(disparity: Disparity) -> String { format!("decode_table_{}.mem", disparity.suffix()) }

/// Set of memory files generated together.
#[derive(Debug, Default, Clone)]
pub struct MemPackage {
    /// Files in generation order.
    pub files: Vec<MemFile>,
}

impl MemPackage {
    /// Renders the six encoder and decoder memories. `source` names the input table in the headers.
    pub fn from_tables(source: &str, encode: &EncodeTables, decode: &DecodeTables) -> Self {
        let mut package = Self::default();

        for kind in [CodeKind::Data, CodeKind::Control] {
            for disparity in Disparity::ALL {
                let mem = some_or!(encode.mem(kind, disparity), continue);
                package.add(MemFile::new(encode_file_name(kind, disparity), source, ENCODE_FORMAT, mem));
            }
        }

        for disparity in Disparity::ALL {
            package.add(MemFile::new(decode_file_name(disparity), source, DECODE_FORMAT, decode.mem(disparity)));
        }

        package
    }

    /// Adds the given file to package.
    pub fn add(&mut self, file: MemFile) { self.files.push(file); }

    /// Returns the file with the given name.
    pub fn get(&self, name: &str) -> Option<&MemFile> { self.files.iter().find(|file| file.name == name) }

    fn gen_mem_file(file: &MemFile, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write!(writer, "{}", file)?;
        writer.flush()
    }

    /// Writes every file into the given directory, replacing existing files. A failed file does not stop the
    /// remaining ones, and files already written are kept.
    pub fn gen_mem<P: AsRef<Path>>(&self, path_dir: P) -> Result<Vec<PathBuf>, PackageError> {
        fs::create_dir_all(path_dir.as_ref()).map_err(|error| PackageError::Fs { error })?;

        let mut written = Vec::new();
        let mut failures = Vec::new();

        for file in &self.files {
            let path = path_dir.as_ref().join(&file.name);
            match Self::gen_mem_file(file, &path) {
                Ok(()) => {
                    tracing::info!("Generated: {}", path.display());
                    written.push(path);
                }
                Err(error) => {
                    tracing::error!("failed to write {}: {}", path.display(), error);
                    failures.push(WriteFailure { path, error });
                }
            }
        }

        if failures.is_empty() {
            Ok(written)
        } else {
            Err(PackageError::Write { failures })
        }
    }
}
