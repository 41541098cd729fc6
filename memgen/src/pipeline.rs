//! Table generation pipeline: read, parse, build, materialize, write.
//!
//! Everything up to writing happens in memory, so an unreadable or corrupt input never leaves partial output.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::*;

#[allow(missing_docs)]
#[allow(variant_size_differences)]
#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{} line(s) with the wrong number of fields, first at line {}", .skipped.len(), .skipped[0].line)]
    Malformed { skipped: Vec<SkippedLine> },

    #[error("{} decoder collision(s), first at {} code {}", .collisions.len(), .collisions[0].disparity,
        .collisions[0].code)]
    Collision { collisions: Vec<Collision> },

    #[error("package error: {0}")]
    Package(#[from] PackageError),
}

/// Outcome of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Table counts
    pub report: BuildReport,

    /// Lines skipped for having the wrong number of fields
    pub skipped: usize,

    /// Decoder collisions resolved by precedence
    pub collisions: usize,

    /// Code groups that do not round-trip
    pub mismatches: usize,

    /// Files written, in generation order
    pub written: Vec<PathBuf>,
}

/// Renders the memory files for an in-memory table. `source` names the table in the file headers.
pub fn render_str(source: &str, input: &str, strict: bool) -> Result<(MemPackage, Summary), GenError> {
    let parsed = parse_str(input)?;
    if strict && !parsed.skipped.is_empty() {
        return Err(GenError::Malformed { skipped: parsed.skipped });
    }

    let (tables, report) = CodeTables::build(parsed.records);

    tracing::info!("Generating encoder memory files...");
    let encode = EncodeTables::from_tables(&tables);

    tracing::info!("Generating decoder memory files...");
    let (decode, collisions) = DecodeTables::from_tables(&tables);
    if strict && !collisions.is_empty() {
        return Err(GenError::Collision { collisions });
    }

    let mismatches = verify_round_trip(&tables, &encode, &decode);

    let summary = Summary {
        report,
        skipped: parsed.skipped.len(),
        collisions: collisions.len(),
        mismatches: mismatches.len(),
        written: Vec::new(),
    };
    Ok((MemPackage::from_tables(source, &encode, &decode), summary))
}

/// Reads the configured input and renders its memory files without writing them.
pub fn render(config: &Config) -> Result<(MemPackage, Summary), GenError> {
    tracing::info!("Parsing: {}", config.input.display());
    let input = fs::read_to_string(&config.input)
        .map_err(|source| GenError::Read { path: config.input.clone(), source })?;
    render_str(&config.source_name(), &input, config.strict)
}

/// Generates all memory files into the configured output directory.
pub fn generate(config: &Config) -> Result<Summary, GenError> {
    let (package, mut summary) = render(config)?;
    summary.written = package.gen_mem(&config.out_dir)?;

    tracing::info!("All memory files generated successfully!");
    if summary.skipped > 0 || summary.collisions > 0 || summary.mismatches > 0 {
        tracing::warn!(
            skipped = summary.skipped,
            collisions = summary.collisions,
            mismatches = summary.mismatches,
            "generated with warnings"
        );
    }

    Ok(summary)
}
