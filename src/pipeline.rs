// Pipeline driver
//
//  Copyright (C) 2014-2021 Ryan Specialty Group, LLC.
//
//  This file is part of doxymd.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Drive the phases of the pipeline.
//!
//! The phases are run strictly in order,
//!   each to completion before the next begins:
//!
//!   1. [`load_dir`] reads the index of a Doxygen output directory and
//!        parses every compound file that it lists;
//!   2. [`link`] assembles the parsed files into a
//!        [`Document`],
//!        wraps its compounds,
//!        and resolves the result into a [`LinkedGraph`];
//!        and
//!   3. [`check_warnings`] decides whether the warnings reported along the
//!        way fail the run.
//!
//! [`run_dir`] composes all three for the common case of reading from
//!   the real filesystem.
//!
//! Error Handling
//! ==============
//! Each phase fails on the first fatal error,
//!   which is widened into a [`PipelineError`].
//! Warnings are never returned as errors by the phases themselves;
//!   they are handed to the caller's [`Reporter`] as they are found,
//!     and only [`check_warnings`] may promote them into a failure after
//!     all output is available.

use crate::{
    build::SchemaViolation,
    config::Config,
    diagnose::{Annotation, Diagnostic, Reporter},
    document::{Document, Index},
    fs::{
        File, Filesystem, FsCanonicalizer, VisitOnceFile, VisitOnceFilesystem,
    },
    model::RawGraph,
    resolve::LinkedGraph,
    xml::{parse_reader, Element, XmlError},
};
use std::{
    error::Error,
    fmt::{self, Display},
    fs,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Root elements of the files of a Doxygen output directory.
#[derive(Debug)]
pub struct Loaded {
    /// Contents of the index file.
    pub index: Index,

    /// Root of each compound file,
    ///   in the order the index lists them.
    pub roots: Vec<Element>,
}

/// Load the index file of `dir` and every compound file it lists.
///
/// A compound file that was already loaded through another path is
///   skipped,
///     as is any compound listed more than once.
pub fn load_dir<FS, F>(
    fs: &mut FS,
    dir: &Path,
    config: &Config,
) -> Result<Loaded>
where
    FS: Filesystem<VisitOnceFile<F>>,
    F: File + BufRead,
{
    let index_path = dir.join(&config.index_file);

    let index = match load_file(fs, &index_path)? {
        Some(root) => Index::parse(&root)?,
        None => Index::default(),
    };

    let mut roots = Vec::with_capacity(index.compounds.len());

    for compound in &index.compounds {
        if let Some(root) = load_file(fs, &dir.join(compound.file_name()))? {
            roots.push(root);
        }
    }

    Ok(Loaded { index, roots })
}

/// Parse the file at `path`,
///   or produce [`None`] if it was already visited.
fn load_file<FS, F>(fs: &mut FS, path: &Path) -> Result<Option<Element>>
where
    FS: Filesystem<VisitOnceFile<F>>,
    F: File + BufRead,
{
    let file = fs
        .open(path)
        .map_err(|e| PipelineError::Io(path.to_path_buf(), e))?;

    match file {
        VisitOnceFile::FirstVisit(file) => parse_reader(file)
            .map(Some)
            .map_err(|e| PipelineError::Xml(path.to_path_buf(), e)),
        VisitOnceFile::Visited => Ok(None),
    }
}

/// Assemble, wrap, and resolve the compound files `roots`,
///   then look for references that cannot be resolved.
pub fn link<'a, I, R>(
    roots: I,
    config: &Config,
    reporter: &mut R,
) -> Result<LinkedGraph>
where
    I: IntoIterator<Item = &'a Element>,
    R: Reporter + ?Sized,
{
    let document = Document::assemble(roots)?;
    let raw = RawGraph::wrap(document, &config.permalink, reporter);
    let graph = LinkedGraph::resolve(raw, reporter);

    graph.check_references(reporter);

    Ok(graph)
}

/// Fail if warnings were reported and the configuration denies them.
pub fn check_warnings<R: Reporter + ?Sized>(
    config: &Config,
    reporter: &R,
) -> Result<()> {
    match reporter.warning_count() {
        n if n > 0 && config.deny_warnings => {
            Err(PipelineError::WarningsDenied(n))
        }
        _ => Ok(()),
    }
}

/// Load and link the Doxygen output directory `dir`.
pub fn run_dir<R: Reporter + ?Sized>(
    dir: &Path,
    config: &Config,
    reporter: &mut R,
) -> Result<LinkedGraph> {
    let mut files = VisitOnceFilesystem::<FsCanonicalizer>::new();
    let loaded = load_dir::<_, BufReader<fs::File>>(&mut files, dir, config)?;

    link(&loaded.roots, config, reporter)
}

/// A fatal error of the pipeline.
#[derive(Debug)]
pub enum PipelineError {
    /// A file could not be read.
    Io(PathBuf, io::Error),

    /// A file is not well-formed XML.
    Xml(PathBuf, XmlError),

    /// A file does not conform to the Doxygen schema.
    Schema(SchemaViolation),

    /// Warnings were reported while they were denied.
    WarningsDenied(usize),
}

impl From<SchemaViolation> for PipelineError {
    fn from(e: SchemaViolation) -> Self {
        Self::Schema(e)
    }
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => {
                write!(f, "cannot read `{}`: {e}", path.display())
            }
            Self::Xml(path, e) => {
                write!(f, "malformed XML in `{}`: {e}", path.display())
            }
            Self::Schema(e) => Display::fmt(e, f),
            Self::WarningsDenied(1) => write!(f, "1 warning was denied"),
            Self::WarningsDenied(n) => write!(f, "{n} warnings were denied"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Xml(_, e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::WarningsDenied(_) => None,
        }
    }
}

impl Diagnostic for PipelineError {
    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::Io(..) => Annotation::help(
                "make sure that Doxygen was run with `GENERATE_XML = YES`",
            )
            .into(),
            Self::Xml(_, e) => e.describe(),
            Self::Schema(e) => e.describe(),
            Self::WarningsDenied(_) => {
                Annotation::help("fix the warnings above or allow them").into()
            }
        }
    }
}
