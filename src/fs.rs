// Light filesystem abstraction
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

//! Loading of compound files.
//!
//! [`load_dir`](crate::pipeline::load_dir) never opens a file itself;
//!   it goes through a [`Filesystem`],
//!     so that tests may substitute one that never touches the disk.
//!
//! Doxygen may list the same compound more than once,
//!   and a directory may be reached through a symlink,
//!     either of which would produce a duplicate compound.
//! [`VisitOnceFilesystem`] therefore yields [`VisitOnceFile::FirstVisit`]
//!   only for the first request of each canonical path,
//!     and [`VisitOnceFile::Visited`] for every request thereafter.

use fxhash::FxHashSet;
use std::{
    fs,
    io::{BufRead, BufReader, Read, Result},
    marker::PhantomData,
    path::{Path, PathBuf},
};

/// A readable file that can be opened by path.
pub trait File: Read + Sized {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl File for fs::File {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path)
    }
}

impl<F: File> File for BufReader<F> {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        F::open(path).map(BufReader::new)
    }
}

/// Source of files of type `F`.
pub trait Filesystem<F: File> {
    fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<F>;
}

/// A file that may already have been loaded.
#[derive(Debug, PartialEq)]
pub enum VisitOnceFile<F: File> {
    FirstVisit(F),
    Visited,
}

impl<F: File> File for VisitOnceFile<F> {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        F::open(path).map(Self::FirstVisit)
    }
}

/// A visited file is empty.
impl<F: File> Read for VisitOnceFile<F> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self {
            Self::FirstVisit(file) => file.read(buf),
            Self::Visited => Ok(0),
        }
    }
}

impl<F: File + BufRead> BufRead for VisitOnceFile<F> {
    fn fill_buf(&mut self) -> Result<&[u8]> {
        match self {
            Self::FirstVisit(file) => file.fill_buf(),
            Self::Visited => Ok(&[]),
        }
    }

    fn consume(&mut self, amt: usize) {
        if let Self::FirstVisit(file) = self {
            file.consume(amt)
        }
    }
}

/// Opens each canonical path at most once.
///
/// A path is recorded only once its file has been opened successfully,
///   so that a failed load may be retried.
#[derive(Debug)]
pub struct VisitOnceFilesystem<C: Canonicalizer> {
    visited: FxHashSet<PathBuf>,
    _c: PhantomData<C>,
}

impl<C: Canonicalizer> VisitOnceFilesystem<C> {
    pub fn new() -> Self {
        Self {
            visited: Default::default(),
            _c: PhantomData,
        }
    }
}

impl<C: Canonicalizer> Default for VisitOnceFilesystem<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, F> Filesystem<VisitOnceFile<F>> for VisitOnceFilesystem<C>
where
    C: Canonicalizer,
    F: File,
{
    fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<VisitOnceFile<F>> {
        let canonical = C::canonicalize(path)?;

        if self.visited.contains(&canonical) {
            return Ok(VisitOnceFile::Visited);
        }

        let file = VisitOnceFile::open(&canonical)?;
        self.visited.insert(canonical);

        Ok(file)
    }
}

/// Mapping of the paths that name a file onto a single path.
pub trait Canonicalizer {
    fn canonicalize<P: AsRef<Path>>(path: P) -> Result<PathBuf>;
}

/// Resolve symlinks and relative components using the real filesystem.
///
/// A path that does not exist fails here with
///   [`NotFound`](std::io::ErrorKind::NotFound).
#[derive(Debug)]
pub struct FsCanonicalizer;

impl Canonicalizer for FsCanonicalizer {
    fn canonicalize<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        fs::canonicalize(path)
    }
}
