// Diagnostic report rendering
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

//! Rendering of diagnostic information.

// NB: `write!` together with `\n` is preferred to `writeln!` so that there
//   is only a single sequence of characters to search for while tracking
//   down newlines,
//     rather than using both.

use super::{Annotation, Diagnostic, Level};
use std::{
    fmt::{self, Display},
    io,
};

/// Recipient of diagnostics.
///
/// A reporter renders each [`Diagnostic`] into a [`Report`] and keeps a
///   tally of reports by [`Level`] so that the caller can decide,
///     after a phase completes,
///     whether the run should be considered a failure.
///
/// Reporting _does not return [`Result`]_ and never fails.
/// A report that cannot be written is still counted at its level,
///   so [`warning_count`](Reporter::warning_count) and
///   [`has_errors`](Reporter::has_errors) remain accurate;
///     [`VisualReporter::dropped`] tells how many were lost.
pub trait Reporter {
    /// Render and record a diagnostic.
    fn report(&mut self, diagnostic: &dyn Diagnostic);

    /// Number of reports recorded at exactly the given level.
    fn count(&self, level: Level) -> usize;

    fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn error_count(&self) -> usize {
        self.count(Level::InternalError) + self.count(Level::Error)
    }

    fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Per-level report tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally([usize; Level::COUNT]);

impl Tally {
    fn incr(&mut self, level: Level) {
        self.0[level.index()] += 1;
    }

    fn get(&self, level: Level) -> usize {
        self.0[level.index()]
    }
}

/// Render each diagnostic to a writer as soon as it is reported.
///
/// This is the reporter used by the command line,
///   writing to standard error.
/// Each report is rendered to a [`String`] before being written so that
///   the output of concurrent processes is not interleaved mid-report
///   (e.g. if invoked by `make -jN`).
pub struct VisualReporter<W: io::Write> {
    out: W,
    tally: Tally,
    dropped: usize,
}

impl<W: io::Write> VisualReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tally: Default::default(),
            dropped: 0,
        }
    }

    /// Number of reports that could not be written.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Reporter for VisualReporter<W> {
    fn report(&mut self, diagnostic: &dyn Diagnostic) {
        let report = Report::from_diagnostic(diagnostic);
        self.tally.incr(report.level);

        if self.out.write_all(report.to_string().as_bytes()).is_err() {
            self.dropped += 1;
        }
    }

    fn count(&self, level: Level) -> usize {
        self.tally.get(level)
    }
}

/// Retain rendered reports in memory.
///
/// Useful for library consumers that present diagnostics themselves,
///   and for tests.
#[derive(Debug, Default)]
pub struct BufferReporter {
    reports: Vec<Report>,
    tally: Tally,
}

impl BufferReporter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Reports of the given level,
    ///   in the order they were reported.
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &Report> {
        self.reports.iter().filter(move |r| r.level == level)
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, diagnostic: &dyn Diagnostic) {
        let report = Report::from_diagnostic(diagnostic);
        self.tally.incr(report.level);
        self.reports.push(report);
    }

    fn count(&self, level: Level) -> usize {
        self.tally.get(level)
    }
}

/// A rendered diagnostic.
///
/// Reports own their text so that they may outlive the diagnostic that
///   produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    level: Level,
    msg: String,
    lines: Vec<(Level, String)>,
}

impl Report {
    pub fn from_diagnostic(diagnostic: &dyn Diagnostic) -> Self {
        Self {
            level: diagnostic.level(),
            msg: diagnostic.to_string(),
            lines: diagnostic
                .describe()
                .into_iter()
                .map(|Annotation(level, label)| (level, label.to_string()))
                .collect(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Primary message of the report,
    ///   without its level.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Annotation lines in the order they were described.
    pub fn lines(&self) -> impl Iterator<Item = (Level, &str)> {
        self.lines.iter().map(|(level, s)| (*level, s.as_str()))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{level}: {msg}\n", level = self.level, msg = self.msg)?;

        self.lines
            .iter()
            .try_for_each(|(level, label)| write!(f, "  {level}: {label}\n"))
    }
}
