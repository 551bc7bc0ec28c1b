// Tests for diagnostic system
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

use super::*;
use std::{error::Error, io};

#[derive(Debug)]
struct StubDiagnostic(Level);

impl Display for StubDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stub message")
    }
}

impl Error for StubDiagnostic {}

impl Diagnostic for StubDiagnostic {
    fn level(&self) -> Level {
        self.0
    }

    fn describe(&self) -> Vec<Annotation> {
        vec![
            Annotation::note("in compound `classfoo`"),
            Annotation::help(format!("try {}", "again")),
        ]
    }
}

#[test]
fn report_renders_level_message_and_annotations() {
    let report = Report::from_diagnostic(&StubDiagnostic(Level::Warning));

    assert_eq!(
        "warning: stub message\n  \
           note: in compound `classfoo`\n  \
           help: try again\n",
        report.to_string(),
    );
}

#[test]
fn buffer_reporter_tallies_by_level() {
    let mut sut = BufferReporter::new();

    sut.report(&StubDiagnostic(Level::Warning));
    sut.report(&StubDiagnostic(Level::Warning));
    sut.report(&StubDiagnostic(Level::Error));

    assert_eq!(2, sut.warning_count());
    assert_eq!(1, sut.error_count());
    assert!(sut.has_errors());
    assert_eq!(2, sut.at_level(Level::Warning).count());
    assert_eq!(3, sut.reports().len());
}

#[test]
fn visual_reporter_writes_each_report() {
    let mut sut = VisualReporter::new(Vec::<u8>::new());

    sut.report(&StubDiagnostic(Level::Warning));
    assert_eq!(1, sut.warning_count());
    assert!(!sut.has_errors());

    let out = String::from_utf8(sut.into_inner()).unwrap();
    assert!(out.starts_with("warning: stub message\n"));
}

/// Writer whose every write fails.
struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn visual_reporter_counts_unwritten_reports() {
    let mut sut = VisualReporter::new(BrokenPipe);

    sut.report(&StubDiagnostic(Level::Warning));
    sut.report(&StubDiagnostic(Level::Error));

    assert_eq!(2, sut.dropped());
    assert_eq!(1, sut.warning_count());
    assert!(sut.has_errors());
}

#[test]
fn internal_errors_count_as_errors() {
    let mut sut = BufferReporter::new();
    sut.report(&StubDiagnostic(Level::InternalError));

    assert_eq!(1, sut.error_count());
    assert_eq!(0, sut.count(Level::Error));
}

#[test]
fn levels_order_by_severity() {
    assert!(Level::InternalError < Level::Error);
    assert!(Level::Error < Level::Warning);
    assert!(Level::Warning < Level::Note);
}
