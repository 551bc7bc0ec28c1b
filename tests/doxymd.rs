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

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{path::PathBuf, process::Command};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn data(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", name]
        .iter()
        .collect()
}

const PROJECT_TABLE: &str = "\
namespaces\tnamespacens\tnamespaces/ns
classes\tclassns_1_1_a\tclasses/ns/a
classes\tclassns_1_1_b\tclasses/ns/b
pages\tusage\tpages/usage
";

#[test]
fn invalid_argument() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg("-q");
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Unrecognized option:"));

    Ok(())
}

#[test]
fn missing_input_dir() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("INPUT_DIR"));

    Ok(())
}

#[test]
fn help() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--deny-warnings"));

    Ok(())
}

#[test]
fn input_dir_does_not_exist() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg(data("does-not-exist"));
    cmd.assert()
        .failure()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("cannot read"))
        .stderr(predicate::str::contains("fatal: failed to process"));

    Ok(())
}

#[test]
fn prints_permalink_table() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg(data("project"));
    cmd.assert()
        .success()
        .stdout(PROJECT_TABLE)
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn keep_case() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg("--keep-case").arg(data("project"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\tclasses/ns/A\n"));

    Ok(())
}

#[test]
fn writes_table_to_output_file() -> TestResult {
    let dest = std::env::temp_dir()
        .join(format!("doxymd-test-{}.tsv", std::process::id()));

    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg("-o").arg(&dest).arg(data("project"));
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&dest)?;
    std::fs::remove_file(&dest)?;

    assert_eq!(PROJECT_TABLE, written);

    Ok(())
}

#[test]
fn unresolved_reference_is_warning() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg(data("broken"));
    cmd.assert()
        .success()
        .stdout("pages\tnotes\tpages/notes\n")
        .stderr(predicate::str::contains(
            "warning: unresolved compound reference `classold`",
        ))
        .stderr(predicate::str::contains("note: referenced from `notes`"));

    Ok(())
}

#[test]
fn denied_warnings_fail_after_output() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg("--deny-warnings").arg(data("broken"));
    cmd.assert()
        .failure()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::contains("pages/notes"))
        .stderr(predicate::str::contains("1 warning was denied"));

    Ok(())
}

#[test]
fn malformed_xml_is_data_error() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg(data("malformed"));
    cmd.assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("malformed XML in"))
        .stderr(predicate::str::contains("classa.xml"));

    Ok(())
}

#[test]
fn schema_violation_is_data_error() -> TestResult {
    let mut cmd = Command::cargo_bin("doxymd")?;
    cmd.arg(data("invalid"));
    cmd.assert()
        .failure()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains(
            "unexpected element `frobnicate` in `compounddef`",
        ));

    Ok(())
}
