// Doxygen XML object graph driver
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

//! Load a Doxygen XML output directory and print its permalink table.
//!
//! `doxymd` runs the whole pipeline
//!   (see [`doxymd::pipeline`])
//!   over the directory given as `INPUT`,
//!     reporting diagnostics to standard error,
//!   and writes one line per compound to standard output
//!     (or to the file named by `-o`):
//!
//! ```text
//! classes	classns_1_1_a	classes/ns/a
//! ```
//!
//! The fields are the collection,
//!   the compound id,
//!   and the permalink,
//!     separated by tabs.

extern crate doxymd;

use doxymd::{
    config::Config,
    diagnose::{Annotation, Diagnostic, Reporter, VisualReporter},
    pipeline::{self, PipelineError},
    resolve::LinkedGraph,
};
use getopts::{Fail, Options};
use std::{
    env,
    error::Error,
    fmt::{self, Display},
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Types of commands
enum Command {
    Run {
        config: Config,
        input: PathBuf,
        output: Option<PathBuf>,
    },
    Usage,
}

/// Run the pipeline over `input` and write the permalink table.
fn run<R: Reporter>(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    reporter: &mut R,
) -> Result<(), DoxymdError> {
    let graph = pipeline::run_dir(input, config, reporter)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| DoxymdError::Output(path.into(), e))?;

            write_table(&graph, BufWriter::new(file))
                .map_err(|e| DoxymdError::Output(path.into(), e))?;
        }
        None => write_table(&graph, io::stdout().lock())
            .map_err(|e| DoxymdError::Output("<stdout>".into(), e))?,
    }

    Ok(pipeline::check_warnings(config, reporter)?)
}

/// Write the collection,
///   id,
///   and permalink of each object in document order.
fn write_table<W: Write>(graph: &LinkedGraph, mut dest: W) -> io::Result<()> {
    for obj in graph.objects() {
        write!(
            dest,
            "{}\t{}\t{}\n",
            obj.collection(),
            obj.id(),
            obj.permalink()
        )?;
    }

    dest.flush()
}

/// Entrypoint for the driver
pub fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "doxymd".into());
    let opts = get_opts();
    let usage =
        opts.usage(&format!("Usage: {program} [OPTIONS] INPUT_DIR"));

    match parse_options(opts, args) {
        Ok(Command::Run {
            config,
            input,
            output,
        }) => {
            let mut reporter = VisualReporter::new(io::stderr());

            if let Err(e) =
                run(&config, &input, output.as_deref(), &mut reporter)
            {
                reporter.report(&e);
                eprintln!("fatal: failed to process `{}`", input.display());

                std::process::exit(e.exit_code());
            }
        }
        Ok(Command::Usage) => {
            println!("{usage}");
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("{e}");
            println!("{usage}");
            std::process::exit(exitcode::USAGE);
        }
    }
}

/// Get 'Options'
fn get_opts() -> Options {
    let mut opts = Options::new();
    opts.optopt("o", "output", "write permalink table to FILE", "FILE");
    opts.optflag("", "keep-case", "do not fold permalinks to lower case");
    opts.optopt(
        "",
        "anonymous-prefix",
        "permalink prefix of anonymous namespaces",
        "NAME",
    );
    opts.optflag("", "deny-warnings", "fail if any warning is reported");
    opts.optflag("h", "help", "print this help menu");

    opts
}

/// Option parser
fn parse_options(opts: Options, args: Vec<String>) -> Result<Command, Fail> {
    let matches = opts.parse(args.get(1..).unwrap_or_default())?;

    if matches.opt_present("h") {
        return Ok(Command::Usage);
    }

    let input = match matches.free.len() {
        0 => return Err(Fail::OptionMissing(String::from("INPUT_DIR"))),
        1 => PathBuf::from(&matches.free[0]),
        _ => return Err(Fail::UnrecognizedOption(matches.free[1].clone())),
    };

    let mut config = Config::default();

    config.permalink.lowercase = !matches.opt_present("keep-case");
    config.deny_warnings = matches.opt_present("deny-warnings");

    if let Some(prefix) = matches.opt_str("anonymous-prefix") {
        if prefix.is_empty() {
            return Err(Fail::ArgumentMissing(String::from(
                "--anonymous-prefix",
            )));
        }

        config.permalink.anonymous_prefix = prefix;
    }

    Ok(Command::Run {
        config,
        input,
        output: matches.opt_str("o").map(PathBuf::from),
    })
}

/// Driver (`doxymd`) error.
#[derive(Debug)]
pub enum DoxymdError {
    Pipeline(PipelineError),

    /// The permalink table could not be written.
    Output(PathBuf, io::Error),
}

impl DoxymdError {
    /// Process exit code for this error.
    fn exit_code(&self) -> exitcode::ExitCode {
        use io::ErrorKind::NotFound;

        match self {
            Self::Pipeline(PipelineError::Io(_, e)) if e.kind() == NotFound => {
                exitcode::NOINPUT
            }
            Self::Pipeline(PipelineError::Io(..)) => exitcode::IOERR,
            Self::Pipeline(_) => exitcode::DATAERR,
            Self::Output(..) => exitcode::CANTCREAT,
        }
    }
}

impl From<PipelineError> for DoxymdError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

impl Display for DoxymdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline(e) => Display::fmt(e, f),
            Self::Output(path, e) => {
                write!(f, "cannot write `{}`: {e}", path.display())
            }
        }
    }
}

impl Error for DoxymdError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pipeline(e) => Some(e),
            Self::Output(_, e) => Some(e),
        }
    }
}

impl Diagnostic for DoxymdError {
    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::Pipeline(e) => e.describe(),
            Self::Output(..) => vec![],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        std::iter::once("program")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_options_help() {
        let result = parse_options(get_opts(), args(&["-h"]));

        match result {
            Ok(Command::Usage) => {}
            _ => panic!("Help option did not parse"),
        }
    }

    #[test]
    fn parse_options_help_long() {
        let result = parse_options(get_opts(), args(&["--help"]));

        match result {
            Ok(Command::Usage) => {}
            _ => panic!("Long help option did not parse"),
        }
    }

    #[test]
    fn parse_options_invalid() {
        let result = parse_options(get_opts(), args(&["-q"]));

        match result {
            Err(Fail::UnrecognizedOption(_)) => {}
            _ => panic!("Invalid option not caught"),
        }
    }

    #[test]
    fn parse_options_missing_input() {
        let result = parse_options(get_opts(), args(&[]));

        match result {
            Err(Fail::OptionMissing(message)) => {
                assert_eq!("INPUT_DIR", message);
            }
            _ => panic!("Missing input not caught"),
        }
    }

    #[test]
    fn parse_options_too_many_args() {
        let result = parse_options(get_opts(), args(&["foo", "bar"]));

        match result {
            Err(Fail::UnrecognizedOption(message)) => {
                assert_eq!("bar", message);
            }
            _ => panic!("Extra argument not caught"),
        }
    }

    #[test]
    fn parse_options_defaults() {
        let result = parse_options(get_opts(), args(&["xml"]));

        match result {
            Ok(Command::Run {
                config,
                input,
                output,
            }) => {
                assert_eq!(Config::default(), config);
                assert_eq!(PathBuf::from("xml"), input);
                assert_eq!(None, output);
            }
            _ => panic!("Unexpected result"),
        }
    }

    #[test]
    fn parse_options_all() {
        let result = parse_options(
            get_opts(),
            args(&[
                "xml",
                "-o",
                "out.tsv",
                "--keep-case",
                "--anonymous-prefix",
                "anon",
                "--deny-warnings",
            ]),
        );

        match result {
            Ok(Command::Run { config, output, .. }) => {
                assert!(!config.permalink.lowercase);
                assert_eq!("anon", config.permalink.anonymous_prefix);
                assert!(config.deny_warnings);
                assert_eq!(Some(PathBuf::from("out.tsv")), output);
            }
            _ => panic!("Unexpected result"),
        }
    }

    #[test]
    fn parse_options_empty_prefix() {
        let result =
            parse_options(get_opts(), args(&["xml", "--anonymous-prefix="]));

        match result {
            Err(Fail::ArgumentMissing(message)) => {
                assert_eq!("--anonymous-prefix", message);
            }
            _ => panic!("Empty prefix not caught"),
        }
    }

    #[test]
    fn exit_codes() {
        let missing = DoxymdError::Pipeline(PipelineError::Io(
            "x".into(),
            io::ErrorKind::NotFound.into(),
        ));
        let denied = DoxymdError::Pipeline(PipelineError::WarningsDenied(2));

        assert_eq!(exitcode::NOINPUT, missing.exit_code());
        assert_eq!(exitcode::DATAERR, denied.exit_code());
    }
}
