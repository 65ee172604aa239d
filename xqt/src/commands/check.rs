//! Check command implementation.
//!
//! Scans every input file in parallel and reports lexical errors as
//! rendered diagnostics. The command fails if any file does.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};
use xqc_lex::{Lexer, ScanState};
use xqc_util::Handler;

use crate::commands::common::{error_messages, read_source, render_diagnostics};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{Result, XqtError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub inputs: Vec<PathBuf>,
    /// Number of parallel jobs; the configured count when `None`.
    pub jobs: Option<usize>,
}

/// Outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    /// The file scanned cleanly.
    Clean {
        /// File path.
        path: PathBuf,
        /// Tokens before `Eof`.
        tokens: usize,
    },
    /// The file has a lexical error or could not be read.
    Failed {
        /// File path.
        path: PathBuf,
        /// Rendered diagnostic or read error.
        report: String,
    },
}

impl FileReport {
    /// Whether the file failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, FileReport::Failed { .. })
    }
}

/// Check command handler.
#[derive(Debug)]
pub struct CheckCommand {
    args: CheckArgs,
    state: ScanState,
    jobs: usize,
}

impl CheckCommand {
    /// Check one file.
    fn check_file(&self, path: &Path) -> FileReport {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(err) => {
                return FileReport::Failed {
                    path: path.to_path_buf(),
                    report: format!("error: {err}\n"),
                }
            },
        };

        let handler = Handler::new();
        match Lexer::with_state(&source.text, &handler, self.state).tokenize() {
            Ok(tokens) => FileReport::Clean {
                path: path.to_path_buf(),
                tokens: tokens.len(),
            },
            Err(_) => FileReport::Failed {
                path: path.to_path_buf(),
                report: render_diagnostics(&source, &handler),
            },
        }
    }

    /// Check every input, preserving input order in the result.
    pub fn check_all(&self) -> Result<Vec<FileReport>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| XqtError::Config(format!("Failed to start worker pool: {e}")))?;

        Ok(pool.install(|| {
            self.args
                .inputs
                .par_iter()
                .map(|path| self.check_file(path))
                .collect()
        }))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: CheckArgs, config: Config) -> Result<Self> {
        if args.inputs.is_empty() {
            return Err(XqtError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }
        let jobs = args.jobs.unwrap_or(config.check.jobs);
        if jobs == 0 {
            return Err(XqtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }
        Ok(Self {
            args,
            state: config.lexer.scan_state(),
            jobs,
        })
    }

    fn execute(&self) -> Result<()> {
        let start_time = Instant::now();
        let reports = self.check_all()?;

        for report in &reports {
            match report {
                FileReport::Clean { path, tokens } => {
                    debug!(path = %path.display(), tokens, "clean");
                },
                FileReport::Failed { path, report } => {
                    warn!(path = %path.display(), "lexical error");
                    eprint!("{report}");
                },
            }
        }
        let failed = reports.iter().filter(|r| r.is_failure()).count();

        info!(
            files = reports.len(),
            failed,
            "checked in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        if failed > 0 {
            return Err(XqtError::CheckFailed(failed));
        }
        Ok(())
    }

    fn name() -> &'static str {
        "check"
    }
}
