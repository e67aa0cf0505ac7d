use crate::output_utils;
use libgraphql_language::GraphQLSyntaxError;
use std::process::ExitCode;

/// What a subcommand prints and how the process exits afterwards.
///
/// `stdout` is printed before `stderr`, so a command that fails partway can
/// still show what it produced up to the failure.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// A failed run whose input could not be read at all.
    pub fn unreadable(error: &anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {error:#}", output_utils::RED_X))
    }

    /// A failed run reporting `error` in its detailed, source-excerpt form.
    ///
    /// Any non-empty `partial_stdout` (output produced before the error was
    /// hit) is kept.
    pub fn syntax_error(
        error: &GraphQLSyntaxError,
        partial_stdout: Option<String>,
    ) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(error.format_detailed()),
            stdout: partial_stdout.filter(|out| !out.is_empty()),
        }
    }
}
