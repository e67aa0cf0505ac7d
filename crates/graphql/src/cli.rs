use clap::CommandFactory;
use crate::commands;

pub(crate) const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql",
    version,
    about = "Syntax-check, parse, and tokenize GraphQL documents.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        action=clap::ArgAction::Count,
        help="Log more: `-v` logs at DEBUG and `-vv` at TRACE. Takes \
             precedence over the `LOG_LEVEL` environment variable.",
        long,
        short='v',
        global=true,
    )]
    pub verbose: u8,
}
impl Cli {
    /// Chooses the log level from the `-v` count, falling back to
    /// `log_level_env` (the value of `LOG_LEVEL`, if set).
    ///
    /// An unrecognized `LOG_LEVEL` yields [`DEFAULT_LOG_LEVEL`] along with a
    /// warning to report once logging is up.
    pub(crate) fn log_level(
        &self,
        log_level_env: Option<&str>,
    ) -> (tracing::Level, Option<String>) {
        match self.verbose {
            0 => (),
            1 => return (tracing::Level::DEBUG, None),
            _ => return (tracing::Level::TRACE, None),
        }
        let Some(value) = log_level_env.map(str::trim) else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        if value.eq_ignore_ascii_case("verbose") {
            return (tracing::Level::DEBUG, None);
        }
        match value.parse::<tracing::Level>() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{value}`"
            ))),
        }
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
