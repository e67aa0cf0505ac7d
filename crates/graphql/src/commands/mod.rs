pub(crate) mod check;
mod parse;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use parse::ParseCmd;
use tokens::TokensCmd;

/// A subcommand that runs to completion and reports through a
/// [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Syntax-check GraphQL files, reporting every file that fails to parse.
    Check(Box<CheckCmd>),

    /// Parse one GraphQL file and print its AST as JSON.
    Parse(ParseCmd),

    /// Print the token stream of one GraphQL file.
    Tokens(TokensCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
