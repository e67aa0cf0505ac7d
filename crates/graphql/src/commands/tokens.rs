use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language::GraphQLLexer;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file_path) {
            Ok(source) => Arc::new(source),
            Err(e) => return CommandResult::unreadable(&e),
        };

        let mut out = String::new();
        for token in GraphQLLexer::new(Arc::clone(&source)) {
            let token = match token {
                Ok(token) => token,
                Err(e) => return CommandResult::syntax_error(
                    &e,
                    Some(out.trim_end().to_string()),
                ),
            };
            let location = source.get_location(token.start).to_string();
            // Writing to a `String` cannot fail.
            let _ = writeln!(
                out,
                "{location:<8} {:>5}..{:<5} {}",
                token.start,
                token.end,
                token.description(),
            );
        }
        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}
