use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language::parse;
use libgraphql_language::ParseOptions;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        help="Omit `loc` offsets from the printed AST.",
        long,
    )]
    no_location: bool,

    #[arg(
        help="Print the JSON on a single line.",
        long,
    )]
    compact: bool,

    #[arg(
        help="Path to the GraphQL file to parse.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file_path) {
            Ok(source) => source,
            Err(e) => return CommandResult::unreadable(&e),
        };

        let options = ParseOptions {
            no_location: self.no_location,
        };
        let document = match parse(source, options) {
            Ok(document) => document,
            Err(e) => return CommandResult::syntax_error(&e, None),
        };
        log::debug!(
            "Parsed {} definitions from {:#?}.",
            document.definitions.len(),
            self.file_path,
        );

        let json = if self.compact {
            serde_json::to_string(&document)
        } else {
            serde_json::to_string_pretty(&document)
        };
        match json {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the AST: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
