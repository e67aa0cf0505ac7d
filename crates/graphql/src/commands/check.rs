use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language::parse;
use libgraphql_language::GraphQLSyntaxError;
use libgraphql_language::ParseOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use tokio::task::JoinSet;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be syntax-checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What happened to one file.
enum FileOutcome {
    Parsed,
    SyntaxError(Box<GraphQLSyntaxError>),
    Unreadable(anyhow::Error),
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                        continue
                    },
                };
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                if has_graphql_ext(path, &graphql_file_exts) {
                    log::trace!("Found GraphQL file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        // A single file argument is checked even if its extension doesn't
        // match `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
            num_non_graphql_files = 0;
        }

        log::debug!("Found {} GraphQL files to be checked.", file_paths.len());

        let mut tasks = JoinSet::new();
        for path in file_paths.iter().cloned() {
            tasks.spawn_blocking(move || {
                let outcome = check_file(&path);
                (path, outcome)
            });
        }

        let mut results = Vec::with_capacity(file_paths.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => errors.push(format!("A check task failed: {e}")),
            }
        }
        results.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut num_syntax_errors = 0;
        for (path, outcome) in results {
            match outcome {
                FileOutcome::Parsed => log::debug!("{} parsed cleanly.", path.display()),
                FileOutcome::SyntaxError(e) => {
                    num_syntax_errors += 1;
                    errors.push(e.format_detailed());
                },
                FileOutcome::Unreadable(e) => errors.push(format!("{e:#}")),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{}\n\n{} Found {} problems while checking {} files \
                ({num_syntax_errors} syntax errors).",
                errors.join("\n\n"),
                output_utils::RED_X,
                errors.len(),
                file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-graphql files.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_non_graphql_files,
        ))
    }
}

pub(crate) fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
        .unwrap_or(false)
}

fn check_file(path: &Path) -> FileOutcome {
    let source = match output_utils::read_source(path) {
        Ok(source) => source,
        Err(e) => return FileOutcome::Unreadable(e),
    };
    match parse(source, ParseOptions::no_location()) {
        Ok(_) => FileOutcome::Parsed,
        Err(e) => FileOutcome::SyntaxError(Box::new(e)),
    }
}
