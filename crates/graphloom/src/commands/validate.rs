use crate::commands::schema_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
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
        help="Paths to one or more schema files or directories containing \
             schema files which need to be validated together.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let files = match schema_files::discover(&self.file_or_dir_paths, &self.graphql_file_exts) {
            Ok(files) => files,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to collect schema files: {e:#}",
                output_utils::RED_X,
            )),
        };

        let loom = match schema_files::load_loom(&files) {
            Ok(loom) => loom,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        match loom.schema() {
            Ok(schema) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Schema validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-schema files.\n",
                    "  * Validated {} object types.\n",
                    "  * Validated {} enum types.\n",
                    "  * Validated {} schema-level directives.",
                ),
                output_utils::GREEN_CHECK,
                files.file_paths.len(),
                files.num_skipped,
                schema.types().objects().len(),
                schema.types().enums().len(),
                schema.directives().len(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
