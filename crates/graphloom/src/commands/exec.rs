use crate::commands::schema_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphloom::execution::ExecutionResult;
use libgraphloom::execution::Request;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Name of the operation to run when the query contains several.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="The query document to execute.",
        long,
        short='q',
    )]
    query: String,

    #[arg(
        help="A JSON object used as the root value of the request.",
        long,
    )]
    root: Option<String>,

    #[arg(
        help="Paths to schema files or directories containing schema files.",
        long,
        num_args=1..,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="A JSON object of variable values.",
        long,
    )]
    variables: Option<String>,
}
impl ExecCmd {
    async fn execute(self) -> anyhow::Result<ExecutionResult> {
        let files = schema_files::discover(&self.schema, &self.graphql_file_exts)?;
        let loom = schema_files::load_loom(&files)?;

        let mut request = Request::new(self.query);
        if let Some(operation_name) = self.operation_name {
            request = request.with_operation_name(operation_name);
        }
        if let Some(variables) = self.variables {
            let variables: serde_json::Value = serde_json::from_str(variables.as_str())
                .context("--variables is not valid JSON")?;
            request = request.with_json_variables(variables);
        }
        if let Some(root) = self.root {
            let root: serde_json::Value = serde_json::from_str(root.as_str())
                .context("--root is not valid JSON")?;
            request = request.with_json_root(root)
                .context("--root must be a JSON object")?;
        }

        log::debug!("Executing request against {} schema file(s).", files.file_paths.len());
        Ok(loom.execute(request).await?)
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let result = match self.execute().await {
            Ok(result) => result,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let succeeded = result.is_ok();
        let json = match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize the result: {e}",
                output_utils::RED_X,
            )),
        };

        if succeeded {
            CommandResult::stdout(format_args!("{json}"))
        } else {
            CommandResult::stdout_failure(format_args!("{json}"))
        }
    }
}
