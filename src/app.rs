use anyhow::Result;

use crate::{
    cli::Cli,
    domain, infra, modules, registry,
    usecases::{self, bootstrap, query},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = domain::module_name(),
        registry = registry::module_name(),
        modules = modules::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let command = cli.command_or_default();
    tracing::debug!(?command, "running query");

    match query::run_query(&context.registry, command.into()) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(error) => {
            if let query::QueryError::Datasource(ref source) = error {
                tracing::error!(
                    kind = ?source.kind(),
                    retryable = source.is_retryable(),
                    error = %source,
                    "query failed"
                );
            }
            Err(error.into())
        }
    }
}
