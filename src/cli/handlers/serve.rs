use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::ServerConfig;
use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, config: ServerConfig) -> Result<()> {
    let schema = ctx.schema();
    let addr = config.display_addr();

    println!(
        "{} GraphQL server on http://{}/graphql",
        "Starting".green(),
        addr.cyan()
    );
    println!("GraphiQL: http://{}/graphql", addr);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, &config))
        .with_context(|| format!("Failed to serve on {}", config.bind_addr()))?;
    Ok(())
}
