use anyhow::Result;
use clap::Parser;

use postql::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use postql::cli::{Cli, Commands};
use postql::config::{ServerConfig, load_env_file};

fn main() -> Result<()> {
    // Populate PORT/HOST from .env before clap reads the environment
    let env_file = load_env_file();

    let cli = Cli::parse();
    postql::logging::init(cli.verbose, cli.log_file);

    match env_file {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        None => tracing::debug!("No .env file found"),
    }

    let ctx = CommandContext::new();

    match cli.command {
        Commands::Serve { host, port } => handle_serve(ctx, ServerConfig::new(host, port)),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
