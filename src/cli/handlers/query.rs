use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_to_json, parse_variables};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars = parse_variables(variables.as_deref())?;
    let output = execute_to_json(&ctx.schema(), &query, vars)?;
    println!("{}", output);
    Ok(())
}
