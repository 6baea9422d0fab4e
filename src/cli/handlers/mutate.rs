use anyhow::Result;

use super::CommandContext;
use super::utils::{execute_to_json, parse_variables};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let vars = parse_variables(variables.as_deref())?;

    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let output = execute_to_json(&ctx.schema(), &document, vars)?;
    println!("{}", output);
    Ok(())
}
