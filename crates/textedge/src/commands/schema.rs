//! Schema command: JSON Schema for `score --json` output.

use clap::Args;
use tracing::{debug, instrument};

use textedge_core::ScoreReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema describing a [`ScoreReport`].
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    println!("{}", report_schema()?);
    Ok(())
}

fn report_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ScoreReport);
    Ok(serde_json::to_string_pretty(&schema)?)
}
