use std::io::Write;

use concord_api::{UserDetails, WireRecord};

use crate::config::CliConfig;
use crate::error::CliError;

pub fn run(config: &CliConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_schema(config, &mut stdout.lock())
}

fn write_schema(config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let schema = UserDetails::schema();
    if config.pretty {
        serde_json::to_writer_pretty(&mut *out, schema)?;
    } else {
        serde_json::to_writer(&mut *out, schema)?;
    }
    writeln!(out)?;
    Ok(())
}
