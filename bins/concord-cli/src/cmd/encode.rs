use std::io::Write;

use concord_api::{FormatSerializer, UserDetails, WireRecord};

use crate::config::{CliConfig, EncodeArgs};
use crate::error::CliError;

pub fn run(args: &EncodeArgs, config: &CliConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_encoded(args, config, &mut stdout.lock())
}

fn write_encoded(args: &EncodeArgs, config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let record = UserDetails::builder()
        .with_name(args.name.as_deref())
        .with_email(args.email.as_deref())
        .build();

    let format = super::json_format(config);
    let bytes = format.serialize(&record.to_sequence())?;
    tracing::info!(format = format.name(), bytes = bytes.len(), "encoded {}", UserDetails::NAME);

    out.write_all(&bytes)?;
    writeln!(out)?;
    Ok(())
}
