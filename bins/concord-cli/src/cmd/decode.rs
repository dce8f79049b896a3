use std::io::{Read, Write};

use concord_api::{FormatSerializer, UserDetails, WireRecord};

use crate::config::{CliConfig, DecodeArgs};
use crate::error::CliError;

pub fn run(args: &DecodeArgs, config: &CliConfig) -> Result<(), CliError> {
    let input = match &args.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            std::fs::read(path)?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    let stdout = std::io::stdout();
    write_decoded(&input, config, &mut stdout.lock())
}

fn write_decoded(input: &[u8], config: &CliConfig, out: &mut impl Write) -> Result<(), CliError> {
    let format = super::json_format(config);
    let seq = format.deserialize(input)?;
    let record = UserDetails::from_sequence(seq).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected {} payload", UserDetails::NAME);
    })?;

    if config.pretty {
        serde_json::to_writer_pretty(&mut *out, &record)?;
    } else {
        serde_json::to_writer(&mut *out, &record)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use concord_api::{DecodeError, ValueKind};

    use super::*;

    fn decode(input: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        write_decoded(input.as_bytes(), &CliConfig::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_object_view_with_nulls() {
        assert_eq!(decode(r#"["Ada",null]"#).unwrap(), "{\"name\":\"Ada\",\"email\":null}\n");
    }

    #[test]
    fn short_array_is_decode_error() {
        let err = decode(r#"["Ada"]"#).unwrap_err();
        assert!(matches!(err, CliError::Decode(DecodeError::MalformedRecord { .. })));
    }

    #[test]
    fn wrong_kind_names_index() {
        let err = decode(r#"["Ada",true]"#).unwrap_err();
        assert!(matches!(
            err,
            CliError::Decode(DecodeError::TypeMismatch { index: 1, actual: ValueKind::Bool, .. })
        ));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn non_array_is_format_error() {
        assert!(matches!(decode("\"Ada\"").unwrap_err(), CliError::Format(_)));
    }
}
