pub mod decode;
pub mod encode;
pub mod schema;

use concord_format_json::JsonFormat;

use crate::config::CliConfig;

fn json_format(config: &CliConfig) -> JsonFormat {
    if config.pretty { JsonFormat::pretty() } else { JsonFormat::new() }
}
