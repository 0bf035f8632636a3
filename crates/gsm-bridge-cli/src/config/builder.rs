use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileOutputConfig};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use gsm_bridge::engine::config::{ConversionConfig, ConversionConfigBuilder, OutputRename};
use tracing::debug;

pub fn build_config(args: &Cli) -> Result<ConversionConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Effective file configuration: {:?}", &file_config);

    let source = args
        .source
        .map(Into::into)
        .or(file_config.source)
        .unwrap_or(defaults.source);

    let verify = args.verify || file_config.verify.unwrap_or(defaults.verify);

    let rename_inputs = if args.no_rename {
        false
    } else {
        file_config.rename_inputs.unwrap_or(defaults.rename_inputs)
    };

    let output_rename = merge_output_rename(file_config.output.take())?;

    ConversionConfigBuilder::new()
        .basename(args.basename.clone())
        .workdir(&args.workdir)
        .source(source)
        .output_rename(output_rename)
        .rename_inputs(rename_inputs)
        .verify(verify)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn merge_output_rename(file_val: Option<FileOutputConfig>) -> Result<Option<OutputRename>> {
    let file_val = file_val.unwrap_or_default();
    match (file_val.rename_from, file_val.rename_to) {
        (Some(from), Some(to)) => Ok(Some(OutputRename { from, to })),
        (None, None) => Ok(None),
        _ => Err(CliError::Config(
            "`output.rename-from` and `output.rename-to` must be set together".to_string(),
        )),
    }
}

fn parse_bool(key: &str, value_str: &str) -> Result<bool> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0];
        let value_str = parts[1];

        match key {
            "source" => {
                config.source = Some(
                    value_str
                        .parse()
                        .map_err(|e| CliError::Config(format!("{}", e)))?,
                );
            }
            "verify" => {
                config.verify = Some(parse_bool(key, value_str)?);
            }
            "rename-inputs" => {
                config.rename_inputs = Some(parse_bool(key, value_str)?);
            }
            "output.rename-from" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .rename_from = Some(value_str.to_string());
            }
            "output.rename-to" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .rename_to = Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
