//! `abpgen config`: inspect the configuration in effect.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<&std::path::PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Path => {
            let path = explicit.cloned().unwrap_or_else(AppConfig::active_path);
            let note = if path.is_file() { "" } else { " (not created yet)" };
            output.print(&format!("{}{note}", path.display()))?;
        }

        ConfigCommands::Show => {
            if output.is_json() {
                let value = serde_json::to_value(&config)
                    .map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.json(&value)?;
            } else {
                let serialised = config
                    .to_toml()
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(serialised.trim_end())?;
            }
        }
    }

    Ok(())
}
