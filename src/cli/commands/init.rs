use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the configuration directory and a default configuration file.
/// An existing file is kept unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let target = cli.config.clone().unwrap_or_else(Config::config_file);
    let existed = target.exists();

    let path = Config::init_file(Some(&target), force)?;

    if existed && !force {
        info(format!(
            "Configuration already present: {} (use --force to overwrite)",
            path.display()
        ));
    } else {
        success(format!("Config file: {}", path.display()));
        info("Set firestore_project (or FIREBASE_PROJECT_ID) before listing records.");
    }
    Ok(())
}
