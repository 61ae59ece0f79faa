use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::records::export::{ExportRequest, open_in_browser};
use crate::ui::messages::{info, success};

use super::selection_from;

/// Handle the `export` command. Nothing is opened unless the class and
/// time slot are fully specified.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        class,
        slot,
        print_url,
    } = cmd
    {
        let selection = selection_from(class, *slot)?;
        let request = ExportRequest::from_selection(&selection)?;
        let url = request.url(&cfg.recognition_url)?;

        if *print_url {
            println!("{}", url);
            return Ok(());
        }

        info(format!("Opening {}", url));
        open_in_browser(&url)?;
        success(format!(
            "Export requested for {} ({})",
            request.identity.display_name(),
            request.time_slot
        ));
    }
    Ok(())
}
