use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::nav::Screen;
use crate::profile::{Profile, ProfileForm};
use crate::ui::messages::{header, info, success};

/// Handle the `profile` command. Edits are validated and applied to this
/// session only.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile { name, email } = cmd {
        header(Screen::Profile);
        let mut form = ProfileForm::new(Profile::from_config(cfg));

        if name.is_some() || email.is_some() {
            if let Some(n) = name {
                form.set_name(n);
            }
            if let Some(e) = email {
                form.set_email(e);
            }
            form.save()?;
            success("Profile updated successfully");
        }

        let p = form.profile();
        println!("Name    : {}", p.name);
        println!("Email   : {}", p.email);
        println!("Version : {}", env!("CARGO_PKG_VERSION"));

        if name.is_some() || email.is_some() {
            info("Profile changes are not stored.");
        }
    }
    Ok(())
}
