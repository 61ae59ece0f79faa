use crate::errors::AppResult;
use crate::nav::Screen;
use crate::ui::messages::header;

/// Handle the `home` command: the two entry points plus profile.
pub fn handle() -> AppResult<()> {
    header(Screen::Home);
    println!("Take attendance quickly and accurately using facial recognition\n");

    let entries = [
        (
            Screen::TakeAttendance,
            "Capture class photos and mark attendance automatically",
        ),
        (
            Screen::Records,
            "Access attendance history and generate reports",
        ),
        (Screen::Profile, "View or edit your information"),
    ];
    for (screen, blurb) in entries {
        println!("  {:<20} rattendance {}", screen.title(), screen.command());
        println!("  {:<20} {}\n", "", blurb);
    }
    Ok(())
}
