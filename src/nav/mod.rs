//! Screens, navigation history and the header shown on top of each screen.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    TakeAttendance,
    Records,
    Profile,
    Success,
}

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::TakeAttendance => "/take-attendance",
            Screen::Records => "/records",
            Screen::Profile => "/profile",
            Screen::Success => "/success",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Face Attendance",
            Screen::TakeAttendance => "Take Attendance",
            Screen::Records => "Attendance Records",
            Screen::Profile => "Profile",
            Screen::Success => "Attendance Recorded Successfully",
        }
    }

    /// Command that opens the screen from the terminal.
    pub fn command(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::TakeAttendance => "take",
            Screen::Records => "records",
            Screen::Profile => "profile",
            Screen::Success => "take",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [
            Screen::Home,
            Screen::TakeAttendance,
            Screen::Records,
            Screen::Profile,
            Screen::Success,
        ]
        .into_iter()
        .find(|s| s.path() == path)
    }
}

/// Back-navigation history. Home is always at the bottom and never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Screen {
        *self.stack.last().unwrap_or(&Screen::Home)
    }

    pub fn go(&mut self, screen: Screen) {
        if screen == Screen::Home {
            self.stack.truncate(1);
        } else if self.current() != screen {
            self.stack.push(screen);
        }
    }

    pub fn back(&mut self) -> Screen {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    pub fn header(&self) -> Header {
        Header::for_screen(self.current())
    }
}

/// Chrome shared by every screen: back affordance plus profile entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub show_back: bool,
    pub profile_entry: Screen,
}

impl Header {
    pub fn for_screen(screen: Screen) -> Self {
        Self {
            title: screen.title(),
            show_back: screen != Screen::Home,
            profile_entry: Screen::Profile,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let back = if self.show_back { "‹ home  " } else { "" };
        write!(
            f,
            "{}{}    [profile: rattendance {}]",
            back,
            self.title,
            self.profile_entry.command()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_never_leaves_home() {
        let mut nav = Navigator::default();
        assert_eq!(nav.back(), Screen::Home);

        nav.go(Screen::TakeAttendance);
        nav.go(Screen::Success);
        nav.go(Screen::Records);
        assert_eq!(nav.back(), Screen::Success);
        assert_eq!(nav.back(), Screen::TakeAttendance);
        assert_eq!(nav.back(), Screen::Home);
        assert_eq!(nav.back(), Screen::Home);
    }

    #[test]
    fn going_home_resets_history() {
        let mut nav = Navigator::default();
        nav.go(Screen::Records);
        nav.go(Screen::Profile);
        nav.go(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.back(), Screen::Home);
    }

    #[test]
    fn header_hides_back_on_home_only() {
        assert!(!Header::for_screen(Screen::Home).show_back);
        assert!(Header::for_screen(Screen::Records).show_back);
        assert_eq!(
            Header::for_screen(Screen::Profile).profile_entry,
            Screen::Profile
        );
        assert_eq!(Screen::from_path("/records"), Some(Screen::Records));
    }
}
