use serde::{Deserialize, Serialize};

/// View preferences persisted across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn theme_name(&self) -> &'static str {
        if self.dark_mode {
            "dark"
        } else {
            "light"
        }
    }
}
