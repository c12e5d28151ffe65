pub mod color;

use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub use color::{BoardColors, ColorPalette, ThemeColors};

/// Theme selectable from the configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Main theme management structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors::light(),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Border style for a pane, highlighted when it has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.colors.palette.selection_text)
            .bg(self.colors.palette.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.colors.board.header)
            .add_modifier(Modifier::BOLD)
    }
}
