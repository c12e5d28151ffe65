use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Base color palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub accent: Color,
}

/// Colors for the message board widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardColors {
    pub header: Color,
    pub card_title: Color,
    pub card_body: Color,
    pub card_entering: Color,
    pub card_exiting: Color,
    pub counter: Color,
    pub counter_warning: Color,
    pub page_active: Color,
    pub page_inactive: Color,
    pub no_results: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,
    pub board: BoardColors,
}

impl ThemeColors {
    pub fn dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(40, 44, 52),
            surface: Color::Rgb(58, 63, 71),

            text_primary: Color::Rgb(224, 224, 230),
            text_secondary: Color::Rgb(160, 160, 168),
            text_muted: Color::Rgb(136, 136, 136),

            border: Color::Rgb(88, 92, 100),
            border_focused: Color::Rgb(97, 218, 251),
            selection: Color::Rgb(33, 161, 241),
            selection_text: Color::Rgb(255, 255, 255),

            success: Color::Rgb(76, 175, 80),
            warning: Color::Rgb(255, 193, 7),
            error: Color::Rgb(255, 77, 77),

            accent: Color::Rgb(97, 218, 251),
        };

        Self {
            board: BoardColors {
                header: palette.accent,
                card_title: palette.text_primary,
                card_body: palette.text_secondary,
                card_entering: palette.success,
                card_exiting: palette.text_muted,
                counter: palette.text_muted,
                counter_warning: palette.error,
                page_active: palette.selection,
                page_inactive: palette.text_secondary,
                no_results: palette.error,
            },
            palette,
        }
    }

    pub fn light() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(250, 250, 252),
            surface: Color::Rgb(242, 242, 245),

            text_primary: Color::Rgb(32, 32, 40),
            text_secondary: Color::Rgb(96, 96, 104),
            text_muted: Color::Rgb(144, 144, 152),

            border: Color::Rgb(208, 208, 216),
            border_focused: Color::Rgb(0, 122, 255),
            selection: Color::Rgb(0, 122, 255),
            selection_text: Color::Rgb(250, 250, 252),

            success: Color::Rgb(52, 199, 89),
            warning: Color::Rgb(255, 149, 0),
            error: Color::Rgb(255, 59, 48),

            accent: Color::Rgb(0, 122, 255),
        };

        Self {
            board: BoardColors {
                header: palette.accent,
                card_title: palette.text_primary,
                card_body: palette.text_secondary,
                card_entering: palette.success,
                card_exiting: palette.text_muted,
                counter: palette.text_muted,
                counter_warning: palette.error,
                page_active: palette.selection,
                page_inactive: palette.text_secondary,
                no_results: palette.error,
            },
            palette,
        }
    }
}
