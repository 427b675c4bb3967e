//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Task status colors
    pub pending: Color,
    pub completed: Color,

    // Toasts and dialogs
    pub warning: Color,
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    /// Look up a theme by its config name; unknown names get the default.
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "paper" | "light" => Self::paper(),
            _ => Self::phosphor(),
        }
    }

    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            pending: Color::Rgb(255, 152, 0),
            completed: Color::Rgb(76, 175, 80),

            warning: Color::Rgb(255, 180, 60),
            error: Color::Rgb(255, 100, 80),
            accent: Color::Rgb(57, 255, 20),
        }
    }

    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(250, 250, 247),
            border: Color::Rgb(200, 200, 195),
            selection: Color::Rgb(228, 236, 246),

            title: Color::Rgb(74, 144, 226),
            text: Color::Rgb(40, 40, 40),
            dimmed: Color::Rgb(102, 102, 102),
            hint: Color::Rgb(130, 130, 130),

            pending: Color::Rgb(230, 130, 0),
            completed: Color::Rgb(56, 142, 60),

            warning: Color::Rgb(200, 120, 0),
            error: Color::Rgb(200, 40, 40),
            accent: Color::Rgb(74, 144, 226),
        }
    }
}
