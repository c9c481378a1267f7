use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Visual theme for the dashboard: light, dark, or neon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    Neon,
}

impl ThemeMode {
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Neon,
            ThemeMode::Neon => ThemeMode::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Neon => "neon",
        }
    }

    pub fn fg(&self) -> Color {
        match self {
            ThemeMode::Light => Color::Black,
            ThemeMode::Dark => Color::White,
            ThemeMode::Neon => Color::Cyan,
        }
    }

    pub fn bg(&self) -> Color {
        match self {
            ThemeMode::Light => Color::White,
            ThemeMode::Dark => Color::Reset,
            ThemeMode::Neon => Color::Black,
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            ThemeMode::Light => Color::Blue,
            ThemeMode::Dark => Color::Cyan,
            ThemeMode::Neon => Color::Magenta,
        }
    }

    pub fn dim(&self) -> Color {
        match self {
            ThemeMode::Light => Color::Gray,
            ThemeMode::Dark => Color::DarkGray,
            ThemeMode::Neon => Color::DarkGray,
        }
    }

    pub fn positive(&self) -> Color {
        match self {
            ThemeMode::Neon => Color::Cyan,
            _ => Color::Green,
        }
    }

    pub fn negative(&self) -> Color {
        match self {
            ThemeMode::Neon => Color::Magenta,
            _ => Color::Red,
        }
    }

    pub fn neutral(&self) -> Color {
        Color::Yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_all_themes() {
        let start = ThemeMode::Light;
        let mut theme = start;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(theme);
            theme = theme.cycle();
        }
        assert_eq!(theme, start);
        assert!(seen.contains(&ThemeMode::Light));
        assert!(seen.contains(&ThemeMode::Dark));
        assert!(seen.contains(&ThemeMode::Neon));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Neon).unwrap(), "\"neon\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
    }
}
