//! Seasonal theme signal read by the decorative layer.
//!
//! The value is passed around explicitly; nothing here touches the paint core.

use std::fmt;

/// Decorative theme, cycled by a single toolbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Autumn,
    Night,
    Winter,
}

impl ThemeMode {
    /// The theme that follows this one in the cycle.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Autumn => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Winter,
            ThemeMode::Winter => ThemeMode::Autumn,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::Autumn => "autumn",
            ThemeMode::Night => "night",
            ThemeMode::Winter => "winter",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "autumn" => Ok(ThemeMode::Autumn),
            "night" => Ok(ThemeMode::Night),
            "winter" => Ok(ThemeMode::Winter),
            _ => Err(format!("Invalid theme: '{}'", s)),
        }
    }
}
