//! Theme - Resolved color palette passed to every renderer
//!
//! The palette is picked once from `ThemeMode` and handed down as a value.
//! Renderers never look up colors on their own.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GenUiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Dark
    }
}

impl FromStr for ThemeMode {
    type Err = GenUiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(GenUiError::InvalidSetting {
                key: "theme",
                value: s.to_string(),
                expected: "dark, light",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub primary: Rgb,
    pub primary_hover: Rgb,
    pub card_bg: Rgb,
    pub card_border: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub muted: Rgb,
    pub muted_foreground: Rgb,
    pub dark_bg: Rgb,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Rgb::hex(0x09090b),
        foreground: Rgb::hex(0xfafafa),
        primary: Rgb::hex(0xf59e0b),
        primary_hover: Rgb::hex(0xfbbf24),
        card_bg: Rgb::hex(0x18181b),
        card_border: Rgb::hex(0x27272a),
        success: Rgb::hex(0x22c55e),
        warning: Rgb::hex(0xf59e0b),
        error: Rgb::hex(0xef4444),
        muted: Rgb::hex(0xa1a1aa),
        muted_foreground: Rgb::hex(0x52525b),
        dark_bg: Rgb::hex(0x09090b),
    };

    pub const LIGHT: Palette = Palette {
        background: Rgb::hex(0xfafafa),
        foreground: Rgb::hex(0x09090b),
        primary: Rgb::hex(0xd97706),
        primary_hover: Rgb::hex(0xf59e0b),
        card_bg: Rgb::hex(0xffffff),
        card_border: Rgb::hex(0xe4e4e7),
        success: Rgb::hex(0x22c55e),
        warning: Rgb::hex(0xf59e0b),
        error: Rgb::hex(0xef4444),
        muted: Rgb::hex(0x71717a),
        muted_foreground: Rgb::hex(0xa1a1aa),
        dark_bg: Rgb::hex(0xf4f4f5),
    };

    pub fn resolve(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::DARK,
            ThemeMode::Light => Self::LIGHT,
        }
    }
}
