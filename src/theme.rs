//! Built-in wallpaper palettes.

use crate::foundation::core::Rgba8;

/// A fixed named palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background.
    pub bg: Rgba8,
    /// Title text.
    pub text: Rgba8,
    /// Stats line text.
    pub text_muted: Rgba8,
    /// Days already passed.
    pub cell_filled: Rgba8,
    /// Days still ahead.
    pub cell_empty: Rgba8,
    /// Today's dot and the stats highlight, unless the caller overrides the accent.
    pub today: Rgba8,
}

/// Names of the built-in palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    /// Neutral dark palette (default).
    #[default]
    Dark,
    /// Light palette.
    Light,
    /// Slate blue palette.
    Midnight,
    /// Green accent palette.
    Forest,
    /// Warm red palette.
    Sunset,
}

const THEMES: [(ThemeName, Theme); 5] = [
    (
        ThemeName::Dark,
        Theme {
            bg: Rgba8::from_u24(0x1a1a1a),
            text: Rgba8::from_u24(0x9ca3af),
            text_muted: Rgba8::from_u24(0x6b7280),
            cell_filled: Rgba8::from_u24(0xffffff),
            cell_empty: Rgba8::from_u24(0x4b5563),
            today: Rgba8::from_u24(0xf97316),
        },
    ),
    (
        ThemeName::Light,
        Theme {
            bg: Rgba8::from_u24(0xfafafa),
            text: Rgba8::from_u24(0x374151),
            text_muted: Rgba8::from_u24(0x6b7280),
            cell_filled: Rgba8::from_u24(0x1f2937),
            cell_empty: Rgba8::from_u24(0xd1d5db),
            today: Rgba8::from_u24(0xf97316),
        },
    ),
    (
        ThemeName::Midnight,
        Theme {
            bg: Rgba8::from_u24(0x0f172a),
            text: Rgba8::from_u24(0x94a3b8),
            text_muted: Rgba8::from_u24(0x64748b),
            cell_filled: Rgba8::from_u24(0xe2e8f0),
            cell_empty: Rgba8::from_u24(0x475569),
            today: Rgba8::from_u24(0xf97316),
        },
    ),
    (
        ThemeName::Forest,
        Theme {
            bg: Rgba8::from_u24(0x0a0f0d),
            text: Rgba8::from_u24(0x9ca3af),
            text_muted: Rgba8::from_u24(0x6b7280),
            cell_filled: Rgba8::from_u24(0xd1fae5),
            cell_empty: Rgba8::from_u24(0x374151),
            today: Rgba8::from_u24(0x10b981),
        },
    ),
    (
        ThemeName::Sunset,
        Theme {
            bg: Rgba8::from_u24(0x1a0a0a),
            text: Rgba8::from_u24(0x9ca3af),
            text_muted: Rgba8::from_u24(0x6b7280),
            cell_filled: Rgba8::from_u24(0xfecaca),
            cell_empty: Rgba8::from_u24(0x4b5563),
            today: Rgba8::from_u24(0xf97316),
        },
    ),
];

impl ThemeName {
    /// Every built-in theme, in table order.
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::Midnight,
        ThemeName::Forest,
        ThemeName::Sunset,
    ];

    /// Resolve a user-supplied name. Matching is exact; anything else falls back to
    /// [`ThemeName::Dark`].
    pub fn from_name_or_default(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
            ThemeName::Midnight => "midnight",
            ThemeName::Forest => "forest",
            ThemeName::Sunset => "sunset",
        }
    }

    pub fn palette(self) -> &'static Theme {
        // THEMES is indexed in the same order as ALL.
        &THEMES[self as usize].1
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;
