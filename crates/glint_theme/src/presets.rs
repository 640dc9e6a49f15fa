//! Built-in appearance theme presets.
//!
//! Two stock themes ship with the engine: a neutral [`Classic`] look and a
//! high-contrast [`Contrast`] variant that inherits from Classic via `base`,
//! overriding colors while picking up structure (padding, borders, fonts)
//! from its parent.
//!
//! [`Classic`]: ThemePreset::Classic
//! [`Contrast`]: ThemePreset::Contrast

use crate::property::PropertyMap;
use crate::theme::{AppearanceEntry, Theme, ThemeBuilder};
use glint_core::Color;
use std::fmt::{Display, Formatter};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Neutral default look.
    Classic,
    /// High-contrast variant derived from Classic.
    Contrast,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Contrast => "contrast",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Contrast => "High Contrast",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Classic, ThemePreset::Contrast];
        &PRESETS
    }

    /// Build the appearance theme for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::Classic => classic(),
            Self::Contrast => contrast(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Look up a preset theme by its stable id.
pub fn preset_theme(id: &str) -> Option<Theme> {
    ThemePreset::all()
        .iter()
        .find(|preset| preset.id() == id)
        .map(|preset| preset.theme())
}

fn classic() -> Theme {
    ThemeBuilder::new("classic")
        .entry(
            "widget",
            AppearanceEntry::style(|_| {
                PropertyMap::new()
                    .with("text-color", Color::from_hex(0x1A1A2E))
                    .with("font", "13px sans-serif")
                    .with("cursor", "default")
            }),
        )
        .entry(
            "button",
            AppearanceEntry::style(|states| {
                let background = if states.contains("disabled") {
                    Color::from_hex(0xE5E5E5)
                } else if states.contains("pressed") {
                    Color::from_hex(0xC9C9D4)
                } else if states.contains("over") {
                    Color::from_hex(0xEDEDF2)
                } else {
                    Color::from_hex(0xF5F5F7)
                };

                let mut map = PropertyMap::new()
                    .with("background-color", background)
                    .with(
                        "border",
                        if states.contains("pressed") {
                            "inset"
                        } else {
                            "outset"
                        },
                    )
                    .with("padding", 6i64);
                if states.contains("disabled") {
                    map.set("text-color", Color::from_hex(0x9A9AA5));
                }
                if states.contains("focused") {
                    map.set("outline", "1px dotted");
                }
                map
            })
            .including("widget"),
        )
        .entry("push-button", AppearanceEntry::delegate("button"))
        .entry(
            "label",
            AppearanceEntry::style(|_| PropertyMap::new().with("padding", 2i64))
                .including("widget"),
        )
        .entry(
            "tree-item",
            AppearanceEntry::style(|states| {
                let mut map = PropertyMap::new().with("padding", 3i64);
                if states.contains("selected") {
                    map.set("background-color", Color::from_hex(0x3B6EA5));
                    map.set("text-color", Color::WHITE);
                }
                if states.contains("expanded") {
                    map.set("indicator", "open");
                }
                map
            })
            .including("widget"),
        )
        .entry(
            "tool-tip",
            AppearanceEntry::style(|_| {
                PropertyMap::new()
                    .with("background-color", Color::from_hex(0xFFFBE6))
                    .with("border", "solid")
                    .with("padding", 4i64)
            })
            .including("widget"),
        )
        .build()
}

fn contrast() -> Theme {
    let parent = classic();

    ThemeBuilder::new("contrast")
        .entry(
            "widget",
            AppearanceEntry::style(|_| {
                PropertyMap::new()
                    .with("text-color", Color::WHITE)
                    .with("cursor", "default")
            })
            .based_on(&parent),
        )
        .entry(
            "button",
            AppearanceEntry::style(|states| {
                let background = if states.contains("pressed") {
                    Color::from_hex(0x3D3D4D)
                } else {
                    Color::from_hex(0x16161E)
                };
                PropertyMap::new()
                    .with("background-color", background)
                    .with("text-color", Color::from_hex(0xFFD447))
            })
            .including("widget")
            .based_on(&parent),
        )
        .entry("push-button", AppearanceEntry::delegate("button"))
        .entry(
            "label",
            AppearanceEntry::style(|_| PropertyMap::new())
                .including("widget")
                .based_on(&parent),
        )
        .entry(
            "tree-item",
            AppearanceEntry::style(|states| {
                let mut map = PropertyMap::new();
                if states.contains("selected") {
                    map.set("background-color", Color::from_hex(0xFFD447));
                    map.set("text-color", Color::BLACK);
                }
                map
            })
            .including("widget")
            .based_on(&parent),
        )
        .entry(
            "tool-tip",
            AppearanceEntry::style(|_| {
                PropertyMap::new()
                    .with("background-color", Color::from_hex(0x16161E))
                    .with("border", "solid")
            })
            .including("widget")
            .based_on(&parent),
        )
        .build()
}
