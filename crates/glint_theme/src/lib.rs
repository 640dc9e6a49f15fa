//! Glint Appearance Theming
//!
//! A style-resolution engine for the Glint widget layer: given an
//! appearance id (e.g. `"button"`) and the widget's current boolean states
//! (e.g. `{pressed, focused}`), it computes the map of visual properties to
//! apply, evaluating per-appearance style functions against a theme that
//! supports delegation (`include`) and cross-theme inheritance (`base`).
//!
//! # Quick Start
//!
//! ```rust
//! use glint_theme::{StateSet, ThemeManager, ThemePreset};
//!
//! let manager = ThemeManager::new();
//! manager.set_active_theme(Some(ThemePreset::Classic.theme()));
//!
//! let states: StateSet = ["pressed"].into();
//! let style = manager.style("button", &states).unwrap();
//! assert!(style.unwrap().contains("background-color"));
//! ```
//!
//! # Architecture
//!
//! - [`Theme`] maps appearance ids to entries; entries either delegate to
//!   another entry (`include`) or carry a style function, optionally layered
//!   over `include` and/or a parent theme's same-id entry (`base`).
//! - Merging follows a fixed priority: local beats include, include beats
//!   base. Presence of a key decides precedence, never its value.
//! - [`ThemeManager`] memoizes resolved [`PropertyMap`]s per
//!   (theme, id, state combination) and invalidates the outgoing theme's
//!   cache wholesale on a switch, notifying the host in between so it can
//!   re-apply styles against a consistent old/new pair.
//!
//! # Themes
//!
//! Built-in presets live in [`presets`]; [`ThemePreset::Contrast`] inherits
//! from [`ThemePreset::Classic`] via `base` and both exercise `include`
//! chains, so they double as worked examples for theme authors.

pub mod error;
pub mod manager;
pub mod presets;
pub mod property;
pub mod resolve;
pub mod state;
pub mod theme;

// Re-export commonly used types
pub use error::ThemeError;
pub use manager::{SwitchListener, ThemeManager};
pub use presets::{preset_theme, ThemePreset};
pub use property::{PropertyMap, PropertyValue};
pub use resolve::ResolveMode;
pub use state::StateSet;
pub use theme::{AppearanceEntry, StyleFn, Theme, ThemeBuilder};
