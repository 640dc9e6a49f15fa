//! Appearance themes and their entries
//!
//! A [`Theme`] maps appearance ids (`"button"`, `"tree-item"`, ...) to
//! [`AppearanceEntry`] definitions. Themes are immutable once built and
//! cheap to clone (the data sits behind an `Arc`), which is what makes
//! recursive `include`/`base` resolution safe without defensive copying.
//!
//! Entries come in two shapes:
//!
//! - **Delegating**: no style function of its own, the entry forwards
//!   entirely to another entry in the same theme.
//! - **Styling**: a local style function, optionally layered over an
//!   `include` (another entry in the same theme) and/or a `base` (the entry
//!   with the *same id* in a different, parent theme).

use crate::property::PropertyMap;
use crate::state::StateSet;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Style function of an appearance entry: active states in, properties out.
pub type StyleFn = Arc<dyn Fn(&StateSet) -> PropertyMap + Send + Sync>;

/// One appearance definition inside a theme.
#[derive(Clone)]
pub enum AppearanceEntry {
    /// Pure delegation to another entry in the same theme.
    Delegating {
        /// Appearance id this entry forwards to.
        include: String,
    },
    /// A local style function, optionally merged over included/inherited
    /// entries (local wins over include, include wins over base).
    Styling {
        style: StyleFn,
        /// Appearance id in the same theme whose result is layered under
        /// the local one.
        include: Option<String>,
        /// Parent theme whose entry for the *same id* is layered under
        /// both the local and the included result.
        base: Option<Theme>,
    },
}

impl AppearanceEntry {
    /// Entry that forwards entirely to `include` in the same theme.
    pub fn delegate(include: impl Into<String>) -> Self {
        Self::Delegating {
            include: include.into(),
        }
    }

    /// Entry with a local style function and no include/base layering.
    pub fn style(f: impl Fn(&StateSet) -> PropertyMap + Send + Sync + 'static) -> Self {
        Self::Styling {
            style: Arc::new(f),
            include: None,
            base: None,
        }
    }

    /// Layer this entry's result over another entry of the same theme.
    ///
    /// On a delegating entry this replaces the delegation target.
    pub fn including(self, id: impl Into<String>) -> Self {
        match self {
            Self::Delegating { .. } => Self::Delegating { include: id.into() },
            Self::Styling { style, base, .. } => Self::Styling {
                style,
                include: Some(id.into()),
                base,
            },
        }
    }

    /// Inherit from the same-id entry of `parent`.
    ///
    /// Delegating entries cannot inherit; on those this is a no-op, matching
    /// resolution which ignores `base` without a local style function.
    pub fn based_on(self, parent: &Theme) -> Self {
        match self {
            Self::Delegating { .. } => self,
            Self::Styling { style, include, .. } => Self::Styling {
                style,
                include,
                base: Some(parent.clone()),
            },
        }
    }
}

impl fmt::Debug for AppearanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegating { include } => f
                .debug_struct("Delegating")
                .field("include", include)
                .finish(),
            Self::Styling { include, base, .. } => f
                .debug_struct("Styling")
                .field("include", include)
                .field("base", &base.as_ref().map(Theme::name))
                .finish_non_exhaustive(),
        }
    }
}

/// An immutable appearance theme.
///
/// Cloning is cheap; clones share the same entry table. The `name` is the
/// identity used by the cache and by no-op switch detection, so two themes
/// installed into the same manager must not share a name.
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Arc<ThemeData>,
}

#[derive(Debug)]
struct ThemeData {
    name: String,
    appearances: FxHashMap<String, AppearanceEntry>,
}

impl Theme {
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Entry for an appearance id, if the theme defines one.
    pub fn entry(&self, id: &str) -> Option<&AppearanceEntry> {
        self.inner.appearances.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.appearances.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.appearances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.appearances.is_empty()
    }

    /// Iterate over the appearance ids this theme defines (no defined order).
    pub fn appearance_ids(&self) -> impl Iterator<Item = &str> {
        self.inner.appearances.keys().map(String::as_str)
    }
}

/// Builder for [`Theme`] instances.
///
/// # Example
///
/// ```rust
/// use glint_theme::{AppearanceEntry, PropertyMap, ThemeBuilder};
///
/// let theme = ThemeBuilder::new("classic")
///     .entry(
///         "button",
///         AppearanceEntry::style(|states| {
///             PropertyMap::new().with("border", if states.contains("pressed") { "inset" } else { "outset" })
///         }),
///     )
///     .entry("push-button", AppearanceEntry::delegate("button"))
///     .build();
///
/// assert!(theme.contains("push-button"));
/// ```
#[derive(Debug)]
pub struct ThemeBuilder {
    name: String,
    appearances: FxHashMap<String, AppearanceEntry>,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            appearances: FxHashMap::default(),
        }
    }

    /// Define (or replace) the entry for an appearance id.
    pub fn entry(mut self, id: impl Into<String>, entry: AppearanceEntry) -> Self {
        self.appearances.insert(id.into(), entry);
        self
    }

    pub fn build(self) -> Theme {
        Theme {
            inner: Arc::new(ThemeData {
                name: self.name,
                appearances: self.appearances,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_replaces_duplicate_ids() {
        let theme = ThemeBuilder::new("t")
            .entry("button", AppearanceEntry::delegate("a"))
            .entry("button", AppearanceEntry::delegate("b"))
            .build();

        assert_eq!(theme.len(), 1);
        match theme.entry("button") {
            Some(AppearanceEntry::Delegating { include }) => assert_eq!(include, "b"),
            other => panic!("unexpected entry: {other:?}"),
        }
    }

    #[test]
    fn based_on_is_ignored_for_delegating_entries() {
        let parent = ThemeBuilder::new("parent").build();
        let entry = AppearanceEntry::delegate("button").based_on(&parent);
        assert!(matches!(entry, AppearanceEntry::Delegating { .. }));
    }

    #[test]
    fn clones_share_entries() {
        let theme = ThemeBuilder::new("t")
            .entry("label", AppearanceEntry::style(|_| PropertyMap::new()))
            .build();
        let clone = theme.clone();
        assert!(Arc::ptr_eq(&theme.inner, &clone.inner));
    }
}
