//! Active-theme coordination and the per-theme style cache
//!
//! [`ThemeManager`] is the service the widget layer talks to: it owns the
//! currently active theme, memoizes resolved property maps per
//! (theme, appearance id, state combination), and coordinates theme
//! switches. It is an explicit, injectable object rather than a process
//! global, so tests and embedded hosts can run independent instances side
//! by side.
//!
//! # Switching themes
//!
//! A switch swaps the active theme, synchronously notifies the registered
//! listener with the consistent `(previous, next)` pair (only once the host
//! has signalled readiness via [`set_ui_ready`](ThemeManager::set_ui_ready)),
//! and then drops the previous theme's cache partition wholesale. The new
//! theme's partition fills lazily as widgets re-resolve. Switches serialize
//! against each other, so a listener never observes overlapping switches;
//! listeners may resolve styles but must not switch themes re-entrantly.

use crate::error::ThemeError;
use crate::property::PropertyMap;
use crate::resolve::{self, ResolveMode};
use crate::state::{StateKeyInterner, StateSet};
use crate::theme::Theme;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Callback invoked on an effective theme switch with `(previous, next)`.
pub type SwitchListener = Arc<dyn Fn(Option<&Theme>, Option<&Theme>) + Send + Sync>;

/// Composite cache key: appearance id plus interned state keys in
/// ascending interning order.
///
/// Keeping the id and the state slots in separate fields means the two key
/// namespaces can never collide, no matter what the id string contains.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct StyleKey {
    id: String,
    states: SmallVec<[u32; 8]>,
}

/// Resolved styles for one theme, including cached "no properties" results.
type Partition = FxHashMap<StyleKey, Option<PropertyMap>>;

/// Owns the active theme, the style cache, and the state-key interner.
pub struct ThemeManager {
    current: RwLock<Option<Theme>>,
    /// Theme name -> resolved styles. Only the active theme's partition is
    /// ever populated; a switch drops the outgoing partition entirely.
    cache: RwLock<FxHashMap<String, Partition>>,
    interner: StateKeyInterner,
    mode: ResolveMode,
    ui_ready: AtomicBool,
    listener: RwLock<Option<SwitchListener>>,
    /// Serializes switches against each other.
    switch_lock: Mutex<()>,
}

impl ThemeManager {
    /// Manager with the default resolve mode (strict in debug builds).
    pub fn new() -> Self {
        Self::with_mode(ResolveMode::default())
    }

    pub fn with_mode(mode: ResolveMode) -> Self {
        Self {
            current: RwLock::new(None),
            cache: RwLock::new(FxHashMap::default()),
            interner: StateKeyInterner::new(),
            mode,
            ui_ready: AtomicBool::new(false),
            listener: RwLock::new(None),
            switch_lock: Mutex::new(()),
        }
    }

    pub fn resolve_mode(&self) -> ResolveMode {
        self.mode
    }

    /// The currently active theme, if any. Cheap clone of a shared handle.
    pub fn active_theme(&self) -> Option<Theme> {
        self.current.read().unwrap().clone()
    }

    /// Signal whether the host is ready to receive switch notifications.
    ///
    /// While not ready, themes still switch (and caches still invalidate)
    /// but the listener stays quiet.
    pub fn set_ui_ready(&self, ready: bool) {
        self.ui_ready.store(ready, Ordering::SeqCst);
    }

    /// Register the switch listener, replacing any previous one.
    pub fn set_switch_listener(
        &self,
        listener: impl Fn(Option<&Theme>, Option<&Theme>) + Send + Sync + 'static,
    ) {
        *self.listener.write().unwrap() = Some(Arc::new(listener));
    }

    /// Resolve the style for an appearance id against the active theme.
    ///
    /// Returns `Ok(None)` when no theme is active or the entry resolves to
    /// no properties. Results are memoized per (theme, id, state
    /// combination); an explicitly empty result is cached too and returned
    /// as a hit.
    pub fn style(
        &self,
        id: &str,
        states: &StateSet,
    ) -> Result<Option<PropertyMap>, ThemeError> {
        // No active theme: valid, nothing to style, nothing to cache.
        let Some(theme) = self.active_theme() else {
            return Ok(None);
        };
        self.style_from_theme(&theme, id, states)
    }

    /// Resolve against an explicit theme.
    ///
    /// Results are cached only when `theme` is the active one; resolving
    /// against a foreign theme (a `base` parent, a preview) computes fresh
    /// every time.
    pub fn style_from_theme(
        &self,
        theme: &Theme,
        id: &str,
        states: &StateSet,
    ) -> Result<Option<PropertyMap>, ThemeError> {
        let key = self.style_key(id, states);

        if let Some(hit) = self
            .cache
            .read()
            .unwrap()
            .get(theme.name())
            .and_then(|partition| partition.get(&key))
        {
            tracing::trace!(theme = theme.name(), id, "style cache hit");
            return Ok(hit.clone());
        }

        let resolved = resolve::style_from_theme(theme, id, states, self.mode, 0)?;

        // Re-check activity before inserting so a resolution racing a
        // switch cannot revive a partition the switch just dropped.
        let still_active = self
            .current
            .read()
            .unwrap()
            .as_ref()
            .is_some_and(|active| active.name() == theme.name());
        if still_active {
            self.cache
                .write()
                .unwrap()
                .entry(theme.name().to_owned())
                .or_default()
                .insert(key, resolved.clone());
        }

        Ok(resolved)
    }

    /// Install a new active theme (or none).
    ///
    /// No-op when `theme` names the theme that is already active, and when
    /// both the old and the new theme are absent. An effective switch
    /// notifies the listener (if the host is ready) with the old/new pair
    /// before the outgoing theme's cache partition is dropped, so the
    /// listener can still compare both sides.
    pub fn set_active_theme(&self, theme: Option<Theme>) {
        let _switching = self.switch_lock.lock().unwrap();

        {
            let current = self.current.read().unwrap();
            match (current.as_ref(), theme.as_ref()) {
                (None, None) => return,
                (Some(old), Some(new)) if old.name() == new.name() => return,
                _ => {}
            }
        }

        let previous = {
            let mut current = self.current.write().unwrap();
            std::mem::replace(&mut *current, theme.clone())
        };

        tracing::debug!(
            previous = previous.as_ref().map(Theme::name),
            next = theme.as_ref().map(Theme::name),
            "switching appearance theme"
        );

        // The incoming partition exists before notification, so listeners
        // re-resolving during the callback already populate it.
        if let Some(next) = theme.as_ref() {
            self.cache
                .write()
                .unwrap()
                .entry(next.name().to_owned())
                .or_default();
        }

        if self.ui_ready.load(Ordering::SeqCst) {
            let listener = self.listener.read().unwrap().clone();
            if let Some(listener) = listener {
                listener(previous.as_ref(), theme.as_ref());
            }
        }

        if let Some(old) = previous {
            self.cache.write().unwrap().remove(old.name());
            tracing::debug!(theme = old.name(), "dropped style cache partition");
        }
    }

    fn style_key(&self, id: &str, states: &StateSet) -> StyleKey {
        let mut keys: SmallVec<[u32; 8]> =
            states.iter().map(|name| self.interner.intern(name)).collect();
        // Interning order, not caller order, so identical state sets always
        // produce identical keys.
        keys.sort_unstable();
        StyleKey {
            id: id.to_owned(),
            states: keys,
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("active", &self.active_theme().as_ref().map(Theme::name))
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{AppearanceEntry, ThemeBuilder};

    #[test]
    fn cached_none_is_distinct_from_a_miss() {
        let manager = ThemeManager::with_mode(ResolveMode::Permissive);
        manager.set_active_theme(Some(ThemeBuilder::new("t").build()));

        assert_eq!(manager.style("ghost", &StateSet::new()), Ok(None));

        // The partition holds an explicit None for the key, not a gap.
        let cache = manager.cache.read().unwrap();
        let partition = cache.get("t").expect("partition for active theme");
        let cached = partition.values().next().expect("entry for resolved key");
        assert_eq!(cached, &None);
    }

    #[test]
    fn no_partition_is_created_without_an_active_theme() {
        let manager = ThemeManager::new();
        assert_eq!(manager.style("button", &StateSet::new()), Ok(None));
        assert!(manager.cache.read().unwrap().is_empty());
    }

    #[test]
    fn foreign_theme_resolution_is_not_cached() {
        let manager = ThemeManager::with_mode(ResolveMode::Strict);
        manager.set_active_theme(Some(ThemeBuilder::new("active").build()));

        let foreign = ThemeBuilder::new("foreign")
            .entry("label", AppearanceEntry::style(|_| PropertyMap::new()))
            .build();
        manager
            .style_from_theme(&foreign, "label", &StateSet::new())
            .unwrap();

        assert!(!manager.cache.read().unwrap().contains_key("foreign"));
    }

    #[test]
    fn errors_are_not_cached() {
        let manager = ThemeManager::with_mode(ResolveMode::Strict);
        manager.set_active_theme(Some(ThemeBuilder::new("t").build()));

        assert!(manager.style("ghost", &StateSet::new()).is_err());

        let cache = manager.cache.read().unwrap();
        assert!(cache.get("t").map_or(true, |partition| partition.is_empty()));
    }
}
