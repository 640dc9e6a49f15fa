//! Entry resolution and the include/base merge engine
//!
//! Resolution walks a theme's entry graph: delegating entries forward
//! verbatim, styling entries evaluate their style function and merge it over
//! whatever their `include` and `base` references resolve to. The merge
//! priority is fixed: local beats include, include beats base, and base only
//! shows through where neither overrides it. Precedence is decided by key
//! presence, so a local `false` or `0` still wins.

use crate::error::ThemeError;
use crate::property::PropertyMap;
use crate::state::StateSet;
use crate::theme::{AppearanceEntry, Theme};

/// Upper bound on `include`/`base` chain depth.
///
/// Hand-written themes nest a few levels at most; anything past this is a
/// delegation cycle and resolution bails out instead of overflowing.
pub(crate) const MAX_RESOLVE_DEPTH: usize = 32;

/// How a missing appearance entry is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveMode {
    /// Surface [`ThemeError::MissingEntry`] to the caller.
    Strict,
    /// Treat the missing entry as "no styling" so one misconfigured
    /// appearance does not take down a whole render pass.
    Permissive,
}

impl Default for ResolveMode {
    /// Strict in debug builds, permissive in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Permissive
        }
    }
}

/// Resolve `id` against `theme` for the given states, without caching.
///
/// Returns `Ok(None)` when the entry resolves to no properties (or, in
/// permissive mode, when it is missing).
pub(crate) fn style_from_theme(
    theme: &Theme,
    id: &str,
    states: &StateSet,
    mode: ResolveMode,
    depth: usize,
) -> Result<Option<PropertyMap>, ThemeError> {
    if depth > MAX_RESOLVE_DEPTH {
        return Err(ThemeError::CyclicInclude(id.to_owned()));
    }

    let Some(entry) = theme.entry(id) else {
        return match mode {
            ResolveMode::Strict => Err(ThemeError::MissingEntry(id.to_owned())),
            ResolveMode::Permissive => Ok(None),
        };
    };

    match entry {
        // Pure pass-through: the included entry's result, unmodified.
        AppearanceEntry::Delegating { include } => {
            style_from_theme(theme, include, states, mode, depth + 1)
        }
        AppearanceEntry::Styling {
            style,
            include,
            base,
        } => {
            let local = style(states);

            if include.is_none() && base.is_none() {
                return Ok(Some(local));
            }

            let included = match include {
                Some(target) => style_from_theme(theme, target, states, mode, depth + 1)?,
                None => None,
            };
            // Base targets the *base theme's* entry for the same id.
            let inherited = match base {
                Some(parent) => style_from_theme(parent, id, states, mode, depth + 1)?,
                None => None,
            };

            Ok(Some(merge(local, included, inherited)))
        }
    }
}

/// Layer `inherited` under `included` under `local`.
///
/// Runs even when every input is empty; an empty local map still shadows
/// nothing and inherits everything, there is no special case.
fn merge(
    local: PropertyMap,
    included: Option<PropertyMap>,
    inherited: Option<PropertyMap>,
) -> PropertyMap {
    let mut result = PropertyMap::new();

    if let Some(inherited) = inherited {
        for (name, value) in inherited {
            let shadowed =
                local.contains(&name) || included.as_ref().is_some_and(|m| m.contains(&name));
            if !shadowed {
                result.set(name, value);
            }
        }
    }

    if let Some(included) = included {
        for (name, value) in included {
            if !local.contains(&name) {
                result.set(name, value);
            }
        }
    }

    for (name, value) in local {
        result.set(name, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;
    use crate::theme::ThemeBuilder;

    fn states() -> StateSet {
        StateSet::new()
    }

    #[test]
    fn missing_entry_strict_vs_permissive() {
        let theme = ThemeBuilder::new("t").build();

        let strict = style_from_theme(&theme, "button", &states(), ResolveMode::Strict, 0);
        assert_eq!(strict, Err(ThemeError::MissingEntry("button".into())));

        let permissive = style_from_theme(&theme, "button", &states(), ResolveMode::Permissive, 0);
        assert_eq!(permissive, Ok(None));
    }

    #[test]
    fn include_cycle_is_reported() {
        let theme = ThemeBuilder::new("t")
            .entry("a", AppearanceEntry::delegate("b"))
            .entry("b", AppearanceEntry::delegate("a"))
            .build();

        let result = style_from_theme(&theme, "a", &states(), ResolveMode::Strict, 0);
        assert!(matches!(result, Err(ThemeError::CyclicInclude(_))));
    }

    #[test]
    fn empty_maps_still_merge() {
        let parent = ThemeBuilder::new("parent")
            .entry(
                "panel",
                AppearanceEntry::style(|_| PropertyMap::new().with("padding", 4i64)),
            )
            .build();
        let theme = ThemeBuilder::new("child")
            .entry(
                "panel",
                AppearanceEntry::style(|_| PropertyMap::new()).based_on(&parent),
            )
            .build();

        let resolved = style_from_theme(&theme, "panel", &states(), ResolveMode::Strict, 0)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.get("padding"), Some(&PropertyValue::Int(4)));
    }
}
