use glint_theme::{preset_theme, PropertyValue, ResolveMode, StateSet, ThemeManager, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["classic", "contrast"]);
}

#[test]
fn preset_theme_looks_up_by_stable_id() {
    assert_eq!(preset_theme("classic").map(|t| t.name().to_owned()), Some("classic".into()));
    assert_eq!(preset_theme("contrast").map(|t| t.name().to_owned()), Some("contrast".into()));
    assert!(preset_theme("neon").is_none());
}

#[test]
fn contrast_buttons_inherit_structure_from_classic() {
    let manager = ThemeManager::with_mode(ResolveMode::Strict);
    manager.set_active_theme(Some(ThemePreset::Contrast.theme()));

    let resolved = manager.style("button", &StateSet::new()).unwrap().unwrap();

    // Overridden locally.
    assert!(resolved.contains("background-color"));
    assert!(resolved.contains("text-color"));
    // Inherited from the classic parent via `base`.
    assert_eq!(resolved.get("padding"), Some(&PropertyValue::Int(6)));
    assert_eq!(resolved.get("border"), Some(&PropertyValue::Str("outset".into())));
}

#[test]
fn push_button_delegates_in_every_preset() {
    for preset in ThemePreset::all() {
        let manager = ThemeManager::with_mode(ResolveMode::Strict);
        manager.set_active_theme(Some(preset.theme()));

        for states in [StateSet::new(), ["pressed", "over"].into()] {
            assert_eq!(
                manager.style("button", &states).unwrap(),
                manager.style("push-button", &states).unwrap(),
                "preset {preset:?} should delegate push-button to button"
            );
        }
    }
}

#[test]
fn selected_tree_items_use_distinct_preset_palettes() {
    let selected: StateSet = ["selected"].into();

    let classic = ThemeManager::with_mode(ResolveMode::Strict);
    classic.set_active_theme(Some(ThemePreset::Classic.theme()));
    let classic_style = classic.style("tree-item", &selected).unwrap().unwrap();

    let contrast = ThemeManager::with_mode(ResolveMode::Strict);
    contrast.set_active_theme(Some(ThemePreset::Contrast.theme()));
    let contrast_style = contrast.style("tree-item", &selected).unwrap().unwrap();

    assert_ne!(
        classic_style.get("background-color"),
        contrast_style.get("background-color")
    );
}

#[test]
fn pressed_buttons_change_background() {
    let manager = ThemeManager::with_mode(ResolveMode::Strict);
    manager.set_active_theme(Some(ThemePreset::Classic.theme()));

    let plain = manager.style("button", &StateSet::new()).unwrap().unwrap();
    let pressed = manager.style("button", &["pressed"].into()).unwrap().unwrap();

    assert_ne!(plain.get("background-color"), pressed.get("background-color"));
    assert_eq!(pressed.get("border"), Some(&PropertyValue::Str("inset".into())));
}
