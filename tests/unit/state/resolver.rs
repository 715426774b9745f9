use super::*;
use crate::state::kind::WidgetKind;

fn button() -> StateRules {
    WidgetKind::PushButton.classify().rules
}

#[test]
fn idle_enabled_button_is_normal() {
    let s = resolve_state(&WidgetFlags::enabled(), &button());
    assert_eq!(s.name, StateName::Normal);
    assert_eq!(s.name.as_str(), "normal");
    assert!(!s.hovered);
}

#[test]
fn hovered_button_is_focused() {
    let flags = WidgetFlags {
        mouse_over: true,
        ..WidgetFlags::enabled()
    };
    let s = resolve_state(&flags, &button());
    assert_eq!(s.name, StateName::Focused);
    assert!(s.hovered);
}

#[test]
fn disabled_wins_over_everything() {
    let flags = WidgetFlags {
        enabled: false,
        mouse_over: true,
        sunken: true,
        checked: true,
        has_focus: true,
        forced: Some(StateName::Toggled),
    };
    let s = resolve_state(&flags, &button());
    assert_eq!(s.name, StateName::Disabled);
    assert!(!s.hovered);
}

#[test]
fn pressed_beats_toggled_beats_focused() {
    let mut flags = WidgetFlags {
        mouse_over: true,
        sunken: true,
        checked: true,
        ..WidgetFlags::enabled()
    };
    assert_eq!(resolve_state(&flags, &button()).name, StateName::Pressed);
    flags.sunken = false;
    assert_eq!(resolve_state(&flags, &button()).name, StateName::Toggled);
    flags.checked = false;
    assert_eq!(resolve_state(&flags, &button()).name, StateName::Focused);
}

#[test]
fn keyboard_focus_depends_on_kind() {
    let flags = WidgetFlags {
        has_focus: true,
        ..WidgetFlags::enabled()
    };
    assert_eq!(resolve_state(&flags, &button()).name, StateName::Normal);
    let edit = WidgetKind::LineEdit.classify().rules;
    assert_eq!(resolve_state(&flags, &edit).name, StateName::Focused);
}

#[test]
fn override_applies_to_enabled_widgets() {
    let flags = WidgetFlags {
        mouse_over: true,
        forced: Some(StateName::Toggled),
        ..WidgetFlags::enabled()
    };
    assert_eq!(resolve_state(&flags, &button()).name, StateName::Toggled);
}

#[test]
fn every_flag_combination_yields_one_of_five_states() {
    let rules = button();
    for bits in 0u8..32 {
        let flags = WidgetFlags {
            enabled: bits & 1 != 0,
            mouse_over: bits & 2 != 0,
            sunken: bits & 4 != 0,
            checked: bits & 8 != 0,
            has_focus: bits & 16 != 0,
            forced: None,
        };
        let s = resolve_state(&flags, &rules);
        assert!(StateName::ALL.contains(&s.name));
    }
}

#[test]
fn index_round_trips() {
    for s in StateName::ALL {
        assert_eq!(StateName::from_index(s.index()), s);
    }
    assert_eq!(StateName::from_index(9), StateName::Normal);
}
