use super::*;

fn table_with_button(left: u32) -> ThemeTable {
    let mut t = ThemeTable::default();
    t.frames.insert(
        "PanelButtonCommand".to_string(),
        FrameSpec {
            element: "button".to_string(),
            has_frame: true,
            left,
            ..FrameSpec::default()
        },
    );
    t
}

#[test]
fn active_entry_wins() {
    let active = table_with_button(7);
    let fallback = table_with_button(1);
    let r = SpecResolver::new(&active, &fallback);
    assert_eq!(r.frame("PanelButtonCommand").left, 7);
}

#[test]
fn missing_entry_falls_back_to_default_table() {
    let active = ThemeTable::default();
    let fallback = table_with_button(1);
    let r = SpecResolver::new(&active, &fallback);
    assert_eq!(r.frame("PanelButtonCommand").left, 1);
}

#[test]
fn missing_everywhere_yields_zero_spec() {
    let active = ThemeTable::default();
    let fallback = ThemeTable::default();
    let r = SpecResolver::new(&active, &fallback);

    let f = r.frame("NoSuchWidget");
    assert!(!f.has_frame);
    assert!(f.element.is_empty());
    assert_eq!(f.insets(), crate::foundation::core::Insets::ZERO);
    assert!(!r.interior("NoSuchWidget").has_interior);
    assert_eq!(r.indicator("NoSuchWidget").size, 0);
    assert_eq!(r.label("NoSuchWidget").left, 0);
    assert_eq!(r.size("NoSuchWidget").min_width, 0);
}

#[test]
fn theme_wide_settings_come_from_active_table() {
    let mut active = ThemeTable::default();
    active.hacks.tint_on_mouseover = 40;
    active.theme.animate_states = true;
    let mut fallback = ThemeTable::default();
    fallback.hacks.tint_on_mouseover = 5;
    let r = SpecResolver::new(&active, &fallback);
    assert_eq!(r.hacks().tint_on_mouseover, 40);
    assert!(r.theme().animate_states);
    assert_eq!(r.colors(), &active.colors);
}
