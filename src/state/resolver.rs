use crate::state::kind::StateRules;

/// Canonical widget state; also the element-name suffix of state-dependent art.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateName {
    /// Widget is disabled.
    Disabled,
    /// Enabled, idle.
    #[default]
    Normal,
    /// Pointer over the widget (or keyboard focus for edit-like kinds).
    Focused,
    /// Being pressed.
    Pressed,
    /// Checked/on/selected.
    Toggled,
}

impl StateName {
    /// All states in label-index order.
    pub const ALL: [Self; 5] = [
        Self::Disabled,
        Self::Normal,
        Self::Focused,
        Self::Pressed,
        Self::Toggled,
    ];

    /// Canonical string used as spec-variant and cache key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Normal => "normal",
            Self::Focused => "focused",
            Self::Pressed => "pressed",
            Self::Toggled => "toggled",
        }
    }

    /// Label state index: 0=disabled, 1=normal, 2=focused, 3=pressed, 4=toggled.
    pub fn index(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Normal => 1,
            Self::Focused => 2,
            Self::Pressed => 3,
            Self::Toggled => 4,
        }
    }

    /// Inverse of [`StateName::index`]; out-of-range values map to `Normal`.
    pub fn from_index(i: u8) -> Self {
        Self::ALL.get(usize::from(i)).copied().unwrap_or(Self::Normal)
    }
}

impl std::fmt::Display for StateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ambient flags of one paint call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetFlags {
    /// Widget accepts input.
    pub enabled: bool,
    /// Pointer is over the widget.
    pub mouse_over: bool,
    /// Widget is sunken/pressed.
    pub sunken: bool,
    /// Widget is checked/on.
    pub checked: bool,
    /// Widget has keyboard focus.
    pub has_focus: bool,
    /// Kind-specific override applied to enabled widgets.
    pub forced: Option<StateName>,
}

impl WidgetFlags {
    /// Enabled widget with no other flag set.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// Resolved state plus the derived flags kept for painting decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetState {
    /// Canonical state.
    pub name: StateName,
    /// Pointer is over the widget.
    pub hovered: bool,
    /// Widget is sunken.
    pub sunken: bool,
    /// Widget has keyboard focus.
    pub has_focus: bool,
}

/// Map `flags` to exactly one canonical state under `rules`.
///
/// Precedence: disabled, override, pressed, toggled, focused (hover, then keyboard focus),
/// normal.
pub fn resolve_state(flags: &WidgetFlags, rules: &StateRules) -> WidgetState {
    let name = if !flags.enabled {
        StateName::Disabled
    } else if let Some(forced) = flags.forced {
        forced
    } else if flags.sunken && rules.sunken_is_pressed {
        StateName::Pressed
    } else if flags.checked && rules.checked_is_toggled {
        StateName::Toggled
    } else if (flags.mouse_over && rules.hover_is_focused)
        || (flags.has_focus && rules.focus_is_focused)
    {
        StateName::Focused
    } else {
        StateName::Normal
    };

    WidgetState {
        name,
        hovered: flags.enabled && flags.mouse_over,
        sunken: flags.sunken,
        has_focus: flags.has_focus,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/resolver.rs"]
mod tests;
