/// Widget category, classified once from a host-provided tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Command push button.
    PushButton,
    /// Tool button (toolbars, flat buttons).
    ToolButton,
    /// Check box.
    CheckBox,
    /// Radio button.
    RadioButton,
    /// Single-line text edit.
    LineEdit,
    /// Combo box.
    ComboBox,
    /// Tab of a tab bar.
    Tab,
    /// Menu or menubar item.
    MenuItem,
    /// Progress bar.
    ProgressBar,
    /// Scroll bar slider.
    ScrollBar,
    /// Slider groove/handle.
    Slider,
    /// Tooltip.
    ToolTip,
    /// Anything else.
    Generic,
}

/// State-resolution behavior of one widget kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateRules {
    /// Pointer hover resolves to `focused`.
    pub hover_is_focused: bool,
    /// Keyboard focus resolves to `focused`.
    pub focus_is_focused: bool,
    /// Checked/on resolves to `toggled`.
    pub checked_is_toggled: bool,
    /// Sunken resolves to `pressed`.
    pub sunken_is_pressed: bool,
    /// State changes of this kind are animated.
    pub animated: bool,
}

impl StateRules {
    const BUTTON: Self = Self {
        hover_is_focused: true,
        focus_is_focused: false,
        checked_is_toggled: true,
        sunken_is_pressed: true,
        animated: true,
    };
    const EDIT: Self = Self {
        hover_is_focused: true,
        focus_is_focused: true,
        checked_is_toggled: false,
        sunken_is_pressed: false,
        animated: true,
    };
    const ITEM: Self = Self {
        hover_is_focused: true,
        focus_is_focused: false,
        checked_is_toggled: true,
        sunken_is_pressed: true,
        animated: false,
    };
    const PASSIVE: Self = Self {
        hover_is_focused: false,
        focus_is_focused: false,
        checked_is_toggled: false,
        sunken_is_pressed: false,
        animated: false,
    };
}

/// Result of classifying a host widget: kind, rules and the widget name used for spec lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Classified kind.
    pub kind: WidgetKind,
    /// Resolved rules for the kind.
    pub rules: StateRules,
    /// Default widget name in theme tables.
    pub widget_name: &'static str,
}

const STRATEGIES: [(WidgetKind, &str, StateRules); 13] = [
    (WidgetKind::PushButton, "PanelButtonCommand", StateRules::BUTTON),
    (WidgetKind::ToolButton, "PanelButtonTool", StateRules::BUTTON),
    (WidgetKind::CheckBox, "CheckBox", StateRules::BUTTON),
    (WidgetKind::RadioButton, "RadioButton", StateRules::BUTTON),
    (WidgetKind::LineEdit, "LineEdit", StateRules::EDIT),
    (WidgetKind::ComboBox, "ComboBox", StateRules::BUTTON),
    (WidgetKind::Tab, "Tab", StateRules::ITEM),
    (WidgetKind::MenuItem, "MenuItem", StateRules::ITEM),
    (WidgetKind::ProgressBar, "Progressbar", StateRules::PASSIVE),
    (
        WidgetKind::ScrollBar,
        "ScrollbarSlider",
        StateRules {
            hover_is_focused: true,
            sunken_is_pressed: true,
            ..StateRules::PASSIVE
        },
    ),
    (
        WidgetKind::Slider,
        "Slider",
        StateRules {
            hover_is_focused: true,
            sunken_is_pressed: true,
            ..StateRules::PASSIVE
        },
    ),
    (WidgetKind::ToolTip, "ToolTip", StateRules::PASSIVE),
    (WidgetKind::Generic, "", StateRules::PASSIVE),
];

impl WidgetKind {
    /// Map a host tag (case-insensitive, `-`/`_` ignored) to a kind.
    pub fn from_tag(tag: &str) -> Self {
        let norm: String = tag
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match norm.as_str() {
            "pushbutton" | "button" => Self::PushButton,
            "toolbutton" => Self::ToolButton,
            "checkbox" => Self::CheckBox,
            "radiobutton" | "radio" => Self::RadioButton,
            "lineedit" | "textedit" | "spinbox" => Self::LineEdit,
            "combobox" | "combo" => Self::ComboBox,
            "tab" => Self::Tab,
            "menuitem" | "menubaritem" => Self::MenuItem,
            "progressbar" => Self::ProgressBar,
            "scrollbar" => Self::ScrollBar,
            "slider" => Self::Slider,
            "tooltip" => Self::ToolTip,
            _ => Self::Generic,
        }
    }

    /// Resolve the strategy-table entry for this kind.
    pub fn classify(self) -> Classification {
        let (kind, widget_name, rules) = STRATEGIES
            .iter()
            .copied()
            .find(|(k, _, _)| *k == self)
            .unwrap_or(STRATEGIES[STRATEGIES.len() - 1]);
        Classification {
            kind,
            rules,
            widget_name,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/kind.rs"]
mod tests;
