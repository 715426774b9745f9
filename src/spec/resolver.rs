use crate::spec::model::{
    ColorSpec, FrameSpec, HacksSpec, IconTextArrangement, IndicatorSpec, InteriorSpec, LabelSpec,
    SizeSpec, ThemeSpec, ThemeTable,
};

static ZERO_FRAME: FrameSpec = FrameSpec {
    element: String::new(),
    has_frame: false,
    top: 0,
    bottom: 0,
    left: 0,
    right: 0,
    groupable: false,
    expansion: 0,
};

static ZERO_INTERIOR: InteriorSpec = InteriorSpec {
    element: String::new(),
    has_interior: false,
    px: 0,
    py: 0,
};

static ZERO_INDICATOR: IndicatorSpec = IndicatorSpec {
    element: String::new(),
    size: 0,
};

static ZERO_LABEL: LabelSpec = LabelSpec {
    top: 0,
    bottom: 0,
    left: 0,
    right: 0,
    tispace: 0,
    icon_size: 0,
    arrangement: IconTextArrangement::TextBesideIcon,
    normal_color: None,
    focus_color: None,
    press_color: None,
    toggle_color: None,
    shadow: None,
};

static ZERO_SIZE: SizeSpec = SizeSpec {
    min_width: 0,
    min_height: 0,
};

/// Per-widget-name spec lookup with two-level fallback.
///
/// Lookups try the active theme table, then the built-in default table, then a zero-valued
/// spec. They never fail and have no side effects.
#[derive(Clone, Copy, Debug)]
pub struct SpecResolver<'a> {
    active: &'a ThemeTable,
    fallback: &'a ThemeTable,
}

impl<'a> SpecResolver<'a> {
    /// Build a resolver over the active table and the default table.
    pub fn new(active: &'a ThemeTable, fallback: &'a ThemeTable) -> Self {
        Self { active, fallback }
    }

    /// Frame spec for `widget`.
    pub fn frame(&self, widget: &str) -> &'a FrameSpec {
        self.active
            .frames
            .get(widget)
            .or_else(|| self.fallback.frames.get(widget))
            .unwrap_or(&ZERO_FRAME)
    }

    /// Interior spec for `widget`.
    pub fn interior(&self, widget: &str) -> &'a InteriorSpec {
        self.active
            .interiors
            .get(widget)
            .or_else(|| self.fallback.interiors.get(widget))
            .unwrap_or(&ZERO_INTERIOR)
    }

    /// Indicator spec for `widget`.
    pub fn indicator(&self, widget: &str) -> &'a IndicatorSpec {
        self.active
            .indicators
            .get(widget)
            .or_else(|| self.fallback.indicators.get(widget))
            .unwrap_or(&ZERO_INDICATOR)
    }

    /// Label spec for `widget`.
    pub fn label(&self, widget: &str) -> &'a LabelSpec {
        self.active
            .labels
            .get(widget)
            .or_else(|| self.fallback.labels.get(widget))
            .unwrap_or(&ZERO_LABEL)
    }

    /// Size spec for `widget`.
    pub fn size(&self, widget: &str) -> &'a SizeSpec {
        self.active
            .sizes
            .get(widget)
            .or_else(|| self.fallback.sizes.get(widget))
            .unwrap_or(&ZERO_SIZE)
    }

    /// General settings of the active theme.
    pub fn theme(&self) -> &'a ThemeSpec {
        &self.active.theme
    }

    /// Palette of the active theme.
    pub fn colors(&self) -> &'a ColorSpec {
        &self.active.colors
    }

    /// Workarounds of the active theme.
    pub fn hacks(&self) -> &'a HacksSpec {
        &self.active.hacks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/resolver.rs"]
mod tests;
