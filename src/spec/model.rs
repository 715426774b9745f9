use std::collections::HashMap;

use crate::foundation::core::{Insets, Rgba8, Size};
use crate::foundation::error::SkinResult;

/// Border-ring description of a widget.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameSpec {
    /// Base SVG element name; state and part suffixes are appended when painting.
    pub element: String,
    /// Whether a frame is drawn at all.
    pub has_frame: bool,
    /// Top border thickness in logical pixels.
    pub top: u32,
    /// Bottom border thickness in logical pixels.
    pub bottom: u32,
    /// Left border thickness in logical pixels.
    pub left: u32,
    /// Right border thickness in logical pixels.
    pub right: u32,
    /// Whether the widget may be merged with abutting siblings (capsule rendering).
    pub groupable: bool,
    /// Extra outward expansion of the frame when drawn with maximum rounding.
    pub expansion: u32,
}

impl FrameSpec {
    /// Border widths as insets; zero when `has_frame` is off.
    pub fn insets(&self) -> Insets {
        if !self.has_frame {
            return Insets::ZERO;
        }
        Insets::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

/// Background fill drawn inside the frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InteriorSpec {
    /// SVG element name of the fill.
    pub element: String,
    /// Whether an interior is drawn.
    pub has_interior: bool,
    /// Horizontal pattern size; `0` stretches horizontally.
    pub px: u32,
    /// Vertical pattern size; `0` stretches vertically.
    pub py: u32,
}

/// Small glyph (arrow, checkmark) drawn inside the frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IndicatorSpec {
    /// SVG element name of the glyph.
    pub element: String,
    /// Glyph edge length in logical pixels.
    pub size: u32,
}

/// Relative placement of icon and text in a label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTextArrangement {
    /// Only the icon is shown.
    IconOnly,
    /// Only the text is shown.
    TextOnly,
    /// Icon on the leading side, text after it.
    #[default]
    TextBesideIcon,
    /// Icon above, text below.
    TextUnderIcon,
    /// Text above, icon below.
    TextAboveIcon,
    /// Text on the leading side, icon after it.
    TextBeforeIcon,
}

impl IconTextArrangement {
    /// Return `true` when icon and text sit side by side.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::TextBesideIcon | Self::TextBeforeIcon)
    }

    /// Return `true` when icon and text are stacked.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TextUnderIcon | Self::TextAboveIcon)
    }
}

/// Drop shadow drawn under label text.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextShadow {
    /// Shadow color.
    pub color: Rgba8,
    /// Horizontal offset in logical pixels.
    pub x_shift: i32,
    /// Vertical offset in logical pixels.
    pub y_shift: i32,
}

/// Text and icon description of a widget.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LabelSpec {
    /// Top text margin.
    pub top: u32,
    /// Bottom text margin.
    pub bottom: u32,
    /// Left text margin.
    pub left: u32,
    /// Right text margin.
    pub right: u32,
    /// Spacing between icon and text.
    pub tispace: u32,
    /// Icon edge length in logical pixels; `0` means "use the caller's icon size".
    pub icon_size: u32,
    /// Default icon/text arrangement.
    pub arrangement: IconTextArrangement,
    /// Text color override for the normal state.
    pub normal_color: Option<Rgba8>,
    /// Text color override for the focused state.
    pub focus_color: Option<Rgba8>,
    /// Text color override for the pressed state.
    pub press_color: Option<Rgba8>,
    /// Text color override for the toggled state.
    pub toggle_color: Option<Rgba8>,
    /// Optional shadow under the text.
    pub shadow: Option<TextShadow>,
}

impl LabelSpec {
    /// Text margins as insets.
    pub fn margins(&self) -> Insets {
        Insets::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

/// Minimum size of a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SizeSpec {
    /// Minimum width in logical pixels.
    pub min_width: u32,
    /// Minimum height in logical pixels.
    pub min_height: u32,
}

impl SizeSpec {
    /// Minimum size as a [`Size`].
    pub fn as_size(&self) -> Size {
        Size::new(f64::from(self.min_width), f64::from(self.min_height))
    }
}

/// General, theme-wide settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeSpec {
    /// Theme display name.
    pub name: String,
    /// Animate frame/interior changes between states.
    pub animate_states: bool,
    /// Scrollbars fade in/out with hover activity.
    pub transient_scrollbar: bool,
    /// Icon size of push buttons.
    pub button_icon_size: u32,
    /// Icon size of small items (menus, views).
    pub small_icon_size: u32,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            animate_states: false,
            transient_scrollbar: false,
            button_icon_size: 16,
            small_icon_size: 16,
        }
    }
}

/// Palette colors of the theme.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorSpec {
    /// Window background.
    pub window_color: Rgba8,
    /// View/edit background.
    pub base_color: Rgba8,
    /// Button background.
    pub button_color: Rgba8,
    /// Selection highlight; also the tint color.
    pub highlight_color: Rgba8,
    /// Text on window backgrounds.
    pub window_text_color: Rgba8,
    /// Text on view/edit backgrounds.
    pub text_color: Rgba8,
    /// Text on buttons.
    pub button_text_color: Rgba8,
    /// Text on highlighted backgrounds.
    pub highlight_text_color: Rgba8,
    /// Text of disabled widgets.
    pub disabled_text_color: Rgba8,
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self {
            window_color: Rgba8::opaque(0xef, 0xef, 0xef),
            base_color: Rgba8::opaque(0xff, 0xff, 0xff),
            button_color: Rgba8::opaque(0xe0, 0xe0, 0xe0),
            highlight_color: Rgba8::opaque(0x30, 0x8c, 0xc6),
            window_text_color: Rgba8::opaque(0x00, 0x00, 0x00),
            text_color: Rgba8::opaque(0x00, 0x00, 0x00),
            button_text_color: Rgba8::opaque(0x00, 0x00, 0x00),
            highlight_text_color: Rgba8::opaque(0xff, 0xff, 0xff),
            disabled_text_color: Rgba8::opaque(0xa0, 0xa0, 0xa0),
        }
    }
}

/// Appearance workarounds that are not part of any widget spec.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HacksSpec {
    /// Tint percentage applied to icons under the pointer; `0` disables tinting.
    pub tint_on_mouseover: u8,
    /// Do not tint icons of toggled (selected) items.
    pub no_selection_tint: bool,
    /// Opacity percentage of disabled icons.
    pub disabled_icon_opacity: u8,
    /// Drop icons from push buttons.
    pub iconless_pushbutton: bool,
    /// Paint default push buttons like normal ones.
    pub normal_default_pushbutton: bool,
}

impl Default for HacksSpec {
    fn default() -> Self {
        Self {
            tint_on_mouseover: 0,
            no_selection_tint: false,
            disabled_icon_opacity: 100,
            iconless_pushbutton: false,
            normal_default_pushbutton: false,
        }
    }
}

/// Per-widget-name spec tables plus theme-wide settings.
///
/// This is the structured result of parsing a theme description; parsing itself happens
/// outside this crate.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThemeTable {
    /// General settings.
    pub theme: ThemeSpec,
    /// Palette.
    pub colors: ColorSpec,
    /// Workarounds.
    pub hacks: HacksSpec,
    /// Frame specs by widget name.
    pub frames: HashMap<String, FrameSpec>,
    /// Interior specs by widget name.
    pub interiors: HashMap<String, InteriorSpec>,
    /// Indicator specs by widget name.
    pub indicators: HashMap<String, IndicatorSpec>,
    /// Label specs by widget name.
    pub labels: HashMap<String, LabelSpec>,
    /// Size specs by widget name.
    pub sizes: HashMap<String, SizeSpec>,
}

impl ThemeTable {
    /// Deserialize an already-structured table from JSON.
    pub fn from_json_str(s: &str) -> SkinResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/model.rs"]
mod tests;
