pub use kurbo::{Insets, Point, Rect, Size};

/// Straight-alpha RGBA8 color as found in theme color specs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to premultiplied RGBA8 bytes.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            (((u16::from(c) * u16::from(a)) + 127) / 255) as u8
        }
        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Horizontal layout direction of the widget being painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left-to-right (default).
    #[default]
    LeftToRight,
    /// Right-to-left; horizontal alignments and glyphs are mirrored.
    RightToLeft,
}

impl LayoutDirection {
    /// Return `true` for [`LayoutDirection::RightToLeft`].
    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

/// Horizontal alignment inside a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    /// Flush to the leading (left) edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush to the trailing (right) edge.
    Right,
}

/// Vertical alignment inside a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    /// Flush to the top edge.
    Top,
    /// Centered.
    #[default]
    Center,
    /// Flush to the bottom edge.
    Bottom,
}

/// Combined two-axis alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Alignment {
    /// Horizontal component.
    pub h: HAlign,
    /// Vertical component.
    pub v: VAlign,
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        h: HAlign::Center,
        v: VAlign::Center,
    };

    /// Build an alignment from its two components.
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }

    /// Swap left and right when `dir` is right-to-left.
    pub fn resolve(self, dir: LayoutDirection) -> Self {
        if !dir.is_rtl() {
            return self;
        }
        let h = match self.h {
            HAlign::Left => HAlign::Right,
            HAlign::Right => HAlign::Left,
            HAlign::Center => HAlign::Center,
        };
        Self { h, v: self.v }
    }

    /// Place an item of `size` inside `outer` according to this alignment.
    pub fn place(self, size: Size, outer: Rect) -> Rect {
        let x = match self.h {
            HAlign::Left => outer.x0,
            HAlign::Center => outer.x0 + (outer.width() - size.width) / 2.0,
            HAlign::Right => outer.x1 - size.width,
        };
        let y = match self.v {
            VAlign::Top => outer.y0,
            VAlign::Center => outer.y0 + (outer.height() - size.height) / 2.0,
            VAlign::Bottom => outer.y1 - size.height,
        };
        Rect::from_origin_size((x.round(), y.round()), size)
    }
}

/// Shrink `rect` by `insets` on all sides, clamping to zero width/height instead of inverting.
pub fn shrink_rect(rect: Rect, insets: Insets) -> Rect {
    let r = rect.abs();
    let x0 = (r.x0 + insets.x0.max(0.0)).min(r.x1);
    let y0 = (r.y0 + insets.y0.max(0.0)).min(r.y1);
    let x1 = (r.x1 - insets.x1.max(0.0)).max(x0);
    let y1 = (r.y1 - insets.y1.max(0.0)).max(y0);
    Rect::new(x0, y0, x1, y1)
}

/// Return the largest square centered inside `rect`.
pub fn squared_rect(rect: Rect) -> Rect {
    let side = rect.width().min(rect.height()).max(0.0);
    Alignment::CENTER.place(Size::new(side, side), rect)
}

/// Integer rectangle in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeviceRect {
    /// Left edge in device pixels.
    pub x: i32,
    /// Top edge in device pixels.
    pub y: i32,
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

impl DeviceRect {
    /// Map a logical rectangle to device pixels by rounding each edge.
    ///
    /// Rounding edges (rather than origin and size separately) keeps adjacent pieces seamless.
    pub fn from_logical(rect: Rect, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let r = rect.abs();
        let x0 = (r.x0 * dpr).round();
        let y0 = (r.y0 * dpr).round();
        let x1 = (r.x1 * dpr).round().max(x0);
        let y1 = (r.y1 * dpr).round().max(y0);
        Self {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        }
    }

    /// Build from edge coordinates; inverted edges yield an empty rectangle.
    pub fn from_edges(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: (x1 - x0).max(0) as u32,
            height: (y1 - y0).max(0) as u32,
        }
    }

    /// Right edge (exclusive).
    pub fn right(self) -> i32 {
        self.x + self.width as i32
    }

    /// Bottom edge (exclusive).
    pub fn bottom(self) -> i32 {
        self.y + self.height as i32
    }

    /// Return `true` when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Common area of two rectangles.
    pub fn intersect(self, other: Self) -> Self {
        Self::from_edges(
            self.x.max(other.x),
            self.y.max(other.y),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        )
    }

    /// Split `self` minus `hole` into at most four disjoint rectangles.
    pub fn subtract(self, hole: Self) -> Vec<Self> {
        let cut = self.intersect(hole);
        if cut.is_empty() {
            return if self.is_empty() { Vec::new() } else { vec![self] };
        }
        [
            Self::from_edges(self.x, self.y, self.right(), cut.y),
            Self::from_edges(self.x, cut.bottom(), self.right(), self.bottom()),
            Self::from_edges(self.x, cut.y, cut.x, cut.bottom()),
            Self::from_edges(cut.right(), cut.y, self.right(), cut.bottom()),
        ]
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
