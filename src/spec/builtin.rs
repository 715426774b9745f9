//! Built-in default theme used when the active theme lacks a widget entry.

use std::fmt::Write as _;

use crate::spec::model::{
    FrameSpec, IndicatorSpec, InteriorSpec, LabelSpec, SizeSpec, ThemeSpec, ThemeTable,
};

const STATES: [(&str, &str, &str); 5] = [
    ("disabled", "#c8c8c8", "#e8e8e8"),
    ("normal", "#8a8a8a", "#dcdcdc"),
    ("focused", "#308cc6", "#e6f0f8"),
    ("pressed", "#5a5a5a", "#bdbdbd"),
    ("toggled", "#1f6ea3", "#b8d4e8"),
];

const FRAME_PARTS: [&str; 8] = [
    "topleft",
    "top",
    "topright",
    "left",
    "right",
    "bottomleft",
    "bottom",
    "bottomright",
];

const FRAMED: [&str; 8] = [
    "button",
    "lineedit",
    "combo",
    "tab",
    "tabframe",
    "progress",
    "slider",
    "tooltip",
];

const FILLS: [&str; 10] = [
    "button",
    "lineedit",
    "combo",
    "tab",
    "tabframe",
    "progress",
    "progress-pattern",
    "slider",
    "menuitem",
    "tooltip",
];

const GLYPHS: [&str; 5] = [
    "checkbox",
    "radio",
    "arrow-down",
    "arrow-right",
    "slidertick",
];

/// SVG element library backing [`builtin_table`].
pub fn builtin_svg() -> String {
    let mut out = String::from(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"64\" viewBox=\"0 0 64 64\">\n",
    );
    for (state, edge, face) in STATES {
        for base in FRAMED {
            for part in FRAME_PARTS {
                let _ = writeln!(
                    out,
                    "<rect id=\"{base}-{state}-{part}\" x=\"0\" y=\"0\" width=\"4\" height=\"4\" fill=\"{edge}\"/>"
                );
            }
        }
        for base in FILLS {
            let _ = writeln!(
                out,
                "<rect id=\"{base}-{state}\" x=\"0\" y=\"0\" width=\"16\" height=\"16\" fill=\"{face}\"/>"
            );
        }
        for base in GLYPHS {
            let _ = writeln!(
                out,
                "<rect id=\"{base}-{state}\" x=\"2\" y=\"2\" width=\"12\" height=\"12\" fill=\"{edge}\"/>"
            );
        }
    }
    out.push_str("</svg>\n");
    out
}

fn frame(element: &str, width: u32, groupable: bool) -> FrameSpec {
    FrameSpec {
        element: element.to_string(),
        has_frame: true,
        top: width,
        bottom: width,
        left: width,
        right: width,
        groupable,
        expansion: 0,
    }
}

fn interior(element: &str) -> InteriorSpec {
    InteriorSpec {
        element: element.to_string(),
        has_interior: true,
        px: 0,
        py: 0,
    }
}

fn label(h: u32, v: u32) -> LabelSpec {
    LabelSpec {
        top: v,
        bottom: v,
        left: h,
        right: h,
        tispace: 4,
        ..LabelSpec::default()
    }
}

/// Spec tables of the built-in default theme.
pub fn builtin_table() -> ThemeTable {
    let mut t = ThemeTable {
        theme: ThemeSpec {
            name: "default".to_string(),
            animate_states: true,
            ..ThemeSpec::default()
        },
        ..ThemeTable::default()
    };

    let framed = [
        ("PanelButtonCommand", "button", 3, true, label(6, 3)),
        ("PanelButtonTool", "button", 2, true, label(3, 2)),
        ("LineEdit", "lineedit", 2, false, label(3, 2)),
        ("ComboBox", "combo", 2, true, label(4, 2)),
        ("Tab", "tab", 2, false, label(6, 3)),
        ("TabFrame", "tabframe", 2, false, label(0, 0)),
        ("Progressbar", "progress", 1, false, label(2, 0)),
        ("Slider", "slider", 1, false, label(0, 0)),
        ("ToolTip", "tooltip", 1, false, label(3, 3)),
    ];
    for (name, element, width, groupable, lspec) in framed {
        t.frames
            .insert(name.to_string(), frame(element, width, groupable));
        t.interiors.insert(name.to_string(), interior(element));
        t.labels.insert(name.to_string(), lspec);
    }

    t.interiors.insert(
        "ProgressbarContents".to_string(),
        InteriorSpec {
            element: "progress-pattern".to_string(),
            has_interior: true,
            px: 8,
            py: 0,
        },
    );
    t.interiors
        .insert("MenuItem".to_string(), interior("menuitem"));
    t.labels.insert("MenuItem".to_string(), label(4, 2));

    for (name, element, size) in [
        ("CheckBox", "checkbox", 13),
        ("RadioButton", "radio", 13),
        ("ComboBox", "arrow-down", 10),
        ("MenuItem", "arrow-right", 8),
        ("SliderTick", "slidertick", 4),
    ] {
        t.indicators.insert(
            name.to_string(),
            IndicatorSpec {
                element: element.to_string(),
                size,
            },
        );
    }
    t.labels.insert("CheckBox".to_string(), label(2, 1));
    t.labels.insert("RadioButton".to_string(), label(2, 1));

    t.sizes.insert(
        "PanelButtonCommand".to_string(),
        SizeSpec {
            min_width: 72,
            min_height: 0,
        },
    );
    t.sizes.insert(
        "LineEdit".to_string(),
        SizeSpec {
            min_width: 0,
            min_height: 22,
        },
    );
    t
}

#[cfg(test)]
#[path = "../../tests/unit/spec/builtin.rs"]
mod tests;
