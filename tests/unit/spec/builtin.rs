use super::*;

#[test]
fn builtin_svg_parses_and_names_every_frame_part() {
    let svg = builtin_svg();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    for part in FRAME_PARTS {
        assert!(tree.node_by_id(&format!("button-normal-{part}")).is_some());
    }
    assert!(tree.node_by_id("button-focused").is_some());
    assert!(tree.node_by_id("checkbox-toggled").is_some());
}

#[test]
fn builtin_table_frames_have_matching_elements() {
    let t = builtin_table();
    let svg = builtin_svg();
    for spec in t.frames.values() {
        assert!(svg.contains(&format!("id=\"{}-normal-top\"", spec.element)));
    }
    for spec in t.interiors.values() {
        assert!(svg.contains(&format!("id=\"{}-normal\"", spec.element)));
    }
}
