use crate::foundation::error::{SkinError, SkinResult};

const MAX_DIM: u32 = 16_384;

/// Canvas-space bounds `(x, y, width, height)` of the element with `id`, if it exists and
/// covers a non-zero area.
pub fn element_bounds(tree: &usvg::Tree, id: &str) -> Option<(f32, f32, f32, f32)> {
    let node = tree.node_by_id(id)?;
    let bbox = node.abs_layer_bounding_box()?;
    Some((bbox.x(), bbox.y(), bbox.width(), bbox.height()))
}

/// Rasterize one element so that its bounds fill a `width`x`height` premultiplied RGBA8 buffer.
///
/// Returns `Ok(None)` when the element is missing or has no area.
pub fn rasterize_element_to_premul_rgba8(
    tree: &usvg::Tree,
    id: &str,
    width: u32,
    height: u32,
) -> SkinResult<Option<Vec<u8>>> {
    if width == 0 || height == 0 {
        return Ok(None);
    }
    if width > MAX_DIM || height > MAX_DIM {
        return Err(SkinError::render(format!(
            "element raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    let Some(node) = tree.node_by_id(id) else {
        return Ok(None);
    };
    let Some(bbox) = node.abs_layer_bounding_box() else {
        return Ok(None);
    };

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SkinError::render("failed to allocate element pixmap"))?;

    let sx = (width as f32) / bbox.width();
    let sy = (height as f32) / bbox.height();
    // `render_node` renders in the node's local space shifted by the bbox origin; re-apply the
    // ancestor transform around that shift so nested elements land on their canvas bounds.
    let (bx, by) = (bbox.x(), bbox.y());
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy)
        .pre_translate(-bx, -by)
        .pre_concat(parent_transform(node))
        .pre_translate(bx, by);

    resvg::render_node(node, xform, &mut pixmap.as_mut());
    Ok(Some(pixmap.data().to_vec()))
}

fn parent_transform(node: &usvg::Node) -> resvg::tiny_skia::Transform {
    match node {
        usvg::Node::Group(g) => g
            .transform()
            .invert()
            .map(|inv| g.abs_transform().pre_concat(inv))
            .unwrap_or_default(),
        other => other.abs_transform(),
    }
}
