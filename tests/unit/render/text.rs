use super::*;

const FONT_CANDIDATES: [&str; 2] = [
    "tests/data/fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

fn shaper_if_font_present() -> Option<ParleyShaper> {
    let bytes = FONT_CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok())?;
    Some(ParleyShaper::new(bytes).unwrap())
}

#[test]
fn invalid_font_bytes_are_rejected() {
    assert!(ParleyShaper::new(b"not a font".to_vec()).is_err());
}

#[test]
fn measure_grows_with_text_and_wraps() {
    let Some(mut s) = shaper_if_font_present() else {
        return;
    };
    assert!(!s.family_name().is_empty());

    let short = s.measure("OK", 12.0, None);
    let long = s.measure("OK OK OK OK", 12.0, None);
    assert_eq!(short.lines, 1);
    assert!(long.width > short.width);

    let wrapped = s.measure("OK OK OK OK", 12.0, Some(short.width * 2.0));
    assert!(wrapped.lines > 1);
    assert!(wrapped.height > short.height);
    assert!(s.line_height(12.0) > 0.0);
}

#[test]
fn empty_text_measures_and_renders_nothing() {
    let Some(mut s) = shaper_if_font_present() else {
        return;
    };
    assert_eq!(s.measure("", 12.0, None), TextMetrics::default());
    assert!(
        s.rasterize("", 12.0, None, Rgba8::opaque(0, 0, 0), 1.0)
            .unwrap()
            .is_none()
    );
}

#[test]
fn rasterize_produces_colored_coverage() {
    let Some(mut s) = shaper_if_font_present() else {
        return;
    };
    let bmp = s
        .rasterize("OK", 16.0, None, Rgba8::opaque(255, 0, 0), 2.0)
        .unwrap()
        .unwrap();
    let m = s.measure("OK", 16.0, None);
    assert!(f64::from(bmp.width()) >= m.width * 1.5);
    let inked = bmp.data().chunks_exact(4).filter(|p| p[3] > 0).count();
    assert!(inked > 0);
    assert!(bmp.data().chunks_exact(4).all(|p| p[1] == 0 && p[2] == 0));
}
