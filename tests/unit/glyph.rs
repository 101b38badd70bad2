use super::*;

fn union_bbox(layers: &[GlyphLayer]) -> kurbo::Rect {
    layers
        .iter()
        .map(|l| l.path.bounding_box())
        .reduce(|a, b| a.union(b))
        .unwrap()
}

#[test]
fn glyphs_fit_their_em_box() {
    for glyph in [Glyph::Cat, Glyph::Sparkle] {
        let layers = glyph.layers();
        assert!(!layers.is_empty());
        let bb = union_bbox(&layers);
        assert!(bb.x0 >= -0.5 - 1e-9 && bb.x1 <= 0.5 + 1e-9, "{glyph:?}: {bb:?}");
        assert!(bb.y0 >= -0.5 - 1e-9 && bb.y1 <= 0.5 + 1e-9, "{glyph:?}: {bb:?}");
    }
}

#[test]
fn cat_is_drawn_back_to_front_with_opaque_fills() {
    let layers = Glyph::Cat.layers();
    assert!(layers.len() > 8);
    assert!(layers.iter().all(|l| l.color.a == 255));
}

#[test]
fn glyph_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Glyph::Sparkle).unwrap(), "\"sparkle\"");
}
