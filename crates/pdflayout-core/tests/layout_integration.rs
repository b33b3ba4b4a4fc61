//! Integration tests for layout-preserving text reconstruction.
//!
//! These tests drive a [`LayoutReconstructor`] through the render listener
//! interface the way a content stream interpreter would, then check the
//! synthesized text for whole pages and page regions.

use pdflayout_core::{
    ChunkFilter, FilterMode, LayoutOptions, LayoutReconstructor, LineSegment, Rect,
    RegionFilter, RenderListener, TextChunk, TextRenderEvent, Vector,
};

/// Helper: a horizontal run starting at `x`, one glyph per 6 units.
fn text_run(text: &str, x: f64, y: f64) -> TextRenderEvent {
    let width = text.chars().count() as f64 * 6.0;
    TextRenderEvent::new(
        text,
        LineSegment::new(Vector::new(x, y), Vector::new(x + width, y)),
        0.0,
        3.0,
    )
}

/// Helper: feed events through the listener interface.
fn render(events: Vec<TextRenderEvent>) -> LayoutReconstructor {
    let mut reconstructor = LayoutReconstructor::new();
    let listener: &mut dyn RenderListener = &mut reconstructor;
    listener.begin_text_block();
    for event in events {
        listener.render_text(event);
    }
    listener.end_text_block();
    reconstructor
}

#[test]
fn table_columns_stay_aligned() {
    let reconstructor = render(vec![
        text_run("Item", 0.0, 700.0),
        text_run("Qty", 120.0, 700.0),
        text_run("Price", 180.0, 700.0),
        text_run("Widget", 0.0, 686.0),
        text_run("3", 120.0, 686.0),
        text_run("9.99", 180.0, 686.0),
        text_run("Gadget", 0.0, 672.0),
        text_run("12", 120.0, 672.0),
        text_run("24.50", 180.0, 672.0),
    ]);

    let text = reconstructor.resultant_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        // Column 20 (120 / 6) and column 30 (180 / 6) hold the second and third cells.
        assert_ne!(line.as_bytes()[20], b' ', "line: {line:?}");
        assert_ne!(line.as_bytes()[30], b' ', "line: {line:?}");
        assert_eq!(line.as_bytes()[19], b' ', "line: {line:?}");
    }
    assert_eq!(lines[0], "Item                Qty       Price");
    assert_eq!(lines[1], "Widget              3         9.99");
    assert_eq!(lines[2], "Gadget              12        24.50");
}

#[test]
fn interleaved_arrival_sorts_into_rows() {
    // Two-column page emitted column by column.
    let reconstructor = render(vec![
        text_run("left-1", 0.0, 700.0),
        text_run("left-2", 0.0, 688.0),
        text_run("right-1", 300.0, 700.0),
        text_run("right-2", 300.0, 688.0),
    ]);
    let text = reconstructor.resultant_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("left-1"));
    assert!(lines[0].ends_with("right-1"));
    assert!(lines[1].starts_with("left-2"));
    assert!(lines[1].ends_with("right-2"));
    assert_eq!(lines[0].find("right-1"), Some(50));
}

#[test]
fn superscript_stays_on_its_line() {
    let mut superscript = text_run("2", 24.0, 704.0);
    superscript.rise = 4.0;
    let reconstructor = render(vec![text_run("E=mc", 0.0, 700.0), superscript]);
    assert_eq!(reconstructor.resultant_text(), "E=mc2");
}

#[test]
fn subpixel_baseline_jitter_is_one_line() {
    let reconstructor = render(vec![
        text_run("Hello", 0.0, 700.1),
        text_run("World", 36.0, 700.7),
    ]);
    assert_eq!(reconstructor.resultant_text(), "Hello World");
}

#[test]
fn lines_are_separated_by_exactly_one_newline() {
    let reconstructor = render(vec![
        text_run("top", 0.0, 700.0),
        text_run("far below", 0.0, 100.0),
    ]);
    assert_eq!(reconstructor.resultant_text(), "top\nfar below");
}

#[test]
fn vertical_text_forms_its_own_lines() {
    let mut reconstructor = render(vec![text_run("Horizontal", 0.0, 700.0)]);
    reconstructor.render_text(TextRenderEvent::new(
        "Sideways",
        LineSegment::new(Vector::new(500.0, 100.0), Vector::new(500.0, 148.0)),
        0.0,
        3.0,
    ));
    let text = reconstructor.resultant_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Horizontal");
    // Parallel start is 100 along the vertical baseline: 100 / 6 = 16 columns.
    assert_eq!(lines[1], format!("{}Sideways", " ".repeat(16)));
}

#[test]
fn region_filters_split_one_accumulation() {
    let reconstructor = render(vec![
        text_run("Header", 0.0, 780.0),
        text_run("Body text", 0.0, 400.0),
        text_run("Footer", 0.0, 20.0),
    ]);
    let header = RegionFilter::crop(Rect::new(0.0, 750.0, 612.0, 792.0));
    let body = RegionFilter::new(Rect::new(0.0, 50.0, 612.0, 750.0), FilterMode::Within);
    let not_header = RegionFilter::outside(Rect::new(0.0, 750.0, 612.0, 792.0));

    assert_eq!(reconstructor.resultant_text_with(&header), "Header");
    assert_eq!(reconstructor.resultant_text_with(&body), "Body text");
    assert_eq!(
        reconstructor.resultant_text_with(&not_header),
        "Body text\nFooter"
    );
    assert_eq!(reconstructor.len(), 3);
    assert_eq!(reconstructor.resultant_text(), "Header\nBody text\nFooter");
}

#[test]
fn filter_trait_object_and_closure_agree() {
    let reconstructor = render(vec![
        text_run("alpha", 0.0, 10.0),
        text_run("beta", 60.0, 10.0),
    ]);
    let closure = |chunk: &TextChunk| chunk.text().starts_with('b');
    let dyn_filter: &dyn ChunkFilter = &closure;
    assert_eq!(
        reconstructor.synthesize(Some(dyn_filter)),
        reconstructor.resultant_text_with(&closure)
    );
    assert_eq!(reconstructor.resultant_text_with(&closure), "          beta");
}

#[test]
fn repeated_synthesis_is_byte_identical() {
    let reconstructor = render(vec![
        text_run("c", 12.0, 10.0),
        text_run("a", 0.0, 20.0),
        text_run("b", 0.0, 10.0),
    ]);
    let filter = RegionFilter::crop(Rect::new(0.0, 0.0, 100.0, 15.0));
    assert_eq!(reconstructor.resultant_text(), reconstructor.resultant_text());
    assert_eq!(
        reconstructor.resultant_text_with(&filter),
        reconstructor.resultant_text_with(&filter)
    );
    assert_eq!(reconstructor.resultant_text(), "a\nb c");
}

#[test]
fn sort_is_stable_for_equal_keys() {
    // Same row and start column: arrival order decides.
    let reconstructor = render(vec![
        text_run("first", 0.0, 10.0),
        text_run("second", 0.0, 10.0),
    ]);
    assert_eq!(reconstructor.resultant_text(), "first second");
}

#[test]
fn custom_grid_changes_column_math() {
    let mut reconstructor = LayoutReconstructor::with_options(LayoutOptions {
        page_left: 72.0,
        fixed_char_width: 12.0,
        ..LayoutOptions::default()
    })
    .unwrap();
    reconstructor.record(text_run("indented", 108.0, 700.0));
    assert_eq!(reconstructor.resultant_text(), "   indented");
}

#[test]
fn text_left_of_page_origin_is_not_padded() {
    let mut reconstructor = LayoutReconstructor::new();
    reconstructor.set_page_left(72.0).unwrap();
    reconstructor.record(text_run("margin note", 10.0, 700.0));
    assert_eq!(reconstructor.resultant_text(), "margin note");
}
