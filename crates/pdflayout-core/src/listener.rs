//! Render event callbacks from a content stream interpreter.
//!
//! Defines the [`RenderListener`] trait that an interpreter drives while it
//! walks a page's content stream. The interpreter itself lives outside this
//! crate; it reports each visible text run as a [`TextRenderEvent`] and each
//! placed image as an [`ImageEvent`].

use crate::chunk::TextChunk;
use crate::geometry::LineSegment;

/// One visible text run, as reported by the interpreter.
///
/// All geometry is in page user space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRenderEvent {
    /// Decoded text of the run.
    pub text: String,
    /// Baseline of the run, rise still applied.
    pub baseline: LineSegment,
    /// Text rise (Ts operator) for superscript/subscript.
    pub rise: f64,
    /// Advance width of a single space character in the run's font.
    pub single_space_width: f64,
}

impl TextRenderEvent {
    pub fn new(
        text: impl Into<String>,
        baseline: LineSegment,
        rise: f64,
        single_space_width: f64,
    ) -> Self {
        Self {
            text: text.into(),
            baseline,
            rise,
            single_space_width,
        }
    }

    /// Baseline with the rise removed, so super/subscripts land on the line
    /// they belong to.
    pub fn effective_baseline(&self) -> LineSegment {
        self.baseline.without_rise(self.rise)
    }

    /// Project this run into a [`TextChunk`].
    pub fn chunk(&self) -> TextChunk {
        let baseline = self.effective_baseline();
        TextChunk::new(
            self.text.clone(),
            baseline.start,
            baseline.end,
            self.single_space_width,
        )
    }

    /// Like [`chunk`](Self::chunk) but moves the text instead of copying it.
    pub fn into_chunk(self) -> TextChunk {
        let baseline = self.effective_baseline();
        TextChunk::new(self.text, baseline.start, baseline.end, self.single_space_width)
    }
}

/// Information about a placed image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEvent {
    /// Image XObject name reference (e.g., "Im0").
    pub name: String,
    /// CTM at the time of image placement.
    pub ctm: [f64; 6],
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Callback handler for page rendering events.
///
/// All methods have default no-op implementations, so listeners only
/// override the events they care about.
pub trait RenderListener {
    /// Called when a text object (BT) begins.
    fn begin_text_block(&mut self) {}

    /// Called for each visible text run.
    fn render_text(&mut self, _event: TextRenderEvent) {}

    /// Called when a text object (ET) ends.
    fn end_text_block(&mut self) {}

    /// Called when an image XObject is placed on the page.
    fn render_image(&mut self, _event: ImageEvent) {}
}
