//! Layout-preserving text synthesis.
//!
//! [`LayoutReconstructor`] collects [`TextChunk`]s while a page is rendered
//! and, on request, turns them into one string whose line breaks and runs
//! of spaces approximate the on-page position of each run.

use crate::chunk::TextChunk;
use crate::error::LayoutError;
use crate::filter::ChunkFilter;
use crate::listener::{RenderListener, TextRenderEvent};

/// Options for layout-preserving text synthesis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    /// Parallel coordinate that maps to output column zero.
    pub page_left: f64,
    /// Width of one synthetic output column, in page units.
    pub fixed_char_width: f64,
    /// If true, a word boundary does not force a separator when the previous
    /// run ends with a space or the current run starts with one.
    pub respect_text_spaces: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_left: 0.0,
            fixed_char_width: 6.0,
            respect_text_spaces: false,
        }
    }
}

impl LayoutOptions {
    /// Check that the options describe a usable column grid.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.page_left.is_finite() {
            return Err(LayoutError::NonFiniteOrigin(self.page_left));
        }
        if !self.fixed_char_width.is_finite() || self.fixed_char_width <= 0.0 {
            return Err(LayoutError::InvalidCharWidth(self.fixed_char_width));
        }
        Ok(())
    }

    /// Column of a parallel coordinate: `(position - page_left) / fixed_char_width`,
    /// truncated toward zero.
    ///
    /// A non-finite quotient (infinite or NaN geometry) maps to column zero.
    pub fn column_of(&self, position: f64) -> i64 {
        let column = (position - self.page_left) / self.fixed_char_width;
        if column.is_finite() { column as i64 } else { 0 }
    }
}

/// Whether a separator belongs between `previous` and `chunk`.
///
/// The gap counts as a word boundary when the new run starts more than one
/// space width before the end of the previous one, or more than half a
/// space width after it.
pub fn is_chunk_at_word_boundary(chunk: &TextChunk, previous: &TextChunk) -> bool {
    let dist = chunk.distance_from_end_of(previous);
    let space = chunk.char_space_width();
    dist < -space || dist > space / 2.0
}

/// Pad `out` with spaces so the next run starts at the column of `chunk_start`.
///
/// `start_of_line` is the byte offset in `out` where the current line
/// begins; columns are counted in chars from there. When `space_required`
/// is set at least one space is written, even if the line already extends
/// past the target column.
pub fn insert_spaces(
    out: &mut String,
    start_of_line: usize,
    chunk_start: f64,
    space_required: bool,
    options: &LayoutOptions,
) {
    let index_now = out[start_of_line..].chars().count() as i64;
    let index_to_be = options.column_of(chunk_start);
    let mut spaces_to_insert = index_to_be.saturating_sub(index_now);
    if spaces_to_insert < 1 && space_required {
        spaces_to_insert = 1;
    }
    if spaces_to_insert > 0 {
        out.extend(std::iter::repeat_n(' ', spaces_to_insert as usize));
    }
}

/// Accumulates text runs for one extraction session and synthesizes
/// layout-preserving text from them.
///
/// Recording is append-only and does no ordering work. Synthesis sorts a
/// filtered copy of the buffer, so it may be called any number of times
/// with different filters and always returns the same text for the same
/// filter.
#[derive(Debug, Clone, Default)]
pub struct LayoutReconstructor {
    chunks: Vec<TextChunk>,
    options: LayoutOptions,
}

impl LayoutReconstructor {
    /// Create a reconstructor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reconstructor with validated options.
    pub fn with_options(options: LayoutOptions) -> Result<Self, LayoutError> {
        options.validate()?;
        Ok(Self {
            chunks: Vec::new(),
            options,
        })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Set the parallel coordinate of column zero.
    pub fn set_page_left(&mut self, page_left: f64) -> Result<(), LayoutError> {
        let options = LayoutOptions {
            page_left,
            ..self.options.clone()
        };
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Set the width of one synthetic output column.
    pub fn set_fixed_char_width(&mut self, fixed_char_width: f64) -> Result<(), LayoutError> {
        let options = LayoutOptions {
            fixed_char_width,
            ..self.options.clone()
        };
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Record one text run.
    pub fn record(&mut self, event: TextRenderEvent) {
        self.push_chunk(event.into_chunk());
    }

    /// Append an already built chunk.
    pub fn push_chunk(&mut self, chunk: TextChunk) {
        #[cfg(feature = "tracing")]
        tracing::trace!(chunk = %chunk, "recorded text chunk");
        self.chunks.push(chunk);
    }

    /// Recorded chunks, in arrival order.
    pub fn chunks(&self) -> &[TextChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Drop all recorded chunks, keeping the options.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Text of every recorded chunk.
    pub fn resultant_text(&self) -> String {
        self.synthesize(None)
    }

    /// Text of the chunks accepted by `filter`.
    pub fn resultant_text_with<F: ChunkFilter>(&self, filter: &F) -> String {
        self.synthesize(Some(filter))
    }

    /// Build layout-preserving text from the recorded chunks.
    ///
    /// Chunks rejected by `filter` are skipped; `None` keeps them all. The
    /// rest are ordered by [`TextChunk::compare`]. Each change of line emits
    /// one `'\n'`; within a line, runs separated by a word boundary are
    /// padded out to the column of their starting position.
    pub fn synthesize(&self, filter: Option<&dyn ChunkFilter>) -> String {
        #[cfg(feature = "tracing")]
        self.dump_state();

        let mut chunks: Vec<&TextChunk> = match filter {
            Some(filter) => self.chunks.iter().filter(|c| filter.accept(c)).collect(),
            None => self.chunks.iter().collect(),
        };
        chunks.sort_by(|a, b| a.compare(b));

        let mut out = String::new();
        let mut start_of_line = 0;
        let mut last_chunk: Option<&TextChunk> = None;

        for &chunk in &chunks {
            match last_chunk {
                Some(previous) if chunk.same_line(previous) => {
                    if is_chunk_at_word_boundary(chunk, previous) {
                        let space_required = !self.options.respect_text_spaces
                            || (!chunk.starts_with_space() && !previous.ends_with_space());
                        insert_spaces(
                            &mut out,
                            start_of_line,
                            chunk.dist_parallel_start(),
                            space_required,
                            &self.options,
                        );
                    }
                }
                Some(_) => {
                    out.push('\n');
                    start_of_line = out.len();
                    insert_spaces(
                        &mut out,
                        start_of_line,
                        chunk.dist_parallel_start(),
                        false,
                        &self.options,
                    );
                }
                None => {
                    insert_spaces(
                        &mut out,
                        start_of_line,
                        chunk.dist_parallel_start(),
                        false,
                        &self.options,
                    );
                }
            }
            out.push_str(chunk.text());
            last_chunk = Some(chunk);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            recorded = self.chunks.len(),
            accepted = chunks.len(),
            bytes = out.len(),
            "synthesized layout text"
        );

        out
    }

    /// Log every recorded chunk with its derived geometry.
    #[cfg(feature = "tracing")]
    pub fn dump_state(&self) {
        for (index, chunk) in self.chunks.iter().enumerate() {
            tracing::debug!(index, chunk = %chunk, "text chunk state");
        }
    }
}

impl RenderListener for LayoutReconstructor {
    fn render_text(&mut self, event: TextRenderEvent) {
        self.record(event);
    }
}
