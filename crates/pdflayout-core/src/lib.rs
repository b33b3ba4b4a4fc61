//! pdflayout-core: layout-preserving text reconstruction.
//!
//! Turns the unordered text runs reported by a PDF content stream
//! interpreter into plain text whose rows and columns follow the rendered
//! page. Runs become [`TextChunk`]s, which a [`LayoutReconstructor`]
//! collects and later orders, groups into lines, and pads with spaces.
//!
//! ```
//! use pdflayout_core::{LayoutReconstructor, LineSegment, RenderListener, TextRenderEvent, Vector};
//!
//! let mut reconstructor = LayoutReconstructor::new();
//! reconstructor.render_text(TextRenderEvent::new(
//!     "World",
//!     LineSegment::new(Vector::new(45.0, 700.0), Vector::new(75.0, 700.0)),
//!     0.0,
//!     10.0,
//! ));
//! reconstructor.render_text(TextRenderEvent::new(
//!     "Hello",
//!     LineSegment::new(Vector::new(0.0, 700.0), Vector::new(30.0, 700.0)),
//!     0.0,
//!     10.0,
//! ));
//! assert_eq!(reconstructor.resultant_text(), "Hello  World");
//! ```

pub mod chunk;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod listener;
pub mod reconstructor;

pub use chunk::TextChunk;
pub use error::LayoutError;
pub use filter::{ChunkFilter, FilterMode, RegionFilter};
pub use geometry::{LineSegment, Rect, Vector};
pub use listener::{ImageEvent, RenderListener, TextRenderEvent};
pub use reconstructor::{
    LayoutOptions, LayoutReconstructor, insert_spaces, is_chunk_at_word_boundary,
};
