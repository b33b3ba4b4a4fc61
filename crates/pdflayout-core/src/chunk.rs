use std::cmp::Ordering;
use std::fmt;

use crate::geometry::Vector;

/// Scale applied to the baseline angle (radians) before truncating it to an
/// integer orientation key.
const ORIENTATION_SCALE: f64 = 1000.0;

/// One rendered text run, projected into the frame of its own baseline.
///
/// All derived geometry is computed once in [`TextChunk::new`]:
///
/// - the orientation is the unit vector from start to end, falling back to
///   `(1, 0)` for a zero-length baseline;
/// - the orientation magnitude is `atan2` of that vector scaled by 1000 and
///   truncated, so runs with nearly identical direction compare equal;
/// - the perpendicular distance (the "row") is the z component of
///   `start × orientation`, truncated toward zero;
/// - the parallel distances (the "columns") are the projections of start and
///   end onto the orientation.
///
/// Chunks order by `(orientation_magnitude, dist_perpendicular,
/// dist_parallel_start)`, see [`TextChunk::compare`].
///
/// With the `serde` feature the derived fields are serialized for
/// inspection, but deserialization reads only the text, the endpoints and
/// the space width, and recomputes the rest through [`TextChunk::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawTextChunk")
)]
pub struct TextChunk {
    text: String,
    start_location: Vector,
    end_location: Vector,
    orientation_vector: Vector,
    orientation_magnitude: i32,
    dist_perpendicular: i32,
    dist_parallel_start: f64,
    dist_parallel_end: f64,
    char_space_width: f64,
}

impl TextChunk {
    /// Build a chunk from a run's literal text, baseline endpoints and the
    /// width of one space character in the run's font.
    ///
    /// The endpoints must already have any text rise removed.
    pub fn new(
        text: impl Into<String>,
        start_location: Vector,
        end_location: Vector,
        char_space_width: f64,
    ) -> Self {
        let mut direction = end_location.subtract(&start_location);
        if direction.length() == 0.0 {
            direction = Vector::unit_x();
        }
        let orientation_vector = direction.normalize();
        let orientation_magnitude =
            (orientation_vector.y.atan2(orientation_vector.x) * ORIENTATION_SCALE) as i32;

        // Point-line distance from the origin: start and orientation both lie
        // in the page plane, so only the z component of the cross is non-zero.
        let dist_perpendicular = start_location.cross_z(&orientation_vector) as i32;

        let dist_parallel_start = orientation_vector.dot(&start_location);
        let dist_parallel_end = orientation_vector.dot(&end_location);

        Self {
            text: text.into(),
            start_location,
            end_location,
            orientation_vector,
            orientation_magnitude,
            dist_perpendicular,
            dist_parallel_start,
            dist_parallel_end,
            char_space_width,
        }
    }

    /// The literal text of the run.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_location(&self) -> Vector {
        self.start_location
    }

    pub fn end_location(&self) -> Vector {
        self.end_location
    }

    /// Unit vector along the baseline.
    pub fn orientation_vector(&self) -> Vector {
        self.orientation_vector
    }

    pub fn orientation_magnitude(&self) -> i32 {
        self.orientation_magnitude
    }

    pub fn dist_perpendicular(&self) -> i32 {
        self.dist_perpendicular
    }

    pub fn dist_parallel_start(&self) -> f64 {
        self.dist_parallel_start
    }

    pub fn dist_parallel_end(&self) -> f64 {
        self.dist_parallel_end
    }

    /// Width of a single space character in this run's font.
    pub fn char_space_width(&self) -> f64 {
        self.char_space_width
    }

    /// True if the text begins with an ASCII space.
    pub fn starts_with_space(&self) -> bool {
        self.text.starts_with(' ')
    }

    /// True if the text ends with an ASCII space.
    pub fn ends_with_space(&self) -> bool {
        self.text.ends_with(' ')
    }

    /// Whether both chunks share direction and row.
    pub fn same_line(&self, other: &TextChunk) -> bool {
        self.orientation_magnitude == other.orientation_magnitude
            && self.dist_perpendicular == other.dist_perpendicular
    }

    /// Signed gap from the end of `other` to the start of this chunk, along
    /// this chunk's orientation. Negative values mean the runs overlap.
    ///
    /// Only meaningful when both chunks are on the same line; that is not
    /// checked here.
    pub fn distance_from_end_of(&self, other: &TextChunk) -> f64 {
        self.dist_parallel_start - other.dist_parallel_end
    }

    /// Total order by orientation, then row, then starting column.
    pub fn compare(&self, other: &TextChunk) -> Ordering {
        self.orientation_magnitude
            .cmp(&other.orientation_magnitude)
            .then(self.dist_perpendicular.cmp(&other.dist_perpendicular))
            .then(self.dist_parallel_start.total_cmp(&other.dist_parallel_start))
    }
}

/// Constructor inputs of a [`TextChunk`], as read from serialized data.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTextChunk {
    text: String,
    start_location: Vector,
    end_location: Vector,
    char_space_width: f64,
}

#[cfg(feature = "serde")]
impl From<RawTextChunk> for TextChunk {
    fn from(raw: RawTextChunk) -> Self {
        TextChunk::new(
            raw.text,
            raw.start_location,
            raw.end_location,
            raw.char_space_width,
        )
    }
}

impl fmt::Display for TextChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @({}, {}) -> ({}, {}) orientation={} perpendicular={} parallel={}..{}",
            self.text,
            self.start_location.x,
            self.start_location.y,
            self.end_location.x,
            self.end_location.y,
            self.orientation_magnitude,
            self.dist_perpendicular,
            self.dist_parallel_start,
            self.dist_parallel_end,
        )
    }
}
