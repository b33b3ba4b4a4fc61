/// A point or direction in page user space.
///
/// Points carry an implicit homogeneous third coordinate of `1`, directions
/// (differences of two points) an implicit `0`. Only the planar components
/// are stored; [`Vector::cross_z`] and [`Vector::dot`] work on the planar
/// part because the homogeneous component never contributes to them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The canonical horizontal unit vector `(1, 0)`.
    pub fn unit_x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    /// Component-wise difference `self - other`.
    pub fn subtract(&self, other: &Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector has no direction; callers decide the fallback.
    pub fn normalize(&self) -> Vector {
        let len = self.length();
        Vector::new(self.x / len, self.y / len)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3-D cross product `self × other`.
    ///
    /// Both operands lie in the page plane, so the cross product points
    /// purely along z.
    pub fn cross_z(&self, other: &Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Translate by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Vector {
        Vector::new(self.x + dx, self.y + dy)
    }
}

/// A text baseline: the segment along which a run's glyphs sit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub start: Vector,
    pub end: Vector,
}

impl LineSegment {
    pub fn new(start: Vector, end: Vector) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Vector {
        Vector::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Axis-aligned bounding rectangle of the segment.
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Drop a super/subscript rise so the run sits on its parent baseline.
    ///
    /// Both endpoints move by `-rise` along the page's y axis.
    pub fn without_rise(&self, rise: f64) -> LineSegment {
        if rise == 0.0 {
            return *self;
        }
        LineSegment {
            start: self.start.translate(0.0, -rise),
            end: self.end.translate(0.0, -rise),
        }
    }
}

/// Axis-aligned rectangle in page user space (bottom-left origin).
///
/// - `x0`: left edge
/// - `y0`: bottom edge
/// - `x1`: right edge
/// - `y1`: top edge
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Build a rectangle; the corners are normalized so `x0 <= x1` and `y0 <= y1`.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Whether the point lies inside or on the border.
    pub fn contains(&self, point: &Vector) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }

    /// Whether the rectangles intersect. Rectangles that only touch along an
    /// edge are treated as separate; degenerate (zero-height) rectangles
    /// still intersect when they cross the interior.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(other.x1 <= self.x0 || other.x0 >= self.x1 || other.y1 <= self.y0 || other.y0 >= self.y1)
    }
}
