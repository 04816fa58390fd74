use prism_math::Vec2;

/// Axis-aligned bounding box described by an origin and a size.
///
/// Immutable: both fields are set once at construction and only read
/// afterward. Size components are not validated; a negative size produces a
/// containment test that can never succeed on that axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    position: Vec2,
    size: Vec2,
}

impl Aabb {
    /// Constructs a box from its origin corner and size.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Returns the origin corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the size.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Returns `true` when `point` lies inside the box.
    ///
    /// Each axis uses a half-open interval,
    /// `position[i] <= point[i] < position[i] + size[i]`: the lower edge is
    /// inside, the upper edge is out. These are grid/tile semantics, so
    /// adjacent boxes tile the plane without double-claiming shared edges.
    #[must_use]
    pub fn intersects_point(&self, point: &Vec2) -> bool {
        point[0] >= self.position[0]
            && point[0] < self.position[0] + self.size[0]
            && point[1] >= self.position[1]
            && point[1] < self.position[1] + self.size[1]
    }
}
