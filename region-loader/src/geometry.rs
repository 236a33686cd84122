/// Integer pixel coordinate. May lie outside the image it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Closed outline: the last vertex connects back to the first.
///
/// Vertex order is draw order. Degenerate polygons (zero, one or two vertices)
/// are legal and must be tolerated by anything that renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

/// All polygons collected for one image, in draw order.
pub type RegionSet = Vec<Polygon>;

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges of the closed path, including the closing edge from the last
    /// vertex back to the first. A single vertex yields no edges.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = if self.vertices.len() < 2 { 0 } else { self.vertices.len() };
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    pub fn bounds(&self) -> Option<(Vertex, Vertex)> {
        let first = *self.vertices.first()?;
        let bounds = self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (
                Vertex::new(lo.x.min(v.x), lo.y.min(v.y)),
                Vertex::new(hi.x.max(v.x), hi.y.max(v.y)),
            )
        });
        Some(bounds)
    }

    /// Four-corner form of this polygon: itself if it already has four
    /// vertices, otherwise its bounding box in clockwise order from top-left.
    pub fn to_quad(&self) -> Option<[Vertex; 4]> {
        if let [a, b, c, d] = self.vertices[..] {
            return Some([a, b, c, d]);
        }
        let (lo, hi) = self.bounds()?;
        Some([
            lo,
            Vertex::new(hi.x, lo.y),
            hi,
            Vertex::new(lo.x, hi.y),
        ])
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vertex> for Polygon {
    fn from_iter<T: IntoIterator<Item = Vertex>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
