use crate::point::Point;

/// A continuous run of track points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSegment {
    coordinates: Vec<Point>,
}

impl TrackSegment {
    /// Creates a new segment from an ordered list of points.
    pub fn new(coordinates: Vec<Point>) -> Self {
        Self { coordinates }
    }

    /// Points of the segment in order.
    pub fn points(&self) -> &[Point] {
        &self.coordinates
    }

    /// Number of points in the segment.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if the segment has no points.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// GeoJSON positions of all points of the segment, in order.
    pub fn coordinates_as_array(&self) -> Vec<Vec<f64>> {
        self.coordinates.iter().map(Point::position).collect()
    }
}

impl From<Vec<Point>> for TrackSegment {
    fn from(value: Vec<Point>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Point> for TrackSegment {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
