use serde_json::{json, Value};

use crate::feature::{json_map, Feature, JsonMap};
use crate::segment::TrackSegment;

/// A named path made of one or more segments, represented as a GeoJSON MultiLineString.
///
/// The geometry is a MultiLineString even if the track has a single segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    name: Option<String>,
    segments: Vec<TrackSegment>,
}

impl Track {
    /// Creates a new track. Every item of `segments` becomes one [`TrackSegment`].
    pub fn new<I, S>(segments: I, name: Option<impl Into<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TrackSegment>,
    {
        Self {
            name: name.map(Into::into),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the track.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Segments of the track in order.
    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }
}

impl Feature for Track {
    fn properties(&self) -> JsonMap {
        json_map([("title", self.name.clone())])
    }

    fn geometry(&self) -> JsonMap {
        let coordinates: Vec<_> = self
            .segments
            .iter()
            .map(TrackSegment::coordinates_as_array)
            .collect();

        json_map([
            ("type", Value::from("MultiLineString")),
            ("coordinates", json!(coordinates)),
        ])
    }
}
