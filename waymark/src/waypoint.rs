use serde_json::{json, Value};

use crate::feature::{json_map, Feature, JsonMap};
use crate::point::Point;

/// A single named location, represented as a GeoJSON Point.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    point: Point,
    name: Option<String>,
    icon: Option<String>,
}

impl Waypoint {
    /// Creates a new waypoint.
    pub fn new(
        lon: f64,
        lat: f64,
        ele: Option<f64>,
        name: Option<impl Into<String>>,
        icon: Option<impl Into<String>>,
    ) -> Self {
        Self {
            point: Point::new(lon, lat, ele),
            name: name.map(Into::into),
            icon: icon.map(Into::into),
        }
    }

    /// Creates an unnamed waypoint at the given location, without elevation and icon.
    pub fn at(lon: f64, lat: f64) -> Self {
        Self {
            point: Point::lonlat(lon, lat),
            name: None,
            icon: None,
        }
    }

    /// Sets the elevation.
    pub fn with_ele(mut self, ele: f64) -> Self {
        self.point = Point::new(self.point.lon(), self.point.lat(), Some(ele));
        self
    }

    /// Sets the name, emitted as the `title` property.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the icon (marker type).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Location of the waypoint.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.point.lon()
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.point.lat()
    }

    /// Elevation, if known.
    pub fn ele(&self) -> Option<f64> {
        self.point.ele()
    }

    /// Name of the waypoint.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Icon of the waypoint.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl Feature for Waypoint {
    fn properties(&self) -> JsonMap {
        json_map([
            ("title", self.name.clone()),
            ("icon", self.icon.clone()),
        ])
    }

    fn geometry(&self) -> JsonMap {
        json_map([
            ("type", Value::from("Point")),
            ("coordinates", json!(self.point)),
        ])
    }
}
