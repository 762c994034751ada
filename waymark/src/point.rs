use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A location given by longitude and latitude in degrees, with an optional elevation.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Point {
    lon: f64,
    lat: f64,
    ele: Option<f64>,
}

impl Point {
    /// Creates a new point.
    pub const fn new(lon: f64, lat: f64, ele: Option<f64>) -> Self {
        Self { lon, lat, ele }
    }

    /// Creates a new point without elevation.
    pub const fn lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, None)
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Elevation, if known.
    pub fn ele(&self) -> Option<f64> {
        self.ele
    }

    /// GeoJSON position of the point: `[lon, lat]` or `[lon, lat, ele]`.
    pub fn position(&self) -> Vec<f64> {
        match self.ele {
            Some(ele) => vec![self.lon, self.lat, ele],
            None => vec![self.lon, self.lat],
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::lonlat(lon, lat)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((lon, lat, ele): (f64, f64, f64)) -> Self {
        Self::new(lon, lat, Some(ele))
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.ele.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.lon)?;
        seq.serialize_element(&self.lat)?;
        if let Some(ele) = &self.ele {
            seq.serialize_element(ele)?;
        }
        seq.end()
    }
}

/// Creates a new [`Point`] from longitude, latitude and optionally elevation.
///
/// ```
/// use waymark::lonlat;
///
/// let point = lonlat!(-121.5, 45.5, 30.0);
/// assert_eq!(point.ele(), Some(30.0));
/// assert_eq!(lonlat!(-122.0, 45.0).ele(), None);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::Point::lonlat($lon, $lat)
    };
    ($lon:expr, $lat:expr, $ele:expr) => {
        $crate::Point::new($lon, $lat, ::core::option::Option::Some($ele))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn position_without_elevation_has_two_coordinates() {
        let point = Point::lonlat(-122.0, 45.0);
        assert_eq!(point.position(), vec![-122.0, 45.0]);
        assert_eq!(point.position().len(), 2);
    }

    #[test]
    fn position_with_elevation_has_three_coordinates() {
        let point = Point::new(-121.5, 45.5, Some(30.0));
        assert_eq!(point.position(), vec![-121.5, 45.5, 30.0]);
    }

    #[test]
    fn zero_elevation_is_kept() {
        let point = Point::new(1.0, 2.0, Some(0.0));
        assert_eq!(point.position(), vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn serializes_as_position_array() {
        assert_eq!(json!(Point::lonlat(-121.0, 46.0)), json!([-121.0, 46.0]));
        assert_eq!(
            json!(Point::new(-121.0, 46.0, Some(12.5))),
            json!([-121.0, 46.0, 12.5])
        );
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Point::from((3.0, 4.0)), Point::lonlat(3.0, 4.0));
        assert_eq!(Point::from((3.0, 4.0, 5.0)), Point::new(3.0, 4.0, Some(5.0)));
    }

    #[test]
    fn macro_builds_points() {
        let point = crate::lonlat!(10.0, 20.0);
        assert_eq!(point.lon(), 10.0);
        assert_eq!(point.lat(), 20.0);
        assert_eq!(point.ele(), None);

        let point = crate::lonlat!(10.0, 20.0, 5.0);
        assert_eq!(point.ele(), Some(5.0));
    }
}
