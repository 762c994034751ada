//! The [`Feature`] trait and the routine that assembles a GeoJSON Feature document.

use serde_json::{json, Map, Value};

/// Key/value mapping produced by [`Feature::properties`] and [`Feature::geometry`].
///
/// A `null` value marks an absent entry. Such entries are removed before the document is
/// assembled.
pub type JsonMap = Map<String, Value>;

/// A feature is a geographic object that can be represented as a GeoJSON Feature.
///
/// Implementors supply the property and geometry payloads, the document itself is put together
/// by [`Feature::to_geojson`].
pub trait Feature {
    /// Properties of the feature.
    fn properties(&self) -> JsonMap;

    /// Geometry object of the feature. Must contain at least the `type` and `coordinates` keys.
    fn geometry(&self) -> JsonMap;

    /// Returns the GeoJSON Feature document of this feature.
    fn to_geojson(&self) -> Value {
        json!({
            "type": "Feature",
            "properties": compact(self.properties()),
            "geometry": compact(self.geometry()),
        })
    }

    /// Converts the feature document into [`geojson::Feature`].
    #[cfg(feature = "geojson")]
    fn to_geojson_feature(&self) -> crate::Result<geojson::Feature> {
        crate::geojson::into_feature(self.to_geojson())
    }
}

/// Removes all absent (`null`) entries from the map, keeping order of the rest.
pub fn compact(map: JsonMap) -> JsonMap {
    map.into_iter().filter(|(_, v)| !v.is_null()).collect()
}

/// Builds a [`JsonMap`] from `(key, value)` pairs.
///
/// `None` values are stored as `null` and later dropped by [`compact`].
pub(crate) fn json_map<'a, I, V>(entries: I) -> JsonMap
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.into()))
        .collect()
}
