//! Conversion of emitted documents into the types of the `geojson` crate.

use geojson::{Feature, FeatureCollection, GeoJson};
use serde_json::Value;

use crate::error::{Result, WaymarkError};

pub(crate) fn into_feature(value: Value) -> Result<Feature> {
    match GeoJson::from_json_value(value)? {
        GeoJson::Feature(feature) => Ok(feature),
        other => Err(unexpected("Feature", &other)),
    }
}

pub(crate) fn into_feature_collection(value: Value) -> Result<FeatureCollection> {
    match GeoJson::from_json_value(value)? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        other => Err(unexpected("FeatureCollection", &other)),
    }
}

fn unexpected(expected: &str, got: &GeoJson) -> WaymarkError {
    let got = match got {
        GeoJson::Geometry(_) => "Geometry",
        GeoJson::Feature(_) => "Feature",
        GeoJson::FeatureCollection(_) => "FeatureCollection",
    };
    WaymarkError::Conversion(format!("expected {expected}, got {got}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lonlat, Feature as _, Track, Waypoint, World};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn waypoint_converts_to_point_feature() {
        let home = Waypoint::new(-121.5, 45.5, Some(30.0), Some("home"), Some("flag"));
        let feature = home.to_geojson_feature().unwrap();

        let geometry = feature.geometry.unwrap();
        let geojson::Value::Point(position) = geometry.value else {
            panic!("expected point geometry");
        };
        assert_eq!(position.len(), 3);
        assert_abs_diff_eq!(position[0], -121.5);
        assert_abs_diff_eq!(position[1], 45.5);
        assert_abs_diff_eq!(position[2], 30.0);

        let properties = feature.properties.unwrap();
        assert_eq!(properties.get("title"), Some(&json!("home")));
        assert_eq!(properties.get("icon"), Some(&json!("flag")));
    }

    #[test]
    fn track_converts_to_multi_line_string() {
        let track = Track::new(
            vec![
                vec![lonlat!(-122.0, 45.0), lonlat!(-122.0, 46.0)],
                vec![lonlat!(-121.0, 45.0), lonlat!(-121.0, 46.0)],
            ],
            Some("track 1"),
        );
        let feature = track.to_geojson_feature().unwrap();

        assert_matches!(
            feature.geometry.map(|g| g.value),
            Some(geojson::Value::MultiLineString(lines)) if lines.len() == 2
        );
    }

    #[test]
    fn world_converts_to_feature_collection() {
        let mut world = World::empty("My Data");
        world.add_feature(Waypoint::at(0.0, 0.0));
        world.add_feature(Track::new(vec![vec![lonlat!(0.0, 0.0)]], Some("t")));

        let collection = world.to_feature_collection().unwrap();
        assert_eq!(collection.features.len(), 2);
    }

    #[test]
    fn empty_world_converts() {
        let collection = World::empty("Nothing").to_feature_collection().unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn wrong_document_kind_is_rejected() {
        let doc = Waypoint::at(1.0, 2.0).to_geojson();
        assert_matches!(into_feature_collection(doc), Err(WaymarkError::Conversion(_)));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let doc = json!({"type": "Feature", "geometry": {"type": "Point"}});
        assert_matches!(into_feature(doc), Err(WaymarkError::Conversion(_)));
    }
}
