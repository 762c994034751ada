use std::fmt::{Debug, Formatter};
use std::io::Write;

use serde_json::{json, Value};

use crate::error::Result;
use crate::feature::Feature;

/// Ordered collection of features, serialized as a GeoJSON FeatureCollection.
pub struct World {
    name: String,
    features: Vec<Box<dyn Feature>>,
}

impl World {
    /// Creates a new world from the initial list of features.
    pub fn new(name: impl Into<String>, features: Vec<Box<dyn Feature>>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Creates a new world without features.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, vec![])
    }

    /// Name of the world. It is not a part of the GeoJSON output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Features of the world in insertion order.
    pub fn features(&self) -> &[Box<dyn Feature>] {
        &self.features
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the world has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Appends the feature to the end of the collection.
    pub fn add_feature(&mut self, feature: impl Feature + 'static) {
        self.features.push(Box::new(feature));
        log::debug!(
            "Added feature to world '{}', {} features total",
            self.name,
            self.features.len()
        );
    }

    /// Returns the GeoJSON FeatureCollection document of the world.
    pub fn to_geojson(&self) -> Value {
        log::debug!(
            "Serializing world '{}' with {} features",
            self.name,
            self.features.len()
        );

        let features: Vec<Value> = self
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                log::trace!("Serializing feature {index}");
                feature.to_geojson()
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }

    /// Renders the document as pretty-printed JSON.
    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_geojson())?)
    }

    /// Renders the document as single-line JSON.
    pub fn to_string_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_geojson())?)
    }

    /// Writes the pretty-printed document into `writer`, followed by a newline.
    pub fn write_pretty<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.to_geojson())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Converts the document into [`geojson::FeatureCollection`].
    #[cfg(feature = "geojson")]
    pub fn to_feature_collection(&self) -> Result<geojson::FeatureCollection> {
        crate::geojson::into_feature_collection(self.to_geojson())
    }
}

impl Extend<Box<dyn Feature>> for World {
    fn extend<T: IntoIterator<Item = Box<dyn Feature>>>(&mut self, iter: T) {
        self.features.extend(iter);
    }
}

impl Debug for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("name", &self.name)
            .field("features", &self.features.len())
            .finish()
    }
}
