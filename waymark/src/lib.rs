//! Waypoints, tracks and their representation as a GeoJSON FeatureCollection.
//!
//! Every type that implements [`Feature`] supplies its `properties` and `geometry` payloads and
//! gets the GeoJSON Feature document assembled by [`Feature::to_geojson`]. A [`World`] collects
//! features and produces the FeatureCollection.
//!
//! ```
//! use waymark::{lonlat, Track, Waypoint, World};
//!
//! let mut world = World::empty("My Data");
//! world.add_feature(Waypoint::at(-121.5, 45.5).with_name("home"));
//! world.add_feature(Track::new(
//!     vec![vec![lonlat!(-122.0, 45.0), lonlat!(-122.0, 46.0)]],
//!     Some("track 1"),
//! ));
//!
//! let doc = world.to_geojson();
//! assert_eq!(doc["features"][1]["geometry"]["type"], "MultiLineString");
//! ```

pub mod error;
pub mod feature;

#[cfg(feature = "geojson")]
mod geojson;

mod point;
mod segment;
mod track;
mod waypoint;
mod world;

pub use error::{Result, WaymarkError};
pub use feature::{compact, Feature, JsonMap};
pub use point::Point;
pub use segment::TrackSegment;
pub use track::Track;
pub use waypoint::Waypoint;
pub use world::World;
