//! Prints a small set of waypoints and tracks as a GeoJSON FeatureCollection.

use std::io;

use waymark::{lonlat, Track, Waypoint, World};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let world = build_world();
    log::info!(
        "Writing world '{}' with {} features",
        world.name(),
        world.len()
    );

    world.write_pretty(io::stdout().lock())?;
    Ok(())
}

fn build_world() -> World {
    let home = Waypoint::new(-121.5, 45.5, Some(30.0), Some("home"), Some("flag"));
    let store = Waypoint::new(-121.5, 45.6, None, Some("store"), Some("dot"));

    let ts1 = vec![
        lonlat!(-122.0, 45.0),
        lonlat!(-122.0, 46.0),
        lonlat!(-121.0, 46.0),
    ];
    let ts2 = vec![lonlat!(-121.0, 45.0), lonlat!(-121.0, 46.0)];
    let ts3 = vec![lonlat!(-121.0, 45.5), lonlat!(-122.0, 45.5)];

    let track1 = Track::new(vec![ts1, ts2], Some("track 1"));
    let track2 = Track::new(vec![ts3], Some("track 2"));

    World::new(
        "My Data",
        vec![
            Box::new(home),
            Box::new(store),
            Box::new(track1),
            Box::new(track2),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_world_contents() {
        let world = build_world();
        assert_eq!(world.name(), "My Data");
        assert_eq!(world.len(), 4);

        let doc = world.to_geojson();
        assert_eq!(doc["features"][0]["properties"]["icon"], "flag");
        assert_eq!(doc["features"][3]["properties"]["title"], "track 2");
    }
}
