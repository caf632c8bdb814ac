//! Builds the GeoJSON document from the extracted positions.

use std::error::Error;
use std::io::Write;

use geo::Point;
use geojson::{Feature, FeatureCollection};

/// Wrap positions in a FeatureCollection, one Point feature per position,
/// in the order given. Every feature carries an empty properties object.
pub fn build_collection(points: &[Point<f64>]) -> FeatureCollection {
    let features: Vec<Feature> = points
        .iter()
        .map(|point| {
            // GeoJSON coordinate order is longitude first.
            let geometry = geojson::Geometry::new(geojson::Value::Point(vec![
                point.x(),
                point.y(),
            ]));

            Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(serde_json::Map::new()),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serialize the collection to `writer`, indented when `pretty` is set.
pub fn write_collection<W: Write>(
    points: &[Point<f64>],
    pretty: bool,
    writer: W,
) -> Result<(), Box<dyn Error>> {
    let collection = build_collection(points);

    if pretty {
        serde_json::to_writer_pretty(writer, &collection)?;
    } else {
        serde_json::to_writer(writer, &collection)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(points: &[Point<f64>], pretty: bool) -> serde_json::Value {
        let mut buffer = Vec::new();
        write_collection(points, pretty, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn empty_input_is_an_empty_collection() {
        let document = to_json(&[], false);
        assert_eq!(document["type"], "FeatureCollection");
        assert_eq!(document["features"], json!([]));
    }

    #[test]
    fn features_keep_input_order_and_longitude_first() {
        let points = vec![
            Point::new(-121.06083333333333, 48.47138888888889),
            Point::new(13.404954, 52.520008),
        ];
        let document = to_json(&points, false);

        let features = document["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);

        for (feature, point) in features.iter().zip(&points) {
            assert_eq!(feature["type"], "Feature");
            assert_eq!(feature["properties"], json!({}));
            assert_eq!(feature["geometry"]["type"], "Point");

            let coords = feature["geometry"]["coordinates"].as_array().unwrap();
            assert_eq!(coords[0].as_f64().unwrap(), point.x());
            assert_eq!(coords[1].as_f64().unwrap(), point.y());
        }
    }

    #[test]
    fn pretty_and_compact_agree_on_content() {
        let points = vec![Point::new(2.2945, 48.8584)];
        assert_eq!(to_json(&points, true), to_json(&points, false));
    }

    #[test]
    fn duplicates_are_kept() {
        let point = Point::new(151.2153, -33.8568);
        let document = to_json(&[point, point], false);
        let features = document["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0], features[1]);
    }
}
