//! Geometry input: GeoJSON-style JSON and x/y CSV tables.
//!
//! JSON accepts the GeoJSON geometry objects plus two extensions understood by
//! the centroid core: `{"type": "Ring", "coordinates": [...]}` and
//! `{"type": "Bound", "min": [x, y], "max": [x, y]}`. Features and feature
//! collections are unwrapped to their geometries.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use planar::{
    Bound, Collection, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Ring,
};
use polars::prelude::*;
use serde::Deserialize;

/// `[x, y]` or `[x, y, z, ...]`; extra ordinates are dropped.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Position(f64, f64);

impl TryFrom<Vec<f64>> for Position {
    type Error = String;
    fn try_from(v: Vec<f64>) -> std::result::Result<Self, Self::Error> {
        match v.as_slice() {
            [x, y, ..] => Ok(Position(*x, *y)),
            _ => Err(format!("position needs at least 2 ordinates, got {}", v.len())),
        }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Vector2::new(p.0, p.1)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryJson {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Ring {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    Bound {
        min: Position,
        max: Position,
    },
    GeometryCollection {
        geometries: Vec<GeometryJson>,
    },
    Feature {
        geometry: Box<GeometryJson>,
    },
    FeatureCollection {
        features: Vec<GeometryJson>,
    },
}

fn points(ps: Vec<Position>) -> Vec<Point> {
    ps.into_iter().map(Point::from).collect()
}

fn polygon(rings: Vec<Vec<Position>>) -> Polygon {
    Polygon(rings.into_iter().map(|r| Ring(points(r))).collect())
}

impl From<GeometryJson> for Geometry {
    fn from(g: GeometryJson) -> Self {
        match g {
            GeometryJson::Point { coordinates } => Geometry::Point(coordinates.into()),
            GeometryJson::MultiPoint { coordinates } => MultiPoint(points(coordinates)).into(),
            GeometryJson::LineString { coordinates } => LineString(points(coordinates)).into(),
            GeometryJson::MultiLineString { coordinates } => MultiLineString(
                coordinates
                    .into_iter()
                    .map(|ls| LineString(points(ls)))
                    .collect(),
            )
            .into(),
            GeometryJson::Ring { coordinates } => Ring(points(coordinates)).into(),
            GeometryJson::Polygon { coordinates } => polygon(coordinates).into(),
            GeometryJson::MultiPolygon { coordinates } => {
                MultiPolygon(coordinates.into_iter().map(polygon).collect()).into()
            }
            GeometryJson::Bound { min, max } => Bound::new(min.into(), max.into()).into(),
            GeometryJson::GeometryCollection { geometries: members }
            | GeometryJson::FeatureCollection { features: members } => {
                Collection(members.into_iter().map(Geometry::from).collect()).into()
            }
            GeometryJson::Feature { geometry } => Geometry::from(*geometry),
        }
    }
}

/// Parse one JSON geometry document.
pub fn parse_json(text: &str) -> Result<Geometry> {
    let g: GeometryJson = serde_json::from_str(text).context("parsing geometry JSON")?;
    Ok(g.into())
}

pub fn read_json(path: &Path) -> Result<Geometry> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&text).with_context(|| format!("in {}", path.display()))
}

/// How a CSV vertex table is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Shape {
    Ring,
    Line,
    Points,
}

/// Read columns `x`, `y` of a CSV file as one vertex sequence.
pub fn read_csv(path: &Path, shape: Shape) -> Result<Geometry> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    tracing::debug!(rows = df.height(), "csv_loaded");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut pts: Vec<Point> = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => pts.push(Vector2::new(x, y)),
            _ => bail!("{}: row {row} has an empty x or y", path.display()),
        }
    }
    Ok(match shape {
        Shape::Ring => Ring(pts).into(),
        Shape::Line => LineString(pts).into(),
        Shape::Points => MultiPoint(pts).into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_polygon_with_hole() {
        let g = parse_json(
            r#"{"type": "Polygon", "coordinates": [
                [[0,0],[0,3],[4,3],[4,0],[0,0]],
                [[2,1],[3,1],[3,2],[2,2],[2,1]]
            ]}"#,
        )
        .unwrap();
        match g {
            Geometry::Polygon(p) => {
                assert_eq!(p.0.len(), 2);
                assert_eq!(p.0[1].0[2], vector![3.0, 2.0]);
            }
            other => panic!("expected polygon, got {}", other.kind()),
        }
    }

    #[test]
    fn parses_extensions_and_features() {
        let g = parse_json(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"name": "a"},
                 "geometry": {"type": "Point", "coordinates": [1, 2, 30]}},
                {"type": "Feature", "properties": null,
                 "geometry": {"type": "Bound", "min": [0, 2], "max": [1, 3]}}
            ]}"#,
        )
        .unwrap();
        let Geometry::Collection(c) = g else {
            panic!("expected collection");
        };
        assert_eq!(c.0[0], Geometry::Point(vector![1.0, 2.0]));
        assert_eq!(
            c.0[1],
            Geometry::Bound(Bound::new(vector![0.0, 2.0], vector![1.0, 3.0]))
        );
    }

    #[test]
    fn rejects_short_positions_and_unknown_types() {
        assert!(parse_json(r#"{"type": "Point", "coordinates": [1]}"#).is_err());
        assert!(parse_json(r#"{"type": "Circle", "radius": 1}"#).is_err());
    }

    #[test]
    fn csv_as_ring() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.csv");
        fs::write(&path, "x,y\n0,0\n1,0\n1,1\n0,1\n").unwrap();
        match read_csv(&path, Shape::Ring).unwrap() {
            Geometry::Ring(r) => assert_eq!(r.0.len(), 4),
            other => panic!("expected ring, got {}", other.kind()),
        }
        match read_csv(&path, Shape::Points).unwrap() {
            Geometry::MultiPoint(mp) => assert_eq!(mp.0[2], vector![1.0, 1.0]),
            other => panic!("expected multipoint, got {}", other.kind()),
        }
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "lon,lat\n0,0\n").unwrap();
        assert!(read_csv(&path, Shape::Line).is_err());
    }
}
