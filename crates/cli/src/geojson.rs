//! Polygon rings inside GeoJSON-like documents.
//!
//! Accepts a FeatureCollection, a single Feature, or a bare geometry. Only
//! `Polygon` and `MultiPolygon` geometries carry rings; everything else is
//! skipped. The document stays a `serde_json::Value` so rings can be reversed
//! in place without dropping members we do not model (properties, altitude,
//! foreign members).

use anyhow::{bail, Context, Result};
use nalgebra::Vector2;
use serde::Serialize;
use serde_json::Value;
use winding::{Orientation, Winding, WindingError};

/// Position of a ring inside the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RingRef {
    pub feature: usize,
    pub polygon: usize,
    pub ring: usize,
}

impl RingRef {
    /// Ring 0 of each polygon is its exterior; later rings are holes.
    #[inline]
    pub fn is_exterior(&self) -> bool {
        self.ring == 0
    }
}

/// One output row of `winding count`.
#[derive(Debug, Serialize)]
pub struct RingReport {
    #[serde(flatten)]
    pub at: RingRef,
    pub vertices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotations: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RingReport {
    pub fn new(at: RingRef, vertices: usize, result: Result<Winding, WindingError>) -> Self {
        match result {
            Ok(w) => Self {
                at,
                vertices,
                total_angle: Some(w.total_angle),
                rotations: Some(w.rotations),
                orientation: w.orientation().map(label),
                error: None,
            },
            Err(e) => Self {
                at,
                vertices,
                total_angle: None,
                rotations: None,
                orientation: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn label(o: Orientation) -> &'static str {
    match o {
        Orientation::CounterClockwise => "ccw",
        Orientation::Clockwise => "cw",
    }
}

/// Call `f` with every polygon ring's position array, in document order.
pub fn for_each_ring<F>(doc: &mut Value, mut f: F) -> Result<()>
where
    F: FnMut(RingRef, &mut Vec<Value>) -> Result<()>,
{
    let kind = doc.get("type").and_then(Value::as_str).map(str::to_owned);
    match kind.as_deref() {
        Some("FeatureCollection") => {
            let features = doc
                .get_mut("features")
                .and_then(Value::as_array_mut)
                .context("FeatureCollection without a \"features\" array")?;
            for (i, feature) in features.iter_mut().enumerate() {
                if let Some(geometry) = feature.get_mut("geometry") {
                    geometry_rings(geometry, i, &mut f)?;
                }
            }
        }
        Some("Feature") => {
            if let Some(geometry) = doc.get_mut("geometry") {
                geometry_rings(geometry, 0, &mut f)?;
            }
        }
        Some(_) => geometry_rings(doc, 0, &mut f)?,
        None => bail!("document has no \"type\" member"),
    }
    Ok(())
}

fn geometry_rings<F>(geometry: &mut Value, feature: usize, f: &mut F) -> Result<()>
where
    F: FnMut(RingRef, &mut Vec<Value>) -> Result<()>,
{
    let kind = geometry
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned);
    let Some(coords) = geometry
        .get_mut("coordinates")
        .and_then(Value::as_array_mut)
    else {
        return Ok(());
    };
    match kind.as_deref() {
        Some("Polygon") => polygon_rings(coords, feature, 0, f),
        Some("MultiPolygon") => {
            for (p, polygon) in coords.iter_mut().enumerate() {
                let rings = polygon
                    .as_array_mut()
                    .with_context(|| format!("feature {feature}: polygon {p} is not an array"))?;
                polygon_rings(rings, feature, p, f)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn polygon_rings<F>(rings: &mut [Value], feature: usize, polygon: usize, f: &mut F) -> Result<()>
where
    F: FnMut(RingRef, &mut Vec<Value>) -> Result<()>,
{
    for (ring, positions) in rings.iter_mut().enumerate() {
        let positions = positions.as_array_mut().with_context(|| {
            format!("feature {feature}: polygon {polygon} ring {ring} is not an array")
        })?;
        f(
            RingRef {
                feature,
                polygon,
                ring,
            },
            positions,
        )?;
    }
    Ok(())
}

/// `[x, y, ...]` positions as points; extra members (altitude) are ignored.
pub fn ring_points(positions: &[Value]) -> Result<Vec<Vector2<f64>>> {
    positions
        .iter()
        .enumerate()
        .map(|(i, pos)| -> Result<Vector2<f64>> {
            let xy = pos
                .as_array()
                .filter(|a| a.len() >= 2)
                .with_context(|| format!("position {i} is not an [x, y] array"))?;
            match (xy[0].as_f64(), xy[1].as_f64()) {
                (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
                _ => bail!("position {i} has non-numeric coordinates"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect_refs(doc: &mut Value) -> Vec<(RingRef, usize)> {
        let mut out = Vec::new();
        for_each_ring(doc, |at, positions| {
            out.push((at, positions.len()));
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn walks_polygons_and_multipolygons() {
        let mut doc = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [4, 0], [4, 4], [0, 0]], [[1, 1], [2, 1], [1, 2], [1, 1]]]
                }},
                {"type": "Feature", "properties": {}, "geometry": null},
                {"type": "Feature", "properties": {}, "geometry": {
                    "type": "Point", "coordinates": [1, 2]
                }},
                {"type": "Feature", "properties": {}, "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[0, 0], [1, 0], [1, 1]]], [[[5, 5], [6, 5], [6, 6], [5, 6]]]]
                }}
            ]
        });
        let refs = collect_refs(&mut doc);
        let at = |feature, polygon, ring| RingRef {
            feature,
            polygon,
            ring,
        };
        assert_eq!(
            refs,
            vec![
                (at(0, 0, 0), 4),
                (at(0, 0, 1), 4),
                (at(3, 0, 0), 3),
                (at(3, 1, 0), 4),
            ]
        );
        assert!(refs[0].0.is_exterior() && !refs[1].0.is_exterior());
    }

    #[test]
    fn single_feature_and_bare_geometry() {
        let mut feature = json!({"type": "Feature", "geometry": {
            "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 1]]]
        }});
        assert_eq!(collect_refs(&mut feature).len(), 1);

        let mut bare = json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [0, 1]]]});
        assert_eq!(collect_refs(&mut bare).len(), 1);

        let mut untyped = json!({"coordinates": []});
        assert!(for_each_ring(&mut untyped, |_, _| Ok(())).is_err());
    }

    #[test]
    fn positions_keep_only_xy() {
        let positions = json!([[0.5, 1.5, 100.0], [2, 3]]);
        let pts = ring_points(positions.as_array().unwrap()).unwrap();
        assert_eq!(pts, vec![Vector2::new(0.5, 1.5), Vector2::new(2.0, 3.0)]);

        let bad = json!([[0.5], [1, "x"]]);
        assert!(ring_points(bad.as_array().unwrap()).is_err());
    }

    #[test]
    fn report_serializes_success_and_failure() {
        let at = RingRef {
            feature: 2,
            polygon: 0,
            ring: 1,
        };
        let ok = RingReport::new(
            at,
            4,
            Ok(Winding {
                total_angle: -std::f64::consts::TAU,
                rotations: -1,
            }),
        );
        let v = serde_json::to_value(&ok).unwrap();
        assert_eq!(v["feature"], 2);
        assert_eq!(v["ring"], 1);
        assert_eq!(v["rotations"], -1);
        assert_eq!(v["orientation"], "cw");
        assert!(v.get("error").is_none());

        let err = RingReport::new(at, 2, Err(WindingError::TooFewPoints { len: 2 }));
        let v = serde_json::to_value(&err).unwrap();
        assert!(v.get("rotations").is_none());
        assert!(v["error"].as_str().unwrap().contains("at least 3"));
    }
}
