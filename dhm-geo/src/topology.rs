//! TopoJSON boundary documents.
//!
//! A topology stores every shared boundary once as an "arc"; polygons
//! reference arcs by index (negative indices mean the arc is walked
//! backwards, `~i`). Quantized topologies carry a `transform` and store
//! arcs as integer deltas.
//!
//! # Usage
//!
//! ```rust
//! use dhm_geo::Topology;
//!
//! let topo = Topology::from_json(r#"{
//!     "type": "Topology",
//!     "arcs": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]],
//!     "objects": {
//!         "districts": {
//!             "type": "GeometryCollection",
//!             "geometries": [
//!                 {"type": "Polygon", "id": "AY", "arcs": [[0]], "properties": {"name": "Ariyalur"}}
//!             ]
//!         }
//!     }
//! }"#).unwrap();
//!
//! let features = topo.features("districts").unwrap();
//! assert_eq!(features.len(), 1);
//! assert_eq!(features[0].id.as_deref(), Some("AY"));
//! assert_eq!(features[0].name, "Ariyalur");
//! ```

use std::collections::HashMap;

use anyhow::{bail, Context};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;

/// A decoded district boundary with the properties needed to join data.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographyFeature {
    /// Stable render key, unique within one decode (`geo-{index}`).
    pub key: String,
    /// Join key matched against district record ids.
    pub id: Option<String>,
    /// Display name from `properties.name`.
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// Quantization transform for delta-encoded arcs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    // Points, lines and anything else carry no area to fill.
    #[serde(other)]
    Other,
}

/// A parsed TopoJSON document.
#[derive(Debug, Deserialize)]
pub struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: HashMap<String, Geometry>,
}

impl Topology {
    /// Parse a TopoJSON document.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let topology: Topology =
            serde_json::from_str(json).context("failed to parse topology document")?;
        log::debug!(
            "Parsed topology: {} arcs, objects {:?}",
            topology.arcs.len(),
            topology.object_names()
        );
        Ok(topology)
    }

    /// Names of the top-level objects, sorted.
    pub fn object_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.objects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    /// Convert every polygonal geometry in `object` into a feature, in
    /// document order.
    pub fn features(&self, object: &str) -> anyhow::Result<Vec<GeographyFeature>> {
        let Some(root) = self.objects.get(object) else {
            bail!(
                "topology has no object named {:?} (available: {:?})",
                object,
                self.object_names()
            );
        };

        let arcs = self.decode_arcs()?;
        let mut features = Vec::new();
        collect_features(root, &arcs, &mut features)?;
        log::info!("Decoded {} features from topology object {:?}", features.len(), object);
        Ok(features)
    }

    /// Absolute coordinates of every arc, undoing quantization if present.
    fn decode_arcs(&self) -> anyhow::Result<Vec<Vec<Coord<f64>>>> {
        self.arcs
            .iter()
            .enumerate()
            .map(|(arc_index, arc)| {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .map(|position| {
                        let [px, py] = match position.as_slice() {
                            [px, py, ..] => [*px, *py],
                            _ => bail!("arc {} has a position with fewer than two values", arc_index),
                        };
                        Ok(match self.transform {
                            Some(Transform { scale, translate }) => {
                                x += px;
                                y += py;
                                Coord {
                                    x: x * scale[0] + translate[0],
                                    y: y * scale[1] + translate[1],
                                }
                            }
                            None => Coord { x: px, y: py },
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect()
    }
}

fn collect_features(
    geometry: &Geometry,
    arcs: &[Vec<Coord<f64>>],
    out: &mut Vec<GeographyFeature>,
) -> anyhow::Result<()> {
    let (polygons, id, properties) = match geometry {
        Geometry::GeometryCollection { geometries } => {
            for child in geometries {
                collect_features(child, arcs, out)?;
            }
            return Ok(());
        }
        Geometry::Polygon { arcs: rings, id, properties } => {
            (vec![polygon(rings, arcs)?], id, properties)
        }
        Geometry::MultiPolygon { arcs: polygons, id, properties } => {
            let polygons = polygons
                .iter()
                .map(|rings| polygon(rings, arcs))
                .collect::<anyhow::Result<Vec<_>>>()?;
            (polygons, id, properties)
        }
        Geometry::Other => return Ok(()),
    };

    let id = id.as_ref().and_then(join_key);
    let name = properties
        .as_ref()
        .and_then(|p| p.name.clone())
        .or_else(|| id.clone())
        .unwrap_or_default();

    out.push(GeographyFeature {
        key: format!("geo-{}", out.len()),
        id,
        name,
        geometry: MultiPolygon::new(polygons.into_iter().flatten().collect()),
    });
    Ok(())
}

/// Feature ids may be strings or numbers; both join as strings.
fn join_key(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Build a polygon from ring arc lists; first ring is the exterior.
/// Returns `None` for a polygon with no rings.
fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Coord<f64>>]) -> anyhow::Result<Option<Polygon<f64>>> {
    let mut rings = rings.iter().map(|ring| stitch_ring(ring, arcs));
    let Some(exterior) = rings.next().transpose()? else {
        return Ok(None);
    };
    let interiors = rings.collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Some(Polygon::new(exterior, interiors)))
}

fn stitch_ring(indices: &[i64], arcs: &[Vec<Coord<f64>>]) -> anyhow::Result<LineString<f64>> {
    let mut coords: Vec<Coord<f64>> = Vec::new();

    for &index in indices {
        let (arc_index, reversed) = if index < 0 {
            ((!index) as usize, true)
        } else {
            (index as usize, false)
        };
        let arc = arcs.get(arc_index).with_context(|| {
            format!("arc reference {} out of range ({} arcs)", index, arcs.len())
        })?;

        // Consecutive arcs share an endpoint.
        let skip = usize::from(!coords.is_empty());
        if reversed {
            coords.extend(arc.iter().rev().skip(skip).copied());
        } else {
            coords.extend(arc.iter().skip(skip).copied());
        }
    }

    Ok(LineString::new(coords))
}
