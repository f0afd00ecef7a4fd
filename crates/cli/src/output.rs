//! Artifact encoders for a rendered polygon: JSON document or stroked SVG.

use anyhow::{Context, Result};
use polywalk::prelude::{Canvas, PolygonParams, RenderedPolygon};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
pub struct ParamsDoc {
    pub sides: i64,
    pub min_angle: i64,
    pub max_angle: i64,
    pub common_diff: i64,
}

impl From<&PolygonParams> for ParamsDoc {
    fn from(p: &PolygonParams) -> Self {
        Self {
            sides: p.sides,
            min_angle: p.min_angle,
            max_angle: p.max_angle,
            common_diff: p.common_diff,
        }
    }
}

/// Serializable view of a render.
#[derive(Serialize)]
pub struct PolygonDoc {
    pub params: ParamsDoc,
    pub canvas: [f64; 2],
    pub angles: Vec<f64>,
    pub lengths: Vec<f64>,
    pub loss: f64,
    pub iterations: usize,
    pub points: Vec<[f64; 2]>,
}

impl PolygonDoc {
    pub fn new(params: &PolygonParams, canvas: Canvas, poly: &RenderedPolygon) -> Self {
        Self {
            params: params.into(),
            canvas: [canvas.width, canvas.height],
            angles: poly.angles.clone(),
            lengths: poly.lengths.clone(),
            loss: poly.loss,
            iterations: poly.iterations,
            points: poly.points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

/// Closed SVG path (`M … L … Z`) through `points`.
pub fn svg_path_data(points: &[[f64; 2]]) -> String {
    let mut d = String::new();
    for (i, [x, y]) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        // Writing to a String cannot fail.
        let _ = write!(d, "{cmd}{x:.3},{y:.3} ");
    }
    if !d.is_empty() {
        d.push('Z');
    }
    d
}

/// Standalone SVG document sized to the canvas.
pub fn svg_document(doc: &PolygonDoc) -> String {
    let [w, h] = doc.canvas;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  \
         <path d=\"{}\" fill=\"none\" stroke=\"black\"/>\n</svg>\n",
        svg_path_data(&doc.points)
    )
}

/// Write `doc` to `out`: SVG when the extension is `.svg`, pretty JSON otherwise.
pub fn write_artifact(out: &Path, doc: &PolygonDoc) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let is_svg = out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    let bytes = if is_svg {
        svg_document(doc).into_bytes()
    } else {
        serde_json::to_vec_pretty(doc)?
    };
    fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square_doc() -> PolygonDoc {
        PolygonDoc {
            params: ParamsDoc {
                sides: 4,
                min_angle: 90,
                max_angle: 90,
                common_diff: 0,
            },
            canvas: [100.0, 100.0],
            angles: vec![90.0; 4],
            lengths: vec![10.0; 4],
            loss: 0.0,
            iterations: 1,
            points: vec![[45.0, 45.0], [55.0, 45.0], [55.0, 55.0], [45.0, 55.0], [45.0, 45.0]],
        }
    }

    #[test]
    fn path_data_is_closed() {
        let d = svg_path_data(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(d, "M0.000,0.000 L1.000,0.000 L0.000,1.000 Z");
        assert_eq!(svg_path_data(&[]), "");
    }

    #[test]
    fn writes_svg_or_json_by_extension() {
        let dir = tempdir().unwrap();
        let doc = square_doc();

        let svg = dir.path().join("nested/square.svg");
        write_artifact(&svg, &doc).unwrap();
        let text = fs::read_to_string(&svg).unwrap();
        assert!(text.starts_with("<svg"));
        assert!(text.contains("viewBox=\"0 0 100 100\""));

        let json = dir.path().join("square.json");
        write_artifact(&json, &doc).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(&json).unwrap()).unwrap();
        assert_eq!(v["points"].as_array().unwrap().len(), 5);
        assert_eq!(v["params"]["sides"], 4);
    }
}
