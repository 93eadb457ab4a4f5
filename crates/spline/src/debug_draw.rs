//! Line lists for previewing a spline.
//!
//! Everything here only reads the public tessellation of a
//! [`CatmullRomSpline`]; an external renderer decides how to draw the lines.

use glam::Vec3;
use spline_config::PreviewConfig;

use crate::spline::CatmullRomSpline;

/// Polyline color (white)
pub const SPLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Normal line color (red)
pub const NORMAL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Tangent line color (cyan)
pub const TANGENT_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 4],
}

/// Line-list vertex ready for GPU upload.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// One line between each pair of consecutive samples. Closed loops also get
/// the line from the last sample back to the first.
pub fn spline_lines(spline: &CatmullRomSpline, color: [f32; 4]) -> Vec<DebugLine> {
    let positions = spline.positions();
    let mut lines: Vec<DebugLine> = positions
        .windows(2)
        .map(|pair| DebugLine {
            start: pair[0],
            end: pair[1],
            color,
        })
        .collect();

    if let (true, Some(first), Some(last)) =
        (spline.closed_loop(), positions.first(), positions.last())
    {
        lines.push(DebugLine {
            start: *last,
            end: *first,
            color,
        });
    }

    lines
}

/// Per-sample normal lines, `extrusion` times the stored normal.
pub fn normal_lines(spline: &CatmullRomSpline, extrusion: f32, color: [f32; 4]) -> Vec<DebugLine> {
    vector_lines(spline.positions(), spline.normals(), extrusion, color)
}

/// Per-sample tangent lines, `extrusion` times the stored tangent.
pub fn tangent_lines(spline: &CatmullRomSpline, extrusion: f32, color: [f32; 4]) -> Vec<DebugLine> {
    vector_lines(spline.positions(), spline.tangents(), extrusion, color)
}

fn vector_lines(
    positions: &[Vec3],
    vectors: &[Vec3],
    extrusion: f32,
    color: [f32; 4],
) -> Vec<DebugLine> {
    positions
        .iter()
        .zip(vectors)
        .map(|(position, vector)| DebugLine {
            start: *position,
            end: *position + *vector * extrusion,
            color,
        })
        .collect()
}

/// All lines the preview toggles ask for. Empty when preview is off.
pub fn preview_lines(spline: &CatmullRomSpline, preview: &PreviewConfig) -> Vec<DebugLine> {
    if !preview.preview_spline {
        return Vec::new();
    }

    let mut lines = spline_lines(spline, SPLINE_COLOR);
    if preview.draw_normals {
        lines.extend(normal_lines(spline, preview.normal_extrusion, NORMAL_COLOR));
    }
    if preview.draw_tangents {
        lines.extend(tangent_lines(spline, preview.tangent_extrusion, TANGENT_COLOR));
    }
    lines
}

/// Flatten lines into a line-list vertex buffer (two vertices per line).
pub fn to_vertices(lines: &[DebugLine]) -> Vec<LineVertex> {
    lines
        .iter()
        .flat_map(|line| {
            [
                LineVertex {
                    position: line.start.to_array(),
                    color: line.color,
                },
                LineVertex {
                    position: line.end.to_array(),
                    color: line.color,
                },
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spline(closed_loop: bool) -> CatmullRomSpline {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, -2.0),
        ];
        CatmullRomSpline::configure(points, 3, closed_loop).unwrap()
    }

    #[test]
    fn test_open_polyline() {
        let spline = spline(false);
        let lines = spline_lines(&spline, SPLINE_COLOR);

        assert_eq!(lines.len(), spline.positions().len() - 1);
        assert_eq!(lines[0].start, spline.positions()[0]);
        assert_eq!(lines[0].end, spline.positions()[1]);
    }

    #[test]
    fn test_closed_polyline_wraps() {
        let spline = spline(true);
        let lines = spline_lines(&spline, SPLINE_COLOR);
        let positions = spline.positions();

        assert_eq!(lines.len(), positions.len());
        let closing = lines[lines.len() - 1];
        assert_eq!(closing.start, positions[positions.len() - 1]);
        assert_eq!(closing.end, positions[0]);
    }

    #[test]
    fn test_normal_lines_scaled() {
        let spline = spline(false);
        let lines = normal_lines(&spline, 2.0, NORMAL_COLOR);

        assert_eq!(lines.len(), spline.normals().len());
        for line in &lines {
            assert!(((line.end - line.start).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_preview_toggles() {
        let spline = spline(false);
        let samples = spline.positions().len();

        assert!(preview_lines(&spline, &PreviewConfig::default()).is_empty());

        let mut preview = PreviewConfig {
            preview_spline: true,
            ..Default::default()
        };
        assert_eq!(preview_lines(&spline, &preview).len(), samples - 1);

        preview.draw_normals = true;
        preview.draw_tangents = true;
        preview.tangent_extrusion = 0.5;
        let lines = preview_lines(&spline, &preview);
        assert_eq!(lines.len(), samples - 1 + 2 * samples);
        assert_eq!(lines[lines.len() - 1].color, TANGENT_COLOR);
    }

    #[test]
    fn test_vertex_buffer() {
        let spline = spline(true);
        let lines = spline_lines(&spline, SPLINE_COLOR);
        let vertices = to_vertices(&lines);

        assert_eq!(vertices.len(), lines.len() * 2);
        assert_eq!(vertices[1].position, lines[0].end.to_array());

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), vertices.len() * std::mem::size_of::<LineVertex>());
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }
}
