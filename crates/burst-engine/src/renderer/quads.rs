//! Cube face geometry for renderers that want explicit quads instead of instancing.

use glam::Vec3;

use super::instance::RenderBuffer;

/// Floats per expanded vertex: x, y, z, r, g, b.
pub const FACE_VERTEX_FLOATS: usize = 6;

/// Vertices per expanded cube: 6 faces × 2 triangles × 3 corners.
pub const CUBE_VERTICES: usize = 36;

/// Corners of the six faces of a unit cube at the origin, each as a fan.
/// Order: upper, bottom, north, south, west, east.
pub fn unit_cube_faces() -> [[Vec3; 4]; 6] {
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    [
        [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)],
        [v(0.0, 0.0, 1.0), v(1.0, 0.0, 1.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 1.0)],
        [v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 1.0)],
        [v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(1.0, 0.0, 1.0), v(1.0, 0.0, 0.0)],
        [v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(0.0, 1.0, 0.0)],
        [v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 0.0, 1.0)],
    ]
}

/// Unit cube as a flat triangle list (x, y, z per vertex), for instanced drawing.
pub fn unit_cube_triangles() -> Vec<f32> {
    let mut out = Vec::with_capacity(CUBE_VERTICES * 3);
    for face in unit_cube_faces() {
        for corner in fan_to_triangles(&face) {
            out.extend_from_slice(&corner.to_array());
        }
    }
    out
}

/// Split a four-corner fan into two triangles.
fn fan_to_triangles(quad: &[Vec3; 4]) -> [Vec3; 6] {
    [quad[0], quad[1], quad[2], quad[0], quad[2], quad[3]]
}

/// Expand every instance into 36 colored vertices (triangle list).
pub fn build_face_vertices(buffer: &RenderBuffer, out: &mut Vec<f32>) {
    out.clear();
    out.reserve(buffer.instances.len() * CUBE_VERTICES * FACE_VERTEX_FLOATS);

    let faces = unit_cube_faces();
    for inst in &buffer.instances {
        let corner = inst.corner();
        let color = inst.color();
        for face in &faces {
            for v in fan_to_triangles(face) {
                let p = corner + v * inst.size;
                out.extend_from_slice(&[p.x, p.y, p.z, color[0], color[1], color[2]]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::instance::CubeInstance;

    #[test]
    fn every_face_is_axis_aligned() {
        for face in unit_cube_faces() {
            let fixed_axes = (0..3)
                .filter(|&axis| face.iter().all(|c| c[axis] == face[0][axis]))
                .count();
            assert_eq!(fixed_axes, 1, "face {:?}", face);
        }
    }

    #[test]
    fn faces_cover_all_six_sides() {
        let mut sides: Vec<(usize, f32)> = unit_cube_faces()
            .iter()
            .map(|face| {
                let axis = (0..3).find(|&a| face.iter().all(|c| c[a] == face[0][a])).unwrap();
                (axis, face[0][axis])
            })
            .collect();
        sides.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(sides, vec![(0, 0.0), (0, 1.0), (1, 0.0), (1, 1.0), (2, 0.0), (2, 1.0)]);
    }

    #[test]
    fn unit_template_has_36_vertices() {
        assert_eq!(unit_cube_triangles().len(), CUBE_VERTICES * 3);
    }

    #[test]
    fn expansion_offsets_and_colors() {
        let mut buf = RenderBuffer::new();
        buf.push(CubeInstance::new(Vec3::new(10.0, 0.0, 0.0), 2.0, [1.0, 0.0, 0.5]));
        let mut out = Vec::new();
        build_face_vertices(&buf, &mut out);
        assert_eq!(out.len(), CUBE_VERTICES * FACE_VERTEX_FLOATS);
        for vertex in out.chunks_exact(FACE_VERTEX_FLOATS) {
            assert!(vertex[0] == 10.0 || vertex[0] == 12.0);
            assert!(vertex[1] == 0.0 || vertex[1] == 2.0);
            assert_eq!(&vertex[3..], &[1.0, 0.0, 0.5]);
        }
    }
}
