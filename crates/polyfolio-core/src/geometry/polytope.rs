//! Regular 4D polytopes: vertices, edges, edge sampling and 4D -> 3D projection.

use glam::{Vec3, Vec4};
use rand::Rng;

/// Distance of the 4D eye from the origin along +W for the perspective divide.
const PROJECTION_DISTANCE: f32 = 3.0;
/// Fixed "tumble" applied before projection so the W axis is visible.
const ROTATION_XW: f32 = 0.55;
const ROTATION_YZ: f32 = 0.35;
/// Edge jitter relative to the unit-scaled polytope.
const EDGE_JITTER: f32 = 0.015;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polytope {
    /// 5-cell (4-simplex)
    Pentachoron,
    /// 8-cell (hypercube)
    Tesseract,
    /// 16-cell (hyperoctahedron)
    Orthoplex,
    /// 24-cell
    Icositetrachoron,
}

impl Polytope {
    pub const ALL: [Polytope; 4] = [
        Polytope::Pentachoron,
        Polytope::Tesseract,
        Polytope::Orthoplex,
        Polytope::Icositetrachoron,
    ];

    pub fn vertices(self) -> Vec<Vec4> {
        match self {
            Polytope::Pentachoron => {
                let s = 1.0 / 5.0f32.sqrt();
                vec![
                    Vec4::new(1.0, 1.0, 1.0, -s),
                    Vec4::new(1.0, -1.0, -1.0, -s),
                    Vec4::new(-1.0, 1.0, -1.0, -s),
                    Vec4::new(-1.0, -1.0, 1.0, -s),
                    Vec4::new(0.0, 0.0, 0.0, 5.0f32.sqrt() - s),
                ]
            }
            Polytope::Tesseract => (0..16u32)
                .map(|bits| {
                    let c = |b: u32| if bits & (1 << b) != 0 { 1.0 } else { -1.0 };
                    Vec4::new(c(0), c(1), c(2), c(3))
                })
                .collect(),
            Polytope::Orthoplex => {
                let mut out = Vec::with_capacity(8);
                for axis in 0..4 {
                    for sign in [1.0f32, -1.0] {
                        let mut v = [0.0f32; 4];
                        v[axis] = sign;
                        out.push(Vec4::from_array(v));
                    }
                }
                out
            }
            Polytope::Icositetrachoron => {
                let mut out = Vec::with_capacity(24);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        for si in [1.0f32, -1.0] {
                            for sj in [1.0f32, -1.0] {
                                let mut v = [0.0f32; 4];
                                v[i] = si;
                                v[j] = sj;
                                out.push(Vec4::from_array(v));
                            }
                        }
                    }
                }
                out
            }
        }
    }

    /// Edges are the vertex pairs at the minimum pairwise distance.
    pub fn edges(self) -> Vec<(Vec4, Vec4)> {
        let verts = self.vertices();
        let mut min_d2 = f32::MAX;
        for (i, a) in verts.iter().enumerate() {
            for b in &verts[i + 1..] {
                min_d2 = min_d2.min(a.distance_squared(*b));
            }
        }
        let tol = min_d2 * 1e-3;
        let mut edges = Vec::new();
        for (i, a) in verts.iter().enumerate() {
            for b in &verts[i + 1..] {
                if (a.distance_squared(*b) - min_d2).abs() <= tol {
                    edges.push((*a, *b));
                }
            }
        }
        edges
    }
}

/// Rotate in the XW and YZ planes, then perspective-divide along W.
pub fn project_to_3d(p: Vec4) -> Vec3 {
    let (sxw, cxw) = ROTATION_XW.sin_cos();
    let x = p.x * cxw - p.w * sxw;
    let w = p.x * sxw + p.w * cxw;
    let (syz, cyz) = ROTATION_YZ.sin_cos();
    let y = p.y * cyz - p.z * syz;
    let z = p.y * syz + p.z * cyz;
    let k = PROJECTION_DISTANCE / (PROJECTION_DISTANCE - w).max(0.25);
    Vec3::new(x, y, z) * k
}

/// Uniform samples along the polytope's edges, projected and scaled so the
/// farthest point sits at `radius`.
pub fn sample_edges<R: Rng + ?Sized>(
    polytope: Polytope,
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    let edges = polytope.edges();
    if edges.is_empty() || count == 0 {
        return vec![Vec3::ZERO; count];
    }
    let mut points: Vec<Vec3> = (0..count)
        .map(|i| {
            // Round-robin keeps every edge populated even at low counts.
            let (a, b) = edges[i % edges.len()];
            let t = rng.gen::<f32>();
            let jitter = Vec4::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            ) * EDGE_JITTER;
            project_to_3d(a.lerp(b, t) + jitter)
        })
        .collect();
    let max_len = points.iter().map(|p| p.length()).fold(0.0f32, f32::max);
    if max_len > f32::EPSILON {
        let s = radius / max_len;
        for p in &mut points {
            *p *= s;
        }
    }
    points
}
