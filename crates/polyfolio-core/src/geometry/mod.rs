//! Point-cloud samplers for particle target shapes.
//!
//! Every sampler is a pure function of its parameters and the supplied RNG, so
//! a seeded generator replays the same cloud. Shapes are configuration data: the
//! particle field only relies on "N fixed point sets blended by a morph index".

mod polytope;
mod primitives;

pub use polytope::{project_to_3d, sample_edges, Polytope};
pub use primitives::{
    ball_volume, cube_surface, double_helix, icosphere_triangles, mesh_surface, ring_loop,
    sphere_surface, torus,
};

use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Ball { radius: f32 },
    Sphere { radius: f32 },
    Cube { half_extent: f32 },
    Torus { major: f32, minor: f32 },
    Helix { radius: f32, height: f32, turns: f32 },
    Icosphere { radius: f32, subdivisions: u32 },
    Polytope { polytope: Polytope, radius: f32 },
}

impl ShapeKind {
    /// Hero shape followed by one polytope per section, cycling past four.
    pub fn default_set(section_count: usize) -> Vec<ShapeKind> {
        let radius = crate::constants::SHAPE_RADIUS;
        let mut shapes = Vec::with_capacity(section_count + 1);
        shapes.push(ShapeKind::Icosphere {
            radius,
            subdivisions: 3,
        });
        for i in 0..section_count {
            shapes.push(ShapeKind::Polytope {
                polytope: Polytope::ALL[i % Polytope::ALL.len()],
                radius,
            });
        }
        shapes
    }

    /// The simpler primitive-shape variant of the shape set.
    pub fn primitive_set(section_count: usize) -> Vec<ShapeKind> {
        let radius = crate::constants::SHAPE_RADIUS;
        let cycle = [
            ShapeKind::Cube {
                half_extent: radius * 0.6,
            },
            ShapeKind::Torus {
                major: radius * 0.7,
                minor: radius * 0.25,
            },
            ShapeKind::Helix {
                radius: radius * 0.45,
                height: radius * 1.8,
                turns: 3.0,
            },
            ShapeKind::Ball { radius },
        ];
        let mut shapes = Vec::with_capacity(section_count + 1);
        shapes.push(ShapeKind::Sphere { radius });
        for i in 0..section_count {
            shapes.push(cycle[i % cycle.len()]);
        }
        shapes
    }

    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vec3> {
        match *self {
            ShapeKind::Ball { radius } => ball_volume(count, radius, rng),
            ShapeKind::Sphere { radius } => sphere_surface(count, radius, rng),
            ShapeKind::Cube { half_extent } => cube_surface(count, half_extent, rng),
            ShapeKind::Torus { major, minor } => torus(count, major, minor, rng),
            ShapeKind::Helix {
                radius,
                height,
                turns,
            } => double_helix(count, radius, height, turns, rng),
            ShapeKind::Icosphere {
                radius,
                subdivisions,
            } => {
                let tris = icosphere_triangles(radius, subdivisions);
                mesh_surface(&tris, count, rng)
            }
            ShapeKind::Polytope { polytope, radius } => sample_edges(polytope, count, radius, rng),
        }
    }
}
