use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Uniform sample inside a ball (cube-root radius keeps density even).
pub fn ball_volume<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let dir = unit_direction(rng);
            dir * radius * rng.gen::<f32>().cbrt()
        })
        .collect()
}

pub fn sphere_surface<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count).map(|_| unit_direction(rng) * radius).collect()
}

pub fn cube_surface<R: Rng + ?Sized>(count: usize, half_extent: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let face = rng.gen_range(0..6usize);
            let u = rng.gen_range(-1.0f32..=1.0) * half_extent;
            let v = rng.gen_range(-1.0f32..=1.0) * half_extent;
            let s = if face % 2 == 0 { half_extent } else { -half_extent };
            match face / 2 {
                0 => Vec3::new(s, u, v),
                1 => Vec3::new(u, s, v),
                _ => Vec3::new(u, v, s),
            }
        })
        .collect()
}

pub fn torus<R: Rng + ?Sized>(count: usize, major: f32, minor: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u = rng.gen::<f32>() * TAU;
            let v = rng.gen::<f32>() * TAU;
            let ring = major + minor * v.cos();
            Vec3::new(ring * u.cos(), minor * v.sin(), ring * u.sin())
        })
        .collect()
}

/// Two interleaved strands along +Y, centered on the origin.
pub fn double_helix<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    height: f32,
    turns: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = rng.gen::<f32>();
            let strand = if i % 2 == 0 { 0.0 } else { PI };
            let angle = t * turns * TAU + strand;
            let jitter = unit_direction(rng) * radius * 0.04;
            Vec3::new(radius * angle.cos(), (t - 0.5) * height, radius * angle.sin()) + jitter
        })
        .collect()
}

/// Icosahedron subdivided `subdivisions` times and pushed onto the sphere.
pub fn icosphere_triangles(radius: f32, subdivisions: u32) -> Vec<[Vec3; 3]> {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let verts = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    let mut tris: Vec<[Vec3; 3]> = FACES
        .iter()
        .map(|f| [verts[f[0]].normalize(), verts[f[1]].normalize(), verts[f[2]].normalize()])
        .collect();
    for _ in 0..subdivisions {
        let mut next = Vec::with_capacity(tris.len() * 4);
        for [a, b, c] in tris {
            let ab = ((a + b) * 0.5).normalize();
            let bc = ((b + c) * 0.5).normalize();
            let ca = ((c + a) * 0.5).normalize();
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        tris = next;
    }
    tris.into_iter()
        .map(|[a, b, c]| [a * radius, b * radius, c * radius])
        .collect()
}

/// Random triangle, then a uniform barycentric point inside it.
pub fn mesh_surface<R: Rng + ?Sized>(triangles: &[[Vec3; 3]], count: usize, rng: &mut R) -> Vec<Vec3> {
    if triangles.is_empty() {
        return vec![Vec3::ZERO; count];
    }
    (0..count)
        .map(|_| {
            let [a, b, c] = triangles[rng.gen_range(0..triangles.len())];
            let mut u = rng.gen::<f32>();
            let mut v = rng.gen::<f32>();
            if u + v > 1.0 {
                u = 1.0 - u;
                v = 1.0 - v;
            }
            let w = 1.0 - u - v;
            a * u + b * v + c * w
        })
        .collect()
}

/// Closed circle in the XZ plane; `segments + 1` points so the loop closes.
pub fn ring_loop(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * TAU;
            Vec3::new(a.cos() * radius, 0.0, a.sin() * radius)
        })
        .collect()
}

#[inline]
pub(crate) fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}
