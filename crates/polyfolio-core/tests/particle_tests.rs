// Host-side tests for the morph chase, the ripple ring buffer and morph targets.

use glam::Vec3;
use polyfolio_core::constants::{MAX_RIPPLES, RIPPLE_LIFETIME_SEC};
use polyfolio_core::geometry::ShapeKind;
use polyfolio_core::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const DT: f32 = 1.0 / 60.0;

#[test]
fn morph_index_stays_within_shape_range() {
    let k = 4;
    let mut field = ParticleField::new(k + 1, 100);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..5000 {
        let target = rng.gen_range(0..=k);
        let dt = rng.gen_range(0.0..0.2);
        field.step(target, dt);
        let m = field.morph().morph_index;
        assert!((0.0..=k as f32).contains(&m), "morph index {} escaped", m);
    }
}

#[test]
fn morph_index_chases_target_monotonically() {
    let mut field = ParticleField::new(5, 10);
    let mut prev = field.morph().morph_index;
    for _ in 0..600 {
        field.step(3, DT);
        let m = field.morph().morph_index;
        assert!(m >= prev && m <= 3.0);
        prev = m;
    }
    assert!((prev - 3.0).abs() < 1e-3);
    // targets past the last shape clamp to it
    for _ in 0..600 {
        field.step(99, DT);
    }
    assert!((field.morph().morph_index - 4.0).abs() < 1e-3);
}

#[test]
fn time_accumulates_frame_deltas() {
    let mut field = ParticleField::new(2, 10);
    for _ in 0..120 {
        field.step(0, 0.5 / 60.0);
    }
    assert!((field.time() - 1.0).abs() < 1e-4);
    field.step(0, -1.0);
    assert!((field.time() - 1.0).abs() < 1e-4, "negative deltas are ignored");
}

#[test]
fn ninth_click_evicts_the_oldest_ripple() {
    let mut field = ParticleField::new(2, 10);
    let mut slots = Vec::new();
    for i in 0..9 {
        slots.push(field.add_ripple(Vec3::new(i as f32, 0.0, 0.0)));
        field.step(0, 0.1);
    }
    assert_eq!(field.ripples().live_count(), MAX_RIPPLES);
    assert_eq!(&slots[..8], &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(slots[8], 0, "the first (oldest) ripple is replaced");
    let replaced = field.ripples().slots()[0];
    assert_eq!(replaced.origin, Vec3::new(8.0, 0.0, 0.0));
    assert!(replaced.age < 0.15);
}

#[test]
fn ripple_ties_evict_lowest_slot() {
    let mut buf = RippleBuffer::default();
    for _ in 0..MAX_RIPPLES {
        buf.push(Vec3::ZERO);
    }
    assert_eq!(buf.push(Vec3::ONE), 0);
}

#[test]
fn ripples_expire_after_lifetime() {
    let mut buf = RippleBuffer::default();
    buf.push(Vec3::X);
    buf.advance(RIPPLE_LIFETIME_SEC - 0.5);
    buf.push(Vec3::Y);
    assert_eq!(buf.live_count(), 2);
    buf.advance(1.0);
    assert_eq!(buf.live_count(), 1);
    assert!(!buf.slots()[0].is_live());
    // freed slot is reused before any eviction
    assert_eq!(buf.push(Vec3::Z), 0);
}

#[test]
fn uniforms_mirror_field_state() {
    let mut field = ParticleField::new(5, 600);
    field.add_ripple(Vec3::new(1.0, 2.0, 3.0));
    field.step(2, 0.25);
    let u = field.uniforms();
    assert_eq!(u.shape_count, 5.0);
    assert_eq!(u.particle_count, 600.0);
    assert_eq!(u.ripple_count, 1.0);
    assert_eq!(u.ripples[0], [1.0, 2.0, 3.0, 0.25]);
    assert!(u.ripples[1][3] < 0.0);
    assert_eq!(u.morph_index, field.morph().morph_index);
    assert_eq!(std::mem::size_of::<ParticleUniforms>() % 16, 0);
}

#[test]
fn morph_targets_are_seed_reproducible() {
    let shapes = ShapeKind::default_set(4);
    let a = MorphTargets::generate(&shapes, 300, &mut StdRng::seed_from_u64(5));
    let b = MorphTargets::generate(&shapes, 300, &mut StdRng::seed_from_u64(5));
    let c = MorphTargets::generate(&shapes, 300, &mut StdRng::seed_from_u64(6));
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.targets, b.targets);
    assert_ne!(a.positions, c.positions);
    assert_eq!(a.shape_count(), 5);
    assert!(a.targets.iter().all(|t| t.len() == 300));
}

#[test]
fn morph_target_exports_have_consistent_layout() {
    let shapes = ShapeKind::primitive_set(2);
    let t = MorphTargets::generate(&shapes, 64, &mut StdRng::seed_from_u64(1));
    let verts = t.particle_vertices();
    assert_eq!(verts.len(), 64);
    assert_eq!(std::mem::size_of::<ParticleVertex>(), 32);
    for (v, n) in verts.iter().zip(&t.normals) {
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!((0.0..1.0).contains(&v.random));
    }
    let packed = t.packed_targets();
    assert_eq!(packed.len(), 3 * 64);
    let p = t.targets[2][5];
    assert_eq!(packed[2 * 64 + 5], [p.x, p.y, p.z, 1.0]);
}

#[test]
fn blended_position_hits_targets_at_integer_indices() {
    let shapes = ShapeKind::default_set(2);
    let t = MorphTargets::generate(&shapes, 50, &mut StdRng::seed_from_u64(9));
    for i in [0usize, 17, 49] {
        assert_eq!(t.blended_position(i, 0.0), t.targets[0][i]);
        assert!(t.blended_position(i, 1.0).distance(t.targets[1][i]) < 1e-5);
        assert!(t.blended_position(i, 2.0).distance(t.targets[2][i]) < 1e-5);
        let mid = t.blended_position(i, 0.5);
        let expect = t.targets[0][i].lerp(t.targets[1][i], 0.5);
        assert!(mid.distance(expect) < 1e-4);
        // clamped past both ends
        assert_eq!(t.blended_position(i, -3.0), t.targets[0][i]);
        assert!(t.blended_position(i, 9.0).distance(t.targets[2][i]) < 1e-5);
    }
    assert_eq!(t.blended_position(500, 1.0), Vec3::ZERO);
}
