// Host-side tests for the floating code fragments.

use glam::{Vec2, Vec3};
use polyfolio_core::constants::*;
use polyfolio_core::*;

fn camera_looking_down_neg_z() -> Camera {
    Camera {
        eye: Vec3::ZERO,
        target: Vec3::new(0.0, 0.0, -1.0),
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
        znear: CAMERA_ZNEAR,
        zfar: CAMERA_ZFAR,
    }
}

fn still(anchor: Vec3) -> Fragment {
    Fragment {
        text: "{}",
        anchor,
        speed: 0.0,
        phase: 0.0,
        size: 0.5,
        opacity: 0.1,
    }
}

#[test]
fn generation_is_seeded_and_stays_on_the_shell() {
    let a = FloatingFragments::generate(FRAGMENT_COUNT, 11);
    let b = FloatingFragments::generate(FRAGMENT_COUNT, 11);
    let c = FloatingFragments::generate(FRAGMENT_COUNT, 12);
    assert_eq!(a.len(), 30);
    assert_eq!(a.fragments(), b.fragments());
    assert_ne!(a.fragments(), c.fragments());

    let max_r = FRAGMENT_RADIUS_MIN + FRAGMENT_RADIUS_SPAN;
    for (i, f) in a.fragments().iter().enumerate() {
        assert_eq!(f.text, FRAGMENT_GLYPHS[i % FRAGMENT_GLYPHS.len()]);
        let flat = Vec3::new(f.anchor.x, 0.0, f.anchor.z).length();
        assert!(flat <= max_r + 1e-3, "fragment {} too far: {}", i, flat);
        let y = f.anchor.y - FRAGMENT_Y_OFFSET;
        assert!(y.abs() <= max_r * FRAGMENT_Y_SQUASH + 1e-3);
        assert!(f.speed >= FRAGMENT_SPEED_MIN && f.speed <= FRAGMENT_SPEED_MIN + FRAGMENT_SPEED_SPAN);
        assert!(f.opacity >= FRAGMENT_OPACITY_MIN && f.opacity <= FRAGMENT_OPACITY_MIN + FRAGMENT_OPACITY_SPAN);
        assert!(f.size >= FRAGMENT_SIZE_MIN && f.size <= FRAGMENT_SIZE_MIN + FRAGMENT_SIZE_SPAN);
    }
}

#[test]
fn fragments_bob_vertically_only() {
    let frags = FloatingFragments::generate(FRAGMENT_COUNT, 3);
    for f in frags.fragments() {
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let p = f.position_at(t);
            assert_eq!(p.x, f.anchor.x);
            assert_eq!(p.z, f.anchor.z);
            assert!(f.bob_offset(t).abs() <= FRAGMENT_BOB_AMPLITUDE + 1e-5);
            assert!((p.y - f.anchor.y - f.bob_offset(t)).abs() < 1e-5);
        }
    }
    let f = Fragment {
        speed: 1.0,
        ..still(Vec3::ZERO)
    };
    assert!((f.bob_offset(std::f32::consts::FRAC_PI_2) - FRAGMENT_BOB_AMPLITUDE).abs() < 1e-5);
}

#[test]
fn sprites_project_through_the_camera() {
    let cam = camera_looking_down_neg_z();
    let frags = FloatingFragments::new(vec![
        still(Vec3::new(0.0, 0.0, -10.0)),
        still(Vec3::new(0.0, 0.0, -20.0)),
        still(Vec3::new(0.0, 0.0, 10.0)),
        still(Vec3::new(500.0, 0.0, -10.0)),
    ]);
    let sprites = frags.sprites(&cam, 0.0);
    assert_eq!(sprites.len(), 4);

    assert!(sprites[0].visible);
    assert!(sprites[0].ndc.distance(Vec2::ZERO) < 1e-4);
    // twice as far, half the size
    assert!((sprites[0].scale - 2.0 * sprites[1].scale).abs() < 1e-4);
    let expected = 1.0 / (10.0 * (cam.fovy_radians * 0.5).tan());
    assert!((sprites[0].scale - expected).abs() < 1e-4);

    assert!(!sprites[2].visible, "behind the camera");
    assert!(!sprites[3].visible, "outside the frustum");
}

#[test]
fn scene_emits_one_sprite_per_fragment() {
    let labels: Vec<String> = ["About", "Skills"].iter().map(|s| s.to_string()).collect();
    let mut s = Scene::new(SceneConfig::new(labels).with_seed(5).with_viewport(1280.0, 720.0));
    let out = s.frame(1.0 / 60.0);
    assert_eq!(out.fragments.len(), s.fragments().len());
    assert_eq!(out.fragments.len(), FRAGMENT_COUNT);
    assert!(out.fragments.iter().any(|f| f.visible));
}
