use warren_geom::{Aabb, Color, Vec2, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
    assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
}

#[test]
fn vec3_arith_and_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    assert!(vec3_approx_eq(a + b, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq((a + b) - a, b, 1e-6));
    assert!(vec3_approx_eq(-a, Vec3::new(-1.0, -2.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(a / 2.0, Vec3::new(0.5, 1.0, 1.5), 1e-6));
}

#[test]
fn vec3_cross_right_hand_rule() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));
    assert!(vec3_approx_eq(j.cross(i), -k, 1e-6));
}

#[test]
fn normalized_keeps_zero_vector() {
    let n = Vec3::new(3.0, 4.0, 0.0).normalized();
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));

    let z = Vec3::ZERO.normalized();
    assert_eq!(z, Vec3::ZERO);
    assert!(!z.x.is_nan());
}

#[test]
fn componentwise_min_max() {
    let a = Vec3::new(1.0, -2.0, 5.0);
    let b = Vec3::new(-1.0, 3.0, 5.0);
    assert_eq!(a.min(b), Vec3::new(-1.0, -2.0, 5.0));
    assert_eq!(a.max(b), Vec3::new(1.0, 3.0, 5.0));
}

#[test]
fn color_from_hex() {
    assert_eq!(Color::from_hex(0xff0000), Color::RED);
    assert_eq!(Color::from_hex(0xffffff), Color::WHITE);
    let c = Color::from_hex(0x0080ff);
    assert!(approx_eq(c.r, 0.0, 1e-6));
    assert!(approx_eq(c.g, 128.0 / 255.0, 1e-6));
    assert!(approx_eq(c.b, 1.0, 1e-6));
    // Alpha byte above the rgb channels is dropped.
    assert_eq!(Color::from_hex(0x7fff0000), Color::RED);
    assert_eq!(Color::default(), Color::WHITE);
}

#[test]
fn aabb_from_points() {
    assert_eq!(Aabb::from_points(std::iter::empty::<Vec3>()), None);

    let single = Aabb::from_points([Vec3::new(1.0, 2.0, 3.0)]).unwrap();
    assert_eq!(single.min, single.max);
    assert_eq!(single.extent(), Vec3::ZERO);

    let b = Aabb::from_points([
        Vec3::new(-1.0, 0.0, 4.0),
        Vec3::new(2.0, 2.0, -4.0),
        Vec3::new(0.0, -3.0, 0.0),
    ])
    .unwrap();
    assert_eq!(b.min, Vec3::new(-1.0, -3.0, -4.0));
    assert_eq!(b.max, Vec3::new(2.0, 2.0, 4.0));
    assert_eq!(b.extent(), Vec3::new(3.0, 5.0, 8.0));
}
