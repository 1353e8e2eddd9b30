use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use star_box::error::Error;
use star_box::matrix::Matrix;
use star_box::projection::{PerspectiveProjection, Projection, ProjectionKind};
use star_box::shape::{self, Shape};
use star_box::transform;
use star_box::vector::{Vector2, Vector3};

const EPS: f64 = 1e-9;

fn sample_points() -> Vec<Vector3> {
    vec![
        Vector3::zero(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-3.5, 2.25, 7.0),
        Vector3::new(120.0, -45.0, -900.0),
    ]
}

// ── Vector3 ───────────────────────────────────────────────────────────────────

#[test]
fn add_then_sub_is_identity() {
    let w = Vector3::new(0.1, -7.3, 1e3);
    for v in sample_points() {
        assert_abs_diff_eq!(v.add(w).sub(w), v, epsilon = EPS);
        assert_abs_diff_eq!(v + w - w, v, epsilon = EPS);
    }
}

#[test]
fn vector_arithmetic() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let w = Vector3::new(4.0, -5.0, 6.0);

    assert_eq!(v.dot(w), 4.0 - 10.0 + 18.0);
    assert_eq!(v.hadamard(w), Vector3::new(4.0, -10.0, 18.0));
    assert_eq!(v.scale(2.0), v * 2.0);
    assert_eq!(v.inverse(), -v);
    assert_eq!(v.squared_length(), 14.0);
    assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
    assert_eq!(v.squared_distance(w), 9.0 + 49.0 + 9.0);
    assert_eq!(w.max_component(), 6.0);
}

#[test]
fn random_vector_components_in_unit_interval() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let v = Vector3::random(&mut rng);
        for c in [v.x, v.y, v.z] {
            assert!((0.0..1.0).contains(&c));
        }
    }
}

// ── Matrix ────────────────────────────────────────────────────────────────────

#[test]
fn multiply_mismatched_dimensions_fails() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

    assert_eq!(
        a.try_mul(&b),
        Err(Error::DimensionMismatch {
            lhs_rows: 2,
            lhs_cols: 3,
            rhs_rows: 2,
            rhs_cols: 3,
        })
    );
}

#[test]
#[should_panic(expected = "cannot multiply 2 x 3 matrix and 2 x 3 matrix")]
fn mul_operator_panics_on_mismatch() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let _ = &a * &a;
}

#[test]
fn multiply_rectangular() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);

    let product = a.try_mul(&b).unwrap();
    assert_eq!(product, Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]));
}

#[test]
fn identity_is_neutral() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(&Matrix::identity(2) * &a, a);
    assert_eq!(&a * &Matrix::identity(2), a);
}

#[test]
fn transpose_swaps_rows_and_cols() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let t = a.transpose();

    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 2);
    assert_eq!(t.get(2, 1), 6.0);
    assert_eq!(t.transpose(), a);
}

// ── Transforms ────────────────────────────────────────────────────────────────

#[test]
fn rotation_x_inverse_property() {
    for theta in [0.0, 0.3, FRAC_PI_2, 2.0, -PI] {
        let m = &transform::rotation_x(theta) * &transform::rotation_x(-theta);
        for v in sample_points() {
            assert_abs_diff_eq!(m.apply(v), v, epsilon = EPS);
        }
    }
}

#[test]
fn rotations_are_right_handed() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    let z = Vector3::new(0.0, 0.0, 1.0);

    assert_abs_diff_eq!(transform::rotation_z(FRAC_PI_2).apply(x), y, epsilon = EPS);
    assert_abs_diff_eq!(transform::rotation_x(FRAC_PI_2).apply(y), z, epsilon = EPS);
    assert_abs_diff_eq!(transform::rotation_y(FRAC_PI_2).apply(z), x, epsilon = EPS);
}

#[test]
fn translation_moves_points() {
    let m = transform::translation(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(m.apply(Vector3::new(10.0, 20.0, 30.0)), Vector3::new(11.0, 22.0, 33.0));
}

#[test]
fn transformation_then_inverse_is_identity() {
    let cases = [
        (Vector3::zero(), Vector3::zero()),
        (Vector3::new(5.0, -2.0, 100.0), Vector3::new(0.0, 0.0, 0.7)),
        (Vector3::new(-40.0, 12.0, -300.0), Vector3::new(0.4, -1.1, 2.5)),
    ];
    for (position, angle) in cases {
        let m = &transform::inverse_transformation(position, angle) * &transform::transformation(position, angle);
        for v in sample_points() {
            assert_abs_diff_eq!(m.apply(v), v, epsilon = 1e-6);
        }
    }
}

#[test]
fn inverse_rotation_reverses_the_axis_order() {
    let angle = Vector3::new(0.4, -1.1, 2.5);
    let reversed = &(&transform::rotation_z(-angle.z) * &transform::rotation_x(-angle.x)) * &transform::rotation_y(-angle.y);
    let inverse = transform::inverse_rotation(angle);

    for v in sample_points() {
        assert_abs_diff_eq!(inverse.apply(v), reversed.apply(v), epsilon = 1e-6);
    }
}

// ── Shapes ────────────────────────────────────────────────────────────────────

#[test]
fn cuboid_vertex_and_face_layout() {
    let s = shape::cuboid(Vector3::new(10.0, 0.0, 0.0), Vector3::new(2.0, 4.0, 6.0));

    assert_eq!(s.vertices.len(), 8);
    assert_eq!(s.faces.len(), 6);
    assert_eq!(s.vertices[0], Vector3::new(9.0, -2.0, 3.0));
    assert_eq!(s.vertices[5], Vector3::new(11.0, 2.0, -3.0));
    assert!(s.faces.iter().all(|face| face.len() == 4));
}

#[test]
fn cube_is_cuboid_with_equal_edges() {
    let center = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(shape::cube(center, 5.0), shape::cuboid(center, Vector3::new(5.0, 5.0, 5.0)));
}

#[test]
fn join_offsets_face_indices() {
    let start = Vector3::new(0.0, 0.0, 0.0);
    let end = Vector3::new(0.0, 0.0, -10.0);
    let joined = Shape::join([shape::cube(Vector3::zero(), 1.0), shape::line_segment(start, end)]);

    assert_eq!(joined.vertices.len(), 10);
    assert_eq!(joined.faces.len(), 7);
    assert_eq!(joined.faces[6], vec![8, 9]);
    assert_eq!(joined.face_vertices().last(), Some(vec![start, end]));
}

#[test]
fn plane_is_placed_by_its_transformation() {
    let p = shape::plane(Vector3::new(0.0, 0.0, -5.0), Vector3::zero(), 4.0, 2.0);
    assert_eq!(
        p.vertices,
        vec![
            Vector3::new(-2.0, 1.0, -5.0),
            Vector3::new(-2.0, -1.0, -5.0),
            Vector3::new(2.0, -1.0, -5.0),
            Vector3::new(2.0, 1.0, -5.0),
        ]
    );

    // lying flat: local y becomes depth
    let flat = shape::plane(Vector3::zero(), Vector3::new(FRAC_PI_2, 0.0, 0.0), 4.0, 2.0);
    for v in &flat.vertices {
        assert_abs_diff_eq!(v.y, 0.0, epsilon = EPS);
    }
}

#[test]
fn transformed_keeps_faces() {
    let s = shape::cube(Vector3::zero(), 2.0);
    let moved = s.transformed(&transform::translation(Vector3::new(0.0, 0.0, -10.0)));

    assert_eq!(moved.faces, s.faces);
    assert_eq!(moved.vertices[0], Vector3::new(-1.0, -1.0, -9.0));
}

// ── Projection ────────────────────────────────────────────────────────────────

#[test]
fn perspective_projection_scales_by_depth() {
    let p = PerspectiveProjection::new(300.0);
    assert_abs_diff_eq!(p.project(Vector3::new(30.0, -60.0, -600.0)), Vector2::new(15.0, -30.0), epsilon = EPS);
    assert_abs_diff_eq!(p.project(Vector3::new(30.0, -60.0, -300.0)), Vector2::new(30.0, -60.0), epsilon = EPS);
}

#[test]
fn orthographic_projection_is_not_implemented() {
    assert!(ProjectionKind::Perspective.build(300.0).is_ok());
    assert!(matches!(
        ProjectionKind::Orthographic.build(300.0),
        Err(Error::UnimplementedCapability(_))
    ));
}
