// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use core::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

use prism_math::{inverse, transpose, Mat4, Matrix, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn translation_occupies_the_last_column() {
    let m = Mat4::translation(&Vec3::new(5.0, -3.0, 2.0));
    let mut p = Vec3::new(2.0, 4.0, -1.0);
    p.multiply_matrix4(&m);
    assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
}

#[test]
fn multiply_composes_right_operand_first() {
    // T * S applied to a point scales first, then translates.
    let mut composed = Mat4::translation(&Vec3::new(1.0, 2.0, 3.0));
    composed.multiply(&Mat4::scale(&Vec3::new(2.0, 2.0, 2.0)));

    let mut p = Vec3::new(1.0, 1.0, 1.0);
    p.multiply_matrix4(&composed);
    assert_eq!(p.to_array(), [3.0, 4.0, 5.0]);
}

#[test]
fn rotation_composes_x_then_y_then_z() {
    let euler = Vec3::new(FRAC_PI_4, FRAC_PI_3, FRAC_PI_2);
    let from_euler = Mat4::rotation(&euler);

    let mut sequential = Mat4::rotation_x(euler[0]);
    sequential.multiply(&Mat4::rotation_y(euler[1]));
    sequential.multiply(&Mat4::rotation_z(euler[2]));

    assert_eq!(from_euler.to_array(), sequential.to_array());
}

#[test]
fn single_axis_rotations_turn_the_expected_plane() {
    let mut v = Vec3::new(0.0, 1.0, 0.0);
    v.multiply_matrix4(&Mat4::rotation_x(FRAC_PI_2));
    approx_eq3(v.to_array(), [0.0, 0.0, 1.0]);

    let mut v = Vec3::new(0.0, 0.0, 1.0);
    v.multiply_matrix4(&Mat4::rotation_y(FRAC_PI_2));
    approx_eq3(v.to_array(), [1.0, 0.0, 0.0]);

    let mut v = Vec3::new(1.0, 0.0, 0.0);
    v.multiply_matrix4(&Mat4::rotation_z(FRAC_PI_2));
    approx_eq3(v.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn invert_undoes_an_affine_transform() {
    let mut m = Mat4::translation(&Vec3::new(1.0, -2.0, 3.0));
    m.multiply(&Mat4::rotation(&Vec3::new(0.3, 0.5, 0.7)));
    m.multiply(&Mat4::scale(&Vec3::new(2.0, 4.0, 0.5)));

    let mut roundtrip = inverse(&m);
    roundtrip.multiply(&m);
    let identity = Mat4::identity().to_array();
    let result = roundtrip.to_array();
    // The 2x/4x/0.5x scale spread costs a little precision beyond EPS.
    for i in 0..16 {
        assert!(
            (result[i] - identity[i]).abs() <= 1e-4,
            "index {i}: {result:?}"
        );
    }
}

#[test]
fn invert_of_a_singular_matrix_is_the_zero_matrix() {
    // Zero scale on one axis collapses the volume; determinant is zero.
    let mut m = Mat4::scale(&Vec3::new(1.0, 0.0, 1.0));
    m.invert();
    assert_eq!(m.to_array(), [0.0; 16]);
}

#[test]
fn invert_leaves_the_identity_unchanged() {
    let mut m = Mat4::identity();
    m.invert();
    assert_eq!(m.to_array(), Mat4::identity().to_array());
}

#[test]
fn transpose_is_an_involution() {
    let m = Mat4::new([
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ]);
    let t = transpose(&m);
    assert_eq!(
        t.to_array(),
        [
            1.0, 5.0, 9.0, 13.0, //
            2.0, 6.0, 10.0, 14.0, //
            3.0, 7.0, 11.0, 15.0, //
            4.0, 8.0, 12.0, 16.0,
        ]
    );
    assert_eq!(transpose(&t).to_array(), m.to_array());
}

#[test]
fn multiplication_is_associative_within_epsilon() {
    let a = Mat4::translation(&Vec3::new(1.0, 2.0, 3.0));
    let b = Mat4::rotation_y(FRAC_PI_3);
    let c = Mat4::scale(&Vec3::new(0.5, 2.0, 1.5));

    let left = (a * b) * c;
    let right = a * (b * c);
    for i in 0..16 {
        assert!(
            (left[i] - right[i]).abs() <= 1e-4,
            "index {i}: {:?} vs {:?}",
            left.to_array(),
            right.to_array()
        );
    }
}

#[test]
fn from_quaternion_of_the_identity_is_the_identity_matrix() {
    let m = Mat4::from_quaternion(&Quat::identity());
    assert_eq!(m.to_array(), Mat4::identity().to_array());
}

#[test]
fn from_quaternion_matches_the_direct_quaternion_rotation() {
    let q = Quat::from_axis_angle(&Vec3::new(0.0, 1.0, 0.0), FRAC_PI_3);
    let m = Mat4::from_quaternion(&q);

    let mut via_matrix = Vec3::new(1.0, 2.0, 3.0);
    via_matrix.multiply_matrix4(&m);
    let mut via_quat = Vec3::new(1.0, 2.0, 3.0);
    via_quat.multiply_quaternion(&q);

    approx_eq3(via_matrix.to_array(), via_quat.to_array());
}

#[test]
fn gpu_layout_is_an_identity_passthrough() {
    let m = Mat4::rotation_z(0.25);
    assert_eq!(m.to_gpu_layout(), m.to_array());
}

#[test]
fn mul_operator_and_assign_match_the_method() {
    let a = Mat4::rotation_x(FRAC_PI_4);
    let b = Mat4::scale(&Vec3::new(2.0, 3.0, 4.0));
    let mut via_method = a;
    via_method.multiply(&b);
    assert_eq!((a * b).to_array(), via_method.to_array());

    let mut via_assign = a;
    via_assign *= b;
    assert_eq!(via_assign.to_array(), via_method.to_array());

    let mut via_ref_assign = a;
    via_ref_assign *= &b;
    assert_eq!(via_ref_assign.to_array(), via_method.to_array());
}
