// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use prism_geom::Aabb;
use prism_math::Vec2;

#[test]
fn accessors_return_the_constructed_values() {
    let aabb = Aabb::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
    assert_eq!(aabb.position().to_array(), [1.0, 2.0]);
    assert_eq!(aabb.size().to_array(), [3.0, 4.0]);
}

#[test]
fn containment_is_half_open_per_axis() {
    let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));

    // Lower edge is inside, upper edge is out.
    assert!(aabb.intersects_point(&Vec2::new(0.0, 0.0)));
    assert!(aabb.intersects_point(&Vec2::new(1.999, 1.999)));
    assert!(!aabb.intersects_point(&Vec2::new(2.0, 2.0)));
    assert!(!aabb.intersects_point(&Vec2::new(-0.001, 0.0)));
    assert!(!aabb.intersects_point(&Vec2::new(0.0, 2.0)));
    assert!(!aabb.intersects_point(&Vec2::new(2.0, 0.0)));
}

#[test]
fn adjacent_boxes_never_double_claim_a_shared_edge() {
    let left = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
    let right = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0));
    let on_edge = Vec2::new(1.0, 0.5);

    assert!(!left.intersects_point(&on_edge));
    assert!(right.intersects_point(&on_edge));
}

#[test]
fn boxes_away_from_the_origin_contain_their_interior() {
    let aabb = Aabb::new(Vec2::new(-3.0, 5.0), Vec2::new(2.0, 0.5));
    assert!(aabb.intersects_point(&Vec2::new(-2.0, 5.25)));
    assert!(!aabb.intersects_point(&Vec2::new(-3.5, 5.25)));
    assert!(!aabb.intersects_point(&Vec2::new(-2.0, 5.5)));
}

#[test]
fn negative_size_yields_an_empty_box() {
    // Size is not validated; a negative component inverts the interval so
    // no point can satisfy it.
    let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(-2.0, 2.0));
    assert!(!aabb.intersects_point(&Vec2::new(0.0, 1.0)));
    assert!(!aabb.intersects_point(&Vec2::new(-1.0, 1.0)));
}
