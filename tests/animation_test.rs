use cgmath::{Deg, Matrix4, Vector3, Vector4};
use twod_scene::{
    SceneConfig,
    animation::{Animation, pivot_rotation, translation},
};

use crate::common::test_utils::assert_matrix_eq;

mod common;

fn encounter_animation() -> Animation {
    Animation::from_config(&SceneConfig::encounter())
}

#[test]
fn should_follow_half_second_steps() {
    let mut animation = encounter_animation();
    let mut offsets = Vec::new();
    let mut angles = Vec::new();
    for dt in [0.0, 0.5, 0.5] {
        animation.update(dt);
        offsets.push(animation.offset);
        angles.push(animation.angle);
    }
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    assert_eq!(angles, vec![Deg(0.0), Deg(22.5), Deg(45.0)]);
}

#[test]
fn should_accumulate_sum_of_deltas() {
    let deltas = [0.016, 0.017, 0.3, 0.0, 1.25, 0.008, 2.0];
    let mut animation = encounter_animation();
    deltas.iter().for_each(|dt| animation.update(*dt));

    let total: f32 = deltas.iter().sum();
    assert!((animation.offset - total).abs() < 1e-4);
    assert!((animation.angle.0 - 45.0 * total).abs() < 1e-3);
}

#[test]
fn should_pass_large_stalls_through() {
    let mut animation = encounter_animation();
    animation.update(10.0);
    assert_eq!(animation.offset, 10.0);
    assert_eq!(animation.angle, Deg(450.0));
}

#[test]
fn translate_matrix_has_no_rotation() {
    let mut animation = encounter_animation();
    for dt in [0.1, 0.7, 0.25] {
        animation.update(dt);
        let expected = Matrix4::from_translation(Vector3::new(animation.offset, 0.0, 0.0));
        assert_matrix_eq(animation.translate, expected);
        // the upper 3x3 stays identity
        assert_eq!(animation.translate.x, Vector4::unit_x());
        assert_eq!(animation.translate.y, Vector4::unit_y());
        assert_eq!(animation.translate.z, Vector4::unit_z());
    }
}

#[test]
fn rotate_matrix_is_pivot_then_z_rotation() {
    let mut animation = encounter_animation();
    let pivot = Vector3::new(-3.5, 3.0, 0.0);
    for dt in [0.2, 0.2, 1.0] {
        animation.update(dt);
        let expected = Matrix4::from_translation(pivot) * Matrix4::from_angle_z(animation.angle);
        assert_matrix_eq(animation.rotate, expected);
    }
}

#[test]
fn rotation_keeps_pivot_fixed() {
    let m = pivot_rotation(Vector3::new(-3.5, 3.0, 0.0), Deg(123.0));
    let origin = m * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin.x + 3.5).abs() < 1e-5);
    assert!((origin.y - 3.0).abs() < 1e-5);
}

#[test]
fn quarter_turn_maps_x_onto_y() {
    let m = pivot_rotation(Vector3::new(0.0, 0.0, 0.0), Deg(90.0));
    let p = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert!(p.x.abs() < 1e-5);
    assert!((p.y - 1.0).abs() < 1e-5);
}

#[test]
fn matrices_are_rebuilt_not_accumulated() {
    let mut animation = encounter_animation();
    animation.update(1.0);
    animation.update(1.0);
    assert_matrix_eq(animation.translate, translation(2.0));
}

#[test]
fn voyage_starts_at_identity() {
    let animation = Animation::from_config(&SceneConfig::default());
    assert_matrix_eq(animation.translate, translation(0.0));
    assert_eq!(animation.offset, 0.0);
    assert_eq!(animation.angle, Deg(0.0));
}
