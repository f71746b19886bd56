use lasso_select::{
    Camera, CameraTransform, UNPROJECTABLE, batch_points_in_polygon, glam::*,
    project_points_to_screen, project_points_to_screen_into, screen_positions_as_vec2,
};

use crate::common::given;

fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(
        actual.abs_diff_eq(expected, 1e-3),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_project_points_to_screen_when_look_at_target_should_be_viewport_center() {
    let transform = given::camera_transform();

    let screen_positions = project_points_to_screen(&[0.0, 0.0, 0.0], &transform);

    assert_eq!(screen_positions.len(), 2);
    assert_near(
        screen_positions_as_vec2(&screen_positions)[0],
        given::VIEWPORT.as_vec2() / 2.0,
    );
}

#[test]
fn test_project_points_to_screen_should_have_top_left_origin() {
    let transform = given::camera_transform();
    let center = given::VIEWPORT.as_vec2() / 2.0;

    let screen_positions = project_points_to_screen(
        &[
            1.0, 0.0, 0.0, // right
            0.0, 1.0, 0.0, // up
        ],
        &transform,
    );
    let screen_positions = screen_positions_as_vec2(&screen_positions);

    assert!(screen_positions[0].x > center.x);
    assert!((screen_positions[0].y - center.y).abs() < 1e-3);
    assert!(screen_positions[1].y < center.y);
    assert!((screen_positions[1].x - center.x).abs() < 1e-3);
}

#[test]
fn test_project_points_to_screen_should_match_glam_projection() {
    let transform = given::camera_transform();
    let points = [
        vec3(0.3, -0.7, 1.2),
        vec3(-2.0, 1.5, -3.0),
        vec3(0.0, 0.0, 4.0),
        vec3(10.0, 5.0, -20.0),
    ];
    let positions = points.iter().flat_map(|p| p.to_array()).collect::<Vec<_>>();

    let screen_positions = project_points_to_screen(&positions, &transform);
    let screen_positions = screen_positions_as_vec2(&screen_positions);

    for (point, actual) in points.iter().zip(screen_positions) {
        let ndc = transform.view_proj.project_point3(*point);
        let expected = vec2(
            (ndc.x + 1.0) * transform.width() / 2.0,
            (1.0 - ndc.y) * transform.height() / 2.0,
        );
        assert_near(*actual, expected);
    }
}

#[test]
fn test_project_points_to_screen_when_pixel_transform_should_keep_xy() {
    let transform = given::pixel_transform();

    let screen_positions =
        project_points_to_screen(&[12.0, 34.0, 0.0, 700.0, 5.0, 0.5], &transform);

    assert_near(vec2(screen_positions[0], screen_positions[1]), vec2(12.0, 34.0));
    assert_near(vec2(screen_positions[2], screen_positions[3]), vec2(700.0, 5.0));
}

#[test]
fn test_project_points_to_screen_when_w_is_zero_should_write_sentinel_and_never_select() {
    // A camera at the origin facing +Z, the point lies on its z = 0 plane.
    let camera = Camera::new(0.1..100.0, 60f32.to_radians());
    let transform = CameraTransform::new(&camera, given::VIEWPORT);

    let screen_positions = project_points_to_screen(&[1.0, 2.0, 0.0, 0.0, 0.0, 5.0], &transform);
    let screen = screen_positions_as_vec2(&screen_positions);

    assert_eq!(screen[0], UNPROJECTABLE);
    assert!(screen[1].is_finite());

    let everything = given::square(-1e30, 1e30);
    let mask = batch_points_in_polygon(&screen_positions, &everything);

    assert!(!mask.is_selected(0));
    assert!(mask.is_selected(1));
}

#[test]
fn test_project_points_to_screen_into_should_resize_reused_buffer() {
    let transform = given::camera_transform();
    let mut screen_positions = vec![42.0; 100];

    project_points_to_screen_into(&[0.0; 9], &transform, &mut screen_positions);

    assert_eq!(screen_positions.len(), 6);
}

#[test]
fn test_project_points_to_screen_when_no_points_should_return_empty() {
    let screen_positions = project_points_to_screen(&[], &given::camera_transform());

    assert!(screen_positions.is_empty());
}

#[test]
#[should_panic(expected = "not a multiple of 3")]
fn test_project_points_to_screen_when_length_not_multiple_of_3_should_panic() {
    project_points_to_screen(&[0.0, 1.0], &given::camera_transform());
}

#[test]
#[should_panic(expected = "not finite")]
fn test_project_points_to_screen_when_matrix_not_finite_should_panic() {
    let transform = CameraTransform::from_view_proj(Mat4::NAN, given::VIEWPORT);

    project_points_to_screen(&[0.0, 0.0, 0.0], &transform);
}

#[test]
fn test_camera_transform_should_snapshot_camera() {
    let mut camera = given::camera();
    let transform = CameraTransform::new(&camera, given::VIEWPORT);

    camera.look_at(vec3(2.0, 1.0, 4.0), vec3(1.0, 0.0, 0.0));

    let screen_positions = project_points_to_screen(&[0.0, 0.0, 0.0], &transform);

    assert_near(
        vec2(screen_positions[0], screen_positions[1]),
        given::VIEWPORT.as_vec2() / 2.0,
    );
    assert_ne!(transform, CameraTransform::new(&camera, given::VIEWPORT));
}
