use lasso_select::{
    Polygon, SelectionMask, batch_points_in_polygon, batch_points_in_polygon_into, glam::*,
    is_point_in_polygon,
};

use crate::common::given;

#[test]
fn test_batch_points_in_polygon_when_degenerate_should_return_all_zero_mask() {
    let screen_positions = given::screen_row([0.0, 1.0, 2.0, 3.0], 0.0);

    for vertices in [
        vec![],
        vec![vec2(0.0, 0.0)],
        vec![vec2(-10.0, -10.0), vec2(10.0, 10.0)],
    ] {
        let mask = batch_points_in_polygon(&screen_positions, &Polygon::new(vertices));

        assert_eq!(mask.len(), 4);
        assert_eq!(mask.selected_count(), 0);
        assert!(mask.as_bytes().iter().all(|&flag| flag == 0));
    }
}

#[test]
fn test_batch_points_in_polygon_when_square_should_match_predicate() {
    let square = given::square(0.0, 10.0);
    let screen_positions = vec![5.0, 5.0, 15.0, 15.0, -1.0, 5.0, 9.5, 0.5];

    let mask = batch_points_in_polygon(&screen_positions, &square);

    assert_eq!(mask.as_bytes(), &[1, 0, 0, 1]);
    assert_eq!(mask.selected_count(), 2);
}

#[test]
fn test_batch_points_in_polygon_when_outside_bounds_should_never_select() {
    let triangle = Polygon::new(vec![vec2(0.0, 0.0), vec2(20.0, 0.0), vec2(10.0, 20.0)]);
    let bounds = triangle.bounds();

    let screen_positions = (-10..30)
        .flat_map(|x| (-10..30).flat_map(move |y| [x as f32 + 0.25, y as f32 + 0.25]))
        .collect::<Vec<_>>();

    let mask = batch_points_in_polygon(&screen_positions, &triangle);

    for (i, pos) in screen_positions.chunks_exact(2).enumerate() {
        let point = vec2(pos[0], pos[1]);
        if !bounds.contains(point.x, point.y) {
            assert!(!mask.is_selected(i), "point {point} outside bounds selected");
        }
        assert_eq!(
            mask.is_selected(i),
            is_point_in_polygon(point, triangle.vertices()),
            "point {point}"
        );
    }
    assert!(mask.selected_count() > 0);
}

#[test]
fn test_batch_points_in_polygon_when_comb_should_select_even_indices() {
    const N: usize = 20;

    // Points on a row, spaced 10 px apart, and a comb polygon with a tooth around every even
    // indexed point.
    let screen_positions = given::screen_row((0..N).map(|i| i as f32 * 10.0), 5.0);

    let mut vertices = vec![vec2(-3.0, 20.0)];
    for i in (0..N).step_by(2) {
        let x = i as f32 * 10.0;
        vertices.extend([
            vec2(x - 3.0, 0.0),
            vec2(x + 3.0, 0.0),
            vec2(x + 3.0, 15.0),
            vec2(x + 17.0, 15.0),
        ]);
    }
    vertices.push(vec2(N as f32 * 10.0, 20.0));

    let mask = batch_points_in_polygon(&screen_positions, &Polygon::new(vertices));

    assert_eq!(mask.len(), N);
    for i in 0..N {
        assert_eq!(mask.is_selected(i), i % 2 == 0, "index {i}");
    }
    assert_eq!(mask.selected_count(), N / 2);
    assert_eq!(
        mask.selected_indices().collect::<Vec<_>>(),
        (0..N).step_by(2).collect::<Vec<_>>()
    );
}

#[test]
fn test_batch_points_in_polygon_when_called_twice_should_return_identical_masks() {
    let polygon = Polygon::new(vec![
        vec2(1.0, 1.0),
        vec2(40.0, 3.0),
        vec2(25.0, 17.0),
        vec2(33.0, 38.0),
        vec2(4.0, 30.0),
    ]);
    let screen_positions = (0..2000)
        .flat_map(|i| [(i * 7 % 43) as f32 + 0.5, (i * 13 % 41) as f32 + 0.5])
        .collect::<Vec<_>>();

    let first = batch_points_in_polygon(&screen_positions, &polygon);
    let second = batch_points_in_polygon(&screen_positions, &polygon);

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_batch_points_in_polygon_when_unprojectable_points_should_never_select() {
    let huge = given::square(-1e30, 1e30);
    let screen_positions = vec![
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        0.0,
        0.0,
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
    ];

    let mask = batch_points_in_polygon(&screen_positions, &huge);

    assert_eq!(mask.as_bytes(), &[0, 1, 0]);
}

#[test]
fn test_batch_points_in_polygon_into_should_replace_previous_mask() {
    let square = given::square(0.0, 10.0);
    let mut mask = SelectionMask::from(vec![1, 1, 1, 1, 1]);

    batch_points_in_polygon_into(&[5.0, 5.0, 50.0, 50.0], &square, &mut mask);

    assert_eq!(mask.as_bytes(), &[1, 0]);
}

#[test]
fn test_batch_points_in_polygon_when_no_points_should_return_empty_mask() {
    let mask = batch_points_in_polygon(&[], &given::square(0.0, 10.0));

    assert!(mask.is_empty());
}

#[test]
#[should_panic(expected = "not a multiple of 2")]
fn test_batch_points_in_polygon_when_odd_length_should_panic() {
    batch_points_in_polygon(&[1.0, 2.0, 3.0], &given::square(0.0, 10.0));
}
