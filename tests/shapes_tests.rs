//! Rectangle and square area behavior.

use solid_patterns::shapes::{total_area, widen};
use solid_patterns::{Rectangle, Shape, Square};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_widen_changes_only_width() {
    let mut rectangle = Rectangle::new(5.0, 10.0);
    assert!(close(rectangle.area(), 50.0));

    widen(&mut rectangle, 10.0);
    assert!(close(rectangle.width(), 15.0));
    assert!(close(rectangle.height(), 10.0));
    assert!(close(rectangle.area(), 150.0));
}

#[test]
fn test_square_side_change() {
    let mut square = Square::new(5.0);
    assert!(close(square.area(), 25.0));

    square.set_side(7.0);
    assert!(close(square.side(), 7.0));
    assert!(close(square.area(), 49.0));
}

#[test]
fn test_rectangle_setters_are_independent() {
    let mut rectangle = Rectangle::new(2.0, 3.0);
    rectangle.set_height(4.0);
    assert!(close(rectangle.width(), 2.0));
    rectangle.set_width(6.0);
    assert!(close(rectangle.height(), 4.0));
    assert!(close(rectangle.area(), 24.0));
}

#[test]
fn test_shapes_substitute_through_trait() {
    let rectangle = Rectangle::new(5.0, 10.0);
    let square = Square::new(5.0);
    assert!(close(total_area(&[&rectangle, &square]), 75.0));
    assert!(close(total_area(&[]), 0.0));
}
