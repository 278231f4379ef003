//! Math utility functions.

use euclid::default::Point3D;
use num_traits::Float;

use crate::{Component, Rgb};

type Point = Point3D<Component>;

/// Bound `value` to the closed range `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round `value` to `precision` decimal digits, with halves rounded away from
/// zero.
pub fn round_to<T: Float>(value: T, precision: u32) -> T {
    let Some(factor) = T::from(10_u64.pow(precision.min(18))) else {
        return value;
    };
    (value * factor).round() / factor
}

/// Euclidean distance between two colors, measured on the raw 0-255 channels.
pub fn distance(a: &Rgb, b: &Rgb) -> Component {
    point(a).distance_to(point(b))
}

fn point(rgb: &Rgb) -> Point {
    let (red, green, blue) = rgb.components();
    Point::new(red.into(), green.into(), blue.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn clamp_integers_and_floats() {
        assert_eq!(clamp(300, 0, 255), 255);
        assert_eq!(clamp(-100, 0, 255), 0);
        assert_eq!(clamp(17, 0, 255), 17);
        assert_eq!(clamp(1.42, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.2, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn round_to_decimal_digits() {
        assert_component_eq!(round_to(0.839_622_6 as Component, 4), 0.8396);
        assert_component_eq!(round_to(0.415_686_3 as Component, 4), 0.4157);
        assert_component_eq!(round_to(0.25 as Component, 1), 0.3);
        assert_component_eq!(round_to(2.5 as Component, 0), 3.0);
    }

    #[test]
    fn distance_between_channels() {
        let black = Rgb::new(0, 0, 0);
        assert_component_eq!(distance(&black, &black), 0.0);
        assert_component_eq!(distance(&black, &Rgb::new(3, 4, 0)), 5.0);
        assert_component_eq!(
            distance(&Rgb::new(51, 51, 51), &Rgb::new(47, 49, 51)),
            (20.0 as Component).sqrt()
        );
    }
}
