use crate::core::data::complex::Complex;

/// Squared escape radius. Orbits with `|z|² > ESCAPE_RADIUS_SQUARED` diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

pub trait EscapeTimeAlgorithm {
    /// Number of steps taken before the orbit leaves the escape radius, or
    /// `max_iterations` if it never does. The bound is checked before every
    /// step, so a start point already outside the radius yields 0.
    fn iterate(&self, point: Complex, max_iterations: u32) -> u32;

    /// Closed-form test for points whose orbit is known never to escape.
    fn is_known_bounded(&self, _point: Complex) -> bool {
        false
    }

    fn escape_time(&self, point: Complex, max_iterations: u32) -> u32 {
        if self.is_known_bounded(point) {
            max_iterations
        } else {
            self.iterate(point, max_iterations)
        }
    }
}

/// Runs `z ← z² + c` from `z` until it escapes or the budget runs out.
#[must_use]
pub fn iterate_quadratic(mut z: Complex, c: Complex, max_iterations: u32) -> u32 {
    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubBoundedAlgorithm {}

    impl EscapeTimeAlgorithm for StubBoundedAlgorithm {
        fn iterate(&self, _: Complex, _: u32) -> u32 {
            panic!("iterate must not run for known-bounded points")
        }

        fn is_known_bounded(&self, _: Complex) -> bool {
            true
        }
    }

    struct StubEscapingAlgorithm {}

    impl EscapeTimeAlgorithm for StubEscapingAlgorithm {
        fn iterate(&self, _: Complex, _: u32) -> u32 {
            7
        }
    }

    #[test]
    fn test_escape_time_short_circuits_known_bounded_points() {
        assert_eq!(StubBoundedAlgorithm {}.escape_time(Complex::ZERO, 42), 42);
    }

    #[test]
    fn test_escape_time_defaults_to_iterate() {
        assert_eq!(StubEscapingAlgorithm {}.escape_time(Complex::ZERO, 42), 7);
    }

    #[test]
    fn test_iterate_quadratic_start_outside_radius_is_zero() {
        assert_eq!(iterate_quadratic(Complex::new(3.0, 0.0), Complex::ZERO, 10), 0);
    }

    #[test]
    fn test_iterate_quadratic_boundary_point_does_not_count_as_escaped() {
        // |2 + 0i|² == 4, which is still inside the bound.
        assert_eq!(iterate_quadratic(Complex::new(2.0, 0.0), Complex::ZERO, 10), 1);
    }

    #[test]
    fn test_iterate_quadratic_zero_budget() {
        assert_eq!(iterate_quadratic(Complex::new(3.0, 0.0), Complex::ZERO, 0), 0);
    }
}
