//! Semi-implicit Euler integration at a fixed tick rate.
//!
//! Velocity is always updated first and the *new* velocity moves the
//! position. Swapping the order changes energy drift, so every caller goes
//! through these helpers rather than open-coding the update.

use crate::math::Vector2;

/// One Cartesian axis of a [`Vector2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn of(self, v: &Vector2) -> f64 {
        match self {
            Axis::X => v.x(),
            Axis::Y => v.y(),
        }
    }

    /// Overwrite this component through the invariant-preserving setter.
    pub fn set(self, v: &mut Vector2, value: f64) {
        match self {
            Axis::X => v.set_x(value),
            Axis::Y => v.set_y(value),
        }
    }
}

/// `F = m·a`, component-wise. `mass` is validated positive at body construction.
pub fn acceleration(net_force: &Vector2, mass: f64) -> Vector2 {
    net_force.div_scalar(mass)
}

/// Free motion on both axes.
pub fn integrate_free(position: &mut Vector2, velocity: &mut Vector2, acceleration: &Vector2, tick_rate: f64) {
    velocity.set_x(velocity.x() + acceleration.x() / tick_rate);
    velocity.set_y(velocity.y() + acceleration.y() / tick_rate);
    let displacement = Vector2::from_cartesian(velocity.x() / tick_rate, velocity.y() / tick_rate);
    *position = *position + displacement;
}

/// Free motion along a single axis, leaving the other untouched.
pub fn integrate_axis(
    axis: Axis,
    position: &mut Vector2,
    velocity: &mut Vector2,
    acceleration: &Vector2,
    tick_rate: f64,
) {
    let v = axis.of(velocity) + axis.of(acceleration) / tick_rate;
    axis.set(velocity, v);
    axis.set(position, axis.of(position) + v / tick_rate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn acceleration_divides_by_mass() {
        let a = acceleration(&Vector2::from_cartesian(6.0, -19.62), 2.0);
        assert_relative_eq!(a.x(), 3.0);
        assert_relative_eq!(a.y(), -9.81);
    }

    #[test]
    fn position_uses_updated_velocity() {
        let mut p = Vector2::from_cartesian(0.0, 10.0);
        let mut v = Vector2::ZERO;
        let a = Vector2::from_cartesian(0.0, -12.0);
        integrate_free(&mut p, &mut v, &a, 2.0);
        // v = -6, p = 10 + (-6 / 2)
        assert_eq!(v.y(), -6.0);
        assert_eq!(p.y(), 7.0);
        assert_eq!(p.x(), 0.0);
    }

    #[test]
    fn single_axis_leaves_the_other_alone() {
        let mut p = Vector2::from_cartesian(1.0, 2.0);
        let mut v = Vector2::from_cartesian(4.0, 5.0);
        let a = Vector2::from_cartesian(8.0, 8.0);
        integrate_axis(Axis::X, &mut p, &mut v, &a, 4.0);
        assert_eq!(v.x(), 6.0);
        assert_eq!(p.x(), 2.5);
        assert_eq!(v.y(), 5.0);
        assert_eq!(p.y(), 2.0);
    }

    #[test]
    fn axis_other_flips() {
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.other(), Axis::X);
    }
}
