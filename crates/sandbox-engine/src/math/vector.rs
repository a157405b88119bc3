use std::f64::consts::{PI, TAU};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// 2D vector carrying both its Cartesian and polar forms.
///
/// The four fields are always mutually consistent: every constructor and
/// setter recomputes the other representation on the spot. Fields are
/// private so nothing can write one form without the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    x: f64,
    y: f64,
    magnitude: f64,
    angle: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 {
        x: 0.0,
        y: 0.0,
        magnitude: 0.0,
        angle: 0.0,
    };

    /// Build from Cartesian components.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            magnitude: (x * x + y * y).sqrt(),
            angle: y.atan2(x),
        }
    }

    /// Build from a magnitude and an angle in radians.
    ///
    /// A negative magnitude points the opposite way: it is stored as its
    /// absolute value with the angle turned by π.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let x = magnitude * angle.cos();
        let y = magnitude * angle.sin();
        if magnitude < 0.0 {
            Self {
                x,
                y,
                magnitude: -magnitude,
                angle: wrap_angle(angle + PI),
            }
        } else {
            Self {
                x,
                y,
                magnitude,
                angle,
            }
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Angle in radians, as returned by `atan2(y, x)` for Cartesian inputs.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Replace x, keeping the stored y.
    pub fn set_x(&mut self, x: f64) {
        *self = Self::from_cartesian(x, self.y);
    }

    /// Replace y, keeping the stored x.
    pub fn set_y(&mut self, y: f64) {
        *self = Self::from_cartesian(self.x, y);
    }

    /// Replace the magnitude, keeping the stored angle.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        *self = Self::from_polar(magnitude, self.angle);
    }

    /// Replace the angle, keeping the stored magnitude.
    pub fn set_angle(&mut self, angle: f64) {
        *self = Self::from_polar(self.magnitude, angle);
    }

    /// Divide both components by a scalar.
    pub fn div_scalar(&self, divisor: f64) -> Vector2 {
        Vector2::from_cartesian(self.x / divisor, self.y / divisor)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }
}

/// Wrap into (-π, π].
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<glam::DVec2> for Vector2 {
    fn from(v: glam::DVec2) -> Self {
        Vector2::from_cartesian(v.x, v.y)
    }
}

/// Component-wise sum. The result is rebuilt from its Cartesian form.
impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::from_cartesian(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Folds left to right, so the sum is reproducible for a given order.
impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vector2> for Vector2 {
    fn sum<I: Iterator<Item = &'a Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::ZERO, |acc, v| acc + *v)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
