use std::f64::consts::TAU;
use std::fmt;
use std::ops;

/// An angle in radians.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rad<T>(pub T);

impl From<Deg<f64>> for Rad<f64> {
    fn from(value: Deg<f64>) -> Self {
        Rad(value.0 / 360. * TAU)
    }
}

impl Rad<f64> {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    /// Angle of the point `(x, y)`, i.e. `atan(y / x)` with the quadrant taken into account.
    pub fn atan2(y: f64, x: f64) -> Self {
        Rad(y.atan2(x))
    }

    pub fn asin(x: f64) -> Self {
        Rad(x.asin())
    }

    pub fn acos(x: f64) -> Self {
        Rad(x.acos())
    }

    pub fn atan(x: f64) -> Self {
        Rad(x.atan())
    }
}

/// An angle in degrees.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Deg<T>(pub T);

impl From<Rad<f64>> for Deg<f64> {
    fn from(value: Rad<f64>) -> Self {
        Deg(value.0 / TAU * 360.)
    }
}

macro_rules! impl_angle_ops {
    ($angle:ident, $unit:literal) => {
        impl<T: Default> Default for $angle<T> {
            fn default() -> Self {
                $angle(T::default())
            }
        }

        impl<T: ops::Add> ops::Add for $angle<T> {
            type Output = $angle<T::Output>;

            fn add(self, rhs: Self) -> Self::Output {
                $angle(self.0 + rhs.0)
            }
        }

        impl<T: ops::AddAssign> ops::AddAssign for $angle<T> {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0
            }
        }

        impl<T: ops::Sub> ops::Sub for $angle<T> {
            type Output = $angle<T::Output>;

            fn sub(self, rhs: Self) -> Self::Output {
                $angle(self.0 - rhs.0)
            }
        }

        impl<T: ops::Neg> ops::Neg for $angle<T> {
            type Output = $angle<T::Output>;

            fn neg(self) -> Self::Output {
                $angle(-self.0)
            }
        }

        impl<T: ops::Mul> ops::Mul<T> for $angle<T> {
            type Output = $angle<T::Output>;

            fn mul(self, rhs: T) -> Self::Output {
                $angle(self.0 * rhs)
            }
        }

        impl<T: ops::Div> ops::Div<T> for $angle<T> {
            type Output = $angle<T::Output>;

            fn div(self, rhs: T) -> Self::Output {
                $angle(self.0 / rhs)
            }
        }

        impl<T: fmt::Display> fmt::Display for $angle<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $unit)
            }
        }
    };
}

impl_angle_ops!(Rad, "rad");
impl_angle_ops!(Deg, "°");
