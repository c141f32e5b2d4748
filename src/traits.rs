/*!
   Numeric traits used by the extraction algorithm
*/

use std::fmt::Debug;

use num::Float;

/**
Trait that must be implemented for coordinates (x/y/z)
It mostly has to be a float with a few conversions from integers
*/
pub trait Coordinate: Float + Default + Debug {
    /**
    A value of this type representing the lattice index `i`
    */
    fn from_index(i: usize) -> Self;

    /**
    A value of this type approximating `v`. Used for constants (default grid, steps)
    */
    fn from_f64(v: f64) -> Self;

    /**
    Lossy conversion to f64, for error reporting and logs
    */
    fn as_f64(self) -> f64;
}

/**
Trait that must be implemented for a type to be used as a density by the algorithm.
Positive densities are inside the surface, zero and negative ones are outside.
*/
pub trait Density: Coordinate {
    /// Epsilon value (use for float comparisons)
    const EPSILON: Self;
    /// Value for 0.5
    const HALF: Self;
    /// Value for 0
    const ZERO: Self;

    /// Whether a point with this density is inside the surface. Zero counts as outside
    fn inside(&self) -> bool {
        *self > Self::ZERO
    }

    /**
    Where between A and B the zero level is crossed, as `|a| / |b - a|`

    For an edge whose ends lie on both sides of the surface this is the same as the usual
    `a / (a - b)`. Returns `None` when `b == a`, when `b - a` overflows, or when the ratio is
    not finite, leaving it to the caller to pick a fallback.
    ```
    # use marching_field::traits::Density;
    assert_eq!(f32::interp(1.0, -1.0), Some(0.5));
    assert_eq!(f64::interp(-1.0, 3.0), Some(0.25));
    assert_eq!(f64::interp(2.0, 2.0), None);
    assert_eq!(f64::interp(f64::MAX, -f64::MAX), None);
    ```
    */
    fn interp(a: Self, b: Self) -> Option<Self> {
        let span = (b - a).abs();
        if span > Self::ZERO && span.is_finite() {
            let t = a.abs() / span;
            if t.is_finite() {
                return Some(t);
            }
        }
        None
    }

    /// Scale a (central difference) normal to unit length. Null vectors are kept null
    fn to_unit_normal(x: Self, y: Self, z: Self) -> [Self; 3] {
        let norm = (x * x + y * y + z * z).sqrt();
        if norm > Self::EPSILON {
            [x / norm, y / norm, z / norm]
        } else {
            [Self::ZERO, Self::ZERO, Self::ZERO]
        }
    }
}

macro_rules! float_impl_coordinate {
    ($T:ident) => {
        impl Coordinate for $T {
            fn from_index(i: usize) -> Self {
                i as $T
            }

            fn from_f64(v: f64) -> Self {
                v as $T
            }

            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

float_impl_coordinate!(f32);
float_impl_coordinate!(f64);

macro_rules! float_impl_density {
    ($T:ident) => {
        impl Density for $T {
            const EPSILON: Self = $T::EPSILON;
            const HALF: Self = 0.5;
            const ZERO: Self = 0.0;
        }
    };
}

float_impl_density!(f32);
float_impl_density!(f64);
