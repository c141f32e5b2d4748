/*!
    The scalar field abstraction the extraction samples densities from
*/

use crate::structs::Position;

/**
A source of "world" density (gives density for any world x,y,z coordinates)

Positive densities are inside the surface, and the surface itself is where the density crosses zero.
*/
pub trait ScalarField<F> {
    /**
    Obtain the density at the given point in space

    This will be called many times per cell, sometimes for the same point, and must return
    the same value each time until the next [advance](ScalarField::advance).
    */
    fn evaluate(&self, point: &Position<F>) -> F;

    /**
    Step any time-varying state of the field (moving sources, ...).
    Hosts call this once before each pass; the extraction itself never does.
    */
    fn advance(&mut self) {}
}

/**
ScalarField implementation for shared references. Advancing through a shared reference does nothing
*/
impl<F, S> ScalarField<F> for &S
where
    S: ScalarField<F> + ?Sized,
{
    fn evaluate(&self, point: &Position<F>) -> F {
        (**self).evaluate(point)
    }
}

/**
ScalarField implementation for mutable references
*/
impl<F, S> ScalarField<F> for &mut S
where
    S: ScalarField<F> + ?Sized,
{
    fn evaluate(&self, point: &Position<F>) -> F {
        (**self).evaluate(point)
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/**
ScalarField implementation for boxed fields, so heterogeneous fields can be swapped at runtime
*/
impl<F, S> ScalarField<F> for Box<S>
where
    S: ScalarField<F> + ?Sized,
{
    fn evaluate(&self, point: &Position<F>) -> F {
        (**self).evaluate(point)
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/**
Wrapper for using closures as [ScalarField]
We need the newtype wrapping because we implement ScalarField for &ScalarField too, and that would conflict without the wrapping
*/
pub struct ScalarFieldForFn<FUN>(pub FUN);

/**
ScalarField implementation for closures
 */
impl<F, FUN> ScalarField<F> for ScalarFieldForFn<FUN>
where
    F: Copy,
    FUN: Fn(F, F, F) -> F,
{
    fn evaluate(&self, point: &Position<F>) -> F {
        (self.0)(point.x, point.y, point.z)
    }
}
