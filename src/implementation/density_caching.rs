use std::mem;

use super::super::{
    density::ScalarField,
    structs::{GridBounds, Position},
    traits::Density,
};

/*
Caches lattice densities for the slab of cells currently traversed: the lattice plane at the low x
of the slab and the one at its high x. Moving to the next slab reuses the high plane as the new low one,
so each lattice point is evaluated once per pass instead of once per cell touching it.
*/
pub struct PreCachingField<'f, F, S: ?Sized> {
    field: &'f S,
    bounds: GridBounds<F>,
    lattice_points: usize, // Along each axis: one more than the cells
    low_plane: Vec<F>,
    high_plane: Vec<F>,
    loaded_slab: Option<usize>,
}

impl<'f, F, S> PreCachingField<'f, F, S>
where
    F: Density,
    S: ScalarField<F> + ?Sized,
{
    pub fn new(field: &'f S, bounds: GridBounds<F>, cells_per_axis: usize) -> Self {
        Self {
            field,
            bounds,
            lattice_points: cells_per_axis + 1,
            low_plane: Vec::new(),
            high_plane: Vec::new(),
            loaded_slab: None,
        }
    }

    // Make the densities of cells with the given x index available
    pub fn load_slab(&mut self, slab: usize) {
        match self.loaded_slab {
            Some(loaded) if loaded == slab => return,
            Some(loaded) if loaded + 1 == slab => {
                mem::swap(&mut self.low_plane, &mut self.high_plane);
            }
            _ => {
                Self::sample_plane(
                    self.field,
                    &self.bounds,
                    self.lattice_points,
                    slab,
                    &mut self.low_plane,
                );
            }
        }
        Self::sample_plane(
            self.field,
            &self.bounds,
            self.lattice_points,
            slab + 1,
            &mut self.high_plane,
        );
        self.loaded_slab = Some(slab);
    }

    fn sample_plane(
        field: &S,
        bounds: &GridBounds<F>,
        points: usize,
        x: usize,
        plane: &mut Vec<F>,
    ) {
        plane.clear();
        plane.reserve(points * points);
        for y in 0..points {
            for z in 0..points {
                plane.push(field.evaluate(&bounds.lattice_point(x, y, z)));
            }
        }
    }

    /*
    Density at a lattice point of the loaded slab. `high_x` selects the plane.
    y and z are lattice indices, so they can go up to cells_per_axis (included)
    */
    pub fn lattice_density(&self, high_x: bool, y: usize, z: usize) -> F {
        let plane = if high_x {
            &self.high_plane
        } else {
            &self.low_plane
        };
        plane[self.lattice_points * y + z]
    }

    // Uncached access to the field, for points off the lattice
    pub fn evaluate(&self, point: &Position<F>) -> F {
        self.field.evaluate(point)
    }

    pub fn bounds(&self) -> &GridBounds<F> {
        &self.bounds
    }
}
