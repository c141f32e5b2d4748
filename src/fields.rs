/*!
Ready-made scalar fields
*/

use crate::density::ScalarField;
use crate::structs::Position;
use crate::traits::Density;

/**
A sphere: the density is `radius² - distance²`, positive inside
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<F> {
    /// Center
    pub center: Position<F>,
    /// Radius
    pub radius: F,
}

impl<F: Density> Sphere<F> {
    /// Shortcut constructor
    pub fn new(center: Position<F>, radius: F) -> Self {
        Sphere { center, radius }
    }
}

impl<F: Density> ScalarField<F> for Sphere<F> {
    fn evaluate(&self, point: &Position<F>) -> F {
        self.radius * self.radius - point.distance_squared(&self.center)
    }
}

/// One ball of a [Metaballs] field, oscillating around its anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metaball<F> {
    /// Rest position
    pub anchor: Position<F>,
    /// Radius of the ball when alone
    pub radius: F,
    /// Half the course on each axis
    pub amplitude: [F; 3],
    /// Angular speed of the oscillation, in radians per time unit
    pub frequency: F,
    /// Phase of the oscillation at time 0
    pub phase: F,
}

impl<F: Density> Metaball<F> {
    /// A ball that does not move
    pub fn fixed(anchor: Position<F>, radius: F) -> Self {
        Metaball {
            anchor,
            radius,
            amplitude: [F::ZERO; 3],
            frequency: F::ZERO,
            phase: F::ZERO,
        }
    }

    fn center_at(&self, time: F) -> Position<F> {
        let swing = (self.frequency * time + self.phase).sin();
        let offset = [
            self.amplitude[0] * swing,
            self.amplitude[1] * swing,
            self.amplitude[2] * swing,
        ];
        &self.anchor + &offset
    }
}

/**
Blobs merging into each other when close.

The density is `sum(radius² / distance²) - 1` over all balls. Each [advance](ScalarField::advance)
moves the clock by `time_step` and the balls along their oscillation.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Metaballs<F> {
    balls: Vec<Metaball<F>>,
    centers: Vec<Position<F>>,
    time: F,
    time_step: F,
}

impl<F: Density> Metaballs<F> {
    /// Balls at time 0
    pub fn new(balls: Vec<Metaball<F>>, time_step: F) -> Self {
        let centers = balls.iter().map(|ball| ball.center_at(F::ZERO)).collect();
        Metaballs {
            balls,
            centers,
            time: F::ZERO,
            time_step,
        }
    }

    /// Current time
    pub fn time(&self) -> F {
        self.time
    }

    /// Where the balls currently are
    pub fn centers(&self) -> &[Position<F>] {
        &self.centers
    }
}

impl<F: Density> ScalarField<F> for Metaballs<F> {
    fn evaluate(&self, point: &Position<F>) -> F {
        let mut density = -F::one();
        for (ball, center) in self.balls.iter().zip(self.centers.iter()) {
            // Clamped so that a point right on a center stays finite
            let distance_squared = point.distance_squared(center).max(F::EPSILON);
            density = density + ball.radius * ball.radius / distance_squared;
        }
        density
    }

    fn advance(&mut self) {
        self.time = self.time + self.time_step;
        let time = self.time;
        for (center, ball) in self.centers.iter_mut().zip(self.balls.iter()) {
            *center = ball.center_at(time);
        }
    }
}
