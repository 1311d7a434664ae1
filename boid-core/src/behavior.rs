//! The three local flocking rules.
//!
//! Every rule measures neighbours with the toroidal metric of the flock's
//! [`Bounds`] and returns an already weighted steering vector. `others` must
//! not contain the boid being steered; a rule with no neighbour in range
//! returns the zero vector.

use crate::boid::Boid;
use crate::config::BoidConfig;
use crate::torus::Bounds;
use crate::vector::Vector2D;

/// Inverse-square repulsion from neighbours closer than `separation_distance`,
/// averaged over those neighbours.
pub fn separation<'a, I>(boid: &Boid, others: I, bounds: &Bounds, config: &BoidConfig) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid>,
{
    let mut steering = Vector2D::zero();
    let mut count = 0;

    for other in others {
        // Points from the neighbour to us.
        let away = bounds.shortest_delta(other.position, boid.position);
        let distance = away.magnitude();
        if distance > 0.0 && distance < config.separation_distance {
            steering += away / (distance * distance);
            count += 1;
        }
    }

    if count == 0 {
        return Vector2D::zero();
    }
    steering / count as f32 * config.separation_weight
}

/// Steers towards the mean velocity of neighbours within `alignment_distance`.
pub fn alignment<'a, I>(boid: &Boid, others: I, bounds: &Bounds, config: &BoidConfig) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in others {
        let distance = bounds.shortest_distance(boid.position, other.position);
        if distance < config.alignment_distance {
            sum += other.velocity;
            count += 1;
        }
    }

    if count == 0 {
        return Vector2D::zero();
    }
    let average = sum / count as f32;
    (average - boid.velocity) * config.alignment_weight
}

/// Steers towards the local centroid of neighbours within `cohesion_distance`.
///
/// The centroid is accumulated as displacements from `boid`, so it stays
/// correct when the group straddles a world edge. `weight` is passed in
/// because cluster pulses amplify it.
pub fn cohesion<'a, I>(
    boid: &Boid,
    others: I,
    bounds: &Bounds,
    config: &BoidConfig,
    weight: f32,
) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid>,
{
    let mut center = Vector2D::zero();
    let mut count = 0;

    for other in others {
        let toward = bounds.shortest_delta(boid.position, other.position);
        if toward.magnitude() < config.cohesion_distance {
            center += toward;
            count += 1;
        }
    }

    if count == 0 {
        return Vector2D::zero();
    }
    center / count as f32 * weight
}

/// Sum of all three rules for the boid at `index` within `population`.
pub fn steering(
    index: usize,
    population: &[Boid],
    bounds: &Bounds,
    config: &BoidConfig,
    cluster_active: bool,
) -> Vector2D {
    let boid = &population[index];
    let others = || {
        population
            .iter()
            .enumerate()
            .filter(move |(j, _)| *j != index)
            .map(|(_, other)| other)
    };

    let sep = separation(boid, others(), bounds, config);
    let ali = alignment(boid, others(), bounds, config);
    let coh = cohesion(
        boid,
        others(),
        bounds,
        config,
        config.effective_cohesion_weight(cluster_active),
    );
    sep + ali + coh
}
