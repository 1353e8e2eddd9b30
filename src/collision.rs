//! Collision detection and resolution between two groups of models.
//!
//! When a source hits a destination, both disappear and the destination is
//! replaced by an explosion built from its last state.

use crate::entities::{ExplosionModel, Model};
use crate::overlap;

/// Ball radius used for a shot target, relative to its largest extent.
const TARGET_RADIUS_SCALE: f64 = 1.2;

/// What is left of both groups after one round of collisions.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionResult<S, D> {
    pub sources: Vec<S>,
    pub destinations: Vec<D>,
    pub explosions: Vec<ExplosionModel>,
}

/// Tests every source against every destination.
///
/// A model is hit when it overlaps anything in the other group. Survivors
/// keep their order; every hit destination yields exactly one explosion.
pub fn between<S, D>(
    sources: &[S],
    destinations: &[D],
    detect: impl Fn(&S, &D) -> bool,
    mut explode: impl FnMut(&dyn Model) -> ExplosionModel,
) -> CollisionResult<S, D>
where
    S: Clone,
    D: Model + Clone,
{
    let mut source_hit = vec![false; sources.len()];
    let mut destination_hit = vec![false; destinations.len()];

    for (i, source) in sources.iter().enumerate() {
        for (j, destination) in destinations.iter().enumerate() {
            if detect(source, destination) {
                source_hit[i] = true;
                destination_hit[j] = true;
            }
        }
    }

    let sources_after = sources
        .iter()
        .zip(&source_hit)
        .filter(|(_, &hit)| !hit)
        .map(|(model, _)| model.clone())
        .collect();

    let mut destinations_after = Vec::new();
    let mut explosions = Vec::new();
    for (model, &hit) in destinations.iter().zip(&destination_hit) {
        if hit {
            explosions.push(explode(model));
        } else {
            destinations_after.push(model.clone());
        }
    }

    CollisionResult {
        sources: sources_after,
        destinations: destinations_after,
        explosions,
    }
}

// ── Detectors ─────────────────────────────────────────────────────────────────

/// The player has flown into the obstacle's box.
pub fn obstacle_and_player(obstacle: &impl Model, player: &impl Model) -> bool {
    overlap::point_in_cuboid(player.position(), obstacle.position(), obstacle.size())
}

/// The shot's path during this frame passes through the target.
pub fn shot_and_target(shot: &impl Model, target: &impl Model) -> bool {
    let start = shot.position();
    let end = start + shot.velocity();
    let radius = TARGET_RADIUS_SCALE * target.size().max_component();
    overlap::segment_vs_ball(start, end, target.position(), radius)
}
