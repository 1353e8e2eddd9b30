//! Releases queued obstacles and enemies into the world as it advances.

use std::collections::VecDeque;

use crate::entities::{EnemyModel, Model, ObstacleModel};
use crate::vector::Vector3;

/// Obstacles and enemies waiting to be spawned, or just released.
///
/// Each queue is ordered so that the model to become visible first (the
/// one with the greatest depth coordinate) sits at the front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioData {
    pub obstacles: VecDeque<ObstacleModel>,
    pub enemies: VecDeque<EnemyModel>,
}

impl ScenarioData {
    pub fn new(obstacles: Vec<ObstacleModel>, enemies: Vec<EnemyModel>) -> Self {
        Self {
            obstacles: sorted_by_depth(obstacles),
            enemies: sorted_by_depth(enemies),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.enemies.is_empty()
    }
}

fn sorted_by_depth<M: Model>(mut models: Vec<M>) -> VecDeque<M> {
    models.sort_by(|a, b| b.position().z.total_cmp(&a.position().z));
    models.into()
}

/// Visibility windows, measured from the camera along −z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleDistances {
    pub obstacles: f64,
    pub enemies: f64,
}

#[derive(Clone, Debug)]
pub struct Scenario {
    data: ScenarioData,
    visible: VisibleDistances,
    offset: f64,
}

impl Scenario {
    pub fn new(data: ScenarioData, visible: VisibleDistances) -> Self {
        Self {
            data,
            visible,
            offset: 0.0,
        }
    }

    /// Total depth travelled so far.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Nothing is left to release.
    pub fn is_end(&self) -> bool {
        self.data.is_empty()
    }

    /// Advances by `z` and hands out every model that came into view,
    /// already moved into the world's frame of reference.
    pub fn next_data(&mut self, z: f64) -> ScenarioData {
        self.offset += z;
        let shift = Vector3::new(0.0, 0.0, -self.offset);

        let obstacles = release(&mut self.data.obstacles, self.visible.obstacles, self.offset)
            .into_iter()
            .map(|model| model.translated(shift))
            .collect();
        let enemies = release(&mut self.data.enemies, self.visible.enemies, self.offset)
            .into_iter()
            .map(|model| model.translated(shift))
            .collect();

        ScenarioData { obstacles, enemies }
    }
}

/// Pops models off the front of `queue` while they are within view.
fn release<M: Model>(queue: &mut VecDeque<M>, visible_distance: f64, offset: f64) -> Vec<M> {
    let mut released = Vec::new();
    while let Some(model) = queue.front() {
        if model.position().z < -visible_distance + offset {
            break;
        }
        released.extend(queue.pop_front());
    }
    released
}
