//! The Star Box route: buildings lining both sides, a few in the flight
//! lane, and waves of three enemies.

use star_box::entities::{EnemyModel, ObstacleModel};
use star_box::scenario::ScenarioData;
use star_box::vector::Vector3;

const SIDE_BUILDINGS: usize = 60;
const SIDE_SPACING: f64 = 300.0;

const LANE_BUILDINGS: usize = 8;
const LANE_SPACING: f64 = 2000.0;
const LANE_HEIGHT: f64 = 250.0;

const WAVES: usize = 10;
const WAVE_SPACING: f64 = 1800.0;

/// Depth where the route starts, just beyond the culling limit.
const START_Z: f64 = -2000.0;

pub fn star_box() -> ScenarioData {
    let mut obstacles = Vec::new();

    for i in 0..SIDE_BUILDINGS {
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let x = side * (300.0 + 50.0 * ((i * 3) % 4) as f64);
        let z = START_Z - SIDE_SPACING * i as f64;
        let height = 150.0 + 100.0 * ((i * 7) % 5) as f64;
        obstacles.push(ObstacleModel::building(x, z, height));
    }

    for i in 0..LANE_BUILDINGS {
        let x = [-150.0, 0.0, 150.0][i % 3];
        let z = 2.0 * START_Z - LANE_SPACING * i as f64;
        obstacles.push(ObstacleModel::building(x, z, LANE_HEIGHT));
    }

    let mut enemies = Vec::new();
    for wave in 0..WAVES {
        let z = 1.5 * START_Z - WAVE_SPACING * wave as f64;
        let y = ((wave % 3) as f64 - 1.0) * 80.0;
        for k in 0..3 {
            let x = (k as f64 - 1.0) * 150.0;
            enemies.push(EnemyModel::new(Vector3::new(x, y, z - 200.0 * k as f64)));
        }
    }

    ScenarioData::new(obstacles, enemies)
}
