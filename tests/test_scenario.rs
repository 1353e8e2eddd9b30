use star_box::entities::*;
use star_box::scenario::{Scenario, ScenarioData, VisibleDistances};
use star_box::vector::Vector3;

const VISIBLE: VisibleDistances = VisibleDistances {
    obstacles: 2000.0,
    enemies: 1500.0,
};

fn obstacle_at(z: f64) -> ObstacleModel {
    ObstacleModel::new(Vector3::new(0.0, 0.0, z), Vector3::new(100.0, 100.0, 100.0))
}

fn depths<M: Model>(models: impl IntoIterator<Item = M>) -> Vec<f64> {
    models.into_iter().map(|m| m.position().z).collect()
}

#[test]
fn queues_are_sorted_nearest_first() {
    let data = ScenarioData::new(
        vec![obstacle_at(-5000.0), obstacle_at(-2500.0), obstacle_at(-3000.0)],
        vec![EnemyModel::new(Vector3::new(0.0, 0.0, -4000.0)), EnemyModel::new(Vector3::new(0.0, 0.0, -2000.0))],
    );

    assert_eq!(depths(data.obstacles), vec![-2500.0, -3000.0, -5000.0]);
    assert_eq!(depths(data.enemies), vec![-2000.0, -4000.0]);
}

#[test]
fn model_beyond_the_window_waits_then_is_released_once() {
    let data = ScenarioData::new(vec![obstacle_at(-2001.0)], Vec::new());
    let mut scenario = Scenario::new(data, VISIBLE);

    assert!(scenario.next_data(0.0).is_empty());
    assert!(!scenario.is_end());

    let released = scenario.next_data(-1.0);
    assert_eq!(depths(released.obstacles), vec![-2000.0]);
    assert!(scenario.is_end());
    assert_eq!(scenario.offset(), -1.0);

    assert!(scenario.next_data(-100.0).is_empty());
}

#[test]
fn released_models_are_shifted_by_the_offset() {
    let data = ScenarioData::new(
        vec![obstacle_at(-5000.0), obstacle_at(-2500.0), obstacle_at(-3000.0)],
        Vec::new(),
    );
    let mut scenario = Scenario::new(data, VISIBLE);

    let released = scenario.next_data(-1000.0);
    assert_eq!(depths(released.obstacles), vec![-1500.0, -2000.0]);

    assert!(scenario.next_data(-1000.0).is_empty());

    let released = scenario.next_data(-1000.0);
    assert_eq!(depths(released.obstacles), vec![-2000.0]);
    assert!(scenario.is_end());
}

#[test]
fn enemies_use_their_own_window() {
    let data = ScenarioData::new(
        vec![obstacle_at(-1800.0)],
        vec![EnemyModel::new(Vector3::new(0.0, 0.0, -1800.0))],
    );
    let mut scenario = Scenario::new(data, VISIBLE);

    let released = scenario.next_data(0.0);
    assert_eq!(released.obstacles.len(), 1);
    assert!(released.enemies.is_empty());

    let released = scenario.next_data(-300.0);
    assert!(released.obstacles.is_empty());
    assert_eq!(depths(released.enemies), vec![-1500.0]);
}

#[test]
fn empty_scenario_is_at_its_end() {
    let scenario = Scenario::new(ScenarioData::default(), VISIBLE);
    assert!(scenario.is_end());
    assert_eq!(scenario.offset(), 0.0);
}
