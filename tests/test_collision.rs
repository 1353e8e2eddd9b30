use star_box::collision::{self, CollisionResult};
use star_box::entities::*;
use star_box::vector::Vector3;

const SEED: u64 = 42;

fn shot_at(x: f64, z: f64) -> ShotModel {
    ShotModel::new(Vector3::new(x, 0.0, z), Vector3::zero(), Rgba::new(0, 100, 255, 0.2))
}

fn enemy_at(x: f64, z: f64) -> EnemyModel {
    EnemyModel::new(Vector3::new(x, 0.0, z))
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[test]
fn one_hit_among_two_sources_and_three_destinations() {
    let sources = vec![shot_at(0.0, -500.0), shot_at(1000.0, -500.0)];
    let destinations = vec![enemy_at(-500.0, -520.0), enemy_at(0.0, -520.0), enemy_at(500.0, -520.0)];

    let result = collision::between(
        &sources,
        &destinations,
        |shot, enemy| collision::shot_and_target(shot, enemy),
        ExplosionModel::factory(SEED),
    );

    let expected_explosion = ExplosionModel::factory(SEED)(&destinations[1]);
    assert_eq!(
        result,
        CollisionResult {
            sources: vec![sources[1].clone()],
            destinations: vec![destinations[0].clone(), destinations[2].clone()],
            explosions: vec![expected_explosion],
        }
    );
}

#[test]
fn nothing_overlapping_leaves_both_groups_intact() {
    let sources = vec![shot_at(0.0, -500.0)];
    let destinations = vec![enemy_at(0.0, -900.0), enemy_at(0.0, -100.0)];

    let result = collision::between(
        &sources,
        &destinations,
        |shot, enemy| collision::shot_and_target(shot, enemy),
        ExplosionModel::factory(SEED),
    );

    assert_eq!(result.sources, sources);
    assert_eq!(result.destinations, destinations);
    assert!(result.explosions.is_empty());
}

#[test]
fn destination_hit_twice_explodes_once() {
    let sources = vec![shot_at(0.0, -500.0), shot_at(10.0, -500.0)];
    let destinations = vec![enemy_at(5.0, -520.0)];

    let result = collision::between(
        &sources,
        &destinations,
        |shot, enemy| collision::shot_and_target(shot, enemy),
        ExplosionModel::factory(SEED),
    );

    assert!(result.sources.is_empty());
    assert!(result.destinations.is_empty());
    assert_eq!(result.explosions.len(), 1);
}

#[test]
fn one_source_can_destroy_several_destinations() {
    let sources = vec![0];
    let destinations = vec![enemy_at(0.0, -100.0), enemy_at(0.0, -200.0), enemy_at(0.0, -300.0)];

    // a source that hits everything nearer than z = -250
    let result = collision::between(
        &sources,
        &destinations,
        |_, enemy| enemy.position().z > -250.0,
        ExplosionModel::factory(SEED),
    );

    assert!(result.sources.is_empty());
    assert_eq!(result.destinations, vec![destinations[2].clone()]);
    assert_eq!(result.explosions.len(), 2);
    assert_eq!(result.explosions[0].position(), destinations[0].position());
    assert_eq!(result.explosions[1].position(), destinations[1].position());
}

#[test]
fn empty_groups() {
    let sources: Vec<ShotModel> = Vec::new();
    let destinations = vec![enemy_at(0.0, -100.0)];

    let result = collision::between(
        &sources,
        &destinations,
        |shot, enemy| collision::shot_and_target(shot, enemy),
        ExplosionModel::factory(SEED),
    );
    assert_eq!(result.destinations, destinations);
    assert!(result.explosions.is_empty());
}

// ── Detectors ─────────────────────────────────────────────────────────────────

#[test]
fn player_inside_a_building_collides() {
    let player = PlayerModel::at(Vector3::new(0.0, -100.0, -500.0));
    assert!(collision::obstacle_and_player(&ObstacleModel::building(0.0, -500.0, 300.0), &player));
    assert!(!collision::obstacle_and_player(&ObstacleModel::building(200.0, -500.0, 300.0), &player));
    // flying over the roof
    assert!(!collision::obstacle_and_player(&ObstacleModel::building(0.0, -500.0, 50.0), &player));
}

#[test]
fn shot_hits_within_the_enlarged_radius() {
    // enemy size 25, so the ball radius is 30
    let shot = shot_at(29.0, -500.0);
    assert!(collision::shot_and_target(&shot, &enemy_at(0.0, -520.0)));

    let shot = shot_at(31.0, -500.0);
    assert!(!collision::shot_and_target(&shot, &enemy_at(0.0, -520.0)));
}
