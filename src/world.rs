//! The game world and its fixed-step frame cycle.
//!
//! One call to [`World::proceed`] runs a whole frame, always in this order:
//! read the scenario, move everything, shoot, resolve collisions.

use crate::audio::{Audio, Cue};
use crate::collision;
use crate::config::WorldConfig;
use crate::entities::{
    EnemyModel, ExplosionModel, GroundModel, Model, ObstacleModel, PlayerModel, ShotModel,
};
use crate::input::{Controls, Keyboard};
use crate::scenario::Scenario;

pub const GAME_OVER: &str = "GAME OVER";
pub const YOU_WIN: &str = "YOU WIN!";

type ExplosionFactory = Box<dyn FnMut(&dyn Model) -> ExplosionModel>;

/// Owns every live model. Each one sits in exactly one collection.
pub struct World<K, A> {
    keyboard: K,
    audio: A,
    scenario: Scenario,
    explode: ExplosionFactory,
    z_limit: f64,
    frame: u64,
    announced: Option<&'static str>,

    player: Option<PlayerModel>,
    enemies: Vec<EnemyModel>,
    player_shots: Vec<ShotModel>,
    enemy_shots: Vec<ShotModel>,
    explosions: Vec<ExplosionModel>,
    obstacles: Vec<ObstacleModel>,
    background: Vec<GroundModel>,
}

// ── Render boundary & accessors ──────────────────────────────────────────────

impl<K, A> World<K, A> {
    /// Every live model in drawing order: player, enemies, player shots,
    /// enemy shots, explosions, obstacles, background.
    pub fn all_models(&self) -> Vec<&dyn Model> {
        let mut models: Vec<&dyn Model> = Vec::new();
        models.extend(self.player.iter().map(|m| m as &dyn Model));
        models.extend(self.enemies.iter().map(|m| m as &dyn Model));
        models.extend(self.player_shots.iter().map(|m| m as &dyn Model));
        models.extend(self.enemy_shots.iter().map(|m| m as &dyn Model));
        models.extend(self.explosions.iter().map(|m| m as &dyn Model));
        models.extend(self.obstacles.iter().map(|m| m as &dyn Model));
        models.extend(self.background.iter().map(|m| m as &dyn Model));
        models
    }

    /// The model the camera follows: the player while it is alive.
    pub fn camera_target_model(&self) -> Option<&dyn Model> {
        self.player.as_ref().map(|m| m as &dyn Model)
    }

    /// The message to show over the scene, if the game is decided.
    pub fn message(&self) -> Option<&'static str> {
        if self.player.is_none() {
            Some(GAME_OVER)
        } else if self.scenario.is_end() && self.enemies.is_empty() {
            Some(YOU_WIN)
        } else {
            None
        }
    }

    pub fn player(&self) -> Option<&PlayerModel> {
        self.player.as_ref()
    }

    pub fn enemies(&self) -> &[EnemyModel] {
        &self.enemies
    }

    pub fn player_shots(&self) -> &[ShotModel] {
        &self.player_shots
    }

    pub fn enemy_shots(&self) -> &[ShotModel] {
        &self.enemy_shots
    }

    pub fn explosions(&self) -> &[ExplosionModel] {
        &self.explosions
    }

    pub fn obstacles(&self) -> &[ObstacleModel] {
        &self.obstacles
    }

    pub fn background(&self) -> &[GroundModel] {
        &self.background
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut K {
        &mut self.keyboard
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

// ── Frame cycle ───────────────────────────────────────────────────────────────

impl<K: Keyboard, A: Audio> World<K, A> {
    pub fn new(scenario: Scenario, keyboard: K, audio: A, config: &WorldConfig) -> Self {
        Self {
            keyboard,
            audio,
            scenario,
            explode: Box::new(ExplosionModel::factory(config.seed)),
            z_limit: config.z_limit,
            frame: 0,
            announced: None,
            player: Some(PlayerModel::new()),
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            explosions: Vec::new(),
            obstacles: Vec::new(),
            background: vec![GroundModel::new()],
        }
    }

    /// Replaces the player model the world starts with.
    pub fn with_player(self, player: PlayerModel) -> Self {
        Self {
            player: Some(player),
            ..self
        }
    }

    /// Replaces how destroyed models are turned into explosions.
    pub fn with_explosion_factory(self, factory: impl FnMut(&dyn Model) -> ExplosionModel + 'static) -> Self {
        Self {
            explode: Box::new(factory),
            ..self
        }
    }

    /// Runs one frame, the world having advanced `z` in depth.
    pub fn proceed(&mut self, z: f64) {
        self.frame += 1;
        let controls = Controls::poll(&self.keyboard);

        self.read_scenario(z);
        self.move_all(&controls);
        self.shoot(&controls);
        self.collide();

        log::trace!(
            "frame {}: {} enemies, {} player shots, {} enemy shots, {} explosions, {} obstacles",
            self.frame,
            self.enemies.len(),
            self.player_shots.len(),
            self.enemy_shots.len(),
            self.explosions.len(),
            self.obstacles.len(),
        );
        self.announce();
    }

    fn read_scenario(&mut self, z: f64) {
        let next = self.scenario.next_data(z);
        if !next.is_empty() {
            log::debug!(
                "frame {}: spawned {} obstacles, {} enemies",
                self.frame,
                next.obstacles.len(),
                next.enemies.len()
            );
        }
        self.obstacles.extend(next.obstacles);
        self.enemies.extend(next.enemies);
    }

    fn move_all(&mut self, controls: &Controls) {
        self.player = self.player.as_ref().map(|m| m.advance(controls));
        self.enemies = advance_all(&self.enemies, controls);
        self.player_shots = advance_all(&self.player_shots, controls);
        self.enemy_shots = advance_all(&self.enemy_shots, controls);
        self.explosions = advance_all(&self.explosions, controls);
        self.obstacles = advance_all(&self.obstacles, controls);
        self.background = advance_all(&self.background, controls);

        let z_limit = self.z_limit;
        let in_range = |z: f64| z < 0.0 && z >= z_limit;
        self.obstacles.retain(|m| in_range(m.position().z));
        self.enemies.retain(|m| in_range(m.position().z));
        self.player_shots.retain(|m| in_range(m.position().z));
        self.enemy_shots.retain(|m| in_range(m.position().z));
        self.explosions.retain(|m| !m.is_faded_out());
    }

    fn shoot(&mut self, controls: &Controls) {
        let Some(player) = self.player.take() else {
            return;
        };

        let (player, shot) = player.shoot(None, controls);
        if let Some(shot) = shot {
            log::debug!("frame {}: player fired", self.frame);
            self.player_shots.push(shot);
            self.audio.play(Cue::PlayerShot);
        }

        let target = player.position();
        let mut fired = 0;
        let mut enemies = Vec::with_capacity(self.enemies.len());
        for enemy in &self.enemies {
            let (enemy, shot) = enemy.shoot(Some(target), controls);
            if let Some(shot) = shot {
                self.enemy_shots.push(shot);
                fired += 1;
            }
            enemies.push(enemy);
        }
        self.enemies = enemies;
        self.player = Some(player);

        if fired > 0 {
            log::debug!("frame {}: enemies fired {fired} shots", self.frame);
            self.audio.play(Cue::EnemyShot);
        }
    }

    fn collide(&mut self) {
        let player: Vec<PlayerModel> = self.player.take().into_iter().collect();

        // obstacles to player; obstacles stay where they are
        let hits = collision::between(
            &self.obstacles,
            &player,
            |obstacle, target| collision::obstacle_and_player(obstacle, target),
            &mut self.explode,
        );
        let player = hits.destinations;
        self.add_explosions(hits.explosions, Cue::PlayerExplosion);

        // player shots to enemies
        let hits = collision::between(
            &self.player_shots,
            &self.enemies,
            |shot, enemy| collision::shot_and_target(shot, enemy),
            &mut self.explode,
        );
        self.player_shots = hits.sources;
        self.enemies = hits.destinations;
        self.add_explosions(hits.explosions, Cue::EnemyExplosion);

        // enemy shots to player
        let hits = collision::between(
            &self.enemy_shots,
            &player,
            |shot, target| collision::shot_and_target(shot, target),
            &mut self.explode,
        );
        self.enemy_shots = hits.sources;
        self.player = hits.destinations.into_iter().next();
        self.add_explosions(hits.explosions, Cue::PlayerExplosion);
    }

    fn add_explosions(&mut self, explosions: Vec<ExplosionModel>, cue: Cue) {
        if explosions.is_empty() {
            return;
        }
        log::debug!("frame {}: {} destroyed ({cue:?})", self.frame, explosions.len());
        self.explosions.extend(explosions);
        self.audio.play(cue);
    }

    fn announce(&mut self) {
        let message = self.message();
        if message != self.announced {
            if let Some(message) = message {
                log::info!("frame {}: {message}", self.frame);
            }
            self.announced = message;
        }
    }
}

fn advance_all<M: Model>(models: &[M], controls: &Controls) -> Vec<M> {
    models.iter().map(|m| m.advance(controls)).collect()
}
