//! Audio boundary.
//!
//! The core only asks for a cue to be played. Loading assets and reporting
//! playback failures belong to the implementation, never to the frame loop.

/// The sound cues the world triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    PlayerShot,
    EnemyShot,
    PlayerExplosion,
    EnemyExplosion,
}

pub trait Audio {
    /// Starts playing `cue`. Must not fail or block.
    fn play(&mut self, cue: Cue);
}

/// Plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Remembers every cue it was asked to play, in order.
#[derive(Clone, Debug, Default)]
pub struct CueLog {
    pub played: Vec<Cue>,
}

impl Audio for CueLog {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}
