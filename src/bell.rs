//! Terminal bell as the game's sound.
//!
//! Explosions ring the bell; shots would ring it several times a second, so
//! they are only logged.

use std::io::{stdout, Write};

use star_box::audio::{Audio, Cue};

pub struct Bell {
    muted: bool,
}

impl Bell {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl Audio for Bell {
    fn play(&mut self, cue: Cue) {
        log::debug!("cue {cue:?}");
        if self.muted || matches!(cue, Cue::PlayerShot | Cue::EnemyShot) {
            return;
        }

        let mut out = stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            log::warn!("bell failed: {err}");
        }
    }
}
