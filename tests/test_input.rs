use star_box::audio::{Audio, Cue, CueLog, Silent};
use star_box::input::{Controls, HeldKeys, Key, Keyboard};

#[test]
fn controls_snapshot_held_keys() {
    let mut keys = HeldKeys::new();
    keys.press(Key::Left);
    keys.press(Key::Fire);

    assert_eq!(
        Controls::poll(&keys),
        Controls {
            left: true,
            fire: true,
            ..Controls::default()
        }
    );

    keys.release(Key::Left);
    assert!(!keys.is_key_down(Key::Left));
    assert!(Controls::poll(&keys).fire);
}

#[test]
fn nothing_held_means_no_controls() {
    assert_eq!(Controls::poll(&HeldKeys::new()), Controls::default());
}

#[test]
fn cue_log_records_in_order() {
    let mut audio = CueLog::default();
    audio.play(Cue::PlayerShot);
    audio.play(Cue::EnemyExplosion);
    assert_eq!(audio.played, vec![Cue::PlayerShot, Cue::EnemyExplosion]);

    // silent audio accepts anything
    Silent.play(Cue::PlayerExplosion);
}
