//! Minesweeper Sound Table
//!
//! The eleven sound effects of the game, as baked into flash, and lookup by
//! name. Sequences that end in [`SoundStep::TERMINATOR`] are stopped by the
//! mixer; the others end when the slice runs out.

pub mod sfx_id;

pub use sfx_id::SfxId;

use crate::sound_fx::SoundStep;
use crate::Result;

const fn sq(arp: u8, vol: u8, slide_start: i8, slide_end: i8, pitch: u8, ticks: u8) -> SoundStep {
    SoundStep::square(arp != 0, vol, slide_start, slide_end, pitch, ticks)
}

const fn nz(arp: u8, vol: u8, slide_start: i8, slide_end: i8, pitch: u8, ticks: u8) -> SoundStep {
    SoundStep::noise(arp != 0, vol, slide_start, slide_end, pitch, ticks)
}

/// Home menu confirm: falling six-note sweep.
pub const SFX_HOME: &[SoundStep] = &[
    sq(1, 255, -128, 0, 30, 2),
    sq(1, 255, -128, 0, 28, 2),
    sq(1, 255, -128, 0, 25, 2),
    sq(1, 255, -128, 0, 22, 2),
    sq(1, 255, -128, 0, 20, 2),
    sq(1, 255, -128, 0, 18, 2),
    nz(0, 0, 0, 0, 0, 0),
];

/// Stats screen confirm.
pub const SFX_CONF_STATS: &[SoundStep] = &[
    sq(1, 255, -128, 0, 28, 2),
    sq(1, 255, -128, 0, 22, 2),
    sq(1, 255, -128, 0, 18, 2),
    nz(0, 0, 0, 0, 0, 0),
];

/// Back / cancel: the stats sweep reversed.
pub const SFX_BACK: &[SoundStep] = &[
    sq(1, 255, -128, 0, 18, 2),
    sq(1, 255, -128, 0, 20, 2),
    sq(1, 255, -128, 0, 22, 2),
    nz(0, 0, 0, 0, 0, 0),
];

/// Game start jingle. The second step is a rest, not a stop.
pub const SFX_START: &[SoundStep] = &[
    sq(1, 255, 0, 0, 67, 4),
    nz(1, 0, -128, 0, 0, 8),
    sq(1, 255, 0, 0, 67, 4),
    sq(0, 255, 0, 0, 50, 15),
];

/// UI tick.
pub const SFX_TICK: &[SoundStep] = &[sq(0, 255, -128, 0, 10, 10)];

/// Flag placed or removed.
pub const SFX_FLAG: &[SoundStep] = &[nz(0, 255, -64, 64, 80, 4)];

/// Single cell revealed.
pub const SFX_VISIT: &[SoundStep] = &[sq(0, 255, -128, 0, 17, 10)];

/// Empty area flood-revealed.
pub const SFX_EXPLORE: &[SoundStep] = &[sq(0, 255, 0, -6, 13, 10)];

/// Mine hit.
pub const SFX_EXPLODE: &[SoundStep] = &[nz(0, 255, -4, -8, 128, 20)];

/// Board cleared.
pub const SFX_WIN: &[SoundStep] = &[
    sq(1, 255, -128, 0, 63, 3),
    sq(1, 255, -128, 0, 35, 6),
    sq(1, 255, -128, 0, 28, 3),
    nz(0, 0, 0, 0, 0, 0),
];

/// Game lost.
pub const SFX_LOST: &[SoundStep] = &[
    sq(1, 255, -128, 0, 28, 3),
    sq(1, 255, -128, 0, 36, 6),
    sq(1, 255, -128, 0, 64, 6),
    sq(1, 255, -128, 0, 128, 9),
    nz(0, 0, 0, 0, 0, 0),
];

/// Look up an effect by symbol (`SFX_HOME`) or short name (`home`).
pub fn lookup(name: &str) -> Result<&'static [SoundStep]> {
    let id: SfxId = name.parse()?;
    Ok(id.steps())
}

/// Every effect in declaration order.
pub fn iter() -> impl Iterator<Item = (SfxId, &'static [SoundStep])> {
    SfxId::ALL.iter().map(|&id| (id, id.steps()))
}

/// Run the structural checks over the whole table.
///
/// Returns one entry per offending effect; an empty vector means the table
/// is consistent.
pub fn validate_all() -> Vec<(SfxId, crate::SfxError)> {
    iter()
        .filter_map(|(id, steps)| {
            crate::sound_fx::validate_sequence(steps, id.expects_terminator())
                .err()
                .map(|e| (id, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound_fx::{audible_ticks, total_ticks, Waveform};

    #[test]
    fn test_table_is_consistent() {
        assert!(validate_all().is_empty());
    }

    #[test]
    fn test_every_effect_non_empty() {
        for (id, steps) in iter() {
            assert!(!steps.is_empty(), "{id} is empty");
        }
    }

    #[test]
    fn test_terminated_effects_end_with_silent_noise() {
        for id in SfxId::ALL.iter().filter(|id| id.expects_terminator()) {
            let last = id.steps().last().unwrap();
            assert_eq!(last.waveform, Waveform::Noise, "{id}");
            assert_eq!(last.volume, 0, "{id}");
        }
    }

    #[test]
    fn test_single_shot_effects_have_no_terminator() {
        for id in [
            SfxId::Start,
            SfxId::Tick,
            SfxId::Flag,
            SfxId::Visit,
            SfxId::Explore,
            SfxId::Explode,
        ] {
            assert!(!id.steps().last().unwrap().is_terminator(), "{id}");
        }
    }

    #[test]
    fn test_tick_literal() {
        assert_eq!(
            SFX_TICK,
            &[SoundStep {
                waveform: Waveform::Square,
                arpeggio: false,
                volume: 255,
                volume_slide_start: -128,
                volume_slide_end: 0,
                pitch: 10,
                duration_ticks: 10,
            }]
        );
    }

    #[test]
    fn test_start_rest_keeps_playing() {
        assert!(SFX_START[1].is_rest());
        assert_eq!(total_ticks(SFX_START), 4 + 8 + 4 + 15);
        assert_eq!(audible_ticks(SFX_START), 4 + 4 + 15);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("SFX_EXPLODE").unwrap(), SFX_EXPLODE);
        assert_eq!(lookup("conf-stats").unwrap(), SFX_CONF_STATS);
        assert!(lookup("sfx_jump").is_err());
    }

    #[test]
    fn test_iter_order() {
        let names: Vec<_> = iter().map(|(id, _)| id.symbol()).collect();
        assert_eq!(names.first(), Some(&"SFX_HOME"));
        assert_eq!(names.last(), Some(&"SFX_LOST"));
        assert_eq!(names.len(), 11);
    }
}
