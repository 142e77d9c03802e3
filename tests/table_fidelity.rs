//! Field-by-field checks of the built-in table against the authored values.

use sweeper_sfx::sound_fx::{decode_sequence, encode_sequence};
use sweeper_sfx::table::*;
use sweeper_sfx::{SfxId, SoundStep, Waveform};

/// (waveform, arpeggio, volume, slide start, slide end, pitch, ticks)
type Row = (Waveform, u8, u8, i8, i8, u8, u8);

use Waveform::{Noise as N, Square as S};

fn expected(id: SfxId) -> Vec<Row> {
    match id {
        SfxId::Home => vec![
            (S, 1, 255, -128, 0, 30, 2),
            (S, 1, 255, -128, 0, 28, 2),
            (S, 1, 255, -128, 0, 25, 2),
            (S, 1, 255, -128, 0, 22, 2),
            (S, 1, 255, -128, 0, 20, 2),
            (S, 1, 255, -128, 0, 18, 2),
            (N, 0, 0, 0, 0, 0, 0),
        ],
        SfxId::ConfStats => vec![
            (S, 1, 255, -128, 0, 28, 2),
            (S, 1, 255, -128, 0, 22, 2),
            (S, 1, 255, -128, 0, 18, 2),
            (N, 0, 0, 0, 0, 0, 0),
        ],
        SfxId::Back => vec![
            (S, 1, 255, -128, 0, 18, 2),
            (S, 1, 255, -128, 0, 20, 2),
            (S, 1, 255, -128, 0, 22, 2),
            (N, 0, 0, 0, 0, 0, 0),
        ],
        SfxId::Start => vec![
            (S, 1, 255, 0, 0, 67, 4),
            (N, 1, 0, -128, 0, 0, 8),
            (S, 1, 255, 0, 0, 67, 4),
            (S, 0, 255, 0, 0, 50, 15),
        ],
        SfxId::Tick => vec![(S, 0, 255, -128, 0, 10, 10)],
        SfxId::Flag => vec![(N, 0, 255, -64, 64, 80, 4)],
        SfxId::Visit => vec![(S, 0, 255, -128, 0, 17, 10)],
        SfxId::Explore => vec![(S, 0, 255, 0, -6, 13, 10)],
        SfxId::Explode => vec![(N, 0, 255, -4, -8, 128, 20)],
        SfxId::Win => vec![
            (S, 1, 255, -128, 0, 63, 3),
            (S, 1, 255, -128, 0, 35, 6),
            (S, 1, 255, -128, 0, 28, 3),
            (N, 0, 0, 0, 0, 0, 0),
        ],
        SfxId::Lost => vec![
            (S, 1, 255, -128, 0, 28, 3),
            (S, 1, 255, -128, 0, 36, 6),
            (S, 1, 255, -128, 0, 64, 6),
            (S, 1, 255, -128, 0, 128, 9),
            (N, 0, 0, 0, 0, 0, 0),
        ],
    }
}

fn as_row(s: &SoundStep) -> Row {
    (
        s.waveform,
        u8::from(s.arpeggio),
        s.volume,
        s.volume_slide_start,
        s.volume_slide_end,
        s.pitch,
        s.duration_ticks,
    )
}

#[test]
fn every_effect_matches_authored_values() {
    for id in SfxId::ALL {
        let actual: Vec<Row> = id.steps().iter().map(as_row).collect();
        assert_eq!(actual, expected(id), "{id}");
    }
}

#[test]
fn constants_and_ids_agree() {
    assert_eq!(SfxId::Home.steps(), SFX_HOME);
    assert_eq!(SfxId::ConfStats.steps(), SFX_CONF_STATS);
    assert_eq!(SfxId::Back.steps(), SFX_BACK);
    assert_eq!(SfxId::Start.steps(), SFX_START);
    assert_eq!(SfxId::Tick.steps(), SFX_TICK);
    assert_eq!(SfxId::Flag.steps(), SFX_FLAG);
    assert_eq!(SfxId::Visit.steps(), SFX_VISIT);
    assert_eq!(SfxId::Explore.steps(), SFX_EXPLORE);
    assert_eq!(SfxId::Explode.steps(), SFX_EXPLODE);
    assert_eq!(SfxId::Win.steps(), SFX_WIN);
    assert_eq!(SfxId::Lost.steps(), SFX_LOST);
}

#[test]
fn only_square_and_noise_are_used() {
    for (id, steps) in iter() {
        for s in steps {
            assert!(
                matches!(s.waveform, Waveform::Square | Waveform::Noise),
                "{id}"
            );
        }
    }
}

#[test]
fn record_codec_preserves_every_effect() {
    for (id, steps) in iter() {
        let bytes = encode_sequence(steps);
        assert_eq!(decode_sequence(&bytes).unwrap(), steps, "{id}");
    }
}

#[test]
fn terminated_effects() {
    for id in [
        SfxId::Home,
        SfxId::ConfStats,
        SfxId::Back,
        SfxId::Win,
        SfxId::Lost,
    ] {
        let last = id.steps().last().unwrap();
        assert_eq!(last.waveform, Waveform::Noise, "{id}");
        assert_eq!(last.volume, 0, "{id}");
        assert!(last.is_terminator(), "{id}");
    }
}

#[test]
fn whole_table_validates() {
    assert!(validate_all().is_empty());
}
