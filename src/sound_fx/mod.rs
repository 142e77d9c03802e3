//! Sound FX Records
//!
//! The envelope step consumed by the Gamebuino Meta sound-FX mixer, plus the
//! sequence-level helpers the mixer's stop convention relies on.
//!
//! A sound effect is an ordered `&'static [SoundStep]`. The mixer plays the
//! steps in order and stops either at the end of the slice or at the first
//! [terminator](SoundStep::is_terminator).

pub mod codec;
pub mod step;

pub use codec::{decode_sequence, encode_sequence, RECORD_SIZE};
pub use step::{SoundStep, Waveform};

use crate::{Result, SfxError};

/// Check the structural rules of one sequence.
///
/// - the sequence is non-empty
/// - a terminator may only appear as the last step
/// - if `expect_terminator` is set, the last step is a terminator
pub fn validate_sequence(steps: &[SoundStep], expect_terminator: bool) -> Result<()> {
    let Some(last) = steps.last() else {
        return Err(SfxError::EmptySequence);
    };

    for (index, step) in steps.iter().enumerate() {
        step.validate()?;
        if step.is_terminator() && index + 1 != steps.len() {
            return Err(SfxError::EarlyTerminator { index });
        }
    }

    if expect_terminator && !last.is_terminator() {
        return Err(SfxError::MissingTerminator);
    }

    Ok(())
}

/// Steps the mixer actually plays: everything before the first terminator.
pub fn playable_steps(steps: &[SoundStep]) -> &[SoundStep] {
    let end = steps
        .iter()
        .position(SoundStep::is_terminator)
        .unwrap_or(steps.len());
    &steps[..end]
}

/// Total length of a sequence in mixer ticks.
pub fn total_ticks(steps: &[SoundStep]) -> u32 {
    playable_steps(steps)
        .iter()
        .map(|s| u32::from(s.duration_ticks))
        .sum()
}

/// Ticks during which the mixer outputs sound (rests and silent steps excluded).
pub fn audible_ticks(steps: &[SoundStep]) -> u32 {
    playable_steps(steps)
        .iter()
        .filter(|s| s.is_audible())
        .map(|s| u32::from(s.duration_ticks))
        .sum()
}
