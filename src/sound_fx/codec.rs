//! Binary Record Codec
//!
//! Packs steps into the 7-byte records the mixer reads from flash:
//!
//! | byte | field                         |
//! |------|-------------------------------|
//! | 0    | waveform tag (0 noise, 1 sq.) |
//! | 1    | arpeggio flag (0/1)           |
//! | 2    | volume                        |
//! | 3    | volume slide start (i8)       |
//! | 4    | volume slide end (i8)         |
//! | 5    | pitch                         |
//! | 6    | duration in ticks             |

use super::step::{SoundStep, Waveform};
use crate::{Result, SfxError};

/// Size of one encoded step.
pub const RECORD_SIZE: usize = 7;

impl SoundStep {
    /// Encode this step as a mixer record.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        [
            self.waveform.tag(),
            u8::from(self.arpeggio),
            self.volume,
            self.volume_slide_start as u8,
            self.volume_slide_end as u8,
            self.pitch,
            self.duration_ticks,
        ]
    }

    /// Decode a mixer record.
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Result<Self> {
        let waveform = Waveform::from_tag(bytes[0])?;
        let arpeggio = match bytes[1] {
            0 => false,
            1 => true,
            other => return Err(SfxError::InvalidFlag(other)),
        };

        Ok(SoundStep {
            waveform,
            arpeggio,
            volume: bytes[2],
            volume_slide_start: bytes[3] as i8,
            volume_slide_end: bytes[4] as i8,
            pitch: bytes[5],
            duration_ticks: bytes[6],
        })
    }
}

/// Encode a whole sequence back to back.
pub fn encode_sequence(steps: &[SoundStep]) -> Vec<u8> {
    let mut out = Vec::with_capacity(steps.len() * RECORD_SIZE);
    for step in steps {
        out.extend_from_slice(&step.to_bytes());
    }
    out
}

/// Decode a buffer of back-to-back records.
pub fn decode_sequence(data: &[u8]) -> Result<Vec<SoundStep>> {
    if data.len() % RECORD_SIZE != 0 {
        return Err(SfxError::InvalidLength(data.len()));
    }

    data.chunks_exact(RECORD_SIZE)
        .map(|chunk| {
            let mut record = [0u8; RECORD_SIZE];
            record.copy_from_slice(chunk);
            SoundStep::from_bytes(&record)
        })
        .collect()
}
