//! Envelope step and waveform tag.

use std::fmt;
use std::str::FromStr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::{Result, SfxError};

/// Oscillator selected for a step.
///
/// Discriminants match the tag values of the platform's wave enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Waveform {
    /// Pseudo-random noise (also used for rests and terminators)
    Noise = 0,
    /// 50% duty square wave
    Square = 1,
}

impl Waveform {
    /// Tag name as written in the sound headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Noise => "NOISE",
            Waveform::Square => "SQUARE",
        }
    }

    /// Raw tag value.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Convert a raw tag back into a waveform.
    pub fn from_tag(tag: u8) -> Result<Self> {
        <Waveform as FromPrimitive>::from_u8(tag).ok_or(SfxError::InvalidWaveform(tag))
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Waveform {
    type Err = SfxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NOISE" => Ok(Waveform::Noise),
            "SQUARE" => Ok(Waveform::Square),
            other => Err(SfxError::Parse(format!("unknown waveform '{other}'"))),
        }
    }
}

/// One waveform/pitch/volume-envelope segment of a sound effect.
///
/// Field widths are the native widths of the mixer record, so every value
/// this type can hold is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundStep {
    /// Oscillator
    pub waveform: Waveform,
    /// Pitch arpeggiation enabled for this step (serialized as 0/1)
    #[serde(with = "flag")]
    pub arpeggio: bool,
    /// Start amplitude (0-255)
    pub volume: u8,
    /// Volume envelope slope at step start
    pub volume_slide_start: i8,
    /// Volume envelope slope at step end
    pub volume_slide_end: i8,
    /// Base pitch index
    pub pitch: u8,
    /// Step length in mixer ticks
    pub duration_ticks: u8,
}

impl SoundStep {
    /// The zero-amplitude NOISE record that tells the mixer to stop.
    pub const TERMINATOR: SoundStep = SoundStep::noise(false, 0, 0, 0, 0, 0);

    /// Build a step from all of its fields.
    pub const fn new(
        waveform: Waveform,
        arpeggio: bool,
        volume: u8,
        volume_slide_start: i8,
        volume_slide_end: i8,
        pitch: u8,
        duration_ticks: u8,
    ) -> Self {
        SoundStep {
            waveform,
            arpeggio,
            volume,
            volume_slide_start,
            volume_slide_end,
            pitch,
            duration_ticks,
        }
    }

    /// Square-wave step.
    pub const fn square(
        arpeggio: bool,
        volume: u8,
        volume_slide_start: i8,
        volume_slide_end: i8,
        pitch: u8,
        duration_ticks: u8,
    ) -> Self {
        Self::new(
            Waveform::Square,
            arpeggio,
            volume,
            volume_slide_start,
            volume_slide_end,
            pitch,
            duration_ticks,
        )
    }

    /// Noise step.
    pub const fn noise(
        arpeggio: bool,
        volume: u8,
        volume_slide_start: i8,
        volume_slide_end: i8,
        pitch: u8,
        duration_ticks: u8,
    ) -> Self {
        Self::new(
            Waveform::Noise,
            arpeggio,
            volume,
            volume_slide_start,
            volume_slide_end,
            pitch,
            duration_ticks,
        )
    }

    /// Zero-amplitude, zero-length NOISE record.
    pub fn is_terminator(&self) -> bool {
        self.waveform == Waveform::Noise && self.volume == 0 && self.duration_ticks == 0
    }

    /// Zero-amplitude NOISE record that still occupies time.
    pub fn is_rest(&self) -> bool {
        self.waveform == Waveform::Noise && self.volume == 0 && self.duration_ticks > 0
    }

    /// Produces sound for at least one tick.
    pub fn is_audible(&self) -> bool {
        self.volume > 0 && self.duration_ticks > 0
    }

    /// Check a single step.
    ///
    /// Widths are enforced by the type; the only remaining rule is that a
    /// zero-length step must be a terminator.
    pub fn validate(&self) -> Result<()> {
        if self.duration_ticks == 0 && !self.is_terminator() {
            return Err(SfxError::ZeroDuration);
        }
        Ok(())
    }
}

/// Serde adapter writing `bool` flags as the 0/1 byte the mixer record uses.
mod flag {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::invalid_value(
                Unexpected::Unsigned(u64::from(other)),
                &"0 or 1",
            )),
        }
    }
}

impl fmt::Display for SoundStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {}, {}, {}, {}, {}, {}, {} }}",
            self.waveform,
            u8::from(self.arpeggio),
            self.volume,
            self.volume_slide_start,
            self.volume_slide_end,
            self.pitch,
            self.duration_ticks
        )
    }
}
