//! Minesweeper Sound FX Tables for the Gamebuino Meta
//!
//! The sound effects of the Gamebuino Meta Minesweeper port, as constant
//! tables of envelope steps for the console's sound-FX mixer. Each effect is
//! an ordered `&'static [SoundStep]`; the mixer plays the steps in order and
//! stops at the end of the slice or at a zero-amplitude NOISE terminator.
//!
//! # Features
//! - The eleven game effects as `const` slices (`table`)
//! - Lookup by symbol (`SFX_HOME`) or short name (`home`)
//! - Structural validation of steps and sequences
//! - 7-byte mixer record codec
//! - Header literal parser/renderer and field-by-field verification
//! - JSON, CSV, header and binary export
//!
//! # Crate feature flags
//! - `text-format` (default): header parser and renderer (`text_format`, uses `nom`)
//! - `export` (default): exporters (`export`, uses `serde_json` and `csv`)
//!
//! # Quick start
//! ```
//! use sweeper_sfx::{table, SfxId, Waveform};
//!
//! let tick = SfxId::Tick.steps();
//! assert_eq!(tick.len(), 1);
//! assert_eq!(tick[0].waveform, Waveform::Square);
//!
//! let lost = table::lookup("SFX_LOST").unwrap();
//! assert!(lost.last().unwrap().is_terminator());
//! ```

#![warn(missing_docs)]

pub mod sound_fx; // Step record, validation, binary codec
pub mod table; // The game's effects

#[cfg(feature = "export")]
pub mod export; // JSON / CSV / header / binary dumps
#[cfg(feature = "text-format")]
pub mod text_format; // Header literal parsing

/// Error types for sound table operations
#[derive(thiserror::Error, Debug)]
pub enum SfxError {
    /// Name does not match any effect
    #[error("Unknown sound effect: {0}")]
    UnknownEffect(String),

    /// Raw waveform tag outside the known set
    #[error("Invalid waveform tag: {0}")]
    InvalidWaveform(u8),

    /// Arpeggio byte other than 0 or 1
    #[error("Invalid arpeggio flag: {0}")]
    InvalidFlag(u8),

    /// Record buffer length is not a multiple of the record size
    #[error("Invalid record data length: {0}")]
    InvalidLength(usize),

    /// Zero-length step that is not a terminator
    #[error("Step has zero duration but is not a terminator")]
    ZeroDuration,

    /// Sequence with no steps
    #[error("Sound effect has no steps")]
    EmptySequence,

    /// Terminator before the last step
    #[error("Terminator at step {index} is not the last step")]
    EarlyTerminator {
        /// Position of the stray terminator
        index: usize,
    },

    /// Sequence expected to end in a terminator does not
    #[error("Sound effect does not end with a terminator")]
    MissingTerminator,

    /// Error while parsing header text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error producing export output
    #[error("Export error: {0}")]
    Export(String),

    /// IO error from filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for SfxError {
    /// Converts a String into `SfxError::Other`.
    ///
    /// Prefer a specific variant where one fits.
    fn from(msg: String) -> Self {
        SfxError::Other(msg)
    }
}

impl From<&str> for SfxError {
    /// Converts a string slice into `SfxError::Other`.
    fn from(msg: &str) -> Self {
        SfxError::Other(msg.to_string())
    }
}

/// Result type for sound table operations
pub type Result<T> = std::result::Result<T, SfxError>;

// Public API exports
pub use sound_fx::{
    audible_ticks, playable_steps, total_ticks, validate_sequence, SoundStep, Waveform,
};
pub use table::{lookup, SfxId};

#[cfg(feature = "export")]
pub use export::{export, ExportFormat, ExportOptions};
#[cfg(feature = "text-format")]
pub use text_format::{parse_header, render_header, verify_against_table, Mismatch, NamedSequence};
