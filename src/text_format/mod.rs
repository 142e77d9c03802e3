//! Sound Header Text Format
//!
//! The tables are authored as a C header of `Sound_FX` array literals. This
//! module parses such a header back into steps, renders the built-in table in
//! the same form, and compares a parsed header against the table field by
//! field.

mod parser;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sound_fx::SoundStep;
use crate::table::SfxId;
use crate::{Result, SfxError};

/// Type name used for declarations in rendered headers.
pub const SOUND_FX_TYPE: &str = "Gamebuino_Meta::Sound_FX";

/// Qualifier prepended to wave tags in rendered headers.
pub const WAVE_QUALIFIER: &str = "Gamebuino_Meta::Sound_FX_Wave::";

/// A declaration read from a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSequence {
    /// Declared constant name, e.g. `SFX_HOME`
    pub name: String,
    /// Steps in declaration order
    pub steps: Vec<SoundStep>,
}

/// Parse all `Sound_FX` declarations of a header.
pub fn parse_header(input: &str) -> Result<Vec<NamedSequence>> {
    match parser::header(input) {
        Ok((_, decls)) => {
            log::debug!("parsed {} sound declarations", decls.len());
            Ok(decls)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(SfxError::Parse(nom::error::convert_error(input, e)))
        }
        Err(nom::Err::Incomplete(_)) => Err(SfxError::Parse("unexpected end of input".into())),
    }
}

/// Parse one step literal, e.g. `{ SQUARE, 0, 255, -128, 0, 10, 10 }`.
pub fn parse_step(input: &str) -> Result<SoundStep> {
    parser::single_step(input)
        .map(|(_, step)| step)
        .map_err(|e| match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                SfxError::Parse(nom::error::convert_error(input, e))
            }
            nom::Err::Incomplete(_) => SfxError::Parse("unexpected end of input".into()),
        })
}

/// Render one declaration with its columns aligned.
pub fn render_declaration(name: &str, steps: &[SoundStep]) -> String {
    let rows: Vec<[String; 7]> = steps
        .iter()
        .map(|s| {
            [
                format!("{}{},", WAVE_QUALIFIER, s.waveform),
                u8::from(s.arpeggio).to_string(),
                s.volume.to_string(),
                s.volume_slide_start.to_string(),
                s.volume_slide_end.to_string(),
                s.pitch.to_string(),
                s.duration_ticks.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 7];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = format!("const {SOUND_FX_TYPE} {name}[] = {{\n");
    for (i, row) in rows.iter().enumerate() {
        let numbers: Vec<String> = row[1..]
            .iter()
            .zip(&widths[1..])
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        out.push_str(&format!(
            "  {{ {:<w0$} {} }}",
            row[0],
            numbers.join(", "),
            w0 = widths[0]
        ));
        out.push_str(if i + 1 < rows.len() { ",\n" } else { "\n" });
    }
    out.push_str("};\n");
    out
}

/// Render a header holding the given effects.
pub fn render_header<I>(effects: I) -> String
where
    I: IntoIterator<Item = SfxId>,
{
    let body: Vec<String> = effects
        .into_iter()
        .map(|id| render_declaration(id.symbol(), id.steps()))
        .collect();
    format!("#pragma once\n\n{}", body.join("\n"))
}

/// Difference between a parsed header and the built-in table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Declaration whose name is not exactly a known effect symbol
    UnknownEffect(String),
    /// Effect declared more than once
    Duplicate(SfxId),
    /// Effect absent from the header
    Missing(SfxId),
    /// Different number of steps
    Length {
        /// Effect
        id: SfxId,
        /// Steps in the table
        expected: usize,
        /// Steps in the header
        found: usize,
    },
    /// A step differs in at least one field
    Step {
        /// Effect
        id: SfxId,
        /// Step index
        index: usize,
        /// Step in the table
        expected: SoundStep,
        /// Step in the header
        found: SoundStep,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::UnknownEffect(name) => write!(f, "{name}: not a known effect"),
            Mismatch::Duplicate(id) => write!(f, "{id}: declared more than once"),
            Mismatch::Missing(id) => write!(f, "{id}: missing from header"),
            Mismatch::Length {
                id,
                expected,
                found,
            } => write!(f, "{id}: expected {expected} steps, found {found}"),
            Mismatch::Step {
                id,
                index,
                expected,
                found,
            } => write!(f, "{id}[{index}]: expected {expected}, found {found}"),
        }
    }
}

/// Compare parsed declarations against the built-in table.
///
/// Declaration names must spell the effect symbol exactly; `home` or
/// `sfx_home` would not link against game code using `SFX_HOME`.
pub fn verify_against_table(decls: &[NamedSequence]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    let mut seen: Vec<SfxId> = Vec::new();

    for decl in decls {
        let Some(id) = SfxId::from_symbol(&decl.name) else {
            mismatches.push(Mismatch::UnknownEffect(decl.name.clone()));
            continue;
        };
        if seen.contains(&id) {
            mismatches.push(Mismatch::Duplicate(id));
            continue;
        }
        seen.push(id);

        let expected = id.steps();
        if expected.len() != decl.steps.len() {
            mismatches.push(Mismatch::Length {
                id,
                expected: expected.len(),
                found: decl.steps.len(),
            });
        }
        for (index, (e, f)) in expected.iter().zip(&decl.steps).enumerate() {
            if e != f {
                mismatches.push(Mismatch::Step {
                    id,
                    index,
                    expected: *e,
                    found: *f,
                });
            }
        }
    }

    for id in SfxId::ALL {
        if !seen.contains(&id) {
            mismatches.push(Mismatch::Missing(id));
        }
    }

    log::debug!("header verification: {} mismatch(es)", mismatches.len());
    mismatches
}
