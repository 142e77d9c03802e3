//! Table Export
//!
//! Dumps the sound table for tools outside the firmware build: JSON for
//! editors, CSV for spreadsheets, the C header form, and the raw record
//! stream the mixer reads.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::sound_fx::{encode_sequence, SoundStep, Waveform};
use crate::table::SfxId;
use crate::{Result, SfxError};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Array of `{ name, symbol, steps }` objects (arpeggio as 0/1)
    #[default]
    Json,
    /// One row per step
    Csv,
    /// C header declarations
    Header,
    /// Step count byte followed by 7-byte records, per effect
    Binary,
}

impl ExportFormat {
    /// Format name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Header => "header",
            ExportFormat::Binary => "binary",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = SfxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "header" | "h" => Ok(ExportFormat::Header),
            "binary" | "bin" => Ok(ExportFormat::Binary),
            other => Err(SfxError::Export(format!("unknown export format '{other}'"))),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output format
    pub format: ExportFormat,
    /// Indent JSON output
    pub pretty: bool,
    /// Restrict output to these effects (all when `None`)
    pub effects: Option<Vec<SfxId>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty: true,
            effects: None,
        }
    }
}

impl ExportOptions {
    /// Options for a given format with the other settings defaulted.
    pub fn with_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    fn selected(&self) -> Vec<SfxId> {
        match &self.effects {
            Some(ids) => ids.clone(),
            None => SfxId::ALL.to_vec(),
        }
    }
}

#[derive(Serialize)]
struct EffectRecord {
    name: &'static str,
    symbol: &'static str,
    steps: &'static [SoundStep],
}

#[derive(Serialize)]
struct StepRow {
    effect: &'static str,
    index: usize,
    waveform: Waveform,
    arpeggio: u8,
    volume: u8,
    volume_slide_start: i8,
    volume_slide_end: i8,
    pitch: u8,
    duration_ticks: u8,
}

/// Export the selected effects.
pub fn export(options: &ExportOptions) -> Result<Vec<u8>> {
    let ids = options.selected();
    log::debug!("exporting {} effect(s) as {}", ids.len(), options.format);

    match options.format {
        ExportFormat::Json => to_json(&ids, options.pretty),
        ExportFormat::Csv => to_csv(&ids),
        ExportFormat::Header => to_header(&ids),
        ExportFormat::Binary => to_binary(&ids),
    }
}

fn to_json(ids: &[SfxId], pretty: bool) -> Result<Vec<u8>> {
    let records: Vec<EffectRecord> = ids
        .iter()
        .map(|&id| EffectRecord {
            name: id.name(),
            symbol: id.symbol(),
            steps: id.steps(),
        })
        .collect();

    let out = if pretty {
        serde_json::to_vec_pretty(&records)
    } else {
        serde_json::to_vec(&records)
    };
    out.map_err(|e| SfxError::Export(format!("JSON serialization failed: {e}")))
}

fn to_csv(ids: &[SfxId]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for &id in ids {
        for (index, step) in id.steps().iter().enumerate() {
            writer
                .serialize(StepRow {
                    effect: id.symbol(),
                    index,
                    waveform: step.waveform,
                    arpeggio: u8::from(step.arpeggio),
                    volume: step.volume,
                    volume_slide_start: step.volume_slide_start,
                    volume_slide_end: step.volume_slide_end,
                    pitch: step.pitch,
                    duration_ticks: step.duration_ticks,
                })
                .map_err(|e| SfxError::Export(format!("CSV write failed: {e}")))?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| SfxError::Export(format!("CSV flush failed: {e}")))
}

#[cfg(feature = "text-format")]
fn to_header(ids: &[SfxId]) -> Result<Vec<u8>> {
    Ok(crate::text_format::render_header(ids.iter().copied()).into_bytes())
}

#[cfg(not(feature = "text-format"))]
fn to_header(_ids: &[SfxId]) -> Result<Vec<u8>> {
    Err(SfxError::Export(
        "header export requires the \"text-format\" feature".into(),
    ))
}

fn to_binary(ids: &[SfxId]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for &id in ids {
        let steps = id.steps();
        let count = u8::try_from(steps.len())
            .map_err(|_| SfxError::Export(format!("{id} has too many steps")))?;
        out.push(count);
        out.extend_from_slice(&encode_sequence(steps));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound_fx::{decode_sequence, RECORD_SIZE};

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("bin".parse::<ExportFormat>().unwrap(), ExportFormat::Binary);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_json_export_shape() {
        let options = ExportOptions {
            effects: Some(vec![SfxId::Tick]),
            pretty: false,
            ..ExportOptions::default()
        };
        let json = String::from_utf8(export(&options).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let effect = &value[0];
        assert_eq!(effect["symbol"], "SFX_TICK");
        assert_eq!(effect["name"], "tick");
        assert_eq!(effect["steps"][0]["waveform"], "SQUARE");
        assert_eq!(effect["steps"][0]["volume_slide_start"], -128);
        assert_eq!(effect["steps"][0]["arpeggio"], 0);
    }

    #[test]
    fn test_csv_row_count() {
        let csv = export(&ExportOptions::with_format(ExportFormat::Csv)).unwrap();
        let text = String::from_utf8(csv).unwrap();
        let total: usize = SfxId::ALL.iter().map(|id| id.steps().len()).sum();
        // header line + one line per step
        assert_eq!(text.lines().count(), total + 1);
        assert!(text.starts_with("effect,index,waveform,arpeggio,volume,"));
        assert!(text.contains("SFX_EXPLODE,0,NOISE,0,255,-4,-8,128,20"));
    }

    #[test]
    fn test_binary_layout() {
        let options = ExportOptions {
            format: ExportFormat::Binary,
            effects: Some(vec![SfxId::Win, SfxId::Flag]),
            ..ExportOptions::default()
        };
        let data = export(&options).unwrap();
        assert_eq!(data[0], 4);
        let win_end = 1 + 4 * RECORD_SIZE;
        assert_eq!(
            decode_sequence(&data[1..win_end]).unwrap(),
            SfxId::Win.steps()
        );
        assert_eq!(data[win_end], 1);
        assert_eq!(data.len(), win_end + 1 + RECORD_SIZE);
    }

    #[cfg(feature = "text-format")]
    #[test]
    fn test_header_export() {
        let data = export(&ExportOptions::with_format(ExportFormat::Header)).unwrap();
        let text = String::from_utf8(data).unwrap();
        assert!(text.starts_with("#pragma once"));
        assert!(text.contains("SFX_LOST[] = {"));
    }
}
