//! Symbolic effect identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::*;
use crate::SfxError;

/// One named sound effect of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SfxId {
    /// Home menu confirm
    Home,
    /// Stats screen confirm
    ConfStats,
    /// Back / cancel
    Back,
    /// Game start jingle
    Start,
    /// UI tick
    Tick,
    /// Flag toggle
    Flag,
    /// Cell visit
    Visit,
    /// Area exploration
    Explore,
    /// Mine explosion
    Explode,
    /// Win
    Win,
    /// Loss
    Lost,
}

impl SfxId {
    /// All identifiers in declaration order.
    pub const ALL: [SfxId; 11] = [
        SfxId::Home,
        SfxId::ConfStats,
        SfxId::Back,
        SfxId::Start,
        SfxId::Tick,
        SfxId::Flag,
        SfxId::Visit,
        SfxId::Explore,
        SfxId::Explode,
        SfxId::Win,
        SfxId::Lost,
    ];

    /// The effect's steps.
    pub fn steps(self) -> &'static [SoundStep] {
        match self {
            SfxId::Home => SFX_HOME,
            SfxId::ConfStats => SFX_CONF_STATS,
            SfxId::Back => SFX_BACK,
            SfxId::Start => SFX_START,
            SfxId::Tick => SFX_TICK,
            SfxId::Flag => SFX_FLAG,
            SfxId::Visit => SFX_VISIT,
            SfxId::Explore => SFX_EXPLORE,
            SfxId::Explode => SFX_EXPLODE,
            SfxId::Win => SFX_WIN,
            SfxId::Lost => SFX_LOST,
        }
    }

    /// Constant name as declared in the sound header.
    pub fn symbol(self) -> &'static str {
        match self {
            SfxId::Home => "SFX_HOME",
            SfxId::ConfStats => "SFX_CONF_STATS",
            SfxId::Back => "SFX_BACK",
            SfxId::Start => "SFX_START",
            SfxId::Tick => "SFX_TICK",
            SfxId::Flag => "SFX_FLAG",
            SfxId::Visit => "SFX_VISIT",
            SfxId::Explore => "SFX_EXPLORE",
            SfxId::Explode => "SFX_EXPLODE",
            SfxId::Win => "SFX_WIN",
            SfxId::Lost => "SFX_LOST",
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            SfxId::Home => "home",
            SfxId::ConfStats => "conf-stats",
            SfxId::Back => "back",
            SfxId::Start => "start",
            SfxId::Tick => "tick",
            SfxId::Flag => "flag",
            SfxId::Visit => "visit",
            SfxId::Explore => "explore",
            SfxId::Explode => "explode",
            SfxId::Win => "win",
            SfxId::Lost => "lost",
        }
    }

    /// Exact match on the header symbol (`SFX_HOME`), no normalisation.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SfxId::ALL.iter().copied().find(|id| id.symbol() == symbol)
    }

    /// Whether the sequence is stopped by an explicit terminator record.
    pub fn expects_terminator(self) -> bool {
        matches!(
            self,
            SfxId::Home | SfxId::ConfStats | SfxId::Back | SfxId::Win | SfxId::Lost
        )
    }
}

impl fmt::Display for SfxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for SfxId {
    type Err = SfxError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        let wanted = wanted.strip_prefix("sfx-").unwrap_or(&wanted);

        SfxId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| SfxError::UnknownEffect(s.to_string()))
    }
}
