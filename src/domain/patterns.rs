//! Pattern identifiers and per-pattern transient state

use serde::{Deserialize, Serialize};

/// The eight animations the grid can run.
///
/// Numeric ids are stable and exported to JS (`pattern_*` functions).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pattern {
    #[default]
    #[serde(rename = "gameOfLife")]
    Life = 0,
    Ripple = 1,
    Wave = 2,
    Rain = 3,
    Spiral = 4,
    Noise = 5,
    Rule30 = 6,
    #[serde(rename = "image")]
    ImageThreshold = 7,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Life,
        Pattern::Ripple,
        Pattern::Wave,
        Pattern::Rain,
        Pattern::Spiral,
        Pattern::Noise,
        Pattern::Rule30,
        Pattern::ImageThreshold,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Host-facing key (matches the web client's pattern names)
    pub fn key(self) -> &'static str {
        match self {
            Self::Life => "gameOfLife",
            Self::Ripple => "ripple",
            Self::Wave => "wave",
            Self::Rain => "rain",
            Self::Spiral => "spiral",
            Self::Noise => "noise",
            Self::Rule30 => "rule30",
            Self::ImageThreshold => "image",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Life => "Conway's Game of Life",
            Self::Ripple => "Circular Ripples",
            Self::Wave => "Wave Pattern",
            Self::Rain => "Rain Effect",
            Self::Spiral => "Spiral Pattern",
            Self::Noise => "Random Noise",
            Self::Rule30 => "Rule 30 Automaton",
            Self::ImageThreshold => "GIF Pattern",
        }
    }
}

/// One expanding ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center_row: usize,
    pub center_col: usize,
    pub radius: f64,
    pub max_radius: f64,
}

/// Transient state owned by the active pattern.
///
/// Reset to `Empty` on every pattern change. A step handed a variant that
/// does not belong to it starts from that pattern's initial state.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PatternState {
    #[default]
    Empty,
    Ripple(Vec<Ripple>),
    Wave { time: u64 },
    Spiral { time: u64 },
}

impl PatternState {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Active ripples (empty slice for any other variant)
    pub fn ripples(&self) -> &[Ripple] {
        match self {
            Self::Ripple(ripples) => ripples,
            _ => &[],
        }
    }

    pub fn wave_time(&self) -> u64 {
        match self {
            Self::Wave { time } => *time,
            _ => 0,
        }
    }

    pub fn spiral_time(&self) -> u64 {
        match self {
            Self::Spiral { time } => *time,
            _ => 0,
        }
    }
}
