use crate::domain::patterns::Pattern;
use crate::systems::patterns::LifePattern;

use super::EngineCore;

/// Host-facing status, derived from the engine state on demand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    Paused,
    /// Life with no live cell
    EmptyGrid,
    /// Life past generation 0 whose next step changes nothing
    Stable,
    MaxGenerationsReached,
}

impl EngineStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::EmptyGrid => "Empty Grid",
            Self::Stable => "Stable",
            Self::MaxGenerationsReached => "Max Generations Reached",
        }
    }
}

impl std::fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub(super) fn derive_status(engine: &EngineCore) -> EngineStatus {
    if engine.is_running() {
        return EngineStatus::Running;
    }

    if engine.pattern == Pattern::Life {
        if engine.grid.live_count() == 0 {
            return EngineStatus::EmptyGrid;
        }
        if engine.clock.generation() > 0 && !LifePattern::next_generation(&engine.grid).1 {
            return EngineStatus::Stable;
        }
    }

    if engine.clock.cap_reached() {
        EngineStatus::MaxGenerationsReached
    } else {
        EngineStatus::Paused
    }
}
