use crate::domain::patterns::Pattern;
use crate::systems::patterns::StepContext;

use super::{EngineCore, RunState};

pub(super) fn start(engine: &mut EngineCore, now: f64) {
    if engine.run_state == RunState::Running {
        return;
    }
    engine.run_state = RunState::Running;
    engine.clock.restart(now);
    log::debug!("start: {} at generation {}", engine.pattern.key(), engine.clock.generation());
}

pub(super) fn stop(engine: &mut EngineCore) {
    engine.run_state = RunState::Stopped;
}

pub(super) fn tick(engine: &mut EngineCore, now: f64) -> bool {
    if engine.run_state != RunState::Running || !engine.clock.is_due(now) {
        return false;
    }
    engine.clock.mark_frame(now);

    let outcome = {
        let mut ctx = StepContext {
            grid: &engine.grid,
            state: &engine.pattern_state,
            rng: &mut engine.rng,
            image: engine.image.as_ref(),
        };
        engine.patterns.step(engine.pattern, &mut ctx)
    };

    // Life settles into a still life: freeze on the last changing frame
    if engine.pattern == Pattern::Life && !outcome.changed {
        stop(engine);
        log::info!("life is stable at generation {}", engine.clock.generation());
        return false;
    }

    if engine.clock.cap_reached() {
        stop(engine);
        log::info!(
            "{} reached the generation cap ({})",
            engine.pattern.key(),
            engine.clock.max_generations()
        );
        return false;
    }

    engine.grid = outcome.grid;
    engine.pattern_state = outcome.state;
    engine.clock.advance();
    true
}
