use super::EngineCore;

/// Shading bucket for a day's contribution count: 0, 1, 2-3, 4-6, 7+
#[inline]
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2..=3 => 2,
        4..=6 => 3,
        _ => 4,
    }
}

pub(super) fn extract_levels(engine: &mut EngineCore) -> &[u8] {
    let cells = engine.grid.as_slice();
    if engine.levels.len() != cells.len() {
        engine.levels.resize(cells.len(), 0);
    }
    for (level, &count) in engine.levels.iter_mut().zip(cells) {
        *level = intensity_level(count);
    }
    &engine.levels
}
