use crate::tiles::TileMap;

/// An iterative map generator driven to convergence before meshing.
pub trait MapGenerator {
    type Map: TileMap;

    /// Advances the generator by one refinement step.
    fn step(&mut self);
    /// Fraction of the map the generator considers covered.
    fn covered(&self) -> f32;
    /// How many consecutive steps left the map state unchanged.
    fn same_hash_count(&self) -> u32;
    fn map(&self) -> &Self::Map;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleParams {
    pub max_iterations: u32,
    pub coverage_threshold: f32,
    pub max_same_hash: u32,
}

impl Default for SettleParams {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            coverage_threshold: 0.5,
            max_same_hash: 25,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StopReason {
    Covered,
    Stagnant,
    IterationCap,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SettleOutcome {
    pub steps: u32,
    pub reason: StopReason,
}

/// Steps `generator` until it covers enough of the map, stops changing, or
/// runs past the iteration cap. Always steps at least once.
///
/// The cap is a countdown from `max_iterations` checked after every step
/// and allowed to reach -1, so an unsettled generator is stepped
/// `max_iterations + 2` times.
pub fn settle<G: MapGenerator>(generator: &mut G, params: &SettleParams) -> SettleOutcome {
    let mut steps = 0u32;
    loop {
        generator.step();
        steps += 1;
        let reason = if generator.covered() > params.coverage_threshold {
            StopReason::Covered
        } else if generator.same_hash_count() > params.max_same_hash {
            StopReason::Stagnant
        } else if steps > params.max_iterations.saturating_add(1) {
            StopReason::IterationCap
        } else {
            continue;
        };
        log::info!(
            "map settled after {} steps ({:?}, covered {:.3}, same-hash {})",
            steps,
            reason,
            generator.covered(),
            generator.same_hash_count()
        );
        return SettleOutcome { steps, reason };
    }
}
