use warren_walls::{
    MapGenerator, OccupancyGrid, SettleParams, StopReason, WallParams, generate_level, settle,
};

/// Generator that fills one cell per step and reports a scripted
/// "unchanged" streak.
struct FillingGenerator {
    width: usize,
    height: usize,
    grid: OccupancyGrid,
    filled: usize,
    steps: u32,
    stagnant_after: Option<u32>,
}

impl FillingGenerator {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: OccupancyGrid::new(width, height, Vec::new()),
            filled: 0,
            steps: 0,
            stagnant_after: None,
        }
    }
}

impl MapGenerator for FillingGenerator {
    type Map = OccupancyGrid;

    fn step(&mut self) {
        self.steps += 1;
        let (w, h) = (self.width, self.height);
        self.filled = (self.filled + 1).min(w * h);
        let filled = self.filled;
        self.grid = OccupancyGrid::from_fn(w, h, |x, y| y * w + x < filled);
    }

    fn covered(&self) -> f32 {
        self.grid.coverage()
    }

    fn same_hash_count(&self) -> u32 {
        match self.stagnant_after {
            Some(n) if self.steps > n => self.steps - n,
            _ => 0,
        }
    }

    fn map(&self) -> &OccupancyGrid {
        &self.grid
    }
}

#[test]
fn stops_once_coverage_passes_threshold() {
    let mut g = FillingGenerator::new(4, 4);
    let out = settle(&mut g, &SettleParams::default());
    // 9 of 16 cells is the first state strictly above one half.
    assert_eq!(out.reason, StopReason::Covered);
    assert_eq!(out.steps, 9);
}

#[test]
fn stops_when_state_stops_changing() {
    let mut g = FillingGenerator::new(4, 4);
    g.stagnant_after = Some(2);
    let params = SettleParams {
        max_same_hash: 3,
        ..SettleParams::default()
    };
    let out = settle(&mut g, &params);
    assert_eq!(out.reason, StopReason::Stagnant);
    assert_eq!(out.steps, 6);
}

#[test]
fn iteration_cap_bounds_the_loop() {
    let mut g = FillingGenerator::new(4, 4);
    let params = SettleParams {
        max_iterations: 3,
        coverage_threshold: 2.0,
        max_same_hash: u32::MAX,
    };
    let out = settle(&mut g, &params);
    assert_eq!(out.reason, StopReason::IterationCap);
    assert_eq!(out.steps, 5);
}

#[test]
fn default_cap_runs_1002_steps() {
    let mut g = FillingGenerator::new(2, 2);
    let params = SettleParams {
        coverage_threshold: 2.0,
        max_same_hash: u32::MAX,
        ..SettleParams::default()
    };
    let out = settle(&mut g, &params);
    assert_eq!(out.reason, StopReason::IterationCap);
    assert_eq!(out.steps, 1002);
    assert_eq!(g.steps, 1002);
}

#[test]
fn always_steps_at_least_once() {
    let mut g = FillingGenerator::new(4, 4);
    let params = SettleParams {
        max_iterations: 0,
        coverage_threshold: -1.0,
        max_same_hash: 0,
    };
    let out = settle(&mut g, &params);
    assert_eq!(out.steps, 1);
    assert_eq!(out.reason, StopReason::Covered);
}

#[test]
fn generate_level_meshes_the_settled_map() {
    let mut g = FillingGenerator::new(4, 4);
    let (outcome, stats, buffer) =
        generate_level(&mut g, &SettleParams::default(), &WallParams::default());
    assert_eq!(outcome.reason, StopReason::Covered);
    assert_eq!(stats.tiles, 25);
    assert_eq!(buffer.count, stats.emission.quads() as usize * 6);
    assert!(stats.emission.interior > 0);
    assert_eq!(stats.emission.boundary, 20);
}
