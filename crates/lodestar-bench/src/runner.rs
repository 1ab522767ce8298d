use std::time::Instant;

use lodestar_world::scheduler::CameraRect;
use lodestar_world::World;

use crate::scenes::{self, SceneConfig};

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub tick_count: u32,
    pub authored_cells: usize,
    pub terrain_chunks: usize,
    pub starfield_chunks: usize,
    pub timings: TimingSeries,
}

/// Drives a scripted camera scroll through each scene and times every tick.
pub struct BenchmarkRunner {
    tick_count: u32,
}

impl BenchmarkRunner {
    pub fn new(tick_count: u32) -> Self {
        Self { tick_count }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, scene: &SceneConfig) -> BenchmarkResult {
        log::info!("Running scene '{}'...", scene.name);

        let mut world = World::new(scene.config.clone()).expect("scene config is valid");
        scenes::paint_scene(&mut world, scene, self.tick_count);
        let authored_cells = world.terrain().grid().authored_len();
        log::info!("  Painted {} placeholder cells", authored_cells);

        // Camera spans roughly one screen of world units and climbs by
        // scroll_per_tick each tick.
        let screen_height = 12.0f32;
        let mut frame_times = Vec::with_capacity(self.tick_count as usize);

        for tick in 0..self.tick_count {
            let bottom = tick as f32 * scene.scroll_per_tick;
            let camera = CameraRect {
                bottom,
                top: bottom + screen_height,
            };

            let start = Instant::now();
            world.tick(camera);
            frame_times.push(start.elapsed().as_secs_f64() * 1000.0);
        }

        let (terrain_chunks, starfield_chunks) = world.loaded_counts();
        BenchmarkResult {
            scene_name: scene.name.to_string(),
            tick_count: self.tick_count,
            authored_cells,
            terrain_chunks,
            starfield_chunks,
            timings: compute_timings(&mut frame_times),
        }
    }
}

fn compute_timings(samples: &mut [f64]) -> TimingSeries {
    samples.sort_by(|a, b| a.total_cmp(b));
    let len = samples.len().max(1) as f64;
    let mean = samples.iter().sum::<f64>() / len;
    let percentile = |p: f64| {
        if samples.is_empty() {
            return 0.0;
        }
        let rank = ((p * (samples.len() - 1) as f64).round()) as usize;
        samples[rank]
    };

    TimingSeries {
        mean_ms: mean,
        median_ms: percentile(0.5),
        p95_ms: percentile(0.95),
        min_ms: samples.first().copied().unwrap_or(0.0),
        max_ms: samples.last().copied().unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::standard_scenes;

    #[test]
    fn test_compute_timings_ordering() {
        let mut samples = vec![4.0, 1.0, 3.0, 2.0];
        let timings = compute_timings(&mut samples);
        assert_eq!(timings.min_ms, 1.0);
        assert_eq!(timings.max_ms, 4.0);
        assert!((timings.mean_ms - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_run_completes() {
        let runner = BenchmarkRunner::new(16);
        let scenes = standard_scenes();
        let result = runner.run_scene(&scenes[0]);
        assert_eq!(result.tick_count, 16);
        assert!(result.starfield_chunks > 0, "scroll must leave chunks loaded");
        assert!(result.timings.min_ms <= result.timings.max_ms);
    }
}
