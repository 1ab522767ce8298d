use crate::layer::ChunkLayer;
use lodestar_core::types::ChunkCoord;
use std::collections::HashSet;

/// Vertical extent of the camera view in world units (+y up the scroll
/// axis); supplied by the rendering collaborator each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRect {
    pub bottom: f32,
    pub top: f32,
}

/// Inclusive chunk-row range required to be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub min_y: i32,
    pub max_y: i32,
}

/// Computes the visible chunk window from the camera each tick and diffs it
/// against the loaded set, driving create/destroy on every registered layer.
///
/// The world scrolls along one axis: only the vertical window is ever
/// re-derived from the camera, while the horizontal chunk range is fixed at
/// configuration. The window starts unset so the first tick always applies.
/// Chunk store state must only be mutated through this diff (or the
/// explicit pre-load entry points); ad-hoc create/destroy calls elsewhere
/// would drift the loaded-set tracking.
pub struct ChunkScheduler {
    chunk_height: f32,
    min_chunk_x: i32,
    max_chunk_x: i32,
    above_margin: i32,
    below_margin: i32,
    loaded: HashSet<ChunkCoord>,
    window: Option<RowWindow>,
}

impl ChunkScheduler {
    pub fn new(
        chunk_height: u32,
        min_chunk_x: i32,
        max_chunk_x: i32,
        above_margin: i32,
        below_margin: i32,
    ) -> Self {
        Self {
            chunk_height: chunk_height as f32,
            min_chunk_x,
            max_chunk_x,
            above_margin,
            below_margin,
            loaded: HashSet::new(),
            window: None,
        }
    }

    /// Per-tick entry point. Recomputation is idempotent: an unchanged
    /// window applies no diff, and a skipped tick is recovered by the next
    /// one.
    pub fn tick(&mut self, camera: CameraRect, layers: &mut [&mut dyn ChunkLayer]) {
        let window = RowWindow {
            min_y: (camera.bottom / self.chunk_height).floor() as i32 - self.below_margin,
            max_y: (camera.top / self.chunk_height).ceil() as i32 + self.above_margin,
        };

        if self.window == Some(window) {
            return;
        }

        log::debug!(
            "chunk window {:?} -> {:?} (loaded: {})",
            self.window,
            window,
            self.loaded.len()
        );

        self.unload_outside(window, layers);
        self.load_window(window, layers);
        self.window = Some(window);
    }

    fn unload_outside(&mut self, window: RowWindow, layers: &mut [&mut dyn ChunkLayer]) {
        let stale: Vec<ChunkCoord> = self
            .loaded
            .iter()
            .filter(|coord| coord.y < window.min_y || coord.y > window.max_y)
            .copied()
            .collect();

        for coord in stale {
            for layer in layers.iter_mut() {
                log::trace!("unloading {} chunk ({}, {})", layer.label(), coord.x, coord.y);
                layer.destroy_chunk(coord);
            }
            self.loaded.remove(&coord);
        }
    }

    fn load_window(&mut self, window: RowWindow, layers: &mut [&mut dyn ChunkLayer]) {
        for cy in window.min_y..=window.max_y {
            for cx in self.min_chunk_x..=self.max_chunk_x {
                let coord = ChunkCoord::new(cx, cy);
                if self.loaded.contains(&coord) {
                    continue;
                }
                for layer in layers.iter_mut() {
                    log::trace!("loading {} chunk ({}, {})", layer.label(), cx, cy);
                    layer.create_chunk(coord);
                }
                // Marked even when every layer skipped, so the coordinate is
                // not re-attempted until it leaves and re-enters the window.
                self.loaded.insert(coord);
            }
        }
    }

    /// The most recently applied window, if any tick has run.
    pub fn window(&self) -> Option<RowWindow> {
        self.window
    }

    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.loaded.contains(&coord)
    }

    /// Number of chunk coordinates currently tracked as loaded.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}
