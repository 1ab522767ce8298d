use lodestar_core::types::{CellCoord, Terrain};
use std::collections::HashMap;

/// Sparse store of authored terrain markers plus a memo cache of resolved
/// lookups.
///
/// The authoritative map is never exposed; every mutation goes through
/// `set`, which keeps the cache entry for that coordinate in step. Absent
/// cells are `Empty`, and writing `Empty` removes the sparse entry so the
/// two representations cannot drift apart.
#[derive(Debug, Default)]
pub struct TerrainGrid {
    cells: HashMap<CellCoord, Terrain>,
    cache: HashMap<CellCoord, Terrain>,
}

impl TerrainGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the authored marker at a cell, refreshing its cache entry.
    pub fn set(&mut self, cell: CellCoord, terrain: Terrain) {
        if terrain.is_authored() {
            self.cells.insert(cell, terrain);
        } else {
            self.cells.remove(&cell);
        }
        self.cache.insert(cell, terrain);
    }

    /// Resolve the marker at a cell through the cache.
    pub fn resolve(&mut self, cell: CellCoord) -> Terrain {
        if let Some(&terrain) = self.cache.get(&cell) {
            return terrain;
        }
        let terrain = self.cells.get(&cell).copied().unwrap_or_default();
        self.cache.insert(cell, terrain);
        terrain
    }

    /// Drop all memoized entries without touching authored data. Call after
    /// any bulk mutation path before trusting subsequent resolves.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Whether any authored cell lies in the half-open rectangle `[min, max)`.
    pub fn has_authored_in(&self, min: CellCoord, max: CellCoord) -> bool {
        for x in min.x..max.x {
            for y in min.y..max.y {
                if self.cells.contains_key(&CellCoord::new(x, y)) {
                    return true;
                }
            }
        }
        false
    }

    /// Number of authored cells.
    pub fn authored_len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_set_then_resolve() {
        let mut grid = TerrainGrid::new();
        let cell = IVec2::new(3, -7);
        assert_eq!(grid.resolve(cell), Terrain::Empty);
        grid.set(cell, Terrain::Grass);
        assert_eq!(grid.resolve(cell), Terrain::Grass);
    }

    #[test]
    fn test_set_refreshes_stale_cache() {
        let mut grid = TerrainGrid::new();
        let cell = IVec2::new(0, 0);
        // Populate the cache with Empty, then author over it.
        assert_eq!(grid.resolve(cell), Terrain::Empty);
        grid.set(cell, Terrain::Dirt);
        assert_eq!(grid.resolve(cell), Terrain::Dirt);
        grid.set(cell, Terrain::Grass);
        assert_eq!(grid.resolve(cell), Terrain::Grass);
    }

    #[test]
    fn test_empty_write_removes_entry() {
        let mut grid = TerrainGrid::new();
        let cell = IVec2::new(5, 5);
        grid.set(cell, Terrain::Grass);
        assert_eq!(grid.authored_len(), 1);
        grid.set(cell, Terrain::Empty);
        assert_eq!(grid.authored_len(), 0);
        assert_eq!(grid.resolve(cell), Terrain::Empty);
    }

    #[test]
    fn test_clear_cache_keeps_authored_data() {
        let mut grid = TerrainGrid::new();
        let cell = IVec2::new(-2, 9);
        grid.set(cell, Terrain::Dirt);
        grid.resolve(IVec2::new(100, 100));
        grid.clear_cache();
        assert_eq!(grid.authored_len(), 1);
        assert_eq!(grid.resolve(cell), Terrain::Dirt);
    }

    #[test]
    fn test_resolve_memoizes() {
        let mut grid = TerrainGrid::new();
        let cell = IVec2::new(1, 1);
        grid.resolve(cell);
        assert!(grid.cache.contains_key(&cell));
        assert!(grid.cells.is_empty());
    }

    #[test]
    fn test_has_authored_in_bounds() {
        let mut grid = TerrainGrid::new();
        grid.set(IVec2::new(17, 2), Terrain::Grass);
        assert!(grid.has_authored_in(IVec2::new(16, 0), IVec2::new(32, 16)));
        assert!(!grid.has_authored_in(IVec2::new(0, 0), IVec2::new(16, 16)));
        // Max bound is exclusive.
        assert!(!grid.has_authored_in(IVec2::new(0, 0), IVec2::new(17, 16)));
    }
}
