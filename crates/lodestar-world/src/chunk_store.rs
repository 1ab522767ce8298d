use crate::chunk::{Chunk, TileBuffer};
use lodestar_core::types::ChunkCoord;
use std::collections::HashMap;

/// Spatial container for one layer's loaded chunks.
///
/// One entry per coordinate, created lazily. Slots are stable u32 handles
/// drawn from a free list that grows on demand; a destroyed chunk's slot is
/// reused by the next insert.
#[derive(Debug, Default)]
pub struct ChunkStore {
    chunks: HashMap<ChunkCoord, Chunk>,
    free_slots: Vec<u32>,
    next_slot: u32,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chunk at the given coordinate, allocating a slot for it.
    /// An already-present chunk is returned unchanged and the new buffer is
    /// discarded.
    pub fn insert(&mut self, coord: ChunkCoord, tiles: TileBuffer) -> &Chunk {
        let free_slots = &mut self.free_slots;
        let next_slot = &mut self.next_slot;
        self.chunks.entry(coord).or_insert_with(|| {
            let slot = free_slots.pop().unwrap_or_else(|| {
                let slot = *next_slot;
                *next_slot += 1;
                slot
            });
            Chunk::new(coord, slot, tiles)
        })
    }

    /// Remove a chunk, returning its slot to the free list. Removing an
    /// absent coordinate is a no-op; returns whether a chunk was removed.
    pub fn remove(&mut self, coord: ChunkCoord) -> bool {
        match self.chunks.remove(&coord) {
            Some(chunk) => {
                self.free_slots.push(chunk.slot());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterator over all loaded chunks.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter()
    }

    /// Loaded chunk coordinates.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    /// Remove every chunk, recycling all slots.
    pub fn clear(&mut self) {
        for (_, chunk) in self.chunks.drain() {
            self.free_slots.push(chunk.slot());
        }
    }
}
