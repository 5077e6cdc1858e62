//! In-memory LRU cache of gross update series
//!
//! Valuation reads the full series of a movie's gross updates many times
//! while building standings and value histories. The series is cached per
//! movie and dropped whenever an update for that movie is written.

use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{storage::models::MovieGrossUpdate, MovieId};

/// Default number of movie series kept in memory.
pub const DEFAULT_GROSS_CACHE_CAPACITY: usize = 256;

/// LRU cache keyed by movie, holding that movie's gross updates.
#[derive(Clone)]
pub struct GrossCache {
    memory_cache: Arc<Mutex<LruCache<MovieId, Vec<MovieGrossUpdate>>>>,
}

impl GrossCache {
    /// Create a cache holding at most `memory_capacity` series (minimum 1).
    pub fn new(memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<MovieId, Vec<MovieGrossUpdate>>> {
        // A panic while holding the lock cannot leave a half-written series.
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, movie_id: MovieId) -> Option<Vec<MovieGrossUpdate>> {
        self.lock().get(&movie_id).cloned()
    }

    pub fn put(&self, movie_id: MovieId, updates: Vec<MovieGrossUpdate>) {
        self.lock().put(movie_id, updates);
    }

    /// Drop the cached series for one movie.
    pub fn invalidate(&self, movie_id: MovieId) {
        self.lock().pop(&movie_id);
    }

    /// Drop every cached series.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for GrossCache {
    fn default() -> Self {
        Self::new(DEFAULT_GROSS_CACHE_CAPACITY)
    }
}
