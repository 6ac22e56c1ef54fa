//! Shared random-number generator handle.
//!
//! Catalog generation borrows the process generator, reseeds it, draws, and
//! hands it back untouched. `ReseedGuard` owns that window: the snapshot taken
//! on entry is restored when the guard drops, whether the caller returns
//! normally, bails with `?`, or unwinds.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::{Deref, DerefMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedRng {
    inner: ChaCha8Rng,
}

impl SharedRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reseed from `seed` until the returned guard drops.
    ///
    /// The `&mut` borrow keeps any other user of the generator out of the
    /// window.
    pub fn reseeded(&mut self, seed: u64) -> ReseedGuard<'_> {
        let saved = std::mem::replace(&mut self.inner, ChaCha8Rng::seed_from_u64(seed));
        ReseedGuard { rng: self, saved }
    }
}

impl RngCore for SharedRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Scoped, reseeded borrow of a `SharedRng`.
pub struct ReseedGuard<'a> {
    rng: &'a mut SharedRng,
    saved: ChaCha8Rng,
}

impl Deref for ReseedGuard<'_> {
    type Target = SharedRng;

    fn deref(&self) -> &SharedRng {
        &*self.rng
    }
}

impl DerefMut for ReseedGuard<'_> {
    fn deref_mut(&mut self) -> &mut SharedRng {
        &mut *self.rng
    }
}

impl Drop for ReseedGuard<'_> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.rng.inner, &mut self.saved);
    }
}
