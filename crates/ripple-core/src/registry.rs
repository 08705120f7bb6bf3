//! Bounded, FIFO-evicting collection of active ripples.
//!
//! Storage is a ring buffer of `capacity` slots with a head index and a
//! length. Logical index 0 is always the oldest ripple; inserting at capacity
//! overwrites it in place instead of shifting the rest.

use glam::Vec2;

use crate::config::WaveParams;
use crate::state::Ripple;

#[derive(Clone, Debug)]
pub struct RippleRegistry {
    slots: Box<[Ripple]>,
    head: usize,
    len: usize,
}

impl RippleRegistry {
    /// `capacity` must be at least 1; [`crate::RippleConfig::validate`]
    /// guarantees it for engine-owned registries.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ripple registry needs room for one ripple");
        Self {
            slots: vec![Ripple::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    /// Ripple at logical index `i` (0 = oldest).
    pub fn get(&self, i: usize) -> Option<&Ripple> {
        (i < self.len).then(|| &self.slots[self.physical(i)])
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Ripple> + '_ {
        (0..self.len).map(move |i| &self.slots[self.physical(i)])
    }

    /// Create a ripple at `origin` and append it, evicting the oldest when
    /// full. Returns the evicted ripple, if any.
    pub fn insert(&mut self, origin: Vec2, start_time: f32, wave: &WaveParams) -> Option<Ripple> {
        self.push(Ripple::new(origin, start_time, wave))
    }

    /// Append an already built ripple. Never fails: at capacity the oldest is
    /// evicted regardless of how much life it has left.
    pub fn push(&mut self, ripple: Ripple) -> Option<Ripple> {
        if self.is_full() {
            let evicted = std::mem::replace(&mut self.slots[self.head], ripple);
            self.head = (self.head + 1) % self.capacity();
            log::debug!(
                "[registry] evicted ripple started at {:.3}s to make room",
                evicted.start_time
            );
            return Some(evicted);
        }
        let tail = self.physical(self.len);
        self.slots[tail] = ripple;
        self.len += 1;
        None
    }

    /// Drop every ripple with `age > lifetime + release_tail`, compacting the
    /// survivors in place so their relative order is kept. Returns how many
    /// were removed.
    pub fn prune_expired(&mut self, now: f32, release_tail: f32) -> usize {
        let mut w = 0;
        for r in 0..self.len {
            let ripple = self.slots[self.physical(r)];
            if ripple.is_expired(now, release_tail) {
                continue;
            }
            if w != r {
                let dst = self.physical(w);
                self.slots[dst] = ripple;
            }
            w += 1;
        }
        let removed = self.len - w;
        self.len = w;
        if removed > 0 {
            log::debug!("[registry] pruned {removed} expired ripple(s) at {now:.3}s");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
