//! Growable bit-indexed set for dense small identifiers.

use super::error::ConfigError;

const WORD_BITS: usize = 64;
const LOG2_WORD_BITS: usize = 6;

/// A set of small non-negative integers backed by a vector of 64-bit words.
///
/// Membership tests are a shift and a mask, so registries of dense
/// identifiers avoid hashing entirely. Storage only grows, and is sized to
/// the highest index, so indices are capped at [`MAX_SLOTS`](Self::MAX_SLOTS).
///
/// # Example
///
/// ```rust
/// use fsmkit::core::CompactSet;
///
/// let mut set = CompactSet::new();
/// set.add(3).unwrap();
/// set.add(70).unwrap();
/// assert!(set.add(CompactSet::MAX_SLOTS).is_err());
///
/// assert!(set.contains(3));
/// assert!(!set.contains(4));
/// assert_eq!(set.len(), 71);
/// assert_eq!(set.count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompactSet {
    length: usize,
    words: Vec<u64>,
}

impl CompactSet {
    /// Number of slots a set may hold; valid indices are `0..MAX_SLOTS`.
    pub const MAX_SLOTS: usize = 1 << 20;

    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `i` is a member.
    pub fn contains(&self, i: usize) -> bool {
        if i >= self.length {
            return false;
        }
        self.words[i >> LOG2_WORD_BITS] & (1 << (i & (WORD_BITS - 1))) != 0
    }

    /// Insert `i`. Adding an existing member is a no-op.
    ///
    /// Fails with [`ConfigError::IndexTooLarge`] when `i` is not below
    /// [`MAX_SLOTS`](Self::MAX_SLOTS); the set is left unchanged.
    pub fn add(&mut self, i: usize) -> Result<(), ConfigError> {
        if i >= Self::MAX_SLOTS {
            return Err(ConfigError::IndexTooLarge {
                index: i,
                limit: Self::MAX_SLOTS,
            });
        }
        self.grow_to(i);
        self.words[i >> LOG2_WORD_BITS] |= 1 << (i & (WORD_BITS - 1));
        Ok(())
    }

    /// Number of representable slots: one past the highest index ever added.
    pub fn len(&self) -> usize {
        self.length
    }

    /// True when nothing has ever been added.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.length).filter(move |&i| self.contains(i))
    }

    // `i` is below MAX_SLOTS, so `i + 1` cannot overflow.
    fn grow_to(&mut self, i: usize) {
        if i < self.length {
            return;
        }
        let needed = words_needed(i + 1);
        if needed > self.words.len() {
            if needed > self.words.capacity() {
                // double so repeated growth stays amortized O(1)
                let target = (needed * 2).min(words_needed(Self::MAX_SLOTS));
                self.words.reserve_exact(target - self.words.len());
            }
            self.words.resize(needed, 0);
        }
        self.length = i + 1;
    }
}

fn words_needed(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = CompactSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.count(), 0);
        assert!(!set.contains(0));
    }

    #[test]
    fn add_is_idempotent() {
        let mut set = CompactSet::new();
        set.add(5).unwrap();
        set.add(5).unwrap();

        assert!(set.contains(5));
        assert_eq!(set.count(), 1);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn grows_across_word_boundaries() {
        let mut set = CompactSet::new();
        set.add(0).unwrap();
        set.add(63).unwrap();
        set.add(64).unwrap();
        set.add(200).unwrap();

        assert!(set.contains(0));
        assert!(set.contains(63));
        assert!(set.contains(64));
        assert!(set.contains(200));
        assert!(!set.contains(199));
        assert!(!set.contains(201));
        assert_eq!(set.len(), 201);
    }

    #[test]
    fn capacity_doubles_on_growth() {
        let mut set = CompactSet::new();
        set.add(64).unwrap();

        assert_eq!(set.words.len(), 2);
        assert!(set.words.capacity() >= 4);
    }

    #[test]
    fn never_shrinks() {
        let mut set = CompactSet::new();
        set.add(130).unwrap();
        set.add(2).unwrap();

        assert_eq!(set.len(), 131);
        assert!(set.contains(130));
    }

    #[test]
    fn iter_yields_members_in_order() {
        let mut set = CompactSet::new();
        set.add(9).unwrap();
        set.add(1).unwrap();
        set.add(65).unwrap();

        let members: Vec<usize> = set.iter().collect();
        assert_eq!(members, vec![1usize, 9, 65]);
    }

    #[test]
    fn rejects_indices_past_the_limit() {
        let mut set = CompactSet::new();

        assert_eq!(
            set.add(usize::MAX),
            Err(ConfigError::IndexTooLarge {
                index: usize::MAX,
                limit: CompactSet::MAX_SLOTS
            })
        );
        assert!(set.add(3_000_000_000).is_err());
        assert!(set.add(CompactSet::MAX_SLOTS).is_err());
        assert!(set.is_empty());
        assert_eq!(set.words.capacity(), 0);
        assert!(!set.contains(usize::MAX));
    }

    #[test]
    fn highest_slot_is_usable_and_capacity_is_capped() {
        let mut set = CompactSet::new();
        set.add(CompactSet::MAX_SLOTS - 1).unwrap();

        assert!(set.contains(CompactSet::MAX_SLOTS - 1));
        assert_eq!(set.len(), CompactSet::MAX_SLOTS);
        assert_eq!(set.words.len(), CompactSet::MAX_SLOTS / 64);
        assert!(set.words.capacity() < CompactSet::MAX_SLOTS / 32);
    }
}
