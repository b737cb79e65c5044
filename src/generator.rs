//! Ascending UUID generator and related types.

use crate::Uuid;
use rand::RngCore;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The enumerated generator modes.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum GeneratorKind {
    /// Always yields the all-zero UUID.
    Nil,
    /// Plain version 4: 16 random bytes with version and variant forced.
    Random,
    /// The time-ordered generator of [`AscendingGenerator`].
    #[default]
    Ascending,
}

/// Seconds subtracted from the Unix time before packing the 4-byte seconds
/// field.
const EPOCH_OFFSET_SECS: u64 = 0x4000_0000;

/// The sub-counter is confined to the upper half of its 0x4xxx range so
/// that forcing the version nibble on byte 6 never changes the emitted
/// value, and the low bits stay available as an entropy buffer.
const SUB_COUNTER_MIN: u16 = 0x4000;
const SUB_COUNTER_MAX: u16 = 0x4fff;

/// Generates time-ordered 128-bit values that are non-decreasing in byte
/// order across successive calls, while carrying the version 4 tag.
///
/// The emitted layout is a 4-byte seconds field (offset from a fixed
/// epoch), a 2-byte sub-second fraction in units of 1/65535 s, a 2-byte
/// sub-counter, and 8 random bytes, with the standard version/variant bits
/// forced afterwards. When the clock stalls, goes backward, or is too
/// coarse to advance, the previous time prefix is reused and the
/// sub-counter breaks the tie; when the sub-counter is exhausted the
/// increment carries into the time prefix itself, so forward progress is
/// guaranteed even for many thousands of values within one timer tick.
///
/// The ordering guarantee is per process and requires callers to serialize
/// access to one instance. The following example shares a generator across
/// threads behind a mutex:
///
/// ```rust
/// use std::{sync, thread};
/// use uuid4asc::{AscendingGenerator, DefaultRandom, RandomMode};
///
/// let g = sync::Arc::new(sync::Mutex::new(AscendingGenerator::new(
///     DefaultRandom::new(RandomMode::Fast),
/// )));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// Despite the version 4 tag, the high bytes are time-derived, not random;
/// this is an index-locality optimization, not a security primitive.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct AscendingGenerator<R> {
    /// Packed seconds + fraction of the last emitted value.
    last_prefix: [u8; 6],
    /// Tie-breaker within one timer tick; zero only before first use.
    sub_counter: u16,

    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> AscendingGenerator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self {
            last_prefix: [0; 6],
            sub_counter: 0,
            rng,
        }
    }

    /// Generates a new ascending UUID from the current system time.
    pub fn generate(&mut self) -> Uuid {
        self.generate_core(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock may have gone backwards"),
        )
    }

    /// Generates a new ascending UUID from the given Unix timestamp.
    ///
    /// Exposed separately so the clock can be driven explicitly, e.g. to
    /// exercise coarse timer resolutions.
    pub fn generate_core(&mut self, now: Duration) -> Uuid {
        let candidate = pack_prefix(now);
        if candidate > self.last_prefix {
            self.last_prefix = candidate;
            self.sub_counter = self.random_sub_counter();
        } else if self.sub_counter < SUB_COUNTER_MIN {
            // first emission; nothing precedes it, any counter value is in order
            self.sub_counter = self.random_sub_counter();
        } else if self.sub_counter == SUB_COUNTER_MAX {
            // carry the exhausted counter into the prefix's low 16 bits
            let mut wide = [0u8; 8];
            wide[2..].copy_from_slice(&self.last_prefix);
            let bumped = u64::from_be_bytes(wide).wrapping_add(1) & 0xffff_ffff_ffff;
            self.last_prefix.copy_from_slice(&bumped.to_be_bytes()[2..]);
            self.sub_counter = self.random_sub_counter();
        } else {
            self.sub_counter += 1;
        }

        let mut bytes = [0u8; 16];
        bytes[..6].copy_from_slice(&self.last_prefix);
        bytes[6..8].copy_from_slice(&self.sub_counter.to_be_bytes());
        self.rng.fill_bytes(&mut bytes[8..]);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from(bytes)
    }

    /// Generates a plain version 4 UUID utilizing the random number
    /// generator inside. Leaves the ascending state untouched.
    pub fn generate_random(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from(bytes)
    }

    fn random_sub_counter(&mut self) -> u16 {
        SUB_COUNTER_MIN + (self.rng.next_u32() & 0x0fff) as u16
    }
}

/// Packs a Unix timestamp into the 6-byte prefix: epoch-offset seconds
/// followed by the sub-second fraction in 1/65535 s units.
fn pack_prefix(now: Duration) -> [u8; 6] {
    let secs = now.as_secs().wrapping_sub(EPOCH_OFFSET_SECS) as u32;
    let frac = (u64::from(now.subsec_nanos()) * 0xffff / 1_000_000_000) as u16;
    let mut prefix = [0u8; 6];
    prefix[..4].copy_from_slice(&secs.to_be_bytes());
    prefix[4..].copy_from_slice(&frac.to_be_bytes());
    prefix
}

/// Supports operations as an infinite iterator that produces a new
/// ascending UUID for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4asc::{AscendingGenerator, DefaultRandom, RandomMode};
///
/// AscendingGenerator::new(DefaultRandom::new(RandomMode::Fast))
///     .enumerate()
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<R: RngCore> Iterator for AscendingGenerator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for AscendingGenerator<R> {}

#[cfg(test)]
mod tests {
    use super::{AscendingGenerator, EPOCH_OFFSET_SECS, SUB_COUNTER_MAX, SUB_COUNTER_MIN};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn test_generator() -> AscendingGenerator<SmallRng> {
        AscendingGenerator::new(SmallRng::seed_from_u64(42))
    }

    fn ts(secs_past_epoch: u64, nanos: u32) -> Duration {
        Duration::new(EPOCH_OFFSET_SECS + secs_past_epoch, nanos)
    }

    /// Generates non-decreasing values under a live clock
    #[test]
    fn generates_non_decreasing_values_under_live_clock() {
        let mut g = test_generator();
        let mut prev = g.generate();
        for _ in 0..5_000 {
            let curr = g.generate();
            assert!(prev <= curr);
            prev = curr;
        }
    }

    /// Generates non-decreasing values when the clock only advances every
    /// ten seconds
    #[test]
    fn generates_non_decreasing_values_with_coarse_clock() {
        let mut g = test_generator();
        let mut prev = g.generate_core(ts(100, 0));
        for i in 1..2_000u64 {
            let curr = g.generate_core(ts(100 + (i / 500) * 10, 0));
            assert!(prev <= curr, "iteration {i}");
            prev = curr;
        }
    }

    /// Generates non-decreasing values when the clock goes backwards
    #[test]
    fn generates_non_decreasing_values_with_backwards_clock() {
        let mut g = test_generator();
        let mut prev = g.generate_core(ts(5_000, 123_456_789));
        for i in 0..2_000u64 {
            let curr = g.generate_core(ts(5_000 - i.min(4_000), 0));
            assert!(prev <= curr, "iteration {i}");
            prev = curr;
        }
    }

    /// Carries into the time prefix when the sub-counter is exhausted
    #[test]
    fn carries_into_prefix_at_sub_counter_exhaustion() {
        let now = ts(77, 500_000_000);
        let mut g = test_generator();
        let mut prev = g.generate_core(now);
        let initial_prefix = g.last_prefix;
        // more requests than the counter range can absorb in one tick
        for _ in 0..3 * 0x1000 {
            let curr = g.generate_core(now);
            assert!(prev <= curr);
            prev = curr;
        }
        assert!(g.last_prefix > initial_prefix);
    }

    /// Keeps the sub-counter within its reserved range
    #[test]
    fn keeps_sub_counter_within_reserved_range() {
        let now = ts(9, 0);
        let mut g = test_generator();
        for _ in 0..10_000 {
            g.generate_core(now);
            assert!((SUB_COUNTER_MIN..=SUB_COUNTER_MAX).contains(&g.sub_counter));
        }
    }

    /// Encodes the timestamp in the leading six bytes
    #[test]
    fn encodes_timestamp_in_leading_bytes() {
        let mut g = test_generator();
        let id = g.generate_core(ts(0x0102_0304, 0));
        assert_eq!(&id.as_bytes()[..4], &[0x01, 0x02, 0x03, 0x04]);
        // half a second is half the fraction range
        let id = g.generate_core(ts(0x0102_0305, 500_000_000));
        assert_eq!(id.as_bytes()[4], 0x7f);
    }

    /// Sets version and variant bits on every value
    #[test]
    fn sets_version_and_variant_bits() {
        let mut g = test_generator();
        for _ in 0..1_000 {
            let asc = g.generate();
            assert_eq!(asc.version(), 4);
            assert_eq!(asc.as_bytes()[8] & 0xc0, 0x80);
            let v4 = g.generate_random();
            assert_eq!(v4.version(), 4);
            assert_eq!(v4.as_bytes()[8] & 0xc0, 0x80);
        }
    }
}
