//! Pluggable random byte sources.

use rand::rngs::adapter::ReseedingRng;
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Core;

/// Selects the random source backing [`DefaultRandom`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum RandomMode {
    /// Probe the operating system source once and use the strong source
    /// when it is available, the fast one otherwise.
    #[default]
    Auto,
    /// A fast, non-cryptographic generator.
    Fast,
    /// A cryptographically strong generator.
    Strong,
}

/// The crate's default random source: a [`RngCore`] facade over either a
/// fast [`SmallRng`] or a periodically reseeded ChaCha12 stream keyed from
/// the operating system.
///
/// The strong flavor matches the reseeding strategy of
/// [`rand::rngs::ThreadRng`] while keeping the state inside the owning
/// generator, so process-wide generators stay self-contained.
///
/// # Examples
///
/// ```rust
/// use rand::RngCore;
/// use uuid4asc::{DefaultRandom, RandomMode};
///
/// let mut rng = DefaultRandom::new(RandomMode::Auto);
/// let mut buffer = [0u8; 8];
/// rng.fill_bytes(&mut buffer);
/// ```
#[derive(Debug)]
pub struct DefaultRandom(Flavor);

#[derive(Debug)]
enum Flavor {
    Fast(SmallRng),
    Strong(ReseedingRng<ChaCha12Core, OsRng>),
}

impl DefaultRandom {
    /// Creates a random source of the requested mode.
    pub fn new(mode: RandomMode) -> Self {
        match mode {
            RandomMode::Fast => Self(Flavor::Fast(SmallRng::from_entropy())),
            RandomMode::Strong => Self(Flavor::Strong(strong_rng())),
            RandomMode::Auto => {
                // one probe decides; the OS source either works or it does not
                let mut probe = [0u8; 1];
                if OsRng.try_fill_bytes(&mut probe).is_ok() {
                    Self(Flavor::Strong(strong_rng()))
                } else {
                    Self(Flavor::Fast(SmallRng::from_entropy()))
                }
            }
        }
    }

    /// Returns true when the source is cryptographically strong.
    pub fn is_strong(&self) -> bool {
        matches!(self.0, Flavor::Strong(_))
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new(RandomMode::Auto)
    }
}

fn strong_rng() -> ReseedingRng<ChaCha12Core, OsRng> {
    ReseedingRng::new(ChaCha12Core::from_entropy(), 1024 * 64, OsRng)
}

impl RngCore for DefaultRandom {
    fn next_u32(&mut self) -> u32 {
        match &mut self.0 {
            Flavor::Fast(rng) => rng.next_u32(),
            Flavor::Strong(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match &mut self.0 {
            Flavor::Fast(rng) => rng.next_u64(),
            Flavor::Strong(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match &mut self.0 {
            Flavor::Fast(rng) => rng.fill_bytes(dest),
            Flavor::Strong(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match &mut self.0 {
            Flavor::Fast(rng) => rng.try_fill_bytes(dest),
            Flavor::Strong(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultRandom, RandomMode};
    use rand::RngCore;

    /// Fills buffers in every mode
    #[test]
    fn fills_buffers_in_every_mode() {
        for mode in [RandomMode::Auto, RandomMode::Fast, RandomMode::Strong] {
            let mut rng = DefaultRandom::new(mode);
            let mut buffer = [0u8; 64];
            rng.fill_bytes(&mut buffer);
            assert_ne!(buffer, [0u8; 64]);
        }
    }

    /// Selects the strong source where the OS source is available
    #[test]
    fn auto_selects_strong_source() {
        assert!(DefaultRandom::new(RandomMode::Auto).is_strong());
        assert!(!DefaultRandom::new(RandomMode::Fast).is_strong());
    }
}
