//! Default generator and entry point functions.

use std::sync;

use crate::{config, AscendingGenerator, DefaultRandom, GeneratorKind, Uuid};

/// Returns the lock handle of the process-wide shared generator, creating
/// one with the configured random mode if none exists.
///
/// The mutex is the critical section that makes the ordering guarantee
/// hold across threads.
fn lock_global_gen() -> sync::MutexGuard<'static, AscendingGenerator<DefaultRandom>> {
    static G: sync::OnceLock<sync::Mutex<AscendingGenerator<DefaultRandom>>> =
        sync::OnceLock::new();
    G.get_or_init(|| {
        sync::Mutex::new(AscendingGenerator::new(DefaultRandom::new(
            config::get().random_mode,
        )))
    })
    .lock()
    .expect("uuid4asc: could not lock global generator")
}

/// Generates an ascending UUID from the process-wide shared generator.
///
/// Values from this function are non-decreasing in byte order across all
/// threads of the process.
///
/// # Examples
///
/// ```rust
/// let id = uuid4asc::uuid_asc();
/// println!("{}", id); // e.g., "62f4733b-a1e6-4d41-9d7e-884b32395457"
/// println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid_asc() -> Uuid {
    lock_global_gen().generate()
}

/// Generates a plain version 4 (random) UUID from the shared random source.
///
/// # Examples
///
/// ```rust
/// let id = uuid4asc::uuid_random();
/// assert_eq!(id.version(), 4);
/// ```
pub fn uuid_random() -> Uuid {
    lock_global_gen().generate_random()
}

/// Generates a UUID with the configured default generator.
pub fn new_uuid() -> Uuid {
    match config::get().default_generator {
        GeneratorKind::Nil => Uuid::nil(),
        GeneratorKind::Random => uuid_random(),
        GeneratorKind::Ascending => uuid_asc(),
    }
}
