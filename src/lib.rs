//! Mostly-monotonic version 4 UUIDs with compact base-32/base-64 text
//! encodings
//!
//! ```rust
//! use uuid4asc::uuid_asc;
//!
//! let id = uuid_asc();
//! println!("{}", id); // e.g. "62f4733b-a1e6-4d41-9d7e-884b32395457"
//! println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! # Field and bit layout
//!
//! The ascending generator produces identifiers with the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         epoch_seconds                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          sub_second           |  ver  |      sub_counter      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 32-bit `epoch_seconds` field counts whole seconds since Unix time
//!   `0x40000000`.
//! - The 16-bit `sub_second` field holds the fraction of the second in
//!   units of 1/65535 s.
//! - The 12-bit `sub_counter` field breaks ties between values generated
//!   within the same timer tick; it is randomly re-initialized whenever the
//!   time prefix advances, and an exhausted counter carries into the time
//!   prefix so ordering survives arbitrarily coarse clocks.
//! - The 4-bit `ver` field is set at `0100` and the 2-bit `var` field at
//!   `10`, so the values pass as standard version 4 UUIDs; the remaining 62
//!   bits are random.
//!
//! Because the high bytes are time-derived, successive values from one
//! process's shared generator are non-decreasing as byte strings, which
//! keeps database index insertions local. The values are *not* suitable as
//! unpredictable tokens.
//!
//! # Text formats
//!
//! Every value converts to and from hex (short, grouped, braced, URN) and
//! two compact alphabet encodings:
//!
//! ```rust
//! use uuid4asc::{Format, Style, Uuid};
//!
//! let mut id: Uuid = "urn:uuid:be0c8b75-3c09-48e6-9653-b149db655cad".parse()?;
//! assert_eq!(id.format(Format::HexShort)?, "be0c8b753c0948e69653b149db655cad");
//! assert_eq!(id.format(Format::Enc32)?, "pq68nw9u154ed5ijn54wnraum5");
//! assert_eq!(id.format(Format::Enc64)?, "jUm9RHk7GCOKIv37qqJQf.");
//! assert_eq!(
//!     id.format(Style::new(Format::HexGrouped).upper())?,
//!     "BE0C8B75-3C09-48E6-9653-B149DB655CAD"
//! );
//! # Ok::<(), uuid4asc::Error>(())
//! ```

mod uuid;
pub use uuid::Uuid;

pub mod codec;

pub mod convert;
pub use convert::{Format, Style};

mod error;
pub use error::Error;

mod generator;
pub use generator::{AscendingGenerator, GeneratorKind};

mod random;
pub use random::{DefaultRandom, RandomMode};

pub mod config;

mod entry;
pub use entry::{new_uuid, uuid_asc, uuid_random};
