use crate::{convert, Error, Format, GeneratorKind, Style};
use std::collections::HashMap;
use std::{cmp, fmt, hash, str};

/// Represents a Universally Unique IDentifier.
///
/// The 16 canonical bytes are immutable after construction; the only
/// mutable part is a lazy per-instance cache of rendered strings keyed by
/// [`Style`]. Equality, ordering, and hashing consider the bytes alone, as
/// unsigned big-endian byte strings, so [`PartialOrd::lt`] and friends are
/// the comparison operators.
///
/// # Examples
///
/// ```rust
/// use uuid4asc::Uuid;
///
/// let a: Uuid = "be0c8b753c0948e69653b149db655cad".parse()?;
/// let b: Uuid = "be0c8b753c0948e69653b149db655cae".parse()?;
/// assert!(a.lt(&b));
/// assert!(b.gt(&a));
/// # Ok::<(), uuid4asc::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Uuid {
    bytes: [u8; 16],
    cache: HashMap<Style, String>,
}

impl Uuid {
    /// Returns the nil UUID (all bits zero).
    pub fn nil() -> Self {
        Self::default()
    }

    /// Creates a new UUID from the given process-wide generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4asc::{GeneratorKind, Uuid};
    ///
    /// let id = Uuid::new(GeneratorKind::Ascending);
    /// assert_eq!(id.version(), 4);
    /// assert_eq!(Uuid::new(GeneratorKind::Nil), Uuid::nil());
    /// ```
    pub fn new(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::Nil => Self::nil(),
            GeneratorKind::Random => crate::uuid_random(),
            GeneratorKind::Ascending => crate::uuid_asc(),
        }
    }

    /// Parses an encoded UUID, inferring the format unless a hint is given.
    pub fn parse(input: &[u8], hint: Option<Format>) -> Result<Self, Error> {
        convert::parse(input, hint).map(Self::from)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the version nibble; the nil UUID reports 0.
    pub fn version(&self) -> u8 {
        convert::version(&self.bytes)
    }

    /// Checks structural validity of the canonical bytes, optionally
    /// requiring a version nibble.
    pub fn validate(&self, version: Option<u8>) -> bool {
        convert::validate(&self.bytes, Some(Format::Binary), version)
    }

    /// Renders the UUID in the requested style, caching the result.
    ///
    /// The first request per style computes and stores the string;
    /// subsequent identical requests return the cached copy. The cache is
    /// purely additive and never a source of truth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4asc::{Format, Uuid};
    ///
    /// let mut id: Uuid = "be0c8b753c0948e69653b149db655cad".parse()?;
    /// assert_eq!(id.format(Format::Enc32)?, "pq68nw9u154ed5ijn54wnraum5");
    /// assert_eq!(id.format(Format::Enc64)?, "jUm9RHk7GCOKIv37qqJQf.");
    /// # Ok::<(), uuid4asc::Error>(())
    /// ```
    pub fn format(&mut self, style: impl Into<Style>) -> Result<&str, Error> {
        let style = style.into();
        if !self.cache.contains_key(&style) {
            let rendered = convert::render(&self.bytes, style)?;
            self.cache.insert(style, rendered);
        }
        Ok(&self.cache[&style])
    }

    /// Renders the UUID in the configured default style.
    pub fn format_default(&mut self) -> Result<&str, Error> {
        self.format(crate::config::get().default_style)
    }
}

impl PartialEq for Uuid {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Uuid {}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uuid {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl hash::Hash for Uuid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&convert::hex_string(
            &self.bytes,
            Style::new(Format::HexGrouped),
        ))
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from any recognized string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src.as_bytes(), None)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self {
            bytes: src,
            cache: HashMap::new(),
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.bytes
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.bytes)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from(src.to_be_bytes())
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_string())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::parse(value, None).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: &[(&str, &[u8; 16])] = &[
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "be0c8b75-3c09-48e6-9653-b149db655cad",
                    &[
                        0xbe, 0x0c, 0x8b, 0x75, 0x3c, 0x09, 0x48, 0xe6, 0x96, 0x53, 0xb1, 0x49,
                        0xdb, 0x65, 0x5c, 0xad,
                    ],
                ),
            ];

            for &(text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.clone().readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
