//! Stateless conversion between the canonical 16-byte form and every
//! textual representation.

use crate::codec::{self, ENC32_ALPHABET, ENC64_ALPHABET};
use crate::Error;
use regex::Regex;
use std::str;
use std::sync::OnceLock;

/// The enumerated representation formats.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Format {
    /// The canonical 16-byte big-endian form.
    Binary,
    /// 32 hex digits without separators.
    HexShort,
    /// 8-4-4-4-12 hex digits separated by dashes.
    HexGrouped,
    /// The grouped form enclosed in braces.
    HexFull,
    /// The grouped form prefixed with `urn:uuid:`.
    Urn,
    /// 26 symbols over the 32-character alphabet.
    Enc32,
    /// 22 symbols over the 64-character alphabet.
    Enc64,
}

impl Format {
    /// Every format, in detection order.
    pub const ALL: [Format; 7] = [
        Format::Binary,
        Format::HexShort,
        Format::HexGrouped,
        Format::HexFull,
        Format::Urn,
        Format::Enc32,
        Format::Enc64,
    ];
}

/// A format descriptor: the format tag plus the uppercase modifier.
///
/// The modifier affects hex digits only; the `urn:uuid:` prefix, braces,
/// and the base-N alphabets are never uppercased.
///
/// # Examples
///
/// ```rust
/// use uuid4asc::{Format, Style};
///
/// let style = Style::new(Format::HexGrouped).upper();
/// assert!(style.uppercase);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Style {
    /// The representation format.
    pub format: Format,
    /// Render hex digits in uppercase.
    pub uppercase: bool,
}

impl Style {
    /// Creates a lowercase style for the given format.
    pub const fn new(format: Format) -> Self {
        Self {
            format,
            uppercase: false,
        }
    }

    /// Returns the same style with the uppercase modifier set.
    pub const fn upper(self) -> Self {
        Self {
            format: self.format,
            uppercase: true,
        }
    }
}

impl From<Format> for Style {
    fn from(format: Format) -> Self {
        Self::new(format)
    }
}

impl Default for Style {
    /// The hex-short style, the crate-wide initial default.
    fn default() -> Self {
        Self::new(Format::HexShort)
    }
}

/// Renders the canonical bytes in the requested textual style.
///
/// [`Format::Binary`] has no textual rendering and yields
/// [`Error::UnsupportedFormat`]; the binary form is the byte buffer itself.
///
/// # Examples
///
/// ```rust
/// use uuid4asc::{convert, Format};
///
/// let bytes = convert::parse(b"be0c8b753c0948e69653b149db655cad", None)?;
/// assert_eq!(
///     convert::render(&bytes, Format::Urn)?,
///     "urn:uuid:be0c8b75-3c09-48e6-9653-b149db655cad"
/// );
/// # Ok::<(), uuid4asc::Error>(())
/// ```
pub fn render(bytes: &[u8; 16], style: impl Into<Style>) -> Result<String, Error> {
    let style = style.into();
    match style.format {
        Format::Binary => Err(Error::UnsupportedFormat {
            format: Format::Binary,
        }),
        Format::HexShort | Format::HexGrouped | Format::HexFull | Format::Urn => {
            Ok(hex_string(bytes, style))
        }
        Format::Enc32 => Ok(codec::base_x_encode(bytes, ENC32_ALPHABET)),
        Format::Enc64 => Ok(codec::base_x_encode(bytes, ENC64_ALPHABET)),
    }
}

/// Renders one of the hex family formats. Infallible; callers guarantee
/// `style.format` is a hex variant.
pub(crate) fn hex_string(bytes: &[u8; 16], style: Style) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut result = String::with_capacity(36);
    for (i, e) in bytes.iter().enumerate() {
        result.push(DIGITS[usize::from(e >> 4)] as char);
        result.push(DIGITS[usize::from(e & 15)] as char);
        if style.format != Format::HexShort && (i == 3 || i == 5 || i == 7 || i == 9) {
            result.push('-');
        }
    }
    if style.uppercase {
        result.make_ascii_uppercase();
    }
    match style.format {
        Format::HexFull => format!("{{{result}}}"),
        Format::Urn => format!("urn:uuid:{result}"),
        _ => result,
    }
}

/// Infers the format of an encoded UUID from its length and prefix.
///
/// Detection follows the documented shapes: 16 bytes is binary, the
/// `urn:uuid:` prefix is a URN, and the remaining text formats are keyed by
/// length (22, 26, 32, 36, 38).
pub fn detect(input: &[u8]) -> Option<Format> {
    if input.len() == 16 {
        return Some(Format::Binary);
    }
    let text = str::from_utf8(input).ok()?;
    if text.starts_with("urn:uuid:") {
        return Some(Format::Urn);
    }
    match text.len() {
        22 => Some(Format::Enc64),
        26 => Some(Format::Enc32),
        32 => Some(Format::HexShort),
        36 => Some(Format::HexGrouped),
        38 => Some(Format::HexFull),
        _ => None,
    }
}

/// Parses an encoded UUID into the canonical 16 bytes.
///
/// Without a hint the format is inferred with [`detect`]; an input matching
/// no format fails with [`Error::UnrecognizedFormat`]. Hex variants are
/// parsed liberally: the `urn:uuid:` prefix is stripped, every
/// non-alphanumeric character is discarded, and the rest is hex-decoded, so
/// separator placement is not enforced. Any input that does not decode to
/// exactly 16 bytes fails with [`Error::MalformedInput`].
pub fn parse(input: &[u8], hint: Option<Format>) -> Result<[u8; 16], Error> {
    let format = match hint {
        Some(format) => format,
        None => detect(input).ok_or(Error::UnrecognizedFormat)?,
    };
    let malformed = Error::MalformedInput { format };
    match format {
        Format::Binary => <[u8; 16]>::try_from(input).map_err(|_| malformed),
        Format::HexShort | Format::HexGrouped | Format::HexFull | Format::Urn => {
            let text = str::from_utf8(input).map_err(|_| malformed)?;
            let text = text.strip_prefix("urn:uuid:").unwrap_or(text);
            let digits: String = text.chars().filter(char::is_ascii_alphanumeric).collect();
            hex_to_bytes(&digits).ok_or(malformed)
        }
        Format::Enc32 | Format::Enc64 => {
            let text = str::from_utf8(input).map_err(|_| malformed)?;
            let alphabet: &[u8] = if format == Format::Enc32 {
                ENC32_ALPHABET
            } else {
                ENC64_ALPHABET
            };
            let decoded = codec::base_x_decode(text, alphabet)?;
            <[u8; 16]>::try_from(decoded.as_slice()).map_err(|_| malformed)
        }
    }
}

/// Returns the version nibble: the high four bits of byte 6. The nil UUID
/// reports version 0.
pub fn version(bytes: &[u8; 16]) -> u8 {
    (bytes[6] & 0xf0) >> 4
}

/// Checks whether the input is a structurally valid UUID representation.
///
/// With a format, the input is matched against that format's shape; without
/// one, every format is tried. When `version` is given, the decoded value's
/// version nibble must match as well.
pub fn validate(input: &[u8], format: Option<Format>, version: Option<u8>) -> bool {
    let shape_ok = match format {
        None => Format::ALL
            .iter()
            .any(|&f| validate(input, Some(f), None)),
        Some(Format::Binary) => input.len() == 16,
        Some(f) => match str::from_utf8(input) {
            Ok(text) => shape_regex(f).is_match(text),
            Err(_) => false,
        },
    };
    if !shape_ok {
        return false;
    }
    match version {
        None => true,
        Some(v) => parse(input, format)
            .map(|bytes| self::version(&bytes) == v)
            .unwrap_or(false),
    }
}

fn shape_regex(format: Format) -> &'static Regex {
    static HEX_SHORT: OnceLock<Regex> = OnceLock::new();
    static HEX_GROUPED: OnceLock<Regex> = OnceLock::new();
    static HEX_FULL: OnceLock<Regex> = OnceLock::new();
    static URN: OnceLock<Regex> = OnceLock::new();
    static ENC32: OnceLock<Regex> = OnceLock::new();
    static ENC64: OnceLock<Regex> = OnceLock::new();

    let (cell, pattern) = match format {
        Format::HexShort => (&HEX_SHORT, r"^[0-9a-fA-F]{32}$"),
        Format::HexGrouped => (
            &HEX_GROUPED,
            r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
        ),
        Format::HexFull => (
            &HEX_FULL,
            r"^\{[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\}$",
        ),
        Format::Urn => (
            &URN,
            r"^urn:uuid:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
        ),
        Format::Enc32 => (&ENC32, r"^[0-9a-km-np-uw-y]{26}$"),
        Format::Enc64 => (&ENC64, r"^[\-.0-9A-Za-z]{22}$"),
        Format::Binary => unreachable!("binary has no textual shape"),
    };
    cell.get_or_init(|| Regex::new(pattern).expect("hard-coded pattern"))
}

fn hex_to_bytes(src: &str) -> Option<[u8; 16]> {
    let mut dst = [0u8; 16];
    let mut iter = src.chars();
    for e in dst.iter_mut() {
        let hi = iter.next()?.to_digit(16)? as u8;
        let lo = iter.next()?.to_digit(16)? as u8;
        *e = (hi << 4) | lo;
    }
    iter.next().is_none().then_some(dst)
}
