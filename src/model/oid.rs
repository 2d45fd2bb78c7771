use std::fmt;
use thiserror::Error;

/// Address of a data object inside the secure element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid(u16);

impl Oid {
    /// Upper bound (exclusive) for usable object addresses and object sizes.
    pub const LIMIT: u16 = u16::MAX;

    pub fn new(value: u16) -> Result<Self, OidError> {
        if value == 0 {
            return Err(OidError::Zero);
        }
        if value >= Self::LIMIT {
            return Err(OidError::OutOfRange {
                value: u64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Parse a slot address string the way the token configuration writes them
    /// ("0xE0E0", "E0E8", "  0xf1d0 trailing").
    pub fn parse(address: &str) -> Result<Self, OidError> {
        let value = parse_hex_prefix(address.as_bytes());
        if value == 0 {
            return Err(OidError::Unparsable {
                address: address.to_string(),
            });
        }
        if value >= u64::from(Self::LIMIT) {
            return Err(OidError::OutOfRange { value });
        }
        // bounded by the check above
        Self::new(value as u16)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl TryFrom<u16> for Oid {
    type Error = OidError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Leading hexadecimal digits of `input`, with strtol(…, 16) conventions:
/// leading whitespace and an optional sign are skipped, a `0x` prefix is
/// accepted, parsing stops at the first non-hex byte and saturates on overflow.
/// Negative values collapse to zero.
fn parse_hex_prefix(input: &[u8]) -> u64 {
    let mut rest = input;
    while let [first, tail @ ..] = rest {
        if first.is_ascii_whitespace() {
            rest = tail;
        } else {
            break;
        }
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    if let [b'0', b'x' | b'X', next, ..] = rest {
        if next.is_ascii_hexdigit() {
            rest = &rest[2..];
        }
    }

    let mut value: u64 = 0;
    for byte in rest.iter().take_while(|b| b.is_ascii_hexdigit()) {
        // is_ascii_hexdigit guarantees a digit
        let digit = (*byte as char).to_digit(16).unwrap_or(0);
        value = value.saturating_mul(16).saturating_add(u64::from(digit));
    }

    if negative {
        0
    } else {
        value
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OidError {
    #[error("slot address {address:?} does not contain a hexadecimal object id")]
    Unparsable { address: String },

    #[error("object id 0 is reserved")]
    Zero,

    #[error("object id {value:#X} is outside the addressable range")]
    OutOfRange { value: u64 },
}
