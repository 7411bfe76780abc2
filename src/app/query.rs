//! Lenient query-string access for the route handlers.
//!
//! Nothing here can fail: a missing parameter reads as absent, and a
//! malformed integer reads as `0`. Integers follow C `atol`: leading
//! whitespace, an optional sign, then as many digits as are present,
//! saturating at the `i32` bounds. Keys and values are percent-decoded
//! on the fly, so integer parsing never goes through a bounded buffer.

use core::iter::Peekable;

use heapless::String;

/// Longest decoded value [`Query::get`] keeps; the rest is truncated.
pub const MAX_VALUE_LEN: usize = 32;

/// A borrowed view of the part of a URI after `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<'a> {
    raw: &'a str,
}

impl<'a> Query<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw: raw.strip_prefix('?').unwrap_or(raw),
        }
    }

    /// Split a request URI into its path and query.
    pub fn split_uri(uri: &'a str) -> (&'a str, Self) {
        match uri.split_once('?') {
            Some((path, query)) => (path, Self::new(query)),
            None => (uri, Self::default()),
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
    }

    /// Raw (still encoded) value of the first key that decodes to `name`.
    fn raw_value(&self, name: &str) -> Option<&'a str> {
        self.pairs()
            .find(|(key, _)| Decoded::new(key).eq(name.bytes()))
            .map(|(_, value)| value)
    }

    /// `true` if `name` appears as a key, with or without a value.
    pub fn has(&self, name: &str) -> bool {
        self.raw_value(name).is_some()
    }

    /// Percent-decoded value of the first `name`, if present.
    ///
    /// Bytes outside ASCII come back as U+FFFD.
    pub fn get(&self, name: &str) -> Option<String<MAX_VALUE_LEN>> {
        self.raw_value(name).map(|value| {
            let mut out = String::new();
            for b in Decoded::new(value) {
                let c = if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER };
                if out.push(c).is_err() {
                    break;
                }
            }
            out
        })
    }

    /// Integer value of `name`; absent or malformed reads as `0`.
    pub fn int(&self, name: &str) -> i32 {
        self.raw_value(name)
            .map_or(0, |value| parse_decimal(Decoded::new(value).peekable()))
    }
}

/// C `atol`-style parse: never fails, stops at the first non-digit.
pub fn parse_int_lenient(s: &str) -> i32 {
    parse_decimal(s.bytes().peekable())
}

fn parse_decimal<I: Iterator<Item = u8>>(mut bytes: Peekable<I>) -> i32 {
    while bytes.next_if(|&b| is_c_space(b)).is_some() {}
    let negative = match bytes.next_if(|&b| b == b'-' || b == b'+') {
        Some(sign) => sign == b'-',
        None => false,
    };

    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    for b in bytes.take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(limit);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// `isspace` in the C locale.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t'..=b'\r')
}

/// Percent-decoding byte iterator: `+` is a space, `%XX` a byte, and a
/// malformed escape stays literal.
struct Decoded<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decoded<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            bytes: raw.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for Decoded<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let b = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(match b {
            b'+' => b' ',
            b'%' => {
                let escaped = match (self.bytes.get(self.pos), self.bytes.get(self.pos + 1)) {
                    (Some(&hi), Some(&lo)) => hex_pair(hi, lo),
                    _ => None,
                };
                match escaped {
                    Some(decoded) => {
                        self.pos += 2;
                        decoded
                    }
                    None => b'%',
                }
            }
            b => b,
        })
    }
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
