//! Base58 encoding and decoding over fixed-size working buffers.
//!
//! Uses the Bitcoin alphabet. Every leading zero byte maps to exactly one
//! leading `'1'` and back. The numeric part is converted through a digit
//! buffer (encode) or a 32-bit word accumulator (decode), both sized at
//! compile time by [`BASE58_DECODE_MAXLEN`]; anything larger is rejected
//! rather than grown.

use crate::config::Base58Config;
use crate::error::Base58Error;
use crate::words::{unpack_be_words, words_for};

/// Size in bytes of the fixed working buffers.
///
/// Bounds the encode digit buffer and the decode width. Must stay a
/// multiple of four.
pub const BASE58_DECODE_MAXLEN: usize = 128;

/// Bitcoin's Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// ASCII byte to digit value, -1 for bytes outside the alphabet.
const DIGITS_MAP: [i8; 128] = {
    let mut map = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    map
};

/// Upper bound on log(256)/log(58) as a ratio of integers.
const LOG_RATIO_NUM: usize = 138;
const LOG_RATIO_DEN: usize = 100;

/// Text up to, not including, the first NUL terminator.
///
/// Returns the whole slice when it holds no NUL.
pub fn terminated(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| b == 0) {
        Some(end) => &text[..end],
        None => text,
    }
}

fn digit_value(byte: u8) -> Option<u32> {
    if byte & 0x80 != 0 {
        return None;
    }
    u32::try_from(DIGITS_MAP[usize::from(byte)]).ok()
}

/// Where the significant base-58 digits sit in the working buffer.
struct Digits {
    zeros: usize,
    start: usize,
    end: usize,
}

impl Digits {
    /// Characters of text, terminator excluded.
    fn text_len(&self) -> usize {
        self.zeros + (self.end - self.start)
    }
}

/// Base58 codec bound to a [`Base58Config`].
///
/// Stateless: every call is independent and the codec is `Copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Codec {
    config: Base58Config,
}

impl Base58Codec {
    /// A codec using the full compile-time buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A codec with a custom limit.
    pub fn with_config(config: Base58Config) -> Result<Self, Base58Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Base58Config {
        &self.config
    }

    /// Convert the non-zero tail of `data` into base-58 digits in `buf`.
    fn convert(
        &self,
        data: &[u8],
        buf: &mut [u8; BASE58_DECODE_MAXLEN],
    ) -> Result<Digits, Base58Error> {
        let zeros = data.iter().take_while(|&&b| b == 0).count();
        let size = (data.len() - zeros).saturating_mul(LOG_RATIO_NUM) / LOG_RATIO_DEN + 1;
        if size > self.config.max_len {
            return Err(Base58Error::CapacityExceeded {
                limit: self.config.max_len,
            });
        }

        let buf = &mut buf[..size];
        // Lowest index touched so far; everything below it is still zero.
        let mut high = size as isize - 1;
        for &byte in &data[zeros..] {
            let mut carry = u32::from(byte);
            let mut j = size as isize - 1;
            while j > high || carry != 0 {
                let slot = usize::try_from(j).map_err(|_| Base58Error::Underflow)?;
                carry += 256 * u32::from(buf[slot]);
                buf[slot] = (carry % 58) as u8;
                carry /= 58;
                j -= 1;
            }
            high = j;
        }

        let start = buf.iter().position(|&d| d != 0).unwrap_or(size);
        Ok(Digits {
            zeros,
            start,
            end: size,
        })
    }

    /// Exact capacity `encode_into` needs for `data`, terminator included.
    pub fn encoded_len(&self, data: &[u8]) -> Result<usize, Base58Error> {
        let mut buf = [0u8; BASE58_DECODE_MAXLEN];
        Ok(self.convert(data, &mut buf)?.text_len() + 1)
    }

    /// Encode `data` into `out` followed by a NUL terminator.
    ///
    /// `out.len()` is the capacity. Returns the number of bytes written,
    /// terminator included. When the capacity is not enough, nothing is
    /// written and [`Base58Error::BufferTooSmall`] carries the exact
    /// capacity to retry with.
    pub fn encode_into(&self, data: &[u8], out: &mut [u8]) -> Result<usize, Base58Error> {
        let mut buf = [0u8; BASE58_DECODE_MAXLEN];
        let digits = self.convert(data, &mut buf)?;
        let needed = digits.text_len();
        if out.len() <= needed {
            return Err(Base58Error::BufferTooSmall {
                required: needed + 1,
            });
        }

        let (ones, rest) = out.split_at_mut(digits.zeros);
        ones.fill(b'1');
        for (slot, &digit) in rest.iter_mut().zip(&buf[digits.start..digits.end]) {
            *slot = ALPHABET[usize::from(digit)];
        }
        out[needed] = 0;
        Ok(needed + 1)
    }

    /// Encode `data` to an owned string.
    ///
    /// Only the significant bytes count against the limit; leading zero
    /// bytes become `'1'` characters without touching the working buffer.
    /// Decoding counts those `'1'`s against the width, so text with more
    /// than [`BASE58_DECODE_MAXLEN`] leading zeros plus significant bytes
    /// will not decode.
    pub fn encode(&self, data: &[u8]) -> Result<String, Base58Error> {
        let mut buf = [0u8; BASE58_DECODE_MAXLEN];
        let digits = self.convert(data, &mut buf)?;

        let mut text = String::with_capacity(digits.text_len());
        text.extend(std::iter::repeat('1').take(digits.zeros));
        text.extend(
            buf[digits.start..digits.end]
                .iter()
                .map(|&d| char::from(ALPHABET[usize::from(d)])),
        );
        Ok(text)
    }

    /// Decode `text` into `out`, using `out.len()` as the decode width.
    ///
    /// Returns the canonical length: one byte per leading `'1'` plus the
    /// significant bytes of the numeric part. Those bytes are moved to
    /// `out[..len]`; the rest of `out` is left unspecified.
    pub fn decode_into(&self, text: &[u8], out: &mut [u8]) -> Result<usize, Base58Error> {
        let width = out.len();
        if width > self.config.max_len {
            return Err(Base58Error::CapacityExceeded {
                limit: self.config.max_len,
            });
        }

        let mut acc = [0u32; BASE58_DECODE_MAXLEN / 4];
        let words = &mut acc[..words_for(width)];
        let partial = width % 4;
        // Bits of the top word that lie beyond the requested width.
        let overflow_mask = if partial > 0 {
            u32::MAX << (partial * 8)
        } else {
            0
        };

        let zeros = text.iter().take_while(|&&b| b == b'1').count();
        for (position, &byte) in text.iter().enumerate().skip(zeros) {
            let mut carry =
                digit_value(byte).ok_or(Base58Error::InvalidCharacter { byte, position })?;
            for word in words.iter_mut().rev() {
                let t = u64::from(*word) * 58 + u64::from(carry);
                carry = (t >> 32) as u32;
                *word = t as u32;
            }
            if carry != 0 {
                return Err(Base58Error::CapacityExceeded { limit: width });
            }
            if words.first().is_some_and(|&top| top & overflow_mask != 0) {
                return Err(Base58Error::CapacityExceeded { limit: width });
            }
        }

        unpack_be_words(words, out);

        let significant = width - out.iter().take_while(|&&b| b == 0).count();
        let len = zeros + significant;
        if len > width {
            return Err(Base58Error::CapacityExceeded { limit: width });
        }
        tracing::trace!(width, zeros, len, "base58 decode normalised");

        out.copy_within(width - len.., 0);
        Ok(len)
    }

    /// Decode `text` to an owned byte vector, using the configured limit
    /// as the decode width.
    ///
    /// Leading `'1'`s count against the width, so some text [`Self::encode`]
    /// accepts is rejected here with [`Base58Error::CapacityExceeded`].
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Base58Error> {
        let mut buf = [0u8; BASE58_DECODE_MAXLEN];
        let len = self.decode_into(text.as_bytes(), &mut buf[..self.config.max_len])?;
        Ok(buf[..len].to_vec())
    }
}
