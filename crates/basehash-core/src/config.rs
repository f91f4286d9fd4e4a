//! Codec configuration.

use crate::base58::BASE58_DECODE_MAXLEN;
use crate::error::Base58Error;

/// Limits applied by a [`crate::Base58Codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58Config {
    /// Largest encode working size and largest decode width, in bytes.
    ///
    /// Never above [`BASE58_DECODE_MAXLEN`]; the working buffers are fixed
    /// at compile time and this only tightens them.
    pub max_len: usize,
}

impl Base58Config {
    /// Check the limit against the compile-time buffers.
    pub fn validate(&self) -> Result<(), Base58Error> {
        if self.max_len > BASE58_DECODE_MAXLEN {
            return Err(Base58Error::CapacityExceeded {
                limit: BASE58_DECODE_MAXLEN,
            });
        }
        Ok(())
    }
}

impl Default for Base58Config {
    fn default() -> Self {
        Self {
            max_len: BASE58_DECODE_MAXLEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_full_buffer() {
        let config = Base58Config::default();
        assert_eq!(config.max_len, BASE58_DECODE_MAXLEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limit_above_buffer_rejected() {
        let config = Base58Config {
            max_len: BASE58_DECODE_MAXLEN + 1,
        };
        assert_eq!(
            config.validate(),
            Err(Base58Error::CapacityExceeded {
                limit: BASE58_DECODE_MAXLEN
            })
        );
    }
}
