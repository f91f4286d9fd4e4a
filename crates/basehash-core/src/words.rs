//! Big-endian word arrays to byte buffers.

/// Number of 32-bit words needed to hold `len` bytes.
pub const fn words_for(len: usize) -> usize {
    (len + 3) / 4
}

/// Unpack big-endian `u32` words into `out`, most-significant word first.
///
/// When `out.len()` is not a multiple of four the first word is short: only
/// its low `out.len() % 4` bytes are emitted. `words` is expected to hold
/// exactly [`words_for`]`(out.len())` entries; extra words are ignored and
/// missing ones leave the tail of `out` untouched.
pub fn unpack_be_words(words: &[u32], out: &mut [u8]) {
    let partial = out.len() % 4;
    let (head, body) = out.split_at_mut(partial);

    let mut words = words.iter();
    if partial > 0 {
        if let Some(first) = words.next() {
            head.copy_from_slice(&first.to_be_bytes()[4 - partial..]);
        }
    }

    for (chunk, word) in body.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(4), 1);
        assert_eq!(words_for(5), 2);
        assert_eq!(words_for(128), 32);
    }

    #[test]
    fn test_full_words() {
        let mut out = [0u8; 8];
        unpack_be_words(&[0x0102_0304, 0x0506_0708], &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_short_first_word() {
        let mut out = [0u8; 6];
        unpack_be_words(&[0xdead_0a0b, 0x0c0d_0e0f], &mut out);
        // Only the low two bytes of the first word survive.
        assert_eq!(out, [0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f]);
    }

    #[test]
    fn test_single_partial_word() {
        let mut out = [0u8; 3];
        unpack_be_words(&[0x00ab_cdef], &mut out);
        assert_eq!(out, [0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_empty() {
        let mut out = [0u8; 0];
        unpack_be_words(&[], &mut out);
    }
}
