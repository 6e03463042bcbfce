//! Big-endian encoder for 64-bit words
//!
//! The first non-zero byte of the most significant word is found with a
//! single eight-way branch table. After that every byte is copied
//! without a zero test: the rest of the top word, then each lower word
//! whole.

/// Number of leading zero bytes in a non-zero word; 7 for the zero word.
#[inline(always)]
pub(crate) fn skip(d: u64) -> usize {
    match d {
        d if (d >> 56) as u8 != 0 => 0,
        d if (d >> 48) as u8 != 0 => 1,
        d if (d >> 40) as u8 != 0 => 2,
        d if (d >> 32) as u8 != 0 => 3,
        d if (d >> 24) as u8 != 0 => 4,
        d if (d >> 16) as u8 != 0 => 5,
        d if (d >> 8) as u8 != 0 => 6,
        _ => 7,
    }
}

pub(crate) fn encode(words: &[u64], out: &mut [u8]) -> usize {
    let Some((&top, rest)) = words.split_last() else {
        return 0;
    };
    debug_assert_ne!(top, 0, "top word must be non-zero");

    let skip = skip(top);
    let (head, tail) = out.split_at_mut(8 - skip);
    head.copy_from_slice(&top.to_be_bytes()[skip..]);

    let tail = &mut tail[..rest.len() * 8];
    for (chunk, word) in tail.chunks_exact_mut(8).zip(rest.iter().rev()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    head.len() + tail.len()
}
