//! Big-endian encoder for 32-bit words
//!
//! Same shape as the 64-bit encoder with a four-way branch table.

#[inline(always)]
pub(crate) fn skip(d: u32) -> usize {
    match d {
        d if (d >> 24) as u8 != 0 => 0,
        d if (d >> 16) as u8 != 0 => 1,
        d if (d >> 8) as u8 != 0 => 2,
        _ => 3,
    }
}

pub(crate) fn encode(words: &[u32], out: &mut [u8]) -> usize {
    let Some((&top, rest)) = words.split_last() else {
        return 0;
    };
    debug_assert_ne!(top, 0, "top word must be non-zero");

    let skip = skip(top);
    let (head, tail) = out.split_at_mut(4 - skip);
    head.copy_from_slice(&top.to_be_bytes()[skip..]);

    let tail = &mut tail[..rest.len() * 4];
    for (chunk, word) in tail.chunks_exact_mut(4).zip(rest.iter().rev()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    head.len() + tail.len()
}
