//! SIMD-style byte scanning utilities for wordbench.

/// Chunked ASCII byte searches.
pub mod ascii {

    /// Find the first occurrence of `needle` using an 8-byte chunked scan.
    pub fn find_byte_optimized(input: &[u8], needle: u8) -> Option<usize> {
        if input.len() < 8 {
            return input.iter().position(|&b| b == needle);
        }

        let mut chunks = input.chunks_exact(8);
        let mut chunk_idx = 0;

        for chunk in &mut chunks {
            // Word-at-a-time test: a zero byte in `word ^ pattern` marks a match.
            let word = u64::from_le_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
            ]);
            let x = word ^ (u64::from(needle) * 0x0101_0101_0101_0101);
            let found = x.wrapping_sub(0x0101_0101_0101_0101) & !x & 0x8080_8080_8080_8080;
            if found != 0 {
                return Some(chunk_idx * 8 + (found.trailing_zeros() / 8) as usize);
            }
            chunk_idx += 1;
        }

        // Check remainder
        let base_offset = chunk_idx * 8;
        chunks
            .remainder()
            .iter()
            .position(|&b| b == needle)
            .map(|pos| base_offset + pos)
    }

    /// Find the first `\n` in `input`.
    pub fn find_newline(input: &[u8]) -> Option<usize> {
        find_byte_optimized(input, b'\n')
    }
}
