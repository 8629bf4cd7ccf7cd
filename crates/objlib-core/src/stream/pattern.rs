//! Byte-pattern search used to locate object bodies by fingerprint.

/// Offsets of every occurrence of `pattern` in `buffer`, overlapping
/// matches included. An empty pattern matches nowhere.
///
/// ```
/// use objlib_core::stream::pattern::find_pattern;
///
/// let buffer = [1, 2, 3, 1, 2, 3, 4];
/// assert_eq!(find_pattern(&buffer, &[1, 2, 3]), vec![0, 3]);
/// ```
pub fn find_pattern(buffer: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    buffer
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(offset, _)| offset)
        .collect()
}

/// Offset of the first occurrence of `pattern` in `buffer`.
pub fn find_first_pattern(buffer: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    buffer.windows(pattern.len()).position(|window| window == pattern)
}

/// Encode a sequence of `u32` words as the little-endian byte pattern they
/// occupy on disk.
pub fn words_to_pattern(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pattern_basic() {
        let buffer = [1, 2, 3, 4, 5, 1, 2, 3];
        let matches = find_pattern(&buffer, &[1, 2, 3]);
        assert_eq!(matches, vec![0, 5]);
    }

    #[test]
    fn test_find_pattern_no_match() {
        let buffer = [1, 2, 3, 4, 5];
        assert!(find_pattern(&buffer, &[6, 7, 8]).is_empty());
    }

    #[test]
    fn test_find_pattern_empty_pattern() {
        let buffer = [1, 2, 3];
        assert!(find_pattern(&buffer, &[]).is_empty());
    }

    #[test]
    fn test_find_pattern_pattern_larger_than_buffer() {
        let buffer = [1, 2];
        assert!(find_pattern(&buffer, &[1, 2, 3, 4, 5]).is_empty());
    }

    #[test]
    fn test_find_first_pattern() {
        let buffer = [1, 2, 3, 1, 2, 3];
        assert_eq!(find_first_pattern(&buffer, &[1, 2, 3]), Some(0));
        assert_eq!(find_first_pattern(&buffer[1..], &[1, 2, 3]), Some(2));
    }

    #[test]
    fn test_find_first_pattern_not_found() {
        let buffer = [1, 2, 3, 4, 5];
        assert_eq!(find_first_pattern(&buffer, &[9, 9, 9]), None);
    }

    #[test]
    fn test_words_to_pattern() {
        assert_eq!(
            words_to_pattern(&[0x0C, 0x04]),
            vec![0x0C, 0, 0, 0, 0x04, 0, 0, 0]
        );
        assert!(words_to_pattern(&[]).is_empty());
    }
}
