/// Content hash of a source text, used as a memoization key.
///
/// The key alone is not proof of identity: callers keep the original text
/// next to the cached value and compare it on lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey {
    crc: u32,
    len: usize,
}

impl ContentKey {
    pub fn of(text: &str) -> Self {
        Self {
            crc: crc32fast::hash(text.as_bytes()),
            len: text.len(),
        }
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::ContentKey;

    #[test]
    fn same_text_same_key() {
        assert_eq!(ContentKey::of("set x = 1"), ContentKey::of("set x = 1"));
    }

    #[test]
    fn different_text_different_key() {
        assert_ne!(ContentKey::of("set x = 1"), ContentKey::of("set x = 2"));
        assert!(ContentKey::of("").is_empty());
    }
}
