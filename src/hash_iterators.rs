//! Whitespace tokenization of text into per-word hashes, so free text can be
//! scored with the same token-sequence BLEU as integer ids.

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

pub(crate) trait CharHasher {
    fn hash(&self, c: char, hasher: &mut Fnv1aHash);
}

#[derive(Copy, Clone)]
pub(crate) struct CaseSensitiveCharHasher;

#[derive(Copy, Clone)]
pub(crate) struct CaseInsensitiveCharHasher;

/// Hashes every whitespace-separated word of `text`, in order.
pub(crate) fn word_hashes(text: &str, case_sensitive: bool) -> Vec<u64> {
    if case_sensitive {
        WordHashIterator::new(text, CaseSensitiveCharHasher).collect()
    } else {
        WordHashIterator::new(text, CaseInsensitiveCharHasher).collect()
    }
}

impl CharHasher for CaseSensitiveCharHasher {
    #[inline(always)]
    fn hash(&self, c: char, hasher: &mut Fnv1aHash) {
        if c.is_ascii() {
            hasher.write_u8(c as u8);
        } else {
            hasher.write_u32(c as u32);
        }
    }
}

impl CharHasher for CaseInsensitiveCharHasher {
    #[inline(always)]
    fn hash(&self, c: char, hasher: &mut Fnv1aHash) {
        if c.is_ascii() {
            hasher.write_u8(c.to_ascii_lowercase() as u8);
        } else {
            for lc in c.to_lowercase() {
                hasher.write_u32(lc as u32);
            }
        }
    }
}

pub(crate) struct WordHashIterator<'a, H: CharHasher> {
    chars: std::str::Chars<'a>,
    char_hasher: H,
}

impl<'a, H: CharHasher> WordHashIterator<'a, H> {
    pub(crate) fn new(src: &'a str, char_hasher: H) -> Self {
        WordHashIterator {
            chars: src.chars(),
            char_hasher,
        }
    }
}

impl<H: CharHasher> Iterator for WordHashIterator<'_, H> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.chars.by_ref().find(|c| !c.is_whitespace())?;

        let mut hasher = Fnv1aHash::new();
        self.char_hasher.hash(first, &mut hasher);

        while let Some(c) = self.chars.next()
            && !c.is_whitespace()
        {
            self.char_hasher.hash(c, &mut hasher);
        }

        Some(hasher.finish())
    }
}

pub(crate) struct Fnv1aHash {
    hash: u64,
}

impl Fnv1aHash {
    #[inline(always)]
    fn new() -> Fnv1aHash {
        Fnv1aHash {
            hash: FNV_OFFSET_BASIS,
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, b: u8) {
        self.hash ^= b as u64;
        self.hash = self.hash.wrapping_mul(FNV_PRIME);
    }

    // little-endian, one byte at a time
    #[inline(always)]
    fn write_u32(&mut self, value: u32) {
        for b in value.to_le_bytes() {
            self.write_u8(b);
        }
    }

    #[inline(always)]
    fn finish(&self) -> u64 {
        self.hash
    }
}
