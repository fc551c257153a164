use std::collections::HashMap;

/// Key for caching individual rasterized glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GlyphCacheKey {
    pub font_id: u32,
    pub font_size_bits: u32,
    pub glyph_id: u32,
}

/// Cached glyph coverage, positioned relative to the glyph origin on the baseline
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GlyphEntry {
    /// Top-left pixel of the bitmap relative to the pen origin.
    pub left: i32,
    pub top: i32,
    pub width: u32,
    /// Row-major coverage in `0.0..=1.0`.
    pub coverage: Vec<f32>,
}

impl GlyphEntry {
    /// Covered pixels as `(x, y, coverage)` relative to the pen origin.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        let width = self.width.max(1) as usize;
        self.coverage
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0.0)
            .map(move |(i, c)| {
                let x = self.left + (i % width) as i32;
                let y = self.top + (i / width) as i32;
                (x, y, c.min(1.0))
            })
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.coverage.iter().all(|c| *c <= 0.0)
    }
}

/// Rasterized glyphs, reused by every text item that shares font and size
pub(crate) struct GlyphCache {
    cache: HashMap<GlyphCacheKey, GlyphEntry>,
}

impl GlyphCache {
    pub(crate) fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &GlyphCacheKey) -> Option<&GlyphEntry> {
        self.cache.get(key)
    }

    pub(crate) fn insert(&mut self, key: GlyphCacheKey, entry: GlyphEntry) {
        self.cache.insert(key, entry);
    }

    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}
