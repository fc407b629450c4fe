//! 匹配索引
//!
//! 在线性文本投影上查找查询串的全部出现位置。
//! 每次命中后从 `命中位置 + 1` 个字符处继续扫描，因此相邻一个字符的重叠匹配都会被报告。
//! 偏移量与长度均以 `char` 计。

use std::borrow::Cow;

use memchr::memmem::Finder;

/// 一次重建得到的匹配集合：严格递增的起始偏移
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    offsets: Vec<usize>,
    match_len: usize,
}

impl MatchSet {
    pub fn new(offsets: Vec<usize>, match_len: usize) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        Self { offsets, match_len }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// 每个匹配覆盖的字符数（即查询串的字符数）
    pub fn match_len(&self) -> usize {
        self.match_len
    }

    pub fn ranges(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        self.offsets
            .iter()
            .map(move |&start| start..start + self.match_len)
    }
}

pub struct MatchIndex;

impl MatchIndex {
    pub fn build(text: &str, query: &str, case_sensitive: bool) -> MatchSet {
        if query.trim().is_empty() || text.is_empty() {
            return MatchSet::empty();
        }

        let match_len = query.chars().count();
        let (haystack, needle): (Cow<'_, str>, Cow<'_, str>) = if case_sensitive {
            (Cow::Borrowed(text), Cow::Borrowed(query))
        } else {
            (Cow::Owned(fold_case(text)), Cow::Owned(fold_case(query)))
        };

        let finder = Finder::new(needle.as_bytes());
        let bytes = haystack.as_bytes();
        let mut offsets = Vec::new();

        let mut scan_from = 0usize;
        // 已统计字符数的字节前缀，增量换算字节 → 字符偏移
        let mut counted_bytes = 0usize;
        let mut counted_chars = 0usize;

        while scan_from < bytes.len() {
            let Some(pos) = finder.find(&bytes[scan_from..]) else {
                break;
            };
            // UTF-8 needle 的首字节不是续字节，命中位置总在字符边界上
            let start = scan_from + pos;
            counted_chars += haystack[counted_bytes..start].chars().count();
            counted_bytes = start;
            offsets.push(counted_chars);

            let step = haystack[start..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            scan_from = start + step;
        }

        tracing::trace!(
            matches = offsets.len(),
            match_len,
            case_sensitive,
            "match index built"
        );

        MatchSet::new(offsets, match_len)
    }
}

/// 一对一的简单小写折叠，保证字符数不变
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/services/search/matcher.rs"]
mod tests;
