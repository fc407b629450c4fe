use super::*;

fn brute_force(text: &str, query: &str, case_sensitive: bool) -> Vec<usize> {
    let fold = |c: char| if case_sensitive { c } else { fold_char(c) };
    let text: Vec<char> = text.chars().map(fold).collect();
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() || query.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - query.len())
        .filter(|&i| text[i..i + query.len()] == query[..])
        .collect()
}

#[test]
fn overlapping_matches_are_reported() {
    let set = MatchIndex::build("ababab", "ab", true);
    assert_eq!(set.offsets(), &[0, 2, 4]);
    assert_eq!(set.match_len(), 2);

    let set = MatchIndex::build("aaaa", "aa", true);
    assert_eq!(set.offsets(), &[0, 1, 2]);
}

#[test]
fn case_insensitive_folds_both_sides() {
    let set = MatchIndex::build("AAA", "aa", false);
    assert_eq!(set.offsets(), &[0, 1]);

    let set = MatchIndex::build("AAA", "aa", true);
    assert!(set.is_empty());

    let set = MatchIndex::build("Hello hello HELLO", "hElLo", false);
    assert_eq!(set.offsets(), &[0, 6, 12]);
}

#[test]
fn blank_query_or_empty_text_yields_nothing() {
    assert!(MatchIndex::build("", "a", true).is_empty());
    assert!(MatchIndex::build("abc", "", true).is_empty());
    assert!(MatchIndex::build("a   b", "   ", false).is_empty());
    assert!(MatchIndex::build("abc", "\t\n", false).is_empty());
}

#[test]
fn query_longer_than_text_yields_nothing() {
    assert!(MatchIndex::build("ab", "abc", true).is_empty());
}

#[test]
fn offsets_are_char_based_for_multibyte_text() {
    let set = MatchIndex::build("你好世界你好", "你好", true);
    assert_eq!(set.offsets(), &[0, 4]);
    assert_eq!(set.match_len(), 2);

    let set = MatchIndex::build("é-É-é", "é", false);
    assert_eq!(set.offsets(), &[0, 2, 4]);
}

#[test]
fn matches_agree_with_brute_force() {
    let cases = [
        ("mississippi", "ssi"),
        ("mississippi", "i"),
        ("aaaaaa", "aaa"),
        ("abcabcabc", "cab"),
        ("xyz", "q"),
        ("日本日本日", "日本日"),
    ];
    for (text, query) in cases {
        let set = MatchIndex::build(text, query, true);
        assert_eq!(set.offsets(), brute_force(text, query, true).as_slice(), "{text} / {query}");
    }
}

#[test]
fn insensitive_matches_agree_with_brute_force() {
    let cases = [
        // Kelvin 符号（3 字节）折叠为 ASCII 'k'
        ("\u{212A}x kx KX", "kx"),
        ("ÄäÄ", "ää"),
        ("äÄ", "Ä"),
        ("Ωmega ωMEGA", "ΩMEGA"),
        ("中文ABC中文abc", "文a"),
        ("İstanbul istanbul", "i"),
        ("ÉCOLE école", "école"),
    ];
    for (text, query) in cases {
        let set = MatchIndex::build(text, query, false);
        assert_eq!(
            set.offsets(),
            brute_force(text, query, false).as_slice(),
            "{text} / {query}"
        );
    }

    let set = MatchIndex::build("\u{212A}x kx KX", "kx", false);
    assert_eq!(set.offsets(), &[0, 3, 6]);
}

#[test]
fn offsets_are_strictly_increasing_and_in_bounds() {
    let text = "the cat sat on the mat with the hat";
    let set = MatchIndex::build(text, "at", false);
    let len = text.chars().count();
    assert!(set.offsets().windows(2).all(|w| w[0] < w[1]));
    assert!(set.ranges().all(|r| r.end <= len));
    assert_eq!(set.len(), 4);
}

#[test]
fn rebuilding_is_idempotent() {
    let a = MatchIndex::build("Banana BANANA", "ana", false);
    let b = MatchIndex::build("Banana BANANA", "ana", false);
    assert_eq!(a, b);
}

#[test]
fn insensitive_count_is_at_least_sensitive_count() {
    let cases = [("Rust rust RUST", "rust"), ("AbAbab", "ab"), ("none", "x")];
    for (text, query) in cases {
        let sensitive = MatchIndex::build(text, query, true).len();
        let insensitive = MatchIndex::build(text, query, false).len();
        assert!(insensitive >= sensitive, "{text} / {query}");
    }
}

#[test]
fn match_set_accessors() {
    let set = MatchSet::new(vec![1, 5], 3);
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(1), Some(5));
    assert_eq!(set.get(2), None);
    assert_eq!(set.ranges().collect::<Vec<_>>(), vec![1..4, 5..8]);
    assert!(MatchSet::empty().is_empty());
}

#[test]
fn fold_char_keeps_char_count() {
    assert_eq!(fold_char('A'), 'a');
    assert_eq!(fold_char('Ä'), 'ä');
    assert_eq!(fold_char('好'), '好');
    // 'İ' 的完整小写会展开成两个字符，保持原样
    assert_eq!(fold_char('İ'), 'İ');
    let folded = fold_case("İSTANBUL");
    assert_eq!(folded.chars().count(), "İSTANBUL".chars().count());
}
