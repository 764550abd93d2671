/// One key/value pair of reply lines, with their zero-based positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPair<'a> {
    pub key_index: usize,
    pub value_index: usize,
    pub key: &'a str,
    pub value: &'a str,
}

/// A captured reply split into lines. The reply is expected to alternate
/// strictly between document keys and serialized value payloads.
#[derive(Debug, Clone)]
pub struct Reply {
    lines: Vec<String>,
}

impl Reply {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let lines = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.lines().map(str::to_string).collect()
        };
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Complete (key, value) pairs in order. A trailing key with no value
    /// line after it is dropped.
    pub fn pairs(&self) -> impl Iterator<Item = RecordPair<'_>> {
        self.lines.chunks_exact(2).enumerate().map(|(n, pair)| RecordPair {
            key_index: 2 * n,
            value_index: 2 * n + 1,
            key: pair[0].as_str(),
            value: pair[1].as_str(),
        })
    }
}

/// First `max_chars` characters, never splitting a UTF-8 character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reply_has_no_lines() {
        assert_eq!(Reply::parse("").line_count(), 0);
        assert_eq!(Reply::parse("   \n  \n").line_count(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let reply = Reply::parse("\n  key1\nvalue1\n");
        assert_eq!(reply.line_count(), 2);
        assert_eq!(reply.lines()[0], "key1");
    }

    #[test]
    fn test_pairs_alternate_key_value() {
        let reply = Reply::parse("key1\nvalue1\nkey2\nvalue2");
        let pairs: Vec<_> = reply.pairs().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].key, "key1");
        assert_eq!(pairs[0].value, "value1");
        assert_eq!(pairs[0].value_index, 1);
        assert_eq!(pairs[1].key, "key2");
        assert_eq!(pairs[1].value, "value2");
        assert_eq!(pairs[1].value_index, 3);
    }

    #[test]
    fn test_trailing_unpaired_key_is_dropped() {
        let reply = Reply::parse("key1\nvalue1\nkey2");
        assert_eq!(reply.pairs().count(), 1);
    }

    #[test]
    fn test_single_line_yields_no_pairs() {
        assert_eq!(Reply::parse("only-one-line").pairs().count(), 0);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "ａｂｃｄ";
        assert_eq!(truncate_chars(text, 2), "ａｂ");
    }
}
