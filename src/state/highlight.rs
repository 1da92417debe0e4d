#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

impl HighlightSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Lowercased copy of `text` plus, for every byte of it, the byte range of
/// the source character that produced it.
struct Folded {
    text: String,
    origin: Vec<(usize, usize)>,
}

fn fold(text: &str) -> Folded {
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.resize(folded.len(), (start, end));
        }
    }
    Folded {
        text: folded,
        origin,
    }
}

/// Splits `text` around every case-insensitive occurrence of `query`.
///
/// Folding can change byte lengths (`İ` lowercases to two chars), so match
/// positions are mapped back onto whole characters of the original text.
pub fn highlight(text: &str, query: Option<&str>) -> Vec<HighlightSegment> {
    let Some(needle) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return vec![HighlightSegment::plain(text)];
    };

    let haystack = fold(text);
    let needle = needle.to_lowercase();

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (found_at, found) in haystack.text.match_indices(&needle) {
        let start = haystack.origin[found_at].0;
        let end = haystack.origin[found_at + found.len() - 1].1;
        // Two matches inside one expanded character.
        if start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(HighlightSegment::plain(&text[cursor..start]));
        }
        segments.push(HighlightSegment::matched(&text[start..end]));
        cursor = end;
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(HighlightSegment::plain(&text[cursor..]));
    }
    segments
}
