/// A `{{key}}` placeholder found in a source string. `start..end` is the
/// byte range covering the delimiters; `key` is the trimmed inner name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub start: usize,
    pub end: usize,
    pub key: String,
}

/// Scan `input` for `{{key}}` spans, left to right. Empty names are skipped
/// and an unclosed `{{` ends the scan; neither is an error. A stray `{{`
/// never pairs across a later `{{` — the scan restarts at the inner one, so
/// `{{a}/{{b}}` still yields the `b` span.
pub fn parse_placeholders(input: &str) -> Vec<Placeholder> {
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(open) = input[from..].find("{{") {
        let start = from + open;
        let Some(close) = input[start + 2..].find("}}") else {
            break;
        };
        let inner = &input[start + 2..start + 2 + close];
        if let Some(reopen) = inner.find("{{") {
            from = start + 2 + reopen;
            continue;
        }
        let end = start + 2 + close + 2;
        let key = inner.trim();
        if !key.is_empty() {
            spans.push(Placeholder {
                start,
                end,
                key: key.to_string(),
            });
        }
        from = end;
    }

    spans
}
