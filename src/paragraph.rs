//! Paragraph splitting and title reconciliation.

/// One trimmed paragraph of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    /// Trimmed paragraph text (the verbatim title for a title paragraph).
    pub text: String,
    /// Character offset of `text` inside the raw, untrimmed segment.
    pub raw_offset: usize,
}

impl Paragraph {
    fn verbatim(text: &str) -> Self {
        Self {
            text: text.to_string(),
            raw_offset: 0,
        }
    }

    fn trimmed(raw: &str) -> Self {
        let text = raw.trim();
        let leading = raw.len() - raw.trim_start().len();
        Self {
            text: text.to_string(),
            raw_offset: raw[..leading].chars().count(),
        }
    }
}

/// Split `content` into paragraphs on runs of any character in `delimiter`.
///
/// When `title` is given the result always starts with it: a first segment
/// equal to the title is kept verbatim, otherwise the title is prepended.
/// A second paragraph repeating the title is dropped. An empty title counts
/// as no title.
pub fn split_paragraphs(content: &str, title: Option<&str>, delimiter: &str) -> Vec<Paragraph> {
    let title = title.filter(|t| !t.is_empty());
    let mut has_title = false;
    let mut paragraphs = Vec::with_capacity(16);

    let segments = content.split(|ch: char| delimiter.contains(ch));
    for (idx, raw) in segments.enumerate() {
        if idx == 0 && title == Some(raw) {
            has_title = true;
            paragraphs.push(Paragraph::verbatim(raw));
            continue;
        }
        let paragraph = Paragraph::trimmed(raw);
        if !paragraph.text.is_empty() {
            paragraphs.push(paragraph);
        }
    }

    if let Some(title) = title {
        if !has_title {
            paragraphs.insert(0, Paragraph::verbatim(title));
        }
        if paragraphs
            .get(1)
            .is_some_and(|p| p.text.trim() == title.trim())
        {
            paragraphs.remove(1);
        }
    }

    paragraphs
}
