use serde::Serialize;

/// One fitted row of text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Line belongs to the title paragraph.
    pub is_title: bool,
    /// Stretch inter-character spacing to fill the content width.
    pub center: bool,
    /// First line of a body paragraph (drawn with a two-character indent).
    pub paragraph_first: bool,
    /// Index of the owning paragraph.
    pub paragraph_index: usize,
    /// 1-based index of this line within its paragraph.
    pub line_index: usize,
    /// Character offset of `text` within the untrimmed paragraph.
    pub text_index: usize,
    /// Line text, without the indent.
    pub text: String,
    /// Last line of the title paragraph.
    pub title_last: bool,
}

/// Contiguous run of lines shown together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Lines in reading order.
    pub lines: Vec<Line>,
}

impl Page {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Page opens with a title line.
    pub fn is_title_page(&self) -> bool {
        self.lines.first().is_some_and(|line| line.is_title)
    }

    /// Line texts joined by newlines.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.text.len() + 1).sum());
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str(&line.text);
        }
        out
    }
}
