use crate::domain::objects::normalize::{NormalizeOptions, normalize};

/// One input line: the original text (terminator stripped) and the
/// comparison key derived from it once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    key: String,
}

impl Line {
    pub fn new(raw: String, options: NormalizeOptions) -> Self {
        let key = normalize(&raw, options);
        Line { raw, key }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// An immutable, indexable list of lines from one source. Lines are
/// 0-indexed here; all externally reported positions are 1-indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    lines: Vec<Line>,
}

impl Sequence {
    /// Split loaded text on `\n` and build one `Line` per piece. A trailing
    /// newline does not produce a final empty line, so `"a\nb"` and
    /// `"a\nb\n"` yield the same sequence.
    pub fn from_text(text: &str, options: NormalizeOptions) -> Self {
        let mut pieces: Vec<&str> = text.split('\n').collect();
        if pieces.last() == Some(&"") {
            pieces.pop();
        }

        Sequence {
            lines: pieces
                .into_iter()
                .map(|raw| Line::new(raw.to_owned(), options))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::objects::line::Sequence;
    use crate::domain::objects::normalize::NormalizeOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn splits_text_into_raw_lines() {
        let sequence = Sequence::from_text("one\ntwo\nthree\n", NormalizeOptions::default());

        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.line(0).raw(), "one");
        assert_eq!(sequence.line(2).raw(), "three");
    }

    #[rstest]
    fn trailing_newline_does_not_add_a_line() {
        let options = NormalizeOptions::default();

        assert_eq!(
            Sequence::from_text("a\nb", options),
            Sequence::from_text("a\nb\n", options)
        );
    }

    #[rstest]
    fn empty_text_yields_empty_sequence() {
        let sequence = Sequence::from_text("", NormalizeOptions::default());

        assert!(sequence.is_empty());
    }

    #[rstest]
    fn lone_newline_is_one_empty_line() {
        let sequence = Sequence::from_text("\n", NormalizeOptions::default());

        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.line(0).raw(), "");
    }

    #[rstest]
    fn key_is_normalized_but_raw_is_preserved() {
        let sequence = Sequence::from_text("  Hello   World  \n", NormalizeOptions::new(true, true));

        assert_eq!(sequence.line(0).raw(), "  Hello   World  ");
        assert_eq!(sequence.line(0).key(), "hello world");
    }
}
