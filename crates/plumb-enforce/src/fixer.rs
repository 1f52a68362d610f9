//! Transactional token edits.
//!
//! A [`Changeset`] bundles the edits for one violation. The [`Fixer`] owns the
//! current text of every token for one pass and applies each changeset
//! all-or-nothing: a changeset that is empty, points past the stream, or
//! touches a token an earlier changeset already modified is rejected and
//! leaves the text untouched.

use plumb_core::token::TokenStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Replace { index: usize, text: String },
    Append { index: usize, text: String },
    Prepend { index: usize, text: String },
}

impl Edit {
    pub fn index(&self) -> usize {
        match self {
            Edit::Replace { index, .. } | Edit::Append { index, .. } | Edit::Prepend { index, .. } => {
                *index
            }
        }
    }
}

/// Ordered edits for a single fix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    edits: Vec<Edit>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, index: usize, text: impl Into<String>) -> &mut Self {
        self.edits.push(Edit::Replace {
            index,
            text: text.into(),
        });
        self
    }

    /// Delete the token's text.
    pub fn clear(&mut self, index: usize) -> &mut Self {
        self.replace(index, "")
    }

    pub fn add_content(&mut self, index: usize, text: impl Into<String>) -> &mut Self {
        self.edits.push(Edit::Append {
            index,
            text: text.into(),
        });
        self
    }

    pub fn add_content_before(&mut self, index: usize, text: impl Into<String>) -> &mut Self {
        self.edits.push(Edit::Prepend {
            index,
            text: text.into(),
        });
        self
    }

    pub fn add_newline(&mut self, index: usize, eol: &str) -> &mut Self {
        self.add_content(index, eol)
    }

    pub fn add_newline_before(&mut self, index: usize, eol: &str) -> &mut Self {
        self.add_content_before(index, eol)
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Short human description used as a violation's fix hint.
    pub fn summary(&self) -> String {
        match self.edits.as_slice() {
            [Edit::Replace { text, .. }] if !text.trim().is_empty() => {
                format!("replace with \"{}\"", text)
            }
            [Edit::Replace { .. }] => "adjust whitespace".to_string(),
            [Edit::Append { text, .. }] | [Edit::Prepend { text, .. }] if text.trim().is_empty() => {
                "insert line break".to_string()
            }
            edits => format!("{} token edits", edits.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("changeset is empty")]
    Empty,
    #[error("token {index} is outside the stream ({len} tokens)")]
    OutOfRange { index: usize, len: usize },
    #[error("token {index} was already modified in this pass")]
    Conflict { index: usize },
}

/// Per-pass token text buffer.
#[derive(Debug)]
pub struct Fixer {
    text: Vec<String>,
    touched: Vec<bool>,
    applied: usize,
    rejected: usize,
}

impl Fixer {
    pub fn new(stream: &TokenStream) -> Self {
        let text: Vec<String> = stream.tokens().iter().map(|t| t.text.clone()).collect();
        let touched = vec![false; text.len()];
        Self {
            text,
            touched,
            applied: 0,
            rejected: 0,
        }
    }

    /// Apply every edit of `changeset`, or none of them.
    pub fn apply(&mut self, changeset: &Changeset) -> Result<(), Rejection> {
        if let Err(rejection) = self.check(changeset) {
            self.rejected += 1;
            return Err(rejection);
        }

        for edit in changeset.edits() {
            match edit {
                Edit::Replace { index, text } => self.text[*index] = text.clone(),
                Edit::Append { index, text } => self.text[*index].push_str(text),
                Edit::Prepend { index, text } => self.text[*index].insert_str(0, text),
            }
            self.touched[edit.index()] = true;
        }
        self.applied += 1;
        Ok(())
    }

    fn check(&self, changeset: &Changeset) -> Result<(), Rejection> {
        if changeset.is_empty() {
            return Err(Rejection::Empty);
        }
        for edit in changeset.edits() {
            let index = edit.index();
            if index >= self.text.len() {
                return Err(Rejection::OutOfRange {
                    index,
                    len: self.text.len(),
                });
            }
            if self.touched[index] {
                return Err(Rejection::Conflict { index });
            }
        }
        Ok(())
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn is_modified(&self, index: usize) -> bool {
        self.touched.get(index).copied().unwrap_or(false)
    }

    pub fn token_text(&self, index: usize) -> Option<&str> {
        self.text.get(index).map(String::as_str)
    }

    /// Serialize the current text of every token.
    pub fn contents(&self) -> String {
        self.text.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plumb_core::lexer::tokenize;

    fn stream() -> TokenStream {
        tokenize("/**\n * Short.\n */")
    }

    #[test]
    fn test_apply_replace_append_prepend() {
        let stream = stream();
        let string = 5;
        assert_eq!(stream.text(string), "Short.");

        let mut fixer = Fixer::new(&stream);
        let mut cs = Changeset::new();
        cs.replace(string, "Long.")
            .add_content(string, "!")
            .add_content_before(string, ">");
        assert!(fixer.apply(&cs).is_ok());
        assert_eq!(fixer.contents(), "/**\n * >Long.!\n */");
        assert_eq!(fixer.applied(), 1);
        assert!(fixer.is_modified(string));
    }

    #[test]
    fn test_conflicting_changeset_is_rejected_whole() {
        let stream = stream();
        let mut fixer = Fixer::new(&stream);

        let mut first = Changeset::new();
        first.replace(5, "One.");
        fixer.apply(&first).unwrap();

        // Touches a fresh token and the already-modified one.
        let mut second = Changeset::new();
        second.add_newline(0, "\n").replace(5, "Two.");
        assert_eq!(fixer.apply(&second), Err(Rejection::Conflict { index: 5 }));
        assert_eq!(fixer.contents(), "/**\n * One.\n */");
        assert!(!fixer.is_modified(0));
        assert_eq!(fixer.rejected(), 1);
    }

    #[test]
    fn test_empty_and_out_of_range_are_rejected() {
        let stream = stream();
        let mut fixer = Fixer::new(&stream);
        assert_eq!(fixer.apply(&Changeset::new()), Err(Rejection::Empty));

        let mut cs = Changeset::new();
        cs.clear(1).clear(999);
        assert_eq!(
            fixer.apply(&cs),
            Err(Rejection::OutOfRange {
                index: 999,
                len: stream.len()
            })
        );
        assert_eq!(fixer.contents(), stream.source());
        assert_eq!(fixer.rejected(), 2);
    }

    #[test]
    fn test_untouched_fixer_reproduces_source() {
        let stream = stream();
        let fixer = Fixer::new(&stream);
        assert_eq!(fixer.contents(), stream.source());
        assert_eq!(fixer.token_text(5), Some("Short."));
    }

    #[test]
    fn test_summary() {
        let mut cs = Changeset::new();
        cs.replace(3, "int $x Description.");
        assert_eq!(cs.summary(), "replace with \"int $x Description.\"");

        let mut cs = Changeset::new();
        cs.replace(3, "  ");
        assert_eq!(cs.summary(), "adjust whitespace");

        let mut cs = Changeset::new();
        cs.add_newline_before(3, "\n");
        assert_eq!(cs.summary(), "insert line break");

        let mut cs = Changeset::new();
        cs.clear(1).clear(2);
        assert_eq!(cs.summary(), "2 token edits");
    }
}
