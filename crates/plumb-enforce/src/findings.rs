use crate::codes::Code;
use crate::fixer::Changeset;
use crate::types::Severity;

/// A violation before it is tied to a file and position.
#[derive(Debug, Clone)]
pub struct Finding {
    pub code: Code,
    pub severity: Severity,
    pub token: usize,
    pub message: String,
    pub fix: Option<Changeset>,
}

/// Report-ordered sink that validators write into.
#[derive(Debug, Default)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, code: Code, token: usize, message: impl Into<String>) {
        self.items.push(Finding {
            code,
            severity: code.default_severity(),
            token,
            message: message.into(),
            fix: None,
        });
    }

    /// Report with a fix. An empty changeset is reported as unfixable.
    pub fn report_fixable(
        &mut self,
        code: Code,
        token: usize,
        message: impl Into<String>,
        fix: Changeset,
    ) {
        self.items.push(Finding {
            code,
            severity: code.default_severity(),
            token,
            message: message.into(),
            fix: (!fix.is_empty()).then_some(fix),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.items.iter()
    }

    pub fn codes(&self) -> Vec<Code> {
        self.items.iter().map(|f| f.code).collect()
    }

    pub fn into_vec(self) -> Vec<Finding> {
        self.items
    }
}
