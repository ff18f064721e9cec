use smol_str::SmolStr;

use crate::base::{LineIndex, Span};
use crate::syntax::TextRange;

/// Replace the text in `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: SmolStr,
}

impl TextEdit {
    pub fn replace(range: TextRange, new_text: impl Into<SmolStr>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Line/column span of the replaced range.
    pub fn span(&self, index: &LineIndex) -> Span {
        index.span(self.range)
    }
}
