//=========================================================================
// Label Widget
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::localization::{LocalizedString, Localizer};

//=== HAlign ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

//=== LabelText ===========================================================

/// Plain text or a cliloc reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelText {
    Plain(String),
    Localized(LocalizedString),
}

impl LabelText {
    /// Display text; unknown cliloc ids yield a placeholder.
    pub fn resolve(&self, localizer: &dyn Localizer) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Localized(s) => s.resolve(localizer),
        }
    }
}

impl From<&str> for LabelText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

impl From<String> for LabelText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<LocalizedString> for LabelText {
    fn from(s: LocalizedString) -> Self {
        Self::Localized(s)
    }
}

impl fmt::Display for LabelText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.write_str(text),
            Self::Localized(s) => write!(f, "{s}"),
        }
    }
}

//=== Label ===============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: LabelText,
    halign: HAlign,
}

impl Label {
    pub fn new(text: impl Into<LabelText>) -> Self {
        Self {
            text: text.into(),
            halign: HAlign::default(),
        }
    }

    pub fn text(&self) -> &LabelText {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<LabelText>) {
        self.text = text.into();
    }

    pub fn halign(&self) -> HAlign {
        self.halign
    }

    pub fn set_halign(&mut self, halign: HAlign) {
        self.halign = halign;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::localization::NoLocalizer;

    #[test]
    fn defaults_to_left_alignment() {
        let mut label = Label::new("hello");
        assert_eq!(label.halign(), HAlign::Left);
        label.set_halign(HAlign::Right);
        assert_eq!(label.halign(), HAlign::Right);
    }

    #[test]
    fn plain_text_resolves_verbatim() {
        let label = Label::new("foooobert");
        assert_eq!(label.text().resolve(&NoLocalizer), "foooobert");
    }

    #[test]
    fn localized_text_keeps_reference() {
        let label = Label::new(LocalizedString::new(501522));
        assert_eq!(label.text(), &LabelText::Localized(LocalizedString::new(501522)));
        assert_eq!(label.text().resolve(&NoLocalizer), "<cliloc #501522>");
    }
}
