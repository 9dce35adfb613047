//=========================================================================
// Localized Strings
//=========================================================================
//
// Cliloc references: numeric id + ordered substitution arguments.
//
// The template database lives outside this crate. Strings are resolved
// through a `Localizer` when a frame is built; unknown ids degrade to a
// visible placeholder instead of failing.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fmt;

//=== External Dependencies ===============================================

use log::warn;

//=== LocalizedString =====================================================

/// Reference to a localized string, resolved at display time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedString {
    id: u32,
    args: Vec<String>,
}

impl LocalizedString {
    pub fn new(id: u32) -> Self {
        Self { id, args: Vec::new() }
    }

    pub fn with_args<I, S>(id: u32, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolves through `localizer`, falling back to [`placeholder`](Self::placeholder).
    pub fn resolve(&self, localizer: &dyn Localizer) -> String {
        match localizer.localize(self.id, &self.args) {
            Some(text) => text,
            None => {
                warn!("Unknown cliloc id {}, using placeholder", self.id);
                self.placeholder()
            }
        }
    }

    /// Visible text shown for an unknown id.
    pub fn placeholder(&self) -> String {
        format!("<cliloc #{}>", self.id)
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cliloc({}", self.id)?;
        if !self.args.is_empty() {
            write!(f, ", {:?}", self.args)?;
        }
        write!(f, ")")
    }
}

//=== Localizer ===========================================================

/// Localization boundary: `(id, args)` → display text.
///
/// Returning `None` marks the id as unknown.
pub trait Localizer {
    fn localize(&self, id: u32, args: &[String]) -> Option<String>;
}

/// Localizer that knows no id; every string renders as its placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalizer;

impl Localizer for NoLocalizer {
    fn localize(&self, _id: u32, _args: &[String]) -> Option<String> {
        None
    }
}

//=== ClilocTable =========================================================

/// In-memory template table.
///
/// Templates use the cliloc argument syntax: `~1_NAME~`, `~2_AMOUNT~`, ...
/// refer to the 1-based argument index. Missing arguments become empty.
#[derive(Debug, Clone, Default)]
pub struct ClilocTable {
    templates: HashMap<u32, String>,
}

impl ClilocTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u32, template: impl Into<String>) -> &mut Self {
        self.templates.insert(id, template.into());
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Localizer for ClilocTable {
    fn localize(&self, id: u32, args: &[String]) -> Option<String> {
        self.templates.get(&id).map(|template| substitute(template, args))
    }
}

//--- substitute() --------------------------------------------------------
//
// Replaces each `~N_LABEL~` marker by args[N - 1]. Text that does not form
// a marker is copied verbatim.
//
fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('~') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let marker = after.find('~').and_then(|end| {
            let inner = &after[..end];
            let digits: &str = inner.split('_').next().unwrap_or("");
            digits.parse::<usize>().ok().map(|n| (n, end))
        });

        match marker {
            Some((n, end)) => {
                if let Some(arg) = n.checked_sub(1).and_then(|i| args.get(i)) {
                    out.push_str(arg);
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('~');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_id_and_args_order() {
        let s = LocalizedString::with_args(1072058, ["fo", "awef"]);
        assert_eq!(s.id(), 1072058);
        assert_eq!(s.args(), ["fo".to_string(), "awef".to_string()]);
    }

    #[test]
    fn does_not_substitute_itself() {
        let s = LocalizedString::with_args(1072058, ["fo", "awef"]);
        assert_eq!(s.to_string(), r#"Cliloc(1072058, ["fo", "awef"])"#);
        assert_eq!(LocalizedString::new(501522).to_string(), "Cliloc(501522)");
    }

    #[test]
    fn unknown_id_resolves_to_placeholder() {
        let s = LocalizedString::new(501522);
        assert_eq!(s.resolve(&NoLocalizer), "<cliloc #501522>");
    }

    #[test]
    fn table_substitutes_in_argument_order() {
        let mut table = ClilocTable::new();
        table.insert(1072058, "~2_B~ then ~1_A~");
        let s = LocalizedString::with_args(1072058, ["fo", "awef"]);
        assert_eq!(s.resolve(&table), "awef then fo");
    }

    #[test]
    fn missing_argument_becomes_empty() {
        let mut table = ClilocTable::new();
        table.insert(7, "[~1_X~|~3_Y~]");
        assert_eq!(LocalizedString::with_args(7, ["a"]).resolve(&table), "[a|]");
    }

    #[test]
    fn stray_tilde_is_kept() {
        assert_eq!(substitute("a ~ b", &[]), "a ~ b");
        assert_eq!(substitute("~x~y", &[]), "~x~y");
    }
}
