//=========================================================================
// Gump Errors
//=========================================================================
//
// Local, synchronous failures raised by the call that breaks a contract.
// Nothing here is retried; callers decide whether to log or abort.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::widget::{GumpId, WidgetId};

//=== Result Alias ========================================================

/// Result type used across the gump core.
pub type Result<T> = std::result::Result<T, GumpError>;

/// Boxed error returned by click callbacks.
pub type CallbackError = Box<dyn std::error::Error + 'static>;

//=== GumpError ===========================================================

/// Errors produced by scene construction, lookup and event dispatch.
#[derive(Error, Debug)]
pub enum GumpError {
    /// Malformed literal (color hex string, texture source name).
    #[error("parse error: {0}")]
    Parse(String),

    /// Numeric field outside of its accepted range.
    #[error("value out of range for {field}: {value}")]
    Value { field: &'static str, value: String },

    /// Texture identifier type does not match the declared source kind.
    #[error("texture source {source_kind} does not accept a {found} identifier")]
    TypeMismatch {
        source_kind: &'static str,
        found: &'static str,
    },

    /// Lookup by store key, component name or widget id failed.
    #[error("not found: {0}")]
    NotFound(String),

    /// Typed access to a widget of another subtype.
    #[error("expected a {expected} widget, found {found}")]
    WrongWidgetKind {
        expected: &'static str,
        found: &'static str,
    },

    /// Widget handle belongs to another gump.
    #[error("widget {widget:?} does not belong to gump {gump:?}")]
    ForeignWidget { widget: WidgetId, gump: GumpId },

    /// Component name already used by another widget of the same gump.
    #[error("component name already in use: {0}")]
    DuplicateName(String),

    /// Error raised by a click callback during dispatch.
    #[error("callback of widget {widget:?} failed: {source}")]
    Callback {
        widget: WidgetId,
        #[source]
        source: CallbackError,
    },
}

impl GumpError {
    pub(crate) fn value(field: &'static str, value: impl ToString) -> Self {
        Self::Value {
            field,
            value: value.to_string(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
