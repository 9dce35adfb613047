//=========================================================================
// Texture References
//=========================================================================
//
// Unresolved references to visual assets.
//
// Two asset sources exist:
//   THEME    → themed UI atlas, addressed by path ("images/button.png")
//   GUMPART  → legacy indexed art file, addressed by index (13)
//
// Resolution (reference → pixels) belongs to the renderer. The scene
// graph only stores references and asks a `TextureResolver` for natural
// sizes when building a frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::error::{GumpError, Result};

//=== TextureSource =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSource {
    Theme,
    GumpArt,
}

impl TextureSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::GumpArt => "gumpart",
        }
    }

    /// Parses a source name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("theme") {
            Ok(Self::Theme)
        } else if name.eq_ignore_ascii_case("gumpart") {
            Ok(Self::GumpArt)
        } else {
            Err(GumpError::Parse(format!("unknown texture source: {name:?}")))
        }
    }
}

//=== TextureId ===========================================================

/// Untyped identifier as handed over by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextureId {
    Path(String),
    Index(u32),
}

impl TextureId {
    fn kind(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Index(_) => "index",
        }
    }
}

impl From<&str> for TextureId {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<String> for TextureId {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<u32> for TextureId {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

//=== TextureRef ==========================================================

/// Immutable reference to a texture, compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextureRef {
    Theme(String),
    GumpArt(u32),
}

impl TextureRef {
    /// Builds a reference, checking the identifier matches the source kind.
    pub fn new(source: TextureSource, id: impl Into<TextureId>) -> Result<Self> {
        match (source, id.into()) {
            (TextureSource::Theme, TextureId::Path(path)) => Ok(Self::Theme(path)),
            (TextureSource::GumpArt, TextureId::Index(index)) => Ok(Self::GumpArt(index)),
            (source, other) => Err(GumpError::TypeMismatch {
                source_kind: source.name(),
                found: other.kind(),
            }),
        }
    }

    pub fn theme(path: impl Into<String>) -> Self {
        Self::Theme(path.into())
    }

    pub fn gump_art(index: u32) -> Self {
        Self::GumpArt(index)
    }

    /// Builds a reference from a `(source, id)` string pair.
    ///
    /// Gumpart ids must be decimal indices.
    pub fn parse(source: &str, id: &str) -> Result<Self> {
        let source = TextureSource::parse(source)?;
        match source {
            TextureSource::Theme => Self::new(source, id),
            TextureSource::GumpArt => {
                let index = id.trim().parse::<u32>().map_err(|_| GumpError::TypeMismatch {
                    source_kind: source.name(),
                    found: "path",
                })?;
                Self::new(source, index)
            }
        }
    }

    pub fn source(&self) -> TextureSource {
        match self {
            Self::Theme(_) => TextureSource::Theme,
            Self::GumpArt(_) => TextureSource::GumpArt,
        }
    }
}

impl fmt::Display for TextureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(path) => write!(f, "theme:{path}"),
            Self::GumpArt(index) => write!(f, "gumpart:{index}"),
        }
    }
}

//=== TextureResolver =====================================================

/// Renderer-side texture lookup.
///
/// Only natural sizes are needed by the scene graph; pixel data stays with
/// the renderer. `None` means the texture is not loaded (yet).
pub trait TextureResolver {
    fn natural_size(&self, texture: &TextureRef) -> Option<(u32, u32)>;
}

/// Resolver that knows no texture.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedTextures;

impl TextureResolver for UnresolvedTextures {
    fn natural_size(&self, _texture: &TextureRef) -> Option<(u32, u32)> {
        None
    }
}

impl<F> TextureResolver for F
where
    F: Fn(&TextureRef) -> Option<(u32, u32)>,
{
    fn natural_size(&self, texture: &TextureRef) -> Option<(u32, u32)> {
        self(texture)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
