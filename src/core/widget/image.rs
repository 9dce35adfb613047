//=========================================================================
// Image Widget
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::texture::TextureRef;

//=== Image ===============================================================

/// Textured widget.
///
/// With point-only geometry the image takes the texture's natural size,
/// resolved when a frame is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    texture: TextureRef,
    offset: (i32, i32),
    tiled: bool,
}

impl Image {
    pub fn new(texture: TextureRef) -> Self {
        Self {
            texture,
            offset: (0, 0),
            tiled: false,
        }
    }

    pub fn texture(&self) -> &TextureRef {
        &self.texture
    }

    pub fn set_texture(&mut self, texture: TextureRef) {
        self.texture = texture;
    }

    /// Offset of the drawn sub-area inside the texture.
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    pub fn set_offset(&mut self, x: i32, y: i32) {
        self.offset = (x, y);
    }

    /// Whether the texture repeats across an explicit rect.
    pub fn is_tiled(&self) -> bool {
        self.tiled
    }

    pub fn set_tiled(&mut self, tiled: bool) {
        self.tiled = tiled;
    }
}
