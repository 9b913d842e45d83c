// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static textured rectangles.

use grove_scene::TextureId;
use kurbo::Rect;

/// A textured rectangle without collision bounds, such as the tiled background.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Texture to draw.
    pub texture: TextureId,
    /// Area covered, in local space. Repeating textures tile it.
    pub rect: Rect,
}

impl Sprite {
    /// A sprite covering `rect` with `texture`.
    pub fn new(texture: TextureId, rect: Rect) -> Self {
        Self { texture, rect }
    }
}
