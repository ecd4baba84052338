use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Billboard sprite sampled from a sprite sheet.
///
/// `offset` and `repeat` are expressed as fractions of the texture size,
/// the way a texture transform is: `repeat` is the size of the sampled tile
/// and `offset` its top-left corner. `size` is the billboard size in world
/// units.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub size: Vector2,
    pub offset: Vector2,
    pub repeat: Vector2,
}

impl Sprite {
    /// Sprite showing the first tile of a single-row sheet of `tiles` frames.
    pub fn from_sheet_row(tex_key: impl Into<String>, size: Vector2, tiles: usize) -> Self {
        Self {
            tex_key: tex_key.into(),
            size,
            offset: Vector2 { x: 0.0, y: 0.0 },
            repeat: Vector2 {
                x: 1.0 / tiles.max(1) as f32,
                y: 1.0,
            },
        }
    }

    /// Source rectangle in texture pixels for a texture of the given size.
    pub fn source_rect(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        Rectangle {
            x: self.offset.x * tex_width,
            y: self.offset.y * tex_height,
            width: self.repeat.x * tex_width,
            height: self.repeat.y * tex_height,
        }
    }
}
