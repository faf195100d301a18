use macroquad::prelude::*;

use crate::domain::{Cell, Grid};

const BYTES_PER_PIXEL: usize = 4;

/// Immutable lookup table mapping cell state to an RGBA pixel. Built once
/// from the configured colors at startup.
pub struct ColorLut {
    table: [[u8; 4]; 2],
}

impl ColorLut {
    pub fn new(dead: [u8; 3], alive: [u8; 3]) -> Self {
        Self {
            table: [
                [dead[0], dead[1], dead[2], 255],
                [alive[0], alive[1], alive[2], 255],
            ],
        }
    }

    pub const fn pixel(&self, cell: Cell) -> [u8; 4] {
        self.table[cell.is_alive() as usize]
    }
}

/// Paint the grid into a row-major RGBA byte buffer of exactly
/// width*height pixels. Pure and idempotent; never mutates the grid.
pub fn paint(grid: &Grid, lut: &ColorLut, pixels: &mut [u8]) {
    debug_assert_eq!(pixels.len(), grid.cells().len() * BYTES_PER_PIXEL);

    for (cell, out) in grid.cells().iter().zip(pixels.chunks_exact_mut(BYTES_PER_PIXEL)) {
        out.copy_from_slice(&lut.pixel(*cell));
    }
}

/// Surface owns the grid-sized image and its GPU texture. The texture is
/// scaled to the full screen with nearest-neighbor filtering so cell
/// edges stay hard.
pub struct Surface {
    image: Image,
    texture: Texture2D,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        let image = Image::gen_image_color(width as u16, height as u16, BLACK);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self { image, texture }
    }

    /// Paint the grid through the LUT and queue the scaled frame
    pub fn present(&mut self, grid: &Grid, lut: &ColorLut) {
        paint(grid, lut, &mut self.image.bytes);
        self.texture.update(&self.image);
        draw_texture_ex(
            &self.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}
