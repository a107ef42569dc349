//! Rendering
//!
//! The game draws through the [`Surface`] trait, a thin slice of a 2D canvas
//! API. The browser implementation lives in `platform::web`; [`NullSurface`]
//! discards everything for headless runs.

pub mod scene;

pub use scene::draw_frame;

use glam::Vec2;

use crate::ui::Rect;

/// Image assets the scene references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Actor,
    Obstacle,
    Backdrop,
}

/// CSS color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const WHITE: Color = Color("white");
    pub const GRAY: Color = Color("gray");
    pub const RED: Color = Color("red");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(size_px: f32, color: Color, align: TextAlign) -> Self {
        Self {
            size_px,
            color,
            align,
        }
    }
}

/// 2D drawing surface
pub trait Surface {
    fn clear(&mut self, area: Rect);
    fn draw_image(&mut self, sprite: Sprite, dest: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
    /// Width of `text` when drawn at `size_px`
    fn measure_text(&mut self, text: &str, size_px: f32) -> f32;
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Surface that draws nothing
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _area: Rect) {}
    fn draw_image(&mut self, _sprite: Sprite, _dest: Rect) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _style: TextStyle) {}

    fn measure_text(&mut self, text: &str, size_px: f32) -> f32 {
        // Rough average glyph width for a sans-serif face
        text.chars().count() as f32 * size_px * 0.5
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
}
