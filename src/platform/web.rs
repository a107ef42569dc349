//! Browser-backed collaborators (wasm32 only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, Storage};

use crate::game::InitialsPrompt;
use crate::persistence::KeyValueStore;
use crate::renderer::{Color, Sprite, Surface, TextAlign, TextStyle};
use crate::ui::Rect;

const FONT_FAMILY: &str = "Helvetica";

/// LocalStorage; silently empty when storage is unavailable (private mode)
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, scores will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage
            && storage.set_item(key, value).is_err()
        {
            log::warn!("Failed to write '{}' to LocalStorage", key);
        }
    }
}

/// `window.prompt`; cancel or a missing window count as declining
#[derive(Debug, Default)]
pub struct WindowPrompt;

impl InitialsPrompt for WindowPrompt {
    fn ask(&mut self, message: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message(message)
            .ok()
            .flatten()
    }
}

/// Canvas 2D context plus the sprite images from the page
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    actor: Option<HtmlImageElement>,
    obstacle: Option<HtmlImageElement>,
    backdrop: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Wrap `canvas`, looking up `<img>` elements by the given ids
    pub fn new(
        canvas: &HtmlCanvasElement,
        document: &Document,
        actor_id: &str,
        obstacle_id: &str,
        backdrop_id: &str,
    ) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let image = |id: &str| {
            let img = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
            if img.is_none() {
                log::warn!("Missing image element '{}'", id);
            }
            img
        };

        Some(Self {
            ctx,
            actor: image(actor_id),
            obstacle: image(obstacle_id),
            backdrop: image(backdrop_id),
        })
    }

    fn font(size_px: f32) -> String {
        format!("{}px {}", size_px, FONT_FAMILY)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, area: Rect) {
        self.ctx
            .clear_rect(area.x as f64, area.y as f64, area.w as f64, area.h as f64);
    }

    fn draw_image(&mut self, sprite: Sprite, dest: Rect) {
        let image = match sprite {
            Sprite::Actor => &self.actor,
            Sprite::Obstacle => &self.obstacle,
            Sprite::Backdrop => &self.backdrop,
        };
        if let Some(image) = image {
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                dest.x as f64,
                dest.y as f64,
                dest.w as f64,
                dest.h as f64,
            );
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(color.0);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.ctx.set_font(&Self::font(style.size_px));
        self.ctx.set_fill_style_str(style.color.0);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn measure_text(&mut self, text: &str, size_px: f32) -> f32 {
        self.ctx.set_font(&Self::font(size_px));
        self.ctx
            .measure_text(text)
            .map(|metrics| metrics.width() as f32)
            .unwrap_or(0.0)
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(color.0);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_stroke_style_str(color.0);
        self.ctx.set_line_width(1.0);
        self.ctx.stroke();
    }
}
