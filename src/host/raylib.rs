//! raylib window host.
//!
//! The game's canvas is a [`RenderTarget`]: a render texture drawn centered
//! in a resizable raylib window. The autoscaler resizes it through a
//! [`PendingSurfaceSize`], which only records the request; the host loop
//! recreates the texture between frames because that needs the raylib handle.

use super::{SurfaceResizer, WindowEvents};
use raylib::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Render texture acting as the game's render surface.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// Recreate the render texture at a new size.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to recreate render texture: {}", e))?;

        self.texture = texture;
        self.width = width;
        self.height = height;

        Ok(())
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Negative height flips the Y axis to compensate for OpenGL's inverted
    /// texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }

    /// Destination rectangle centering the texture, unscaled, in the window.
    pub fn centered_in(&self, window_w: i32, window_h: i32) -> Rectangle {
        Rectangle {
            x: (window_w as f32 - self.width as f32) / 2.0,
            y: (window_h as f32 - self.height as f32) / 2.0,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

/// [`SurfaceResizer`] that stores the latest requested size.
#[derive(Clone, Default)]
pub struct PendingSurfaceSize(Rc<Cell<Option<(u32, u32)>>>);

impl PendingSurfaceSize {
    /// Take the latest request, leaving none behind.
    pub fn take(&self) -> Option<(u32, u32)> {
        self.0.take()
    }
}

impl SurfaceResizer for PendingSurfaceSize {
    fn resize_surface(&mut self, width: u32, height: u32) {
        self.0.set(Some((width, height)));
    }
}

/// Current window inner size in pixels.
pub fn window_inner_size(rl: &RaylibHandle) -> (u32, u32) {
    (
        rl.get_screen_width().max(0) as u32,
        rl.get_screen_height().max(0) as u32,
    )
}

/// Forward this frame's raylib window resize, if any, to the handlers.
pub fn poll_window_events(rl: &RaylibHandle, events: &mut WindowEvents) {
    if rl.is_window_resized() {
        let (w, h) = window_inner_size(rl);
        events.emit_resize(w, h);
    }
}

/// Draw a frame: a test card into the render target, then the target
/// centered in the window.
pub fn draw_frame(rl: &mut RaylibHandle, th: &RaylibThread, target: &mut RenderTarget) {
    let (surface_w, surface_h) = (target.width as i32, target.height as i32);
    let mut d = rl.begin_drawing(th);
    d.clear_background(Color::BLACK);

    {
        let mut t = d.begin_texture_mode(th, &mut target.texture);
        t.clear_background(Color::DARKBLUE);
        t.draw_rectangle_lines(0, 0, surface_w, surface_h, Color::RAYWHITE);
        t.draw_line(0, 0, surface_w, surface_h, Color::SKYBLUE);
        t.draw_line(0, surface_h, surface_w, 0, Color::SKYBLUE);
        t.draw_text(
            &format!("{}x{}", surface_w, surface_h),
            10,
            10,
            20,
            Color::RAYWHITE,
        );
    }

    let dest = target.centered_in(d.get_screen_width(), d.get_screen_height());
    d.draw_texture_pro(
        target.texture.texture(),
        target.source_rect(),
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}
