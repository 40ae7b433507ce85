//! Drawing surface abstraction so rendering can run headlessly in tests.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout::Position;

/// Logical (CSS pixel) size of a surface and its device pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
	pub width: f64,
	pub height: f64,
	pub device_pixel_ratio: f64,
}

impl SurfaceMetrics {
	pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
			device_pixel_ratio
		} else {
			1.0
		};
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			device_pixel_ratio,
		}
	}

	/// Backing store size in device pixels.
	pub fn physical_size(&self) -> (u32, u32) {
		(
			(self.width * self.device_pixel_ratio).round() as u32,
			(self.height * self.device_pixel_ratio).round() as u32,
		)
	}
}

pub trait Surface {
	/// Resizes the backing store, discarding its contents and any drawing state.
	fn resize(&mut self, width: u32, height: u32);
	/// Replaces the current transform with a uniform scale.
	fn set_scale(&mut self, k: f64);
	fn scale(&mut self, k: f64);
	fn save(&mut self);
	fn restore(&mut self);
	fn clear(&mut self, width: f64, height: f64);
	fn set_stroke_style(&mut self, style: &str);
	fn set_fill_style(&mut self, style: &str);
	fn set_line_width(&mut self, width: f64);
	fn set_font(&mut self, font: &str);
	fn set_text_align(&mut self, align: &str);
	fn stroke_line(&mut self, from: Position, to: Position);
	/// Fills the circle with the current fill style, then outlines it with the stroke style.
	fn fill_and_stroke_circle(&mut self, center: Position, radius: f64);
	fn fill_text(&mut self, text: &str, at: Position);
}

pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn set_scale(&mut self, k: f64) {
		let _ = self.ctx.set_transform(k, 0.0, 0.0, k, 0.0, 0.0);
	}

	fn scale(&mut self, k: f64) {
		let _ = self.ctx.scale(k, k);
	}

	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn set_stroke_style(&mut self, style: &str) {
		self.ctx.set_stroke_style_str(style);
	}

	fn set_fill_style(&mut self, style: &str) {
		self.ctx.set_fill_style_str(style);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn set_font(&mut self, font: &str) {
		self.ctx.set_font(font);
	}

	fn set_text_align(&mut self, align: &str) {
		self.ctx.set_text_align(align);
	}

	fn stroke_line(&mut self, from: Position, to: Position) {
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}

	fn fill_and_stroke_circle(&mut self, center: Position, radius: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.ctx.fill();
		self.ctx.stroke();
	}

	fn fill_text(&mut self, text: &str, at: Position) {
		let _ = self.ctx.fill_text(text, at.x, at.y);
	}
}
