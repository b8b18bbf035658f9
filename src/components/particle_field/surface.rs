//! Drawing surface the particle system renders onto.
//!
//! [`Surface`] is the minimal 2D primitive set the render pass needs. The
//! browser implementation wraps a canvas and its 2D context; tests substitute
//! a recorder.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;
use super::types::Vec2;

/// Minimal 2D drawing contract.
pub trait Surface {
	/// Set the backing pixel dimensions.
	fn set_size(&mut self, size: Vec2);
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn begin_path(&mut self);
	fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
	fn close_path(&mut self);
	fn set_fill_color(&mut self, color: Color);
	fn fill(&mut self);
}

/// An HTML canvas and its 2D rendering context.
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
	fn set_size(&mut self, size: Vec2) {
		self.canvas.set_width(size.x.max(0.0) as u32);
		self.canvas.set_height(size.y.max(0.0) as u32);
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
		// Canvas throws IndexSizeError on a negative radius
		let _ = self
			.ctx
			.arc(x, y, radius.max(0.0), start_angle, end_angle);
	}

	fn close_path(&mut self) {
		self.ctx.close_path();
	}

	fn set_fill_color(&mut self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}
}

/// Surface that records every call, for asserting on render output.
#[cfg(test)]
pub mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		SetSize(Vec2),
		ClearRect(f64, f64, f64, f64),
		BeginPath,
		Arc { x: f64, y: f64, radius: f64 },
		ClosePath,
		SetFill(Color),
		Fill,
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
	}

	impl RecordingSurface {
		pub fn arcs(&self) -> Vec<(f64, f64, f64)> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					DrawOp::Arc { x, y, radius } => Some((*x, *y, *radius)),
					_ => None,
				})
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn set_size(&mut self, size: Vec2) {
			self.ops.push(DrawOp::SetSize(size));
		}

		fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
			self.ops.push(DrawOp::ClearRect(x, y, width, height));
		}

		fn begin_path(&mut self) {
			self.ops.push(DrawOp::BeginPath);
		}

		fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
			self.ops.push(DrawOp::Arc { x, y, radius });
		}

		fn close_path(&mut self) {
			self.ops.push(DrawOp::ClosePath);
		}

		fn set_fill_color(&mut self, color: Color) {
			self.ops.push(DrawOp::SetFill(color));
		}

		fn fill(&mut self) {
			self.ops.push(DrawOp::Fill);
		}
	}
}
