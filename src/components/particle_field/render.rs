//! Canvas rendering for the particle field.
//!
//! All drawing goes through [`render`], called once per animation frame after
//! the simulation tick. Two passes over a cleared canvas: connection lines
//! first, then the particles on top. The canvas is cleared transparent rather
//! than filled, so the page background shows through.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::FieldTheme;

/// Renders the complete field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_links(field, ctx, theme);
	draw_particles(field, ctx, theme);
}

fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.set_line_width(theme.line_width);

	for (i, j, alpha) in field.links() {
		let from = &field.particles[i];
		let to = &field.particles[j];

		// Each pair is drawn once, in the lower-index particle's color.
		let color = from.color.resolve(theme).with_alpha(alpha);
		ctx.set_stroke_style_str(&color.to_css());

		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	for p in &field.particles {
		let color = p.color.resolve(theme).with_alpha(p.opacity);
		ctx.set_fill_style_str(&color.to_css());

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
