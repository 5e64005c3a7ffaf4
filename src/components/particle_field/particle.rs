//! The particle value type and its color category.

use super::theme::{Color, FieldTheme};

/// Which of the two field colors a particle was assigned at creation.
///
/// The assignment is made once when the field is populated and never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
	/// Maps to the theme's blue, rgb(59, 130, 246) by default.
	Blue,
	/// Maps to the theme's violet, rgb(139, 92, 246) by default.
	Violet,
}

impl ParticleColor {
	/// Resolve the category to a concrete color from the theme.
	pub fn resolve(self, theme: &FieldTheme) -> Color {
		match self {
			ParticleColor::Blue => theme.blue,
			ParticleColor::Violet => theme.violet,
		}
	}
}

/// A single animated point in the field.
///
/// Position and velocity are mutated by [`super::field::ParticleField::tick`];
/// `radius`, `opacity`, and `color` are fixed at creation.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: ParticleColor,
}
