//! Visual configuration for the particle field.
//!
//! Colors and stroke styling live here; behavioral constants (counts,
//! attraction and link radii) belong to the simulation in [`super::field`].

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Visual style for the field: the two particle colors and line styling.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Color behind [`super::ParticleColor::Blue`].
	pub blue: Color,
	/// Color behind [`super::ParticleColor::Violet`].
	pub violet: Color,
	/// Stroke width for connection lines, in pixels.
	pub line_width: f64,
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			blue: Color::rgb(59, 130, 246),
			violet: Color::rgb(139, 92, 246),
			line_width: 1.0,
		}
	}
}
