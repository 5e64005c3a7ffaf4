//! Particle field simulation state and per-tick update rules.
//!
//! [`ParticleField`] owns the particle collection plus the pointer and
//! viewport state the update rules read. It is deliberately free of any
//! host/canvas types: the component feeds it events and the renderer reads
//! positions back out, so the whole update cycle runs in host-side tests.

use rand::Rng;

use super::particle::{Particle, ParticleColor};

/// Viewport width below which the mobile particle count is used.
const MOBILE_BREAKPOINT: f64 = 768.0;
/// Particle count for narrow (mobile) viewports.
const MOBILE_COUNT: usize = 30;
/// Particle count for regular viewports.
const DESKTOP_COUNT: usize = 50;

/// Distance within which the pointer pulls on a particle.
pub const ATTRACTION_RADIUS: f64 = 150.0;
/// Scale applied to the attraction impulse each tick.
const ATTRACTION_STRENGTH: f64 = 0.0001;

/// Particles closer than this are joined by a connection line.
pub const LINK_DISTANCE: f64 = 100.0;
/// Connection line alpha at zero distance; fades linearly to zero at
/// [`LINK_DISTANCE`].
pub const LINK_BASE_ALPHA: f64 = 0.1;

/// Number of particles for a given viewport width.
pub fn particle_count(width: f64) -> usize {
	if width < MOBILE_BREAKPOINT {
		MOBILE_COUNT
	} else {
		DESKTOP_COUNT
	}
}

/// Alpha for a connection line between particles `dist` apart, or `None`
/// when they are too far apart to be connected at all.
pub fn link_alpha(dist: f64) -> Option<f64> {
	if dist < LINK_DISTANCE {
		Some(LINK_BASE_ALPHA * (1.0 - dist / LINK_DISTANCE))
	} else {
		None
	}
}

/// The simulation: a fixed-count particle collection plus the pointer and
/// viewport state consulted by [`tick`](ParticleField::tick).
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop. Pointer-move and resize events overwrite their fields
/// directly; the next tick picks the new values up.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pointer: [f64; 2],
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Populate a field for a viewport, drawing initial state from the
	/// thread RNG. The count is fixed for the field's lifetime.
	pub fn new(width: f64, height: f64) -> Self {
		Self::with_rng(width, height, &mut rand::thread_rng())
	}

	/// Populate a field using the supplied RNG. Seed it for deterministic
	/// fields in tests.
	pub fn with_rng<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
		let count = particle_count(width);
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			particles.push(Particle {
				x: rng.gen_range(0.0..width),
				y: rng.gen_range(0.0..height),
				vx: rng.gen_range(-0.25..0.25),
				vy: rng.gen_range(-0.25..0.25),
				radius: rng.gen_range(1.0..3.0),
				opacity: rng.gen_range(0.2..0.7),
				color: if rng.gen_bool(0.5) {
					ParticleColor::Blue
				} else {
					ParticleColor::Violet
				},
			});
		}

		Self {
			particles,
			pointer: [0.0, 0.0],
			width,
			height,
		}
	}

	/// Overwrite the stored pointer coordinate. No smoothing is applied.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = [x, y];
	}

	/// Overwrite the viewport bounds. Particles are not repositioned; any
	/// that end up outside the new bounds re-enter through the bounce rule
	/// over the following ticks.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Advance every particle by one frame: integrate position, bounce off
	/// the viewport edges, then apply pointer attraction.
	///
	/// The bounce negates one velocity component without clamping position,
	/// so a particle may overshoot the edge and reverse again next tick.
	/// Attraction accumulates into velocity with no damping term; boundary
	/// bounces are the only thing that sheds speed.
	pub fn tick(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}

			let dx = self.pointer[0] - p.x;
			let dy = self.pointer[1] - p.y;
			let dist = (dx * dx + dy * dy).sqrt();

			if dist < ATTRACTION_RADIUS {
				let force = (ATTRACTION_RADIUS - dist) / ATTRACTION_RADIUS;
				p.vx += dx * force * ATTRACTION_STRENGTH;
				p.vy += dy * force * ATTRACTION_STRENGTH;
			}
		}
	}

	/// Enumerate connection lines as `(index, index, alpha)` over unordered
	/// particle pairs. A pair appears exactly when the particles are closer
	/// than [`LINK_DISTANCE`]; the renderer strokes each in the first
	/// (lower-index) particle's color.
	pub fn links(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
		let particles = &self.particles;
		(0..particles.len()).flat_map(move |i| {
			((i + 1)..particles.len()).filter_map(move |j| {
				let dx = particles[i].x - particles[j].x;
				let dy = particles[i].y - particles[j].y;
				link_alpha((dx * dx + dy * dy).sqrt()).map(|alpha| (i, j, alpha))
			})
		})
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn pointer(&self) -> [f64; 2] {
		self.pointer
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn seeded_field(width: f64, height: f64) -> ParticleField {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		ParticleField::with_rng(width, height, &mut rng)
	}

	/// Bare field with hand-placed particles for boundary/attraction fixtures.
	fn fixture(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
		ParticleField {
			particles,
			pointer: [0.0, 0.0],
			width,
			height,
		}
	}

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			opacity: 0.5,
			color: ParticleColor::Blue,
		}
	}

	#[test]
	fn count_follows_viewport_width() {
		assert_eq!(particle_count(500.0), 30);
		assert_eq!(particle_count(767.9), 30);
		assert_eq!(particle_count(768.0), 50);
		assert_eq!(particle_count(1000.0), 50);

		assert_eq!(seeded_field(500.0, 800.0).particles.len(), 30);
		assert_eq!(seeded_field(1000.0, 800.0).particles.len(), 50);
	}

	#[test]
	fn initial_state_is_within_creation_ranges() {
		let field = seeded_field(1000.0, 800.0);
		for p in &field.particles {
			assert!((0.0..1000.0).contains(&p.x));
			assert!((0.0..800.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((1.0..3.0).contains(&p.radius));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn radius_opacity_and_color_never_change() {
		let mut field = seeded_field(1000.0, 800.0);
		let before: Vec<_> = field
			.particles
			.iter()
			.map(|p| (p.radius, p.opacity, p.color))
			.collect();

		field.set_pointer(500.0, 400.0);
		for _ in 0..500 {
			field.tick();
		}

		for (p, (radius, opacity, color)) in field.particles.iter().zip(before) {
			assert_eq!(p.radius, radius);
			assert_eq!(p.opacity, opacity);
			assert_eq!(p.color, color);
		}
	}

	#[test]
	fn crossing_the_left_edge_flips_vx_only() {
		let mut field = fixture(
			vec![Particle {
				vx: -0.2,
				vy: 0.1,
				..still_particle(-5.0, 400.0)
			}],
			1000.0,
			800.0,
		);
		// Park the pointer far away so attraction stays out of the picture.
		field.set_pointer(900.0, 400.0);
		field.tick();

		let p = &field.particles[0];
		assert!(p.vx > 0.0);
		assert_eq!(p.vy, 0.1);
	}

	#[test]
	fn crossing_the_right_edge_flips_vx() {
		let mut field = fixture(
			vec![Particle {
				vx: 0.2,
				..still_particle(1004.0, 400.0)
			}],
			1000.0,
			800.0,
		);
		field.set_pointer(100.0, 400.0);
		field.tick();
		assert!(field.particles[0].vx < 0.0);
	}

	#[test]
	fn crossing_a_vertical_edge_flips_vy() {
		let mut field = fixture(
			vec![
				Particle {
					vy: -0.2,
					..still_particle(500.0, -3.0)
				},
				Particle {
					vy: 0.2,
					..still_particle(500.0, 803.0)
				},
			],
			1000.0,
			800.0,
		);
		field.set_pointer(500.0, 400.0);
		field.tick();
		assert!(field.particles[0].vy > 0.0);
		assert!(field.particles[1].vy < 0.0);
	}

	#[test]
	fn bounce_does_not_clamp_position() {
		let mut field = fixture(
			vec![Particle {
				vx: -0.2,
				..still_particle(-5.0, 400.0)
			}],
			1000.0,
			800.0,
		);
		field.set_pointer(900.0, 400.0);
		field.tick();
		// Still outside after one tick; it drifts back in over later ticks.
		assert!(field.particles[0].x < 0.0);
	}

	#[test]
	fn attraction_is_a_no_op_beyond_the_radius() {
		let mut field = fixture(vec![still_particle(500.0, 400.0)], 1000.0, 800.0);
		field.set_pointer(500.0 + ATTRACTION_RADIUS, 400.0);
		field.tick();

		let p = &field.particles[0];
		assert_eq!(p.vx, 0.0);
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn attraction_pulls_a_stationary_particle_toward_the_pointer() {
		let mut field = fixture(vec![still_particle(500.0, 400.0)], 1000.0, 800.0);
		field.set_pointer(550.0, 360.0);
		field.tick();

		let p = &field.particles[0];
		// Velocity delta points along the displacement to the pointer.
		assert!(p.vx > 0.0);
		assert!(p.vy < 0.0);

		let expected_force = (ATTRACTION_RADIUS - (50.0f64 * 50.0 + 40.0 * 40.0).sqrt())
			/ ATTRACTION_RADIUS;
		assert!((p.vx - 50.0 * expected_force * 0.0001).abs() < 1e-12);
		assert!((p.vy - -40.0 * expected_force * 0.0001).abs() < 1e-12);
	}

	#[test]
	fn one_tick_moves_each_particle_by_its_velocity() {
		// Pointer stays at the origin; particles out of attraction range
		// must translate by exactly their initial velocity vector.
		let mut field = seeded_field(1000.0, 800.0);
		let before: Vec<_> = field.particles.iter().map(|p| (p.x, p.y, p.vx, p.vy)).collect();

		field.tick();

		for (p, (x, y, vx, vy)) in field.particles.iter().zip(before) {
			if (x * x + y * y).sqrt() >= ATTRACTION_RADIUS {
				assert_eq!(p.x, x + vx);
				assert_eq!(p.y, y + vy);
			}
		}
	}

	#[test]
	fn velocity_stays_finite_over_a_long_run() {
		let mut field = seeded_field(1000.0, 800.0);
		field.set_pointer(500.0, 400.0);
		for _ in 0..10_000 {
			field.tick();
		}
		for p in &field.particles {
			assert!(p.vx.is_finite());
			assert!(p.vy.is_finite());
		}
	}

	#[test]
	fn resize_updates_bounds_without_moving_particles() {
		let mut field = seeded_field(1000.0, 800.0);
		let before: Vec<_> = field.particles.iter().map(|p| (p.x, p.y)).collect();

		field.resize(1200.0, 900.0);

		assert_eq!(field.width(), 1200.0);
		assert_eq!(field.height(), 900.0);
		for (p, (x, y)) in field.particles.iter().zip(before) {
			assert_eq!(p.x, x);
			assert_eq!(p.y, y);
		}
	}

	#[test]
	fn link_alpha_fades_linearly_and_cuts_off() {
		assert_eq!(link_alpha(0.0), Some(LINK_BASE_ALPHA));
		let mid = link_alpha(50.0).unwrap();
		assert!((mid - 0.05).abs() < 1e-12);
		assert!(link_alpha(99.9).unwrap() > 0.0);
		assert_eq!(link_alpha(100.0), None);
		assert_eq!(link_alpha(250.0), None);
	}

	#[test]
	fn links_connect_exactly_the_close_pairs() {
		let field = fixture(
			vec![
				still_particle(100.0, 100.0),
				still_particle(160.0, 100.0), // 60 from first
				still_particle(400.0, 400.0), // far from both
			],
			1000.0,
			800.0,
		);

		let links: Vec<_> = field.links().collect();
		assert_eq!(links.len(), 1);
		let (i, j, alpha) = links[0];
		assert_eq!((i, j), (0, 1));
		assert!((alpha - LINK_BASE_ALPHA * (1.0 - 60.0 / LINK_DISTANCE)).abs() < 1e-12);
	}
}
