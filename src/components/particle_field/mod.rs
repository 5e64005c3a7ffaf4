//! Particle-field background animation component.
//!
//! Renders a decorative set of drifting particles on an HTML canvas with:
//! - Soft bounces off the viewport edges
//! - Local attraction toward the pointer position
//! - Proximity-faded connection lines between nearby particles
//! - Viewport-tracking resize behavior
//!
//! The simulation itself ([`field::ParticleField`]) is plain Rust with no
//! host types; [`ParticleFieldCanvas`] wires it to a canvas, the animation
//! frame scheduler, and window events.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::ParticleFieldCanvas;
//!
//! view! { <ParticleFieldCanvas fullscreen=true /> }
//! ```

mod component;
pub mod field;
mod particle;
mod render;
pub mod theme;

pub use component::{FrameHandle, ParticleFieldCanvas};
pub use field::ParticleField;
pub use particle::{Particle, ParticleColor};
pub use theme::FieldTheme;
