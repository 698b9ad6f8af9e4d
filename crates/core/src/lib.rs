//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the physics of the damped spring and nothing else.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same initial state produces a bit-identical
//!   trajectory on every run
//! - **Testable**: every tick is a pure state transition that can be
//!   asserted against the closed-form update relations
//! - **Portable**: runs headless, in benchmarks, or behind any renderer
//!
//! # Physics
//!
//! One tick of fixed-timestep semi-implicit Euler integration:
//!
//! 1. `force = -k * position - damping * velocity`
//! 2. `acceleration = force / mass`
//! 3. `velocity += acceleration * timestep`
//! 4. `position += velocity * timestep`
//!
//! With the default constants the 2x2 update matrix has spectral radius
//! `sqrt(0.9)`, so the oscillation decays about 5% per tick and stays
//! bounded without any explicit safeguard.
//!
//! # Example
//!
//! ```
//! use tui_spring_core::Body;
//! use tui_spring_types::SpringParams;
//!
//! let params = SpringParams::default();
//! let body = Body::new().stepped(&params);
//! assert!((body.position - -35.1).abs() < 1e-9);
//! ```

pub mod body;

pub use body::Body;
