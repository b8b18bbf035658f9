//! View components.

pub mod particle_field;
