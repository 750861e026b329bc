//! wgpu render backend for the result viewer.
//!
//! Renders the single active drawable (stress mesh, particle cloud, or
//! field polyline) with a damped orbit camera and a gentle idle rotation.
//!
//! # Invariants
//! - At most one drawable is resident at a time; replacing it destroys
//!   the previous GPU buffers first.
//! - All renderer methods are no-ops after disposal.
//! - Camera damping advances only through [`OrbitCamera::update`], once
//!   per render tick.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::{IDLE_SPIN_STEP, SceneRenderer};
