//! The animated vault emblem.
//!
//! - `elements` — the four time-driven sub-assemblies (shield plate, dual
//!   ring assembly, segmented core ring, energy core)
//! - `camera`   — auto-rotating orbit camera with a clamped polar band
//! - `host`     — scene ownership, mount/unmount lifecycle, per-frame clock
//!
//! Every pose is a pure function of a single per-frame elapsed-time sample;
//! there is no cross-element state and no frame-to-frame accumulation.

pub mod camera;
pub mod elements;
pub mod host;

pub use camera::OrbitCamera;
pub use host::SceneHost;
