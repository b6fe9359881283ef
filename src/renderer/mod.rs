//! Rendering module
//!
//! `scene` turns a session into plain draw data; `pipeline` pushes the
//! rectangles through WebGPU. HUD text is drawn by the host.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{GameOverBanner, Hud, Scene};
