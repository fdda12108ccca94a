//! twod-scene
//!
//! A minimal 2D scene rendered every frame with wgpu: a flat-coloured sea, a
//! textured ship drifting right and, optionally, a textured sprite spinning
//! about a fixed pivot. All resources are created once at start-up and owned
//! by the running app.
//!
//! High-level modules
//! - `animation`: per-frame integration of the ship offset and spinner angle
//! - `config`: every fixed value of the scene, picked by the demos
//! - `context`: window, surface, device and queue
//! - `data_structures`: constant vertex data, textures and drawable quads
//! - `error`: asset loading failures
//! - `flow`: the frame loop state machine and the winit event loop
//! - `pipelines`: shader programs, their uniforms and attribute locations
//! - `render`: the ordered draw list a scene yields each frame
//! - `resources`: helpers to load shader sources and textures from disk
//! - `scene`: the scene itself, tying everything together
//! - `time`: tick-based frame timing
//!

pub mod animation;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
pub mod time;

// Re-exports commonly used types for convenience in downstream code.
pub use config::SceneConfig;
pub use error::AssetLoadError;
pub use flow::run;
