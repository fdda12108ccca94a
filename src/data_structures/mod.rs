//! Scene data: vertex data, textures and the quads built from them.
//!
//! - `quad` holds the constant vertex arrays and their GPU buffers
//! - `texture` contains the GPU texture wrapper and image decoding
//! - `sprite` combines both into drawable textured and flat quads

pub mod quad;
pub mod sprite;
pub mod texture;
