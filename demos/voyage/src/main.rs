//! The ship crossing the sea.
//!
//! Run from the repository root so `./assets` resolves.

use twod_scene::SceneConfig;

fn main() -> anyhow::Result<()> {
    twod_scene::run(SceneConfig::default())
}
