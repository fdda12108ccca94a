//! The ship crossing the sea while a second sprite spins above it.
//!
//! Run from the repository root so `./assets` resolves.

use twod_scene::SceneConfig;

fn main() -> anyhow::Result<()> {
    twod_scene::run(SceneConfig::encounter())
}
