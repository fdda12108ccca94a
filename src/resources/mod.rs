use std::path::{Path, PathBuf};

use crate::{
    error::AssetLoadError,
    pipelines::program::{ProgramKind, ShaderProgram},
};

/**
 * This module contains all logic for loading shader sources and textures from
 * the asset directory.
 */
pub mod texture;

/// Every asset path is resolved against this directory.
pub const ASSET_DIR: &str = "assets";

pub fn asset_path(file_name: &str) -> PathBuf {
    Path::new("./").join(ASSET_DIR).join(file_name)
}

pub async fn load_string(file_name: &str) -> Result<String, AssetLoadError> {
    let path = asset_path(file_name);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| AssetLoadError::Io { path, source })
}

pub async fn load_binary(file_name: &str) -> Result<Vec<u8>, AssetLoadError> {
    let path = asset_path(file_name);
    tokio::fs::read(&path)
        .await
        .map_err(|source| AssetLoadError::Io { path, source })
}

/// Read a vertex and a fragment source file and build a program from them.
pub async fn load_program(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    vertex_file: &str,
    fragment_file: &str,
    kind: ProgramKind<'_>,
) -> Result<ShaderProgram, AssetLoadError> {
    let (vertex_source, fragment_source) =
        futures::try_join!(load_string(vertex_file), load_string(fragment_file))?;
    log::info!("loaded shaders {vertex_file} and {fragment_file}");
    Ok(ShaderProgram::new(
        device,
        color_format,
        &vertex_source,
        &fragment_source,
        kind,
    ))
}
