use crate::{
    data_structures::texture::{Texture, decode_rgba},
    error::AssetLoadError,
    resources::{asset_path, load_binary},
};

/// Read and decode an image, then upload it with nearest filtering.
///
/// The image is fully decoded before any GPU resource is created, so a
/// failure leaves nothing half-built behind.
pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
) -> Result<Texture, AssetLoadError> {
    let data = load_binary(file_name).await?;
    let rgba = decode_rgba(asset_path(file_name), &data)?;
    drop(data);
    log::info!(
        "loaded texture {file_name} ({}x{})",
        rgba.width(),
        rgba.height()
    );
    Ok(Texture::from_rgba(device, queue, layout, rgba, file_name))
}
