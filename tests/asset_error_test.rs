use twod_scene::{
    AssetLoadError,
    data_structures::texture::decode_rgba,
    resources::{load_binary, load_string},
};

use crate::common::test_utils::png_bytes;

mod common;

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let err = load_binary("does/not/exist.png").await.unwrap_err();
    assert!(matches!(err, AssetLoadError::Io { .. }));
    assert!(err.path().ends_with("does/not/exist.png"));
}

#[tokio::test]
async fn missing_shader_is_an_io_error() {
    let err = load_string("shaders/missing.wgsl").await.unwrap_err();
    assert!(matches!(err, AssetLoadError::Io { .. }));
    assert!(err.to_string().contains("missing.wgsl"));
}

#[tokio::test]
async fn shipped_shaders_are_readable() {
    let source = load_string("shaders/vertex_textured.wgsl").await.unwrap();
    assert!(source.contains("vs_main"));
}

#[test]
fn corrupt_bytes_are_a_decode_error() {
    let err = decode_rgba("FireNation.png", b"definitely not a png").unwrap_err();
    assert!(matches!(err, AssetLoadError::Decode { .. }));
    assert!(err.to_string().contains("FireNation.png"));
}

#[test]
fn truncated_png_is_a_decode_error() {
    let bytes = png_bytes(4, 4, [255, 0, 0, 255]);
    let err = decode_rgba("cut.png", &bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, AssetLoadError::Decode { .. }));
}

#[test]
fn valid_png_decodes_to_rgba() {
    let bytes = png_bytes(3, 2, [10, 20, 30, 128]);
    let rgba = decode_rgba("ok.png", &bytes).unwrap();
    assert_eq!(rgba.dimensions(), (3, 2));
    assert!(rgba.pixels().all(|p| p.0 == [10, 20, 30, 128]));
}

#[test]
fn rgb_input_gains_opaque_alpha() {
    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    let rgba = decode_rgba("rgb.png", bytes.get_ref()).unwrap();
    assert!(rgba.pixels().all(|p| p.0 == [1, 2, 3, 255]));
}

#[tokio::test]
async fn shipped_sprites_decode() {
    for file in ["FireNation.png", "Aang.png"] {
        let bytes = load_binary(file).await.unwrap();
        let rgba = decode_rgba(file, &bytes).unwrap();
        assert!(rgba.width() > 0 && rgba.height() > 0);
    }
}
