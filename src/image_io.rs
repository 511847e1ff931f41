//! # 图像读写模块
//!
//! 借助 `image` crate 读取和保存 PNG/BMP 图像。读取后的像素统一转换为 RGBA8，
//! 使每种受支持的格式都具有每像素 4 字节的布局。

use crate::error::StegoError;
use crate::format::ImageFormat;
use image::RgbaImage;
use log::debug;
use std::path::Path;

/// 已解码的原始像素数据。
///
/// 隐写过程只读写其中的字节，从不改变缓冲区长度。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RawImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

impl From<RgbaImage> for RawImage {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }
}

/// 读取图像文件并转换为 RGBA8 像素。
///
/// # Errors
///
/// 文件不存在或无法解码时返回 [`StegoError::ImageLoad`]。
pub fn load(path: &Path) -> Result<RawImage, StegoError> {
    let image = image::open(path).map_err(|source| StegoError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let image = RawImage::from(image.to_rgba8());
    debug!(
        "Loaded {} ({}x{}, {} bytes of pixel data)",
        path.display(),
        image.width,
        image.height,
        image.pixels.len()
    );

    Ok(image)
}

/// 以指定格式保存像素数据。
///
/// # Errors
///
/// 缓冲区长度与尺寸不符，或编码、写入失败时返回 [`StegoError::ImageSave`]。
pub fn save(image: &RawImage, path: &Path, format: ImageFormat) -> Result<(), StegoError> {
    let save_error = |source: image::ImageError| StegoError::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    let buffer = RgbaImage::from_raw(image.width, image.height, image.pixels.clone())
        .ok_or_else(|| {
            save_error(image::ImageError::Parameter(
                image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ),
            ))
        })?;

    buffer.save_with_format(path, format.into()).map_err(save_error)?;
    debug!("Saved {} as {}", path.display(), format.extension());

    Ok(())
}
