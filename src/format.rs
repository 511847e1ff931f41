//! # 图像格式模块
//!
//! 根据文件名的扩展名确定图像格式，以及该格式对应的字节布局。

use crate::constants::BITS_PER_BYTE;
use crate::error::StegoError;
use std::path::Path;

/// 支持的图像格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Bmp,
}

/// 某种图像格式的像素字节布局。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// 每个像素占用的字节数。
    pub bytes_per_pixel: usize,
    /// 隐藏一个消息字节所需的像素数。
    pub pixels_per_byte: usize,
}

impl FormatDescriptor {
    const fn with_stride(bytes_per_pixel: usize) -> Self {
        Self {
            bytes_per_pixel,
            pixels_per_byte: BITS_PER_BYTE / bytes_per_pixel,
        }
    }
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Bmp];

    /// 按扩展名查找格式。区分大小写：`"PNG"` 不被识别。
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == extension)
    }

    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// 格式对应的字节布局。
    ///
    /// PNG 为 RGBA，每像素 4 字节；BMP 的 RGB 像素被填充到 4 字节，步长与 PNG 相同。
    pub const fn descriptor(self) -> FormatDescriptor {
        match self {
            ImageFormat::Png => FormatDescriptor::with_stride(4),
            ImageFormat::Bmp => FormatDescriptor::with_stride(4),
        }
    }

    /// 文件名是否具有受支持的扩展名。
    pub fn is_supported(path: impl AsRef<Path>) -> bool {
        resolve_format(path).is_ok()
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// 从路径中解析图像格式。
///
/// 扩展名取文件名中第一个 `.` 之后的全部内容，因此 `archive.tar.png` 的扩展名为 `tar.png`，
/// 不被支持。目录名中的 `.` 不参与判断。
///
/// # Errors
///
/// 扩展名缺失或不受支持时返回 [`StegoError::UnsupportedFormat`]。
pub fn resolve_format(path: impl AsRef<Path>) -> Result<ImageFormat, StegoError> {
    let extension = path
        .as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split_once('.'))
        .map_or("", |(_, extension)| extension);

    ImageFormat::from_extension(extension).ok_or_else(|| StegoError::UnsupportedFormat {
        extension: extension.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_extensions() {
        assert_eq!(resolve_format("cat.png").unwrap(), ImageFormat::Png);
        assert_eq!(resolve_format("cat.bmp").unwrap(), ImageFormat::Bmp);
        assert_eq!(
            resolve_format("/tmp/.hidden.dir/cat.png").unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn descriptors_share_rgba_stride() {
        let expected = FormatDescriptor {
            bytes_per_pixel: 4,
            pixels_per_byte: 2,
        };
        assert_eq!(ImageFormat::Png.descriptor(), expected);
        assert_eq!(ImageFormat::Bmp.descriptor(), expected);
    }

    #[test]
    fn rejects_unknown_or_missing_extensions() {
        for name in ["cat.jpg", "cat", "cat.tar.png", "cat.", ""] {
            assert!(
                matches!(resolve_format(name), Err(StegoError::UnsupportedFormat { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn extension_matching_is_case_sensitive() {
        assert!(resolve_format("cat.PNG").is_err());
        assert!(!ImageFormat::is_supported("cat.Bmp"));
        assert!(ImageFormat::is_supported("cat.bmp"));
    }

    #[test]
    fn reports_offending_extension() {
        match resolve_format("photo.jpeg") {
            Err(StegoError::UnsupportedFormat { extension }) => assert_eq!(extension, "jpeg"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
