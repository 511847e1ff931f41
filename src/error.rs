//! # 错误模型模块
//!
//! 隐写核心逻辑使用统一的 [`StegoError`] 枚举报告错误，
//! 命令处理层再通过 `anyhow` 为其附加上下文。

use std::path::PathBuf;

/// 隐写编解码过程中可能出现的错误。
///
/// 解码时"没有找到消息"不属于错误，而是返回空消息。
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    #[error("File extension '{extension}' is not supported (supported: png, bmp)")]
    UnsupportedFormat { extension: String },

    #[error("Unable to load image '{}'", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to save image '{}'", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 消息加上结束标记超出了图像的容量。`required` 与 `available` 均以字节计。
    #[error("Not enough space in the image to hide the message (required: {required} bytes, available: {available} bytes)")]
    CapacityExceeded { required: usize, available: usize },

    #[error("'{0}' is not an 8-character binary string")]
    InvalidBinaryString(String),
}
