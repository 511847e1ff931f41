//! # lsb_sentinel 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：消息逐位写入图像字节的最低有效位，
//! 并以连续的 `~` 结束标记代替长度字段。

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod error;
pub mod format;
pub mod handler;
pub mod image_io;
pub mod steganography;

pub use error::StegoError;
pub use format::{FormatDescriptor, ImageFormat, resolve_format};
