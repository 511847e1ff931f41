//! # 容量检查模块
//!
//! 在写入图像之前判断消息 (连同结束标记) 能否放入图像。

use crate::constants::{BITS_PER_BYTE, SENTINEL_COUNT};
use crate::format::FormatDescriptor;

/// 图像可容纳的消息字节数上限 (含结束标记)。
///
/// 计算方式为 `(width * height / pixels_per_byte) / 8`。
pub fn capacity(width: u32, height: u32, format: FormatDescriptor) -> usize {
    let pixels = width as usize * height as usize;
    pixels / format.pixels_per_byte / BITS_PER_BYTE
}

/// 长度为 `message_len` 的消息在追加结束标记后能否放入图像。
///
/// 使用严格小于比较，至少保留一个字节的余量。
pub fn fits(width: u32, height: u32, message_len: usize, format: FormatDescriptor) -> bool {
    message_len
        .checked_add(SENTINEL_COUNT)
        .is_some_and(|required| required < capacity(width, height, format))
}
