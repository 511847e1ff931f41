//! # 位运算模块
//!
//! 隐写过程中所有的位操作都集中在这里，编码器与解码器只调用这些函数，
//! 不再各自计算位下标。
//!
//! 位置 `position` 均从最低有效位开始计数，取值范围 `0..8`。

use crate::constants::BITS_PER_BYTE;
use crate::error::StegoError;

/// 读取 `value` 在 `position` 处的位。
pub const fn bit_at(value: u8, position: u32) -> bool {
    debug_assert!(position < BITS_PER_BYTE as u32);
    value & (1 << position) != 0
}

/// 返回仅将 `position` 处的位设置为 `bit` 后的 `value`，其余各位保持不变。
pub const fn with_bit(value: u8, position: u32, bit: bool) -> u8 {
    debug_assert!(position < BITS_PER_BYTE as u32);
    let mask = 1 << position;
    if bit { value | mask } else { value & !mask }
}

/// 读取最低有效位。
pub const fn lsb(value: u8) -> bool {
    bit_at(value, 0)
}

/// 替换最低有效位。
pub const fn with_lsb(value: u8, bit: bool) -> u8 {
    with_bit(value, 0, bit)
}

/// 将一个字节拆分为 8 个位，最高有效位在前。
pub fn byte_to_bits_msb_first(value: u8) -> [bool; BITS_PER_BYTE] {
    std::array::from_fn(|i| bit_at(value, (BITS_PER_BYTE - 1 - i) as u32))
}

/// 将 8 个位 (最高有效位在前) 重新组合为一个字节。
pub fn bits_to_byte_msb_first(bits: [bool; BITS_PER_BYTE]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0, |byte, (i, &bit)| {
            with_bit(byte, (BITS_PER_BYTE - 1 - i) as u32, bit)
        })
}

/// 字节的 8 字符二进制表示，例如 `65` -> `"01000001"`。
pub fn to_binary_string(value: u8) -> String {
    byte_to_bits_msb_first(value)
        .iter()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

/// 解析 [`to_binary_string`] 生成的二进制字符串。
///
/// # Errors
///
/// 字符串长度不是 8，或包含 `0`、`1` 以外的字符时，返回 [`StegoError::InvalidBinaryString`]。
pub fn from_binary_string(binary: &str) -> Result<u8, StegoError> {
    let invalid = || StegoError::InvalidBinaryString(binary.to_owned());

    let chars: Vec<char> = binary.chars().collect();
    let chars: [char; BITS_PER_BYTE] = chars.try_into().map_err(|_| invalid())?;

    let mut bits = [false; BITS_PER_BYTE];
    for (bit, c) in bits.iter_mut().zip(chars) {
        *bit = match c {
            '0' => false,
            '1' => true,
            _ => return Err(invalid()),
        };
    }

    Ok(bits_to_byte_msb_first(bits))
}
