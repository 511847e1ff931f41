//! # 隐写核心模块
//!
//! 消息的每一位 (最高有效位在前) 依次写入图像连续字节的最低有效位，
//! 一个消息字节占用 8 个图像字节。消息末尾追加 [`SENTINEL_COUNT`] 个
//! [`SENTINEL`]，解码时扫描到这样一段连续的结束标记即认为消息结束，
//! 因此图像中不需要保存消息长度。
//!
//! 结束标记只是概率上可靠：普通像素数据恰好解出连续的结束标记时，
//! 解码结果会是一段无意义的数据。

use crate::bits::{bits_to_byte_msb_first, byte_to_bits_msb_first, lsb, with_lsb};
use crate::capacity::{capacity, fits};
use crate::constants::{BITS_PER_BYTE, SENTINEL, SENTINEL_COUNT};
use crate::error::StegoError;
use crate::format::FormatDescriptor;
use crate::image_io::RawImage;
use log::{debug, trace};

/// 实际写入图像的数据：消息本身加上结束标记。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn new(message: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(message.len() + SENTINEL_COUNT);
        bytes.extend_from_slice(message);
        bytes.extend(std::iter::repeat_n(SENTINEL, SENTINEL_COUNT));
        Self(bytes)
    }

    /// 负载的字节数 (含结束标记)。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 按写入顺序给出负载的每一位。
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().flat_map(|&byte| byte_to_bits_msb_first(byte))
    }
}

/// 将消息隐藏到图像中。
///
/// 先按图像尺寸检查容量，检查通过后才修改像素；失败时像素保持原样。
///
/// # Errors
///
/// 消息加结束标记放不进图像时返回 [`StegoError::CapacityExceeded`]。
pub fn encode(
    image: &mut RawImage,
    format: FormatDescriptor,
    message: &[u8],
) -> Result<(), StegoError> {
    let payload = Payload::new(message);
    let available = capacity(image.width(), image.height(), format);

    if !fits(image.width(), image.height(), message.len(), format) {
        return Err(StegoError::CapacityExceeded {
            required: payload.len(),
            available,
        });
    }

    debug!(
        "Encoding {} message bytes (+{} sentinels) into {}x{} image, capacity {} bytes",
        message.len(),
        SENTINEL_COUNT,
        image.width(),
        image.height(),
        available
    );

    embed(image.pixels_mut(), &payload)
}

/// 将负载逐位写入 `pixels` 开头字节的最低有效位。
///
/// 只修改前 `payload.len() * 8` 个字节的最低位，其余的位与字节都不变。
/// 本函数不考虑图像尺寸，仅要求缓冲区足够长。
///
/// # Errors
///
/// 缓冲区不足以容纳全部负载位时返回 [`StegoError::CapacityExceeded`]，此时不修改缓冲区。
pub fn embed(pixels: &mut [u8], payload: &Payload) -> Result<(), StegoError> {
    let required_bits = payload.len().checked_mul(BITS_PER_BYTE);
    if required_bits.is_none_or(|bits| bits > pixels.len()) {
        return Err(StegoError::CapacityExceeded {
            required: payload.len(),
            available: pixels.len() / BITS_PER_BYTE,
        });
    }

    for (byte, bit) in pixels.iter_mut().zip(payload.bits()) {
        *byte = with_lsb(*byte, bit);
    }

    trace!("Embedded {} payload bytes", payload.len());
    Ok(())
}

/// 从图像中恢复消息。
///
/// 只扫描 `width * height * bytes_per_pixel` 范围内的字节。
/// 没有找到结束标记时返回空消息。
pub fn decode(image: &RawImage, format: FormatDescriptor) -> Vec<u8> {
    extract(scan_region(image, format))
}

/// 从缓冲区开头恢复消息，未找到结束标记时返回空消息。
pub fn extract(pixels: &[u8]) -> Vec<u8> {
    scan(pixels).unwrap_or_default()
}

/// 查找消息的结束位置 (即消息的字节长度)。
///
/// 返回 `None` 表示缓冲区中没有连续 [`SENTINEL_COUNT`] 个结束标记；
/// 返回 `Some(0)` 表示隐藏的是一条空消息。
pub fn find_message_end(pixels: &[u8]) -> Option<usize> {
    scan(pixels).map(|message| message.len())
}

/// 图像中是否可能存在隐藏消息。
pub fn may_message_exist(image: &RawImage, format: FormatDescriptor) -> bool {
    find_message_end(scan_region(image, format)).is_some()
}

fn scan_region(image: &RawImage, format: FormatDescriptor) -> &[u8] {
    let span = image.width() as usize * image.height() as usize * format.bytes_per_pixel;
    let pixels = image.pixels();
    &pixels[..span.min(pixels.len())]
}

/// 每 8 个字节还原一个字节，遇到第一段连续 [`SENTINEL_COUNT`] 个结束标记时停止。
fn scan(pixels: &[u8]) -> Option<Vec<u8>> {
    let mut recovered = Vec::new();
    let mut run_length = 0;

    for (group_index, group) in pixels.chunks_exact(BITS_PER_BYTE).enumerate() {
        let byte = read_byte(group);
        recovered.push(byte);

        if byte != SENTINEL {
            run_length = 0;
            continue;
        }

        run_length += 1;
        if run_length == SENTINEL_COUNT {
            let end = group_index + 1 - SENTINEL_COUNT;
            debug!("Found sentinel run ending at group {group_index}, message length {end}");
            recovered.truncate(end);
            return Some(recovered);
        }
    }

    debug!("No sentinel run found in {} bytes", pixels.len());
    None
}

fn read_byte(group: &[u8]) -> u8 {
    bits_to_byte_msb_first(std::array::from_fn(|i| lsb(group[i])))
}
