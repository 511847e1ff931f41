/// 每个字节的位数。
/// 消息中的每个字节需要占用图像中连续 8 个字节的最低有效位。
pub const BITS_PER_BYTE: usize = 8;

/// 消息结束标记字符 `'~'` (值 126)。
/// 该字符在普通图像数据中连续出现多次的概率很低，因此被选作结束标记。
pub const SENTINEL: u8 = b'~';

/// 追加在消息末尾的结束标记数量。
///
/// 解码器遇到连续 `SENTINEL_COUNT` 个结束标记时即认为消息结束。
/// 这只是概率上的保证：随机像素数据恰好产生这样一段序列的可能性极小，但并非不可能。
/// 改为显式长度前缀会改变已有隐写图像的数据格式。
pub const SENTINEL_COUNT: usize = 4;
