//! 比特流读取器.
//!
//! 按大端位序 (MSB first) 从字节缓冲区中读取位字段, 供 SEI 载荷 (如时间码) 的位级解析使用.
//!
//! 与严格的解码器读取器不同, 该读取器在数据耗尽时不报错:
//! 读取中途遇到缓冲区末尾时, 返回已累积的值 (缺失的高位视为 0).
//! 调用方需要容忍缓冲区边界附近出现降级/全零的字段值.

use crate::{SeiError, SeiResult};

/// 比特流读取器
///
/// # 示例
/// ```
/// use hevc_sei_core::bitreader::BitReader;
///
/// let data = [0b10110001, 0b01010101];
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read_bits(4).unwrap(), 0b1011);
/// assert_eq!(br.read_bits(4).unwrap(), 0b0001);
/// assert_eq!(br.read_bits(8).unwrap(), 0b01010101);
/// // 数据已耗尽, 返回 0 而不是错误
/// assert_eq!(br.read_bits(3).unwrap(), 0);
/// ```
pub struct BitReader<'a> {
    /// 源数据
    data: &'a [u8],
    /// 当前字节索引
    byte_pos: usize,
    /// 当前字节中的位位置 (0-7, 0 表示最高位)
    bit_pos: u8,
}

impl<'a> BitReader<'a> {
    /// 创建新的比特流读取器
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// 获取剩余可读位数
    pub fn bits_left(&self) -> usize {
        if self.byte_pos >= self.data.len() {
            return 0;
        }
        (self.data.len() - self.byte_pos) * 8 - self.bit_pos as usize
    }

    /// 读取 N 个位 (最多 32 位)
    ///
    /// 按大端位序逐位读取, 可跨越字节边界.
    /// 数据耗尽时提前返回已累积的值, 不会越界也不会报错;
    /// 仅当 `n` 超过 32 时返回 [`SeiError::InvalidArgument`].
    pub fn read_bits(&mut self, n: u32) -> SeiResult<u32> {
        if n > 32 {
            return Err(SeiError::InvalidArgument(format!(
                "read_bits: n={n} 超过 32 位"
            )));
        }

        let mut value: u32 = 0;
        for _ in 0..n {
            let Some(&byte) = self.data.get(self.byte_pos) else {
                return Ok(value);
            };

            let bit = (byte >> (7 - self.bit_pos)) & 1;
            value = (value << 1) | u32::from(bit);

            self.bit_pos += 1;
            if self.bit_pos >= 8 {
                self.bit_pos = 0;
                self.byte_pos += 1;
            }
        }

        Ok(value)
    }

    /// 读取 1 个标志位
    pub fn read_flag(&mut self) -> SeiResult<bool> {
        Ok(self.read_bits(1)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits_basic() {
        let data = [0b10110001, 0b01010101];
        let mut br = BitReader::new(&data);

        assert_eq!(br.read_bits(1).unwrap(), 1);
        assert_eq!(br.read_bits(1).unwrap(), 0);
        assert_eq!(br.read_bits(2).unwrap(), 0b11);
        assert_eq!(br.read_bits(4).unwrap(), 0b0001);
        assert_eq!(br.read_bits(8).unwrap(), 0b01010101);

        assert_eq!(br.bits_left(), 0);
    }

    #[test]
    fn test_read_bits_跨字节() {
        let data = [0b0000_0001, 0b1000_0000];
        let mut br = BitReader::new(&data);
        br.read_bits(7).unwrap();
        assert_eq!(br.read_bits(2).unwrap(), 0b11);
        assert_eq!(br.bits_left(), 7);
    }

    #[test]
    fn test_read_bits_32_bit() {
        let data = [0xFF, 0x00, 0xFF, 0x00];
        let mut br = BitReader::new(&data);
        assert_eq!(br.read_bits(32).unwrap(), 0xFF00FF00);
    }

    #[test]
    fn test_read_bits_超过32位报错() {
        let data = [0xFF; 8];
        let mut br = BitReader::new(&data);
        assert!(br.read_bits(33).is_err());
        // 报错不消耗任何位
        assert_eq!(br.bits_left(), 64);
    }

    #[test]
    fn test_read_bits_零位() {
        let data = [0xFF];
        let mut br = BitReader::new(&data);
        assert_eq!(br.read_bits(0).unwrap(), 0);
        assert_eq!(br.bits_left(), 8);
    }

    #[test]
    fn test_读取越界返回部分值() {
        // 只剩 4 位 (0b1011), 请求 9 位: 返回已累积的 0b1011
        let data = [0b0000_1011];
        let mut br = BitReader::new(&data);
        br.read_bits(4).unwrap();
        assert_eq!(br.read_bits(9).unwrap(), 0b1011);
        assert_eq!(br.bits_left(), 0);
        assert_eq!(br.read_bits(6).unwrap(), 0);
    }

    #[test]
    fn test_空缓冲区() {
        let mut br = BitReader::new(&[]);
        assert_eq!(br.bits_left(), 0);
        assert_eq!(br.read_bits(5).unwrap(), 0);
        assert!(!br.read_flag().unwrap());
    }

    #[test]
    fn test_bits_left() {
        let data = [0x00, 0x00];
        let mut br = BitReader::new(&data);

        assert_eq!(br.bits_left(), 16);
        br.read_bits(5).unwrap();
        assert_eq!(br.bits_left(), 11);
        br.read_bits(11).unwrap();
        assert_eq!(br.bits_left(), 0);
    }
}
