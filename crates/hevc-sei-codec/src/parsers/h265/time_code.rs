//! time_code (payloadType = 136) 载荷解码.
//!
//! 读取第一个时钟时间戳的字段 (H.265 D.2.27):
//! num_clock_ts(2), units_field_based_flag(1), counting_type(5),
//! full_timestamp_flag(1), discontinuity_flag(1), cnt_dropped_flag(1), n_frames(9),
//! 以及 full_timestamp_flag 置位时的 seconds(6), minutes(6), hours(5).
//!
//! 非完整时间戳 (full_timestamp_flag = 0) 不解析, 时分秒固定为 0.

use std::fmt;

use hevc_sei_core::{BitReader, SeiError, SeiResult};
use log::debug;

use crate::record::{SeiPayloadType, SeiRecord, TIMECODE_SENTINEL, hex_preview};

/// 时间码 SEI 字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeCode {
    pub num_clock_ts: u8,
    pub units_field_based_flag: bool,
    pub counting_type: u8,
    pub full_timestamp_flag: bool,
    pub discontinuity_flag: bool,
    pub cnt_dropped_flag: bool,
    pub n_frames: u16,
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
}

/// 格式化为 `HH:MM:SS:FF`, 各字段至少两位
impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.n_frames
        )
    }
}

/// 解析时间码字段
///
/// 载荷为空时返回 [`SeiError::Eof`]. 载荷在字段中途耗尽时不报错,
/// 缺失的位按 [`BitReader`] 的规则取部分值或 0.
pub fn parse_time_code(payload: &[u8]) -> SeiResult<TimeCode> {
    if payload.is_empty() {
        return Err(SeiError::Eof);
    }

    let mut br = BitReader::new(payload);
    let mut tc = TimeCode {
        num_clock_ts: br.read_bits(2)? as u8,
        units_field_based_flag: br.read_flag()?,
        counting_type: br.read_bits(5)? as u8,
        full_timestamp_flag: br.read_flag()?,
        discontinuity_flag: br.read_flag()?,
        cnt_dropped_flag: br.read_flag()?,
        n_frames: br.read_bits(9)? as u16,
        ..TimeCode::default()
    };

    if tc.full_timestamp_flag {
        tc.seconds = br.read_bits(6)? as u8;
        tc.minutes = br.read_bits(6)? as u8;
        tc.hours = br.read_bits(5)? as u8;
    }

    Ok(tc)
}

/// 解码 time_code 载荷为记录
///
/// `frame_number` 为调用方提供的时间码序号, 不读取载荷内容.
/// 载荷为空或字段解析失败时, 时间码字符串为 `--:--:--:--`.
pub fn decode_time_code(payload: &[u8], frame_number: u32) -> SeiRecord {
    let mut record = SeiRecord::empty(SeiPayloadType::TimeCode, frame_number);
    record.payload = payload.to_vec();
    record.raw_bytes = hex_preview(payload);
    record.timecode_string = match parse_time_code(payload) {
        Ok(tc) => tc.to_string(),
        Err(e) => {
            debug!("HEVC: SEI time_code 解析失败, 使用占位符: {}", e);
            TIMECODE_SENTINEL.to_string()
        }
    };
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 按 (值, 位宽) 依次打包为 MSB first 字节序列, 末尾补零
    fn pack_bits(fields: &[(u32, u32)]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut acc = 0u8;
        let mut filled = 0;
        for &(value, width) in fields {
            for shift in (0..width).rev() {
                acc = (acc << 1) | ((value >> shift) & 1) as u8;
                filled += 1;
                if filled == 8 {
                    out.push(acc);
                    acc = 0;
                    filled = 0;
                }
            }
        }
        if filled > 0 {
            out.push(acc << (8 - filled));
        }
        out
    }

    fn full_time_code_payload(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Vec<u8> {
        pack_bits(&[
            (1, 2),
            (0, 1),
            (0, 5),
            (1, 1),
            (0, 1),
            (0, 1),
            (frames, 9),
            (seconds, 6),
            (minutes, 6),
            (hours, 5),
        ])
    }

    #[test]
    fn test_打包辅助函数() {
        assert_eq!(
            full_time_code_payload(1, 2, 3, 4),
            vec![0x40, 0x80, 0x40, 0xC2, 0x08]
        );
    }

    #[test]
    fn test_完整时间戳() {
        let payload = full_time_code_payload(1, 2, 3, 4);
        let tc = parse_time_code(&payload).unwrap();
        assert_eq!(tc.num_clock_ts, 1);
        assert!(tc.full_timestamp_flag);
        assert_eq!(tc.n_frames, 4);
        assert_eq!(tc.seconds, 3);
        assert_eq!(tc.minutes, 2);
        assert_eq!(tc.hours, 1);
        assert_eq!(tc.to_string(), "01:02:03:04");

        let record = decode_time_code(&payload, 9);
        assert_eq!(record.payload_type, SeiPayloadType::TimeCode);
        assert_eq!(record.frame_number, 9);
        assert_eq!(record.timecode_string, "01:02:03:04");
        assert_eq!(record.payload, payload);
        assert_eq!(record.raw_bytes, "40 80 40 c2 08 ");
    }

    #[test]
    fn test_最大值格式化() {
        let payload = full_time_code_payload(23, 59, 59, 511);
        assert_eq!(decode_time_code(&payload, 0).timecode_string, "23:59:59:511");
    }

    #[test]
    fn test_非完整时间戳时分秒为零() {
        let payload = pack_bits(&[
            (1, 2),
            (1, 1),
            (4, 5),
            (0, 1),
            (1, 1),
            (1, 1),
            (25, 9),
            // 其后的位不应被解析为时分秒
            (0x3F, 6),
            (0x3F, 6),
        ]);
        let tc = parse_time_code(&payload).unwrap();
        assert!(!tc.full_timestamp_flag);
        assert!(tc.units_field_based_flag);
        assert_eq!(tc.counting_type, 4);
        assert!(tc.discontinuity_flag);
        assert!(tc.cnt_dropped_flag);
        assert_eq!((tc.hours, tc.minutes, tc.seconds), (0, 0, 0));
        assert_eq!(tc.to_string(), "00:00:00:25");
    }

    #[test]
    fn test_空载荷使用占位符() {
        assert!(matches!(parse_time_code(&[]), Err(SeiError::Eof)));

        let record = decode_time_code(&[], 0);
        assert_eq!(record.timecode_string, "--:--:--:--");
        assert!(record.payload.is_empty());
        assert!(record.raw_bytes.is_empty());
    }

    #[test]
    fn test_截断载荷不报错() {
        // 只有 1 字节: n_frames 等字段全部读到缓冲区之外
        let record = decode_time_code(&[0x40], 0);
        assert_eq!(record.timecode_string, "00:00:00:00");

        // 2 字节, full_timestamp_flag=1: n_frames 只读到 5 位, 时分秒为 0
        let record = decode_time_code(&[0x40, 0x81], 0);
        assert_eq!(record.timecode_string, "00:00:00:01");
    }
}
