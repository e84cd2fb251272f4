//! # hevc-sei-codec
//!
//! HEVC SEI 码流解析引擎. 从 Annex B 码流中扫描 SEI NAL 单元,
//! 解码 user_data_unregistered (payloadType 5) 与 time_code (payloadType 136) 载荷.
//!
//! ## 使用示例
//!
//! ```rust
//! use hevc_sei_codec::{SeiParser, SeiPayloadType};
//!
//! // 起始码 + PREFIX_SEI 头 + time_code 消息 + RBSP 尾部
//! let data = [0x00, 0x00, 0x01, 0x4E, 0x01, 0x88, 0x01, 0x40, 0x80];
//! let records = SeiParser::new().parse(&data);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].payload_type, SeiPayloadType::TimeCode);
//! assert_eq!(records[0].frame_number, 0);
//! ```

pub mod parser;
pub mod parsers;
pub mod record;

// 重导出常用类型
pub use parser::{SeiParser, parse};
pub use record::{SeiPayloadType, SeiRecord, hex_preview};
