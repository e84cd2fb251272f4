//! # hevc-sei
//!
//! 纯 Rust 实现的 HEVC (H.265) SEI 元数据提取库, 无需解码视频.
//!
//! 从 Annex B 码流中扫描 SEI NAL 单元 (PREFIX_SEI=39 / SUFFIX_SEI=40), 解码:
//! - **user_data_unregistered** (payloadType 5): UUID 前 4 字节为帧号, 其后为应用自定义文本 (通常为 JSON)
//! - **time_code** (payloadType 136): 位级时间码字段, 格式化为 `HH:MM:SS:FF`
//!
//! 解析对任意输入都不会失败: 格式错误的部分被静默跳过, 已提取的记录保留.
//!
//! # 快速开始
//!
//! ```rust
//! // 起始码 + PREFIX_SEI 头 + time_code 消息 + RBSP 尾部
//! let data = [0x00, 0x00, 0x00, 0x01, 0x4E, 0x01, 0x88, 0x01, 0x40, 0x80];
//! let records = hevc_sei::parse(&data);
//! assert_eq!(records.len(), 1);
//! println!("帧 {}: {}", records[0].frame_number, records[0].timecode_string);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `hevc-sei-core` | 错误类型与位读取器 |
//! | `hevc-sei-codec` | NAL 分割, RBSP 反转义, SEI 提取与载荷解码 |

pub mod logging;

/// 核心类型与工具
pub use hevc_sei_core as core;

/// SEI 码流解析引擎
pub use hevc_sei_codec as codec;

pub use hevc_sei_codec::{SeiParser, SeiPayloadType, SeiRecord, parse};

/// 获取版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
