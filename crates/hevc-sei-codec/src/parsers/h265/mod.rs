//! H.265/HEVC SEI 码流解析器.
//!
//! 提供从 HEVC Annex B 码流中提取 SEI 元数据的能力, 不解码视频:
//! - NAL 单元分割与 SEI 类型识别
//! - SEI 消息分帧 (payloadType / payloadSize 的 0xFF 扩展编码)
//! - 载荷 RBSP 反转义 (移除 emulation prevention 字节)
//! - user_data_unregistered 与 time_code 载荷解码
//! - 长度前缀 → Annex B 格式转换
//!
//! # HEVC NAL 头部 (2 字节)
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ forbidden(1) | type(6) | layer_id(6) | tid(3) │
//! └────────────────────────────────────────────┘
//! ```

pub mod nal;
pub mod sei;
pub mod time_code;
pub mod user_data;

pub use nal::{
    NAL_TYPE_PREFIX_SEI, NAL_TYPE_SUFFIX_SEI, find_nal_units, is_sei_nal_type,
    length_prefixed_to_annex_b, nal_unit_type, remove_emulation_prevention,
};
pub use sei::{SeiMessage, extract_sei_records, split_sei_messages};
pub use time_code::{TimeCode, decode_time_code, parse_time_code};
pub use user_data::{UUID_LEN, decode_user_data_unregistered, frame_number_from_uuid};
