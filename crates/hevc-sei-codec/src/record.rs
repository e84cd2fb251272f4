//! SEI 提取结果记录.
//!
//! 每条解码成功的 SEI 消息对应一条 [`SeiRecord`], 创建后不再修改.
//! 序列化字段名与宿主侧边界层约定一致: `type`, `frameNumber`, `payload`,
//! `jsonPayload`, `timecodeString`, `rawBytes`.

use std::fmt;

use serde::{Serialize, Serializer};

/// 用户数据缺失时的 JSON 占位
pub const EMPTY_JSON: &str = "{}";

/// 时间码无法解码时的占位字符串
pub const TIMECODE_SENTINEL: &str = "--:--:--:--";

/// 十六进制预览最多展示的字节数
pub const HEX_PREVIEW_LIMIT: usize = 32;

/// 产出记录的 SEI 载荷类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SeiPayloadType {
    /// user_data_unregistered (payloadType = 5)
    UserDataUnregistered = 5,
    /// time_code (payloadType = 136)
    TimeCode = 136,
}

impl SeiPayloadType {
    /// 按 payloadType 数值识别, 其他类型返回 None
    pub fn from_payload_type(payload_type: u32) -> Option<Self> {
        match payload_type {
            5 => Some(Self::UserDataUnregistered),
            136 => Some(Self::TimeCode),
            _ => None,
        }
    }

    /// payloadType 数值
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SeiPayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UserDataUnregistered => "user_data_unregistered",
            Self::TimeCode => "time_code",
        };
        f.pad(name)
    }
}

// 序列化为数值, 与宿主侧读取 `type` 字段的方式一致
impl Serialize for SeiPayloadType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// 一条 SEI 提取结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeiRecord {
    /// SEI 载荷类型
    #[serde(rename = "type")]
    pub payload_type: SeiPayloadType,
    /// 帧号: user data 取自 UUID 前 4 字节, 时间码为本次调用内的时间码序号
    pub frame_number: u32,
    /// 反转义后的载荷字节 (降级路径下可能为空)
    pub payload: Vec<u8>,
    /// user data 的文本内容, 缺失时为 `{}`
    pub json_payload: String,
    /// 时间码字符串 `HH:MM:SS:FF` 或占位符
    pub timecode_string: String,
    /// 载荷的十六进制预览
    pub raw_bytes: String,
}

impl SeiRecord {
    /// 创建除类型与帧号外均为空的记录
    pub(crate) fn empty(payload_type: SeiPayloadType, frame_number: u32) -> Self {
        Self {
            payload_type,
            frame_number,
            payload: Vec::new(),
            json_payload: String::new(),
            timecode_string: String::new(),
            raw_bytes: String::new(),
        }
    }
}

/// 生成十六进制预览
///
/// 每个字节输出为两位小写十六进制加一个空格, 最多 [`HEX_PREVIEW_LIMIT`] 字节,
/// 超出部分以 `...` 结尾.
pub fn hex_preview(data: &[u8]) -> String {
    let mut out: String = data
        .iter()
        .take(HEX_PREVIEW_LIMIT)
        .map(|byte| format!("{byte:02x} "))
        .collect();
    if data.len() > HEX_PREVIEW_LIMIT {
        out.push_str("...");
    }
    out
}
