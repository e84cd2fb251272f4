//! user_data_unregistered (payloadType = 5) 载荷解码.
//!
//! 载荷结构: 16 字节 UUID + 任意用户数据. 这里约定 UUID 前 4 字节以大端序携带帧号,
//! 其余字节按文本 (通常为 JSON) 原样提取, 不做任何格式校验.

use log::debug;

use crate::record::{EMPTY_JSON, SeiPayloadType, SeiRecord, hex_preview};

/// UUID 前缀长度
pub const UUID_LEN: usize = 16;

/// 从 UUID 前缀提取帧号 (前 4 字节, 大端序)
///
/// 载荷不足 16 字节 (没有完整 UUID) 时返回 None.
pub fn frame_number_from_uuid(payload: &[u8]) -> Option<u32> {
    match *payload {
        [b0, b1, b2, b3, ..] if payload.len() >= UUID_LEN => {
            Some(u32::from_be_bytes([b0, b1, b2, b3]))
        }
        _ => None,
    }
}

/// 解码 user_data_unregistered 载荷
///
/// - 不足 16 字节: 降级输出, 只有 `json_payload = "{}"`, 载荷与十六进制预览留空.
/// - UUID 之后没有数据: `json_payload = "{}"`.
/// - 否则 UUID 之后的字节按文本原样保存; 非 UTF-8 字节以替换字符表示.
///
/// `frame_number` 由调用方事先从 UUID 推导, 原样写入记录.
pub fn decode_user_data_unregistered(payload: &[u8], frame_number: u32) -> SeiRecord {
    let mut record = SeiRecord::empty(SeiPayloadType::UserDataUnregistered, frame_number);

    if payload.len() < UUID_LEN {
        debug!(
            "HEVC: SEI user_data_unregistered 不足 UUID 长度, len={}",
            payload.len()
        );
        record.json_payload = EMPTY_JSON.to_string();
        return record;
    }

    let user_data = &payload[UUID_LEN..];
    record.json_payload = if user_data.is_empty() {
        EMPTY_JSON.to_string()
    } else {
        String::from_utf8_lossy(user_data).into_owned()
    };
    record.payload = payload.to_vec();
    record.raw_bytes = hex_preview(payload);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid_with_frame(frame: u32) -> Vec<u8> {
        let mut uuid = frame.to_be_bytes().to_vec();
        uuid.extend_from_slice(&[0xA5; 12]);
        uuid
    }

    #[test]
    fn test_uuid_帧号() {
        let mut payload = vec![0x00, 0x00, 0x00, 0x2A];
        payload.extend_from_slice(&[0xFF; 12]);
        assert_eq!(frame_number_from_uuid(&payload), Some(42));
        assert_eq!(frame_number_from_uuid(&uuid_with_frame(0xDEAD_BEEF)), Some(0xDEAD_BEEF));
        assert_eq!(frame_number_from_uuid(&payload[..15]), None);
    }

    #[test]
    fn test_解码_json_文本() {
        let mut payload = uuid_with_frame(7);
        payload.extend_from_slice(br#"{"lat":1.5}"#);

        let record = decode_user_data_unregistered(&payload, 7);
        assert_eq!(record.payload_type, SeiPayloadType::UserDataUnregistered);
        assert_eq!(record.frame_number, 7);
        assert_eq!(record.json_payload, r#"{"lat":1.5}"#);
        assert_eq!(record.payload, payload);
        assert!(record.raw_bytes.starts_with("00 00 00 07 a5 "));
        assert!(record.timecode_string.is_empty());
    }

    #[test]
    fn test_非_json_文本原样保留() {
        let mut payload = uuid_with_frame(1);
        payload.extend_from_slice(b"not json {");
        let record = decode_user_data_unregistered(&payload, 1);
        assert_eq!(record.json_payload, "not json {");
    }

    #[test]
    fn test_只有_uuid() {
        let payload = uuid_with_frame(3);
        let record = decode_user_data_unregistered(&payload, 3);
        assert_eq!(record.json_payload, "{}");
        assert_eq!(record.payload.len(), 16);
        assert!(!record.raw_bytes.is_empty());
    }

    #[test]
    fn test_不足_uuid_降级() {
        let record = decode_user_data_unregistered(&[0x01, 0x02, 0x03], 0);
        assert_eq!(record.json_payload, "{}");
        assert!(record.payload.is_empty());
        assert!(record.raw_bytes.is_empty());
        assert_eq!(record.frame_number, 0);
    }
}
