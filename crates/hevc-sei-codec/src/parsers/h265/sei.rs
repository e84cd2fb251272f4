//! HEVC SEI 消息分帧与分发.
//!
//! 一个 SEI NAL 单元内可以依次携带多条 SEI 消息:
//! ```text
//! ┌──────────┬───────────────┬───────────────┬─────────────┬──────┬─────┐
//! │ NAL 头(2) │ payloadType   │ payloadSize   │ payload ... │ 0x80 │ ... │
//! │          │ (0xFF 扩展编码) │ (0xFF 扩展编码) │             │(可选) │     │
//! └──────────┴───────────────┴───────────────┴─────────────┴──────┴─────┘
//! ```
//!
//! 分帧直接在原始 NAL 字节上进行: payloadType / payloadSize 读自原始字节,
//! payloadSize 按原始字节计数 (含 emulation prevention 字节), 游标也按原始长度前进.
//! 切出的载荷在分发给解码器之前单独移除 emulation prevention 字节.
//!
//! 格式错误时只放弃当前 NAL 单元的剩余部分, 已解出的消息保留, 不产生错误.

use log::{debug, trace};

use super::nal::remove_emulation_prevention;
use super::time_code::decode_time_code;
use super::user_data::{decode_user_data_unregistered, frame_number_from_uuid};
use crate::record::{SeiPayloadType, SeiRecord};

/// RBSP 停止位 + 字节对齐
const RBSP_TRAILING_BYTE: u8 = 0x80;

/// 一条已分帧的 SEI 消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeiMessage<'a> {
    /// payloadType
    pub payload_type: u32,
    /// 载荷 (原始字节, 尚未反转义)
    pub payload: &'a [u8],
}

/// 读取 0xFF 扩展编码的值: 每个 0xFF 累加 255, 遇到第一个小于 0xFF 的字节时累加并结束
///
/// 数据在结束字节之前耗尽时返回 None.
fn read_sei_ff_coded_value(data: &[u8], offset: &mut usize) -> Option<u32> {
    let mut value = 0u32;
    loop {
        let byte = *data.get(*offset)?;
        *offset += 1;
        value = value.saturating_add(u32::from(byte));
        if byte != 0xFF {
            return Some(value);
        }
    }
}

/// 将 SEI 消息区 (NAL 头之后的原始字节) 切分为消息列表
///
/// 遇到截断的 type/size 或声明长度超出剩余数据时停止, 返回此前已切分的消息.
/// 每条消息之后若紧跟 0x80 则跳过该字节.
pub fn split_sei_messages(data: &[u8]) -> Vec<SeiMessage<'_>> {
    let mut messages = Vec::new();
    let mut offset = 0usize;

    while offset < data.len() {
        let Some(payload_type) = read_sei_ff_coded_value(data, &mut offset) else {
            trace!("HEVC: SEI payload_type 截断, offset={}", offset);
            break;
        };
        let Some(payload_size) = read_sei_ff_coded_value(data, &mut offset) else {
            trace!(
                "HEVC: SEI payload_size 截断, type={}, offset={}",
                payload_type, offset
            );
            break;
        };

        let payload_size = payload_size as usize;
        let remain = data.len() - offset;
        if payload_size > remain {
            debug!(
                "HEVC: SEI payload 截断, 放弃剩余消息, type={}, size={}, remain={}",
                payload_type, payload_size, remain
            );
            break;
        }

        messages.push(SeiMessage {
            payload_type,
            payload: &data[offset..offset + payload_size],
        });
        offset += payload_size;

        if data.get(offset) == Some(&RBSP_TRAILING_BYTE) {
            offset += 1;
        }
    }

    messages
}

/// 从一个 SEI NAL 单元 (含 2 字节 NAL 头) 中提取记录
///
/// 只为 user_data_unregistered 与 time_code 产生记录, 其余类型跳过.
/// `time_code_counter` 为当前调用内的时间码序号, 每产生一条时间码记录后加 1.
pub fn extract_sei_records(nal: &[u8], time_code_counter: &mut u32) -> Vec<SeiRecord> {
    // NAL 头 + 至少 1 字节消息
    if nal.len() < 3 {
        return Vec::new();
    }

    split_sei_messages(&nal[2..])
        .into_iter()
        .filter_map(|msg| {
            let payload_type = SeiPayloadType::from_payload_type(msg.payload_type)?;
            let payload = remove_emulation_prevention(msg.payload);
            Some(match payload_type {
                SeiPayloadType::UserDataUnregistered => {
                    let frame_number = frame_number_from_uuid(&payload).unwrap_or(0);
                    decode_user_data_unregistered(&payload, frame_number)
                }
                SeiPayloadType::TimeCode => {
                    let frame_number = *time_code_counter;
                    *time_code_counter = time_code_counter.wrapping_add(1);
                    decode_time_code(&payload, frame_number)
                }
            })
        })
        .collect()
}
