//! H.265/HEVC NAL (Network Abstraction Layer) 单元分割.
//!
//! HEVC NAL 头部为 2 字节, 这里只关心首字节中的 nal_unit_type (6 bits),
//! 用于筛选 SEI 单元.

use log::debug;

/// PREFIX_SEI 的 nal_unit_type
pub const NAL_TYPE_PREFIX_SEI: u8 = 39;

/// SUFFIX_SEI 的 nal_unit_type
pub const NAL_TYPE_SUFFIX_SEI: u8 = 40;

/// 从 NAL 头首字节提取 nal_unit_type
pub fn nal_unit_type(byte0: u8) -> u8 {
    (byte0 >> 1) & 0x3F
}

/// 是否为 SEI NAL (前缀或后缀)
pub fn is_sei_nal_type(nal_type: u8) -> bool {
    matches!(nal_type, NAL_TYPE_PREFIX_SEI | NAL_TYPE_SUFFIX_SEI)
}

// ============================================================
// Annex B 分割
// ============================================================

/// 判断 `window` 是否以起始码开头, 返回起始码长度
///
/// 调用方保证 `window` 至少有 4 字节.
fn start_code_len(window: &[u8]) -> Option<usize> {
    match window {
        [0, 0, 1, ..] => Some(3),
        [0, 0, 0, 1, ..] => Some(4),
        _ => None,
    }
}

/// 查找 Annex B 码流中所有 NAL 单元, 返回 `(偏移, 长度)` 列表
///
/// 每个单元从起始码之后开始, 到下一个起始码之前 (或缓冲区末尾) 结束.
/// 下一个起始码从单元起点后一个字节处开始查找, 找到后从该位置继续扫描,
/// 使该起始码本身作为下一轮的扫描起点. 缓冲区最后 3 个字节不作为起始码候选.
///
/// 不过滤过短的单元, 由调用方决定是否跳过.
pub fn find_nal_units(data: &[u8]) -> Vec<(usize, usize)> {
    let mut units = Vec::new();
    let mut i = 0;

    while i + 3 < data.len() {
        let Some(code_len) = start_code_len(&data[i..]) else {
            i += 1;
            continue;
        };

        let start = i + code_len;
        let end = (start + 1..)
            .take_while(|&j| j + 3 < data.len())
            .find(|&j| start_code_len(&data[j..]).is_some())
            .unwrap_or(data.len());

        units.push((start, end - start));
        i = end;
    }

    units
}

/// 移除 emulation prevention 字节 (0x03)
///
/// 每个 `00 00 03` 折叠为 `00 00`, 其余字节原样保留.
/// 移除 0x03 后从其下一个字节继续扫描, 因此相邻的 `00 00` 仍能被识别.
pub fn remove_emulation_prevention(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if i + 2 < data.len() && data[i] == 0 && data[i + 1] == 0 && data[i + 2] == 3 {
            out.push(0);
            out.push(0);
            i += 3; // 跳过 0x03
        } else {
            out.push(data[i]);
            i += 1;
        }
    }
    out
}

// ============================================================
// 格式转换
// ============================================================

/// 长度前缀 (MP4 样本 / hvcC) 格式 → Annex B 格式
///
/// `length_size` 不在 1..=4 范围内时按 4 处理.
/// 任一长度字段为 0 或超出剩余数据时, 认为输入已是 Annex B 或已损坏, 原样返回.
/// 末尾不足一个长度字段的残余字节被丢弃.
pub fn length_prefixed_to_annex_b(data: &[u8], length_size: usize) -> Vec<u8> {
    let length_size = if (1..=4).contains(&length_size) {
        length_size
    } else {
        4
    };

    let mut out = Vec::with_capacity(data.len() + data.len() / 8);
    let mut pos = 0;

    while pos + length_size <= data.len() {
        let len = data[pos..pos + length_size]
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
        pos += length_size;

        if len == 0 || len > data.len() - pos {
            debug!(
                "HEVC: 长度前缀无效, 按原始数据处理, len={}, remain={}",
                len,
                data.len() - pos
            );
            return data.to_vec();
        }

        out.extend_from_slice(&[0, 0, 0, 1]);
        out.extend_from_slice(&data[pos..pos + len]);
        pos += len;
    }

    out
}
