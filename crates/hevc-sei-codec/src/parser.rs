//! SEI 提取入口.
//!
//! [`SeiParser`] 扫描整段 Annex B 码流, 过滤出 SEI 前缀/后缀 NAL 单元,
//! 逐条提取 SEI 消息并按码流中的出现顺序返回记录.

use log::trace;

use crate::parsers::h265::nal::{find_nal_units, is_sei_nal_type, nal_unit_type};
use crate::parsers::h265::sei::extract_sei_records;
use crate::record::SeiRecord;

/// HEVC SEI 解析器
///
/// 持有当前调用内的时间码序号, 每次 [`SeiParser::parse`] 开始时清零.
///
/// 一个实例同一时间只能服务一次调用 (`parse` 需要 `&mut self`).
/// 并发解析不同输入时, 每个线程各自创建实例; 不要在多个调用之间交错共享同一实例,
/// 否则时间码序号会被重置而错乱.
#[derive(Debug, Default)]
pub struct SeiParser {
    time_code_counter: u32,
}

impl SeiParser {
    /// 创建解析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析整段码流, 返回全部 SEI 记录
    ///
    /// 对任意输入 (包括空, 截断或随机数据) 都会返回, 从不失败.
    pub fn parse(&mut self, data: &[u8]) -> Vec<SeiRecord> {
        self.time_code_counter = 0;

        let mut records = Vec::new();
        for (offset, len) in find_nal_units(data) {
            if len < 2 {
                trace!("HEVC: 跳过过短的 NAL 单元, offset={}, len={}", offset, len);
                continue;
            }

            let nal = &data[offset..offset + len];
            if !is_sei_nal_type(nal_unit_type(nal[0])) {
                continue;
            }

            records.extend(extract_sei_records(nal, &mut self.time_code_counter));
        }

        trace!(
            "HEVC: SEI 解析完成, bytes={}, records={}",
            data.len(),
            records.len()
        );
        records
    }
}

/// 使用一个新的解析器实例解析整段码流
pub fn parse(data: &[u8]) -> Vec<SeiRecord> {
    SeiParser::new().parse(data)
}
