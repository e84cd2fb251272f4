//! 统一错误类型定义.
//!
//! 各 crate 共用的错误类型. 注意: 码流解析入口 `parse` 从不向调用方返回错误,
//! 这里的错误只在内部与辅助 API (时间码字段解析, 位读取) 中传播.

use thiserror::Error;

/// SEI 提取统一错误类型
#[derive(Debug, Error)]
pub enum SeiError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 已到达数据末尾
    #[error("已到达数据末尾")]
    Eof,
}

/// SEI 提取统一 Result 类型
pub type SeiResult<T> = Result<T, SeiError>;
