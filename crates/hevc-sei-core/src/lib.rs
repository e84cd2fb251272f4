//! # hevc-sei-core
//!
//! HEVC SEI 提取库核心 crate, 提供统一错误类型与位级读取工具.

pub mod bitreader;
pub mod error;

// 重导出常用类型
pub use bitreader::BitReader;
pub use error::{SeiError, SeiResult};
