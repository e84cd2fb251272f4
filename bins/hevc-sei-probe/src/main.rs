//! hevc-sei-probe - HEVC SEI 元数据探测工具
//!
//! 读取 HEVC 码流文件, 提取其中的 user_data_unregistered 与 time_code SEI 并输出.
//! 多个输入文件并行解析, 每个文件使用独立的解析器实例.

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

use hevc_sei::logging::{self, LoggingConfig};
use hevc_sei::{SeiParser, SeiPayloadType, SeiRecord};
use hevc_sei_codec::parsers::h265::length_prefixed_to_annex_b;

/// HEVC SEI 元数据探测工具
#[derive(Parser, Debug)]
#[command(name = "hevc-sei-probe", version, about = "纯 Rust HEVC SEI 元数据探测工具")]
struct Cli {
    /// 输入文件路径 (Annex B 码流)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// 输入为长度前缀格式 (MP4 样本), 指定长度字段字节数 (1-4)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    length_size: Option<u8>,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 静默模式 (不向终端输出日志)
    #[arg(short, long)]
    quiet: bool,

    /// 日志详细程度 (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 日志文件目录
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

// ============================================================
// JSON 输出结构体
// ============================================================

/// 完整探测结果
#[derive(Serialize)]
struct ProbeOutput<'a> {
    files: Vec<&'a FileReport>,
}

/// 单个文件的提取结果
#[derive(Serialize)]
struct FileReport {
    path: String,
    records: Vec<SeiRecord>,
}

// ============================================================
// 主逻辑
// ============================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = LoggingConfig {
        level: match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
        .to_string(),
        directory: cli.log_dir.clone(),
        file_prefix: "hevc-sei-probe".to_string(),
        console: !cli.quiet,
    };
    if let Err(e) = logging::init(&config) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }

    info!(
        "hevc-sei-probe 版本 {}, 输入文件数: {}",
        hevc_sei::version(),
        cli.inputs.len()
    );

    let results: Vec<Result<FileReport>> = cli
        .inputs
        .par_iter()
        .map(|path| probe_file(path, cli.length_size))
        .collect();

    let mut failed = false;
    let mut reports = Vec::with_capacity(results.len());
    for result in &results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("错误: {e:#}");
                failed = true;
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&ProbeOutput { files: reports }) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("错误: JSON 序列化失败: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for report in reports {
            print_report_text(report);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// 读取并解析单个文件
fn probe_file(path: &Path, length_size: Option<u8>) -> Result<FileReport> {
    let data = std::fs::read(path)
        .with_context(|| format!("无法读取文件 '{}'", path.display()))?;

    let data = match length_size {
        Some(size) => length_prefixed_to_annex_b(&data, usize::from(size)),
        None => data,
    };

    let mut parser = SeiParser::new();
    let records = parser.parse(&data);
    if records.is_empty() {
        warn!("未找到 SEI 记录: {}", path.display());
    } else {
        info!("{}: {} 条 SEI 记录", path.display(), records.len());
    }

    Ok(FileReport {
        path: path.display().to_string(),
        records,
    })
}

/// 文本输出: 单个文件
fn print_report_text(report: &FileReport) {
    println!("[FILE] {}", report.path);
    println!("  记录数       : {}", report.records.len());
    for (index, record) in report.records.iter().enumerate() {
        let content = match record.payload_type {
            SeiPayloadType::UserDataUnregistered => &record.json_payload,
            SeiPayloadType::TimeCode => &record.timecode_string,
        };
        println!(
            "  #{index:<4} {:<24} 帧 {:<8} {}",
            record.payload_type, record.frame_number, content
        );
        if !record.raw_bytes.is_empty() {
            println!("        {}", record.raw_bytes);
        }
    }
    println!("[/FILE]");
    println!();
}
