//! 程序入口：初始化日志、读取 schema、校验并转换到目标版本

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use cir_converter::utils::fs::{read_json_input, write_json_output};
use cir_converter::{validate_request, Config, SchemaConverter, CATALOGUE};

/// 把 CIR schema 从当前版本转换到目标版本
#[derive(Debug, Parser)]
#[command(name = "cir-convert", version)]
struct Cli {
    /// 当前 schema 版本（默认读取 CURRENT_VERSION，缺省 9.0.0）
    #[arg(long)]
    current_version: Option<String>,

    /// 目标 schema 版本（默认读取 TARGET_VERSION，缺省 10.0.0）
    #[arg(long)]
    target_version: Option<String>,

    /// 输入文件，`-` 或省略时读取标准输入
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出文件，`-` 或省略时写到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 紧凑输出（不格式化）
    #[arg(long)]
    compact: bool,

    /// 列出迁移路径目录后退出
    #[arg(long)]
    list_paths: bool,
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // 日志写到 stderr，stdout 只输出 JSON
    let _ = SubscriberBuilder::default()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    if cli.list_paths {
        let listing = serde_json::to_string_pretty(CATALOGUE).context("序列化路径目录失败")?;
        println!("{}", listing);
        return Ok(());
    }

    let current_version = cli.current_version.unwrap_or(config.current_version);
    let target_version = cli.target_version.unwrap_or(config.target_version);

    let schema = read_json_input(cli.input.as_deref()).context("读取输入 schema 失败")?;
    validate_request(&current_version, &target_version, &schema)?;

    let converter = SchemaConverter::v10()?;
    let start = Instant::now();
    let converted = converter.convert(&current_version, &target_version, &schema)?;
    tracing::info!(
        "转换完成: {} → {}，耗时: {:.1}ms",
        current_version,
        target_version,
        start.elapsed().as_secs_f64() * 1000.0
    );

    write_json_output(cli.output.as_deref(), &converted, !cli.compact).context("写出转换结果失败")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "cir-convert",
            "--current-version",
            "9.0.0",
            "--target-version",
            "10.0.0",
            "-i",
            "in.json",
            "--compact",
        ]);
        assert_eq!(cli.current_version.as_deref(), Some("9.0.0"));
        assert_eq!(cli.target_version.as_deref(), Some("10.0.0"));
        assert_eq!(cli.input, Some(PathBuf::from("in.json")));
        assert!(cli.output.is_none());
        assert!(cli.compact);
        assert!(!cli.list_paths);
    }
}
