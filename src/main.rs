//! `lyrics-splitter` 命令行入口。

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lyrics_splitter_rs::tag::ContainerFormat;
use lyrics_splitter_rs::{FileOutcome, LyricsSplitter, config, splitter};

/// 音频文件双语歌词分离工具。
#[derive(Parser, Debug)]
#[command(
    name = "lyrics-splitter",
    version,
    about = "将音频标签中的混合双语歌词分离为多行同步歌词"
)]
struct Cli {
    /// 要处理的文件或目录路径
    path: PathBuf,

    /// 不创建备份文件
    #[arg(long)]
    no_backup: bool,

    /// 不递归处理子目录
    #[arg(long)]
    no_recursive: bool,

    /// 仅预览处理结果，不修改文件
    #[arg(long)]
    preview: bool,

    /// 将本次使用的配置保存为默认配置
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::load_or_default();
    if cli.no_backup {
        config.backup = false;
    }
    if cli.no_recursive {
        config.recursive = false;
    }
    if cli.save_config
        && let Err(e) = config::save(&config)
    {
        warn!("保存配置失败: {e}");
    }

    if !cli.path.exists() {
        bail!("路径不存在: {}", cli.path.display());
    }

    let client = LyricsSplitter::new(config);
    if cli.path.is_file() {
        if cli.preview {
            preview_file(&cli.path)?;
        } else {
            match client.process_file(&cli.path)? {
                FileOutcome::Updated => println!("✓ 歌词处理完成"),
                FileOutcome::Unchanged => println!("歌词无需处理"),
            }
        }
    } else {
        if cli.preview {
            bail!("预览模式暂不支持目录");
        }
        let report = client.process_directory(&cli.path)?;
        println!("处理完成!");
        println!("总文件数: {}", report.processed);
        println!("成功处理: {}", report.success);
        println!("处理失败: {}", report.failed);
        println!("无歌词文件: {}", report.no_lyrics);
    }

    Ok(())
}

/// 打印原始歌词与处理后的歌词，不写回文件。
fn preview_file(path: &Path) -> anyhow::Result<()> {
    let format = ContainerFormat::from_path(path)
        .with_context(|| format!("不支持的文件格式: {}", path.display()))?;
    let original = format
        .read_lyrics_tag(path)
        .with_context(|| format!("提取歌词失败: {}", path.display()))?;
    let processed = splitter::split_block(&original);

    println!("原始歌词:");
    println!("{original}");
    println!();
    println!("处理后歌词:");
    println!("{processed}");
    Ok(())
}
