//! 文件与目录编排层：读取标签 → 逐行分离 → 备份 → 写回。
//!
//! 分离核心是纯函数；所有 I/O、备份与顺序控制都收在这一层。
//! 文件之间互不依赖，这里按顺序逐个处理。

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::ProcessorConfig;
use crate::error::{Result, SplitterError};
use crate::splitter;
use crate::tag::ContainerFormat;

/// 单个文件的处理结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 歌词已分离并写回。
    Updated,
    /// 歌词无需处理，文件未改动。
    Unchanged,
}

/// 批量处理的统计报告。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// 纳入处理的音频文件总数。
    pub processed: usize,
    /// 成功处理（含无需改动）的文件数。
    pub success: usize,
    /// 处理失败的文件数。
    pub failed: usize,
    /// 没有歌词标签的文件数。
    pub no_lyrics: usize,
}

/// 处理单个音频文件。
///
/// 流程：扩展名检查 → 读取歌词标签 → 逐行分离 → 无变化则跳过 →
/// （按配置）创建备份 → 写回标签。
pub fn process_file(path: &Path, config: &ProcessorConfig) -> Result<FileOutcome> {
    if !config.is_supported(path) {
        return Err(SplitterError::UnsupportedFormat(display_extension(path)));
    }
    let format = ContainerFormat::from_path(path)
        .ok_or_else(|| SplitterError::UnsupportedFormat(display_extension(path)))?;

    let original = format.read_lyrics_tag(path)?;
    let processed = splitter::split_block(&original);
    if processed == original {
        info!("歌词无需处理: {}", path.display());
        return Ok(FileOutcome::Unchanged);
    }

    if config.backup {
        create_backup(path)?;
    }
    format.write_lyrics_tag(path, &processed)?;
    info!("歌词处理完成: {}", path.display());
    Ok(FileOutcome::Updated)
}

/// 批量处理目录中的音频文件，返回统计报告。
///
/// 目录本身不可读时报错；单个文件的失败只计入报告，不中断批处理。
pub fn process_directory(dir: &Path, config: &ProcessorConfig) -> Result<BatchReport> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let audio_files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| config.is_supported(path))
        .collect();

    info!("找到 {} 个音频文件", audio_files.len());

    let mut report = BatchReport::default();
    for path in &audio_files {
        report.processed += 1;
        match process_file(path, config) {
            Ok(_) => report.success += 1,
            Err(SplitterError::NoLyricsFound) => {
                report.no_lyrics += 1;
                info!("跳过 {} - 未找到歌词", path.display());
            }
            Err(e) => {
                report.failed += 1;
                warn!("处理 {} 失败: {e}", path.display());
            }
        }
    }

    info!(
        "处理完成! 总数 {}，成功 {}，失败 {}，无歌词 {}",
        report.processed, report.success, report.failed, report.no_lyrics
    );
    Ok(report)
}

/// 在源文件旁创建一次性的 `.backup` 副本，已存在的备份不覆盖。
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_os = path.as_os_str().to_owned();
    backup_os.push(".backup");
    let backup_path = PathBuf::from(backup_os);

    if backup_path.exists() {
        return Ok(());
    }
    fs::copy(path, &backup_path)?;
    info!("已创建备份: {}", backup_path.display());
    Ok(())
}

fn display_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("(无扩展名)")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let config = ProcessorConfig::default();
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let path = dir.path().join("not_audio.txt");
        fs::write(&path, "some text").expect("写入临时文件失败");

        let result = process_file(&path, &config);
        assert!(
            matches!(result, Err(SplitterError::UnsupportedFormat(_))),
            "非音频扩展名应返回 UnsupportedFormat"
        );
    }

    // 目录里没有音频文件时报告为全零
    #[test]
    fn test_empty_directory_report() {
        let config = ProcessorConfig::default();
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        fs::write(dir.path().join("readme.txt"), "x").expect("写入临时文件失败");

        let report = process_directory(dir.path(), &config).expect("目录处理不应失败");
        assert_eq!(report, BatchReport::default());
    }

    // 非递归模式不应深入子目录
    #[test]
    fn test_non_recursive_skips_subdirectories() {
        let config = ProcessorConfig {
            recursive: false,
            ..Default::default()
        };
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).expect("创建子目录失败");
        // 不是合法的 FLAC 文件，但足以验证它没有被扫描到
        fs::write(sub.join("song.flac"), "not a real flac").expect("写入临时文件失败");

        let report = process_directory(dir.path(), &config).expect("目录处理不应失败");
        assert_eq!(report.processed, 0, "非递归模式不应扫描子目录中的文件");
    }

    #[test]
    fn test_backup_is_created_once() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let path = dir.path().join("song.mp3");
        fs::write(&path, b"v1").expect("写入临时文件失败");

        create_backup(&path).expect("创建备份失败");
        let backup_path = dir.path().join("song.mp3.backup");
        assert_eq!(fs::read(&backup_path).expect("读取备份失败"), b"v1");

        // 源文件变化后再次备份，不应覆盖已有备份
        fs::write(&path, b"v2").expect("写入临时文件失败");
        create_backup(&path).expect("创建备份失败");
        assert_eq!(
            fs::read(&backup_path).expect("读取备份失败"),
            b"v1",
            "已有备份不应被覆盖"
        );
    }
}
