#![warn(missing_docs)]

//! # Lyrics Splitter RS
//!
//! 把音频文件标签里"两种文字挤在同一行"的双语歌词，按文字类别分离成
//! 共享同一时间戳的两行，便于歌词渲染器分行显示。
//!
//! ## 主要功能
//!
//! - **歌词分离**: 逐字符识别平假名、片假名、汉字与拉丁字母，
//!   支持日中混排与中英混排两种模式；紧邻假名的汉字串归日文，其余归中文。
//! - **标签读写**: 从 FLAC / MP3 / OGG / MP4(M4A) 的标签中提取歌词并写回。
//! - **批量处理**: 递归扫描目录，写回前自动备份。
//!
//! ## 分离一行歌词
//!
//! ```rust
//! use lyrics_splitter_rs::splitter;
//!
//! let lines = splitter::transform_line("[00:12.45]君の笑顔が好きだ 我喜欢你的笑容");
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].to_string(), "[00:12.45]君の笑顔が好きだ");
//! assert_eq!(lines[1].to_string(), "[00:12.45]我喜欢你的笑容");
//! ```
//!
//! ## 处理整个音频文件
//!
//! ```rust,no_run
//! use lyrics_splitter_rs::{LyricsSplitter, ProcessorConfig};
//!
//! let splitter = LyricsSplitter::new(ProcessorConfig::default());
//! match splitter.process_file("music/song.flac".as_ref()) {
//!     Ok(outcome) => println!("处理结果: {outcome:?}"),
//!     Err(e) => eprintln!("发生错误: {e}"),
//! }
//! ```

pub mod config;
pub mod decoder;
pub mod error;
pub mod processor;
pub mod splitter;
pub mod tag;

use std::path::Path;

pub use crate::{
    config::ProcessorConfig,
    error::{Result, SplitterError},
    processor::{BatchReport, FileOutcome},
    splitter::LyricLine,
};

/// 顶层歌词分离客户端，持有一份不可变配置。
///
/// 这是与本库交互的主要入口点；只需要分离文本而不碰文件时，
/// 可以直接使用 [`splitter`] 模块里的纯函数。
pub struct LyricsSplitter {
    config: ProcessorConfig,
}

impl Default for LyricsSplitter {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl LyricsSplitter {
    /// 用给定配置创建一个客户端。配置在客户端生命周期内不再改变。
    #[must_use]
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// 当前使用的配置。
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// 处理单个音频文件：提取歌词标签、逐行分离、备份并写回。
    ///
    /// # 返回
    /// * `Ok(FileOutcome::Updated)` - 歌词已分离并写回。
    /// * `Ok(FileOutcome::Unchanged)` - 歌词无需处理，文件未改动。
    /// * `Err(SplitterError)` - 格式不支持、无歌词标签或读写失败。
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        processor::process_file(path, &self.config)
    }

    /// 批量处理目录中的音频文件，返回统计报告。
    pub fn process_directory(&self, dir: &Path) -> Result<BatchReport> {
        processor::process_directory(dir, &self.config)
    }
}
