//! 定义了整个库的错误类型 `SplitterError`。

use std::io;
use thiserror::Error;

/// `lyrics-splitter` 库的通用错误枚举。
///
/// 歌词分离核心本身没有任何错误路径（无法分离的行原样返回，是正常结果）；
/// 这里的错误全部来自标签读写与文件编排层。
#[derive(Error, Debug)]
pub enum SplitterError {
    /// 不支持的音频容器格式
    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),

    /// 文件中没有歌词标签
    #[error("未找到歌词标签")]
    NoLyricsFound,

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// 音频标签读写失败 (源自 `lofty::error::LoftyError`)
    #[error("标签读写失败: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    /// 文本解码失败
    #[error("文本解码失败: {0}")]
    DecodeFailure(String),
}

/// `SplitterError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, SplitterError>;
