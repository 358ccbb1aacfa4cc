//! 音频容器标签层：按扩展名选定容器格式，读取与写回歌词标签。
//!
//! 四种容器构成一个封闭枚举，读写统一走 `read_lyrics_tag` / `write_lyrics_tag`
//! 两个能力接口；新增格式意味着新增变体，而不是新增一套方法名。

use std::path::Path;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{ItemValue, Tag, TagType};
use tracing::debug;

use crate::decoder;
use crate::error::{Result, SplitterError};

/// 支持的音频容器格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// FLAC，歌词存于 Vorbis Comments。
    Flac,
    /// MP3，歌词存于 ID3v2 的 USLT 帧。
    Mp3,
    /// Ogg Vorbis，歌词存于 Vorbis Comments。
    Ogg,
    /// MP4 / M4A，歌词存于 ilst 的 `©lyr` 原子。
    Mp4,
}

impl ContainerFormat {
    /// 根据文件扩展名判断容器格式（忽略大小写）。
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "flac" => Some(Self::Flac),
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            "m4a" | "mp4" => Some(Self::Mp4),
            _ => None,
        }
    }

    /// 该容器原生的标签类型。
    fn tag_type(self) -> TagType {
        match self {
            Self::Flac | Self::Ogg => TagType::VorbisComments,
            Self::Mp3 => TagType::Id3v2,
            Self::Mp4 => TagType::Mp4Ilst,
        }
    }

    /// 从音频文件读取歌词标签。
    ///
    /// 优先读取容器原生标签，找不到时退回文件的主标签。
    /// 二进制的标签值会经过编码探测后解码。
    ///
    /// # 返回
    /// 标签不存在或没有歌词条目时返回 `SplitterError::NoLyricsFound`。
    pub fn read_lyrics_tag(self, path: &Path) -> Result<String> {
        let tagged_file = Probe::open(path)?.read()?;
        let tag = tagged_file
            .tag(self.tag_type())
            .or_else(|| tagged_file.primary_tag())
            .ok_or(SplitterError::NoLyricsFound)?;

        match tag.get(&ItemKey::Lyrics).map(|item| item.value()) {
            Some(ItemValue::Text(text)) => Ok(text.clone()),
            Some(ItemValue::Binary(bytes)) => {
                let (text, confidence) = decoder::decode(bytes);
                debug!(
                    "歌词标签为二进制值，已按探测编码解码 (置信度 {confidence:.2}): {}",
                    path.display()
                );
                Ok(text)
            }
            _ => Err(SplitterError::NoLyricsFound),
        }
    }

    /// 把歌词写回音频文件的原生标签，保留标签中的其它条目。
    ///
    /// 文件尚无原生标签时会新建一个。
    pub fn write_lyrics_tag(self, path: &Path, lyrics: &str) -> Result<()> {
        let mut tagged_file = Probe::open(path)?.read()?;
        let mut tag = tagged_file
            .remove(self.tag_type())
            .unwrap_or_else(|| Tag::new(self.tag_type()));

        tag.insert_text(ItemKey::Lyrics, lyrics.to_string());
        tag.save_to_path(path, WriteOptions::default())?;
        debug!("歌词标签已写回: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ContainerFormat::from_path(Path::new("a.flac")),
            Some(ContainerFormat::Flac)
        );
        assert_eq!(
            ContainerFormat::from_path(Path::new("a.MP3")),
            Some(ContainerFormat::Mp3)
        );
        assert_eq!(
            ContainerFormat::from_path(Path::new("a.ogg")),
            Some(ContainerFormat::Ogg)
        );
        assert_eq!(
            ContainerFormat::from_path(Path::new("a.m4a")),
            Some(ContainerFormat::Mp4)
        );
        assert_eq!(
            ContainerFormat::from_path(Path::new("a.mp4")),
            Some(ContainerFormat::Mp4)
        );
        assert_eq!(ContainerFormat::from_path(Path::new("a.wav")), None);
        assert_eq!(ContainerFormat::from_path(Path::new("没有扩展名")), None);
    }

    #[test]
    fn test_native_tag_types() {
        assert_eq!(ContainerFormat::Flac.tag_type(), TagType::VorbisComments);
        assert_eq!(ContainerFormat::Ogg.tag_type(), TagType::VorbisComments);
        assert_eq!(ContainerFormat::Mp3.tag_type(), TagType::Id3v2);
        assert_eq!(ContainerFormat::Mp4.tag_type(), TagType::Mp4Ilst);
    }
}
