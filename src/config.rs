//! 负责处理器的配置。
//!
//! 原型脚本把支持的扩展名等状态放在可变对象上；这里改为一个不可变的配置值，
//! 由调用方构造后传入编排层，也可以从用户配置目录加载持久化的 JSON。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 文件编排层的配置。构造完成后不再修改。
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProcessorConfig {
    /// 纳入处理的文件扩展名（不带点，忽略大小写）。
    pub supported_extensions: Vec<String>,
    /// 写回前是否在源文件旁创建一次性的 `.backup` 副本。
    pub backup: bool,
    /// 目录处理时是否递归子目录。
    pub recursive: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            supported_extensions: ["flac", "mp3", "ogg", "m4a", "mp4"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            backup: true,
            recursive: true,
        }
    }
}

impl ProcessorConfig {
    /// 判断文件扩展名是否在处理范围内。
    #[must_use]
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()).is_some_and(|ext| {
            self.supported_extensions
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
    }
}

/// 获取应用配置目录下配置文件的完整路径。
fn config_file_path() -> Result<PathBuf, std::io::Error> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("lyrics-splitter");
        fs::create_dir_all(&config_dir)?;
        config_dir.push("config.json");
        Ok(config_dir)
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "无法找到用户配置目录",
        ))
    }
}

/// 从用户配置目录加载配置；文件不存在或不可读时返回默认配置。
#[must_use]
pub fn load_or_default() -> ProcessorConfig {
    match try_load() {
        Ok(Some(config)) => {
            info!("已从配置文件加载设置。");
            config
        }
        Ok(None) => ProcessorConfig::default(),
        Err(e) => {
            warn!("读取配置文件失败，使用默认配置: {e}");
            ProcessorConfig::default()
        }
    }
}

fn try_load() -> Result<Option<ProcessorConfig>, Box<dyn std::error::Error>> {
    let config_path = config_file_path()?;
    match fs::read_to_string(&config_path) {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// 将配置序列化为 JSON 并保存到用户配置目录。
pub fn save(config: &ProcessorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = config_file_path()?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    info!("配置已保存。");
    Ok(())
}
