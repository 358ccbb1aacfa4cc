//! 歌词分离核心模块。
//!
//! 数据流：原始行 → 分类打标 → 模式选择 → （需要消歧时）汉字归属 → 投影合成。
//! 每个阶段都是其输入的纯函数，行与行之间不共享任何状态，
//! 同一输入无论以何种顺序、重复多少次调用都产生相同输出。
//! 分离本身没有失败路径：无法分离的行原样返回，这是正常结果而非错误。

pub mod attributor;
pub mod classifier;
pub mod composer;
pub mod types;

pub use types::{GroupLabel, LyricLine, ScriptClass, SeparationMode, TaggedChar};

use tracing::debug;

/// 识别行首的 LRC 时间戳 `[mm:ss.xx]` / `[mm:ss.xxx]`，返回其字节长度。
///
/// 用显式的单遍扫描代替回溯正则，时间戳原文按原样截取，不做解析和重排。
fn timestamp_prefix_len(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    // 最短形式 "[00:00.00]" 共 10 字节
    if bytes.len() < 10
        || bytes[0] != b'['
        || !bytes[1].is_ascii_digit()
        || !bytes[2].is_ascii_digit()
        || bytes[3] != b':'
        || !bytes[4].is_ascii_digit()
        || !bytes[5].is_ascii_digit()
        || bytes[6] != b'.'
        || !bytes[7].is_ascii_digit()
        || !bytes[8].is_ascii_digit()
    {
        return None;
    }
    match bytes[9] {
        b']' => Some(10),
        d if d.is_ascii_digit() => (bytes.get(10) == Some(&b']')).then_some(11),
        _ => None,
    }
}

/// 把一行文本拆成时间戳原文与正文。
///
/// # 返回
/// * `Some((timestamp, body))` - 行首是合法的 LRC 时间戳。
/// * `None` - 不是时间戳行，应当整行透传。
#[must_use]
pub fn parse_lrc_line(line: &str) -> Option<(&str, &str)> {
    let len = timestamp_prefix_len(line)?;
    Some(line.split_at(len))
}

/// 对一行正文执行分类、模式选择、归属与合成。
///
/// # 返回
/// * `Some((first, second))` - 分离出的两段正文。
/// * `None` - 该行无需（或无法）分离。
#[must_use]
pub fn split_body(body: &str) -> Option<(String, String)> {
    let mut tags = classifier::tag_line(body);
    let mode = classifier::select_mode(&tags);
    if mode == SeparationMode::NoSplit {
        return None;
    }
    attributor::attribute(&mut tags, mode);
    composer::compose(&tags)
}

/// 变换一行歌词。
///
/// 可分离时返回携带相同时间戳的两行；否则返回与输入完全相同的单行。
/// 无时间戳前缀的行不经过分类，直接透传。对任何输入都不会失败。
#[must_use]
pub fn transform_line(raw: &str) -> Vec<LyricLine> {
    let Some((timestamp, body)) = parse_lrc_line(raw) else {
        return vec![LyricLine::passthrough(raw)];
    };

    match split_body(body) {
        Some((first, second)) => {
            debug!("已分离: {timestamp} -> 「{first}」 / 「{second}」");
            vec![
                LyricLine::new(timestamp, &first),
                LyricLine::new(timestamp, &second),
            ]
        }
        None => vec![LyricLine::new(timestamp, body)],
    }
}

/// 逐行变换整段歌词文本，用换行符重新拼接。
///
/// 按 `\n` 切分以保留空行和末尾换行的结构：没有任何行被分离时，
/// 输出与输入逐字节相同，调用方据此判断是否需要写回。
#[must_use]
pub fn split_block(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        for transformed in transform_line(line) {
            out.push(transformed.to_string());
        }
    }
    out.join("\n")
}
