//! 合成器：把带归属标注的字符流投影为两段输出正文。

use super::types::{GroupLabel, TaggedChar};

/// 按组别过滤出第一行与第二行的正文。
///
/// 字符只过滤、绝不重排，组内保持原始的从左到右顺序。
/// 过滤产生的首尾空白会被修剪，内部空白原样保留。
///
/// # 返回
/// * `Some((first, second))` - 两个组都非空，应当分离。
/// * `None` - 任一组为空，整行不做分离（调用方原样返回源行）。
#[must_use]
pub fn compose(tags: &[TaggedChar]) -> Option<(String, String)> {
    let mut first = String::new();
    let mut second = String::new();

    for tag in tags {
        match tag.label {
            Some(GroupLabel::GroupA) => first.push(tag.ch),
            Some(GroupLabel::GroupB) => second.push(tag.ch),
            None => {}
        }
    }

    let first = first.trim();
    let second = second.trim();
    if first.is_empty() || second.is_empty() {
        None
    } else {
        Some((first.to_string(), second.to_string()))
    }
}
