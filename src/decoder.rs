//! 编码探测与解码协作者。
//!
//! 旧播放器写入的标签里偶尔会出现非 UTF-8 的字节序列。
//! 此模块在解码的同时返回探测置信度，置信度过低时退回按 UTF-8 宽容解码。
//! 分离核心只接收已解码的文本，从不直接接触字节。

use encoding_rs::{Encoding, UTF_8};

/// 低于此置信度时不信任探测结果，按 UTF-8 处理。
const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// 解码一段字节序列，返回文本与探测置信度。
///
/// 对任何输入都能得到一个字符串，最坏情况是带替换字符的宽容解码。
///
/// # 返回
/// `(text, confidence)` - 解码后的文本与 `[0, 1]` 区间的探测置信度。
#[must_use]
pub fn decode(bytes: &[u8]) -> (String, f32) {
    if bytes.is_empty() {
        return (String::new(), 1.0);
    }

    let (charset, confidence, _language) = chardet::detect(bytes);
    let encoding = if confidence < CONFIDENCE_THRESHOLD {
        UTF_8
    } else {
        Encoding::for_label(chardet::charset2encoding(&charset).as_bytes()).unwrap_or(UTF_8)
    };

    let (text, _, _) = encoding.decode(bytes);
    (text.into_owned(), confidence)
}
