//! 按固定 Unicode 区间对字符做单遍分类，并依据整行出现的类别选定分离模式。

use super::types::{ScriptClass, SeparationMode, TaggedChar};

/// 返回字符所属的文字类别。
///
/// 纯函数，对全部码点有定义，不做任何规范化或转换。
#[must_use]
pub fn classify_char(ch: char) -> ScriptClass {
    match ch {
        '\u{3040}'..='\u{309F}' => ScriptClass::Hiragana,
        '\u{30A0}'..='\u{30FF}' => ScriptClass::Katakana,
        '\u{4E00}'..='\u{9FFF}' => ScriptClass::Ideograph,
        'A'..='Z' | 'a'..='z' => ScriptClass::Latin,
        _ => ScriptClass::Other,
    }
}

/// 对一行正文逐字符打标，归属组别留空。
#[must_use]
pub fn tag_line(body: &str) -> Vec<TaggedChar> {
    body.chars()
        .map(|ch| TaggedChar {
            ch,
            class: classify_char(ch),
            label: None,
        })
        .collect()
}

/// 根据整行出现的文字类别选定分离模式。
///
/// 只取决于出现了哪些类别，与出现顺序无关。
/// 假名是日文内容的确定信号，优先级最高；
/// 无假名时汉字与拉丁字母并存，视为中英混排。
#[must_use]
pub fn select_mode(tags: &[TaggedChar]) -> SeparationMode {
    let mut has_kana = false;
    let mut has_ideograph = false;
    let mut has_latin = false;

    for tag in tags {
        match tag.class {
            ScriptClass::Hiragana | ScriptClass::Katakana => has_kana = true,
            ScriptClass::Ideograph => has_ideograph = true,
            ScriptClass::Latin => has_latin = true,
            ScriptClass::Other => {}
        }
    }

    if has_kana {
        SeparationMode::JapaneseChinese
    } else if has_ideograph && has_latin {
        SeparationMode::ChineseEnglish
    } else {
        SeparationMode::NoSplit
    }
}
