//! 定义了歌词分离过程中使用的核心数据类型。

use std::fmt;

/// 字符的文字类别，由码点唯一决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    /// 平假名 (U+3040–U+309F)。
    Hiragana,
    /// 片假名 (U+30A0–U+30FF)。
    Katakana,
    /// CJK 统一表意文字 (U+4E00–U+9FFF)。中日两种文字共用，是归属歧义的唯一来源。
    Ideograph,
    /// ASCII 拉丁字母。
    Latin,
    /// 其它字符：空白、数字、标点、符号以及未覆盖的文字。
    Other,
}

impl ScriptClass {
    /// 是否为假名（平假名或片假名）。假名是日文内容的确定信号。
    #[must_use]
    pub fn is_kana(self) -> bool {
        matches!(self, Self::Hiragana | Self::Katakana)
    }
}

/// 字符的归属组别，决定它落在哪一行输出里。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLabel {
    /// 第一行的组。日中模式下是日文侧（假名、归属日文的汉字、拉丁字母）；
    /// 中英模式下是中文汉字。
    GroupA,
    /// 第二行的组。日中模式下是中文汉字；中英模式下是拉丁字母。
    GroupB,
}

/// 整行的分离模式，根据行内出现的文字类别选定，每行只选一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationMode {
    /// 日文与中文混排。只要出现任何假名就选定此模式。
    JapaneseChinese,
    /// 中文与英文混排。无假名，但汉字与拉丁字母同时出现。
    ChineseEnglish,
    /// 单语或无可分离内容，整行原样输出。
    NoSplit,
}

/// 带标注的字符。`label` 由归属器在分类之后填充，两个字段一旦齐备就不再改变。
///
/// 字符在所属行内的码点偏移即它在打标向量中的下标，不单独存储。
#[derive(Debug, Clone)]
pub struct TaggedChar {
    /// 原始字符，分类与归属都不改写它。
    pub ch: char,
    /// 文字类别。
    pub class: ScriptClass,
    /// 归属组别。透传行与惰性字符（整行皆为 `Other` 时）保持 `None`。
    pub label: Option<GroupLabel>,
}

/// 一行 LRC 歌词：时间戳原文与歌词正文。
///
/// 分离产生的两行携带与源行逐字节相同的时间戳，时间戳绝不重新解析或重排。
/// 透传行（无时间戳前缀的行）的 `timestamp` 为空串，`body` 即整行原文。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    /// `[mm:ss.xx]` / `[mm:ss.xxx]` 形式的时间戳原文。
    pub timestamp: String,
    /// 歌词正文。
    pub body: String,
}

impl LyricLine {
    /// 从时间戳与正文构造一行歌词。
    #[must_use]
    pub fn new(timestamp: &str, body: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            body: body.to_string(),
        }
    }

    /// 构造一个透传行：没有时间戳，整行原文即正文。
    #[must_use]
    pub fn passthrough(raw: &str) -> Self {
        Self {
            timestamp: String::new(),
            body: raw.to_string(),
        }
    }
}

impl fmt::Display for LyricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.timestamp, self.body)
    }
}
