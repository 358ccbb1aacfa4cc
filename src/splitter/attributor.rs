//! 归属器：为每个字符决定组别，核心是歧义汉字串的归属。
//!
//! 汉字在中日两种文字里共用，仅凭码点无法判断归属。
//! 这里先把汉字聚成极大连续串，再看串两端最近的非 `Other` 字符：
//! 紧邻假名的串归日文，其余归中文。上下文只看前后各一个字符，
//! 对两三种以上文字反复交错的行准确率会下降，这是有意的取舍，
//! 不做任何全局或词频层面的消歧。

use super::types::{GroupLabel, ScriptClass, SeparationMode, TaggedChar};

/// 为整行字符填充组别。`NoSplit` 模式下不做任何事。
///
/// 此函数从不失败：日中模式下整行找不到假名邻居时，
/// 所有歧义汉字串都会落到中文组（`GroupB`）。
pub fn attribute(tags: &mut [TaggedChar], mode: SeparationMode) {
    match mode {
        SeparationMode::NoSplit => return,
        SeparationMode::JapaneseChinese => attribute_japanese_chinese(tags),
        SeparationMode::ChineseEnglish => attribute_chinese_english(tags),
    }
    attribute_other(tags);
}

/// 日中模式：假名与拉丁字母固定归日文侧，汉字串按假名邻接判断。
fn attribute_japanese_chinese(tags: &mut [TaggedChar]) {
    for tag in tags.iter_mut() {
        if tag.class.is_kana() || tag.class == ScriptClass::Latin {
            tag.label = Some(GroupLabel::GroupA);
        }
    }

    let mut i = 0;
    while i < tags.len() {
        if tags[i].class != ScriptClass::Ideograph {
            i += 1;
            continue;
        }
        let end = ideograph_run_end(tags, i);
        let label = if kana_adjacent(tags, i, end) {
            GroupLabel::GroupA
        } else {
            GroupLabel::GroupB
        };
        for tag in &mut tags[i..=end] {
            if tag.class == ScriptClass::Ideograph {
                tag.label = Some(label);
            }
        }
        i = end + 1;
    }
}

/// 中英模式：汉字即中文组本身，没有竞争的汉字来源，无歧义可言。
fn attribute_chinese_english(tags: &mut [TaggedChar]) {
    for tag in tags.iter_mut() {
        match tag.class {
            ScriptClass::Ideograph => tag.label = Some(GroupLabel::GroupA),
            ScriptClass::Latin => tag.label = Some(GroupLabel::GroupB),
            // 有假名的行不会进入此模式；万一出现，并入汉字所在组
            c if c.is_kana() => tag.label = Some(GroupLabel::GroupA),
            _ => {}
        }
    }
}

/// 从 `start` 处的汉字向右扩展出极大汉字串，返回串内最后一个汉字的下标。
///
/// 串内允许夹带非空白的 `Other` 字符（标点不是分隔符），空白则终止扩展。
fn ideograph_run_end(tags: &[TaggedChar], start: usize) -> usize {
    let mut end = start;
    let mut j = start + 1;
    while j < tags.len() {
        match tags[j].class {
            ScriptClass::Ideograph => {
                end = j;
                j += 1;
            }
            ScriptClass::Other if !tags[j].ch.is_whitespace() => j += 1,
            _ => break,
        }
    }
    end
}

/// 检查 `[start, end]` 汉字串两端最近的非 `Other` 字符是否为假名。
fn kana_adjacent(tags: &[TaggedChar], start: usize, end: usize) -> bool {
    let before = neighbor_class(tags[..start].iter().rev());
    let after = neighbor_class(tags[end + 1..].iter());
    before.is_some_and(ScriptClass::is_kana) || after.is_some_and(ScriptClass::is_kana)
}

/// 沿一个方向找最近的非 `Other` 字符的类别。
///
/// 查找跳过非空白的标点，但空白会切断邻接关系：
/// 空格之后的假名不算紧邻（否则场景「…好きだ 我喜欢…」会把中文串错归日文）。
fn neighbor_class<'a>(chars: impl Iterator<Item = &'a TaggedChar>) -> Option<ScriptClass> {
    for tag in chars {
        match tag.class {
            ScriptClass::Other => {
                if tag.ch.is_whitespace() {
                    return None;
                }
            }
            class => return Some(class),
        }
    }
    None
}

/// 空白与标点依附于最近的前一个已归组字符；行首的依附其后第一个已归组字符。
/// 整行只有 `Other` 字符时它们保持惰性，不属于任何组。
fn attribute_other(tags: &mut [TaggedChar]) {
    let mut prev: Option<GroupLabel> = None;
    for tag in tags.iter_mut() {
        match tag.label {
            Some(label) => prev = Some(label),
            None if tag.class == ScriptClass::Other => tag.label = prev,
            None => {}
        }
    }

    let mut next: Option<GroupLabel> = None;
    for tag in tags.iter_mut().rev() {
        match tag.label {
            Some(label) => next = Some(label),
            None if tag.class == ScriptClass::Other => tag.label = next,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::classifier::tag_line;

    fn labels_of(body: &str, mode: SeparationMode) -> Vec<Option<GroupLabel>> {
        let mut tags = tag_line(body);
        attribute(&mut tags, mode);
        tags.into_iter().map(|t| t.label).collect()
    }

    fn group_text(body: &str, mode: SeparationMode, group: GroupLabel) -> String {
        let mut tags = tag_line(body);
        attribute(&mut tags, mode);
        tags.iter()
            .filter(|t| t.label == Some(group))
            .map(|t| t.ch)
            .collect()
    }

    // 紧邻假名的汉字串整体归日文
    #[test]
    fn test_run_adjacent_to_kana_is_japanese() {
        let japanese = group_text(
            "君の笑顔が好きだ",
            SeparationMode::JapaneseChinese,
            GroupLabel::GroupA,
        );
        assert_eq!(japanese, "君の笑顔が好きだ", "整行都应归日文组");
    }

    // 被空格隔开的汉字串没有假名邻居，归中文
    #[test]
    fn test_run_across_whitespace_is_chinese() {
        let chinese = group_text(
            "君の笑顔が好きだ 我喜欢你的笑容",
            SeparationMode::JapaneseChinese,
            GroupLabel::GroupB,
        );
        assert_eq!(chinese, "我喜欢你的笑容");
    }

    // 串内的非空白标点不是分隔符，整串一起判断
    #[test]
    fn test_punctuation_bridges_run() {
        // 「涙、意味」是一个串，串尾之后是假名を，整串归日文
        let japanese = group_text(
            "答えて涙、意味を 眼泪的意义",
            SeparationMode::JapaneseChinese,
            GroupLabel::GroupA,
        );
        assert!(japanese.contains("涙、意味"), "标点桥接的串应整体归日文");
        let chinese = group_text(
            "答えて涙、意味を 眼泪的意义",
            SeparationMode::JapaneseChinese,
            GroupLabel::GroupB,
        );
        assert_eq!(chinese, "眼泪的意义");
    }

    // 邻居查找跳过标点后仍能看到假名
    #[test]
    fn test_neighbor_lookup_skips_punctuation() {
        // 「笑顔」前面是「、」，再往前是の，仍算紧邻假名
        let japanese = group_text(
            "君の、笑顔",
            SeparationMode::JapaneseChinese,
            GroupLabel::GroupA,
        );
        assert!(japanese.contains("笑顔"));
    }

    // 整行无假名邻居时所有汉字串默认归中文
    #[test]
    fn test_no_kana_neighbor_defaults_to_chinese() {
        let labels = labels_of("ラララ 我的歌", SeparationMode::JapaneseChinese);
        // 「我的歌」三个汉字
        assert_eq!(labels[4], Some(GroupLabel::GroupB));
        assert_eq!(labels[5], Some(GroupLabel::GroupB));
        assert_eq!(labels[6], Some(GroupLabel::GroupB));
    }

    // 行首的标点依附其后第一个已归组字符
    #[test]
    fn test_leading_other_attaches_forward() {
        let labels = labels_of("“我爱你 love”", SeparationMode::ChineseEnglish);
        assert_eq!(labels[0], Some(GroupLabel::GroupA), "行首引号应依附后面的汉字");
    }

    // 空白依附最近的前一个已归组字符
    #[test]
    fn test_other_attaches_to_preceding() {
        let labels = labels_of("我爱你 love", SeparationMode::ChineseEnglish);
        // 空格前是汉字「你」
        assert_eq!(labels[3], Some(GroupLabel::GroupA));
    }

    // 中英模式下汉字归 GroupA，拉丁字母归 GroupB
    #[test]
    fn test_chinese_english_labels() {
        let chinese = group_text(
            "我爱你中国 I love you China",
            SeparationMode::ChineseEnglish,
            GroupLabel::GroupA,
        );
        assert_eq!(chinese.trim(), "我爱你中国");
        let english = group_text(
            "我爱你中国 I love you China",
            SeparationMode::ChineseEnglish,
            GroupLabel::GroupB,
        );
        assert_eq!(english.trim(), "I love you China");
    }

    // NoSplit 模式下不分配任何组别
    #[test]
    fn test_no_split_leaves_labels_empty() {
        let labels = labels_of("Hello 世界", SeparationMode::NoSplit);
        assert!(labels.iter().all(Option::is_none), "NoSplit 不应分配组别");
    }
}
