//! 配置键规范化
//!
//! 连字符形式（`driver-class-name`）转换为小驼峰形式（`driverClassName`），
//! 已经是驼峰形式的键原样返回。

use std::borrow::Cow;

/// 规范化配置键
///
/// 删除每个连字符，并将紧随其后的字符转为大写。其他字符保持不变，
/// 因此 `maxActive` 与 `max-active` 得到同一个属性名。
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if !key.contains('-') {
        return Cow::Borrowed(key);
    }

    let mut result = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    Cow::Owned(result)
}
