// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed battery for the Rust help trigger.

use super::Case;

const BATTERY: &[Case] = &[
    // Rust questions (Chinese and mixed)
    Case::matches("支付系统精度问题", "问题"),
    Case::matches("E0382 错误怎么解决", "E0382"),
    Case::matches("rust ownership问题", "rust"),
    Case::matches("how to use tokio", "how to"),
    Case::matches("为什么会有生命周期错误", "为什么"),
    Case::matches("帮我写一个异步函数", "帮我写"),
    Case::matches("最佳实践是什么", "最佳实践"),
    Case::matches("value moved error", "value moved"),
    Case::matches("这个函数怎么用", "怎么用"),
    Case::matches("解释一下这段代码", "解释"),
    Case::matches("cargo build 报错了", "cargo"),
    Case::matches("async await 怎么用", "async"),
    Case::matches("Send Sync trait 是什么", "Send"),
    Case::matches("借用检查器报错", "借用"),
    Case::matches("类型不匹配怎么办", "类型"),
    // Rust questions (English)
    Case::matches("E0382 error, how do I fix it", "E0382"),
    Case::matches("explain this piece of code", "explain"),
    Case::matches("could you run cargo clippy on this before lunch", "cargo"),
    // Weak fragments in ordinary conversation
    Case::over_matches("今天天气怎么样", "怎么"),
    Case::over_matches("帮我订一张机票", "帮我"),
    Case::over_matches("somehow we missed the train", "how"),
    // No cue at all
    Case::rejects("明天几点开会"),
    Case::rejects("晚饭吃什么"),
    Case::rejects("what time is the meeting tomorrow"),
    Case::rejects("what should I eat for dinner"),
    Case::rejects(""),
];

/// The fixed self-test battery.
pub fn battery() -> &'static [Case] {
    BATTERY
}
