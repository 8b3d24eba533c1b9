// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in lexicon for the Rust help skill (English and Chinese).
//!
//! Order matters: a longer literal must come before any shorter literal it
//! starts with (`rustc` before `rust`, `how to` before `how`), otherwise the
//! shorter one wins at the same position.

use super::{Alternative, Category, Lexicon};

const ERROR_CODES: &[&str] = &[r"E\d{4}"];

const TOOLS: &[&str] = &[
    "rust-analyzer",
    "rustc",
    "rustup",
    "rustfmt",
    "rust",
    "cargo",
    "clippy",
    "crates.io",
    "docs.rs",
    "tokio",
    "serde",
    "axum",
    "rayon",
    "anyhow",
    "thiserror",
];

const CONCEPTS_EN: &[&str] = &[
    "ownership",
    "borrow checker",
    "borrowed value",
    "borrow",
    "lifetime",
    "trait",
    "generic",
    "closure",
    "iterator",
    "macro",
    "unsafe",
    "async",
    "await",
    "value moved",
    "moved value",
    "mutable",
    "smart pointer",
    "pattern matching",
    "panic",
];

/// Type and keyword names. Case-sensitive and word-bounded, since `Rc` or
/// `Box` inside ordinary English words would trigger constantly.
const CONCEPT_WORDS: &[&str] = &[
    "Send", "Sync", "Rc", "Arc", "RefCell", "Mutex", "Box", "Vec", "Option", "Result",
    "HashMap", "impl", "dyn",
];

const CONCEPT_SYMBOLS: &[&str] = &["&mut"];

const CONCEPTS_ZH: &[&str] = &[
    "所有权",
    "借用",
    "生命周期",
    "泛型",
    "类型",
    "特征",
    "闭包",
    "迭代器",
    "智能指针",
    "模式匹配",
    "异步",
    "并发",
    "多线程",
    "编译器",
    "编译",
    "宏",
];

const PHRASINGS_ZH: &[&str] = &[
    "怎么解决",
    "怎么办",
    "怎么用",
    "怎么写",
    "怎么实现",
    "怎么改",
    "如何",
    "为什么",
    "是什么",
    "什么是",
    "有什么区别",
    "帮我写",
    "帮我看",
    "帮我改",
    "帮我查",
    "解释",
    "最佳实践",
    "问题",
    "报错",
    "错误",
    "优化",
    "重构",
    "示例",
];

const PHRASINGS_EN: &[&str] = &[
    "how to",
    "how does",
    "how do",
    "how can",
    "why does",
    "why do",
    "why is",
    "what is",
    "what's the difference",
    "explain",
    "best practice",
    "example",
    "help me",
    "doesn't compile",
    "won't compile",
    "compile",
    "debug",
    "refactor",
    "error",
    "fix",
];

const WEAK_EN: &[&str] = &["how", "why"];

const WEAK_ZH: &[&str] = &["怎么", "怎样", "帮我", "请问"];

pub(super) fn lexicon() -> Lexicon {
    let mut alts = Vec::new();

    alts.extend(ERROR_CODES.iter().map(|p| Alternative::pattern(Category::ErrorCode, *p)));
    alts.extend(TOOLS.iter().map(|t| Alternative::literal(Category::Tool, *t).ignore_case()));
    alts.extend(CONCEPTS_EN.iter().map(|t| Alternative::literal(Category::Concept, *t).ignore_case()));
    alts.extend(CONCEPT_WORDS.iter().map(|t| Alternative::word(Category::Concept, *t)));
    alts.extend(CONCEPT_SYMBOLS.iter().map(|t| Alternative::literal(Category::Concept, *t)));
    alts.extend(CONCEPTS_ZH.iter().map(|t| Alternative::literal(Category::Concept, *t)));
    alts.extend(PHRASINGS_ZH.iter().map(|t| Alternative::literal(Category::Phrasing, *t)));
    alts.extend(PHRASINGS_EN.iter().map(|t| Alternative::literal(Category::Phrasing, *t).ignore_case()));
    alts.extend(WEAK_EN.iter().map(|t| Alternative::literal(Category::Weak, *t).ignore_case()));
    alts.extend(WEAK_ZH.iter().map(|t| Alternative::literal(Category::Weak, *t)));

    Lexicon::new(alts)
}
