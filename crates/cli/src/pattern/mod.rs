// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt classification against a compiled trigger pattern.
//!
//! The whole trigger rule is a single disjunctive regex. Alternation in the
//! `regex` crate is leftmost-first, so the match starting at the smallest
//! index wins and ties go to the alternative declared first.

pub mod matcher;

pub use matcher::{Classification, Matcher, Span};
