//! Core types, tokenization, and configuration for plumb.
//!
//! This crate provides the foundational data structures used across all plumb crates:
//! - [`token`]: Tokens, token kinds, and the linked [`TokenStream`](token::TokenStream)
//! - [`lexer`]: Source text to token stream, doc comments split into their parts
//! - [`links`]: Comment, scope, and parenthesis pairing resolved once per stream
//! - [`decl`]: Immutable declaration snapshots (parameters, bodies, exit points)
//! - [`config`]: Configuration loading from `.plumb/plumb.json`
//! - [`version`]: Minimum language version used by type-hint checks
//! - [`error`]: Infrastructure errors

pub mod config;
pub mod decl;
pub mod error;
pub mod lexer;
pub mod links;
pub mod token;
pub mod version;
