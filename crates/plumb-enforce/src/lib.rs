//! Doc-comment enforcement for plumb.
//!
//! Validators inspect a [`TokenStream`](plumb_core::token::TokenStream) and
//! report findings, optionally with a [`Changeset`](fixer::Changeset) that
//! repairs them. The [`engine`] runs every validator, applies suppressions,
//! and drives multi-pass fixing:
//! - [`structure`]: block layout, descriptions, tag groups, alignment
//! - [`params`]: `@param` tags against the declaration's parameters
//! - [`returns`]: `@return` against the body's exit points
//! - [`throws`]: `@throws` type and description
//! - [`variable`]: member variable comments and `@var`

pub mod align;
pub mod codes;
pub mod context;
pub mod engine;
pub mod findings;
pub mod fixer;
pub mod groups;
pub mod locator;
pub mod normalize;
pub mod params;
pub mod prose;
pub mod returns;
pub mod structure;
pub mod suppress;
pub mod throws;
pub mod types;
pub mod variable;
