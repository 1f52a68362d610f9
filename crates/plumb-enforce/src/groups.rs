//! Tag groups: maximal runs of tags with no blank line between them.
//!
//! Computed once per block and pass; the structure checks and the aligner
//! both read the same partition.

use plumb_core::token::{TokenKind, TokenStream};

use crate::locator::{CommentBlock, TagRef};

pub const PARAM_TAG: &str = "@param";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub members: Vec<TagRef>,
}

impl TagGroup {
    pub fn first(&self) -> Option<&TagRef> {
        self.members.first()
    }

    pub fn last(&self) -> Option<&TagRef> {
        self.members.last()
    }

    pub fn contains_tag(&self, name: &str) -> bool {
        self.members.iter().any(|t| t.name == name)
    }
}

/// Split the block's tags into groups. A tag starts a new group unless the
/// last string (or, failing that, the previous tag) sits on the line directly
/// above it.
pub fn partition(stream: &TokenStream, block: &CommentBlock) -> Vec<TagGroup> {
    let mut groups: Vec<TagGroup> = Vec::new();

    for (pos, tag) in block.tags.iter().enumerate() {
        let starts_group = match pos.checked_sub(1).map(|p| &block.tags[p]) {
            None => true,
            Some(previous) => {
                let anchor = stream
                    .prev_of(
                        &[TokenKind::DocCommentString],
                        tag.position - 1,
                        previous.position,
                    )
                    .unwrap_or(previous.position);
                stream.line(anchor) + 1 != stream.line(tag.position)
            }
        };

        match groups.last_mut() {
            Some(group) if !starts_group => group.members.push(tag.clone()),
            _ => groups.push(TagGroup {
                members: vec![tag.clone()],
            }),
        }
    }

    groups
}

/// Index of the first group holding a `@param` tag.
pub fn param_group(groups: &[TagGroup]) -> Option<usize> {
    groups.iter().position(|g| g.contains_tag(PARAM_TAG))
}
