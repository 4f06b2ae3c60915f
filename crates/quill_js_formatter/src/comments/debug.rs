use std::fmt::{Debug, Formatter};

use itertools::Itertools;

use quill_js_ast::Ranged;

use super::map::CommentsMap;
use super::SourceComment;

/// Renders an attachment table in a stable order, for snapshot tests and
/// trace output. Nodes are sorted by source position; comments keep their
/// source order within each list.
pub struct DebugComments<'a> {
    map: &'a CommentsMap<'a>,
    source: &'a str,
}

impl<'a> DebugComments<'a> {
    pub(super) fn new(map: &'a CommentsMap<'a>, source: &'a str) -> Self {
        Self { map, source }
    }
}

impl Debug for DebugComments<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let keys = self.map.keys().sorted_by_key(|key| {
            let node = key.node();
            (node.start(), node.end(), node.kind().as_str())
        });

        for key in keys {
            let node = key.node();
            writeln!(f, "{}@{:?}", node.kind().as_str(), node.range())?;

            for (label, comments) in [
                ("leading", self.map.leading(node)),
                ("dangling", self.map.dangling(node)),
                ("trailing", self.map.trailing(node)),
            ] {
                for comment in comments {
                    self.fmt_comment(f, label, comment)?;
                }
            }
        }

        Ok(())
    }
}

impl DebugComments<'_> {
    fn fmt_comment(
        &self,
        f: &mut Formatter<'_>,
        label: &str,
        comment: &SourceComment,
    ) -> std::fmt::Result {
        write!(f, "  {label}: {:?}", &self.source[comment.range()])?;
        if let Some(marker) = comment.marker() {
            write!(f, " marker={marker}")?;
        }
        if comment.is_consumed() {
            write!(f, " consumed")?;
        }
        writeln!(f)
    }
}
