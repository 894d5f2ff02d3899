//! Hierarchy building.
//!
//! Consumes the full ordered line sequence and produces a forest of
//! records whose parent/child edges mirror the level indentation of the
//! source. A single shift-reduce pass: records wait on an explicit
//! stack until a line at the same or a shallower level closes their
//! scope, at which point they attach to the record below them on the
//! stack (or to the top-level forest).

use crate::error::Result;

use super::line::parse_raw_line;
use super::session::ParseSession;
use super::types::Record;

/// Parse raw lines into the record forest. The first tokenizer error
/// aborts the pass; no partial forest is returned.
pub fn parse_raw_lines(lines: &[String], session: &mut ParseSession) -> Result<Vec<Record>> {
    let mut forest: Vec<Record> = Vec::new();
    let mut stack: Vec<Record> = Vec::new();
    let mut top_level_count = 0;

    for (i, line) in lines.iter().enumerate() {
        let record = parse_raw_line(line, i + 1, session)?;

        // Equal levels pop too: a sibling closes the previous scope.
        while stack
            .last()
            .map_or(false, |top| top.level >= record.level)
        {
            attach(&mut stack, &mut forest);
        }

        if stack.is_empty() {
            // The record will land in the forest at this position once
            // its scope closes; bucket it by role now.
            session.bucket_top_level(&record, top_level_count);
            top_level_count += 1;
        }

        stack.push(record);
    }

    while !stack.is_empty() {
        attach(&mut stack, &mut forest);
    }

    Ok(forest)
}

/// Pop the top of the stack and attach it to its parent (the new top)
/// or to the forest.
fn attach(stack: &mut Vec<Record>, forest: &mut Vec<Record>) {
    if let Some(record) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(record),
            None => forest.push(record),
        }
    }
}
