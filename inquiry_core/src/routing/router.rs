//! Priority-ordered subcategory routing within a category.

use serde::{Deserialize, Serialize};

use word_bank::{Answer, CandidatePool};

use crate::interaction::{GameIo, Reply};

/// One router question tied to a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterEntry {
    pub group: String,
    pub question: String,
}

/// A fixed, ordered list of subcategory questions plus an implicit
/// majority fallback. Order encodes priority, not exhaustiveness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterTable {
    pub title: String,
    pub entries: Vec<RouterEntry>,
}

impl RouterTable {
    /// Build a router table from (group, question) pairs.
    pub fn new(title: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        Self {
            title: title.into(),
            entries: pairs
                .iter()
                .map(|(group, question)| RouterEntry {
                    group: group.to_string(),
                    question: question.to_string(),
                })
                .collect(),
        }
    }

    /// Pick the group to narrow within.
    ///
    /// Questions are asked in priority order, skipping groups absent
    /// from the pool; the first affirmative answer wins and later pairs
    /// are never evaluated. Anything else (negative, unknown, even the
    /// exit token) moves on to the next pair. With no affirmative
    /// answer the pool's largest group is returned, so the result is
    /// always a group actually backed by pool rows. `None` only for an
    /// empty pool.
    pub fn route(&self, pool: &CandidatePool, io: &mut dyn GameIo) -> Option<String> {
        io.say("");
        io.say(&self.title);
        io.say("");

        for entry in &self.entries {
            if !pool.has_group(&entry.group) {
                continue;
            }
            let reply = io.ask(&format!("{} (sí/no/no sé)", entry.question));
            if matches!(reply, Reply::Answer(Answer::Yes)) {
                return Some(entry.group.clone());
            }
        }
        pool.largest_group().map(str::to_string)
    }
}
