//! The narrowing loop - progressive filtering within one group.
//!
//! Each iteration works as follows:
//! 1. **Select**: pick the entropy-maximizing attribute not yet asked
//! 2. **Ask**: present it as a yes/no/unknown question
//! 3. **Filter**: a yes/no answer keeps the candidates matching it; an
//!    unknown answer retires the attribute without filtering
//! 4. **Stop**: candidate set small enough, question cap reached, no
//!    informative attribute left, or the player exits

mod selector;

pub use selector::*;

use serde::{Deserialize, Serialize};

use word_bank::{Answer, AttributeTable, CandidatePool, GameConfig, Item};

use crate::interaction::{GameIo, Reply, EXIT_TOKEN};

/// How many result rows are displayed. The outcome always carries the
/// exact filtered set; only the printout is capped.
const RESULT_PREVIEW_ROWS: usize = 12;

/// Where a narrowing run ended up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrowingOutcome {
    /// Group the questions were scoped to.
    pub group: String,

    /// The exact filtered candidate set.
    pub candidates: Vec<Item>,

    /// Attributes asked, in order.
    pub asked: Vec<String>,

    /// Whether the player ended the loop with the exit token.
    pub exited: bool,
}

/// Narrow the target group's candidates by asking attribute questions.
///
/// `table` is the target group's source table; its ordered column list
/// is what may be asked for the group. When the group has no table (an
/// unknown group), the loop degrades to the whole pool with every pool
/// column eligible rather than failing.
pub fn narrow_group(
    pool: &CandidatePool,
    table: Option<&AttributeTable>,
    target_group: &str,
    config: &GameConfig,
    io: &mut dyn GameIo,
) -> NarrowingOutcome {
    let (mut candidates, eligible): (Vec<Item>, Vec<String>) = match table {
        Some(table) => (
            pool.items_in_group(target_group)
                .into_iter()
                .cloned()
                .collect(),
            table
                .attribute_names
                .iter()
                .filter(|column| pool.has_attribute(column))
                .cloned()
                .collect(),
        ),
        None => {
            io.say(&format!(
                "No encuentro la subcategoría '{}'. Sigo con el grupo completo.",
                target_group
            ));
            (pool.items().to_vec(), pool.attribute_names().to_vec())
        }
    };

    io.say(&format!(
        "\n— Preguntas dentro de {} — (sí/no/no sé, '{}' para terminar)\n",
        target_group, EXIT_TOKEN
    ));

    let mut asked: Vec<String> = Vec::new();
    let mut unknown_streak = 0u32;
    let mut exited = false;

    while candidates.len() > config.target_pool_size && asked.len() < config.max_questions {
        let remaining: Vec<String> = eligible
            .iter()
            .filter(|column| !asked.contains(column))
            .cloned()
            .collect();
        let Some(attribute) = pick_next_attribute(&candidates, &remaining) else {
            break;
        };
        let attribute = attribute.to_string();

        let question = format!(
            "[{} {}] ¿{}?",
            candidates.len(),
            target_group,
            humanize_attribute(&attribute)
        );
        match io.ask(&question) {
            Reply::Exit => {
                exited = true;
                break;
            }
            Reply::Answer(Answer::Unknown) => {
                asked.push(attribute);
                unknown_streak += 1;
                io.say(&format!("→ No sé; seguimos. (no_sé={})", unknown_streak));
            }
            Reply::Answer(answer) => {
                let before = candidates.len();
                apply_filter(&mut candidates, &attribute, answer == Answer::Yes);
                io.say(&format!(
                    "→ Filtro {}={} | {}→{}",
                    attribute,
                    answer,
                    before,
                    candidates.len()
                ));
                asked.push(attribute);
                unknown_streak = 0;
            }
        }
    }

    report(&candidates, io);

    NarrowingOutcome {
        group: target_group.to_string(),
        candidates,
        asked,
        exited,
    }
}

/// Keep the candidates whose attribute value equals the answer.
fn apply_filter(candidates: &mut Vec<Item>, attribute: &str, wanted: bool) {
    candidates.retain(|item| item.attribute(attribute) == wanted);
}

/// Turn an attribute column into question text.
fn humanize_attribute(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

fn report(candidates: &[Item], io: &mut dyn GameIo) {
    io.say("\n— Resultado —");
    if candidates.is_empty() {
        io.say("(Sin candidatos tras los filtros)");
        return;
    }
    for item in candidates.iter().take(RESULT_PREVIEW_ROWS) {
        io.say(&format!(
            "  {} ({} / {})",
            item.name, item.group, item.subcategory
        ));
    }
    if candidates.len() > RESULT_PREVIEW_ROWS {
        io.say(&format!(
            "  … y {} más",
            candidates.len() - RESULT_PREVIEW_ROWS
        ));
    }
}
