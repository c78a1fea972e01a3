//! Game sessions - category loading, caching, and the full play flow.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use word_bank::{load_category_dir, AttributeTable, CandidatePool, GameConfig};

use crate::interaction::GameIo;
use crate::narrowing::{narrow_group, NarrowingOutcome};
use crate::routing::{classification_tree, classify, router_for, DecisionNode, FlowLabel};

/// Supplies the attribute tables of a category.
///
/// This is the input collaborator seam: the session owns one provider,
/// and swapping it keeps the engine free of filesystem concerns in
/// tests. Returning zero tables means "no data for this category".
pub trait TableProvider {
    fn load(&self, category: &str) -> Vec<AttributeTable>;
}

/// Loads categories from per-category CSV directories under a root.
#[derive(Debug, Clone)]
pub struct CsvTableProvider {
    root: PathBuf,
}

impl CsvTableProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TableProvider for CsvTableProvider {
    fn load(&self, category: &str) -> Vec<AttributeTable> {
        let dir = self.root.join(category);
        if !dir.is_dir() {
            warn!("no dataset directory {}", dir.display());
            return Vec::new();
        }
        match load_category_dir(&dir) {
            Ok(tables) => tables,
            Err(err) => {
                warn!("failed to load {}: {}", dir.display(), err);
                Vec::new()
            }
        }
    }
}

/// A category's pool plus the per-group tables it was built from.
///
/// The tables are kept alongside the pool because each group's ordered
/// column list stays authoritative for narrowing even after pooling.
#[derive(Debug, Clone, Default)]
pub struct CategoryData {
    pub pool: CandidatePool,
    pub tables: Vec<AttributeTable>,
}

impl CategoryData {
    /// The source table of a group, when the group is known.
    pub fn table_for(&self, group: &str) -> Option<&AttributeTable> {
        self.tables.iter().find(|table| table.group == group)
    }
}

/// The result of one full game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    /// Leaf the classification tree reached.
    pub label: FlowLabel,

    /// Narrowing outcome, when the label led to a populated pool.
    pub outcome: Option<NarrowingOutcome>,
}

/// One interactive session: the classification tree, the settings, and
/// the category cache.
///
/// Categories are loaded at most once per session; later visits reuse
/// the cached data, including categories that produced no tables.
pub struct GameSession<P: TableProvider> {
    provider: P,
    config: GameConfig,
    tree: DecisionNode,
    cache: HashMap<String, CategoryData>,
}

impl<P: TableProvider> GameSession<P> {
    /// Create a session over the given provider and settings.
    pub fn new(provider: P, config: GameConfig) -> Self {
        Self {
            provider,
            config,
            tree: classification_tree(),
            cache: HashMap::new(),
        }
    }

    /// The memoized data of a category, loading it on first use.
    pub fn category(&mut self, name: &str) -> &CategoryData {
        match self.cache.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(slot) => {
                let tables = self.provider.load(name);
                let pool = CandidatePool::build(&tables);
                slot.insert(CategoryData { pool, tables })
            }
        }
    }

    /// Play one full game: classify, route, narrow, report.
    pub fn play(&mut self, io: &mut dyn GameIo) -> SessionResult {
        let label = classify(&self.tree, io);

        let Some(category) = label.category_name() else {
            if let Some(message) = label.terminal_message() {
                io.say(message);
            }
            return SessionResult {
                label,
                outcome: None,
            };
        };

        let config = self.config.clone();
        let data = self.category(category);

        if data.pool.is_empty() {
            io.say(&format!("Aún no hay datasets de {}.", category));
            return SessionResult {
                label,
                outcome: None,
            };
        }

        let target = match router_for(label) {
            Some(router) => router.route(&data.pool, io),
            None => data.pool.largest_group().map(str::to_string),
        };
        let Some(target) = target else {
            io.say(&format!("Aún no hay datasets de {}.", category));
            return SessionResult {
                label,
                outcome: None,
            };
        };

        let outcome = narrow_group(&data.pool, data.table_for(&target), &target, &config, io);
        SessionResult {
            label,
            outcome: Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ScriptedIo;
    use std::cell::RefCell;
    use std::rc::Rc;
    use word_bank::Item;

    /// Serves fixed tables per category and counts load calls.
    struct StubProvider {
        categories: HashMap<String, Vec<AttributeTable>>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl StubProvider {
        fn new(categories: HashMap<String, Vec<AttributeTable>>) -> (Self, Rc<RefCell<Vec<String>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    categories,
                    calls: Rc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl TableProvider for StubProvider {
        fn load(&self, category: &str) -> Vec<AttributeTable> {
            self.calls.borrow_mut().push(category.to_string());
            self.categories.get(category).cloned().unwrap_or_default()
        }
    }

    fn personas_tables() -> Vec<AttributeTable> {
        let mut personajes = AttributeTable::new("Personajes", vec!["es_real".into()]);
        for (name, real) in [
            ("batman", false),
            ("cleopatra", true),
            ("quijote", false),
            ("frida", true),
        ] {
            personajes.push_row(Item::new(name, "Personajes").with_attribute("es_real", real));
        }

        let mut profesiones = AttributeTable::new("Profesiones", vec!["usa_uniforme".into()]);
        for (name, uniforme) in [("bombero", true), ("abogado", false)] {
            profesiones
                .push_row(Item::new(name, "Profesiones").with_attribute("usa_uniforme", uniforme));
        }

        vec![personajes, profesiones]
    }

    fn personas_session() -> (GameSession<StubProvider>, Rc<RefCell<Vec<String>>>) {
        let mut categories = HashMap::new();
        categories.insert("Personas".to_string(), personas_tables());
        let (provider, calls) = StubProvider::new(categories);
        (GameSession::new(provider, GameConfig::default()), calls)
    }

    #[test]
    fn test_full_personas_game() {
        let (mut session, _calls) = personas_session();
        // Tree: living, human. Router: yes to Personajes.
        // Narrowing: 4 > 3, es_real splits 2/2; answer sí.
        let mut io = ScriptedIo::from_tokens(["sí", "sí", "sí", "sí"]);

        let result = session.play(&mut io);

        assert_eq!(result.label, FlowLabel::Personas);
        let outcome = result.outcome.unwrap();
        assert_eq!(outcome.group, "Personajes");
        let names: Vec<_> = outcome.candidates.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["cleopatra", "frida"]);
    }

    #[test]
    fn test_terminal_label_reports_and_stops() {
        let (mut session, calls) = personas_session();
        let mut io = ScriptedIo::from_tokens(["no", "no", "no", "no", "no", "no"]);

        let result = session.play(&mut io);

        assert_eq!(result.label, FlowLabel::NoClasificado);
        assert!(result.outcome.is_none());
        assert!(io.lines.iter().any(|l| l.contains("No encaja")));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_plantas_is_terminal_without_loading() {
        let (mut session, calls) = personas_session();
        let mut io = ScriptedIo::from_tokens(["sí", "no", "no", "sí"]);

        let result = session.play(&mut io);

        assert_eq!(result.label, FlowLabel::Plantas);
        assert!(result.outcome.is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_category_reports_no_data() {
        let (provider, _calls) = StubProvider::new(HashMap::new());
        let mut session = GameSession::new(provider, GameConfig::default());
        let mut io = ScriptedIo::from_tokens(["sí", "sí"]);

        let result = session.play(&mut io);

        assert_eq!(result.label, FlowLabel::Personas);
        assert!(result.outcome.is_none());
        assert!(io
            .lines
            .iter()
            .any(|l| l.contains("Aún no hay datasets de Personas")));
    }

    #[test]
    fn test_category_is_loaded_once() {
        let (mut session, calls) = personas_session();

        session.category("Personas");
        session.category("Personas");

        assert_eq!(calls.borrow().as_slice(), ["Personas".to_string()]);
    }

    #[test]
    fn test_empty_category_is_cached_too() {
        let (provider, calls) = StubProvider::new(HashMap::new());
        let mut session = GameSession::new(provider, GameConfig::default());

        assert!(session.category("Conceptos").pool.is_empty());
        assert!(session.category("Conceptos").pool.is_empty());

        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_hongos_targets_majority_group_without_router() {
        let mut levaduras = AttributeTable::new("Levaduras", vec!["fermenta".into()]);
        for name in ["levadura", "kefir"] {
            levaduras.push_row(Item::new(name, "Levaduras").with_attribute("fermenta", true));
        }
        let mut mohos = AttributeTable::new("Mohos", vec!["fermenta".into()]);
        mohos.push_row(Item::new("penicillium", "Mohos"));

        let mut categories = HashMap::new();
        categories.insert("Hongos_Microbios".to_string(), vec![levaduras, mohos]);
        let (provider, _calls) = StubProvider::new(categories);
        let mut session = GameSession::new(provider, GameConfig::default());

        // Tree path: living, not human, not animal, not plant, fungus.
        let mut io = ScriptedIo::from_tokens(["sí", "no", "no", "no", "sí"]);

        let result = session.play(&mut io);

        assert_eq!(result.label, FlowLabel::HongosMicrobios);
        let outcome = result.outcome.unwrap();
        // No router questions: the majority group is targeted directly,
        // and three candidates need no narrowing.
        assert_eq!(outcome.group, "Levaduras");
        assert!(outcome.asked.is_empty());
    }

    #[test]
    fn test_router_fallback_when_no_router_groups_present() {
        // A Personas pool whose tables lack every router group: all
        // router questions are skipped and the majority fallback names
        // a group that narrowing then finds normally.
        let mut otros = AttributeTable::new("Otros", vec!["es_real".into()]);
        for name in ["uno", "dos"] {
            otros.push_row(Item::new(name, "Otros"));
        }
        let mut categories = HashMap::new();
        categories.insert("Personas".to_string(), vec![otros]);
        let (provider, _calls) = StubProvider::new(categories);
        let mut session = GameSession::new(provider, GameConfig::default());

        let mut io = ScriptedIo::from_tokens(["sí", "sí"]);

        let result = session.play(&mut io);

        let outcome = result.outcome.unwrap();
        assert_eq!(outcome.group, "Otros");
        assert_eq!(outcome.candidates.len(), 2);
    }
}
