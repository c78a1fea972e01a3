//! The fixed top-level classification tree.

use serde::{Deserialize, Serialize};

use word_bank::Answer;

use crate::interaction::{GameIo, Reply};

/// Leaf labels of the classification tree.
///
/// Each label identifies either a category flow (backed by a dataset
/// directory) or a terminal outcome; the mapping is fixed and every
/// label is handled by exactly one of `category_name` and
/// `terminal_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowLabel {
    Personas,
    Animales,
    Plantas,
    HongosMicrobios,
    Objetos,
    Lugares,
    Conceptos,
    Verbos,
    Adjetivos,
    /// Living, but neither human, animal, plant, nor fungus/microbe.
    DescartadoVivos,
    /// Fits no known category.
    NoClasificado,
}

impl FlowLabel {
    /// Dataset directory name for labels that lead to a candidate pool.
    pub fn category_name(self) -> Option<&'static str> {
        match self {
            FlowLabel::Personas => Some("Personas"),
            FlowLabel::Animales => Some("Animales"),
            FlowLabel::HongosMicrobios => Some("Hongos_Microbios"),
            FlowLabel::Objetos => Some("Objetos"),
            FlowLabel::Lugares => Some("Lugares"),
            FlowLabel::Conceptos => Some("Conceptos"),
            FlowLabel::Verbos => Some("Verbos"),
            FlowLabel::Adjetivos => Some("Adjetivos"),
            FlowLabel::Plantas | FlowLabel::DescartadoVivos | FlowLabel::NoClasificado => None,
        }
    }

    /// Closing message for labels that end the session without a pool.
    pub fn terminal_message(self) -> Option<&'static str> {
        match self {
            FlowLabel::Plantas => Some("Aún no hay datasets de Plantas. (pendiente)"),
            FlowLabel::DescartadoVivos => Some("No es animal, planta ni hongo/microbio. (fin)"),
            FlowLabel::NoClasificado => Some("No encaja en ninguna categoría conocida. (fin)"),
            _ => None,
        }
    }
}

/// An immutable binary decision node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DecisionNode {
    /// Internal node: a strict yes/no question with two children.
    Question {
        text: String,
        yes: Box<DecisionNode>,
        no: Box<DecisionNode>,
    },
    /// Terminal node naming a flow.
    Leaf(FlowLabel),
}

impl DecisionNode {
    /// Build an internal question node.
    pub fn question(text: impl Into<String>, yes: DecisionNode, no: DecisionNode) -> Self {
        DecisionNode::Question {
            text: text.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    /// Build a leaf.
    pub fn leaf(label: FlowLabel) -> Self {
        DecisionNode::Leaf(label)
    }
}

/// The fixed classification tree asked at the start of every game.
pub fn classification_tree() -> DecisionNode {
    use DecisionNode as Node;
    use FlowLabel::*;

    Node::question(
        "¿Es un ser vivo?",
        Node::question(
            "¿Es humano?",
            Node::leaf(Personas),
            Node::question(
                "¿Es un animal?",
                Node::leaf(Animales),
                Node::question(
                    "¿Es una planta?",
                    Node::leaf(Plantas),
                    Node::question(
                        "¿Es un hongo o microbio?",
                        Node::leaf(HongosMicrobios),
                        Node::leaf(DescartadoVivos),
                    ),
                ),
            ),
        ),
        Node::question(
            "¿Es un objeto?",
            Node::leaf(Objetos),
            Node::question(
                "¿Es un lugar?",
                Node::leaf(Lugares),
                Node::question(
                    "¿Es un concepto abstracto?",
                    Node::leaf(Conceptos),
                    Node::question(
                        "¿Es un verbo o una acción?",
                        Node::leaf(Verbos),
                        Node::question(
                            "¿Es un adjetivo o cualidad?",
                            Node::leaf(Adjetivos),
                            Node::leaf(NoClasificado),
                        ),
                    ),
                ),
            ),
        ),
    )
}

/// Walk the tree to a leaf and return its label.
///
/// Tree questions are a strict two-way gate: unknown answers and the
/// exit token are not accepted here and re-prompt, unlike
/// within-category narrowing where unknown is a valid third answer.
pub fn classify(tree: &DecisionNode, io: &mut dyn GameIo) -> FlowLabel {
    let mut node = tree;
    loop {
        match node {
            DecisionNode::Leaf(label) => return *label,
            DecisionNode::Question { text, yes, no } => loop {
                match io.ask(&format!("{} (sí/no)", text)) {
                    Reply::Answer(Answer::Yes) => {
                        node = yes.as_ref();
                        break;
                    }
                    Reply::Answer(Answer::No) => {
                        node = no.as_ref();
                        break;
                    }
                    _ => io.say("Responde 'sí' o 'no'."),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ScriptedIo;

    #[test]
    fn test_living_human_reaches_personas() {
        let tree = classification_tree();
        let mut io = ScriptedIo::from_tokens(["sí", "sí"]);

        assert_eq!(classify(&tree, &mut io), FlowLabel::Personas);
        assert_eq!(io.questions.len(), 2);
    }

    #[test]
    fn test_all_no_path_reaches_no_clasificado() {
        let tree = classification_tree();
        let mut io = ScriptedIo::from_tokens(["no", "no", "no", "no", "no", "no"]);

        assert_eq!(classify(&tree, &mut io), FlowLabel::NoClasificado);
    }

    #[test]
    fn test_living_but_nothing_known_is_discarded() {
        let tree = classification_tree();
        let mut io = ScriptedIo::from_tokens(["sí", "no", "no", "no", "no"]);

        assert_eq!(classify(&tree, &mut io), FlowLabel::DescartadoVivos);
    }

    #[test]
    fn test_unknown_answers_reprompt() {
        let tree = classification_tree();
        let mut io = ScriptedIo::from_tokens(["no sé", "sí", "sí"]);

        assert_eq!(classify(&tree, &mut io), FlowLabel::Personas);
        // The first question was asked twice.
        assert_eq!(io.questions.len(), 3);
        assert_eq!(io.questions[0], io.questions[1]);
        assert!(io.lines.iter().any(|l| l.contains("Responde")));
    }

    #[test]
    fn test_exit_token_is_not_accepted_at_tree_questions() {
        let tree = classification_tree();
        let mut io = ScriptedIo::from_tokens(["salir", "no", "sí"]);

        assert_eq!(classify(&tree, &mut io), FlowLabel::Objetos);
        assert_eq!(io.questions.len(), 3);
    }

    #[test]
    fn test_every_label_is_handled_exactly_once() {
        let labels = [
            FlowLabel::Personas,
            FlowLabel::Animales,
            FlowLabel::Plantas,
            FlowLabel::HongosMicrobios,
            FlowLabel::Objetos,
            FlowLabel::Lugares,
            FlowLabel::Conceptos,
            FlowLabel::Verbos,
            FlowLabel::Adjetivos,
            FlowLabel::DescartadoVivos,
            FlowLabel::NoClasificado,
        ];
        for label in labels {
            assert!(
                label.category_name().is_some() != label.terminal_message().is_some(),
                "label {:?} must map to a category or a terminal message",
                label
            );
        }
    }
}
