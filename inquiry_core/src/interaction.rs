//! Interaction surface between the engine and the player.

use std::collections::VecDeque;

use word_bank::Answer;

/// Token that ends a narrowing loop immediately. Honored only inside
/// narrowing; tree and router questions treat it like any other
/// unrecognized input.
pub const EXIT_TOKEN: &str = "salir";

/// A raw reply to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Answer(Answer),
    Exit,
}

impl Reply {
    /// Parse free text, recognizing the exit token ahead of the shared
    /// answer vocabulary.
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case(EXIT_TOKEN) {
            Reply::Exit
        } else {
            Reply::Answer(Answer::parse(text))
        }
    }

    /// An affirmative reply.
    pub fn yes() -> Self {
        Reply::Answer(Answer::Yes)
    }

    /// A negative reply.
    pub fn no() -> Self {
        Reply::Answer(Answer::No)
    }

    /// A "don't know" reply.
    pub fn unknown() -> Self {
        Reply::Answer(Answer::Unknown)
    }
}

/// The blocking question/answer surface the engine drives.
///
/// The session suspends in `ask` until a reply arrives; output through
/// `say` is a pure sink with no feedback into control flow.
pub trait GameIo {
    /// Present a question and block for the reply.
    fn ask(&mut self, question: &str) -> Reply;

    /// Emit a line of output.
    fn say(&mut self, line: &str);
}

/// Canned-reply driver for tests and non-interactive runs.
///
/// Records every question and output line for inspection. Panics when
/// asked more questions than the script provides.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    replies: VecDeque<Reply>,

    /// Questions asked, in order.
    pub questions: Vec<String>,

    /// Output lines, in order.
    pub lines: Vec<String>,
}

impl ScriptedIo {
    /// Script from prepared replies.
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            questions: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Script from raw tokens, exactly as a player would type them.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(tokens.into_iter().map(Reply::parse))
    }
}

impl GameIo for ScriptedIo {
    fn ask(&mut self, question: &str) -> Reply {
        self.questions.push(question.to_string());
        match self.replies.pop_front() {
            Some(reply) => reply,
            None => panic!("scripted replies exhausted at question {:?}", question),
        }
    }

    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
