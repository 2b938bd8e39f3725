//! Chat-style specialist-matching conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The conversation collects one answer per scripted question. Answering the
//! last question is the completion event: the collected criteria become the
//! result set handed to the page's `ViewFlow`.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

/// One scripted question with its answer chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "topic",
        label: "Focus",
        prompt: "What would you like to work on?",
        options: &["Anxiety", "Low mood", "Relationships", "Sleep", "Burnout"],
    },
    Question {
        id: "format",
        label: "Format",
        prompt: "How would you like to meet?",
        options: &["Video", "In person", "Chat"],
    },
    Question {
        id: "schedule",
        label: "Schedule",
        prompt: "When suits you best?",
        options: &["Mornings", "Evenings", "Weekends"],
    },
];

/// A collected answer, shown on the result screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCriterion {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatMessage {
    Prompt(&'static str),
    Reply(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    answers: Vec<String>,
}

impl ChatState {
    /// The question awaiting an answer, or `None` once all are answered.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.answers.len())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() >= QUESTIONS.len()
    }

    /// Record an answer to the current question.
    ///
    /// Returns the full criteria list when this answer completes the
    /// conversation. Values that are not one of the current options are
    /// ignored.
    pub fn answer(&mut self, value: &str) -> Option<Vec<MatchCriterion>> {
        let question = self.current_question()?;
        if !question.options.contains(&value) {
            return None;
        }
        self.answers.push(value.to_owned());
        self.is_complete().then(|| self.criteria())
    }

    #[must_use]
    pub fn criteria(&self) -> Vec<MatchCriterion> {
        QUESTIONS
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| MatchCriterion { label: q.label, value: a.clone() })
            .collect()
    }

    /// Prompts and replies in conversation order, ending with the open prompt.
    #[must_use]
    pub fn transcript(&self) -> Vec<ChatMessage> {
        let mut out = Vec::with_capacity(self.answers.len() * 2 + 1);
        for (question, answer) in QUESTIONS.iter().zip(&self.answers) {
            out.push(ChatMessage::Prompt(question.prompt));
            out.push(ChatMessage::Reply(answer.clone()));
        }
        if let Some(question) = self.current_question() {
            out.push(ChatMessage::Prompt(question.prompt));
        }
        out
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
