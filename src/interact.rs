// Copyright (C) 2020-2024 Andy Kurnia.

// The engine asks for one line at a time and reports what happened as events.
// Console front ends print the events; scripted runs just collect them.

pub trait Input {
    // None once no more input will ever come.
    fn next_input(&mut self, prompt: &str) -> Option<String>;
}

pub trait Output {
    fn emit(&mut self, event: Event);
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Dealt {
        hand: String,
        replay: bool,
    },
    BagShort {
        wanted: usize,
        drawn: usize,
    },
    CurrentHand {
        hand: String,
    },
    Substituted {
        old_letter: String,
        new_letter: String,
        hand: String,
    },
    SubstitutionFailed {
        letter: String,
    },
    InvalidInput {
        input: String,
    },
    WordPlayed {
        word: String,
        points: u32,
        total: u32,
    },
    WordRejected {
        word: String,
    },
    HandFinished {
        score: u32,
    },
    ReplayKept {
        first: u32,
        second: u32,
        kept: u32,
    },
    SeriesFinished {
        total: u32,
    },
}

#[derive(Default)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    // every prompt asked so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedInput {
    fn next_input(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }
}

#[derive(Default)]
pub struct EventLog(pub Vec<Event>);

impl Output for EventLog {
    fn emit(&mut self, event: Event) {
        self.0.push(event);
    }
}
