//! A decider that replays queued answers.
//!
//! Answers are consumed front to back. When the queue is empty, or its
//! front answer is for a different kind of question, a fallback answers
//! instead: pick the first offered card, confirm everything, and choose
//! the color the player holds most of.
//!
//! Every notice and request is recorded for inspection.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{Audience, Decider, Notice, Prompt, Request, Selection};
use crate::cards::Color;
use crate::core::PlayerId;
use crate::game::GameView;

/// A queued answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Select(Selection),
    Color(Color),
    Confirm(bool),
}

/// Replays a script of answers, falling back to simple defaults.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    script: VecDeque<Answer>,
    notices: Vec<(Notice, Audience)>,
    requests: Vec<(PlayerId, Request)>,
    prompts: Vec<(PlayerId, Prompt)>,
}

impl Scripted {
    /// A decider with an empty script (fallback only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A decider that will give these answers first.
    #[must_use]
    pub fn with_script(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            script: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue more answers.
    pub fn push(&mut self, answer: Answer) {
        self.script.push_back(answer);
    }

    /// Every notice received, in order.
    #[must_use]
    pub fn notices(&self) -> &[(Notice, Audience)] {
        &self.notices
    }

    /// Every card request received, in order.
    #[must_use]
    pub fn requests(&self) -> &[(PlayerId, Request)] {
        &self.requests
    }

    /// Every yes/no question received, in order.
    #[must_use]
    pub fn prompts(&self) -> &[(PlayerId, Prompt)] {
        &self.prompts
    }

    fn next_if(&mut self, pred: impl Fn(&Answer) -> bool) -> Option<Answer> {
        if self.script.front().is_some_and(pred) {
            self.script.pop_front()
        } else {
            None
        }
    }

    fn most_held_color(view: &GameView<'_>) -> Color {
        let mut counts = [0usize; 4];
        for card in view.hand() {
            if let Some(color) = card.color() {
                counts[Color::ALL.iter().position(|c| *c == color).unwrap_or(0)] += 1;
            }
        }
        let best = (0..4).max_by_key(|&i| (counts[i], std::cmp::Reverse(i))).unwrap_or(0);
        Color::ALL[best]
    }
}

impl Decider for Scripted {
    fn choose_among(&mut self, player: PlayerId, _view: &GameView<'_>, request: &Request) -> Selection {
        self.requests.push((player, request.clone()));
        if let Some(Answer::Select(selection)) = self.next_if(|a| matches!(a, Answer::Select(_))) {
            return selection;
        }
        request
            .options
            .first()
            .map_or(Selection::Decline, |card| Selection::Pick(card.id()))
    }

    fn choose_color(&mut self, _player: PlayerId, view: &GameView<'_>) -> Color {
        match self.next_if(|a| matches!(a, Answer::Color(_))) {
            Some(Answer::Color(color)) => color,
            _ => Self::most_held_color(view),
        }
    }

    fn confirm(&mut self, player: PlayerId, _view: &GameView<'_>, prompt: Prompt) -> bool {
        self.prompts.push((player, prompt));
        match self.next_if(|a| matches!(a, Answer::Confirm(_))) {
            Some(Answer::Confirm(answer)) => answer,
            _ => true,
        }
    }

    fn notify(&mut self, notice: &Notice, audience: Audience) {
        self.notices.push((notice.clone(), audience));
    }
}
