use anyhow::*;
use rand::seq::SliceRandom;
use std::time::Duration;

use crate::game::answer;
use crate::game::catalog::CatalogHandle;
use crate::game::settings::{Mode, ModeSettings};


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionView {
    pub song: String,
    pub question: String,
    /// 1-based position within the session.
    pub number: usize,
    pub total: usize,
    pub time_remaining: Duration,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemOutcome {
    pub song: String,
    pub revealed: String,
    pub correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    pub mode: Mode,
    pub score: usize,
    pub total: usize,
    pub breakdown: Vec<ItemOutcome>,
}

struct ActiveState {
    mode: Mode,
    catalog: CatalogHandle,
    order: Vec<usize>,
    current_index: usize,
    time_elapsed: Duration,
    time_limit: Duration,
    results: Vec<bool>,
}

impl ActiveState {
    fn record_result(&mut self, correct: bool) {
        self.results.push(correct);
        self.current_index += 1;
        // The next question gets a full fresh countdown.
        self.time_elapsed = Duration::default();
    }

    fn is_over(&self) -> bool {
        self.current_index >= self.order.len()
    }
}

struct FinishedState {
    summary: Summary,
    score_recorded: bool,
}

enum Phase {
    NotStarted,
    InProgress(ActiveState),
    Finished(FinishedState),
}

/// Drives one play-through: question order, per-question countdown,
/// scoring, and the once-per-session leaderboard gate. The host serializes
/// all calls; time only advances through `tick`.
pub struct Session {
    phase: Phase,
}

impl Session {
    pub fn new() -> Session {
        Session {
            phase: Phase::NotStarted,
        }
    }

    /// Draws a random sample from the catalog and fixes the question order
    /// for the lifetime of the session. A catalog smaller than the
    /// requested count is used whole.
    pub fn start(
        &mut self,
        mode: Mode,
        catalog: CatalogHandle,
        settings: &ModeSettings,
    ) -> Result<()> {
        match self.phase {
            Phase::NotStarted => (),
            Phase::InProgress(_) => return Err(anyhow!("A session is already underway")),
            Phase::Finished(_) => return Err(anyhow!("Reset the finished session first")),
        }
        if catalog.is_empty() {
            return Err(anyhow!("The quiz catalog has no questions"));
        }

        let mut order: Vec<usize> = (0..catalog.len()).collect();
        order.shuffle(&mut rand::thread_rng());
        order.truncate(settings.question_count);

        self.phase = Phase::InProgress(ActiveState {
            mode,
            catalog,
            order,
            current_index: 0,
            time_elapsed: Duration::default(),
            time_limit: settings.time_limit,
            results: Vec::new(),
        });
        Ok(())
    }

    /// Advances the countdown. When the current question's deadline has
    /// passed, records a single negative result for it and moves on. Only
    /// one question can time out per call, so the result sequence stays one
    /// entry per question no matter how often the host polls.
    pub fn tick(&mut self, dt: Duration) {
        let over = match &mut self.phase {
            Phase::InProgress(state) => {
                state.time_elapsed += dt;
                if state.time_elapsed >= state.time_limit {
                    state.record_result(false);
                }
                state.is_over()
            }
            _ => false,
        };
        if over {
            self.finish();
        }
    }

    /// Scores a submitted answer against the current question and advances.
    pub fn guess(&mut self, text: &str) -> Result<bool> {
        let (correct, over) = match &mut self.phase {
            Phase::InProgress(state) => {
                let item_index = state.order[state.current_index];
                let correct = answer::is_correct(text, &state.catalog.items()[item_index].answer);
                state.record_result(correct);
                (correct, state.is_over())
            }
            _ => return Err(anyhow!("There is no active question")),
        };
        if over {
            self.finish();
        }
        Ok(correct)
    }

    pub fn current_question(&self) -> Option<QuestionView> {
        match &self.phase {
            Phase::InProgress(state) => {
                let item_index = *state.order.get(state.current_index)?;
                let item = &state.catalog.items()[item_index];
                Some(QuestionView {
                    song: item.song.clone(),
                    question: item.question.clone(),
                    number: state.current_index + 1,
                    total: state.order.len(),
                    time_remaining: state
                        .time_limit
                        .checked_sub(state.time_elapsed)
                        .unwrap_or_default(),
                })
            }
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        match self.phase {
            Phase::Finished(_) => true,
            _ => false,
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        match &self.phase {
            Phase::Finished(state) => Some(&state.summary),
            _ => None,
        }
    }

    /// True when this finished Hard run may still submit a name: threshold
    /// met and nothing recorded yet.
    pub fn qualifies_for_leaderboard(&self, threshold: usize) -> bool {
        match &self.phase {
            Phase::Finished(state) => {
                state.summary.mode == Mode::Hard
                    && state.summary.score >= threshold
                    && !state.score_recorded
            }
            _ => false,
        }
    }

    /// Burns the session's single leaderboard submission.
    pub fn mark_score_recorded(&mut self) -> Result<()> {
        match &mut self.phase {
            Phase::Finished(state) => {
                if state.score_recorded {
                    return Err(anyhow!("This session's score was already recorded"));
                }
                state.score_recorded = true;
                Ok(())
            }
            _ => Err(anyhow!("The session is not finished")),
        }
    }

    /// Back to `NotStarted`, discarding the sampled questions and results.
    /// Persisted leaderboard data is untouched.
    pub fn reset(&mut self) {
        self.phase = Phase::NotStarted;
    }

    fn finish(&mut self) {
        if let Phase::InProgress(state) = &self.phase {
            let breakdown = state
                .order
                .iter()
                .zip(&state.results)
                .map(|(&item_index, &correct)| {
                    let item = &state.catalog.items()[item_index];
                    ItemOutcome {
                        song: item.song.clone(),
                        revealed: item.revealed(),
                        correct,
                    }
                })
                .collect();
            let summary = Summary {
                mode: state.mode,
                score: state.results.iter().filter(|&&correct| correct).count(),
                total: state.results.len(),
                breakdown,
            };
            self.phase = Phase::Finished(FinishedState {
                summary,
                score_recorded: false,
            });
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
