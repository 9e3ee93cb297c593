use anyhow::*;
use std::sync::Arc;
use std::time::Duration;

pub mod answer;
pub mod catalog;
pub mod leaderboard;
pub mod session;
pub mod settings;

use self::catalog::Catalog;
use self::leaderboard::{JsonFileStore, Leaderboard, LeaderboardEntry, Store};
use self::session::{QuestionView, Session, Summary};
use self::settings::{Mode, Settings};

/// Front door for the host UI: owns the session, the per-mode catalog
/// configuration, and the leaderboard.
pub struct Game<S: Store> {
    settings: Settings,
    session: Session,
    leaderboard: Leaderboard<S>,
}

impl Game<JsonFileStore> {
    pub fn new(settings: Settings) -> Self {
        let store = JsonFileStore::new(settings.leaderboard_path.clone());
        Game::with_store(settings, store)
    }
}

impl<S: Store> Game<S> {
    pub fn with_store(settings: Settings, store: S) -> Self {
        Game {
            settings,
            session: Session::new(),
            leaderboard: Leaderboard::new(store),
        }
    }

    /// Loads the mode's catalog and starts a session over a random sample
    /// of it. An empty catalog blocks the start.
    pub fn begin(&mut self, mode: Mode) -> Result<()> {
        let mode_settings = self.settings.for_mode(mode);
        let catalog = Catalog::open(&mode_settings.catalog_path);
        if catalog.is_empty() {
            return Err(anyhow!(
                "No quiz questions available in {}",
                mode_settings.catalog_path.display()
            ));
        }
        self.session.start(mode, Arc::new(catalog), mode_settings)
    }

    pub fn tick(&mut self, dt: Duration) {
        self.session.tick(dt);
    }

    pub fn guess(&mut self, text: &str) -> Result<bool> {
        self.session.guess(text)
    }

    pub fn current_question(&self) -> Option<QuestionView> {
        self.session.current_question()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_finished()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.session.summary()
    }

    pub fn qualifies_for_leaderboard(&self) -> bool {
        self.session
            .qualifies_for_leaderboard(self.settings.qualifying_threshold)
    }

    /// Records the finished session's score under `name`. Only allowed for
    /// a qualifying Hard run, and only once per session.
    pub fn record_score(&mut self, name: &str) -> Result<Vec<LeaderboardEntry>> {
        if !self.qualifies_for_leaderboard() {
            return Err(anyhow!("This session does not qualify for the leaderboard"));
        }
        let score = self
            .session
            .summary()
            .context("The session is not finished")?
            .score;
        let entries = self.leaderboard.record(name, score as u32)?;
        self.session.mark_score_recorded()?;
        Ok(entries)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
