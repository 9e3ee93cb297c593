pub mod game;

pub use crate::game::catalog::{Catalog, CatalogHandle, QuizItem, BLANK_MARKER};
pub use crate::game::leaderboard::{JsonFileStore, Leaderboard, LeaderboardEntry, Store};
pub use crate::game::session::{ItemOutcome, QuestionView, Session, Summary};
pub use crate::game::settings::{Mode, ModeSettings, Settings};
pub use crate::game::Game;
