use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    Easy,
    Hard,
}

#[derive(Clone, Debug)]
pub struct ModeSettings {
    pub catalog_path: PathBuf,
    pub time_limit: Duration,
    pub question_count: usize,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub easy: ModeSettings,
    pub hard: ModeSettings,
    pub qualifying_threshold: usize,
    pub leaderboard_path: PathBuf,
}

impl Settings {
    pub fn for_mode(&self, mode: Mode) -> &ModeSettings {
        match mode {
            Mode::Easy => &self.easy,
            Mode::Hard => &self.hard,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            easy: ModeSettings {
                catalog_path: PathBuf::from("data/easy.txt"),
                time_limit: Duration::from_secs(20),
                question_count: 5,
            },
            hard: ModeSettings {
                catalog_path: PathBuf::from("data/hard.txt"),
                time_limit: Duration::from_secs(10),
                question_count: 10,
            },
            qualifying_threshold: 7,
            leaderboard_path: PathBuf::from("leaderboard.json"),
        }
    }
}
