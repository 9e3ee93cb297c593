use std::fs;
use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Placeholder token inside a question marking where the answer belongs.
pub const BLANK_MARKER: &str = "___";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizItem {
    pub song: String,
    pub question: String,
    pub answer: String,
}

impl QuizItem {
    /// All accepted spellings for this item, in catalog order.
    pub fn accepted_answers(&self) -> impl Iterator<Item = &str> {
        self.answer.split(',').map(str::trim)
    }

    /// The question with its blank filled in by the first accepted answer.
    pub fn revealed(&self) -> String {
        let fill = self.accepted_answers().next().unwrap_or("");
        self.question.replace(BLANK_MARKER, fill)
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<QuizItem>,
}

pub type CatalogHandle = Arc<Catalog>;

impl Catalog {
    /// Reads a catalog file. A missing or unreadable file yields an empty
    /// catalog; the caller decides whether that is fatal.
    pub fn open(source: &Path) -> Catalog {
        match fs::read_to_string(source) {
            Ok(text) => Catalog::parse(&text),
            Err(e) => {
                tracing::warn!("Could not read catalog {}: {}", source.display(), e);
                Catalog::default()
            }
        }
    }

    /// Parses the line-oriented catalog format: `[Song Title]` lines open a
    /// song context, `question|answer` lines emit one item under it. Data
    /// lines before any song header are dropped.
    pub fn parse(text: &str) -> Catalog {
        let mut items = Vec::new();
        let mut current_song: Option<&str> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_song = Some(&line[1..line.len() - 1]);
                continue;
            }

            if let Some(separator) = line.find('|') {
                let song = match current_song {
                    Some(song) => song,
                    None => continue,
                };
                let question = &line[..separator];
                let answer = line[separator + 1..].trim();
                if !question.contains(BLANK_MARKER) {
                    tracing::warn!("Skipping question with no blank to fill: {}", question);
                    continue;
                }
                items.push(QuizItem {
                    song: song.to_owned(),
                    question: question.to_owned(),
                    answer: answer.to_owned(),
                });
            }
        }

        Catalog { items }
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
