//! Shareable result summaries and the surfaces that receive them.
//!
//! Sharing is fire-and-forget: a surface that is unavailable turns the action
//! into a no-op, and a failing surface is logged and otherwise ignored.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use gq_core::Score;

/// Title handed to share surfaces along with the text.
pub const SHARE_TITLE: &str = "NFL QB Picker Results";

/// Glyphs per grid row.
pub const GRID_WIDTH: usize = 8;

/// Outcome of one team slot in the quarterback picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickStatus {
    /// The right quarterback is on this team.
    Correct,
    /// Some other quarterback is on this team.
    Incorrect,
    /// Nobody was placed on this team.
    Empty,
}

impl PickStatus {
    /// Grid glyph for this status.
    pub fn glyph(self) -> char {
        match self {
            Self::Correct => '\u{1F7E9}',
            Self::Incorrect => '\u{1F7E5}',
            Self::Empty => '\u{2B1C}',
        }
    }
}

/// Plain-text summary: a score line, a blank line, then one glyph per team
/// with a line break after every [`GRID_WIDTH`] glyphs.
pub fn share_text<I>(score: Score, statuses: I) -> String
where
    I: IntoIterator<Item = PickStatus>,
{
    let mut text = format!(
        "NFL QB Picker: {}/{} ({}%)\n\n",
        score.correct,
        score.total,
        score.percentage()
    );
    for (idx, status) in statuses.into_iter().enumerate() {
        text.push(status.glyph());
        if (idx + 1) % GRID_WIDTH == 0 {
            text.push('\n');
        }
    }
    text
}

/// A system-provided place to send a result summary.
pub trait ShareSurface {
    /// Whether this surface can accept anything at all.
    fn is_available(&self) -> bool;

    /// Hand over the summary.
    fn share(&mut self, title: &str, text: &str) -> io::Result<()>;
}

/// The absent surface: sharing does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

impl ShareSurface for NoShare {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&mut self, _title: &str, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Writes the summary to a file, replacing its contents.
#[derive(Debug, Clone)]
pub struct FileShare {
    path: PathBuf,
}

impl FileShare {
    /// Share into `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShareSurface for FileShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&mut self, _title: &str, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }
}

/// Writes the summary to any writer, e.g. stdout.
#[derive(Debug)]
pub struct WriterShare<W> {
    writer: W,
}

impl<W: Write> WriterShare<W> {
    /// Share into `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ShareSurface for WriterShare<W> {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&mut self, title: &str, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{title}")?;
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }
}

/// Send `text` to `surface`. Returns whether anything was shared.
pub fn share_results(surface: &mut dyn ShareSurface, text: &str) -> bool {
    if !surface.is_available() {
        tracing::debug!("no share surface available");
        return false;
    }
    match surface.share(SHARE_TITLE, text) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "sharing results failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_wraps_every_eight() {
        let mut statuses = vec![PickStatus::Correct; 30];
        statuses.push(PickStatus::Incorrect);
        statuses.push(PickStatus::Empty);
        let text = share_text(
            Score {
                correct: 30,
                total: 32,
            },
            statuses,
        );
        insta::assert_snapshot!(text, @r"
        NFL QB Picker: 30/32 (94%)

        🟩🟩🟩🟩🟩🟩🟩🟩
        🟩🟩🟩🟩🟩🟩🟩🟩
        🟩🟩🟩🟩🟩🟩🟩🟩
        🟩🟩🟩🟩🟩🟩🟥⬜
        ");
    }

    #[test]
    fn grid_line_breaks() {
        let text = share_text(Score::zero(32), vec![PickStatus::Empty; 32]);
        let grid: Vec<_> = text.lines().skip(2).collect();
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|row| row.chars().count() == GRID_WIDTH));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn no_share_is_noop() {
        let mut surface = NoShare;
        assert!(!share_results(&mut surface, "x"));
    }

    #[test]
    fn writer_share() {
        let mut surface = WriterShare::new(Vec::new());
        assert!(share_results(&mut surface, "hello\n"));
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "NFL QB Picker Results\nhello\n");
    }

    #[test]
    fn file_share_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut ok = FileShare::new(dir.path().join("out.txt"));
        assert!(share_results(&mut ok, "grid"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
            "grid"
        );

        let mut broken = FileShare::new(dir.path().join("missing/dir/out.txt"));
        assert!(!share_results(&mut broken, "grid"));
    }
}
