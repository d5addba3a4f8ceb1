//! "Guess the division": one team at a time, one answer per team.

use std::collections::HashSet;

use rand::rngs::StdRng;

use gq_core::{Division, Score, Team, division_of, random_team};

use crate::config::QuizConfig;
use crate::error::{ModeError, ModeResult};

/// Feedback for one answered team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessFeedback {
    /// The team that was shown.
    pub team: &'static Team,
    /// The division the player picked.
    pub selected: Division,
    /// The division the team actually plays in.
    pub correct: Division,
    /// Whether the pick was right.
    pub is_correct: bool,
}

/// A running division-guessing session.
pub struct GuessSession {
    rng: StdRng,
    max_redraws: u32,
    current: &'static Team,
    score: u32,
    attempts: u32,
    used: HashSet<&'static str>,
    feedback: Option<GuessFeedback>,
}

impl GuessSession {
    /// Start a session on a random team.
    pub fn new(config: &QuizConfig) -> Self {
        let mut rng = config.rng();
        let current = random_team(&mut rng);
        Self::with_rng(rng, config.max_redraws, current)
    }

    /// Start a session on a specific team.
    pub fn starting_with(config: &QuizConfig, team: &'static Team) -> Self {
        Self::with_rng(config.rng(), config.max_redraws, team)
    }

    fn with_rng(rng: StdRng, max_redraws: u32, current: &'static Team) -> Self {
        Self {
            rng,
            max_redraws,
            current,
            score: 0,
            attempts: 0,
            used: HashSet::new(),
            feedback: None,
        }
    }

    /// The team being asked about.
    pub fn current_team(&self) -> &'static Team {
        self.current
    }

    /// Whether the current team has been answered.
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    /// Feedback for the current team, once answered.
    pub fn feedback(&self) -> Option<&GuessFeedback> {
        self.feedback.as_ref()
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Answers given so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Score as correct answers out of attempts.
    pub fn tally(&self) -> Score {
        Score {
            correct: self.score,
            total: self.attempts,
        }
    }

    /// Number of distinct teams answered this session.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Answer the current team.
    pub fn guess(&mut self, division: Division) -> ModeResult<GuessFeedback> {
        if self.feedback.is_some() {
            return Err(ModeError::AlreadyAnswered);
        }
        let correct = division_of(self.current.name)
            .ok_or_else(|| ModeError::UnknownKey(self.current.name.to_string()))?;
        let is_correct = division == correct;

        self.attempts += 1;
        if is_correct {
            self.score += 1;
        }
        self.used.insert(self.current.name);

        let feedback = GuessFeedback {
            team: self.current,
            selected: division,
            correct,
            is_correct,
        };
        tracing::debug!(
            team = self.current.name,
            selected = %division,
            is_correct,
            "guess recorded"
        );
        self.feedback = Some(feedback.clone());
        Ok(feedback)
    }

    /// Move on once the current team is answered. Skipping is not allowed.
    pub fn advance(&mut self) -> ModeResult<&'static Team> {
        if self.feedback.is_none() {
            return Err(ModeError::NotAnswered);
        }
        Ok(self.next_team())
    }

    /// Draw a team that has not been answered yet.
    ///
    /// Draws at most `max_redraws` extra times; once the used set nearly
    /// covers the league a repeat is accepted.
    fn next_team(&mut self) -> &'static Team {
        let mut team = random_team(&mut self.rng);
        let mut redraws = 0;
        while self.used.contains(team.name) && redraws < self.max_redraws {
            team = random_team(&mut self.rng);
            redraws += 1;
        }
        self.current = team;
        self.feedback = None;
        team
    }

    /// Clear score, attempts, and history, then draw a new team.
    pub fn reset(&mut self) {
        self.score = 0;
        self.attempts = 0;
        self.used.clear();
        self.next_team();
    }
}
