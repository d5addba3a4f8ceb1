//! "Match quarterbacks to teams": place every starter on a team slot, one
//! quarterback per team, scored once on submit.

use gq_core::league::team_by_abbr;
use gq_core::{Division, QbRoster, Quarterback, Score, Team, all_teams};

use crate::board::AssignmentBoard;
use crate::command::{Command, DragGesture, DropTarget, TapSelector};
use crate::config::QuizConfig;
use crate::error::{ModeError, ModeResult};
use crate::phase::Phase;
use crate::share::{PickStatus, ShareSurface, share_results, share_text};

/// Command type accepted by [`QbPickerSession`]: quarterback name to team
/// short code.
pub type QbCommand = Command<String, String>;

/// One team slot after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamResult<'r> {
    /// The team.
    pub team: &'static Team,
    /// Quarterback the player put here.
    pub assigned: Option<&'r Quarterback>,
    /// Quarterback who actually starts here.
    pub correct_qb: Option<&'r Quarterback>,
    /// Outcome for the grid.
    pub status: PickStatus,
}

/// A running quarterback-matching session.
///
/// The quarterback order is shuffled once when the session starts and kept
/// for its whole life, including across "try again".
pub struct QbPickerSession<'r> {
    roster: &'r QbRoster,
    order: Vec<Quarterback>,
    board: AssignmentBoard<String, String>,
    phase: Phase,
    tap: TapSelector<String>,
    drag: DragGesture<String>,
}

impl<'r> QbPickerSession<'r> {
    /// Start a session over `roster`.
    pub fn new(roster: &'r QbRoster, config: &QuizConfig) -> Self {
        let mut rng = config.rng();
        let order = roster.shuffled(&mut rng);
        let universe = roster.all().iter().map(|q| q.name.clone()).collect();
        Self {
            roster,
            order,
            board: AssignmentBoard::new(universe, 1),
            phase: Phase::Selecting,
            tap: TapSelector::default(),
            drag: DragGesture::default(),
        }
    }

    /// The roster this session plays against.
    pub fn roster(&self) -> &'r QbRoster {
        self.roster
    }

    /// Quarterbacks in this session's fixed order.
    pub fn order(&self) -> &[Quarterback] {
        &self.order
    }

    /// Apply an assignment command from any input source.
    pub fn apply(&mut self, command: QbCommand) -> ModeResult<()> {
        self.phase.ensure_selecting()?;
        match command {
            Command::Assign { key, value } => {
                let team = team_by_abbr(&value)
                    .ok_or_else(|| ModeError::UnknownTarget(value.clone()))?;
                self.board.assign(key, value).map_err(|e| match e {
                    ModeError::TargetFull { capacity, .. } => {
                        tracing::debug!(team = team.abbr, "team already has a quarterback");
                        ModeError::TargetFull {
                            target: team.name.to_string(),
                            capacity,
                        }
                    }
                    other => other,
                })
            }
            Command::Unassign { key } => {
                if !self.board.universe().contains(&key) {
                    return Err(ModeError::UnknownKey(key));
                }
                self.board.unassign(&key);
                Ok(())
            }
        }
    }

    /// Tap a quarterback in the pool. Placed quarterbacks ignore taps.
    pub fn tap_qb(&mut self, qb_name: &str) -> ModeResult<()> {
        self.known_qb(qb_name)?;
        if self.is_assigned(qb_name) {
            return Ok(());
        }
        self.tap.tap_item(qb_name.to_string());
        Ok(())
    }

    /// Tap a team slot. Places the selected quarterback there, if any.
    ///
    /// Returns whether a quarterback was placed.
    pub fn tap_team(&mut self, team_abbr: &str) -> ModeResult<bool> {
        let Some(command) = self.tap.tap_target(team_abbr.to_string()) else {
            return Ok(false);
        };
        self.apply(command)?;
        self.tap.clear();
        Ok(true)
    }

    /// Tap the quarterback shown on a team slot: he comes off and is selected.
    ///
    /// Returns whether anything was on the slot.
    pub fn tap_assigned(&mut self, team_abbr: &str) -> ModeResult<bool> {
        self.phase.ensure_selecting()?;
        let Some(qb) = self.assigned_qb(team_abbr) else {
            return Ok(false);
        };
        let command = self.tap.tap_placed(qb.name.clone());
        self.apply(command)?;
        Ok(true)
    }

    /// Start dragging a quarterback.
    pub fn pick_up(&mut self, qb_name: &str) -> ModeResult<()> {
        self.known_qb(qb_name)?;
        self.drag.pick_up(qb_name.to_string());
        Ok(())
    }

    /// Release the dragged quarterback on a team slot or back on the pool.
    pub fn drop_on(&mut self, target: DropTarget<String>) -> ModeResult<()> {
        match self.drag.drop_on(target) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// Quarterback selected by tapping.
    pub fn selected(&self) -> Option<&str> {
        self.tap.selected().map(String::as_str)
    }

    /// Quarterback being dragged.
    pub fn carrying(&self) -> Option<&str> {
        self.drag.carrying().map(String::as_str)
    }

    /// Abandon the drag, leaving the quarterback where he was.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Quarterback the player put on this team.
    pub fn assigned_qb(&self, team_abbr: &str) -> Option<&'r Quarterback> {
        let name = self.board.keys_on(&team_abbr.to_string()).into_iter().next()?;
        self.roster.by_name(name)
    }

    /// Team the player put this quarterback on.
    pub fn team_of(&self, qb_name: &str) -> Option<&str> {
        self.board.get(&qb_name.to_string()).map(String::as_str)
    }

    /// Whether this quarterback is on a team.
    pub fn is_assigned(&self, qb_name: &str) -> bool {
        self.team_of(qb_name).is_some()
    }

    /// Unplaced quarterbacks in session order.
    pub fn pool(&self) -> Vec<&Quarterback> {
        self.order
            .iter()
            .filter(|q| !self.is_assigned(&q.name))
            .collect()
    }

    /// Quarterbacks placed so far.
    pub fn assigned_count(&self) -> usize {
        self.board.assigned_count()
    }

    /// Quarterbacks in play.
    pub fn total(&self) -> usize {
        self.board.universe().len()
    }

    /// Submit is only possible once every quarterback is placed.
    pub fn can_submit(&self) -> bool {
        self.phase.is_selecting() && self.board.is_complete()
    }

    /// Score the attempt.
    pub fn submit(&mut self) -> ModeResult<Score> {
        self.phase.ensure_selecting()?;
        if !self.board.is_complete() {
            return Err(self.board.incomplete());
        }
        let roster = self.roster;
        let score = self
            .board
            .score_against(|name| roster.team_for(name).map(str::to_string));
        tracing::debug!(
            correct = score.correct,
            total = score.total,
            "quarterback picks submitted"
        );
        self.phase = Phase::Submitted(score);
        Ok(score)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The submitted score, if any.
    pub fn score(&self) -> Option<Score> {
        self.phase.score()
    }

    /// Outcome of one team slot.
    pub fn status_of(&self, team_abbr: &str) -> PickStatus {
        match self.assigned_qb(team_abbr) {
            None => PickStatus::Empty,
            Some(qb) if qb.team_abbr == team_abbr => PickStatus::Correct,
            Some(_) => PickStatus::Incorrect,
        }
    }

    /// Per-team breakdown in league order.
    pub fn results(&self) -> Vec<TeamResult<'r>> {
        all_teams()
            .iter()
            .map(|team| TeamResult {
                team,
                assigned: self.assigned_qb(team.abbr),
                correct_qb: self.roster.by_team(team.abbr),
                status: self.status_of(team.abbr),
            })
            .collect()
    }

    /// The shareable summary of a submitted attempt.
    pub fn share_text(&self) -> ModeResult<String> {
        let score = self.phase.score().ok_or(ModeError::NotSubmitted)?;
        let statuses = Division::DISPLAY_ORDER
            .into_iter()
            .flat_map(|d| d.teams())
            .map(|t| self.status_of(t.abbr));
        Ok(share_text(score, statuses))
    }

    /// Hand the summary to `surface`. Returns whether anything was shared.
    pub fn share(&self, surface: &mut dyn ShareSurface) -> ModeResult<bool> {
        let text = self.share_text()?;
        Ok(share_results(surface, &text))
    }

    /// Clear all picks and start over with the same quarterback order.
    pub fn try_again(&mut self) {
        self.board.clear();
        self.phase = Phase::Selecting;
        self.tap.clear();
        self.drag.cancel();
    }

    fn known_qb(&self, qb_name: &str) -> ModeResult<()> {
        if self.roster.by_name(qb_name).is_some() {
            Ok(())
        } else {
            Err(ModeError::UnknownKey(qb_name.to_string()))
        }
    }
}
