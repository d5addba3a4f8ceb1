//! "Assign all teams to divisions": batch placement of all 32 teams into
//! division zones of four, scored once on submit.

use rand::rngs::StdRng;

use gq_core::league::team_by_name;
use gq_core::{Division, Score, TEAMS_PER_DIVISION, Team, all_teams, division_of, shuffle};

use crate::board::AssignmentBoard;
use crate::command::{Command, DragGesture, DropTarget, TapSelector};
use crate::config::QuizConfig;
use crate::error::{ModeError, ModeResult};
use crate::phase::Phase;

/// Command type accepted by [`AssignSession`].
pub type AssignCommand = Command<&'static str, Division>;

/// A team placed in a division, as judged after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The team.
    pub team: &'static Team,
    /// Whether this is its real division.
    pub correct: bool,
    /// Its real division.
    pub belongs_in: Division,
}

/// Results for one division zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionResult {
    /// The zone.
    pub division: Division,
    /// Teams the player put here.
    pub placed: Vec<Placement>,
    /// Teams that belong here but were left unassigned.
    pub missing: Vec<&'static Team>,
}

/// A running division-assignment session.
pub struct AssignSession {
    rng: StdRng,
    board: AssignmentBoard<&'static str, Division>,
    pool_order: Vec<&'static Team>,
    phase: Phase,
    tap: TapSelector<&'static str>,
    drag: DragGesture<&'static str>,
}

impl AssignSession {
    /// Start a session with every team in the pool.
    pub fn new(config: &QuizConfig) -> Self {
        let mut rng = config.rng();
        let teams: Vec<&'static Team> = all_teams().iter().collect();
        let pool_order = shuffle(&teams, &mut rng);
        let board = AssignmentBoard::new(
            teams.iter().map(|t| t.name).collect(),
            TEAMS_PER_DIVISION,
        );
        Self {
            rng,
            board,
            pool_order,
            phase: Phase::Selecting,
            tap: TapSelector::default(),
            drag: DragGesture::default(),
        }
    }

    /// Apply an assignment command from any input source.
    pub fn apply(&mut self, command: AssignCommand) -> ModeResult<()> {
        self.phase.ensure_selecting()?;
        match command {
            Command::Assign { key, value } => {
                let result = self.board.assign(key, value);
                if let Err(e) = &result {
                    tracing::debug!(
                        team = key,
                        division = %value,
                        error = %e,
                        "assignment rejected"
                    );
                }
                result
            }
            Command::Unassign { key } => {
                if !self.board.universe().contains(&key) {
                    return Err(ModeError::UnknownKey(key.to_string()));
                }
                self.board.unassign(&key);
                Ok(())
            }
        }
    }

    /// Start dragging a team.
    pub fn pick_up(&mut self, team_name: &'static str) {
        self.drag.pick_up(team_name);
    }

    /// Release the dragged team. Nothing happens if nothing is carried.
    pub fn drop_on(&mut self, target: DropTarget<Division>) -> ModeResult<()> {
        match self.drag.drop_on(target) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    /// Team being dragged.
    pub fn carrying(&self) -> Option<&'static str> {
        self.drag.carrying().copied()
    }

    /// Abandon the drag, leaving the team where it was.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Tap a team in the pool to select or deselect it.
    pub fn tap_team(&mut self, team_name: &'static str) {
        self.tap.tap_item(team_name);
    }

    /// Tap a division zone. Places the selected team there, if any.
    ///
    /// Returns whether a team was placed.
    pub fn tap_division(&mut self, division: Division) -> ModeResult<bool> {
        let Some(command) = self.tap.tap_target(division) else {
            return Ok(false);
        };
        self.apply(command)?;
        self.tap.clear();
        Ok(true)
    }

    /// Tap a team already sitting in a zone: it goes back to the pool selected.
    pub fn tap_placed(&mut self, team_name: &'static str) -> ModeResult<()> {
        self.phase.ensure_selecting()?;
        let command = self.tap.tap_placed(team_name);
        self.apply(command)
    }

    /// Team selected by tapping.
    pub fn selected(&self) -> Option<&'static str> {
        self.tap.selected().copied()
    }

    /// Unassigned teams in this attempt's shuffled order.
    pub fn pool(&self) -> Vec<&'static Team> {
        self.pool_order
            .iter()
            .copied()
            .filter(|t| self.board.get(&t.name).is_none())
            .collect()
    }

    /// Teams placed in `division`, in league order.
    pub fn teams_in(&self, division: Division) -> Vec<&'static Team> {
        all_teams()
            .iter()
            .filter(|t| self.board.get(&t.name) == Some(&division))
            .collect()
    }

    /// Where the player put `team_name`.
    pub fn assignment_of(&self, team_name: &str) -> Option<Division> {
        let team = team_by_name(team_name)?;
        self.board.get(&team.name).copied()
    }

    /// Whether `division` already holds four teams.
    pub fn is_full(&self, division: Division) -> bool {
        self.board.is_full(&division)
    }

    /// Teams placed so far.
    pub fn assigned_count(&self) -> usize {
        self.board.assigned_count()
    }

    /// Teams in play.
    pub fn total(&self) -> usize {
        self.board.universe().len()
    }

    /// Submit is only possible once every team is placed.
    pub fn can_submit(&self) -> bool {
        self.phase.is_selecting() && self.board.is_complete()
    }

    /// Score the attempt.
    pub fn submit(&mut self) -> ModeResult<Score> {
        self.phase.ensure_selecting()?;
        if !self.board.is_complete() {
            return Err(self.board.incomplete());
        }
        let score = self.board.score_against(|name| division_of(name));
        tracing::debug!(
            correct = score.correct,
            total = score.total,
            "division assignment submitted"
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

    /// Per-division breakdown in display order.
    pub fn results(&self) -> Vec<DivisionResult> {
        Division::DISPLAY_ORDER
            .into_iter()
            .map(|division| {
                let placed = self
                    .teams_in(division)
                    .into_iter()
                    .filter_map(|team| {
                        let belongs_in = division_of(team.name)?;
                        Some(Placement {
                            team,
                            correct: belongs_in == division,
                            belongs_in,
                        })
                    })
                    .collect();
                let missing = division
                    .teams()
                    .iter()
                    .filter(|t| self.board.get(&t.name).is_none())
                    .collect();
                DivisionResult {
                    division,
                    placed,
                    missing,
                }
            })
            .collect()
    }

    /// Throw the attempt away and start over with a reshuffled pool.
    pub fn try_again(&mut self) {
        self.board.clear();
        self.phase = Phase::Selecting;
        self.tap.clear();
        self.drag.cancel();
        let teams: Vec<&'static Team> = all_teams().iter().collect();
        self.pool_order = shuffle(&teams, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AssignSession {
        AssignSession::new(&QuizConfig::default().with_seed(7))
    }

    fn fill_correctly(s: &mut AssignSession) {
        for team in all_teams() {
            s.apply(Command::Assign {
                key: team.name,
                value: division_of(team.name).unwrap(),
            })
            .unwrap();
        }
    }

    #[test]
    fn pool_starts_full_and_shuffled() {
        let s = session();
        let pool = s.pool();
        assert_eq!(pool.len(), 32);
        let league: Vec<_> = all_teams().iter().collect();
        assert_ne!(pool, league);
        assert_eq!(s.pool(), pool, "pool order is stable within an attempt");
    }

    #[test]
    fn capacity_invariant() {
        let mut s = session();
        for team in Division::NfcNorth.teams() {
            s.apply(Command::Assign {
                key: team.name,
                value: Division::AfcEast,
            })
            .unwrap();
        }
        assert!(s.is_full(Division::AfcEast));
        let err = s
            .apply(Command::Assign {
                key: "Buffalo Bills",
                value: Division::AfcEast,
            })
            .unwrap_err();
        assert!(matches!(err, ModeError::TargetFull { .. }));
        assert_eq!(s.teams_in(Division::AfcEast).len(), 4);
        assert_eq!(s.assignment_of("Buffalo Bills"), None);
    }

    #[test]
    fn submit_gated_on_completeness() {
        let mut s = session();
        s.apply(Command::Assign {
            key: "Buffalo Bills",
            value: Division::AfcEast,
        })
        .unwrap();
        assert!(!s.can_submit());
        assert!(matches!(
            s.submit(),
            Err(ModeError::Incomplete {
                assigned: 1,
                total: 32
            })
        ));
        assert_eq!(s.score(), None);
    }

    #[test]
    fn perfect_submission() {
        let mut s = session();
        fill_correctly(&mut s);
        assert!(s.can_submit());
        let score = s.submit().unwrap();
        assert!(score.is_perfect());
        assert!(matches!(s.phase(), Phase::Submitted(_)));
        assert!(matches!(s.submit(), Err(ModeError::AlreadySubmitted)));
        assert!(s.results().iter().all(|r| r.missing.is_empty()));
    }

    #[test]
    fn swapped_teams_cost_two_points() {
        let mut s = session();
        fill_correctly(&mut s);
        s.apply(Command::Unassign {
            key: "Buffalo Bills",
        })
        .unwrap();
        s.apply(Command::Unassign {
            key: "Seattle Seahawks",
        })
        .unwrap();
        s.apply(Command::Assign {
            key: "Buffalo Bills",
            value: Division::NfcWest,
        })
        .unwrap();
        s.apply(Command::Assign {
            key: "Seattle Seahawks",
            value: Division::AfcEast,
        })
        .unwrap();
        let score = s.submit().unwrap();
        assert_eq!(score.correct, 30);
        assert_eq!(score.percentage(), 94);

        let west = s
            .results()
            .into_iter()
            .find(|r| r.division == Division::NfcWest)
            .unwrap();
        let bills = west.placed.iter().find(|p| p.team.abbr == "buf").unwrap();
        assert!(!bills.correct);
        assert_eq!(bills.belongs_in, Division::AfcEast);
    }

    #[test]
    fn missing_teams_reported() {
        let s = session();
        let results = s.results();
        assert_eq!(results.len(), 8);
        assert_eq!(results[0].division, Division::AfcNorth);
        assert!(results.iter().all(|r| r.missing.len() == 4 && r.placed.is_empty()));
    }

    #[test]
    fn drag_and_tap_share_one_board() {
        let mut s = session();
        s.pick_up("Buffalo Bills");
        s.drop_on(DropTarget::Zone(Division::AfcEast)).unwrap();
        assert_eq!(s.assignment_of("Buffalo Bills"), Some(Division::AfcEast));

        s.tap_team("Miami Dolphins");
        assert!(s.tap_division(Division::AfcEast).unwrap());
        assert_eq!(s.teams_in(Division::AfcEast).len(), 2);
        assert_eq!(s.selected(), None);

        s.pick_up("Miami Dolphins");
        s.drop_on(DropTarget::Pool).unwrap();
        assert_eq!(s.assignment_of("Miami Dolphins"), None);

        s.tap_placed("Buffalo Bills").unwrap();
        assert_eq!(s.assignment_of("Buffalo Bills"), None);
        assert_eq!(s.selected(), Some("Buffalo Bills"));
    }

    #[test]
    fn cancelled_drag_changes_nothing() {
        let mut s = session();
        s.pick_up("Buffalo Bills");
        s.cancel_drag();
        assert_eq!(s.carrying(), None);
        s.drop_on(DropTarget::Zone(Division::AfcEast)).unwrap();
        assert_eq!(s.assigned_count(), 0);
    }

    #[test]
    fn rejected_tap_keeps_selection() {
        let mut s = session();
        for team in Division::AfcEast.teams() {
            s.apply(Command::Assign {
                key: team.name,
                value: Division::AfcEast,
            })
            .unwrap();
        }
        s.tap_team("Dallas Cowboys");
        assert!(s.tap_division(Division::AfcEast).is_err());
        assert_eq!(s.selected(), Some("Dallas Cowboys"));
    }

    #[test]
    fn no_changes_after_submit() {
        let mut s = session();
        fill_correctly(&mut s);
        s.submit().unwrap();
        assert!(matches!(
            s.apply(Command::Unassign {
                key: "Buffalo Bills"
            }),
            Err(ModeError::AlreadySubmitted)
        ));
    }

    #[test]
    fn try_again_resets_everything() {
        let mut s = session();
        fill_correctly(&mut s);
        s.submit().unwrap();
        s.try_again();
        s.try_again();
        assert_eq!(s.assigned_count(), 0);
        assert_eq!(s.score(), None);
        assert_eq!(s.phase(), Phase::Selecting);
        assert_eq!(s.pool().len(), 32);
        assert_eq!(s.selected(), None);
        assert_eq!(s.carrying(), None);
    }
}
