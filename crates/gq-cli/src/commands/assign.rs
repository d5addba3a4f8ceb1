use gq_core::{Division, Team};
use gq_modes::{AssignCommand, AssignSession, Command, QuizConfig};

use super::{Console, repl, resolve_division, resolve_team, split_command};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let config = QuizConfig::default().with_optional_seed(seed);
    let mut console = AssignConsole::new(AssignSession::new(&config));
    repl(&mut console)
}

/// Text interface over an [`AssignSession`].
pub struct AssignConsole {
    session: AssignSession,
}

impl AssignConsole {
    pub fn new(session: AssignSession) -> Self {
        Self { session }
    }

    fn do_assign(&mut self, rest: &str) -> Result<String, String> {
        let (team, division) = split_team_division(rest).ok_or_else(|| {
            format!("usage: assign <team> <division> (e.g. \"assign buf AFC East\"), got \"{rest}\"")
        })?;
        let command: AssignCommand = Command::Assign {
            key: team.name,
            value: division,
        };
        self.session.apply(command).map_err(|e| e.to_string())?;
        Ok(format!(
            "{} -> {} ({}/{} placed)",
            team.name,
            division,
            self.session.assigned_count(),
            self.session.total()
        ))
    }

    fn do_unassign(&mut self, rest: &str) -> Result<String, String> {
        let team = lookup_team(rest)?;
        if self.session.assignment_of(team.name).is_none() {
            return Ok(format!("{} is not placed.", team.name));
        }
        self.session
            .apply(Command::Unassign { key: team.name })
            .map_err(|e| e.to_string())?;
        Ok(format!("{} is back in the pool.", team.name))
    }

    fn do_select(&mut self, rest: &str) -> Result<String, String> {
        let team = lookup_team(rest)?;
        if self.session.assignment_of(team.name).is_some() {
            self.session
                .tap_placed(team.name)
                .map_err(|e| e.to_string())?;
            return Ok(format!("{} taken back and selected.", team.name));
        }
        self.session.tap_team(team.name);
        Ok(match self.session.selected() {
            Some(name) => format!("Selected {name}. Now 'place <division>'."),
            None => "Selection cleared.".to_string(),
        })
    }

    fn do_place(&mut self, rest: &str) -> Result<String, String> {
        let division =
            resolve_division(rest).ok_or_else(|| format!("not a division: \"{rest}\""))?;
        let selected = self.session.selected();
        if self.session.tap_division(division).map_err(|e| e.to_string())? {
            Ok(format!(
                "{} -> {division} ({}/{} placed)",
                selected.unwrap_or_default(),
                self.session.assigned_count(),
                self.session.total()
            ))
        } else {
            Ok("Select a team first.".to_string())
        }
    }

    fn do_pool(&self) -> String {
        let pool = self.session.pool();
        if pool.is_empty() {
            return "Every team is placed. Type 'submit'.".to_string();
        }
        let names: Vec<_> = pool
            .iter()
            .map(|t| format!("{} ({})", t.name, t.abbr.to_uppercase()))
            .collect();
        format!("Unplaced ({}):\n  {}", pool.len(), names.join("\n  "))
    }

    fn do_board(&self) -> String {
        Division::DISPLAY_ORDER
            .iter()
            .map(|&d| {
                let teams: Vec<_> = self.session.teams_in(d).iter().map(|t| t.name).collect();
                format!("{:<10} [{}/4] {}", d.name(), teams.len(), teams.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn do_submit(&mut self) -> Result<String, String> {
        let score = self.session.submit().map_err(|e| e.to_string())?;
        Ok(format!("Score: {score}\n\n{}", self.do_results()))
    }

    fn do_results(&self) -> String {
        let mut out = Vec::new();
        for result in self.session.results() {
            out.push(result.division.name().to_string());
            for p in &result.placed {
                if p.correct {
                    out.push(format!("  ✓ {}", p.team.name));
                } else {
                    out.push(format!("  ✗ {} (belongs in {})", p.team.name, p.belongs_in));
                }
            }
            for team in &result.missing {
                out.push(format!("  missing: {}", team.name));
            }
        }
        out.join("\n")
    }

    fn do_help(&self) -> String {
        [
            "  assign <team> <division>   place a team, e.g. \"assign buf AFC East\"",
            "  unassign <team>            put a team back in the pool",
            "  select <team>              select a team (or take a placed one back)",
            "  place <division>           place the selected team",
            "  pool                       list unplaced teams",
            "  board                      show every division",
            "  submit                     score once all 32 are placed",
            "  again                      start over",
            "  quit                       leave",
        ]
        .join("\n")
    }
}

impl Console for AssignConsole {
    fn banner(&self) -> String {
        format!(
            "  Sort all {} teams into their divisions\n\n{}",
            self.session.total(),
            self.do_pool()
        )
    }

    fn process(&mut self, input: &str) -> Result<String, String> {
        let (cmd, rest) = split_command(input);
        match cmd.as_str() {
            "assign" | "a" => self.do_assign(rest),
            "unassign" | "u" => self.do_unassign(rest),
            "select" | "s" => self.do_select(rest),
            "place" | "p" => self.do_place(rest),
            "pool" => Ok(self.do_pool()),
            "board" => Ok(self.do_board()),
            "submit" => self.do_submit(),
            "results" => {
                if self.session.score().is_some() {
                    Ok(self.do_results())
                } else {
                    Err("nothing submitted yet".to_string())
                }
            }
            "again" => {
                self.session.try_again();
                Ok(format!("Starting over.\n{}", self.do_pool()))
            }
            "help" => Ok(self.do_help()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(format!("unknown command: \"{cmd}\" (type 'help')")),
        }
    }
}

fn lookup_team(input: &str) -> Result<&'static Team, String> {
    resolve_team(input).ok_or_else(|| format!("unknown team: \"{input}\""))
}

/// Split `"<team> <division>"` where both halves may contain spaces.
fn split_team_division(input: &str) -> Option<(&'static Team, Division)> {
    let input = input.trim();
    input
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .find_map(|(idx, _)| {
            let team = resolve_team(&input[..idx])?;
            let division = resolve_division(&input[idx..])?;
            Some((team, division))
        })
}

#[cfg(test)]
mod tests {
    use gq_core::{all_teams, division_of};

    use super::*;

    fn console() -> AssignConsole {
        AssignConsole::new(AssignSession::new(&QuizConfig::default().with_seed(11)))
    }

    #[test]
    fn split_handles_multi_word_names() {
        let (team, div) = split_team_division("New York Jets AFC East").unwrap();
        assert_eq!(team.abbr, "nyj");
        assert_eq!(div, Division::AfcEast);

        let (team, div) = split_team_division("sf 8").unwrap();
        assert_eq!(team.abbr, "sf");
        assert_eq!(div, Division::NfcWest);

        assert!(split_team_division("Jets AFC East").is_none());
    }

    #[test]
    fn assign_and_unassign() {
        let mut c = console();
        let out = c.process("assign buf AFC East").unwrap();
        assert_eq!(out, "Buffalo Bills -> AFC East (1/32 placed)");
        assert!(c.process("board").unwrap().contains("[1/4] Buffalo Bills"));

        let out = c.process("unassign Buffalo Bills").unwrap();
        assert!(out.contains("back in the pool"));
        assert_eq!(c.session.assigned_count(), 0);
    }

    #[test]
    fn fifth_team_is_rejected() {
        let mut c = console();
        for abbr in ["buf", "mia", "ne", "nyj"] {
            c.process(&format!("assign {abbr} AFC East")).unwrap();
        }
        let err = c.process("assign kc AFC East").unwrap_err();
        assert!(err.contains("AFC East is full"));
    }

    #[test]
    fn select_then_place() {
        let mut c = console();
        assert_eq!(c.process("place 1").unwrap(), "Select a team first.");
        c.process("select bal").unwrap();
        let out = c.process("place AFC North").unwrap();
        assert!(out.starts_with("Baltimore Ravens -> AFC North"));

        let out = c.process("select bal").unwrap();
        assert!(out.contains("taken back"));
        assert_eq!(c.session.selected(), Some("Baltimore Ravens"));
        assert_eq!(c.session.assigned_count(), 0);
    }

    #[test]
    fn submit_requires_every_team() {
        let mut c = console();
        c.process("assign buf AFC East").unwrap();
        let err = c.process("submit").unwrap_err();
        assert!(err.contains("1/32"));
    }

    #[test]
    fn perfect_submission() {
        let mut c = console();
        for team in all_teams() {
            let div = division_of(team.name).unwrap();
            c.process(&format!("assign {} {}", team.abbr, div)).unwrap();
        }
        let out = c.process("submit").unwrap();
        assert!(out.starts_with("Score: 32 / 32 (100%)"));
        assert!(!out.contains("✗"));
        assert!(c.process("assign buf AFC West").is_err());

        c.process("again").unwrap();
        assert_eq!(c.session.assigned_count(), 0);
    }

    #[test]
    fn unknown_command() {
        let mut c = console();
        assert!(c.process("dance").unwrap_err().contains("unknown command"));
    }
}
