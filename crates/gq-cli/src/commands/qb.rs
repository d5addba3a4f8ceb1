use std::io;
use std::path::Path;

use gq_core::{Division, Quarterback, Team};
use gq_modes::{Command, PickStatus, QbPickerSession, QuizConfig, ShareSurface, WriterShare};

use super::{Console, load_roster, repl, resolve_team, split_command};

pub fn run(seed: Option<u64>, data: Option<&Path>) -> Result<(), String> {
    let roster = load_roster(data)?;
    let config = QuizConfig::default().with_optional_seed(seed);
    let session = QbPickerSession::new(&roster, &config);
    let mut console = QbConsole::new(session, Box::new(WriterShare::new(io::stdout())));
    repl(&mut console)
}

/// Text interface over a [`QbPickerSession`].
pub struct QbConsole<'r> {
    session: QbPickerSession<'r>,
    surface: Box<dyn ShareSurface>,
}

impl<'r> QbConsole<'r> {
    pub fn new(session: QbPickerSession<'r>, surface: Box<dyn ShareSurface>) -> Self {
        Self { session, surface }
    }

    fn lookup_qb(&self, input: &str) -> Result<&'r Quarterback, String> {
        find_qb(&self.session, input).ok_or_else(|| format!("unknown quarterback: \"{input}\""))
    }

    fn do_assign(&mut self, rest: &str) -> Result<String, String> {
        let (qb, team) = split_qb_team(&self.session, rest).ok_or_else(|| {
            format!("usage: assign <quarterback> <team> (e.g. \"assign Josh Allen buf\"), got \"{rest}\"")
        })?;
        self.session
            .apply(Command::Assign {
                key: qb.name.clone(),
                value: team.abbr.to_string(),
            })
            .map_err(|e| e.to_string())?;
        Ok(format!("{} -> {}{}", qb.name, team.name, self.progress()))
    }

    fn do_unassign(&mut self, rest: &str) -> Result<String, String> {
        let qb = match resolve_team(rest) {
            Some(team) => self
                .session
                .assigned_qb(team.abbr)
                .ok_or_else(|| format!("nobody is on the {}", team.name))?,
            None => self.lookup_qb(rest)?,
        };
        if !self.session.is_assigned(&qb.name) {
            return Ok(format!("{} is not placed.", qb.name));
        }
        self.session
            .apply(Command::Unassign {
                key: qb.name.clone(),
            })
            .map_err(|e| e.to_string())?;
        Ok(format!("{} is back in the pool.", qb.name))
    }

    fn do_select(&mut self, rest: &str) -> Result<String, String> {
        let qb = self.lookup_qb(rest)?;
        if let Some(abbr) = self.session.team_of(&qb.name).map(str::to_string) {
            self.session
                .tap_assigned(&abbr)
                .map_err(|e| e.to_string())?;
            return Ok(format!("{} taken back and selected.", qb.name));
        }
        self.session.tap_qb(&qb.name).map_err(|e| e.to_string())?;
        Ok(match self.session.selected() {
            Some(name) => format!("Selected {name}. Now 'place <team>'."),
            None => "Selection cleared.".to_string(),
        })
    }

    fn do_place(&mut self, rest: &str) -> Result<String, String> {
        let team = resolve_team(rest).ok_or_else(|| format!("unknown team: \"{rest}\""))?;
        let selected = self.session.selected().map(str::to_string);
        if self
            .session
            .tap_team(team.abbr)
            .map_err(|e| e.to_string())?
        {
            Ok(format!(
                "{} -> {}{}",
                selected.unwrap_or_default(),
                team.name,
                self.progress()
            ))
        } else {
            Ok("Select a quarterback first.".to_string())
        }
    }

    fn progress(&self) -> String {
        format!(
            " ({}/{} placed)",
            self.session.assigned_count(),
            self.session.total()
        )
    }

    fn do_pool(&self) -> String {
        let pool = self.session.pool();
        if pool.is_empty() {
            return "Every quarterback is placed. Type 'submit'.".to_string();
        }
        let names: Vec<_> = pool.iter().map(|q| q.name.as_str()).collect();
        format!("Unplaced ({}):\n  {}", pool.len(), names.join("\n  "))
    }

    fn do_board(&self) -> String {
        let mut out = Vec::new();
        for division in Division::DISPLAY_ORDER {
            out.push(division.name().to_string());
            for team in division.teams() {
                let qb = self
                    .session
                    .assigned_qb(team.abbr)
                    .map_or("-", |q| q.name.as_str());
                out.push(format!(
                    "  {:<4} {:<24} {qb}",
                    team.abbr.to_uppercase(),
                    team.name
                ));
            }
        }
        out.join("\n")
    }

    fn do_submit(&mut self) -> Result<String, String> {
        let score = self.session.submit().map_err(|e| e.to_string())?;
        Ok(format!(
            "Score: {score}\n\n{}\n\nType 'share' to share, 'again' to retry.",
            self.do_results()
        ))
    }

    fn do_results(&self) -> String {
        self.session
            .results()
            .iter()
            .map(|r| {
                let assigned = r.assigned.map_or("-", |q| q.name.as_str());
                match r.status {
                    PickStatus::Correct => format!("  ✓ {:<24} {assigned}", r.team.name),
                    PickStatus::Incorrect | PickStatus::Empty => {
                        let correct = r.correct_qb.map_or("?", |q| q.name.as_str());
                        format!("  ✗ {:<24} {assigned} (was {correct})", r.team.name)
                    }
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn do_share(&mut self) -> Result<String, String> {
        let shared = self
            .session
            .share(self.surface.as_mut())
            .map_err(|e| e.to_string())?;
        if shared {
            Ok(String::new())
        } else {
            Ok("Sharing is not available.".to_string())
        }
    }

    fn do_help(&self) -> String {
        [
            "  assign <quarterback> <team>   place a quarterback, e.g. \"assign Josh Allen buf\"",
            "  unassign <quarterback|team>   put a quarterback back in the pool",
            "  select <quarterback>          select one (or take a placed one back)",
            "  place <team>                  place the selected quarterback",
            "  pool                          list unplaced quarterbacks",
            "  board                         show every team slot",
            "  submit                        score once everyone is placed",
            "  share                         print the result grid",
            "  again                         clear the picks and retry",
            "  quit                          leave",
        ]
        .join("\n")
    }
}

impl Console for QbConsole<'_> {
    fn banner(&self) -> String {
        format!(
            "  Match {} starting quarterbacks to their teams (data as of {})\n\n{}",
            self.session.total(),
            self.session.roster().last_updated(),
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
            "share" => self.do_share(),
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

fn find_qb<'r>(session: &QbPickerSession<'r>, input: &str) -> Option<&'r Quarterback> {
    let needle = input.trim();
    session
        .roster()
        .all()
        .iter()
        .find(|q| q.name.eq_ignore_ascii_case(needle))
}

/// Split `"<quarterback> <team>"` where both halves may contain spaces.
fn split_qb_team<'r>(
    session: &QbPickerSession<'r>,
    input: &str,
) -> Option<(&'r Quarterback, &'static Team)> {
    let input = input.trim();
    input
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .find_map(|(idx, _)| {
            let qb = find_qb(session, &input[..idx])?;
            let team = resolve_team(&input[idx..])?;
            Some((qb, team))
        })
}
