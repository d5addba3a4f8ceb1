use gq_modes::{GuessSession, QuizConfig};

use super::{Console, division_menu, repl, resolve_division, split_command};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let config = QuizConfig::default().with_optional_seed(seed);
    let mut console = GuessConsole::new(GuessSession::new(&config));
    repl(&mut console)
}

/// Text interface over a [`GuessSession`].
pub struct GuessConsole {
    session: GuessSession,
}

impl GuessConsole {
    pub fn new(session: GuessSession) -> Self {
        Self { session }
    }

    fn prompt(&self) -> String {
        format!(
            "Which division do the {} play in?\n{}",
            self.session.current_team().name,
            division_menu()
        )
    }

    fn do_guess(&mut self, input: &str) -> Result<String, String> {
        let division = resolve_division(input)
            .ok_or_else(|| format!("not a division: \"{input}\" (try 1-8 or e.g. \"AFC East\")"))?;
        let feedback = self.session.guess(division).map_err(|e| e.to_string())?;

        let verdict = if feedback.is_correct {
            format!("Correct! The {} play in the {}.", feedback.team, feedback.correct)
        } else {
            format!(
                "Wrong. The {} play in the {}, not the {}.",
                feedback.team, feedback.correct, feedback.selected
            )
        };
        Ok(format!(
            "{verdict}\nScore: {}/{}. Type 'next' for another team.",
            self.session.score(),
            self.session.attempts()
        ))
    }

    fn do_next(&mut self) -> Result<String, String> {
        self.session.advance().map_err(|e| e.to_string())?;
        Ok(self.prompt())
    }

    fn do_score(&self) -> String {
        format!(
            "Score: {}/{} ({} teams seen)",
            self.session.score(),
            self.session.attempts(),
            self.session.used_count()
        )
    }

    fn do_help(&self) -> String {
        [
            "  <division>   answer with a number 1-8 or a name like \"NFC North\"",
            "  next         move on to another team once answered",
            "  score        show the running score",
            "  reset        start over",
            "  quit         leave",
        ]
        .join("\n")
    }
}

impl Console for GuessConsole {
    fn banner(&self) -> String {
        format!("  Guess the division\n\n{}", self.prompt())
    }

    fn process(&mut self, input: &str) -> Result<String, String> {
        let (cmd, _) = split_command(input);
        match cmd.as_str() {
            "next" | "n" => self.do_next(),
            "score" => Ok(self.do_score()),
            "reset" => {
                self.session.reset();
                Ok(format!("Score cleared.\n{}", self.prompt()))
            }
            "help" => Ok(self.do_help()),
            "quit" | "q" => Ok(format!("Final score: {}", self.session.tally())),
            _ => self.do_guess(input),
        }
    }
}
