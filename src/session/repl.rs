//! Read-eval-print loop over any line-oriented input and output.

use log::debug;
use std::io::{self, BufRead, Write};

use super::command::{help, Command};
use super::Session;

/// Prompt printed before each command.
const PROMPT: &str = "> ";

/// A REPL driving a [`Session`].
pub struct Repl<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Create a REPL reading commands from `input` and writing to `output`.
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self { session, input, output }
    }

    /// The session being driven.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the REPL and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    ///
    /// Bad commands are reported on the output and the loop carries on.
    /// Only I/O failures end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(());
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.parse::<Command>() {
                Ok(Command::Exit) => return Ok(()),
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!("rejected command {:?}: {:?}", trimmed, e);
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    /// Carry out one command and print its result.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        let out = &mut self.output;
        let session = &mut self.session;
        match command {
            Command::Help => {
                writeln!(out, "List of valid commands:")?;
                for (usage, description) in help(session.config()) {
                    writeln!(out, "\t{}\n\t\t{}", usage, description)?;
                }
            }
            Command::View => {
                write!(out, "{}", session.hand())?;
                writeln!(
                    out,
                    "\nNum books:\t{}\nNum runs:\t{}",
                    session.num_books(),
                    session.num_runs()
                )?;
            }
            Command::Books(n) => session.set_books(n),
            Command::Runs(n) => session.set_runs(n),
            Command::Decks(n) => session.set_decks(n),
            Command::Add { card, count } => session.add(card, count),
            Command::New(size) => {
                session.deal(size);
            }
            Command::Buy(card) => {
                let advice = session.buy(card);
                writeln!(out, "{}", if advice.should_buy() { "yes" } else { "no" })?;
            }
            Command::Build { json: false } => write!(out, "{}", session.build())?,
            Command::Build { json: true } => {
                let report = serde_json::to_string_pretty(&session.build())
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(out, "{}", report)?;
            }
            Command::Score => writeln!(out, "{}", session.score())?,
            Command::Sort(order) => session.sort(order),
            Command::Reset => session.reset(),
            Command::Exit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;
    use std::io::Cursor;

    fn run_script(config: SessionConfig, script: &str) -> (Session, String) {
        let mut repl = Repl::new(Session::new(config), Cursor::new(script.to_string()), Vec::new());
        repl.run().unwrap();
        let session = repl.session().clone();
        let output = String::from_utf8(repl.into_output()).unwrap();
        (session, output)
    }

    #[test]
    fn test_build_books() {
        let script = "add Card:1:SPADE 3\nadd Card:1:HEART 3\nbooks 1\nbuild\nexit\n";
        let (session, output) = run_script(SessionConfig::new(), script);
        assert_eq!(session.hand().len(), 6);
        assert!(output.contains("Book 1:\t[SPADE - ACE, SPADE - ACE, SPADE - ACE]\n"));
        assert!(output.contains("Number of cards missing: 0\n"));
    }

    #[test]
    fn test_view_and_score() {
        let script = "view\nadd Card:14:RED_JOKER\nadd Card:10:CLUB 2\nscore\nview\n";
        let (_, output) = run_script(SessionConfig::new().with_runs(1), script);
        assert_eq!(
            output,
            "> empty\n\nNum books:\t0\nNum runs:\t1\n\
             > > > 70\n\
             > 1.\tJOKER - RED\n2.\tCLUB - TEN\n3.\tCLUB - TEN\n\nNum books:\t0\nNum runs:\t1\n\
             > "
        );
    }

    #[test]
    fn test_buy_answers() {
        let script = "add Card:5:HEART\nadd Card:6:HEART\nruns 1\nbuy Card:7:HEART\nbuy Card:7:SPADE\n";
        let (session, output) = run_script(SessionConfig::new(), script);
        let answers: Vec<&str> = output
            .split(PROMPT)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(answers, vec!["yes", "no"]);
        assert_eq!(session.hand().len(), 2);
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let script = "shuffle\nbooks -2\nadd Card:0:SPADE\nsort 5\n\nscore\n";
        let (_, output) = run_script(SessionConfig::new(), script);
        assert!(output.contains("Error: unknown command\n"));
        assert!(output.contains("Error: number must be non-negative\n"));
        assert!(output.contains("Error: Card:0:SPADE is not a valid card name\n"));
        assert!(output.contains("Error: not a valid sort option\n"));
        assert!(output.ends_with("> 0\n> "));
    }

    #[test]
    fn test_new_sort_reset() {
        let script = "decks 1\nnew 54\nsort 1\n";
        let (session, _) = run_script(SessionConfig::new().with_seed(3), script);
        let mut expected = crate::cards::Deck::new().deal_n(crate::cards::Deck::SIZE);
        expected.sort_by_key(|c| (c.suit(), c.rank()));
        assert_eq!(session.hand().cards(), &expected[..]);

        let (session, _) = run_script(SessionConfig::new().with_seed(3), "new\nbooks 4\nreset\n");
        assert!(session.hand().is_empty());
        assert_eq!(session.num_books(), 0);
    }

    #[test]
    fn test_oversized_counts_keep_running() {
        let script = "decks 9223372036854775807\nnew 1\nadd Card:1:SPADE 100000000000\nscore\n";
        let (session, output) = run_script(SessionConfig::new().with_seed(5), script);
        assert!(output.contains("Error: number must be at most 100\n"));
        assert!(output.contains("Error: number must be at most 1000\n"));
        assert_eq!(session.num_decks(), 2);
        assert_eq!(session.hand().len(), 1);
        assert!(output.ends_with(&format!("> {}\n> ", session.score())));
    }

    #[test]
    fn test_help_shows_configured_defaults() {
        let (_, output) = run_script(SessionConfig::new().with_decks(3), "help\n");
        assert!(output.contains("draw cards from\n\t\t(3 by default)\n"));
        assert!(output.contains("randomly drawn cards\n\t\t(11 by default)\n"));
    }

    #[test]
    fn test_build_json_and_help() {
        let script = "add Card:14:BLACK_JOKER\nbooks 1\nbuild json\nhelp\n";
        let (_, output) = run_script(SessionConfig::new(), script);
        assert!(output.contains("\"missing\": 3"));
        assert!(output.contains("List of valid commands:\n\tview\n\t\tlook at current cards in hand\n"));
    }
}
