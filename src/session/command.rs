//! REPL command parsing.

use std::fmt;
use std::str::FromStr;

use super::SessionConfig;
use crate::cards::{Card, CardError, Deck};

/// Most copies of a card one `add` may append.
pub const MAX_ADD_COUNT: usize = 1000;

/// How to order the hand for `sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// By rank, then suit (`sort 0`).
    Rank,
    /// By suit, then rank (`sort 1`).
    Suit,
}

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `view`
    View,
    /// `books <n>`
    Books(usize),
    /// `runs <n>`
    Runs(usize),
    /// `decks [n]`, `None` restores the configured default.
    Decks(Option<usize>),
    /// `add <card> [n]`
    Add {
        /// Card to append.
        card: Card,
        /// Number of copies.
        count: usize,
    },
    /// `new [n]`, `None` uses the configured hand size.
    New(Option<usize>),
    /// `buy <card>`
    Buy(Card),
    /// `build [json]`
    Build {
        /// Print a JSON report instead of text.
        json: bool,
    },
    /// `score`
    Score,
    /// `sort <0|1>`
    Sort(SortOrder),
    /// `reset`
    Reset,
    /// `exit` or `quit`
    Exit,
}

/// Help entries as `(usage, description)` pairs.
///
/// Defaults shown for `decks` and `new` are the ones `config` falls back to.
pub fn help(config: &SessionConfig) -> Vec<(&'static str, String)> {
    vec![
        ("view", "look at current cards in hand".to_string()),
        ("score", "determine your current score".to_string()),
        ("books [num books]", "set the number of books".to_string()),
        ("runs [num runs]", "set the number of runs".to_string()),
        (
            "decks [num decks]",
            format!(
                "specify number of decks to draw cards from\n\t\t({} by default)",
                config.num_decks
            ),
        ),
        (
            "add [card name] [num cards]",
            "add new card(s) of given name to hand\n\t\t(1 by default)".to_string(),
        ),
        (
            "new [num cards]",
            format!(
                "instantiates a new hand of randomly drawn cards\n\t\t({} by default)",
                config.hand_size
            ),
        ),
        ("buy [card name]", "determine whether a given card should be bought".to_string()),
        (
            "build [json]",
            "determine the best bases for building books and/or runs,\n\t\tand how many more cards are needed."
                .to_string(),
        ),
        (
            "sort [option]",
            "sort the hand of cards by:\n\t\t\t0 - number\n\t\t\t1 - suit".to_string(),
        ),
        ("reset", "resets the player's hand".to_string()),
        ("exit", "terminates the program".to_string()),
    ]
}

/// Errors from a malformed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a command.
    Unknown(String),
    /// A required argument is absent.
    MissingArgument,
    /// An argument is not an integer.
    ExpectedInteger(String),
    /// An argument must be positive.
    NotPositive(i64),
    /// An argument must be non-negative.
    Negative(i64),
    /// An argument is above the largest accepted value.
    TooLarge {
        /// Value given.
        value: i64,
        /// Largest accepted value.
        max: usize,
    },
    /// A card argument does not parse.
    InvalidCard(String, CardError),
    /// `sort` option other than 0 or 1.
    InvalidSortOption(i64),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(_) => write!(f, "unknown command"),
            CommandError::MissingArgument => write!(f, "expecting at least one argument"),
            CommandError::ExpectedInteger(_) => write!(f, "expecting an integer"),
            CommandError::NotPositive(_) => write!(f, "must be a positive integer"),
            CommandError::Negative(_) => write!(f, "number must be non-negative"),
            CommandError::TooLarge { max, .. } => write!(f, "number must be at most {}", max),
            CommandError::InvalidCard(name, _) => write!(
                f,
                "{} is not a valid card name\nAn example of a valid name is 'Card:1:SPADE'",
                name
            ),
            CommandError::InvalidSortOption(_) => write!(f, "not a valid sort option"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidCard(_, e) => Some(e),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();
        let first = args.first().copied();

        match name {
            "help" => Ok(Command::Help),
            "view" => Ok(Command::View),
            "score" => Ok(Command::Score),
            "reset" => Ok(Command::Reset),
            "exit" | "quit" => Ok(Command::Exit),
            "books" => Ok(Command::Books(non_negative(required(first)?)?)),
            "runs" => Ok(Command::Runs(non_negative(required(first)?)?)),
            "decks" => Ok(Command::Decks(
                first.map(|t| positive_at_most(t, Deck::MAX_DECKS)).transpose()?,
            )),
            "new" => Ok(Command::New(first.map(positive).transpose()?)),
            "add" => {
                let card = parse_card(required(first)?)?;
                let count = args
                    .get(1)
                    .map(|t| positive_at_most(t, MAX_ADD_COUNT))
                    .transpose()?
                    .unwrap_or(1);
                Ok(Command::Add { card, count })
            }
            "buy" => Ok(Command::Buy(parse_card(required(first)?)?)),
            "build" => Ok(Command::Build { json: first == Some("json") }),
            "sort" => match integer(required(first)?)? {
                0 => Ok(Command::Sort(SortOrder::Rank)),
                1 => Ok(Command::Sort(SortOrder::Suit)),
                other => Err(CommandError::InvalidSortOption(other)),
            },
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required(arg: Option<&str>) -> Result<&str, CommandError> {
    arg.ok_or(CommandError::MissingArgument)
}

fn integer(token: &str) -> Result<i64, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::ExpectedInteger(token.to_string()))
}

fn positive(token: &str) -> Result<usize, CommandError> {
    let n = integer(token)?;
    usize::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(CommandError::NotPositive(n))
}

fn positive_at_most(token: &str, max: usize) -> Result<usize, CommandError> {
    let n = positive(token)?;
    if n > max {
        return Err(CommandError::TooLarge { value: integer(token)?, max });
    }
    Ok(n)
}

fn non_negative(token: &str) -> Result<usize, CommandError> {
    let n = integer(token)?;
    usize::try_from(n).map_err(|_| CommandError::Negative(n))
}

fn parse_card(token: &str) -> Result<Card, CommandError> {
    token
        .parse()
        .map_err(|e| CommandError::InvalidCard(token.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_simple_commands() {
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("view".parse::<Command>(), Ok(Command::View));
        assert_eq!("score".parse::<Command>(), Ok(Command::Score));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("build".parse::<Command>(), Ok(Command::Build { json: false }));
        assert_eq!("build json".parse::<Command>(), Ok(Command::Build { json: true }));
    }

    #[test]
    fn test_counts() {
        assert_eq!("books 2".parse::<Command>(), Ok(Command::Books(2)));
        assert_eq!("runs 0".parse::<Command>(), Ok(Command::Runs(0)));
        assert_eq!("books -1".parse::<Command>(), Err(CommandError::Negative(-1)));
        assert_eq!("runs".parse::<Command>(), Err(CommandError::MissingArgument));
        assert_eq!(
            "books two".parse::<Command>(),
            Err(CommandError::ExpectedInteger("two".to_string()))
        );
    }

    #[test]
    fn test_optional_positive_counts() {
        assert_eq!("decks".parse::<Command>(), Ok(Command::Decks(None)));
        assert_eq!("decks 3".parse::<Command>(), Ok(Command::Decks(Some(3))));
        assert_eq!("decks 0".parse::<Command>(), Err(CommandError::NotPositive(0)));
        assert_eq!("new".parse::<Command>(), Ok(Command::New(None)));
        assert_eq!("new 7".parse::<Command>(), Ok(Command::New(Some(7))));
        assert_eq!("new -4".parse::<Command>(), Err(CommandError::NotPositive(-4)));
    }

    #[test]
    fn test_oversized_counts_are_rejected() {
        assert_eq!("decks 100".parse::<Command>(), Ok(Command::Decks(Some(100))));
        assert_eq!(
            "decks 101".parse::<Command>(),
            Err(CommandError::TooLarge { value: 101, max: Deck::MAX_DECKS })
        );
        assert_eq!(
            "decks 9223372036854775807".parse::<Command>(),
            Err(CommandError::TooLarge { value: i64::MAX, max: Deck::MAX_DECKS })
        );

        let err = "add Card:1:SPADE 100000000000".parse::<Command>().unwrap_err();
        assert_eq!(err, CommandError::TooLarge { value: 100_000_000_000, max: MAX_ADD_COUNT });
        assert_eq!(err.to_string(), "number must be at most 1000");
        assert!(matches!(
            "add Card:1:SPADE 1000".parse::<Command>(),
            Ok(Command::Add { count: 1000, .. })
        ));
    }

    #[test]
    fn test_help_reflects_config() {
        let entries = help(&SessionConfig::new().with_decks(3).with_hand_size(7));
        assert_eq!(entries.len(), 12);
        assert!(entries[4].1.ends_with("(3 by default)"));
        assert!(entries[6].1.ends_with("(7 by default)"));
        assert!(help(&SessionConfig::new())[4].1.ends_with("(2 by default)"));
    }

    #[test]
    fn test_card_commands() {
        let ace = Card::new(1, Suit::Spade).unwrap();
        assert_eq!("add Card:1:SPADE".parse::<Command>(), Ok(Command::Add { card: ace, count: 1 }));
        assert_eq!("add Card:1:SPADE 3".parse::<Command>(), Ok(Command::Add { card: ace, count: 3 }));
        assert_eq!("buy Card:14:RED_JOKER".parse::<Command>(), Ok(Command::Buy(Card::RED_JOKER)));
        assert_eq!("add".parse::<Command>(), Err(CommandError::MissingArgument));
        assert_eq!("add Card:1:SPADE 0".parse::<Command>(), Err(CommandError::NotPositive(0)));

        let err = "buy Card:14:SPADE".parse::<Command>().unwrap_err();
        assert!(matches!(err, CommandError::InvalidCard(ref name, _) if name == "Card:14:SPADE"));
        assert_eq!(
            err.to_string(),
            "Card:14:SPADE is not a valid card name\nAn example of a valid name is 'Card:1:SPADE'"
        );
    }

    #[test]
    fn test_sort_and_unknown() {
        assert_eq!("sort 0".parse::<Command>(), Ok(Command::Sort(SortOrder::Rank)));
        assert_eq!("sort 1".parse::<Command>(), Ok(Command::Sort(SortOrder::Suit)));
        assert_eq!("sort 2".parse::<Command>(), Err(CommandError::InvalidSortOption(2)));
        assert_eq!("sort".parse::<Command>(), Err(CommandError::MissingArgument));
        assert_eq!(
            "deal".parse::<Command>(),
            Err(CommandError::Unknown("deal".to_string()))
        );
        assert_eq!("".parse::<Command>(), Err(CommandError::Unknown(String::new())));
    }
}
