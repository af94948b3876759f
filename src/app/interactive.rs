use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::common::apply_genre_selector;
use crate::core::dashboard::Dashboard;
use crate::core::filter::GenreSelector;
use crate::core::render::{render_dashboard, render_genre_options, PosterCdn};
use crate::utils::CinedashResult;

const HELP: &str = "\
Commands:
  search <text>        filter by title (empty clears)
  genre <id|name|all>  filter by genre
  year <text|clear>    filter by release year
  clear                reset all filters
  genres               list genres
  show                 redraw the dashboard
  help                 show this help
  quit                 leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Genre(GenreSelector),
    Year(Option<String>),
    Clear,
    Genres,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(arg.to_string())),
            "genre" | "g" => Ok(Command::Genre(GenreSelector::parse(arg))),
            "year" | "y" => {
                if arg.is_empty() || arg.eq_ignore_ascii_case("clear") {
                    Ok(Command::Year(None))
                } else {
                    Ok(Command::Year(Some(arg.to_string())))
                }
            }
            "clear" | "reset" => Ok(Command::Clear),
            "genres" => Ok(Command::Genres),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{other}', type 'help' for a list")),
        }
    }
}

/// Read commands until `quit` or end of input, redrawing after each
/// filter change.
pub async fn run<R, W>(
    dashboard: &mut Dashboard,
    cdn: &PosterCdn,
    input: R,
    output: &mut W,
) -> CinedashResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(output, "> ")?;
    output.flush()?;

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(c) => c,
            Err(msg) => {
                writeln!(output, "{msg}")?;
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
        };
        debug!("command: {:?}", command);

        match command {
            Command::Search(term) => dashboard.set_search_term(term),
            Command::Genre(selector) => {
                if !apply_genre_selector(dashboard, &selector) {
                    writeln!(output, "Unknown genre, type 'genres' for a list")?;
                }
            }
            Command::Year(year) => dashboard.set_year(year.as_deref()),
            Command::Clear => dashboard.clear_filters(),
            Command::Genres => {
                write!(output, "{}", render_genre_options(dashboard))?;
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
            Command::Show => {}
            Command::Help => {
                write!(output, "{HELP}")?;
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
            Command::Quit => return Ok(()),
        }

        write!(output, "{}", render_dashboard(dashboard, cdn))?;
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}
