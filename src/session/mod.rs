//! Interactive browse session.
//!
//! Holds the catalog and the current [`ViewState`]. Every command that changes
//! an input recomputes the whole view from scratch; nothing derived is cached
//! between commands.

mod command;

pub use command::{Command, CommandError, HELP};

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::catalog::Catalog;
use crate::config::BROWSE_PROMPT;
use crate::export::render_text;
use crate::pipeline::{CategoryFilter, ViewState};
use crate::view::GalleryView;

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An input changed, or a redisplay was requested
    Redraw,
    /// Text to print without redrawing the cards
    Message(String),
    Quit,
}

/// A catalog plus the state vector the user is editing.
pub struct GallerySession {
    catalog: Catalog,
    state: ViewState,
}

impl GallerySession {
    pub fn new(catalog: Catalog, state: ViewState) -> Self {
        GallerySession { catalog, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The view for the current state.
    pub fn view(&self) -> GalleryView<'_> {
        GalleryView::derive(&self.catalog, &self.state)
    }

    /// Applies a command to the state vector.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Search(query) => {
                self.state.search_query = query;
                Outcome::Redraw
            }
            Command::Category(category) => {
                self.state.selected_category = CategoryFilter::parse(&category);
                Outcome::Redraw
            }
            Command::Sort(mode) => {
                self.state.sort_mode = mode;
                Outcome::Redraw
            }
            Command::Reset => {
                self.state = ViewState::default();
                Outcome::Redraw
            }
            Command::Show => Outcome::Redraw,
            Command::Open(number) => {
                let view = self.view();
                match number.checked_sub(1).and_then(|i| view.cards().get(i)) {
                    Some(card) => Outcome::Message(card.link().to_string()),
                    None => Outcome::Message(format!(
                        "No card {} ({} shown)",
                        number,
                        view.count()
                    )),
                }
            }
            Command::Categories => Outcome::Message(self.view().categories().join("\n")),
            Command::Help => Outcome::Message(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        }
    }

    /// Reads commands from `input` until EOF or `quit`, printing to `out`.
    ///
    /// Unparseable lines print an error and the session continues.
    pub fn run<R: BufRead, W: Write + ?Sized>(
        &mut self,
        input: R,
        out: &mut W,
        color: bool,
    ) -> Result<()> {
        render_text(&self.view(), out, color)?;
        write!(out, "{}", BROWSE_PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match line.parse::<Command>() {
                Ok(command) => {
                    log::debug!("Browse command: {:?}", command);
                    match self.apply(command) {
                        Outcome::Redraw => {
                            render_text(&self.view(), out, color)?;
                        }
                        Outcome::Message(message) => writeln!(out, "{}", message)?,
                        Outcome::Quit => return Ok(()),
                    }
                }
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    writeln!(out, "Type 'help' for a list of commands.")?;
                }
            }
            write!(out, "{}", BROWSE_PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortMode;
    use serde_json::json;

    fn session() -> GallerySession {
        let catalog = Catalog::from_value(
            &json!([
                {"link": "a", "title": "Sunrise", "category": "yoga", "viewCount": 500},
                {"link": "b", "title": "Core", "category": "pilates", "viewCount": 9000},
                {"link": "c", "title": "Sunset", "category": "yoga"}
            ]),
            "test",
        );
        GallerySession::new(catalog, ViewState::default())
    }

    fn links(session: &GallerySession) -> Vec<String> {
        session.view().records().map(|r| r.link.clone()).collect()
    }

    #[test]
    fn test_each_input_is_independent() {
        let mut session = session();
        assert_eq!(links(&session), vec!["a", "b", "c"]);

        session.apply(Command::Sort(SortMode::Views));
        assert_eq!(links(&session), vec!["b", "a", "c"]);

        session.apply(Command::Category("yoga".to_string()));
        assert_eq!(links(&session), vec!["a", "c"]);

        session.apply(Command::Search("sunset".to_string()));
        assert_eq!(links(&session), vec!["c"]);

        session.apply(Command::Category("all".to_string()));
        assert_eq!(links(&session), vec!["c"]);

        session.apply(Command::Reset);
        assert_eq!(session.state(), &ViewState::default());
        assert_eq!(links(&session), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_open_reports_link_or_missing_card() {
        let mut session = session();
        assert_eq!(
            session.apply(Command::Open(2)),
            Outcome::Message("b".to_string())
        );
        assert_eq!(
            session.apply(Command::Open(9)),
            Outcome::Message("No card 9 (3 shown)".to_string())
        );
    }

    #[test]
    fn test_catalog_is_never_modified() {
        let mut session = session();
        let before = session.catalog().records().to_vec();
        session.apply(Command::Sort(SortMode::Views));
        session.apply(Command::Search("core".to_string()));
        let _ = session.view();
        assert_eq!(session.catalog().records(), before.as_slice());
    }

    #[test]
    fn test_run_reads_until_quit() {
        let mut session = session();
        let input = "category pilates\nbogus\nopen 1\nquit\nsearch never-reached\n";
        let mut out = Vec::new();
        session
            .run(input.as_bytes(), &mut out, false)
            .expect("session should run");

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Found 3 videos"));
        assert!(text.contains("Found 1 video\n"));
        assert!(text.contains("Unknown command: bogus"));
        assert!(text.contains("gallery> b\n"));
        assert!(session.state().search_query.is_empty());
    }

    #[test]
    fn test_run_stops_at_eof() {
        let mut session = session();
        let mut out = Vec::new();
        session
            .run("sort views\n".as_bytes(), &mut out, false)
            .expect("session should run");
        assert_eq!(session.state().sort_mode, SortMode::Views);
    }
}
