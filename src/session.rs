// src/session.rs
// =============================================================================
// The interactive prompt loop: a two-state machine over the Explorer.
//
// StateSelect reads a state name and, on a match, lists that state's sites
// and moves to SiteSelect. SiteSelect reads a 1-based number and looks up
// places near the chosen site, "back" returns to StateSelect, and "exit"
// ends the session from either state.
//
// Fetch and extraction failures are caught here, reported, and leave the
// current state unchanged so the user can retry or exit.
// =============================================================================

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::explorer::Explorer;
use crate::model::Park;
use crate::places;

const STATE_PROMPT: &str = "Enter a state name (e.g. Michigan, michigan) or \"exit\": ";
const SITE_PROMPT: &str = "Choose the number for detail search or \"exit\" or \"back\": ";

enum Mode {
    StateSelect,
    SiteSelect {
        /// The state name as the user typed it, for the listing header.
        state: String,
        sites: Vec<Park>,
    },
}

/// What the loop should do after one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Session {
    explorer: Explorer,
    mode: Mode,
}

impl Session {
    pub fn new(explorer: Explorer) -> Self {
        Self {
            explorer,
            mode: Mode::StateSelect,
        }
    }

    /// True once a state's site list is on screen awaiting a number.
    pub fn selecting_site(&self) -> bool {
        matches!(self.mode, Mode::SiteSelect { .. })
    }

    /// Length of the currently retained site list (0 in state selection).
    pub fn site_count(&self) -> usize {
        match &self.mode {
            Mode::StateSelect => 0,
            Mode::SiteSelect { sites, .. } => sites.len(),
        }
    }

    // Runs the prompt loop until "exit" or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        loop {
            let prompt = match self.mode {
                Mode::StateSelect => STATE_PROMPT,
                Mode::SiteSelect { .. } => SITE_PROMPT,
            };
            let line = match editor.readline(prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            if self.handle_line(line.trim()).await == Step::Quit {
                break;
            }
        }
        Ok(())
    }

    // Applies one input line to the current state.
    pub async fn handle_line(&mut self, line: &str) -> Step {
        if line == "exit" {
            println!("Bye!");
            return Step::Quit;
        }

        // take the mode out so the handlers can borrow the explorer mutably
        let mode = std::mem::replace(&mut self.mode, Mode::StateSelect);
        self.mode = match mode {
            Mode::StateSelect => self.select_state(line).await,
            Mode::SiteSelect { state, sites } => self.select_site(line, state, sites).await,
        };
        Step::Continue
    }

    async fn select_state(&mut self, line: &str) -> Mode {
        let directory = match self.explorer.state_directory().await {
            Ok(directory) => directory,
            Err(e) => {
                eprintln!("[Error] Could not load the state directory: {e:#}");
                return Mode::StateSelect;
            }
        };

        let Some(state_url) = directory.get(&line.to_lowercase()) else {
            println!("[Error] Enter proper state name");
            return Mode::StateSelect;
        };

        let sites = match self.explorer.state_sites(state_url).await {
            Ok(sites) => sites,
            Err(e) => {
                eprintln!("[Error] Could not list sites for {line}: {e:#}");
                return Mode::StateSelect;
            }
        };

        println!("-------------------------");
        println!("List of national sites in {line}");
        println!("-------------------------");
        for (index, park) in sites.iter().enumerate() {
            println!("[{}] {}", index + 1, park.info());
        }

        Mode::SiteSelect {
            state: line.to_string(),
            sites,
        }
    }

    async fn select_site(&mut self, line: &str, state: String, sites: Vec<Park>) -> Mode {
        if line == "back" {
            return Mode::StateSelect;
        }

        let number = match line.parse::<usize>() {
            Ok(number) if number >= 1 && number <= sites.len() => number,
            _ => {
                println!("[Error] Invalid input");
                return Mode::SiteSelect { state, sites };
            }
        };

        let park = sites[number - 1].clone();
        println!("---------------------------------");
        println!("Places near {}", park.name);
        println!("---------------------------------");
        match self.explorer.nearby_places(&park).await {
            Ok(payload) => {
                for result in &payload.search_results {
                    println!("{}", places::format_place(result));
                }
            }
            Err(e) => eprintln!("[Error] Could not look up nearby places: {e:#}"),
        }

        Mode::SiteSelect { state, sites }
    }
}
