// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-driven search session.
//!
//! Each input line is one UI event. On the virtual clock nothing fires until
//! `wait <ms>`, which makes sessions scriptable:
//!
//! ```text
//! $ printf 'type shi\nwait 400\ndown\nenter\n' | katalog session
//! ```
//!
//! With `--realtime` timers run on the wall clock. Stdin is read on its own
//! thread, so a debounce or notice that comes due while the prompt sits idle
//! fires on time and the list is reprinted.

use super::display::*;
use anyhow::{bail, Context, Result};
use katalog::{
    InMemoryStore, NavKey, SearchConfig, SearchController, SearchPort, TimerService, VirtualClock,
    WallClock,
};
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

const HELP: &str = "\
commands:
  type <text>     append keystrokes, one input event per character
  set <text>      replace the search box in one event
  back            delete the last character
  down | up       move the highlight
  enter           submit the search box
  hover <n>       highlight suggestion n (0-based)
  click <n>       pick suggestion n
  focus | blur    focus or leave the search box
  wait <ms>       let time pass
  category <c>    narrow the grid (\"all\" for everything)
  show            print the suggestion list and state
  grid            print the product grid
  reset           clear the search
  quit";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Type(String),
    Set(String),
    Back,
    Key(NavKey),
    Hover(usize),
    Click(usize),
    Focus,
    Blur,
    Wait(Duration),
    Category(String),
    Show,
    Grid,
    Reset,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Line>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };
    let index = |rest: &str| -> Result<usize> {
        rest.trim()
            .parse()
            .with_context(|| format!("'{}' needs a suggestion index", word))
    };

    let parsed = match word {
        "type" => Line::Type(rest.to_string()),
        "set" => Line::Set(rest.to_string()),
        "back" | "backspace" => Line::Back,
        "down" => Line::Key(NavKey::ArrowDown),
        "up" => Line::Key(NavKey::ArrowUp),
        "enter" => Line::Key(NavKey::Enter),
        "hover" => Line::Hover(index(rest)?),
        "click" => Line::Click(index(rest)?),
        "focus" => Line::Focus,
        "blur" => Line::Blur,
        "wait" => {
            let ms: u64 = rest
                .trim()
                .parse()
                .context("'wait' needs a duration in milliseconds")?;
            Line::Wait(Duration::from_millis(ms))
        }
        "category" => {
            let name = rest.trim();
            if name.is_empty() {
                bail!("'category' needs a name or \"all\"");
            }
            Line::Category(name.to_string())
        }
        "show" => Line::Show,
        "grid" => Line::Grid,
        "reset" => Line::Reset,
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        other => bail!("unknown command '{}' (try 'help')", other),
    };
    Ok(Some(parsed))
}

/// The clock the session runs on.
pub enum SessionClock {
    Virtual(VirtualClock),
    Wall(WallClock),
}

impl SessionClock {
    pub fn new(realtime: bool) -> Self {
        if realtime {
            SessionClock::Wall(WallClock::new())
        } else {
            SessionClock::Virtual(VirtualClock::new())
        }
    }

    fn service(&self) -> Rc<dyn TimerService> {
        match self {
            SessionClock::Virtual(clock) => Rc::new(clock.clone()),
            SessionClock::Wall(clock) => Rc::new(clock.clone()),
        }
    }

    /// Fire whatever real time has made due. No-op on the virtual clock.
    fn settle(&self) -> usize {
        match self {
            SessionClock::Wall(clock) => clock.poll(),
            SessionClock::Virtual(_) => 0,
        }
    }

    /// How long the input loop may block. `None` on the virtual clock, where
    /// only `wait` moves time.
    fn next_due_in(&self) -> Option<Duration> {
        match self {
            SessionClock::Wall(clock) => clock.next_due_in(),
            SessionClock::Virtual(_) => None,
        }
    }

    fn wait(&self, by: Duration) {
        match self {
            SessionClock::Virtual(clock) => {
                let fired = clock.advance(by);
                tracing::trace!(fired, now_ms = clock.now().as_millis() as u64, "virtual time advanced");
            }
            SessionClock::Wall(clock) => {
                std::thread::sleep(by);
                clock.poll();
            }
        }
    }
}

/// Prints controller events; opening a product bumps its view count.
struct ConsolePort {
    store: Arc<InMemoryStore>,
}

impl SearchPort for ConsolePort {
    fn on_navigate(&self, product_id: &str) {
        self.store.increment_view_count(product_id);
        let name = self
            .store
            .get_product_by_id(product_id)
            .map(|p| p.name)
            .unwrap_or_default();
        println!("{} {} {}", themed(GREEN, &[BOLD], "→ open"), product_id, name);
    }

    fn on_not_found(&self) {
        println!("{}", themed(RED, &[BOLD], "✗ product not found"));
    }

    fn on_reset(&self) {
        println!("{}", themed(GRAY, &[], "↺ search cleared"));
    }

    fn on_notice_dismissed(&self) {
        println!("{}", themed(GRAY, &[DIM], "  (notice dismissed)"));
    }
}

pub fn run(store: Arc<InMemoryStore>, config: SearchConfig, realtime: bool) -> Result<()> {
    let clock = SessionClock::new(realtime);
    let port = Rc::new(ConsolePort {
        store: Arc::clone(&store),
    });
    let mut search = SearchController::new(store, port, clock.service(), config);
    tracing::info!(realtime, "session started");

    let lines = spawn_stdin_reader();
    drive(&mut search, &clock, &lines, atty::is(atty::Stream::Stdin))?;

    search.end_session();
    tracing::info!("session ended");
    Ok(())
}

/// Stdin lines on a channel. The reader thread stops when the receiver goes.
fn spawn_stdin_reader() -> Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Apply lines until input ends or `quit`. While waiting for the next line,
/// wall-clock timers fire as they come due.
fn drive(
    search: &mut SearchController<InMemoryStore>,
    clock: &SessionClock,
    lines: &Receiver<io::Result<String>>,
    interactive: bool,
) -> Result<()> {
    let prompt = || -> Result<()> {
        if interactive {
            print!("{} ", themed(CYAN, &[BOLD], "katalog>"));
            io::stdout().flush().context("writing prompt")?;
        }
        Ok(())
    };

    prompt()?;
    loop {
        let received = match clock.next_due_in() {
            Some(due) => lines.recv_timeout(due),
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let input = match received {
            Ok(input) => input.context("reading session input")?,
            Err(RecvTimeoutError::Timeout) => {
                if clock.settle() > 0 {
                    if interactive {
                        println!();
                    }
                    show(search);
                    prompt()?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };
        clock.settle();

        let line = match parse_line(&input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                prompt()?;
                continue;
            }
            Err(err) => {
                eprintln!("{}", themed(YELLOW, &[], &format!("{:#}", err)));
                prompt()?;
                continue;
            }
        };
        if !apply(search, clock, line) {
            break;
        }
        clock.settle();
        prompt()?;
    }
    Ok(())
}

/// Apply one line. `false` ends the session.
fn apply(search: &mut SearchController<InMemoryStore>, clock: &SessionClock, line: Line) -> bool {
    match line {
        Line::Type(text) => {
            let mut raw = search.raw_query();
            for ch in text.chars() {
                raw.push(ch);
                search.on_input_change(&raw);
            }
        }
        Line::Set(text) => search.on_input_change(&text),
        Line::Back => {
            let mut raw = search.raw_query();
            if raw.pop().is_some() {
                search.on_input_change(&raw);
            }
        }
        Line::Key(key) => search.on_key(key),
        Line::Hover(i) => search.on_hover(i),
        Line::Click(i) => search.on_suggestion_click(i),
        Line::Focus => search.on_focus(),
        Line::Blur => search.on_blur(),
        Line::Wait(by) => clock.wait(by),
        Line::Category(name) => search.select_category(name.as_str().into()),
        Line::Show => show(search),
        Line::Grid => {
            for product in search.grid() {
                println!(
                    "  {} {} {}",
                    pad_right(&product.id, 8),
                    pad_right(&truncate(&product.name, 32), 32),
                    themed(GRAY, &[], &product.category)
                );
            }
        }
        Line::Reset => search.on_reset(),
        Line::Help => println!("{}", HELP),
        Line::Quit => return false,
    }
    true
}

fn show(search: &SearchController<InMemoryStore>) {
    println!(
        "  box: {:?}  stable: {:?}  state: {}",
        search.raw_query(),
        search.stable_query(),
        state_label(search.state())
    );
    if !search.suggestions_visible() {
        println!("  {}", themed(GRAY, &[DIM], "(suggestions hidden)"));
        return;
    }
    let highlight = search.highlight();
    for (i, item) in search.suggestions().iter().enumerate() {
        let marker = if highlight == Some(i) { "▶" } else { " " };
        println!(
            "  {} {:>2} {} {} {}",
            marker,
            i,
            pad_right(&tier_badge(item.tier), 10),
            pad_right(&truncate(&item.name, 32), 32),
            views(item.view_count)
        );
    }
}
