//! Interactive terminal demo of the select-autocomplete component.
//!
//! ```text
//! cargo run -p select-autocomplete --example terminal [options.json]
//! ```
//!
//! `options.json` is an array of `{ "display": ..., "value": ... }` objects.
//! Logs go to `select-autocomplete.log`.

use std::fs::File;
use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::{Arc, Mutex};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue};
use futures::StreamExt;
use log::{debug, info};
use select_autocomplete::prelude::*;
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};

// -----------------------------------------------------------------------------
// Terminal
// -----------------------------------------------------------------------------

/// Raw mode + alternate screen, restored on drop and on panic.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Demo state
// -----------------------------------------------------------------------------

enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

struct Demo {
    select: SelectAutocomplete<Value>,
    overlay: OverlayHandle,
    search: SearchFieldHandle,
    control: FormControlHandle,
    /// Index into the visible rows.
    cursor: usize,
    search_focused: bool,
    last_change: Arc<Mutex<Option<SelectionChange>>>,
}

impl Demo {
    fn new(options: Vec<Value>) -> Result<Self, SelectError> {
        let overlay = OverlayHandle::new();
        let search = SearchFieldHandle::new();
        let control = FormControlHandle::new();

        let mut select = SelectAutocomplete::new()
            .with_overlay(overlay.clone())
            .with_search_field(search.clone())
            .with_form_control(control.clone());

        let last_change = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&last_change);
        select.subscribe(move |change| {
            if let Ok(mut last) = sink.lock() {
                *last = Some(change.clone());
            }
        });

        let config = SelectConfig::new()
            .with_placeholder("Pick some fruit")
            .with_label_count(2)
            .with_error("Pick at least one fruit", false);
        select.on_changes(SelectInputs::new(options).with_config(config))?;

        Ok(Self {
            select,
            overlay,
            search,
            control,
            cursor: 0,
            search_focused: false,
            last_change,
        })
    }

    fn visible_keys(&self) -> Vec<OptionKey> {
        self.select
            .filtered_options()
            .map(|option| option.key().clone())
            .collect()
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible_keys().len().saturating_sub(1);
        self.cursor = self.cursor.min(max);
    }

    fn toggle_dropdown(&mut self) {
        self.select.toggle_dropdown();
        let opened = self.overlay.is_open();
        self.select.set_focus(opened);
        self.search_focused = opened && self.search.take_focus_request();
        if !opened {
            // Closing ends the cycle: apply inputs again so selected rows
            // move to the top next time.
            self.rerun_change_cycle();
        }
    }

    fn rerun_change_cycle(&mut self) {
        if let Err(e) = self.select.update_inputs(|_| {}) {
            log::error!("change cycle failed: {}", e);
        }
        self.cursor = 0;
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<EventResult, SelectError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            return Ok(match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => EventResult::Quit,
                KeyCode::Char('a') => {
                    let checked = self.select.select_all_checked();
                    self.select.toggle_select_all(!checked);
                    EventResult::Consumed
                }
                KeyCode::Char('x') => {
                    self.select.clear_selection();
                    EventResult::Consumed
                }
                KeyCode::Char('d') => {
                    let disabled = self.select.is_disabled();
                    self.select.set_disabled(!disabled)?;
                    EventResult::Consumed
                }
                KeyCode::Char('e') => {
                    self.select
                        .update_inputs(|inputs| inputs.config.show_error = !inputs.config.show_error)?;
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            });
        }

        if !self.select.is_open() {
            return Ok(match key.code {
                KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                    self.toggle_dropdown();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            });
        }

        let result = match key.code {
            KeyCode::Esc => {
                self.toggle_dropdown();
                EventResult::Consumed
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                EventResult::Consumed
            }
            KeyCode::Down => {
                self.cursor += 1;
                self.clamp_cursor();
                EventResult::Consumed
            }
            KeyCode::Enter => {
                if let Some(option_key) = self.visible_keys().get(self.cursor) {
                    self.select.toggle_option(option_key);
                }
                if !self.select.is_open() {
                    self.rerun_change_cycle();
                }
                EventResult::Consumed
            }
            KeyCode::Backspace if self.search_focused => {
                let mut query = self.select.search_query().to_string();
                query.pop();
                self.select.filter_items(&query);
                self.clamp_cursor();
                EventResult::Consumed
            }
            KeyCode::Char(c) if self.search_focused => {
                let query = format!("{}{}", self.select.search_query(), c);
                self.select.filter_items(&query);
                self.clamp_cursor();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        };
        Ok(result)
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let view = self.select.render();
        let mut lines = Vec::new();

        let arrow = if view.field.open { "▲" } else { "▼" };
        let clear = if view.field.clear_icon.is_some() { " ✕" } else { "" };
        let state = if view.field.disabled { " (disabled)" } else { "" };
        lines.push(format!(
            "[{}] {} {}{}{}",
            view.field.appearance.as_str(),
            view.field.text,
            arrow,
            clear,
            state
        ));

        if let Some(panel) = &view.panel {
            let search = if panel.search.query.is_empty() {
                panel.search.placeholder.clone()
            } else {
                panel.search.query.clone()
            };
            let caret = if self.search_focused { "_" } else { "" };
            lines.push(format!("  search: {}{}", search, caret));

            if let Some(checked) = panel.select_all {
                lines.push(format!("  [{}] Select all", mark(checked)));
            }
            for (i, row) in panel.visible_rows().enumerate() {
                let pointer = if i == self.cursor { ">" } else { " " };
                lines.push(format!("{} [{}] {}", pointer, mark(row.selected), row.label));
            }
        }

        if let Some(error) = &view.error {
            lines.push(format!("! {}", error));
        }

        lines.push(String::new());
        lines.push(format!("form control: {:?}", self.control.value()));
        if let Ok(last) = self.last_change.lock()
            && let Some(change) = last.as_ref()
        {
            lines.push(format!("last event: {:?} {:?}", change.cause, change.values));
        }
        lines.push(
            "enter/space: open, esc: close, ↑↓: move, enter: pick, type: search, \
             ^A: select all, ^X: clear, ^D: disable, ^E: error, ^Q: quit"
                .to_string(),
        );

        queue!(out, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        out.flush()
    }
}

fn mark(checked: bool) -> &'static str {
    if checked { "x" } else { " " }
}

fn load_options() -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path)?;
            Ok(serde_json::from_reader(file)?)
        }
        None => Ok(vec![
            json!({"display": "Banana", "value": 1}),
            json!({"display": "apple", "value": 2}),
            json!({"display": "Cherry", "value": 3}),
            json!({"display": "apricot", "value": 4}),
            json!({"display": "Blueberry", "value": 5}),
            json!({"display": "date", "value": 6}),
            json!({"display": "Elderberry", "value": 7}),
        ]),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("select-autocomplete.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut demo = Demo::new(load_options()?)?;
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    info!("demo started");

    demo.draw(&mut terminal.stdout)?;
    while let Some(event) = events.next().await {
        let Event::Key(key) = event? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match demo.on_key(key) {
            Ok(EventResult::Quit) => break,
            Ok(EventResult::Consumed) => debug!("consumed {:?}", key.code),
            Ok(EventResult::Ignored) => {}
            Err(e) => log::error!("key handler failed: {}", e),
        }

        // One check cycle per handled event.
        demo.select.announce_empty_selection();
        demo.draw(&mut terminal.stdout)?;
    }

    info!("demo finished");
    Ok(())
}
