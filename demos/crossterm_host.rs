//! Terminal host for kiku using crossterm.
//!
//! Press Enter, type `hello` or `time`, then press Enter again. Escape abandons
//! the input, Ctrl-C quits.
//! Run with: RUST_LOG=kiku=debug cargo run --example crossterm_host

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use kiku::{Binding, Config, KeyPress, Modifiers, Notification, Step, codes};
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

/// Translate a crossterm key event to the browser-style descriptor kiku expects.
fn convert_key_event(event: CKeyEvent) -> Option<KeyPress> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let press = match event.code {
        CKeyCode::Char(c) => KeyPress::char(c),
        CKeyCode::Enter => KeyPress::enter(),
        CKeyCode::Esc => KeyPress::escape(),
        CKeyCode::Tab => KeyPress::with_key(9, "Tab"),
        CKeyCode::Backspace => KeyPress::with_key(8, "Backspace"),
        _ => return None,
    };
    Some(press.mods(mods))
}

fn print_line(text: &str) {
    // Raw mode needs an explicit carriage return.
    print!("{text}\r\n");
    let _ = io::stdout().flush();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config {
        case_sensitive: false,
        blacklisted_key_codes: [codes::SHIFT, codes::CONTROL, codes::ALT].into(),
        ..Config::default()
    };

    let mut recognizer = kiku::create(config, |n: Notification| print_line(n.name()))?;
    recognizer.extend([
        Binding::new("hello", || print_line("Hello from kiku!")),
        Binding::new("time", || {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            print_line(&format!("seconds since epoch: {secs}"));
        }),
    ]);
    print_line(&format!("triggers: {}", recognizer.function_keys().join(", ")));

    enable_raw_mode()?;
    let result = run(&mut recognizer);
    disable_raw_mode()?;
    result
}

fn run(recognizer: &mut kiku::Recognizer) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }
        let Some(press) = convert_key_event(key) else {
            continue;
        };
        if let Step::Appended(_) = recognizer.handle_key(&press)? {
            print_line(&format!("> {}", recognizer.state().buffer));
        }
    }
}
