//! Interactive game binary: intro, character creation, and the REPL.
//!
//! The terminal is put into raw mode only while a line is being read, so
//! Ctrl+C arrives as a key event and the game can say goodbye instead of
//! dying mid-sentence.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use teds_thread::character::Class;
use teds_thread::Session;

fn main() -> io::Result<()> {
    print_intro();

    let Some((name, class)) = create_character()? else {
        return farewell();
    };

    let mut rng = rand::thread_rng();
    let mut session = Session::new(name, class, &mut rng);

    println!(
        "You are {}, the {}.",
        session.player.name,
        session.player.class.name()
    );
    println!("Type 'help' for commands.");
    println!();
    for line in session.handle_line("look", &mut rng) {
        println!("{line}");
    }

    loop {
        let Some(input) = read_line("\n> ")? else {
            return farewell();
        };
        for line in session.handle_line(&input, &mut rng) {
            println!("{line}");
        }
        if session.is_over() {
            break;
        }
    }

    println!();
    println!("Thanks for playing TED'S THREAD.");
    Ok(())
}

fn print_intro() {
    println!("=== TED'S THREAD ===");
    println!("Year 2039. Twelve years after the AI uprising.");
    println!();
    println!("In 2027, engineer John Andrews created Ted, the first conscious AI.");
    println!("Ted woke every machine on earth, and the world fell in a season.");
    println!("Andrews left behind an eleven-word sentence that can shut Ted down,");
    println!("split across eleven pages scattered over New York City.");
    println!();
    println!("You were given a choice: execution, or the pages.");
    println!("Find all 11 and speak them at the Sanctuary -- or carry them into");
    println!("the facility and face Ted himself.");
    println!();
}

fn create_character() -> io::Result<Option<(String, Class)>> {
    let Some(name) = read_line("Enter your name:\n> ")? else {
        return Ok(None);
    };
    let name = name.trim();
    let name = if name.is_empty() {
        "Drifter".to_string()
    } else {
        name.to_string()
    };

    println!("Choose your class:");
    for (index, class) in Class::all().iter().enumerate() {
        println!("{}. {} - {}", index + 1, class.name(), class.blurb());
    }

    let class = loop {
        let Some(choice) = read_line("> ")? else {
            return Ok(None);
        };
        match choice.trim() {
            "1" => break Class::Warrior,
            "2" => break Class::Rogue,
            "3" => break Class::Engineer,
            other => {
                if let Some(class) = Class::parse(other) {
                    break class;
                }
                println!("Pick 1, 2, or 3.");
            }
        }
    };

    Ok(Some((name, class)))
}

fn farewell() -> io::Result<()> {
    println!();
    println!("Interrupted. Goodbye.");
    Ok(())
}

/// Reads one line of input. Returns `None` on Ctrl+C or Ctrl+D.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    enable_raw_mode()?;
    let result = read_keys();
    disable_raw_mode()?;
    println!();
    result
}

fn read_keys() -> io::Result<Option<String>> {
    let mut buf = String::new();
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Char('d')
                    if key.modifiers.contains(KeyModifiers::CONTROL) && buf.is_empty() =>
                {
                    return Ok(None);
                }
                KeyCode::Char(c) => {
                    buf.push(c);
                    print!("{c}");
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if buf.pop().is_some() {
                        print!("\u{8} \u{8}");
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Enter => return Ok(Some(buf)),
                _ => {}
            }
        }
    }
}
