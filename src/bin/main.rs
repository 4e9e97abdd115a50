use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use log::{error, info};
use std::io::{self, stdin, stdout, Write};
use titlo_core::config::Args;
use titlo_core::persistence::{load_or_new, save_to_disk};
use titlo_core::{LineEditor, Literal, Preview, RecentLines, ValidationError};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let titla = match args.titla_table() {
        Ok(table) => table,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut history = load_or_new(&args.history, args.window);
    let mut editor = match &args.previous {
        Some(previous) => LineEditor::with_previous(titla, previous),
        None => LineEditor::new(titla),
    };
    let mut status: Option<String> = None;

    loop {
        print_ui(&editor, &history, status.take().as_deref())?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match parse_command(cmd) {
            Command::Exit => break,
            Command::Confirm => match editor.confirm() {
                Ok(literal) => {
                    status = Some(format!("Confirmed: '{}'", literal));
                    history.record(literal);
                    editor.clear();
                }
                Err(e) => status = Some(rejection(&e)),
            },
            Command::Back => {
                editor.backspace();
            }
            Command::Clear => {
                editor.clear();
            }
            Command::Set(text) => {
                editor.set_text(text);
            }
            Command::Recall(arg) => {
                let picked = arg
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|idx| history.get(idx))
                    .map(Literal::as_str)
                    .map(str::to_string);
                match picked {
                    Some(line) => {
                        editor.set_text(&line);
                    }
                    None => status = Some("No such line in history.".to_string()),
                }
            }
            Command::Unknown(name) => {
                status = Some(format!("Unknown command '{}'. Use ':text {}' to type it.", name, name));
            }
            Command::Append(text) => {
                // Appended at the end, as the on-screen keyboard does
                if let Preview::Disabled { ch, position } = *editor.append(text) {
                    let err = ValidationError::InvalidCharacter { ch, position };
                    status = Some(format!("{} Preview is off until {:?} is removed.", err.user_message(), ch));
                }
            }
        }
    }

    match save_to_disk(&history, &args.history) {
        Ok(()) => info!("History saved to '{}'", args.history.display()),
        Err(e) => error!("Could not save history: {}", e),
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Exit,
    Confirm,
    Back,
    Clear,
    Set(&'a str),
    Recall(&'a str),
    Append(&'a str),
    Unknown(&'a str),
}

/// Lines starting with ':' are commands; ':text' appends the rest verbatim,
/// so text that looks like a command (or starts with ':') can still be typed.
fn parse_command(line: &str) -> Command<'_> {
    if line.is_empty() {
        return Command::Confirm;
    }
    if line == "exit" {
        return Command::Exit;
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Append(line);
    };
    let (name, arg) = match rest.split_once(' ') {
        Some((name, arg)) => (name, arg),
        None => (rest, ""),
    };
    match name {
        "back" if arg.is_empty() => Command::Back,
        "clear" if arg.is_empty() => Command::Clear,
        "set" => Command::Set(arg),
        "recall" => Command::Recall(arg.trim()),
        "text" => Command::Append(arg),
        _ => Command::Unknown(line),
    }
}

fn rejection(err: &ValidationError) -> String {
    format!("{} ({})", err.user_message(), err)
}

fn print_ui(editor: &LineEditor, history: &RecentLines, status: Option<&str>) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(out, "{}", "Line annotation".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "Type to append, [Enter] to confirm. ':set TEXT', ':back', ':clear',")?;
    writeln!(out, "':recall N' to reuse a line, 'exit' to save and quit.")?;
    writeln!(out, "Lines starting with ':' and the word 'exit' are commands;")?;
    writeln!(out, "use ':text TEXT' to append them literally.\n")?;

    if !history.is_empty() {
        writeln!(out, "Recent lines:")?;
        for (i, line) in history.iter().enumerate() {
            writeln!(out, "  :{}: {}", i + 1, editor.titla().expand(line.as_str()))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Input:   [{}]", editor.text())?;
    match editor.preview() {
        Preview::Shown(display) => writeln!(out, "Display: [{}]", display.as_str().green())?,
        Preview::Disabled { .. } => writeln!(out, "Display: {}", "(disabled)".dark_grey())?,
    }

    if let Some(status) = status {
        writeln!(out, "\n{}", status.yellow())?;
    }
    write!(out, "\n> ")?;
    out.flush()
}
