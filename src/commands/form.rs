use std::io::{self, BufRead, Write};
use rand::rngs::OsRng;

use rpawogen::configtool::AppConfig;
use rpawogen::form::{ActionOutcome, FormAction, PasswordForm, HELP_TEXT};
use rpawogen::setclip::SystemClipboard;

pub fn run_form() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    let mut form = PasswordForm::new(config.length_bounds(), config.default_length, config.show_password);
    let mut clipboard = SystemClipboard::new(config.clipboard_clear_secs);
    let mut rng = OsRng;

    println!("{}\n", HELP_TEXT);
    print!("{}", form.render());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let action = match FormAction::parse(&line) {
            Ok(action) => action,
            Err(e) => {
                println!("{} (h for help)", e);
                continue;
            }
        };

        match form.apply(action, &mut rng, &mut clipboard) {
            ActionOutcome::Quit => break,
            ActionOutcome::Continue(notice) => {
                if let Some(notice) = notice {
                    println!("{}", notice);
                }
                if action != FormAction::Help {
                    print!("{}", form.render());
                }
            }
        }
    }
    Ok(())
}
