use rand::rngs::OsRng;

use rpawogen::configtool::AppConfig;
use rpawogen::form::{PasswordForm, hidden_password_hint, render_strength};
use rpawogen::passgen;
use rpawogen::setclip::SystemClipboard;

pub fn generate_random(
    length: Option<usize>,
    show: bool,
    copy: bool,
    seed: Option<u64>,
) -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    let mut form = PasswordForm::new(
        config.length_bounds(),
        config.default_length,
        show || config.show_password,
    );
    if let Some(length) = length {
        let stored = form.set_length(length);
        if stored != length {
            println!("Length {} is outside {}-{}, using {}", length, config.min_length, config.max_length, stored);
        }
    }

    match seed {
        Some(seed) => form.generate(&mut passgen::seeded_rng(seed)),
        None => form.generate(&mut OsRng),
    };

    println!("Generated password: {}", form.displayed_password());
    print!("{}", render_strength(&form.strength()));

    if copy {
        let mut clipboard = SystemClipboard::new(config.clipboard_clear_secs);
        println!("{}", form.copy(&mut clipboard));
    }
    if let Some(hint) = hidden_password_hint(form.is_visible(), copy) {
        println!("{}", hint);
    }
    Ok(())
}
