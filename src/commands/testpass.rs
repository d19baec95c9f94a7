use rpassword::prompt_password;

use rpawogen::form::{PasswordForm, render_strength};
use rpawogen::strength::estimate_guessability;

pub fn test_password(password: Option<String>, show: bool) -> Result<(), String> {
    let password = match password {
        Some(p) => p,
        None => prompt_password("Enter password to check: ")
            .map_err(|e| format!("Failed to read password: {}", e))?,
    };

    let form = PasswordForm::with_password(&password, show);
    if show {
        println!("Password: {}", form.displayed_password());
    }
    print!("{}", render_strength(&form.strength()));

    if !password.is_empty() {
        let estimate = estimate_guessability(&password);
        println!("Guessability: {} (score: {}/4)", estimate.rating, estimate.score);
        if !estimate.suggestions.is_empty() {
            println!("Suggestions: {}", estimate.suggestions);
        }
    }
    Ok(())
}
