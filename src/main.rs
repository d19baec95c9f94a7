//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Auther : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator with a live strength meter.

use clap::Parser;
use rpawogen::setclip::ClearTask;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "Generate passwords and check how strong they are", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Check a password against the strength requirements
    Check(CheckArgs),

    /// Open the interactive password form
    Form,

    /// Show or change the configuration
    Config(ConfigArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (defaults to the configured length)
    #[arg(short, long)]
    length: Option<usize>,

    /// Print the password instead of masking it
    #[arg(short, long, default_value_t = false)]
    show: bool,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Password to check, prompted for when omitted
    password: Option<String>,

    /// Print the password being checked
    #[arg(short, long, default_value_t = false)]
    show: bool,
}

#[derive(Debug, Parser)]
struct ConfigArgs {
    /// Default password length
    #[arg(long)]
    default_length: Option<usize>,

    /// Smallest selectable length
    #[arg(long)]
    min_length: Option<usize>,

    /// Largest selectable length
    #[arg(long)]
    max_length: Option<usize>,

    /// Show passwords by default
    #[arg(long)]
    show_password: Option<bool>,

    /// Seconds before a copied password is cleared, 0 disables clearing
    #[arg(long)]
    clipboard_clear_secs: Option<u64>,

    /// Restore the default configuration
    #[arg(long, default_value_t = false)]
    reset: bool,
}

impl ConfigArgs {
    fn has_updates(&self) -> bool {
        self.default_length.is_some()
            || self.min_length.is_some()
            || self.max_length.is_some()
            || self.show_password.is_some()
            || self.clipboard_clear_secs.is_some()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 作为剪贴板清理进程启动
    if let Some(task) = ClearTask::from_env() {
        task.run();
        return Ok(());
    }

    let cli = Cli::parse();
    let result = match cli {
        Cli::Gen(args) => {
            commands::password_gen::generate_random(args.length, args.show, args.copy, args.seed)
        },
        Cli::Check(args) => {
            commands::testpass::test_password(args.password, args.show)
        },
        Cli::Form => {
            commands::form::run_form()
        },
        Cli::Config(args) => {
            if args.reset {
                commands::config::reset_config()
            } else if args.has_updates() {
                commands::config::update_config(
                    args.default_length,
                    args.min_length,
                    args.max_length,
                    args.show_password,
                    args.clipboard_clear_secs,
                )
            } else {
                commands::config::show_config()
            }
        },
    };
    result.map_err(anyhow::Error::msg)
}
