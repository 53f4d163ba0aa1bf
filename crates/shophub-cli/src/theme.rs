use clap::Subcommand;
use shophub_store::{load_theme, save_theme, LocalStore, ThemePreference};

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    Light,
    Dark,
}

/// # Errors
///
/// Returns an error if the preference cannot be read or written.
pub(crate) fn run_theme(store: &LocalStore, command: Option<ThemeCommands>) -> anyhow::Result<()> {
    let current = load_theme(store)?;
    let next = match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => {
            println!("{current}");
            return Ok(());
        }
        ThemeCommands::Toggle => current.toggled(),
        ThemeCommands::Light => ThemePreference::Light,
        ThemeCommands::Dark => ThemePreference::Dark,
    };

    save_theme(store, next)?;
    println!("{next}");
    Ok(())
}
