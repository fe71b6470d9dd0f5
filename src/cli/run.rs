use crate::{
    cli::{add_lines, load_warning, search_lines, update_lines},
    prelude::{
        AppError, ContactManager, JsonStorage, Shell,
        command::{Cli, Commands},
    },
    validation::is_blank,
};
use clap::Parser;
use std::io;

pub fn run_app() -> Result<(), AppError> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<(), AppError> {
    let storage = JsonStorage::new(cli.file);
    let mut manager = ContactManager::new(Box::new(storage));

    if let Err(e) = manager.load() {
        println!("{}", load_warning(&e));
    }

    match cli.command {
        None => {
            let stdin = io::stdin();
            Shell::new(&mut manager, stdin.lock(), io::stdout()).run()
        }

        Some(Commands::Add { name, phone, email }) => {
            let name = required(&name, "Contact name")?;
            let report = manager.add_contact(
                name,
                phone.as_deref().unwrap_or_default().trim(),
                email.as_deref().unwrap_or_default().trim(),
            )?;

            print_lines(add_lines(name, &report));
            Ok(())
        }

        Some(Commands::Search { name }) => {
            let query = required(&name, "Search query")?;

            print_lines(search_lines(&manager.search(query)));
            Ok(())
        }

        Some(Commands::Update { name, phone, email }) => {
            let name = required(&name, "Contact name")?;
            let report = manager.update_contact(
                name,
                phone.as_deref().unwrap_or_default().trim(),
                email.as_deref().unwrap_or_default().trim(),
            )?;

            print_lines(update_lines(name, &report));
            Ok(())
        }
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, AppError> {
    if is_blank(value) {
        return Err(AppError::Validation(format!("{what} cannot be empty")));
    }
    Ok(value.trim())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
