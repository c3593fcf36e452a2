//! `stamp resolve <path>` – show how a path resolves.

use anyhow::Result;
use stamp_core::routes::{Resolution, RouteTable};

pub fn run_resolve(path: &str) -> Result<()> {
    let table = RouteTable::default();
    match table.resolve(path) {
        Resolution::Redirect { to } => {
            println!("{path} -> redirect {to}");
            // Show the hop a browser would take.
            match table.resolve(&to) {
                Resolution::Render { user_name } => println!("{to} -> user {user_name}"),
                Resolution::Redirect { to: next } => println!("{to} -> redirect {next}"),
                Resolution::NotFound => println!("{to} -> not found"),
            }
        }
        Resolution::Render { user_name } => println!("{path} -> user {user_name}"),
        Resolution::NotFound => println!("{path} -> not found"),
    }
    Ok(())
}
