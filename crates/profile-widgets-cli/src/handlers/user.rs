use anyhow::{Context, Result};
use profile_widgets_types::User;
use std::fs::File;
use std::io::BufReader;

use crate::args::UserArgs;

/// Build the user record from `--user-file` or the inline flags.
pub fn load(args: &UserArgs) -> Result<User> {
    match args.user_file.as_deref() {
        Some("-") => {
            User::from_reader(std::io::stdin().lock()).context("Failed to read user from stdin")
        }
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            User::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read user from {}", path))
        }
        None => Ok(User {
            username: args.username.clone(),
            first_name: args.first_name.clone(),
            last_name: args.last_name.clone(),
        }),
    }
}
