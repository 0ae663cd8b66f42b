//! Command executor for dispatching CLI commands

use std::io::Write;

use super::handlers;
use super::parser::{Cli, Commands, OutputFormat};
use crate::config::environment;

/// Execute the parsed command, writing its output to `out`
pub fn execute_command<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let config = environment();
    tracing::debug!(variant = %crate::config::Environment::for_build(), "Using linked environment config");

    let output = match &cli.command {
        Some(Commands::Show { format }) => handlers::show(config, *format)?,
        None => handlers::show(config, OutputFormat::Json)?,
        Some(Commands::Check { file }) => handlers::check(file.as_deref())?,
        Some(Commands::Routes { id, json }) => handlers::routes(config, *id, *json)?,
        Some(Commands::LoginUrl {
            callback_path,
            logout,
        }) => handlers::login_url(config, callback_path, *logout)?,
    };

    writeln!(out, "{}", output.trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        execute_command(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_default_command_shows_json() {
        let out = run(&["coffee-env"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["production"], cfg!(feature = "production"));
        assert!(value["auth0"]["clientId"].is_string());
    }

    #[test]
    fn test_check_command() {
        let out = run(&["coffee-env", "check"]).unwrap();
        assert!(out.trim_end().ends_with("config: ok"));
    }

    #[test]
    fn test_routes_command() {
        let out = run(&["coffee-env", "routes", "--id", "4"]).unwrap();
        assert!(out.contains("DELETE"));
        assert!(out.contains("/drinks/4"));
        assert!(out.contains("delete:drinks"));
    }

    #[test]
    fn test_login_url_command() {
        let out = run(&["coffee-env", "login-url", "--callback-path", "/tabs/drink-menu"]).unwrap();
        assert!(out.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8100%2Ftabs%2Fdrink-menu"));
    }
}
