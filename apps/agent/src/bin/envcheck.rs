//! Reports whether the environment the interview agent needs is in place.
//!
//! Exit code 0 when every required variable is set, 1 otherwise.

use std::process::ExitCode;

use interview_agent::config::REQUIRED_ENV;

fn main() -> ExitCode {
    println!("Loading environment variables from .env file...");
    match dotenvy::dotenv() {
        Ok(path) => println!("Loaded {}", path.display()),
        Err(_) => println!("No .env file found; using process environment"),
    }

    println!("Checking environment...");
    println!("interview-agent {}", env!("CARGO_PKG_VERSION"));

    let mut ok = true;
    for names in REQUIRED_ENV {
        match find_set(names) {
            Some((name, value)) => println!("{name}={}", mask(&value)),
            None => {
                println!(
                    "Environment variable '{}' is not set.",
                    names.join("' or '")
                );
                ok = false;
            }
        }
    }

    if ok {
        println!("Environment check passed.");
        ExitCode::SUCCESS
    } else {
        println!("Environment check failed.");
        ExitCode::FAILURE
    }
}

fn find_set<'a>(names: &[&'a str]) -> Option<(&'a str, String)> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| (*name, v))
    })
}

/// Shows only the last four characters of a secret.
fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask("AIzaSyABCDEF1234"), "************1234");
        assert_eq!(mask("abc"), "***");
    }

    #[test]
    fn test_find_set_prefers_first_name() {
        std::env::set_var("ENVCHECK_TEST_FIRST", "one");
        std::env::set_var("ENVCHECK_TEST_SECOND", "two");
        let found = find_set(&["ENVCHECK_TEST_FIRST", "ENVCHECK_TEST_SECOND"]).unwrap();
        assert_eq!(found, ("ENVCHECK_TEST_FIRST", "one".to_string()));
        assert!(find_set(&["ENVCHECK_TEST_NEVER_SET"]).is_none());
    }
}
