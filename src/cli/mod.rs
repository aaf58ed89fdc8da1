//! CLI module for the netbox-export binary

pub mod commands;
pub mod error;

pub use error::CliError;

/// Resolved connection settings for a run.
pub struct Connection {
    pub url: String,
    pub token: String,
}

/// Resolve URL and token from flags with environment fallback
/// (`NETBOX_URL` / `NETBOX_TOKEN`). An empty flag or variable counts as
/// missing. Missing either value is a fatal configuration error, reported
/// before any network activity.
pub fn resolve_connection(
    url: Option<String>,
    token: Option<String>,
) -> Result<Connection, CliError> {
    let url = pick_setting(url, std::env::var("NETBOX_URL").ok()).ok_or(CliError::MissingUrl)?;
    let token =
        pick_setting(token, std::env::var("NETBOX_TOKEN").ok()).ok_or(CliError::MissingToken)?;
    Ok(Connection { url, token })
}

/// Flag value wins over the environment; empty strings count as unset.
fn pick_setting(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.filter(|s| !s.is_empty())
        .or(env_value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let picked = pick_setting(Some("flag".into()), Some("env".into()));
        assert_eq!(picked.as_deref(), Some("flag"));
    }

    #[test]
    fn test_empty_flag_falls_back_to_env() {
        let picked = pick_setting(Some(String::new()), Some("env".into()));
        assert_eq!(picked.as_deref(), Some("env"));
    }

    #[test]
    fn test_empty_env_counts_as_unset() {
        assert_eq!(pick_setting(None, Some(String::new())), None);
        assert_eq!(pick_setting(Some(String::new()), None), None);
    }
}
