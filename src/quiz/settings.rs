use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, PartialEq)]
pub struct Settings {
    pub accuracy_precision: usize,
    pub max_rounds: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            accuracy_precision: 2,
            max_rounds: None,
        }
    }
}

fn parse_setting<T: FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {}: {:?}", name, value))
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(value) = lookup("QUIZ_ACCURACY_PRECISION") {
            settings.accuracy_precision = parse_setting("QUIZ_ACCURACY_PRECISION", &value)?;
        }
        if let Some(value) = lookup("QUIZ_MAX_ROUNDS") {
            let max_rounds: usize = parse_setting("QUIZ_MAX_ROUNDS", &value)?;
            // 0 means no limit
            settings.max_rounds = Some(max_rounds).filter(|m| *m > 0);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("QUIZ_ACCURACY_PRECISION", "1"),
            ("QUIZ_MAX_ROUNDS", " 3 "),
        ]))
        .unwrap();
        assert_eq!(settings.accuracy_precision, 1);
        assert_eq!(settings.max_rounds, Some(3));
    }

    #[test]
    fn zero_rounds_means_unlimited() {
        let settings = Settings::from_lookup(lookup(&[("QUIZ_MAX_ROUNDS", "0")])).unwrap();
        assert_eq!(settings.max_rounds, None);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Settings::from_lookup(lookup(&[("QUIZ_MAX_ROUNDS", "many")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("QUIZ_ACCURACY_PRECISION", "-1")])).is_err());
    }
}
