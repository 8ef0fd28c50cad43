pub mod domain;
pub mod engine;

pub mod config {
    use anyhow::{bail, Context};
    use std::net::IpAddr;

    const DEFAULT_PORT: u16 = 8000;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BackendKind {
        Heuristic,
        Disabled,
    }

    impl std::str::FromStr for BackendKind {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> anyhow::Result<Self> {
            match s.trim().to_ascii_lowercase().as_str() {
                "" | "heuristic" => Ok(Self::Heuristic),
                "disabled" | "none" => Ok(Self::Disabled),
                other => bail!("unknown AI_BACKEND {other:?} (expected heuristic or disabled)"),
            }
        }
    }

    /// Label reported on /health and in startup logs.
    pub fn mode_name(testing: bool) -> &'static str {
        if testing {
            "testing"
        } else {
            "production"
        }
    }

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub host: IpAddr,
        pub port: u16,
        /// Raw fault text in 500 bodies, debug logging, `mode: testing` on /health.
        pub testing: bool,
        pub ai_backend: BackendKind,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                host: IpAddr::from([0, 0, 0, 0]),
                port: DEFAULT_PORT,
                testing: false,
                ai_backend: BackendKind::Heuristic,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let defaults = Self::default();

            let host = match var("HOST") {
                Some(v) => v
                    .parse::<IpAddr>()
                    .with_context(|| format!("invalid HOST {v:?}"))?,
                None => defaults.host,
            };
            let port = match var("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .with_context(|| format!("invalid PORT {v:?}"))?,
                None => defaults.port,
            };
            let ai_backend = match var("AI_BACKEND") {
                Some(v) => v.parse::<BackendKind>()?,
                None => defaults.ai_backend,
            };

            Ok(Self {
                host,
                port,
                testing: var("CI_TESTING").is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
                ai_backend,
                sentry_dsn: var("SENTRY_DSN").filter(|s| !s.trim().is_empty()),
            })
        }

        pub fn mode(&self) -> &'static str {
            mode_name(self.testing)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn settings(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
            let env: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Settings::from_lookup(|k| env.get(k).cloned())
        }

        #[test]
        fn defaults_when_unset() {
            let s = settings(&[]).unwrap();
            assert_eq!(s.port, 8000);
            assert!(!s.testing);
            assert_eq!(s.ai_backend, BackendKind::Heuristic);
            assert_eq!(s.mode(), "production");
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn reads_overrides() {
            let s = settings(&[
                ("PORT", "9001"),
                ("HOST", "127.0.0.1"),
                ("CI_TESTING", "TRUE"),
                ("AI_BACKEND", "disabled"),
                ("SENTRY_DSN", " "),
            ])
            .unwrap();
            assert_eq!(s.port, 9001);
            assert_eq!(s.host, IpAddr::from([127, 0, 0, 1]));
            assert!(s.testing);
            assert_eq!(s.mode(), "testing");
            assert_eq!(s.ai_backend, BackendKind::Disabled);
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn rejects_bad_values() {
            assert!(settings(&[("PORT", "eighty")]).is_err());
            assert!(settings(&[("AI_BACKEND", "gpt")]).is_err());
        }
    }
}
