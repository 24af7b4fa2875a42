use serde::Deserialize;

use crate::shared::date_utils::CalendarDay;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub notifications: NotificationsConfig,
    pub dashboard: DashboardConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub toast_lifetime_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// DD/MM/YYYY
    pub default_reference_date: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LocaleConfig {
    pub currency_prefix: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[notifications]
toast_lifetime_ms = 5000

[dashboard]
default_reference_date = "20/05/2024"

[locale]
currency_prefix = "Rp."
"#;

impl AppConfig {
    /// Parse a TOML document; the reference date must be a real calendar day
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.reference_date()?;
        Ok(config)
    }

    /// The embedded default document
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Load an override document, falling back to the embedded default
    ///
    /// Missing or broken overrides are logged and ignored.
    pub fn load(override_toml: Option<&str>) -> anyhow::Result<Self> {
        if let Some(contents) = override_toml {
            match Self::from_toml_str(contents) {
                Ok(config) => {
                    log::info!("Loaded configuration override");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring invalid configuration override: {e:#}"),
            }
        }
        log::info!("Using default embedded configuration");
        Self::embedded()
    }

    /// Initial dashboard reference date
    pub fn reference_date(&self) -> anyhow::Result<CalendarDay> {
        let raw = &self.dashboard.default_reference_date;
        let day = CalendarDay::parse_dmy(raw)
            .filter(|day| day.to_naive().is_some())
            .ok_or_else(|| anyhow::anyhow!("invalid default_reference_date '{raw}'"))?;
        Ok(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> AppConfig {
        AppConfig::embedded().unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = embedded();
        assert_eq!(config.notifications.toast_lifetime_ms, 5000);
        assert_eq!(config.locale.currency_prefix, "Rp.");
        assert_eq!(config.reference_date().unwrap(), CalendarDay::new(2024, 5, 20));
    }

    #[test]
    fn test_override() {
        let config = AppConfig::load(Some(
            r#"
            [notifications]
            toast_lifetime_ms = 1500
            [dashboard]
            default_reference_date = "25/07/2024"
            [locale]
            currency_prefix = "IDR"
            "#,
        ))
        .unwrap();
        assert_eq!(config.notifications.toast_lifetime_ms, 1500);
        assert_eq!(config.locale.currency_prefix, "IDR");
        assert_ne!(config, embedded());
    }

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(AppConfig::load(Some("not = [toml")).unwrap(), embedded());

        let bad_date = r#"
            [notifications]
            toast_lifetime_ms = 1500
            [dashboard]
            default_reference_date = "20/20/2025"
            [locale]
            currency_prefix = "Rp."
        "#;
        assert!(AppConfig::from_toml_str(bad_date).is_err());
        assert_eq!(AppConfig::load(Some(bad_date)).unwrap(), embedded());
    }

    #[test]
    fn test_missing_override_uses_default() {
        assert_eq!(AppConfig::load(None).unwrap(), embedded());
    }
}
