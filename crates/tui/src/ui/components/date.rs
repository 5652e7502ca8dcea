use chrono::{
    DateTime, Local, Utc,
    format::{Item, StrftimeItems},
};
use chrono_tz::Tz;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Renders stored UTC timestamps as calendar dates in the display zone.
#[derive(Debug, Clone)]
pub struct DateDisplay {
    zone: Option<Tz>,
    format: String,
}

impl DateDisplay {
    pub fn new(zone: Option<Tz>, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::DateFormat(format));
        }
        Ok(Self { zone, format })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let zone = config
            .timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|err| AppError::Timezone(format!("{name}: {err}")))
            })
            .transpose()?;
        Self::new(zone, config.date_format.as_str())
    }

    pub fn format(&self, at: DateTime<Utc>) -> String {
        match self.zone {
            Some(zone) => at.with_timezone(&zone).format(&self.format).to_string(),
            None => at.with_timezone(&Local).format(&self.format).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn converts_to_the_configured_zone_before_formatting() {
        let dates = DateDisplay::new(Some(chrono_tz::Asia::Tokyo), "%m/%d/%Y").unwrap();
        let late_evening_utc = Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap();

        assert_eq!(dates.format(late_evening_utc), "10/20/2026");
    }

    #[test]
    fn rejects_broken_patterns() {
        assert!(matches!(
            DateDisplay::new(None, "%Q"),
            Err(AppError::DateFormat(_))
        ));
    }

    #[test]
    fn rejects_unknown_zones() {
        let config = AppConfig {
            timezone: Some("Mars/Olympus".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            DateDisplay::from_config(&config),
            Err(AppError::Timezone(_))
        ));
    }
}
