use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::configurationerror::ConfigurationError;
use crate::time::calendar::braziliancalendar::BrazilianCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::recurringholiday::HolidayCategory;

pub const BRAZIL_NATIONAL: &str = "BrazilNational";
pub const BRAZIL_NATIONAL_WITH_SATURDAY: &str = "BrazilNationalWithSaturday";
pub const BRAZIL_BANKING: &str = "BrazilBanking";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CalendarJsonProp {
    name: String,
    category: HolidayCategory,
    #[serde(default)]
    include_saturday: bool
}

/// Named holiday calendars, loaded from JSON entries such as
///
/// ```json
/// [
///     {"name": "Settlement", "category": "National"},
///     {"name": "Retail", "category": "National", "include_saturday": true},
///     {"name": "Bank", "category": "Banking"}
/// ]
/// ```
pub struct CalendarConfiguration {
    calendars: HashMap<String, Arc<dyn HolidayCalendar>>
}

impl CalendarConfiguration {
    /// An empty registry. [`CalendarConfiguration::default`] comes with the
    /// three standard Brazilian calendars.
    pub fn new() -> CalendarConfiguration {
        CalendarConfiguration { calendars: HashMap::new() }
    }

    pub fn insert(&mut self, name: String, calendar: Arc<dyn HolidayCalendar>) -> Result<(), ConfigurationError> {
        if self.calendars.contains_key(&name) {
            return Err(ConfigurationError::DuplicateNameError(name));
        }
        self.calendars.insert(name, calendar);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn HolidayCalendar>, ConfigurationError> {
        self.calendars
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::NameNotFoundError(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.calendars.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.calendars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ConfigurationError> {
        let prop: CalendarJsonProp = serde_json::from_value(json_value)?;
        if prop.include_saturday && prop.category == HolidayCategory::Banking {
            warn!(name = %prop.name, "rejected banking calendar including Saturday");
            return Err(ConfigurationError::SaturdayOnBankingCalendar(prop.name));
        }

        let calendar = BrazilianCalendar::new(prop.category, prop.include_saturday);
        debug!(name = %prop.name, category = ?prop.category, include_saturday = prop.include_saturday, "registering calendar");
        self.insert(prop.name, Arc::new(calendar))
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ConfigurationError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Accepts either a single calendar object or an array of them.
    pub fn insert_from_json_value(&mut self, json_value: serde_json::Value) -> Result<(), ConfigurationError> {
        match json_value {
            serde_json::Value::Array(json_vec) => self.insert_obj_from_json_vec(&json_vec),
            other => self.insert_obj_from_json(other)
        }
    }

    pub fn from_json_str(json: &str) -> Result<CalendarConfiguration, ConfigurationError> {
        let json_value: serde_json::Value = serde_json::from_str(json)?;
        let mut configuration = CalendarConfiguration::new();
        configuration.insert_from_json_value(json_value)?;
        Ok(configuration)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<CalendarConfiguration, ConfigurationError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let mut configuration = CalendarConfiguration::new();
        configuration.insert_from_json_value(json_value)?;
        debug!(path = %file_path.display(), calendars = configuration.len(), "loaded calendar configuration");
        Ok(configuration)
    }
}

impl Default for CalendarConfiguration {
    fn default() -> Self {
        let mut calendars: HashMap<String, Arc<dyn HolidayCalendar>> = HashMap::new();
        calendars.insert(BRAZIL_NATIONAL.to_owned(), Arc::new(BrazilianCalendar::national()));
        calendars.insert(BRAZIL_NATIONAL_WITH_SATURDAY.to_owned(), Arc::new(BrazilianCalendar::national_including_saturday()));
        calendars.insert(BRAZIL_BANKING.to_owned(), Arc::new(BrazilianCalendar::banking()));
        CalendarConfiguration { calendars }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_registers_standard_calendars() {
        let configuration = CalendarConfiguration::default();
        assert_eq!(configuration.names(), vec![BRAZIL_BANKING, BRAZIL_NATIONAL, BRAZIL_NATIONAL_WITH_SATURDAY]);

        let saturday = date(2024, 6, 1);
        assert!(!configuration.get(BRAZIL_NATIONAL).unwrap().is_business_day(saturday));
        assert!(configuration.get(BRAZIL_NATIONAL_WITH_SATURDAY).unwrap().is_business_day(saturday));
        assert!(configuration.get(BRAZIL_BANKING).unwrap().is_holiday(date(2024, 5, 30)));
    }

    #[test]
    fn loads_array_of_calendars() {
        let json = r#"[
            {"name": "Settlement", "category": "National"},
            {"name": "Retail", "category": "National", "include_saturday": true},
            {"name": "Bank", "category": "Banking"}
        ]"#;
        let configuration = CalendarConfiguration::from_json_str(json).unwrap();
        assert_eq!(configuration.len(), 3);

        let carnival = date(2023, 2, 21);
        assert!(configuration.get("Settlement").unwrap().is_business_day(carnival));
        assert!(!configuration.get("Bank").unwrap().is_business_day(carnival));
        assert!(configuration.get("Retail").unwrap().is_business_day(date(2023, 2, 18)));
    }

    #[test]
    fn loads_single_calendar_object() {
        let configuration = CalendarConfiguration::from_json_str(r#"{"name": "Bank", "category": "Banking"}"#).unwrap();
        assert!(configuration.contains("Bank"));
        assert!(!configuration.is_empty());
    }

    #[test]
    fn unknown_name_is_reported() {
        let configuration = CalendarConfiguration::new();
        let err = configuration.get("Nowhere").err().unwrap();
        assert_eq!(err.to_string(), "key 'Nowhere' not found");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"[
            {"name": "Bank", "category": "Banking"},
            {"name": "Bank", "category": "National"}
        ]"#;
        let err = CalendarConfiguration::from_json_str(json).err().unwrap();
        assert!(matches!(err, ConfigurationError::DuplicateNameError(name) if name == "Bank"));
    }

    #[test]
    fn banking_calendar_cannot_include_saturday() {
        let json = r#"{"name": "Bank", "category": "Banking", "include_saturday": true}"#;
        let err = CalendarConfiguration::from_json_str(json).err().unwrap();
        assert!(matches!(err, ConfigurationError::SaturdayOnBankingCalendar(_)));
    }

    #[test]
    fn malformed_entries_are_parse_errors() {
        let unknown_category = r#"{"name": "X", "category": "Municipal"}"#;
        assert!(matches!(
            CalendarConfiguration::from_json_str(unknown_category).err().unwrap(),
            ConfigurationError::JsonParseError(_)
        ));

        let extra_holidays = r#"{"name": "X", "category": "National", "additional_holidays": ["2024-01-02"]}"#;
        assert!(CalendarConfiguration::from_json_str(extra_holidays).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CalendarConfiguration::from_reader("/nonexistent/brcalendar/calendars.json").err().unwrap();
        assert!(matches!(err, ConfigurationError::IOError(_)));
    }

    #[test]
    fn reads_configuration_file() {
        let path = std::env::temp_dir().join(format!("brcalendar-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(br#"[{"name": "Bank", "category": "Banking"}]"#).unwrap();
        drop(file);

        let configuration = CalendarConfiguration::from_reader(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(configuration.names(), vec!["Bank"]);
    }
}
