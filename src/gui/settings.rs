use serde::{
    Deserialize,
    Serialize,
};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub age_confirmed: bool,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { age_confirmed: false, dark_mode: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: SettingsData = serde_json::from_str("{}").unwrap();
        assert!(!settings.age_confirmed);
        assert!(settings.dark_mode);

        let settings: SettingsData = serde_json::from_str(r#"{"age_confirmed":true}"#).unwrap();
        assert!(settings.age_confirmed);
        assert!(settings.dark_mode);
    }

    #[test]
    fn settings_round_trip() {
        let settings = SettingsData { age_confirmed: true, dark_mode: false };
        let json = serde_json::to_string(&settings).unwrap();
        let back: SettingsData = serde_json::from_str(&json).unwrap();
        assert!(back.age_confirmed);
        assert!(!back.dark_mode);
    }
}
