use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "catalog.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectorSettings {
    pub flags: FlagNames,
    pub catalog: CatalogSettings,
}

/// Request property names that switch each inspection mode on.
///
/// Only the presence of the property matters, its value is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlagNames {
    /// Render the key instead of the translation.
    pub show_keys: String,
    /// Record key → rendered text in the execution context.
    pub save_keys: String,
    /// Wrap rendered text in `%%text%%key%%` hint markers.
    pub show_hints: String,
}

impl Default for FlagNames {
    fn default() -> Self {
        Self {
            show_keys: "showKeys".to_string(),
            save_keys: "saveKeys".to_string(),
            show_hints: "showHints".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSettings {
    /// Catalog files, relative to the catalog root.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,

    /// Joins nested JSON object keys into translation keys.
    pub key_separator: String,

    /// Locale tried after the requested locale's fallback chain.
    /// If unset, lookups fall back to the root locale only.
    pub default_locale: Option<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/*.json".to_string()],
            exclude_patterns: vec![],
            key_separator: ".".to_string(),
            default_locale: None,
        }
    }
}

impl InspectorSettings {
    /// # Errors
    /// - Empty or duplicate flag name
    /// - Empty separator or default locale
    /// - Missing or invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        self.flags.validate(&mut errors);
        self.catalog.validate(&mut errors);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl FlagNames {
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        let names = [
            ("flags.showKeys", &self.show_keys),
            ("flags.saveKeys", &self.save_keys),
            ("flags.showHints", &self.show_hints),
        ];

        for (index, (field_path, name)) in names.iter().enumerate() {
            if name.is_empty() {
                errors.push(ValidationError::new(
                    *field_path,
                    "The property name cannot be empty. Example: \"showKeys\"",
                ));
                continue;
            }

            if let Some((other_path, _)) = names.iter().take(index).find(|(_, other)| other == name)
            {
                errors.push(ValidationError::new(
                    *field_path,
                    format!("The property name '{name}' is already used by '{other_path}'"),
                ));
            }
        }
    }
}

impl CatalogSettings {
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "catalog.keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "catalog.includePatterns",
                "At least one pattern is required. Example: [\"**/*.json\"]",
            ));
        }

        for (index, pattern) in self.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("catalog.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("catalog.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if let Some(locale) = &self.default_locale
            && locale.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "catalog.defaultLocale",
                "The locale cannot be empty. Please specify a locale (e.g., \"en\"), or remove this field",
            ));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = InspectorSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: InspectorSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings.flags, eq(&FlagNames::default()));
        assert_that!(settings.catalog.key_separator.as_str(), eq("."));
        assert_that!(settings.catalog.include_patterns, elements_are![eq("**/*.json")]);
        assert_that!(settings.catalog.exclude_patterns, is_empty());
        assert_that!(settings.catalog.default_locale, none());
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"flags": {"showKeys": "keys"}, "catalog": {"defaultLocale": "en"}}"#;

        let settings: InspectorSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.flags.show_keys.as_str(), eq("keys"));
        assert_that!(settings.flags.save_keys.as_str(), eq("saveKeys"));
        assert_that!(settings.catalog.default_locale, some(eq("en")));
        assert_that!(settings.catalog.include_patterns, len(eq(1)));
    }

    #[rstest]
    fn validate_empty_flag_name() {
        let settings = InspectorSettings {
            flags: FlagNames { show_hints: String::new(), ..FlagNames::default() },
            ..InspectorSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("flags.showHints")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_duplicate_flag_name() {
        let settings = InspectorSettings {
            flags: FlagNames { save_keys: "showKeys".to_string(), ..FlagNames::default() },
            ..InspectorSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("flags.saveKeys")),
                field!(ValidationError.message, contains_substring("already used by")),
                field!(ValidationError.message, contains_substring("flags.showKeys"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let settings = InspectorSettings {
            catalog: CatalogSettings { key_separator: String::new(), ..CatalogSettings::default() },
            ..InspectorSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("catalog.keySeparator"))])
        );
    }

    #[rstest]
    fn validate_invalid_include_patterns_empty() {
        let settings = InspectorSettings {
            catalog: CatalogSettings { include_patterns: vec![], ..CatalogSettings::default() },
            ..InspectorSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("catalog.includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    #[case::include(vec!["**/*.{json".to_string()], vec![], "catalog.includePatterns[0]")]
    #[case::exclude(
        vec!["**/*.json".to_string()],
        vec!["tmp/**".to_string(), "invalid[pattern".to_string()],
        "catalog.excludePatterns[1]"
    )]
    fn validate_invalid_glob(
        #[case] include_patterns: Vec<String>,
        #[case] exclude_patterns: Vec<String>,
        #[case] field_path: &str,
    ) {
        let settings = InspectorSettings {
            catalog: CatalogSettings {
                include_patterns,
                exclude_patterns,
                ..CatalogSettings::default()
            },
            ..InspectorSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq(field_path)),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_blank_default_locale() {
        let settings = InspectorSettings {
            catalog: CatalogSettings {
                default_locale: Some("  ".to_string()),
                ..CatalogSettings::default()
            },
            ..InspectorSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("catalog.defaultLocale"))])
        );
    }

    #[rstest]
    fn validation_error_display_lists_all_errors() {
        let settings = InspectorSettings {
            flags: FlagNames { show_keys: String::new(), ..FlagNames::default() },
            catalog: CatalogSettings { key_separator: String::new(), ..CatalogSettings::default() },
        };

        let errors = settings.validate().unwrap_err();
        let error_message = format!("{}", ConfigError::ValidationErrors(errors));

        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. flags.showKeys"));
        assert_that!(error_message, contains_substring("2. catalog.keySeparator"));
    }
}
