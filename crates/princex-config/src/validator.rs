//! Settings validation.

use crate::schema::Settings;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Settings validator, run before settings are saved.
pub struct SettingsValidator;

impl SettingsValidator {
    pub fn validate(settings: &Settings) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_api_key(settings, &mut result);
        Self::validate_model(settings, &mut result);

        result
    }

    fn validate_api_key(settings: &Settings, result: &mut ValidationResult) {
        if settings.enable_ai && settings.api_key.trim().is_empty() {
            result.add_error(ValidationError::new(
                "api_key",
                "Please enter an API key or disable AI explanations",
            ));
        }

        if !settings.api_key.is_empty() && settings.api_key.trim() != settings.api_key {
            result.add_warning(ValidationWarning::new(
                "api_key",
                "API key has leading or trailing whitespace, it will be trimmed",
            ));
        }
    }

    fn validate_model(settings: &Settings, result: &mut ValidationResult) {
        let model = settings.model.trim();
        if !model.is_empty() && !settings.api_provider.offers_model(model) {
            let known: Vec<&str> = settings.api_provider.models().iter().map(|m| m.id).collect();
            result.add_warning(ValidationWarning::new(
                "model",
                format!(
                    "Model '{}' is not a known {} model, known models: {:?}",
                    model, settings.api_provider, known
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
