use crate::error::AppError;
use crate::theme::types::Theme;
use crate::validation::Validator;
use server::model::GRADIENT_KEY;

/// Longest accepted theme name
pub const MAX_THEME_NAME_LEN: usize = 50;

/// Validation errors specific to theme palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    EmptyName,
    NameTooLong { name: String, max: usize },
    EmptyColor { role: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::EmptyName => "Theme name cannot be empty.".to_string(),
            ThemeValidationError::NameTooLong { name, max } => {
                format!("Theme name '{name}' is too long (max {max} characters).")
            }
            ThemeValidationError::EmptyColor { role } => {
                format!(
                    "Theme color '{role}' is empty.\n\n\
                    Every color role and the gradient need a value."
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Validation(error.user_message())
    }
}

/// Validator for complete theme values
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, theme: &Theme) -> Result<(), Self::Error> {
        let name = theme.name.trim();
        if name.is_empty() {
            return Err(ThemeValidationError::EmptyName);
        }
        if name.chars().count() > MAX_THEME_NAME_LEN {
            return Err(ThemeValidationError::NameTooLong {
                name: theme.name.clone(),
                max: MAX_THEME_NAME_LEN,
            });
        }

        for (role, value) in theme.colors.atomic() {
            if value.trim().is_empty() {
                return Err(ThemeValidationError::EmptyColor {
                    role: role.as_str().to_string(),
                });
            }
        }
        if theme.colors.gradient.trim().is_empty() {
            return Err(ThemeValidationError::EmptyColor {
                role: GRADIENT_KEY.to_string(),
            });
        }

        Ok(())
    }
}
