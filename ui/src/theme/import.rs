use crate::error::{AppError, AppResult};
use crate::theme::types::Theme;
use crate::theme::validation::ThemeValidator;
use crate::validation::Validator;
use serde::Deserialize;
use server::model::ThemeColors;
use std::{fs, path::Path};

/// On-disk palette file.
///
/// ```toml
/// name = "Harbor"
///
/// [colors]
/// primary = "205 85% 45%"
/// # ...every other role...
/// gradient = "linear-gradient(135deg, #0369a1, #0d9488)"
/// ```
#[derive(Debug, Deserialize)]
struct PaletteFile {
    id: Option<String>,
    name: String,
    colors: ThemeColors,
}

/// Load and validate a theme from a TOML palette file.
///
/// Without an explicit `id` the theme gets `custom-<slug>` derived from its
/// name.
pub fn load_palette(path: &Path) -> AppResult<Theme> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Io(format!(
            "Failed to read palette file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_palette(&content).map_err(|e| match e {
        AppError::Config(msg) => {
            AppError::Config(format!("Failed to parse palette file '{}': {msg}", path.display()))
        }
        other => other,
    })
}

pub fn parse_palette(content: &str) -> AppResult<Theme> {
    let file: PaletteFile =
        toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

    let id = file.id.unwrap_or_else(|| format!("custom-{}", slug(&file.name)));
    let theme = Theme::new(id, file.name, file.colors);
    ThemeValidator.validate(&theme)?;
    Ok(theme)
}

fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
