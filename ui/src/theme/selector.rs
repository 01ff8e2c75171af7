use super::context::{ThemeChange, ThemeContext};
use std::sync::Arc;

/// One selectable entry of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub id: String,
    pub name: String,
    /// Primary color, shown as the swatch fill
    pub preview: String,
    pub gradient: String,
    pub selected: bool,
}

/// Lists the context's themes as swatches and forwards selections to it.
///
/// Reads state only through the [`ThemeContext`]; it never talks to the
/// theme store itself.
///
/// # Navigation
///
/// - [`move_up`](Self::move_up) / [`move_down`](Self::move_down) move the cursor
/// - [`confirm`](Self::confirm) selects the theme under the cursor
pub struct ThemeSelector {
    context: Arc<ThemeContext>,
    cursor: usize,
}

impl ThemeSelector {
    pub fn new(context: Arc<ThemeContext>) -> Self {
        Self { context, cursor: 0 }
    }

    /// Every catalog theme, marking the one whose id matches the current theme.
    pub async fn swatches(&self) -> Vec<Swatch> {
        let current_id = self.context.current_theme().await.map(|theme| theme.id);
        self.context
            .themes()
            .iter()
            .map(|theme| Swatch {
                id: theme.id.clone(),
                name: theme.name.clone(),
                preview: theme.colors.primary.clone(),
                gradient: theme.colors.gradient.clone(),
                selected: current_id.as_deref() == Some(theme.id.as_str()),
            })
            .collect()
    }

    /// Name of the current theme, also when it is not a catalog entry.
    pub async fn current_name(&self) -> Option<String> {
        self.context.current_theme().await.map(|theme| theme.name)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Put the cursor on the selected swatch, if any.
    pub async fn focus_current(&mut self) {
        if let Some(index) = self.swatches().await.iter().position(|s| s.selected) {
            self.cursor = index;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = self.context.themes().len().saturating_sub(1);
        if self.cursor < last {
            self.cursor += 1;
        }
    }

    /// Select the catalog entry at `index`. `None` when out of range.
    pub async fn select(&mut self, index: usize) -> Option<ThemeChange> {
        let theme = self.context.themes().get(index)?.clone();
        self.cursor = index;
        log::debug!("Theme selected from selector: {}", theme.name);
        Some(self.context.set_theme(theme).await)
    }

    pub async fn confirm(&mut self) -> Option<ThemeChange> {
        self.select(self.cursor).await
    }

    /// Printable rows: `●` marks the current theme, `>` the cursor.
    pub async fn render_lines(&self) -> Vec<String> {
        self.swatches()
            .await
            .iter()
            .enumerate()
            .map(|(index, swatch)| {
                let cursor = if index == self.cursor { '>' } else { ' ' };
                let marker = if swatch.selected { '●' } else { '○' };
                format!(
                    "{cursor} {marker} {:<12} {:<10} hsl({})",
                    swatch.name, swatch.id, swatch.preview
                )
            })
            .collect()
    }
}
