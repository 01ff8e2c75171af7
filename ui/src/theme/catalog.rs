use super::types::Theme;
use once_cell::sync::Lazy;
use server::model::ThemeColors;

/// Built-in themes, in display order. The first entry is the fallback.
static CATALOG: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme::new(
            "ocean",
            "Ocean",
            palette(
                [
                    "199 89% 48%",
                    "187 72% 40%",
                    "172 66% 50%",
                    "204 45% 98%",
                    "210 40% 12%",
                    "0 0% 100%",
                    "210 40% 12%",
                    "204 30% 92%",
                    "210 16% 42%",
                    "204 28% 86%",
                ],
                "linear-gradient(135deg, hsl(199 89% 48%) 0%, hsl(172 66% 50%) 100%)",
            ),
        ),
        Theme::new(
            "sunset",
            "Sunset",
            palette(
                [
                    "14 90% 55%",
                    "339 82% 58%",
                    "43 96% 56%",
                    "30 60% 98%",
                    "20 30% 14%",
                    "0 0% 100%",
                    "20 30% 14%",
                    "30 40% 92%",
                    "20 12% 42%",
                    "30 35% 86%",
                ],
                "linear-gradient(135deg, hsl(14 90% 55%) 0%, hsl(339 82% 58%) 100%)",
            ),
        ),
        Theme::new(
            "forest",
            "Forest",
            palette(
                [
                    "142 71% 35%",
                    "160 50% 30%",
                    "84 60% 45%",
                    "120 20% 97%",
                    "150 30% 10%",
                    "0 0% 100%",
                    "150 30% 10%",
                    "120 15% 91%",
                    "150 10% 40%",
                    "120 15% 85%",
                ],
                "linear-gradient(135deg, hsl(142 71% 35%) 0%, hsl(84 60% 45%) 100%)",
            ),
        ),
        Theme::new(
            "midnight",
            "Midnight",
            palette(
                [
                    "217 91% 60%",
                    "262 83% 66%",
                    "189 94% 43%",
                    "222 47% 7%",
                    "210 40% 96%",
                    "222 40% 11%",
                    "210 40% 96%",
                    "217 33% 17%",
                    "215 20% 65%",
                    "217 30% 20%",
                ],
                "linear-gradient(135deg, hsl(217 91% 60%) 0%, hsl(262 83% 66%) 100%)",
            ),
        ),
        Theme::new(
            "lavender",
            "Lavender",
            palette(
                [
                    "262 60% 58%",
                    "280 50% 65%",
                    "316 70% 65%",
                    "270 40% 98%",
                    "262 35% 15%",
                    "0 0% 100%",
                    "262 35% 15%",
                    "270 30% 93%",
                    "262 12% 45%",
                    "270 25% 88%",
                ],
                "linear-gradient(135deg, hsl(262 60% 58%) 0%, hsl(316 70% 65%) 100%)",
            ),
        ),
        Theme::new(
            "monochrome",
            "Monochrome",
            palette(
                [
                    "0 0% 9%",
                    "0 0% 32%",
                    "0 0% 45%",
                    "0 0% 100%",
                    "0 0% 4%",
                    "0 0% 98%",
                    "0 0% 4%",
                    "0 0% 96%",
                    "0 0% 45%",
                    "0 0% 90%",
                ],
                "linear-gradient(135deg, hsl(0 0% 9%) 0%, hsl(0 0% 45%) 100%)",
            ),
        ),
    ]
});

/// Values in `ColorRole::ALL` order.
fn palette(values: [&str; 10], gradient: &str) -> ThemeColors {
    let [
        primary,
        secondary,
        accent,
        background,
        foreground,
        card,
        card_foreground,
        muted,
        muted_foreground,
        border,
    ] = values.map(str::to_string);

    ThemeColors {
        primary,
        secondary,
        accent,
        background,
        foreground,
        card,
        card_foreground,
        muted,
        muted_foreground,
        border,
        gradient: gradient.to_string(),
    }
}

/// Every built-in theme, in display order.
pub fn themes() -> &'static [Theme] {
    &CATALOG
}

/// The theme used when nothing is persisted.
pub fn default_theme() -> &'static Theme {
    &CATALOG[0]
}

pub fn find_by_id(id: &str) -> Option<&'static Theme> {
    CATALOG.iter().find(|theme| theme.id == id)
}

/// Case-insensitive name lookup.
pub fn find_by_name(name: &str) -> Option<&'static Theme> {
    CATALOG
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Resolve a user-supplied theme reference, id first, then name.
pub fn lookup(query: &str) -> Option<&'static Theme> {
    find_by_id(query).or_else(|| find_by_name(query))
}
