use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::RwLock;

/// Global key-value space of atomic color variables read by the site's views.
pub trait StyleSurface: Send + Sync {
    fn set_variable(&self, name: &str, value: &str);

    fn variable(&self, name: &str) -> Option<String>;

    /// Snapshot of every variable, ordered by name.
    fn variables(&self) -> BTreeMap<String, String>;
}

/// In-process [`StyleSurface`] that can render itself as a `:root` CSS block.
#[derive(Debug, Default)]
pub struct StyleVariables {
    vars: RwLock<BTreeMap<String, String>>,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.variables().is_empty()
    }

    /// Render as custom properties, e.g. `--primary: 199 89% 48%;`.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.variables() {
            let _ = writeln!(css, "  --{name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSurface for StyleVariables {
    fn set_variable(&self, name: &str, value: &str) {
        let mut vars = match self.vars.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("Style variables lock poisoned, recovering");
                poisoned.into_inner()
            }
        };
        vars.insert(name.to_string(), value.to_string());
    }

    fn variable(&self, name: &str) -> Option<String> {
        match self.vars.read() {
            Ok(vars) => vars.get(name).cloned(),
            Err(poisoned) => poisoned.into_inner().get(name).cloned(),
        }
    }

    fn variables(&self) -> BTreeMap<String, String> {
        match self.vars.read() {
            Ok(vars) => vars.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
