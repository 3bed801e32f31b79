use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text styled with a name the theme does not define, so typos
/// in templates show up on screen instead of silently rendering plain.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const LABEL: &str = "label";
    pub const HINT: &str = "hint";
    pub const CHIP: &str = "chip";
    pub const CHIP_ACTIVE: &str = "chip_active";
    pub const STATS: &str = "stats";
    pub const INDEX: &str = "index";
    pub const FAVORITE: &str = "favorite";
    pub const TITLE: &str = "title";
    pub const CATEGORY: &str = "category";
    pub const DESCRIPTION: &str = "description";
    pub const EMPTY: &str = "empty";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Named styles applied by the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text` with the named style, or returns it plain when `use_color`
    /// is off. Unknown names get [`MISSING_STYLE_INDICATOR`] either way.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static CARDZ_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::LABEL, Style::new().dim())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::CHIP, Style::new().color256(245))
        .add(names::CHIP_ACTIVE, Style::new().white().on_color256(62).bold())
        .add(names::STATS, Style::new().color256(245))
        .add(names::INDEX, Style::new().yellow())
        .add(names::FAVORITE, Style::new().red())
        .add(names::TITLE, Style::new().bold())
        .add(names::CATEGORY, Style::new().color256(62))
        .add(names::DESCRIPTION, Style::new().color256(244))
        .add(names::EMPTY, Style::new().color256(248).italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
