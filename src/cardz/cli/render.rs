//! # Rendering
//!
//! Turns the structured results of the API into styled terminal text.
//!
//! Layout calculations (width, truncation, padding, description wrapping) stay
//! in Rust because they need Unicode-aware processing. Templates handle the
//! presentation: which style a piece of text gets and which sections appear.
//! Every public function takes [`RenderOptions`], so tests render plain text
//! and the session honors `--no-color`.

use super::styles::{names, CARDZ_THEME};
use super::templates;
use cardz::api::{CardDetail, CmdMessage, MessageLevel};
use cardz::commands::CatalogView;
use cardz::error::Result;
use cardz::form::CardForm;
use cardz::model::FORM_CATEGORIES;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const FAVORITE_MARKER: &str = "♥";
pub const APP_TITLE: &str = "Ma Bibliothèque";
pub const EMPTY_MESSAGE: &str = "No cards found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub use_color: bool,
    pub preview_lines: usize,
}

#[derive(Serialize)]
struct ChipData {
    text: String,
    style: &'static str,
    gap: &'static str,
}

/// One list entry, with layout already computed.
#[derive(Serialize)]
struct CardLineData {
    index: String,
    marker: &'static str,
    title: String,
    padding: String,
    category: String,
    indent: String,
    preview: Vec<String>,
}

#[derive(Serialize)]
struct ScreenData {
    app_title: &'static str,
    search: String,
    chips: Vec<ChipData>,
    stats: String,
    cards: Vec<CardLineData>,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct DetailData {
    selector: String,
    title: String,
    marker: &'static str,
    category: String,
    image: String,
    id: String,
    description: String,
}

#[derive(Serialize)]
struct DetailsData {
    details: Vec<DetailData>,
}

#[derive(Serialize)]
struct FormOptionData {
    number: usize,
    label: &'static str,
    style: &'static str,
}

#[derive(Serialize)]
struct FormData {
    categories: Vec<FormOptionData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn environment(use_color: bool) -> std::result::Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        CARDZ_THEME.apply(&name, &value.to_string(), use_color)
    });
    for &(name, source) in templates::ALL {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn render_named<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String> {
    let env = environment(use_color)?;
    let template = env.get_template(name)?;
    Ok(template.render(data)?)
}

/// Renders the main screen: header, category chips, stats and the card list.
pub fn render_screen(view: &CatalogView, options: RenderOptions) -> String {
    let chips = view
        .chips
        .iter()
        .enumerate()
        .map(|(number, chip)| {
            let (text, style) = if chip.active {
                (format!("[{} {}]", number, chip.filter), names::CHIP_ACTIVE)
            } else {
                (format!(" {} {} ", number, chip.filter), names::CHIP)
            };
            ChipData {
                text,
                style,
                gap: " ",
            }
        })
        .collect();

    let cards = view
        .cards
        .iter()
        .map(|dc| {
            let index = format!("{:>3}.", dc.index.0);
            let marker = if dc.is_favorite { FAVORITE_MARKER } else { " " };
            let category = format!("[{}]", dc.card.category);

            // index, marker and two separating spaces, at least two spaces
            // before the category
            let fixed = index.width() + marker.width() + 2 + 2 + category.width();
            let available = LINE_WIDTH.saturating_sub(fixed);
            let title = truncate_to_width(&dc.card.title, available);
            let padding = " ".repeat(2 + available.saturating_sub(title.width()));

            let indent_width = index.width() + marker.width() + 2;
            CardLineData {
                index,
                marker,
                title,
                padding,
                category,
                indent: " ".repeat(indent_width),
                preview: preview_lines(
                    &dc.card.description,
                    LINE_WIDTH.saturating_sub(indent_width),
                    options.preview_lines,
                ),
            }
        })
        .collect::<Vec<_>>();

    let data = ScreenData {
        app_title: APP_TITLE,
        search: view.search.clone(),
        chips,
        stats: format!(
            "{} · {}",
            plural(view.filtered_count, "card"),
            plural(view.favorite_count, "favorite")
        ),
        empty: cards.is_empty(),
        cards,
        empty_message: EMPTY_MESSAGE,
    };

    render_named("screen", &data, options.use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders full cards, one block each.
pub fn render_details(details: &[CardDetail], options: RenderOptions) -> String {
    let data = DetailsData {
        details: details
            .iter()
            .map(|d| DetailData {
                selector: d.selector.to_string(),
                title: d.card.title.clone(),
                marker: if d.is_favorite { FAVORITE_MARKER } else { "" },
                category: d.card.category.clone(),
                image: d.card.image.clone(),
                id: d.card.id.clone(),
                description: d.card.description.clone(),
            })
            .collect(),
    };

    render_named("details", &data, options.use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the form banner and the numbered category choices, marking the
/// one currently selected.
pub fn render_form(form: &CardForm, options: RenderOptions) -> String {
    let selected = form.category_position();
    let data = FormData {
        categories: FORM_CATEGORIES
            .iter()
            .enumerate()
            .map(|(position, label)| FormOptionData {
                number: position + 1,
                label,
                style: if position == selected {
                    names::CHIP_ACTIVE
                } else {
                    names::CHIP
                },
            })
            .collect(),
    };

    render_named("form", &data, options.use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, options: RenderOptions) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_named("text_list", &data, options.use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages with the style of their level.
pub fn render_messages(messages: &[CmdMessage], options: RenderOptions) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_named("messages", &data, options.use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Wraps `text` on word boundaries into at most `max_lines` lines of `width`
/// columns. Cut text ends with an ellipsis.
fn preview_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if max_lines == 0 || width == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let overflow = lines.len() > max_lines;
    lines.truncate(max_lines);
    let mut lines: Vec<String> = lines
        .into_iter()
        .map(|line| {
            if line.width() > width {
                truncate_to_width(&line, width)
            } else {
                line
            }
        })
        .collect();

    if overflow {
        if let Some(last) = lines.last_mut() {
            if last.width() < width {
                last.push('…');
            } else {
                *last = truncate_to_width(last, width);
            }
        }
    }
    lines
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
