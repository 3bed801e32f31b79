//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files, so they can be edited and diffed apart from the code. They are
//! included here as string constants and registered by name, which lets
//! templates include each other (`screen` pulls in `card_list`).
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks` on: a line
//! holding only a block tag produces no output. Layout math (widths,
//! truncation, padding) is done in Rust before rendering; templates choose
//! styles through the `style` filter and decide what gets printed.

pub const SCREEN_TEMPLATE: &str = include_str!("templates/screen.tmp");
pub const CARD_LIST_TEMPLATE: &str = include_str!("templates/card_list.tmp");
pub const DETAILS_TEMPLATE: &str = include_str!("templates/details.tmp");
pub const FORM_TEMPLATE: &str = include_str!("templates/form.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");

/// Every template with the name it is registered under.
pub const ALL: &[(&str, &str)] = &[
    ("screen", SCREEN_TEMPLATE),
    ("card_list", CARD_LIST_TEMPLATE),
    ("details", DETAILS_TEMPLATE),
    ("form", FORM_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("text_list", TEXT_LIST_TEMPLATE),
];
