//! Rule and stylesheet model.

mod media;
mod rule;
mod stylesheet;

pub use media::MediaList;
pub use rule::{CssRule, Declaration, ImportRule, MediaRule, StyleRule};
pub use stylesheet::{StyleSheet, parse_style_declarations};
