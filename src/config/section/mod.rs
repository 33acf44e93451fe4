//! Configuration section definitions.
//!
//! Each module pairs the options as written (`*Options`, every key optional)
//! with the resolved form (`*Config`):
//!
//! | Module     | Keys                                  | Purpose                         |
//! |------------|---------------------------------------|---------------------------------|
//! | `future`   | `[future]`                            | Next-major compatibility flags  |
//! | `i18n`     | `[i18n]`                              | Default locale and locale list  |
//! | `markdown` | `on_broken_links`, `[markdown.hooks]` | Broken-link policies            |
//! | `preset`   | `[preset]`                            | Docs plugin, versions, blog     |
//! | `theme`    | `[theme]`                             | Navbar, footer, colors, prism   |

mod future;
mod i18n;
mod markdown;
mod preset;
pub mod theme;

pub use future::{FutureConfig, FutureOptions};
pub use i18n::{I18nConfig, I18nOptions};
pub use markdown::{
    DEFAULT_ON_BROKEN_LINKS, MarkdownConfig, MarkdownOptions, ReportingSeverity,
};
pub use preset::{PresetConfig, PresetOptions};
pub use theme::{ThemeConfig, ThemeOptions};
