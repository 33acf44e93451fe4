//! Configuration utility types.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `error`    | `ConfigError` and `ValidationError`          |
//! | `field`    | Dotted field path display                    |
//! | `handle`   | Write-once global configuration              |
//! | `presence` | Explicitly-set option paths                  |
//! | `rule`     | Validation rules                             |

mod error;
mod field;
pub mod handle;
mod presence;
mod rule;

pub use error::{ConfigError, ValidationError, render_error};
pub use field::FieldPath;
pub use handle::init_config;
pub use presence::ConfigPresence;
pub use rule::Rule;
