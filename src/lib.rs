//! Typed option bag for passing named, heterogeneous parameters from a host
//! (a modal dialog, say) to content that only knows its parameters by name.
//!
//! ```
//! use modal_options::ModalOptions;
//!
//! let mut opts = ModalOptions::new();
//! opts.set("user_id", 42_i64);
//! opts.set("title", String::from("Edit user"));
//!
//! assert_eq!(opts.get::<i64>("user_id"), 42);
//! assert_eq!(opts.get::<i64>("title"), 0);
//!
//! let mut title = String::new();
//! assert!(opts.try_get("title", &mut title));
//! assert_eq!(opts.width, "50%");
//! ```

pub mod errors;
pub mod options;
pub mod parser;
pub mod value;

pub use errors::{OptionsError, Result};
pub use options::{Iter, ModalOptions, DEFAULT_WIDTH};
pub use parser::{parse_assignment, parse_probe, Assignment, Probe};
pub use value::{probe, Literal, ProbeReport, ValueKind};

/// Build a bag from `key=value` assignments, later keys overwriting earlier ones.
pub fn from_assignments<I, S>(width: Option<&str>, assignments: I) -> Result<ModalOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut opts = ModalOptions::new();
    if let Some(w) = width {
        opts.set_width(w);
    }
    for text in assignments {
        let Assignment { key, value } = parse_assignment(text.as_ref())?;
        value.store(&mut opts, key);
    }
    Ok(opts)
}
