//! Core conversion logic for snexport.
//! Turns a Standard Notes JSON backup into a directory of markdown
//! files with YAML front matter.

pub mod export;
pub mod logging;
pub mod model;

pub use export::{run, ExportError, ExportResult};
pub use logging::{default_log_level, init_logging};
pub use model::note::Note;
pub use model::raw::{Export, RawItem};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
