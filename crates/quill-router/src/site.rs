//! Site settings read by routing.

/// Default output directory.
const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default index filename.
const DEFAULT_INDEX_FILENAME: &str = "index.html";

/// Site settings shared by routers and the path resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Output directory, prepended verbatim to routed paths for disk paths.
    pub output_dir: String,
    /// Filenames stripped from the end of web paths, checked in order.
    pub index_filenames: Vec<String>,
}

impl SiteConfig {
    /// Create settings with the given output directory and default index filenames.
    #[must_use]
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            index_filenames: vec![DEFAULT_INDEX_FILENAME.to_owned()],
        }
    }

    /// Replace the index filenames.
    #[must_use]
    pub fn with_index_filenames<I, S>(mut self, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_filenames = filenames.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
