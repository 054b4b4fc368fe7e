//! Application Configuration

/// Yard application configuration
#[derive(Debug, Clone)]
pub struct YardConfig {
    /// Page size when the client does not ask for one
    pub default_page_size: u32,
    /// Largest page size a client may ask for
    pub max_page_size: u32,
}

impl Default for YardConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}
