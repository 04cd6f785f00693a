//! Parser configuration

/// Deepest nesting serde_json's parser accepts.
///
/// serde_json refuses the 128th nested `[` or `{`, so 127 is the largest
/// depth any configuration can allow.
pub const MAX_DEPTH_LIMIT: usize = 127;

/// Limits applied while parsing.
///
/// # Example
///
/// ```
/// use minjson_wire::ParseOptions;
///
/// let options = ParseOptions::new().max_depth(16).max_input_len(64 * 1024);
/// assert_eq!(options.depth_limit(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
    max_input_len: Option<usize>,
}

impl ParseOptions {
    /// Default limits: depth 127, unlimited input length.
    pub fn new() -> Self {
        Self {
            max_depth: MAX_DEPTH_LIMIT,
            max_input_len: None,
        }
    }

    /// Maximum nesting depth (`[]` and `{}` count as depth 1).
    ///
    /// Input whose depth equals the limit is accepted. Values above
    /// [`MAX_DEPTH_LIMIT`] behave like that limit.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Maximum input length in bytes.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = Some(len);
        self
    }

    /// The effective depth limit
    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }

    /// The input length limit, if any
    pub fn input_len_limit(&self) -> Option<usize> {
        self.max_input_len
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
