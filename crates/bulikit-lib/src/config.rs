//! Tunables for the tokenizer cache and the parser's resource limits.

use std::time::Duration;

/// How the tokenizer synthesizes indentation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentMode {
    /// No INDENT/DEDENT tokens.
    #[default]
    Off,
    /// Indent width is taken from the first indented line.
    Auto,
    /// Fixed indent width, in characters.
    Width(usize),
}

impl IndentMode {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, IndentMode::Off | IndentMode::Width(0))
    }
}

/// Retention policy for tokenized texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    /// Most recently used entries that are never evicted for being idle.
    pub min_entries: usize,
    /// Hard cap; least recently used entries beyond it are dropped.
    pub max_entries: usize,
    /// Entries outside the `min_entries` window idle longer than this are dropped.
    pub idle_timeout: Duration,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            min_entries: 5,
            max_entries: 250,
            idle_timeout: Duration::from_secs(120),
        }
    }
}

impl CacheLimits {
    /// No caching at all.
    pub fn disabled() -> Self {
        Self {
            min_entries: 0,
            max_entries: 0,
            idle_timeout: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerConfig {
    pub indent: IndentMode,
    /// Collapse whitespace runs inside token text (comments excepted).
    pub simplify_spaces: bool,
    pub cache: CacheLimits,
}

impl TokenizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: IndentMode) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_simplify_spaces(mut self, value: bool) -> Self {
        self.simplify_spaces = value;
        self
    }

    pub fn with_cache(mut self, cache: CacheLimits) -> Self {
        self.cache = cache;
        self
    }
}

/// Resource limits applied while matching a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of rule references. `None` disables the check.
    pub recursion_limit: Option<u32>,
    /// Maximum number of grammar node checks per parse. `None` is unlimited.
    pub exec_fuel: Option<u32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            recursion_limit: Some(256),
            exec_fuel: None,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }
}
