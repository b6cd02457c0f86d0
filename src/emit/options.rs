//! Emitter configuration.

use crate::emit::error::ConfigError;

/// Output format of an emitted table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Rust source: a `match`-based function returning `&'static [bool]`
    #[default]
    Rust,
    /// Pretty-printed JSON artifact
    Json,
    /// bincode artifact
    Binary,
}

/// Validated emitter settings. Build with [`EmitOptions::builder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    format: Format,
    function_name: String,
    state_type: String,
    const_fn: bool,
}

impl EmitOptions {
    /// Default name of the generated lookup function.
    pub const DEFAULT_FUNCTION_NAME: &'static str = "tap_transition";

    /// Default state type referenced by the generated function.
    pub const DEFAULT_STATE_TYPE: &'static str = "TapState";

    /// Start a builder with default settings.
    pub fn builder() -> EmitOptionsBuilder {
        EmitOptionsBuilder::new()
    }

    /// Output format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Name of the generated function (Rust format only).
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Type path used for both arguments and match arms (Rust format only).
    pub fn state_type(&self) -> &str {
        &self.state_type
    }

    /// Whether the generated function is a `const fn` (Rust format only).
    pub fn const_fn(&self) -> bool {
        self.const_fn
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            format: Format::default(),
            function_name: Self::DEFAULT_FUNCTION_NAME.to_string(),
            state_type: Self::DEFAULT_STATE_TYPE.to_string(),
            const_fn: true,
        }
    }
}

/// Builder for [`EmitOptions`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use tapwalk::emit::{EmitOptions, Format};
///
/// let options = EmitOptions::builder()
///     .format(Format::Rust)
///     .function_name("jtag_path")
///     .state_type("crate::JtagState")
///     .const_fn(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(options.function_name(), "jtag_path");
/// assert!(!options.const_fn());
///
/// assert!(EmitOptions::builder().function_name("2fast").build().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct EmitOptionsBuilder {
    format: Format,
    function_name: Option<String>,
    state_type: Option<String>,
    const_fn: bool,
}

impl EmitOptionsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            format: Format::default(),
            function_name: None,
            state_type: None,
            const_fn: true,
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the name of the generated function.
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }

    /// Set the state type path, e.g. `TapState` or `crate::jtag::State`.
    pub fn state_type(mut self, path: impl Into<String>) -> Self {
        self.state_type = Some(path.into());
        self
    }

    /// Emit a `const fn` (the default) or a plain `fn`.
    pub fn const_fn(mut self, const_fn: bool) -> Self {
        self.const_fn = const_fn;
        self
    }

    /// Build the options.
    /// Returns an error if a name is empty or not a valid Rust path.
    pub fn build(self) -> Result<EmitOptions, ConfigError> {
        let function_name = self
            .function_name
            .unwrap_or_else(|| EmitOptions::DEFAULT_FUNCTION_NAME.to_string());
        let state_type = self
            .state_type
            .unwrap_or_else(|| EmitOptions::DEFAULT_STATE_TYPE.to_string());

        check_path("function name", &function_name, false)?;
        check_path("state type", &state_type, true)?;

        Ok(EmitOptions {
            format: self.format,
            function_name,
            state_type,
            const_fn: self.const_fn,
        })
    }
}

impl Default for EmitOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_path(field: &'static str, value: &str, allow_segments: bool) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyName { field });
    }

    let invalid = || ConfigError::InvalidIdentifier {
        field,
        value: value.to_string(),
    };

    if !allow_segments && value.contains("::") {
        return Err(invalid());
    }
    if value.split("::").all(is_identifier) {
        Ok(())
    } else {
        Err(invalid())
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && segment != "_"
        }
        _ => false,
    }
}
