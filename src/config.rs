use crate::{
    engine::core::{ExpressionEngine, OperandStyle},
    error::ParseError,
    util::num::parse_entry,
};

/// Settings for running a script from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Print the infix description along with the result.
    pub describe:      bool,
    /// How operands are written in the description.
    pub operand_style: OperandStyle,
    /// Variables bound before the script runs.
    pub variables:     Vec<(String, f64)>,
}

impl Config {
    /// Builds an engine with the configured operand style and variables.
    ///
    /// # Example
    /// ```
    /// use rpnote::config::Config;
    ///
    /// let config = Config { variables: vec![("M".into(), 7.0)],
    ///                       ..Config::default() };
    /// let engine = config.engine();
    /// assert_eq!(engine.get_variable("M"), Some(7.0));
    /// assert!(engine.is_empty());
    /// ```
    #[must_use]
    pub fn engine(&self) -> ExpressionEngine {
        self.variables
            .iter()
            .fold(ExpressionEngine::new().with_operand_style(self.operand_style),
                  |engine, (name, value)| engine.with_variable(name, *value))
    }
}

/// Parses a variable preset of the form `NAME=VALUE`.
///
/// # Errors
/// Returns [`ParseError::InvalidAssignment`] if there is no `=`, the name is
/// empty, or the value is not a finite number.
///
/// # Example
/// ```
/// use rpnote::config::parse_variable_setting;
///
/// assert_eq!(parse_variable_setting("M=7").unwrap(), ("M".to_string(), 7.0));
/// assert!(parse_variable_setting("M").is_err());
/// assert!(parse_variable_setting("=7").is_err());
/// ```
pub fn parse_variable_setting(setting: &str) -> Result<(String, f64), ParseError> {
    let invalid = || ParseError::InvalidAssignment { setting: setting.to_string() };

    let (name, value) = setting.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let value = parse_entry(value).ok_or_else(invalid)?;

    Ok((name.to_string(), value))
}
