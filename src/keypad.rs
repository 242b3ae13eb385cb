use log::debug;

use crate::{engine::core::ExpressionEngine, util::num::parse_entry};

/// A calculator front panel wired to an [`ExpressionEngine`].
///
/// Keyed-in digits collect in a pending entry that the engine never sees
/// until `enter`, an operator, a recall or a store ends typing. The keypad
/// also remembers the last value shown on the display.
///
/// ## Usage
/// ```
/// use rpnote::keypad::Keypad;
///
/// let mut keypad = Keypad::default();
/// keypad.key_in("1");
/// keypad.key_in("2");
/// keypad.enter();
/// keypad.key_in("4");
/// assert_eq!(keypad.operate("÷"), Some(3.0));
/// assert_eq!(keypad.description(), "12÷4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    engine:  ExpressionEngine,
    entry:   Option<String>,
    display: Option<f64>,
}

impl Keypad {
    #[must_use]
    pub const fn new(engine: ExpressionEngine) -> Self {
        Self { engine,
               entry: None,
               display: None }
    }

    /// Appends digits or a decimal point to the pending entry, starting a new
    /// entry if the user was not typing.
    pub fn key_in(&mut self, text: &str) {
        match &mut self.entry {
            Some(entry) => entry.push_str(text),
            None => self.entry = Some(text.to_string()),
        }
    }

    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.entry.is_some()
    }

    /// Ends typing and pushes the pending entry onto the engine.
    ///
    /// An entry that does not parse is discarded and the display is cleared;
    /// the engine is left untouched. Pressing enter while not typing pushes
    /// the displayed value again.
    pub fn enter(&mut self) -> Option<f64> {
        let operand = match self.entry.take() {
            Some(entry) => {
                let parsed = parse_entry(&entry);
                if parsed.is_none() {
                    debug!("discarding malformed entry '{entry}'");
                }
                parsed
            },
            None => self.display,
        };

        self.display = operand.and_then(|value| self.engine.push_operand(value));
        self.display
    }

    /// Applies the operator `symbol`, entering any pending entry first.
    pub fn operate(&mut self, symbol: &str) -> Option<f64> {
        self.finish_typing();
        self.display = self.engine.apply_operator(symbol);
        self.display
    }

    /// Pushes a reference to the variable `name`, entering any pending entry
    /// first.
    pub fn recall(&mut self, name: &str) -> Option<f64> {
        self.finish_typing();
        self.display = self.engine.push_variable_ref(name);
        self.display
    }

    /// Binds `name` to the value on the display and pushes a reference to it.
    ///
    /// A pending entry is used as the value without being pushed itself.
    /// Nothing happens if there is no value to store.
    pub fn store(&mut self, name: &str) -> Option<f64> {
        let value = match self.entry.take() {
            Some(entry) => parse_entry(&entry),
            None => self.display,
        };

        let Some(value) = value else {
            debug!("nothing to store into '{name}'");
            return None;
        };

        self.display = self.engine.set_variable(name, value);
        self.display
    }

    /// Clears the program, the pending entry and the display.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.entry = None;
        self.display = None;
    }

    #[must_use]
    pub const fn display(&self) -> Option<f64> {
        self.display
    }

    /// Text shown on the display: the pending entry while typing, otherwise
    /// the last result, or an empty string if there is none.
    #[must_use]
    pub fn display_text(&self) -> String {
        match (&self.entry, self.display) {
            (Some(entry), _) => entry.clone(),
            (None, Some(value)) => value.to_string(),
            (None, None) => String::new(),
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.engine.render_description()
    }

    #[must_use]
    pub const fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    fn finish_typing(&mut self) {
        if self.is_typing() {
            self.enter();
        }
    }
}
