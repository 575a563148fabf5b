use crate::value::Value;

/// Ordered SQL fragments joined by a delimiter, with their placeholder values.
///
/// Adding an empty fragment is a no-op: neither the text nor its values are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    delimiter: String,
    parts: Vec<String>,
    values: Vec<Value>,
}

impl Block {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            parts: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append a fragment and the values for its placeholders.
    pub fn add(&mut self, text: impl Into<String>, values: Vec<Value>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.parts.push(text);
        self.values.extend(values);
    }

    /// Append a fragment without placeholders.
    pub fn push(&mut self, text: impl Into<String>) {
        self.add(text, Vec::new());
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The fragments joined by the delimiter.
    pub fn content(&self) -> String {
        self.parts.join(&self.delimiter)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        (self.content(), self.values.clone())
    }
}
