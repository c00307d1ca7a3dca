//! Input boundary: anything text-like becomes a record collection.
//!
//! Every extractor accepts either a single text value (treated as a
//! one-element collection) or a sequence of texts. The same conversion is
//! reused for word-target lists in [`crate::extractors::words`].

/// Conversion into an owned record collection.
///
/// A single `&str`/`String` broadcasts to one record; slices, arrays, and
/// vectors convert element-wise. Order is preserved — record order is part
/// of the output contract.
pub trait IntoTexts {
    /// Consume `self` and produce the owned records, in order.
    fn into_texts(self) -> Vec<String>;
}

impl IntoTexts for &str {
    fn into_texts(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoTexts for String {
    fn into_texts(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoTexts for &String {
    fn into_texts(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: AsRef<str>> IntoTexts for &[S] {
    fn into_texts(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoTexts for [S; N] {
    fn into_texts(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoTexts for &[S; N] {
    fn into_texts(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoTexts for Vec<S> {
    fn into_texts(self) -> Vec<String> {
        self.into_iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoTexts for &Vec<S> {
    fn into_texts(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}
