/// How primary-key values are produced for new rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// The database assigns the value (auto-increment column).
    Auto,

    /// The application assigns the value before insert.
    Assigned,
}

impl GenerationStrategy {
    /// Returns `true` if the strategy is [`Auto`].
    ///
    /// [`Auto`]: GenerationStrategy::Auto
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}
