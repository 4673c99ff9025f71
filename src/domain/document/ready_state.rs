/// Loading lifecycle of a document, mirroring `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// Still parsing; elements may not exist yet.
    #[default]
    Loading,
    /// Parsed; sub-resources may still be loading.
    Interactive,
    /// Parsed and every sub-resource loaded.
    Complete,
}

impl ReadyState {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::ReadyState;

    const _: () = assert!(ReadyState::Loading.is_loading());

    #[test]
    fn only_loading_is_loading() {
        assert!(ReadyState::Loading.is_loading());
        assert!(!ReadyState::Interactive.is_loading());
        assert!(!ReadyState::Complete.is_loading());
        assert_eq!(ReadyState::default(), ReadyState::Loading);
    }
}
