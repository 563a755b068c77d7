/// UI state for the display theme.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
