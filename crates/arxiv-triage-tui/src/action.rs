/// User or runtime actions handled by [`App::update`](crate::app::App::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ForceQuit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    /// "Show More" / "Hide" on the selected summary.
    ToggleSummary,
    AddToNotion,
    Ignore,
    CopyUrl,
    ToggleActivityPanel,
    ToggleHelp,
    NavigateBack,
    Tick,
    Resize(u16, u16),
    None,
}
