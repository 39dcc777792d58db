//! The demo screen contract.
//!
//! Every demo is a self-contained screen: it builds its own widgets from a
//! [`ScreenConfig`](crate::config::ScreenConfig), runs its interaction when
//! activated, and reports what it showed.

/// One standalone demonstration screen.
///
/// Screens are independent of each other. `activate` drives the demo's
/// interaction (headlessly in this gallery); `status` summarizes the
/// resulting widget state for display.
pub trait Screen {
    /// The title shown in the gallery's screen list.
    fn title(&self) -> &str;

    /// Bring the screen up and run its interaction.
    fn activate(&mut self);

    /// Tear the screen down. Screens must be reactivatable afterwards.
    fn deactivate(&mut self);

    /// A one-line summary of the screen's current state.
    fn status(&self) -> String;
}

impl std::fmt::Debug for dyn Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("title", &self.title())
            .finish()
    }
}
