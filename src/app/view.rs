//! Named views of the application shell.

/// The named view currently routed to by the presentation layer.
///
/// The core only tracks which view is active; what each view renders is the
/// presentation layer's business. Navigation is unrestricted between views
/// while a user is logged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Landing view with the hero section and the featured feed.
    #[default]
    Discover,

    /// Main feed with the post form and filter bar.
    Feed,

    /// Standalone post creation view.
    Create,

    /// The logged-in user's profile with their own posts.
    Profile,
}
