use profilecard_core::ProfileId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // Boot
    MountCurrentView,

    // Navigation
    OpenDetails(ProfileId),
    OpenLink(String),
    NavigateBack,

    // User-visible errors
    DismissError,
}
