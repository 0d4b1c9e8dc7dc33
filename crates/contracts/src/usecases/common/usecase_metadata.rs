/// Identification metadata shared by every UseCase
pub trait UseCaseMetadata {
    /// Index, e.g. "u508"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "load_integration_data"
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u508_load_integration_data"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
