use crate::{help::HelpHook, Usage};

/// A struct filled in from single letter options
///
/// Usually derived. See the crate documentation for an example.
pub trait Opts: Sized {
    /// Help text shown for `-h`
    const USAGE: &'static str;

    /// Query every field from `cl`
    fn from_usage<S: AsRef<str>, H: HelpHook>(cl: &Usage<'_, S, H>) -> Self;

    /// Convenience function to build from [std::env::args_os]
    ///
    /// Arguments that are not valid UTF-8 are converted lossily. `-h`
    /// prints [Opts::USAGE] and exits the process.
    #[cfg(feature = "std")]
    fn from_env() -> Self {
        let args: Vec<String> = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Self::from_usage(&Usage::new(Self::USAGE, &args))
    }
}
