//! What happens when the user passes `-h`

/// Side effects of the help path
///
/// When a query meets `-h` while looking for another flag, the scanner
/// calls [HelpHook::print] and then `exit(0)`. Hooks used in tests may
/// return from [HelpHook::exit]; the scan then carries on.
pub trait HelpHook {
    /// Show the help message: program name, lead phrase, then usage text
    fn print(&self, program: &str, lead: &str, usage: &str);
    /// End the program with `status`
    fn exit(&self, status: i32);
}

impl<H: HelpHook + ?Sized> HelpHook for &H {
    fn print(&self, program: &str, lead: &str, usage: &str) {
        (**self).print(program, lead, usage)
    }

    fn exit(&self, status: i32) {
        (**self).exit(status)
    }
}

/// Print standard help to stdout and terminate the process
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessExit;

#[cfg(feature = "std")]
impl HelpHook for ProcessExit {
    fn print(&self, program: &str, lead: &str, usage: &str) {
        print_to_stdout(program, lead, usage);
    }

    fn exit(&self, status: i32) {
        std::process::exit(status);
    }
}

/// Print standard help to stdout, then hand the exit status to a function
///
/// ```
/// use std::cell::Cell;
/// use oldopt::{help::ExitWith, Usage};
///
/// let status = Cell::new(None);
/// let args = ["prog", "-h"];
/// let cl = Usage::with_hook("Does things.", &args, ExitWith(|code| status.set(Some(code))));
///
/// assert!(!cl.opt_b('v'));
/// assert_eq!(status.get(), Some(0));
/// ```
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug)]
pub struct ExitWith<F>(pub F);

#[cfg(feature = "std")]
impl<F: Fn(i32)> HelpHook for ExitWith<F> {
    fn print(&self, program: &str, lead: &str, usage: &str) {
        print_to_stdout(program, lead, usage);
    }

    fn exit(&self, status: i32) {
        (self.0)(status)
    }
}

/// Write the help message the way the standard hooks print it
pub fn write_help(
    mut f: impl core::fmt::Write,
    program: &str,
    lead: &str,
    usage: &str,
) -> core::fmt::Result {
    writeln!(f, "{program} {lead}{usage}")
}

#[cfg(feature = "std")]
fn print_to_stdout(program: &str, lead: &str, usage: &str) {
    use std::io::Write;

    let mut message = String::new();
    if write_help(&mut message, program, lead, usage).is_ok() {
        // stdout may already be closed
        let _ = std::io::stdout().lock().write_all(message.as_bytes());
    }
}
