#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
//! Old school single letter options, looked up where you need them
//!
//! There is no parse step and no option schema. Hand [Usage] the help text
//! and the argument vector, then ask for the options you care about. Every
//! query walks the arguments again, so asking twice gives the same answer.
//!
//! ```
//! use oldopt::Usage;
//!
//! let args = ["grep", "-i", "-n", "-3", r"-e\-foo", "a.txt", "b.txt"];
//! let cl = Usage::new("Find lines.\n  -i  ignore case\n  -n  context", &args);
//!
//! assert!(cl.opt_b('i'));
//! assert!(!cl.opt_b('v'));
//! assert_eq!(cl.opt_n('n', 0), -3);
//! assert_eq!(cl.opt_s('e', "."), "-foo");
//! assert_eq!(cl.opt_l(), ["a.txt", "b.txt"]);
//! ```
//!
//! # Syntax
//!
//! - `-a value` and `-avalue` are the same thing, as are `-n -3` and `-n-3`.
//! - Grouping is not supported: `-abc` is option `a` with the value `bc`.
//! - A string value that starts with a dash must be escaped: `-s\-dashed`.
//!   An unescaped one is taken to be the next option, and the default is used.
//! - `--` ends the options. What follows is returned by [Usage::opt_l].
//! - `-h` prints the help text and exits. See [help::HelpHook].
//!
//! # Caveats
//!
//! Unknown options are not reported, and nothing stops two queries from
//! using the same letter. A value that cannot be decoded silently becomes
//! the default.
//!
//! With the `std` feature (on by default) structs can be derived:
//!
//! ```
//! use oldopt::{Opts, Usage};
//!
//! /// Shout things.
//! #[derive(Opts)]
//! struct Args {
//!     /// how many times
//!     #[opt('n', default = 1)]
//!     times: u8,
//!     /// what to shout
//!     #[opt(rest)]
//!     words: Vec<String>,
//! }
//!
//! let args = ["shout", "-n3", "hey", "you"];
//! let args = Args::from_usage(&Usage::new(Args::USAGE, &args));
//! assert_eq!(args.times, 3);
//! assert_eq!(args.words, ["hey", "you"]);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bitflags;
mod error;
mod field;
pub mod help;
mod opts;
mod scan;

pub use error::OptError;
pub use field::OptValue;
pub use oldopt_derive::*;
pub use opts::Opts;

use help::HelpHook;
#[cfg(feature = "std")]
use help::ProcessExit;

/// Printed between the program name and the usage text
pub const DEFAULT_LEAD: &str = "purpose, usage & options:\n";

/// Usage text plus the arguments it describes
///
/// `args` is the whole argument vector, program name included.
#[derive(Clone, Debug)]
pub struct Usage<'a, S, H> {
    text: &'a str,
    lead: &'a str,
    args: &'a [S],
    hook: H,
}

#[cfg(feature = "std")]
impl<'a, S: AsRef<str>> Usage<'a, S, ProcessExit> {
    /// Construct with a hook that prints help to stdout and exits
    pub fn new(text: &'a str, args: &'a [S]) -> Self {
        Self::with_hook(text, args, ProcessExit)
    }
}

impl<'a, S: AsRef<str>, H: HelpHook> Usage<'a, S, H> {
    /// Construct with a custom help hook
    pub fn with_hook(text: &'a str, args: &'a [S], hook: H) -> Self {
        Self {
            text,
            lead: DEFAULT_LEAD,
            args,
            hook,
        }
    }

    /// Replace the phrase printed before the usage text
    pub fn with_lead(mut self, lead: &'a str) -> Self {
        self.lead = lead;
        self
    }

    /// The usage text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The phrase printed before the usage text
    pub fn lead(&self) -> &'a str {
        self.lead
    }

    /// The argument vector, program name included
    pub fn args(&self) -> &'a [S] {
        self.args
    }

    /// Raw text following `flag`, or `None` if it was not given
    ///
    /// The text is either attached to the flag or the next argument as is,
    /// whatever it looks like.
    pub fn raw(&self, flag: char) -> Option<&'a str> {
        scan::find(self.args, flag, || self.help())
    }

    /// Whether `flag` was given
    pub fn opt_b(&self, flag: char) -> bool {
        self.raw(flag).is_some()
    }

    /// String following `flag`
    ///
    /// Gives `def` if the flag is absent, has no value, or is followed by
    /// what looks like another option. Escape a leading dash as `\-`.
    ///
    /// Asking for `h` before anything else lets a program look at `-h topic`
    /// without going down the print-and-exit path.
    pub fn opt_s<'b>(&self, flag: char, def: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.raw(flag).and_then(field::unescape).unwrap_or(def)
    }

    /// Base-10 integer following `flag`, or `def`
    pub fn opt_n(&self, flag: char, def: i64) -> i64 {
        self.opt(flag, def)
    }

    /// Float following `flag`, or `def`
    ///
    /// The value has to fit an `f32` and comes back rounded to `f32`
    /// precision. Use [Usage::opt] with `f64` for the full range.
    pub fn opt_f(&self, flag: char, def: f64) -> f64 {
        self.raw(flag)
            .and_then(|raw| field::parse_narrow_float(raw).ok())
            .map_or(def, f64::from)
    }

    /// Bit names following `flag`, applied to `current`
    ///
    /// See [bitflags::apply]. Gives `current` unchanged if the flag is absent.
    pub fn opt_csf(&self, flag: char, current: u32, table: &str) -> u32 {
        self.raw(flag)
            .map_or(current, |raw| bitflags::apply(raw, current, table))
    }

    /// Arguments after the last option, or after `--`
    ///
    /// Note that a value following the last option counts as a positional
    /// argument here: for `-n 3 a b` this gives `3 a b`. Attach such values
    /// (`-n3`) or end the options with `--`.
    pub fn opt_l(&self) -> &'a [S] {
        scan::tail(self.args)
    }

    /// Value of any [OptValue] type following `flag`, or `def`
    pub fn opt<T: OptValue>(&self, flag: char, def: T) -> T {
        self.raw(flag)
            .and_then(|raw| T::decode(raw).ok())
            .unwrap_or(def)
    }

    fn help(&self) {
        let program = self.args.first().map_or("", |program| program.as_ref());
        tracing::debug!(program, "help requested");
        self.hook.print(program, self.lead, self.text);
        self.hook.exit(0);
    }
}
