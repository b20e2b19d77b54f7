#![allow(dead_code)]
use oldopt::{help::HelpHook, Opts, OptValue, Usage};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

#[derive(Default)]
struct Recorder {
    printed: RefCell<String>,
    exits: Cell<u32>,
}

impl HelpHook for Recorder {
    fn print(&self, program: &str, lead: &str, usage: &str) {
        oldopt::help::write_help(&mut *self.printed.borrow_mut(), program, lead, usage).unwrap();
    }

    fn exit(&self, _status: i32) {
        self.exits.set(self.exits.get() + 1);
    }
}

fn parse<T: Opts>(args: &[&str]) -> T {
    T::from_usage(&Usage::with_hook(T::USAGE, args, Recorder::default()))
}

#[test]
fn basic() {
    /// Automatic puppy kicker
    #[derive(Opts)]
    struct Args {
        /// Kick adult dogs, too
        #[opt('a')]
        adults: bool,
        /// How many puppies to kick
        #[opt('n', default = 1)]
        puppies: i8,
        /// Name of the puppy
        #[opt('p', default = "rex")]
        puppy: String,
        /// Kicks per second
        #[opt('r', default = 0.5)]
        rate: f64,
    }

    let args: Args = parse(&["pupkick", "-a", "-n-3", "-p", "eddie"]);
    assert!(args.adults);
    assert_eq!(args.puppies, -3);
    assert_eq!(args.puppy, "eddie");
    assert_eq!(args.rate, 0.5);

    let args: Args = parse(&["pupkick"]);
    assert!(!args.adults);
    assert_eq!(args.puppies, 1);
    assert_eq!(args.puppy, "rex");
}

#[test]
fn escaped_string_field() {
    #[derive(Opts)]
    struct Args {
        #[opt('p')]
        puppy: String,
    }

    let args: Args = parse(&["pupkick", r"-p\-eddie"]);
    assert_eq!(args.puppy, "-eddie");

    let args: Args = parse(&["pupkick", "-p", "-eddie"]);
    assert_eq!(args.puppy, "");
}

#[test]
fn bits_and_rest() {
    #[derive(Opts)]
    struct Args {
        #[opt('F', flags = "color,bell,pager", default = 0b001)]
        features: u32,
        #[opt(rest)]
        files: Vec<String>,
        #[opt(rest)]
        paths: Vec<PathBuf>,
    }

    let args: Args = parse(&["ls", "-Fno-color,pager", "--", "-a", "b"]);
    assert_eq!(args.features, 0b100);
    assert_eq!(args.files, ["-a", "b"]);
    assert_eq!(args.paths, [PathBuf::from("-a"), PathBuf::from("b")]);

    let args: Args = parse(&["ls"]);
    assert_eq!(args.features, 0b001);
    assert!(args.files.is_empty());
}

#[test]
fn path_field() {
    #[derive(Opts)]
    struct Args {
        #[opt('o', default = "out.txt")]
        output: PathBuf,
    }

    let args: Args = parse(&["prog", "-o/tmp/x"]);
    assert_eq!(args.output, PathBuf::from("/tmp/x"));
    let args: Args = parse(&["prog"]);
    assert_eq!(args.output, PathBuf::from("out.txt"));
}

#[test]
fn with_generics() {
    #[derive(Opts)]
    struct Args<T: OptValue + Default> {
        #[opt('n')]
        number: T,
    }

    let args: Args<u16> = parse(&["prog", "-n", "82"]);
    assert_eq!(args.number, 82);
    let args: Args<u16> = parse(&["prog", "-n", "-82"]);
    assert_eq!(args.number, 0);
}

#[test]
fn usage_text() {
    /// Automatic puppy kicker
    #[derive(Opts)]
    struct Args {
        /// Eat the puppy after kicking it?
        #[opt('e')]
        eat: bool,
        /// How hard to kick
        #[opt('f', default = 3)]
        kick_force: u8,
        /// Puppies to kick
        #[opt(rest)]
        puppies: Vec<String>,
    }

    assert_eq!(
        Args::USAGE,
        "Automatic puppy kicker

  -e             Eat the puppy after kicking it?
  -f kick-force  How hard to kick
  PUPPIES...     Puppies to kick"
    );
}

#[test]
fn multiline_description() {
    /// pupkick: kicks puppies
    ///
    /// Use with care.
    #[derive(Opts)]
    struct Args {}

    assert_eq!(Args::USAGE, "pupkick: kicks puppies\n\nUse with care.");
}

#[test]
fn help_goes_through_hook() {
    /// Automatic puppy kicker
    #[derive(Opts)]
    struct Args {
        /// Kick adult dogs, too
        #[opt('a')]
        adults: bool,
    }

    let hook = Recorder::default();
    let argv = ["pupkick", "-h"];
    let args = Args::from_usage(&Usage::with_hook(Args::USAGE, &argv, &hook));
    assert!(!args.adults);
    assert_eq!(hook.exits.get(), 1);
    assert_eq!(
        *hook.printed.borrow(),
        format!("pupkick purpose, usage & options:\n{}\n", Args::USAGE)
    );
}
