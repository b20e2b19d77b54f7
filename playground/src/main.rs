use oldopt::{Opts, Usage};
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

// Must match the `flags` table on `Args::features`
const FEATURES: &str = "color,bell,pager";

/// playground: echo back what oldopt makes of the command line
///
/// Try `playground -v -n-3 -s\-dashed -Fcolor,no-bell -- a b`
#[derive(Opts)]
struct Args {
    /// say more
    #[opt('v')]
    verbose: bool,
    /// a number
    #[opt('n', default = 10)]
    number: i64,
    /// a string
    #[opt('s', default = "none")]
    string: String,
    /// features to toggle
    #[opt('F', flags = "color,bell,pager", default = 0b001)]
    features: u32,
    /// anything else
    #[opt(rest)]
    rest: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv = lossy_args(std::env::args_os());
    let cl = Usage::new(Args::USAGE, &argv);

    // `-h topic` asks for help on something specific
    let topic = cl.opt_s('h', "");
    if !topic.is_empty() {
        println!("no help on {topic:?}, try plain -h");
        return;
    }

    let args = Args::from_usage(&cl);
    let scale = cl.opt_f('x', 1.0);
    tracing::info!(verbose = args.verbose, number = args.number, "parsed");

    println!("number:   {}", args.number);
    println!("string:   {}", args.string);
    println!("scale:    {scale}");
    for (bit, name) in FEATURES.split(',').enumerate() {
        println!("{name:9} {}", args.features & (1 << bit) != 0);
    }
    println!("rest:     {:?}", args.rest);
}

// Same conversion as `Opts::from_env`
fn lossy_args(args: impl Iterator<Item = OsString>) -> Vec<String> {
    args.map(|arg| arg.to_string_lossy().into_owned()).collect()
}
