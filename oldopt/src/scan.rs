//! Argument scanning shared by every query
//!
//! Nothing here keeps state between calls: each query walks the whole
//! argument sequence again.

/// Locate `flag` in `args`, skipping the program name at index 0.
///
/// Returns the raw value that belongs to the flag: whatever is attached
/// to the flag token (`-abc` gives `bc`), otherwise the following token,
/// or `""` at the end of the sequence. `None` if the flag is absent or
/// only shows up after a `--` terminator.
///
/// A `-h` token met while looking for any flag other than `h` calls
/// `on_help`. If `on_help` returns, scanning goes on.
pub(crate) fn find<'a, S: AsRef<str>>(
    args: &'a [S],
    flag: char,
    mut on_help: impl FnMut(),
) -> Option<&'a str> {
    for (index, arg) in args.iter().enumerate().skip(1) {
        let arg: &'a str = arg.as_ref();
        let mut chars = arg.chars();
        if chars.next() != Some('-') {
            continue;
        }
        let Some(second) = chars.next() else {
            continue;
        };

        if second == flag {
            tracing::trace!(%flag, index, "option found");
            let attached = chars.as_str();
            if !attached.is_empty() {
                return Some(attached);
            }
            return Some(args.get(index + 1).map_or("", |next| next.as_ref()));
        }

        match second {
            'h' => on_help(),
            '-' => break,
            _ => {}
        }
    }
    None
}

/// Arguments after the last flag-looking token, or after the first `--`
/// that is not the final token.
pub(crate) fn tail<S: AsRef<str>>(args: &[S]) -> &[S] {
    let rest = args.get(1..).unwrap_or(&[]);
    let mut after_last = 0;

    for (index, arg) in rest.iter().enumerate() {
        let mut chars = arg.as_ref().chars();
        if chars.next() != Some('-') {
            continue;
        }
        match chars.next() {
            None => continue,
            Some('-') if index + 1 < rest.len() => return &rest[index + 1..],
            Some(_) => after_last = index + 1,
        }
    }

    &rest[after_last..]
}
