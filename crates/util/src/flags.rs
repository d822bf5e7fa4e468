//! Flag-string parsing and serialization.
//!
//! World settings expose bitflag fields as comma-separated name lists, e.g.
//! `"caves, trees, nodungeons"`. Parsing reports both the resulting bits and
//! which bits were mentioned at all, so callers can overlay a partial flag
//! string onto a default value.

/// One entry in a flag vocabulary: a flag name and the bit it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDesc {
    /// Flag name as it appears in flag strings (matched case-insensitively)
    pub name: &'static str,
    /// The bit this flag controls
    pub flag: u32,
}

/// Parses a comma-separated flag list against `table`.
///
/// Returns `(bits, mentioned)`: `bits` has a flag's bit set when the flag was
/// named without the `no` prefix, `mentioned` when it was named at all.
/// Tokens are trimmed and matched case-insensitively; unrecognized tokens are
/// silently ignored. The `no` prefix is stripped before matching, so a flag
/// whose own name starts with `no` can only be matched in negated form.
///
/// # Examples
///
/// ```
/// use voxl_util::{read_flag_string, FlagDesc};
///
/// const FLAGS: &[FlagDesc] = &[
///     FlagDesc { name: "foo", flag: 0x01 },
///     FlagDesc { name: "bar", flag: 0x02 },
/// ];
///
/// assert_eq!(read_flag_string("foo, nobar", FLAGS), (0x01, 0x03));
/// ```
pub fn read_flag_string(input: &str, table: &[FlagDesc]) -> (u32, u32) {
    let mut bits = 0;
    let mut mentioned = 0;

    for token in input.split(',') {
        let token = token.trim();

        let (name, set) = match token.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("no") => (&token[2..], false),
            _ => (token, true),
        };
        if name.is_empty() {
            continue;
        }

        for desc in table {
            if desc.name.eq_ignore_ascii_case(name) {
                mentioned |= desc.flag;
                if set {
                    bits |= desc.flag;
                }
                break;
            }
        }
    }

    (bits, mentioned)
}

/// Inverse of [`read_flag_string`].
///
/// Emits, in table order, the name of every flag whose bit is in `mask`,
/// prefixed with `no` when the bit is absent from `flags`, joined by `", "`.
///
/// # Examples
///
/// ```
/// use voxl_util::{write_flag_string, FlagDesc};
///
/// const FLAGS: &[FlagDesc] = &[
///     FlagDesc { name: "foo", flag: 0x01 },
///     FlagDesc { name: "bar", flag: 0x02 },
/// ];
///
/// assert_eq!(write_flag_string(0x01, FLAGS, 0x03), "foo, nobar");
/// ```
pub fn write_flag_string(flags: u32, table: &[FlagDesc], mask: u32) -> String {
    let names: Vec<String> = table
        .iter()
        .filter(|desc| mask & desc.flag != 0)
        .map(|desc| {
            if flags & desc.flag != 0 {
                desc.name.to_string()
            } else {
                format!("no{}", desc.name)
            }
        })
        .collect();

    names.join(", ")
}
