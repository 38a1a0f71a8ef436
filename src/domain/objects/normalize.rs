use derive_new::new;

/// Options controlling how a raw line is folded into its comparison key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct NormalizeOptions {
    pub ignore_case: bool,
    pub ignore_space: bool,
}

/// Derive the comparison key for a raw line.
///
/// The key is used only for equality tests between lines; reported output
/// always shows the raw text. Case folding and whitespace collapsing act on
/// disjoint character classes, so their order of application does not matter.
pub fn normalize(raw: &str, options: NormalizeOptions) -> String {
    let mut key = if options.ignore_case {
        raw.to_lowercase()
    } else {
        raw.to_owned()
    };

    if options.ignore_space {
        key = key.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    key
}
