use crate::Nutrient;

/// Charge annotations that can trail an ion symbol.
const CHARGE: &[char] = &['+', '-', '−', '⁺', '⁻', '¹', '²', '³', '⁴'];

/// Reduces a free-form element or ion symbol to its canonical bucket key.
///
/// - surrounding whitespace is trimmed
/// - a parenthesized qualifier is dropped: `"N (ureic)"` → `"N"`, while a
///   fully parenthesized symbol is unwrapped: `"(NH4)"` → `"NH4"`
/// - charge annotations are dropped: `"NO3-"`, `"NO3−"`, `"SO4^2-"`, `"SO4²⁻"`, `"Ca2+"`
/// - nitrogen-form spellings map to the split nitrogen buckets:
///   `"NO3-N"`, `"N-NO3"`, `"N_NO3"` → `"NO3_N"` (and likewise for `NH4`)
///
/// Anything else is returned as written.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut symbol = raw.trim();

    match symbol.find('(') {
        Some(0) => symbol = unwrap_parens(symbol),
        Some(open) => symbol = symbol[..open].trim_end(),
        None => {}
    }
    symbol = strip_charge(symbol);

    match symbol {
        "NO3-N" | "N-NO3" | "NO3_N" | "N_NO3" => Nutrient::NitrateNitrogen.symbol().to_owned(),
        "NH4-N" | "N-NH4" | "NH4_N" | "N_NH4" => Nutrient::AmmoniumNitrogen.symbol().to_owned(),
        other => other.to_owned(),
    }
}

/// Unwraps a leading group: `"(NH4)"` and `"(NH4)+"` both become `"NH4"`.
fn unwrap_parens(symbol: &str) -> &str {
    let inner = &symbol[1..];
    match inner.find(')') {
        Some(close) => inner[..close].trim(),
        None => inner.trim(),
    }
}

fn strip_charge(symbol: &str) -> &str {
    let symbol = match symbol.find('^') {
        Some(caret) => &symbol[..caret],
        None => symbol,
    };

    // A detached charge such as "SO4 2-".
    let symbol = match symbol.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if is_charge(tail) => head,
        _ => symbol,
    };

    let stripped = symbol.trim_end_matches(CHARGE).trim_end();

    // "Ca2+" carries its charge magnitude as a plain digit. Only drop it when
    // what remains is a bare element, so "NO3-" keeps its 3.
    if stripped.len() < symbol.len() {
        let head = stripped.trim_end_matches(|c: char| c.is_ascii_digit());
        if head.len() < stripped.len() && Nutrient::from_symbol(head).is_some() {
            return head;
        }
    }
    stripped
}

fn is_charge(text: &str) -> bool {
    !text.is_empty()
        && text.chars().any(|c| CHARGE.contains(&c))
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || CHARGE.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_symbols_pass_through() {
        assert_eq!(normalize("Ca"), "Ca");
        assert_eq!(normalize("  K "), "K");
        assert_eq!(normalize("NO3"), "NO3");
        assert_eq!(normalize("Xy"), "Xy");
    }

    #[test]
    fn qualifiers_are_dropped() {
        assert_eq!(normalize("N (ureic)"), "N");
        assert_eq!(normalize("N (total)"), "N");
        assert_eq!(normalize("Fe (EDTA)"), "Fe");
        assert_eq!(normalize("(NH4)"), "NH4");
        assert_eq!(normalize(" (NH4)+"), "NH4");
    }

    #[test]
    fn charges_are_dropped() {
        assert_eq!(normalize("NO3-"), "NO3");
        assert_eq!(normalize("NH4+"), "NH4");
        assert_eq!(normalize("SO4^2-"), "SO4");
        assert_eq!(normalize("SO4²⁻"), "SO4");
        assert_eq!(normalize("SO4 2-"), "SO4");
        assert_eq!(normalize("H2PO4⁻"), "H2PO4");
        assert_eq!(normalize("Ca2+"), "Ca");
        assert_eq!(normalize("Fe²⁺"), "Fe");
        assert_eq!(normalize("Mg^2+"), "Mg");
        assert_eq!(normalize("NO3−"), "NO3");
        assert_eq!(normalize("Cl−"), "Cl");
        assert_eq!(normalize("SO4 2−"), "SO4");
    }

    #[test]
    fn nitrogen_forms_map_to_split_buckets() {
        assert_eq!(normalize("NO3-N"), "NO3_N");
        assert_eq!(normalize("N-NO3"), "NO3_N");
        assert_eq!(normalize("NH4_N"), "NH4_N");
        assert_eq!(normalize("N-NH4"), "NH4_N");
    }
}
