//! The ABNF core rules (RFC 5234 Appendix B.1), available in every grammar without definition.
//! Each is exposed both as a recognised name (for dependency analysis) and as a pre-built,
//! already-minimal [`Dfa`].
use crate::dfa::Dfa;

const NAMES: &[&str] = &[
    "ALPHA", "BIT", "CHAR", "CR", "CRLF", "CTL", "DIGIT", "DQUOTE", "HEXDIG", "HTAB", "LF", "LWSP",
    "OCTET", "SP", "VCHAR", "WSP",
];

pub fn is_builtin(name: &str) -> bool {
    NAMES.iter().any(|n| n.eq_ignore_ascii_case(name))
}

/// Looks up and compiles the named core rule, case-insensitively. Returns `None` for anything not
/// in [`NAMES`].
pub fn lookup(name: &str) -> Option<Dfa> {
    let upper = name.to_ascii_uppercase();
    Some(match upper.as_str() {
        "ALPHA" => Dfa::range(0x41, 0x5A).union(&Dfa::range(0x61, 0x7A)),
        "BIT" => Dfa::range(b'0' as u32, b'1' as u32),
        "CHAR" => Dfa::range(0x01, 0x7F),
        "CR" => Dfa::symbol(0x0D),
        "CRLF" => Dfa::from_sequence(&[0x0D, 0x0A]),
        "CTL" => Dfa::range(0x00, 0x1F).union(&Dfa::symbol(0x7F)),
        "DIGIT" => Dfa::range(b'0' as u32, b'9' as u32),
        "DQUOTE" => Dfa::symbol(0x22),
        "HEXDIG" => Dfa::range(b'0' as u32, b'9' as u32)
            .union(&Dfa::range(b'A' as u32, b'F' as u32))
            .union(&Dfa::range(b'a' as u32, b'f' as u32)),
        "HTAB" => Dfa::symbol(0x09),
        "LF" => Dfa::symbol(0x0A),
        // LWSP = *(WSP / CRLF WSP)
        "LWSP" => {
            let wsp = lookup("WSP").expect("WSP is a builtin");
            let crlf_wsp = Dfa::from_sequence(&[0x0D, 0x0A]).concatenate(&wsp);
            wsp.union(&crlf_wsp).star()
        }
        "OCTET" => Dfa::range(0x00, 0xFF),
        "SP" => Dfa::symbol(0x20),
        "VCHAR" => Dfa::range(0x21, 0x7E),
        "WSP" => Dfa::symbol(0x20).union(&Dfa::symbol(0x09)),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_ascii_digits_only() {
        let digit = lookup("DIGIT").unwrap();
        assert!(digit.contains(&[b'5' as u32]));
        assert!(!digit.contains(&[b'a' as u32]));
    }

    #[test]
    fn crlf_requires_both_bytes_in_order() {
        let crlf = lookup("CRLF").unwrap();
        assert!(crlf.contains(&[0x0D, 0x0A]));
        assert!(!crlf.contains(&[0x0A, 0x0D]));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("digit").is_some());
        assert!(lookup("Digit").is_some());
    }
}
