//! Recursive-descent ABNF parser built from `nom` combinators, in the same compositional style as
//! the engine's other text-format parsers: small named parsers for each grammar production,
//! composed with `alt`/`tuple`/`delimited`/`many0` rather than a hand-rolled state machine.
use super::tree::*;
use nom::branch::alt;
use nom::bytes::complete::{is_a, tag, tag_no_case, take_while, take_while1, take_while_m_n};
use nom::character::complete::{char, digit1, hex_digit1, multispace0, multispace1, oct_digit1};
use nom::combinator::{map, map_res, opt, recognize, value, verify};
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

use crate::error::ParseError;

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_alnum_dash(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn rulename(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(take_while_m_n(1, 1, is_alpha), take_while(is_alnum_dash))),
        |s: &str| s.to_string(),
    )(input)
}

/// Blank lines and `;`-comment-only lines, plus ordinary inter-token whitespace — RFC 5234's
/// `c-wsp`/`c-nl` folding collapsed into one "skip insignificant layout" parser.
fn wsp(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), is_a(" \t")),
            value((), pair(char('\r'), char('\n'))),
            value((), char('\n')),
            value((), pair(char(';'), take_while(|c| c != '\r' && c != '\n'))),
        ))),
    )(input)
}

fn lexeme<'a, O>(
    mut inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    move |input: &'a str| {
        let (input, _) = wsp(input)?;
        let (input, out) = inner(input)?;
        let (input, _) = wsp(input)?;
        Ok((input, out))
    }
}

fn defined_as(input: &str) -> IResult<&str, DefinedAs> {
    alt((
        value(DefinedAs::IncrementalAlternative, tag("=/")),
        value(DefinedAs::Define, char('=')),
    ))(input)
}

fn repeat(input: &str) -> IResult<&str, Repeat> {
    alt((
        // n*m, n*, *m, *
        map(
            tuple((opt(digit1), char('*'), opt(digit1))),
            |(min, _, max): (Option<&str>, char, Option<&str>)| Repeat {
                min: min.map(|s| s.parse().unwrap()).unwrap_or(0),
                max: max.map(|s| s.parse().unwrap()),
            },
        ),
        // n (exactly n)
        map(digit1, |s: &str| {
            let n = s.parse().unwrap();
            Repeat { min: n, max: Some(n) }
        }),
    ))(input)
}

fn char_val(input: &str) -> IResult<&str, CharVal> {
    let quoted = |input| -> IResult<&str, String> {
        delimited(
            char('"'),
            map(take_while(|c| c != '"'), |s: &str| s.to_string()),
            char('"'),
        )(input)
    };
    alt((
        map(preceded(tag_no_case("%s"), quoted), |text| CharVal {
            text,
            case_sensitive: true,
        }),
        map(preceded(tag_no_case("%i"), quoted), |text| CharVal {
            text,
            case_sensitive: false,
        }),
        map(quoted, |text| CharVal {
            text,
            case_sensitive: false,
        }),
    ))(input)
}

fn radix_digits(radix: char) -> impl FnMut(&str) -> IResult<&str, u32> {
    move |input: &str| match radix {
        'b' => map_res(is_a("01"), |s: &str| u32::from_str_radix(s, 2))(input),
        'd' => map_res(digit1, |s: &str| s.parse())(input),
        'x' => map_res(hex_digit1, |s: &str| u32::from_str_radix(s, 16))(input),
        _ => unreachable!(),
    }
}

fn num_val(input: &str) -> IResult<&str, NumVal> {
    let (input, _) = char('%')(input)?;
    let (input, radix) = alt((char('b'), char('d'), char('x')))(input)?;
    alt((
        map(
            pair(radix_digits(radix), preceded(char('-'), radix_digits(radix))),
            |(lo, hi)| NumVal::Range(lo, hi),
        ),
        map(separated_list1(char('.'), radix_digits(radix)), NumVal::Sequence),
    ))(input)
}

fn prose_val(input: &str) -> IResult<&str, String> {
    delimited(char('<'), map(take_while(|c| c != '>'), |s: &str| s.to_string()), char('>'))(input)
}

fn import_filename(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '>')(input)
}

/// `<import FILENAME RULENAME>` import extension (catalog form, §6.1), distinguished from a bare
/// prose-val by the leading `import` keyword.
fn import_val(input: &str) -> IResult<&str, Element> {
    let (input, _) = char('<')(input)?;
    let (input, _) = lexeme(tag_no_case("import"))(input)?;
    let (input, filename) = import_filename(input)?;
    let (input, _) = multispace1(input)?;
    let (input, rulename) = rulename(input)?;
    let (input, _) = wsp(input)?;
    let (input, _) = char('>')(input)?;
    Ok((input, Element::Import { rulename, filename: filename.to_string() }))
}

fn element(input: &str) -> IResult<&str, Element> {
    alt((
        map(group, |a| Element::Group(Box::new(a))),
        map(option_group, |a| Element::Option(Box::new(a))),
        map(num_val, Element::NumVal),
        map(char_val, Element::CharVal),
        import_val,
        map(prose_val, Element::ProseVal),
        map(verify(rulename, |n: &str| !n.is_empty()), Element::Rulename),
    ))(input)
}

fn group(input: &str) -> IResult<&str, Alternation> {
    delimited(lexeme(char('(')), alternation, lexeme(char(')')))(input)
}

fn option_group(input: &str) -> IResult<&str, Alternation> {
    delimited(lexeme(char('[')), alternation, lexeme(char(']')))(input)
}

fn repetition(input: &str) -> IResult<&str, Repetition> {
    map(pair(opt(repeat), lexeme(element)), |(repeat, element)| Repetition {
        repeat: repeat.unwrap_or(Repeat::EXACTLY_ONE),
        element,
    })(input)
}

fn concatenation(input: &str) -> IResult<&str, Concatenation> {
    map(many1(repetition), |repetitions| Concatenation { repetitions })(input)
}

fn alternation(input: &str) -> IResult<&str, Alternation> {
    map(
        separated_list1(lexeme(char('/')), concatenation),
        |concatenations| Alternation { concatenations },
    )(input)
}

fn rule(input: &str) -> IResult<&str, Rule> {
    map(
        tuple((lexeme(rulename), lexeme(defined_as), alternation)),
        |(name, defined_as, alternation)| Rule {
            name,
            defined_as,
            alternation,
        },
    )(input)
}

fn rulelist(input: &str) -> IResult<&str, Rulelist> {
    map(
        terminated(many0(lexeme(rule)), multispace0),
        |rules| Rulelist { rules },
    )(input)
}

/// Parses a complete ABNF document. The whole input must be consumed; any unparsed remainder is
/// reported as a [`ParseError`] at the byte offset where parsing stalled.
pub fn parse_rulelist(input: &str) -> Result<Rulelist, ParseError> {
    match rulelist(input) {
        Ok((rest, parsed)) if rest.trim().is_empty() => Ok(parsed),
        Ok((rest, _)) => Err(ParseError {
            index: input.len() - rest.len(),
        }),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(ParseError {
            index: input.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError { index: input.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_rule() {
        let doc = "digit = %x30-39\r\n";
        let parsed = parse_rulelist(doc).unwrap();
        assert_eq!(parsed.rules.len(), 1);
        assert_eq!(parsed.rules[0].name, "digit");
    }

    #[test]
    fn parses_alternation_and_group() {
        let doc = "greeting = (\"hi\" / \"hello\") 1*SP name\r\nname = 1*ALPHA\r\n";
        let parsed = parse_rulelist(doc).unwrap();
        assert_eq!(parsed.rules.len(), 2);
        assert_eq!(parsed.rules[0].alternation.concatenations.len(), 1);
    }

    #[test]
    fn parses_incremental_alternative() {
        let doc = "a = \"x\"\r\na =/ \"y\"\r\n";
        let parsed = parse_rulelist(doc).unwrap();
        assert_eq!(parsed.rules[1].defined_as, DefinedAs::IncrementalAlternative);
    }

    #[test]
    fn parses_import_extension() {
        let doc = "word = <import en.abnf wordlist>\r\n";
        let parsed = parse_rulelist(doc).unwrap();
        match &parsed.rules[0].alternation.concatenations[0].repetitions[0].element {
            Element::Import { rulename, filename } => {
                assert_eq!(rulename, "wordlist");
                assert_eq!(filename, "en.abnf");
            }
            other => panic!("expected import, got {other:?}"),
        }
    }

    #[test]
    fn import_keyword_is_case_insensitive() {
        let doc = "word = <IMPORT en.abnf wordlist>\r\n";
        assert!(parse_rulelist(doc).is_ok());
    }

    #[test]
    fn reports_byte_offset_on_garbage() {
        let err = parse_rulelist("a = \"x\" $$$").unwrap_err();
        assert!(err.index > 0);
    }
}
