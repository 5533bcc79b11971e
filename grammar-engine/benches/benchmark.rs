use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grammar_engine::abnf::{compile_rulelist, parse_rulelist};
use grammar_engine::dfa::Dfa;
use grammar_engine::regex::{emit, synthesize, Dialect};
use lazy_static::lazy_static;
use regex::Regex as LibRegex;

const ADDR_SPEC_ABNF: &str = "\
local-part = 1*ALPHA\r\n\
domain = 1*ALPHA *(\".\" 1*ALPHA)\r\n\
addr-spec = local-part \"@\" domain\r\n\
";

lazy_static! {
    static ref ADDR_SPEC: Dfa = {
        let rulelist = parse_rulelist(ADDR_SPEC_ABNF).unwrap();
        compile_rulelist(&rulelist, None)
            .unwrap()
            .get("addr-spec")
            .unwrap()
            .clone()
    };
    static ref DIGITS: Dfa = Dfa::range(b'0' as u32, b'9' as u32).repeat(1, None);
}

fn ascii(s: &str) -> Vec<u32> {
    s.bytes().map(|b| b as u32).collect()
}

pub fn powerset(c: &mut Criterion) {
    let a = &*ADDR_SPEC;
    let b = &*DIGITS;
    c.bench_function("union", |bch| bch.iter(|| a.union(black_box(b))));
    c.bench_function("intersection", |bch| bch.iter(|| a.intersection(black_box(b))));
    c.bench_function("difference", |bch| bch.iter(|| a.difference(black_box(b))));
    c.bench_function("symmetric difference", |bch| {
        bch.iter(|| a.symmetric_difference(black_box(b)))
    });
}

pub fn minimize(c: &mut Criterion) {
    let unminimized = ADDR_SPEC.union(&ADDR_SPEC).concatenate(&ADDR_SPEC);
    c.bench_function("minimize", |b| b.iter(|| unminimized.minimize()));
}

pub fn equivalence_check(c: &mut Criterion) {
    let a = ADDR_SPEC.minimize();
    let b = ADDR_SPEC.union(&ADDR_SPEC).minimize();
    c.bench_function("equivalence check", |bch| bch.iter(|| a.equals(black_box(&b))));
}

pub fn abnf_compile(c: &mut Criterion) {
    c.bench_function("abnf compile addr-spec", |b| {
        b.iter(|| {
            let rulelist = parse_rulelist(black_box(ADDR_SPEC_ABNF)).unwrap();
            compile_rulelist(&rulelist, None).unwrap()
        })
    });
}

pub fn regex_synthesis_and_check(c: &mut Criterion) {
    let dfa = ADDR_SPEC.minimize();
    let tree = synthesize(&dfa);
    let pattern = emit(&tree, Dialect::Pcre);
    let anchored = format!("^(?:{pattern})$");
    let lib_regex = LibRegex::new(&anchored).unwrap();
    let sample = ascii("jane.doe@example");

    c.bench_function("grammar-engine dfa check", |b| {
        b.iter(|| dfa.contains(black_box(&sample)))
    });
    c.bench_function("library regex check", |b| {
        b.iter(|| lib_regex.is_match("jane.doe@example"))
    });
}

criterion_group!(
    benches,
    powerset,
    minimize,
    equivalence_check,
    abnf_compile,
    regex_synthesis_and_check
);
criterion_main!(benches);
