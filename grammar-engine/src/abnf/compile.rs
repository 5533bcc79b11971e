//! Structural-induction compiler from an ABNF [`Rulelist`](super::tree::Rulelist) to
//! [`Dfa`](crate::dfa::Dfa)s, dereferencing rule references, builtins, and catalog imports along
//! the way.
use super::builtins;
use super::resolver::{load_checked, CatalogLoader};
use super::tree::*;
use crate::dfa::Dfa;
use crate::error::RulelistError;
use std::collections::HashMap;

/// One successfully compiled rulelist: every rule's name mapped to its minimal, normalized DFA.
#[derive(Debug)]
pub struct CompiledGrammar {
    pub rules: HashMap<String, Dfa>,
}

impl CompiledGrammar {
    pub fn get(&self, rulename: &str) -> Option<&Dfa> {
        self.rules.get(rulename)
    }
}

enum Mark {
    Visiting,
    Done(Dfa),
}

struct Compiler<'a> {
    rulelist: &'a Rulelist,
    loader: Option<&'a dyn CatalogLoader>,
    import_path: Vec<String>,
    cache: HashMap<String, Mark>,
}

/// Compiles every rule in `rulelist` to a DFA. `loader`, if given, resolves `<import file rule>`
/// imports; if a grammar contains imports and no loader is supplied, resolving one fails with
/// [`RulelistError::ImportError`].
pub fn compile_rulelist(
    rulelist: &Rulelist,
    loader: Option<&dyn CatalogLoader>,
) -> Result<CompiledGrammar, RulelistError> {
    let mut compiler = Compiler {
        rulelist,
        loader,
        import_path: vec![],
        cache: HashMap::new(),
    };
    let mut rules = HashMap::new();
    for rule in &rulelist.rules {
        let dfa = compiler.compile_rule(&rule.name)?;
        rules.insert(rule.name.clone(), dfa);
    }
    Ok(CompiledGrammar { rules })
}

/// Merges every `=`/`=/` definition of `name` (in source order) into one flat alternation, since
/// `=/` is defined to be associative regardless of how many increments a rule has accumulated.
fn folded_alternation(rulelist: &Rulelist, name: &str) -> Alternation {
    let mut concatenations = vec![];
    for rule in rulelist.rules.iter().filter(|r| r.name == name) {
        concatenations.extend(rule.alternation.concatenations.iter().cloned());
    }
    Alternation { concatenations }
}

impl<'a> Compiler<'a> {
    fn compile_rule(&mut self, name: &str) -> Result<Dfa, RulelistError> {
        match self.cache.get(name) {
            Some(Mark::Done(dfa)) => return Ok(dfa.clone()),
            Some(Mark::Visiting) => {
                return Err(RulelistError::NotRegular {
                    cycle: vec![name.to_string()],
                })
            }
            None => {}
        }
        if !self.rulelist.rules.iter().any(|r| r.name == name) {
            if let Some(dfa) = builtins::lookup(name) {
                self.cache.insert(name.to_string(), Mark::Done(dfa.clone()));
                return Ok(dfa);
            }
            return Err(RulelistError::UnknownRule {
                name: name.to_string(),
            });
        }
        self.cache.insert(name.to_string(), Mark::Visiting);
        let alternation = folded_alternation(self.rulelist, name);
        let dfa = self.compile_alternation(&alternation).map_err(|e| match e {
            RulelistError::NotRegular { mut cycle } => {
                cycle.insert(0, name.to_string());
                RulelistError::NotRegular { cycle }
            }
            other => other,
        })?;
        self.cache.insert(name.to_string(), Mark::Done(dfa.clone()));
        Ok(dfa)
    }

    fn compile_alternation(&mut self, alt: &Alternation) -> Result<Dfa, RulelistError> {
        let mut parts = alt
            .concatenations
            .iter()
            .map(|c| self.compile_concatenation(c));
        let first = parts.next().expect("an alternation always has >=1 concatenation")?;
        parts.try_fold(first, |acc, next| Ok(acc.union(&next?)))
    }

    fn compile_concatenation(&mut self, conc: &Concatenation) -> Result<Dfa, RulelistError> {
        let mut dfa = Dfa::epsilon();
        for rep in &conc.repetitions {
            let element = self.compile_repetition(rep)?;
            dfa = dfa.concatenate(&element);
        }
        Ok(dfa)
    }

    fn compile_repetition(&mut self, rep: &Repetition) -> Result<Dfa, RulelistError> {
        let element = self.compile_element(&rep.element)?;
        Ok(element.repeat(rep.repeat.min, rep.repeat.max))
    }

    fn compile_element(&mut self, element: &Element) -> Result<Dfa, RulelistError> {
        match element {
            Element::Rulename(name) => self.compile_rule(name),
            Element::Group(alt) | Element::Option(alt) => {
                let dfa = self.compile_alternation(alt)?;
                Ok(if matches!(element, Element::Option(_)) {
                    dfa.union(&Dfa::epsilon())
                } else {
                    dfa
                })
            }
            Element::CharVal(cv) => Ok(compile_char_val(cv)),
            Element::NumVal(nv) => Ok(compile_num_val(nv)),
            Element::ProseVal(_) => Err(RulelistError::NotMechanizable {
                rulename: "<prose-val>".to_string(),
            }),
            Element::Import { rulename, filename } => self.compile_import(rulename, filename),
        }
    }

    fn compile_import(&mut self, rulename: &str, filename: &str) -> Result<Dfa, RulelistError> {
        let loader = self.loader.ok_or_else(|| RulelistError::ImportError {
            filename: filename.to_string(),
            cause: "no catalog loader configured".to_string(),
        })?;
        let imported = load_checked(loader, filename, &self.import_path)?;
        self.import_path.push(filename.to_string());
        let mut sub = Compiler {
            rulelist: &imported,
            loader: Some(loader),
            import_path: self.import_path.clone(),
            cache: HashMap::new(),
        };
        let result = sub.compile_rule(rulename).map_err(|e| match e {
            RulelistError::UnknownRule { name } => RulelistError::UnknownImport {
                filename: filename.to_string(),
                rulename: name,
            },
            other => other,
        });
        self.import_path.pop();
        result
    }
}

fn compile_char_val(cv: &CharVal) -> Dfa {
    let seq: Vec<Dfa> = cv
        .text
        .chars()
        .map(|c| {
            if cv.case_sensitive || !c.is_ascii_alphabetic() {
                Dfa::symbol(c as u32)
            } else {
                Dfa::symbol(c.to_ascii_lowercase() as u32).union(&Dfa::symbol(c.to_ascii_uppercase() as u32))
            }
        })
        .collect();
    seq.into_iter().fold(Dfa::epsilon(), |acc, d| acc.concatenate(&d))
}

fn compile_num_val(nv: &NumVal) -> Dfa {
    match nv {
        NumVal::Sequence(seq) => Dfa::from_sequence(seq),
        NumVal::Range(lo, hi) => Dfa::range(*lo, *hi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::parser::parse_rulelist;
    use crate::abnf::resolver::MemoryCatalog;

    fn ascii(s: &str) -> Vec<u32> {
        s.bytes().map(|b| b as u32).collect()
    }

    #[test]
    fn compiles_literal_with_default_case_insensitivity() {
        let rulelist = parse_rulelist("greeting = \"hi\"\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, None).unwrap();
        let dfa = compiled.get("greeting").unwrap();
        assert!(dfa.contains(&ascii("hi")));
        assert!(dfa.contains(&ascii("HI")));
        assert!(dfa.contains(&ascii("Hi")));
        assert!(!dfa.contains(&ascii("ho")));
    }

    #[test]
    fn case_sensitive_literal_rejects_case_variants() {
        let rulelist = parse_rulelist("tag = %s\"GET\"\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, None).unwrap();
        let dfa = compiled.get("tag").unwrap();
        assert!(dfa.contains(&ascii("GET")));
        assert!(!dfa.contains(&ascii("get")));
    }

    #[test]
    fn builtins_are_available_without_definition() {
        let rulelist = parse_rulelist("word = 1*ALPHA\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, None).unwrap();
        let dfa = compiled.get("word").unwrap();
        assert!(dfa.contains(&ascii("hello")));
        assert!(!dfa.contains(&ascii("")));
    }

    #[test]
    fn recursive_rule_is_not_regular() {
        let rulelist = parse_rulelist("loop = \"a\" loop\r\n").unwrap();
        let err = compile_rulelist(&rulelist, None).unwrap_err();
        assert!(matches!(err, RulelistError::NotRegular { .. }));
    }

    #[test]
    fn unknown_rule_reference_is_reported() {
        let rulelist = parse_rulelist("a = missing\r\n").unwrap();
        let err = compile_rulelist(&rulelist, None).unwrap_err();
        assert!(matches!(err, RulelistError::UnknownRule { name } if name == "missing"));
    }

    #[test]
    fn incremental_alternative_extends_earlier_definition() {
        let rulelist = parse_rulelist("a = \"x\"\r\na =/ \"y\"\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, None).unwrap();
        let dfa = compiled.get("a").unwrap();
        assert!(dfa.contains(&ascii("x")));
        assert!(dfa.contains(&ascii("y")));
    }

    #[test]
    fn import_resolves_through_catalog() {
        let catalog = MemoryCatalog::new([("en.abnf".to_string(), "word = 1*ALPHA\r\n".to_string())]);
        let rulelist = parse_rulelist("greeting = <import en.abnf word>\r\n").unwrap();
        let compiled = compile_rulelist(&rulelist, Some(&catalog)).unwrap();
        let dfa = compiled.get("greeting").unwrap();
        assert!(dfa.contains(&ascii("hello")));
    }

    #[test]
    fn missing_loader_for_import_is_an_error() {
        let rulelist = parse_rulelist("greeting = <import en.abnf word>\r\n").unwrap();
        let err = compile_rulelist(&rulelist, None).unwrap_err();
        assert!(matches!(err, RulelistError::ImportError { .. }));
    }

    #[test]
    fn prose_val_is_not_mechanizable() {
        let rulelist = parse_rulelist("a = <a sequence of bytes>\r\n").unwrap();
        let err = compile_rulelist(&rulelist, None).unwrap_err();
        assert!(matches!(err, RulelistError::NotMechanizable { .. }));
    }
}
