//! Static dependency analysis over a parsed [`Rulelist`](super::tree::Rulelist): which rules a
//! rule refers to, which references are to core ABNF builtins versus imports versus undefined
//! names, and which rules sit on a recursive cycle (and are therefore not compilable to a DFA).
//! [`analyse`] computes direct, per-rule dependencies; [`dependencies`] folds those into the full
//! transitive [`DependencyReport`] for one target rule.
use super::builtins::is_builtin;
use super::tree::*;
use std::collections::{HashMap, HashSet};

/// One rule's direct dependency set, split by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleDeps {
    /// Other locally-defined rules referenced directly.
    pub rules: HashSet<String>,
    /// Core ABNF rules (ALPHA, DIGIT, ...) referenced directly.
    pub builtins: HashSet<String>,
    /// `<import file rule>` imports referenced directly, as `(rulename, filename)` pairs.
    pub imports: HashSet<(String, String)>,
    /// Rulenames referenced that are neither locally defined, a builtin, nor an import target.
    pub undefined: HashSet<String>,
    /// Whether this rule's definition contains a `prose-val` anywhere.
    pub has_prose: bool,
}

fn walk_alternation(alt: &Alternation, deps: &mut RuleDeps, defined: &HashSet<&str>) {
    for conc in &alt.concatenations {
        for rep in &conc.repetitions {
            walk_element(&rep.element, deps, defined);
        }
    }
}

fn walk_element(element: &Element, deps: &mut RuleDeps, defined: &HashSet<&str>) {
    match element {
        Element::Rulename(name) => {
            if defined.contains(name.as_str()) {
                deps.rules.insert(name.clone());
            } else if is_builtin(name) {
                deps.builtins.insert(name.to_ascii_uppercase());
            } else {
                deps.undefined.insert(name.clone());
            }
        }
        Element::Group(alt) | Element::Option(alt) => walk_alternation(alt, deps, defined),
        Element::Import { rulename, filename } => {
            deps.imports.insert((rulename.clone(), filename.clone()));
        }
        Element::ProseVal(_) => deps.has_prose = true,
        Element::CharVal(_) | Element::NumVal(_) => {}
    }
}

/// Computes direct dependencies for every rule in `rulelist`, folding repeated `=/` definitions
/// of the same name into one combined entry.
pub fn analyse(rulelist: &Rulelist) -> HashMap<String, RuleDeps> {
    let defined: HashSet<&str> = rulelist.rules.iter().map(|r| r.name.as_str()).collect();
    let mut out: HashMap<String, RuleDeps> = HashMap::new();
    for rule in &rulelist.rules {
        let entry = out.entry(rule.name.clone()).or_default();
        walk_alternation(&rule.alternation, entry, &defined);
    }
    out
}

/// Finds every rule that participates in a dependency cycle (directly or transitively refers back
/// to itself through other local rules), via simple DFS-based cycle detection. Builtins and
/// imports never contribute to a cycle since they are leaves from this analysis's point of view.
pub fn recursive_rules(deps: &HashMap<String, RuleDeps>) -> HashMap<String, Vec<String>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Visiting,
        Done,
    }
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut cycles: HashMap<String, Vec<String>> = HashMap::new();

    fn visit<'a>(
        name: &'a str,
        deps: &'a HashMap<String, RuleDeps>,
        marks: &mut HashMap<&'a str, Mark>,
        stack: &mut Vec<&'a str>,
        cycles: &mut HashMap<String, Vec<String>>,
    ) {
        if let Some(pos) = stack.iter().position(|&n| n == name) {
            let cycle: Vec<String> = stack[pos..].iter().map(|s| s.to_string()).collect();
            for n in &cycle {
                cycles.entry(n.clone()).or_insert_with(|| {
                    let mut path = cycle.clone();
                    path.push(name.to_string());
                    path
                });
            }
            return;
        }
        if marks.get(name) == Some(&Mark::Done) {
            return;
        }
        stack.push(name);
        if let Some(d) = deps.get(name) {
            for dep in &d.rules {
                visit(dep.as_str(), deps, marks, stack, cycles);
            }
        }
        stack.pop();
        marks.insert(name, Mark::Done);
    }

    let mut stack = vec![];
    for name in deps.keys() {
        visit(name.as_str(), deps, &mut marks, &mut stack, &mut cycles);
    }
    cycles
}

/// The full dependency analysis result for one target rule: four disjoint sets covering every
/// name transitively reachable from it — `dependencies` (other local rules, topologically
/// ordered leaves first), `builtins`, `undefined`, and `recursive` (the subset of the closure
/// that sits on a dependency cycle reachable from the target, including the target itself if it
/// is cyclic). A rule is compilable to a DFA iff `undefined` and `recursive` are both empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyReport {
    pub dependencies: Vec<String>,
    pub builtins: HashSet<String>,
    pub undefined: HashSet<String>,
    pub recursive: HashSet<String>,
}

/// Computes [`DependencyReport`] for `target`, given the direct per-rule dependencies produced by
/// [`analyse`].
pub fn dependencies(deps: &HashMap<String, RuleDeps>, target: &str) -> DependencyReport {
    let cycles = recursive_rules(deps);
    let mut report = DependencyReport::default();
    let mut visited: HashSet<String> = HashSet::new();

    fn visit(
        name: &str,
        deps: &HashMap<String, RuleDeps>,
        cycles: &HashMap<String, Vec<String>>,
        visited: &mut HashSet<String>,
        report: &mut DependencyReport,
    ) {
        if !visited.insert(name.to_string()) {
            return;
        }
        if let Some(d) = deps.get(name) {
            report.builtins.extend(d.builtins.iter().cloned());
            report.undefined.extend(d.undefined.iter().cloned());
            let mut rule_deps: Vec<&String> = d.rules.iter().collect();
            rule_deps.sort();
            for dep in rule_deps {
                visit(dep, deps, cycles, visited, report);
            }
        }
        // A cyclic name is reported only in `recursive`, never also as an (unorderable) entry in
        // the topological `dependencies` list, keeping the four sets disjoint.
        if cycles.contains_key(name) {
            report.recursive.insert(name.to_string());
        } else {
            report.dependencies.push(name.to_string());
        }
    }

    if let Some(d) = deps.get(target) {
        report.builtins.extend(d.builtins.iter().cloned());
        report.undefined.extend(d.undefined.iter().cloned());
        let mut rule_deps: Vec<&String> = d.rules.iter().collect();
        rule_deps.sort();
        for dep in rule_deps {
            visit(dep, deps, &cycles, &mut visited, &mut report);
        }
    }
    if cycles.contains_key(target) {
        report.recursive.insert(target.to_string());
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abnf::parser::parse_rulelist;

    #[test]
    fn dependencies_are_topologically_ordered_leaves_first() {
        let doc = "top = mid\r\nmid = leaf\r\nleaf = %x61\r\n";
        let rulelist = parse_rulelist(doc).unwrap();
        let analysed = analyse(&rulelist);
        let report = dependencies(&analysed, "top");
        assert_eq!(report.dependencies, vec!["mid", "leaf"]);
        assert!(report.builtins.is_empty());
        assert!(report.undefined.is_empty());
        assert!(report.recursive.is_empty());
    }

    #[test]
    fn dependencies_collect_builtins_and_undefined_transitively() {
        let doc = "top = mid\r\nmid = ALPHA ghost\r\n";
        let rulelist = parse_rulelist(doc).unwrap();
        let analysed = analyse(&rulelist);
        let report = dependencies(&analysed, "top");
        assert_eq!(report.dependencies, vec!["mid"]);
        assert!(report.builtins.contains("ALPHA"));
        assert!(report.undefined.contains("ghost"));
    }

    #[test]
    fn recursive_names_are_reported_separately_from_dependencies() {
        let doc = "a = b\r\nb = a\r\n";
        let rulelist = parse_rulelist(doc).unwrap();
        let analysed = analyse(&rulelist);
        let report = dependencies(&analysed, "a");
        assert!(report.recursive.contains("b"));
        assert!(!report.dependencies.contains(&"b".to_string()));
    }

    #[test]
    fn target_itself_is_flagged_recursive_when_self_referential() {
        let doc = "a = a\r\n";
        let rulelist = parse_rulelist(doc).unwrap();
        let analysed = analyse(&rulelist);
        let report = dependencies(&analysed, "a");
        assert!(report.recursive.contains("a"));
    }

    #[test]
    fn rulelist_traversals_match_spec_shapes() {
        let doc = "a = \"x\"\r\na =/ \"y\"\r\nb = a\r\n";
        let rulelist = parse_rulelist(doc).unwrap();
        assert_eq!(rulelist.rule_names(), vec!["a", "b"]);
        let dict = rulelist.dictionary();
        assert_eq!(dict["a"].alternation.concatenations.len(), 2);
        assert!(rulelist.referenced_rules().contains("a"));
    }
}
