//! Ordered rule tables for advice derivation
//!
//! Each advisor is a `RuleBook`: rules are evaluated in insertion order
//! and every matching rule appends exactly one advice item.
//! Deterministic, synchronous, no shared state.

use crate::models::AdviceItem;
use tracing::debug;

/// Trait for a single advice rule
pub trait AdviceRule<I>: Send + Sync {
    fn name(&self) -> &'static str;

    /// Advice text if the rule matches `input`
    fn evaluate(&self, input: &I) -> Option<String>;
}

/// Predicate + message-template pair
pub struct Clause<I> {
    name: &'static str,
    predicate: fn(&I) -> bool,
    render: fn(&I) -> String,
}

impl<I> Clause<I> {
    pub fn new(name: &'static str, predicate: fn(&I) -> bool, render: fn(&I) -> String) -> Self {
        Self {
            name,
            predicate,
            render,
        }
    }

    /// Clause that fires for every input (exhaustive branches, fixed items)
    pub fn always(name: &'static str, render: fn(&I) -> String) -> Self {
        Self::new(name, |_| true, render)
    }
}

impl<I> AdviceRule<I> for Clause<I> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, input: &I) -> Option<String> {
        if (self.predicate)(input) {
            Some((self.render)(input))
        } else {
            None
        }
    }
}

/// Rule table evaluated in a fixed order
pub struct RuleBook<I> {
    name: &'static str,
    rules: Vec<Box<dyn AdviceRule<I>>>,
}

impl<I> RuleBook<I> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    pub fn add_rule(&mut self, rule: Box<dyn AdviceRule<I>>) {
        self.rules.push(rule);
    }

    /// Builder-style `add_rule` for static tables
    pub fn with(mut self, rule: impl AdviceRule<I> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule in order, collecting the ones that fire
    pub fn evaluate(&self, input: &I) -> Vec<AdviceItem> {
        let mut items = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            if let Some(text) = rule.evaluate(input) {
                items.push(AdviceItem::new(rule.name(), text));
            }
        }

        debug!(
            rule_book = self.name,
            rule_count = self.rules.len(),
            fired = items.len(),
            "Rule evaluation completed"
        );

        items
    }

    /// Evaluate and keep only the advice text
    pub fn evaluate_text(&self, input: &I) -> Vec<String> {
        self.evaluate(input).into_iter().map(String::from).collect()
    }
}

//
// ================= Tests =================
//

#[cfg(test)]
mod tests {
    use super::*;

    /// Rule: number is even
    struct EvenRule;

    impl AdviceRule<i32> for EvenRule {
        fn name(&self) -> &'static str {
            "even"
        }

        fn evaluate(&self, input: &i32) -> Option<String> {
            (input % 2 == 0).then(|| format!("{} is even", input))
        }
    }

    fn book() -> RuleBook<i32> {
        RuleBook::new("numbers")
            .with(Clause::new(
                "positive",
                |n: &i32| *n > 0,
                |n: &i32| format!("{} is positive", n),
            ))
            .with(EvenRule)
            .with(Clause::always("trailer", |_: &i32| "done".to_string()))
    }

    #[test]
    fn test_rules_fire_in_insertion_order() {
        let items = book().evaluate(&4);
        let rules: Vec<_> = items.iter().map(|i| i.rule).collect();
        assert_eq!(rules, vec!["positive", "even", "trailer"]);
        assert_eq!(items[0].text, "4 is positive");
    }

    #[test]
    fn test_non_matching_rules_are_skipped() {
        assert_eq!(book().evaluate_text(&-3), vec!["done".to_string()]);
    }

    #[test]
    fn test_rule_names_and_len() {
        let book = book();
        assert_eq!(book.rule_names(), vec!["positive", "even", "trailer"]);
        assert_eq!(book.len(), 3);
        assert!(!book.is_empty());
        assert!(RuleBook::<i32>::new("empty").is_empty());
    }

    #[test]
    fn test_add_rule_boxed() {
        let mut book = RuleBook::<i32>::new("boxed");
        book.add_rule(Box::new(EvenRule));
        assert_eq!(book.evaluate_text(&2), vec!["2 is even".to_string()]);
        assert!(book.evaluate_text(&1).is_empty());
    }
}
