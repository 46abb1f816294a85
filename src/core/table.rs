//! Deterministic transition table.

use super::error::ConfigError;
use super::symbol::Symbol;
use std::collections::HashMap;

/// Why a lookup found no destination.
///
/// Kept as two cases so diagnostics can tell "this state has no outgoing
/// rules at all" apart from "this state has rules, just not for this input".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleMiss {
    NoRuleForState,
    NoRuleForInput,
}

/// Rules sharing one source state, in insertion order.
#[derive(Clone, Debug)]
struct SourceRules<I, S> {
    targets: HashMap<I, S>,
    order: Vec<I>,
}

/// Partial function `(state, input) -> state`.
///
/// At most one destination exists per `(state, input)` pair. Adding a second
/// one fails instead of replacing the first.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{RuleMiss, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.add_rule(0u32, 10u32, 1).unwrap();
///
/// assert_eq!(table.lookup(&0, &10), Ok(1));
/// assert_eq!(table.lookup(&0, &11), Err(RuleMiss::NoRuleForInput));
/// assert_eq!(table.lookup(&1, &10), Err(RuleMiss::NoRuleForState));
/// assert!(table.add_rule(0, 10, 2).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: Symbol, I: Symbol> {
    rules: HashMap<S, SourceRules<I, S>>,
    len: usize,
}

impl<S: Symbol, I: Symbol> TransitionTable<S, I> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            len: 0,
        }
    }

    /// Map `(source, input)` to `target`.
    ///
    /// Fails with [`ConfigError::DuplicateRule`] if the pair is already
    /// mapped, even to the same target. The existing rule is kept.
    pub fn add_rule(&mut self, source: S, input: I, target: S) -> Result<(), ConfigError> {
        let entry = self.rules.entry(source).or_insert_with(|| SourceRules {
            targets: HashMap::new(),
            order: Vec::new(),
        });

        if let Some(existing) = entry.targets.get(&input) {
            return Err(ConfigError::DuplicateRule {
                state: source.name().into_owned(),
                input: input.name().into_owned(),
                target: existing.name().into_owned(),
            });
        }

        entry.targets.insert(input, target);
        entry.order.push(input);
        self.len += 1;
        Ok(())
    }

    /// Resolve the destination for `(source, input)`.
    pub fn lookup(&self, source: &S, input: &I) -> Result<S, RuleMiss> {
        let rules = self.rules.get(source).ok_or(RuleMiss::NoRuleForState)?;
        rules
            .targets
            .get(input)
            .copied()
            .ok_or(RuleMiss::NoRuleForInput)
    }

    /// Whether a rule exists for `(source, input)`. Pure query.
    pub fn can(&self, source: &S, input: &I) -> bool {
        self.lookup(source, input).is_ok()
    }

    /// The `(input, target)` pairs leaving `source`, in insertion order.
    pub fn rules_from(&self, source: &S) -> Vec<(I, S)> {
        self.rules
            .get(source)
            .map(|rules| {
                rules
                    .order
                    .iter()
                    .filter_map(|input| rules.targets.get(input).map(|target| (*input, *target)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: Symbol, I: Symbol> Default for TransitionTable<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENED: u32 = 0;
    const CLOSED: u32 = 1;
    const LOCKED: u32 = 2;

    const OPEN: u8 = 0;
    const CLOSE: u8 = 1;
    const LOCK: u8 = 2;
    const UNLOCK: u8 = 3;

    fn door_table() -> TransitionTable<u32, u8> {
        let mut table = TransitionTable::new();
        table.add_rule(OPENED, CLOSE, CLOSED).unwrap();
        table.add_rule(CLOSED, OPEN, OPENED).unwrap();
        table.add_rule(CLOSED, LOCK, LOCKED).unwrap();
        table.add_rule(LOCKED, UNLOCK, CLOSED).unwrap();
        table
    }

    #[test]
    fn lookup_resolves_configured_rules() {
        let table = door_table();

        assert_eq!(table.lookup(&OPENED, &CLOSE), Ok(CLOSED));
        assert_eq!(table.lookup(&CLOSED, &LOCK), Ok(LOCKED));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn lookup_distinguishes_missing_state_from_missing_input() {
        let mut table = door_table();
        table.add_rule(LOCKED, LOCK, LOCKED).unwrap();

        assert_eq!(table.lookup(&OPENED, &LOCK), Err(RuleMiss::NoRuleForInput));
        assert_eq!(table.lookup(&7, &LOCK), Err(RuleMiss::NoRuleForState));
    }

    #[test]
    fn duplicate_rule_keeps_first_destination() {
        let mut table = door_table();

        let result = table.add_rule(CLOSED, LOCK, OPENED);
        assert_eq!(
            result,
            Err(ConfigError::DuplicateRule {
                state: "1".to_string(),
                input: "2".to_string(),
                target: "2".to_string(),
            })
        );
        assert_eq!(table.lookup(&CLOSED, &LOCK), Ok(LOCKED));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn duplicate_rule_with_same_target_still_fails() {
        let mut table = door_table();
        assert!(table.add_rule(OPENED, CLOSE, CLOSED).is_err());
    }

    #[test]
    fn can_matches_lookup() {
        let table = door_table();

        assert!(table.can(&CLOSED, &OPEN));
        assert!(!table.can(&OPENED, &OPEN));
        assert!(!table.can(&LOCKED, &OPEN));
    }

    #[test]
    fn rules_from_preserves_insertion_order() {
        let table = door_table();

        assert_eq!(table.rules_from(&CLOSED), vec![(OPEN, OPENED), (LOCK, LOCKED)]);
        assert!(table.rules_from(&99).is_empty());
    }
}
