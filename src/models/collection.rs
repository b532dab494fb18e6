//! Reconciliation of locally held lists after a remote mutation
//!
//! The backend owns every entity; after a create/update/delete the client
//! merges the response into its snapshot using the entity id as the key.

use super::ids::{BudgetId, ExpenseId, GoalId, IncomeId};
use super::{Budget, Expense, Goal, Income};

/// An entity carrying a stable backend-assigned key
pub trait Keyed {
    type Key: PartialEq + std::fmt::Display;

    fn key(&self) -> &Self::Key;
}

impl Keyed for Income {
    type Key = IncomeId;

    fn key(&self) -> &IncomeId {
        &self.id
    }
}

impl Keyed for Expense {
    type Key = ExpenseId;

    fn key(&self) -> &ExpenseId {
        &self.id
    }
}

impl Keyed for Budget {
    type Key = BudgetId;

    fn key(&self) -> &BudgetId {
        &self.id
    }
}

impl Keyed for Goal {
    type Key = GoalId;

    fn key(&self) -> &GoalId {
        &self.id
    }
}

/// Replace every entry sharing the item's key, or append it if none does
///
/// Returns `true` when at least one entry was replaced.
pub fn upsert_by_key<T: Keyed + Clone>(items: &mut Vec<T>, item: T) -> bool {
    let mut replaced = false;
    for existing in items.iter_mut().filter(|e| e.key() == item.key()) {
        *existing = item.clone();
        replaced = true;
    }
    if !replaced {
        items.push(item);
    }
    replaced
}

/// Remove every entry with the given key, returning how many were dropped
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &T::Key) -> usize {
    let before = items.len();
    items.retain(|e| e.key() != key);
    before - items.len()
}

pub fn find_by_key<'a, T: Keyed>(items: &'a [T], key: &T::Key) -> Option<&'a T> {
    items.iter().find(|e| e.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn income(id: &str, source: &str, amount: i64) -> Income {
        Income {
            id: IncomeId::from(id),
            source: source.into(),
            amount: Money::from_whole(amount),
        }
    }

    #[test]
    fn test_upsert_replaces_matching_entry() {
        let mut items = vec![income("a", "Salary", 100), income("b", "Gift", 20)];

        let replaced = upsert_by_key(&mut items, income("b", "Gift", 50));

        assert!(replaced);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].amount, Money::from_whole(50));
        assert_eq!(items[0].amount, Money::from_whole(100));
    }

    #[test]
    fn test_upsert_appends_unknown_key() {
        let mut items = vec![income("a", "Salary", 100)];

        assert!(!upsert_by_key(&mut items, income("c", "Bonus", 10)));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].source, "Bonus");
    }

    #[test]
    fn test_upsert_replaces_duplicates() {
        let mut items = vec![income("a", "Old", 1), income("a", "Old", 2)];

        upsert_by_key(&mut items, income("a", "New", 3));

        assert!(items.iter().all(|i| i.source == "New"));
    }

    #[test]
    fn test_remove_by_key() {
        let mut items = vec![income("a", "Salary", 100), income("b", "Gift", 20)];

        assert_eq!(remove_by_key(&mut items, &IncomeId::from("a")), 1);
        assert_eq!(remove_by_key(&mut items, &IncomeId::from("zzz")), 0);
        assert_eq!(items.len(), 1);
        assert!(find_by_key(&items, &IncomeId::from("b")).is_some());
    }
}
