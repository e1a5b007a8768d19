use std::collections::BTreeMap;
use std::fmt;

/// Multiset of letters still available for placement.
///
/// Counts never go negative: [`Inventory::remove`] refuses to take a letter
/// that is not there.
///
/// # Examples
///
/// ```
/// use wordgrid_solver::inventory::Inventory;
///
/// let mut inv: Inventory = "cattr".chars().collect();
/// assert_eq!(inv.len(), 5);
/// assert_eq!(inv.count('t'), 2);
/// assert!(inv.remove('t'));
/// assert!(!inv.remove('z'));
/// assert_eq!(inv.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Histogram count of each letter
    counts: BTreeMap<char, usize>,
    /// Total number of letters held
    total: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
        self.total += 1;
    }

    /// Takes one `letter` out. Returns false, leaving the inventory unchanged,
    /// if none is left.
    pub fn remove(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) => {
                *n -= 1;
                if *n == 0 {
                    self.counts.remove(&letter);
                }
                self.total -= 1;
                true
            }
            None => false,
        }
    }

    /// All letters, expanded by count, in sorted order.
    pub fn letters(&self) -> Vec<char> {
        self.counts
            .iter()
            .flat_map(|(&letter, &n)| std::iter::repeat(letter).take(n))
            .collect()
    }
}

impl FromIterator<char> for Inventory {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        iter.into_iter().for_each(|l| inventory.add(l));
        inventory
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.letters().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", letter)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory() {
        let mut inv = Inventory::new();
        assert!(inv.is_empty());
        assert!(!inv.remove('a'));
        assert_eq!(inv.len(), 0);
        assert!(inv.letters().is_empty());
    }

    #[test]
    fn test_remove_until_exhausted() {
        let mut inv: Inventory = "aab".chars().collect();
        assert!(inv.remove('a'));
        assert!(inv.remove('a'));
        assert!(!inv.remove('a'));
        assert_eq!(inv.count('a'), 0);
        assert_eq!(inv.letters(), vec!['b']);
        assert!(inv.remove('b'));
        assert!(inv.is_empty());
    }

    #[test]
    fn test_letters_sorted_and_expanded() {
        let inv: Inventory = "tacta".chars().collect();
        assert_eq!(inv.letters(), vec!['a', 'a', 'c', 't', 't']);
    }

    #[test]
    fn test_clone_is_independent() {
        let original: Inventory = "cat".chars().collect();
        let mut copy = original.clone();
        copy.remove('c');
        assert_eq!(original.len(), 3);
        assert_eq!(copy.len(), 2);
        assert_eq!(original.count('c'), 1);
    }

    #[test]
    fn test_display() {
        let inv: Inventory = "xa".chars().collect();
        assert_eq!(inv.to_string(), "['a', 'x']");
    }
}
