use std::rc::Rc;

use fxhash::FxHashSet;

/// Deduplicates identifier and literal text for the duration of one lowering.
#[derive(Debug, Default)]
pub struct Interner {
    table: FxHashSet<Rc<str>>,
    hits: usize,
}

impl Interner {
    pub fn intern(&mut self, text: &str) -> Rc<str> {
        if let Some(interned) = self.table.get(text) {
            self.hits += 1;
            return interned.clone();
        }
        let interned: Rc<str> = Rc::from(text);
        self.table.insert(interned.clone());
        interned
    }

    /// Number of distinct strings
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Number of requests answered by an existing entry
    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod intern_tests {
    use super::*;

    #[test]
    fn equal_text_shares_allocation() {
        let mut interner = Interner::default();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        let c = interner.intern("bar");
        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.hits(), 1);
    }
}
