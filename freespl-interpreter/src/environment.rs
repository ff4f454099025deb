use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Variable store for a single program run. Names come into existence on
/// first assignment.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Environment {
    store: HashMap<Rc<str>, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.store.get(key).copied()
    }

    pub fn set(&mut self, key: Rc<str>, value: i64) {
        self.store.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bindings sorted by name.
    pub fn bindings(&self) -> Vec<(Rc<str>, i64)> {
        let mut bindings = self
            .store
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect::<Vec<_>>();
        bindings.sort();
        bindings
    }
}

/// One `name = value` line per binding, sorted by name.
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.bindings() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let mut env = Environment::new();
        assert_eq!(env.get("x"), None);

        env.set("x".into(), 5);
        env.set("y".into(), -1);
        env.set("x".into(), 7);

        assert_eq!(env.get("x"), Some(7));
        assert_eq!(env.get("y"), Some(-1));
        assert_eq!(env.len(), 2);
        assert_eq!(env.bindings(), vec![(Rc::from("x"), 7), (Rc::from("y"), -1)]);
        assert_eq!(env.to_string(), "x = 7\ny = -1\n");
        assert_eq!(Environment::new().to_string(), "");
    }
}
