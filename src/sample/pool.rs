//! Consumable pool of server names

use super::RandomSource;
use crate::error::{HostGenError, Result};

/// Shuffled stack of names; each name comes out at most once
#[derive(Debug, Clone)]
pub struct ServerPool {
    names: Vec<&'static str>,
}

impl ServerPool {
    /// Copy `names` and fix their consumption order with `source`
    pub fn shuffled<S: RandomSource>(names: &[&'static str], source: &mut S) -> Self {
        let mut names = names.to_vec();
        source.shuffle(&mut names);
        Self { names }
    }

    /// Pop the next name, or fail with `Underflow` once the pool is dry
    pub fn take(&mut self) -> Result<&'static str> {
        self.names
            .pop()
            .ok_or_else(|| HostGenError::underflow("server"))
    }

    pub fn remaining(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::ScriptedSource;

    #[test]
    fn test_take_pops_from_end() {
        let mut source = ScriptedSource::default();
        let mut pool = ServerPool::shuffled(&["a", "b"], &mut source);
        assert_eq!(pool.take(), Ok("b"));
        assert_eq!(pool.remaining(), 1);
        assert_eq!(pool.take(), Ok("a"));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_take_underflow() {
        let mut source = ScriptedSource::default();
        let mut pool = ServerPool::shuffled(&["only"], &mut source);
        pool.take().unwrap();
        assert_eq!(pool.take(), Err(HostGenError::underflow("server")));
    }
}
