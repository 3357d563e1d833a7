use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Reading a variable that was never assigned is an error,
/// not an implicit zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_defined(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}
