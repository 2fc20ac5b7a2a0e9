use std::fmt;

use itertools::Itertools;

use crate::openapi::{Method, MethodPaths};

/// Endpoint counts for a [`MethodPaths`] mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_endpoints: usize,
    /// Sorted by method name.
    pub methods: Vec<(Method, usize)>,
}

impl Summary {
    pub fn new(mapping: &MethodPaths) -> Self {
        let methods = mapping
            .iter()
            .map(|(method, paths)| (*method, paths.len()))
            .sorted_by_key(|(method, _)| method.as_str())
            .collect::<Vec<_>>();
        let total_endpoints = methods.iter().map(|(_, n)| n).sum();
        Self {
            total_endpoints,
            methods,
        }
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// One line per method, e.g. `  GET: 3 endpoints`.
    pub fn statistics(&self) -> String {
        let mut s = String::from("Statistics by method:");
        for (method, n) in &self.methods {
            s.push_str(&format!("\n  {}: {} endpoints", method, n));
        }
        s
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Successfully extracted {} endpoints across {} HTTP methods",
            self.total_endpoints,
            self.method_count()
        )?;
        write!(
            f,
            "Methods found: {}",
            self.methods.iter().map(|(method, _)| method).join(", ")
        )
    }
}
