use std::fmt;

/// One row of `PRAGMA compile_options`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOption {
    pub name: String,
}

impl CompileOption {
    pub fn new(name: impl Into<String>) -> Self {
        CompileOption { name: name.into() }
    }

    /// Option name without its value, e.g. `THREADSAFE` for `THREADSAFE=1`
    pub fn key(&self) -> &str {
        self.name
            .split_once('=')
            .map_or(self.name.as_str(), |(key, _)| key)
    }

    /// Value after `=`, if the option carries one
    pub fn value(&self) -> Option<&str> {
        self.name.split_once('=').map(|(_, value)| value)
    }
}

impl fmt::Display for CompileOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
