use super::EnvError;
use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

/// Value given to `LS_COLORS` when the inherited environment has none.
pub const DEFAULT_LS_COLORS: &str =
    "di=1;34:ln=1;36:so=1;35:pi=1;33:ex=1;32:bd=1;33:cd=1;33:su=1;31:sg=1;31:tw=1;34:ow=1;34";

/// Variables exported to every process the shell starts.
///
/// The store is owned by the session and never touches the shell's own
/// process environment: children receive a [`Snapshot`] as their entire
/// environment instead. Names and values are kept as raw OS strings, so
/// inherited bytes reach children unchanged.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentStore {
    vars: HashMap<OsString, OsString>,
}

impl EnvironmentStore {
    /// Seeds the store from the inherited process environment.
    pub fn new() -> Self {
        Self::from_vars(env::vars_os())
    }

    /// Seeds the store from an arbitrary set of pairs, filling in the
    /// display defaults that are missing.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let mut store = Self::empty();
        for (key, value) in vars {
            if let Err(e) = store.set(key, value) {
                log::debug!("skipping inherited variable: {}", e);
            }
        }

        if !store.contains("LS_COLORS") {
            store.vars.insert("LS_COLORS".into(), DEFAULT_LS_COLORS.into());
        }

        store
    }

    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Result<(), EnvError> {
        let name = name.as_ref();
        let bytes = name.as_bytes();
        if bytes.is_empty() || bytes.contains(&b'=') || bytes.contains(&0) {
            return Err(EnvError::InvalidName(name.to_string_lossy().into_owned()));
        }

        self.vars.insert(name.to_owned(), value.as_ref().to_owned());
        Ok(())
    }

    /// Returns the value of `name`, or an empty string when it is not set.
    pub fn get(&self, name: &str) -> &OsStr {
        self.vars
            .get(OsStr::new(name))
            .map(OsString::as_os_str)
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(OsStr::new(name))
    }

    pub fn unset(&mut self, name: &str) {
        self.vars.remove(OsStr::new(name));
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Full point-in-time copy of the store.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            vars: self
                .vars
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// Immutable export of an [`EnvironmentStore`]. Entry order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    vars: Vec<(OsString, OsString)>,
}

impl Snapshot {
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// `KEY=VALUE` lines, one per variable, bytes as stored.
    pub fn to_lines(&self) -> Vec<OsString> {
        self.vars
            .iter()
            .map(|(k, v)| {
                let mut line = k.clone();
                line.push("=");
                line.push(v);
                line
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
