/// One symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The variable name, at most ten lowercase letters.
    pub name:  String,
    /// The current value.
    pub value: i64,
}

/// Fixed-capacity mapping from variable names to values.
///
/// Lookups are linear scans. A table lives for exactly one line, so it never
/// holds more than a handful of names; entries are only ever added or
/// mutated, never removed.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries:  Vec<Variable>,
    capacity: usize,
}

impl SymbolTable {
    /// Creates an empty table that holds at most `capacity` variables.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity.min(64)),
               capacity }
    }

    /// Returns the value slot for `name`, creating it with the value `0` if
    /// it does not exist yet.
    ///
    /// # Returns
    /// - `Some(&mut i64)`: The existing or newly created slot.
    /// - `None`: If the name is new and the table is full.
    ///
    /// # Example
    /// ```
    /// use plang::interpreter::symbols::SymbolTable;
    ///
    /// let mut table = SymbolTable::with_capacity(1);
    /// assert_eq!(table.lookup_or_create("k").copied(), Some(0));
    /// *table.lookup_or_create("k").unwrap() = 5;
    /// assert_eq!(table.find("k"), Some(5));
    /// assert!(table.lookup_or_create("j").is_none());
    /// ```
    pub fn lookup_or_create(&mut self, name: &str) -> Option<&mut i64> {
        let index = match self.index_of(name) {
            Some(index) => index,
            None => {
                if self.is_full() {
                    return None;
                }
                self.entries.push(Variable { name:  name.to_string(),
                                             value: 0, });
                self.entries.len() - 1
            },
        };
        Some(&mut self.entries[index].value)
    }

    /// Returns the value of an existing variable without creating it.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }

    /// Returns the value slot of an existing variable without creating it.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut i64> {
        self.entries
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.value)
    }

    /// Adds `name` with the value `0`.
    ///
    /// # Returns
    /// `false` if the name already exists or the table is full; the table is
    /// unchanged in that case.
    #[must_use]
    pub fn declare(&mut self, name: &str) -> bool {
        if self.is_full() || self.index_of(name).is_some() {
            return false;
        }
        self.entries.push(Variable { name:  name.to_string(),
                                     value: 0, });
        true
    }

    /// Returns `true` if `name` has an entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns `true` if no further names fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// The maximum number of variables.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of variables currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variable is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}
