use serde::{Deserialize, Serialize};

/// The number of rows consumed by a block in a single proving sub-circuit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct SubCircuitRowUsage {
    /// The name of the sub-circuit.
    pub name: String,
    /// The number of rows consumed.
    pub row_number: u64,
}

impl SubCircuitRowUsage {
    /// Returns a new instance of [`SubCircuitRowUsage`].
    pub fn new(name: impl Into<String>, row_number: u64) -> Self {
        Self { name: name.into(), row_number }
    }
}

/// The row consumption of a block across all sub-circuits, as computed by the execution engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(transparent)]
pub struct RowConsumption(Vec<SubCircuitRowUsage>);

impl RowConsumption {
    /// Returns an iterator over the sub-circuit usages.
    pub fn iter(&self) -> impl Iterator<Item = &SubCircuitRowUsage> {
        self.0.iter()
    }

    /// Returns true if no sub-circuit usage is recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<SubCircuitRowUsage>> for RowConsumption {
    fn from(value: Vec<SubCircuitRowUsage>) -> Self {
        Self(value)
    }
}

impl FromIterator<SubCircuitRowUsage> for RowConsumption {
    fn from_iter<T: IntoIterator<Item = SubCircuitRowUsage>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RowConsumption {
    type Item = &'a SubCircuitRowUsage;
    type IntoIter = std::slice::Iter<'a, SubCircuitRowUsage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
