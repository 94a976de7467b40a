//! Named bundles of default properties.

use super::{CollisionFlags, Colour};

/// A named set of optional property overrides.
///
/// `None` means the trait does not influence that property, which is distinct
/// from a present zero value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trait {
    pub name: String,
    pub curve: Option<f64>,
    pub damping: Option<f64>,
    pub inv_mass: Option<f64>,
    pub radius: Option<f64>,
    pub b_coef: Option<f64>,
    pub colour: Option<Colour>,
    pub vis: Option<bool>,
    pub c_group: Option<CollisionFlags>,
    pub c_mask: Option<CollisionFlags>,
}

impl Trait {
    /// Create a trait with no overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Ordered trait declarations for one stadium.
///
/// Tables hold tens of entries, so lookup is a linear scan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraitTable {
    traits: Vec<Trait>,
}

impl TraitTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trait.
    pub fn push(&mut self, t: Trait) {
        self.traits.push(t);
    }

    /// Find a trait by name.
    pub fn find(&self, name: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

impl FromIterator<Trait> for TraitTable {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        Self {
            traits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name() {
        let table: TraitTable = [
            Trait {
                b_coef: Some(0.1),
                ..Trait::new("ballArea")
            },
            Trait::new("goalPost"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.find("ballArea").and_then(|t| t.b_coef), Some(0.1));
        assert!(table.find("goalPost").is_some());
        assert!(table.find("goalNet").is_none());
    }

    #[test]
    fn test_names_keep_declaration_order() {
        let mut table = TraitTable::new();
        table.push(Trait::new("z"));
        table.push(Trait::new("a"));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["z", "a"]);
    }
}
