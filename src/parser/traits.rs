//! Trait table decoding and lookup.

use serde_json::Value;

use crate::error::{HbsError, Result};
use crate::types::{Trait, TraitTable};

use super::node::ObjectNode;
use super::path::FieldPath;

/// Decode one trait's property bag. Every property is optional.
pub fn decode_trait(name: &str, value: &Value, path: FieldPath) -> Result<Trait> {
    let obj = ObjectNode::new(value, path)?;

    Ok(Trait {
        name: name.to_string(),
        curve: obj.optional("curve", |o, k| o.number(k, None))?,
        damping: obj.optional("damping", |o, k| o.number(k, None))?,
        inv_mass: obj.optional("invMass", |o, k| o.number(k, None))?,
        radius: obj.optional("radius", |o, k| o.number(k, None))?,
        b_coef: obj.optional("bCoef", |o, k| o.number(k, None))?,
        colour: obj.optional("color", |o, k| o.colour(k, None))?,
        vis: obj.optional("vis", |o, k| o.boolean(k, None))?,
        c_group: obj.optional("cGroup", |o, k| o.flags(k, None))?,
        c_mask: obj.optional("cMask", |o, k| o.flags(k, None))?,
    })
}

/// Decode the `traits` object, keeping declaration order. Absent is empty.
pub fn decode_trait_table(node: Option<&Value>, path: FieldPath) -> Result<TraitTable> {
    let Some(value) = node else {
        return Ok(TraitTable::new());
    };

    let obj = ObjectNode::new(value, path)?;
    obj.entries()
        .map(|(name, props)| decode_trait(name, props, obj.field(name)))
        .collect()
}

/// Resolve an entity's `trait` reference.
///
/// A missing `trait` key means no trait; a name with no declaration is an
/// error.
pub fn resolve_trait<'t>(obj: &ObjectNode<'_>, traits: &'t TraitTable) -> Result<Option<&'t Trait>> {
    let Some(name) = obj.optional("trait", |o, k| o.string(k, None))? else {
        return Ok(None);
    };

    traits
        .find(&name)
        .map(Some)
        .ok_or_else(|| HbsError::UnknownTraitReference {
            field: obj.field("trait").to_string(),
            name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{CollisionFlags, Colour};
    use serde_json::json;

    #[test]
    fn test_presence_is_tracked_per_property() {
        let value = json!({ "bCoef": 0, "cMask": ["ball"], "color": "transparent" });
        let t = decode_trait("ballArea", &value, FieldPath::root()).unwrap();

        assert_eq!(t.b_coef, Some(0.0));
        assert_eq!(t.c_mask, Some(CollisionFlags::BALL));
        assert_eq!(t.colour, Some(Colour::TRANSPARENT));
        assert_eq!(t.radius, None);
        assert_eq!(t.vis, None);
    }

    #[test]
    fn test_table_keeps_document_order() {
        let value = json!({ "goalNet": {}, "ballArea": {}, "cornerFlag": {} });
        let table = decode_trait_table(Some(&value), FieldPath::root().key("traits")).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["goalNet", "ballArea", "cornerFlag"]);
    }

    #[test]
    fn test_absent_table_is_empty() {
        assert!(decode_trait_table(None, FieldPath::root()).unwrap().is_empty());
    }

    #[test]
    fn test_bad_property_names_trait() {
        let value = json!({ "goalPost": { "radius": "8" } });
        let err = decode_trait_table(Some(&value), FieldPath::root().key("traits")).unwrap_err();
        assert!(err.to_string().contains("traits.goalPost.radius"));
    }

    #[test]
    fn test_resolve_trait() {
        let table: TraitTable = [Trait::new("goalPost")].into_iter().collect();

        let value = json!({ "trait": "goalPost" });
        let obj = ObjectNode::new(&value, FieldPath::root()).unwrap();
        assert_eq!(resolve_trait(&obj, &table).unwrap().map(|t| t.name.as_str()), Some("goalPost"));

        let value = json!({});
        let obj = ObjectNode::new(&value, FieldPath::root()).unwrap();
        assert!(resolve_trait(&obj, &table).unwrap().is_none());

        let value = json!({ "trait": "goalNet" });
        let obj = ObjectNode::new(&value, FieldPath::root().key("discs").index(1)).unwrap();
        let err = resolve_trait(&obj, &table).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownTraitReference);
        assert!(err.to_string().contains("discs[1].trait"));
    }
}
