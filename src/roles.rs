use crate::catalog::CardCatalog;
use crate::models::Role;

/// Returns the roles recorded for a card, in catalog priority order.
///
/// Always non-empty: cards absent from the catalog, and catalog entries
/// with no recorded roles, classify as plain Utility.
pub fn roles_of(catalog: &dyn CardCatalog, card_name: &str) -> Vec<Role> {
    match catalog.lookup(card_name) {
        Some(card) if !card.roles.is_empty() => card.roles.clone(),
        _ => vec![Role::Utility],
    }
}

/// Returns true if the two role lists share at least one role
pub fn shares_role(a: &[Role], b: &[Role]) -> bool {
    a.iter().any(|role| b.contains(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::models::{CardRecord, ColorIdentity};

    fn record(name: &str, roles: Vec<Role>) -> CardRecord {
        CardRecord {
            name: name.to_string(),
            oracle_id: "x".to_string(),
            color_identity: ColorIdentity::colorless(),
            reference_price: 0.0,
            banned_in: Default::default(),
            roles,
        }
    }

    #[test]
    fn known_card_keeps_recorded_order() {
        let catalog =
            InMemoryCatalog::from_records([record("Goldspan Dragon", vec![Role::Ramp, Role::Wincon])]);
        assert_eq!(
            roles_of(&catalog, "Goldspan Dragon"),
            vec![Role::Ramp, Role::Wincon]
        );
    }

    #[test]
    fn unknown_card_defaults_to_utility() {
        let catalog = InMemoryCatalog::new();
        assert_eq!(roles_of(&catalog, "Mystery Card"), vec![Role::Utility]);
    }

    #[test]
    fn empty_role_list_defaults_to_utility() {
        let catalog = InMemoryCatalog::from_records([record("Blank", vec![])]);
        assert_eq!(roles_of(&catalog, "Blank"), vec![Role::Utility]);
    }

    #[test]
    fn shares_role_on_any_overlap() {
        assert!(shares_role(&[Role::Ramp, Role::Wincon], &[Role::Wincon]));
        assert!(!shares_role(&[Role::Ramp], &[Role::Draw, Role::Control]));
        assert!(!shares_role(&[], &[Role::Draw]));
    }
}
