//! Property tests for the access predicate.

use crewline_core::{AccessResult, Identity, Member, evaluate_access, evaluate_admin_access};
use proptest::prelude::*;

fn identity_strategy() -> impl Strategy<Value = Identity> {
    prop_oneof![
        any::<u64>().prop_map(Identity::Numeric),
        "[a-f0-9]{0,12}".prop_map(Identity::Uuid),
    ]
}

fn member_strategy() -> impl Strategy<Value = Member> {
    (
        proptest::option::of(any::<u64>()),
        proptest::option::of("[a-f0-9]{0,12}"),
    )
        .prop_map(|(id, uuid)| Member { id, uuid })
}

fn members_strategy() -> impl Strategy<Value = Option<Vec<Member>>> {
    proptest::option::of(proptest::collection::vec(member_strategy(), 0..8))
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        checked in identity_strategy(),
        members in members_strategy(),
        current in identity_strategy(),
        is_admin in any::<bool>(),
    ) {
        let first = evaluate_access(&checked, members.as_deref(), &current, is_admin);
        let second = evaluate_access(&checked, members.as_deref(), &current, is_admin);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn owner_iff_current_equals_checked(
        checked in identity_strategy(),
        members in members_strategy(),
        current in identity_strategy(),
        is_admin in any::<bool>(),
    ) {
        let result = evaluate_access(&checked, members.as_deref(), &current, is_admin);
        prop_assert_eq!(result.owner, checked == current);
    }

    #[test]
    fn owner_ignores_members_and_admin_flag(
        checked in identity_strategy(),
        members_a in members_strategy(),
        members_b in members_strategy(),
        current in identity_strategy(),
    ) {
        let a = evaluate_access(&checked, members_a.as_deref(), &current, false);
        let b = evaluate_access(&checked, members_b.as_deref(), &current, true);
        prop_assert_eq!(a.owner, b.owner);
    }

    #[test]
    fn without_members_access_reduces_to_owner_or_admin(
        checked in identity_strategy(),
        current in identity_strategy(),
        is_admin in any::<bool>(),
    ) {
        for members in [None, Some(&[][..])] {
            let result = evaluate_access(&checked, members, &current, is_admin);
            prop_assert_eq!(result.access, result.owner || is_admin);
        }
    }

    #[test]
    fn admin_always_has_access(
        checked in identity_strategy(),
        members in members_strategy(),
        current in identity_strategy(),
    ) {
        let result = evaluate_access(&checked, members.as_deref(), &current, true);
        prop_assert!(result.access);
    }

    #[test]
    fn matching_member_grants_access(
        checked in identity_strategy(),
        mut members in proptest::collection::vec(member_strategy(), 0..6),
        current in identity_strategy(),
        insert_at in any::<proptest::sample::Index>(),
    ) {
        // Plant a row matching `checked` at an arbitrary position;
        // evaluation order must not change the outcome.
        let planted = match &checked {
            Identity::Numeric(n) => Member::numeric(*n),
            Identity::Uuid(u) => Member::uuid(u.clone()),
        };
        members.insert(insert_at.index(members.len() + 1), planted);

        let result = evaluate_access(&checked, Some(&members), &current, false);
        prop_assert!(result.access);
    }

    #[test]
    fn numeric_and_string_forms_never_coerce(
        n in any::<u64>(),
        current in identity_strategy(),
    ) {
        let as_string = Identity::Uuid(n.to_string());
        let numeric_rows = vec![Member::numeric(n)];
        let string_rows = vec![Member::uuid(n.to_string())];

        // A numeric row never satisfies the string form of the same value
        let result = evaluate_access(&as_string, Some(&numeric_rows), &current, false);
        prop_assert_eq!(result.access, result.owner);

        // And a string row never satisfies the numeric form
        let result = evaluate_access(&Identity::Numeric(n), Some(&string_rows), &current, false);
        prop_assert_eq!(result.access, result.owner);
    }

    #[test]
    fn admin_check_mirrors_flag(is_admin in any::<bool>()) {
        prop_assert_eq!(evaluate_admin_access(is_admin).access, is_admin);
    }
}

#[test]
fn documented_scenarios_hold() {
    let members = vec![Member::numeric(1), Member::numeric(2), Member::uuid("abc")];
    assert_eq!(
        evaluate_access(
            &Identity::numeric(2),
            Some(&members),
            &Identity::numeric(99),
            false
        ),
        AccessResult {
            access: true,
            owner: false
        }
    );

    assert_eq!(
        evaluate_access(
            &Identity::numeric(7),
            Some(&[]),
            &Identity::numeric(7),
            false
        ),
        AccessResult {
            access: true,
            owner: true
        }
    );

    let members = vec![Member::numeric(1)];
    assert_eq!(
        evaluate_access(
            &Identity::numeric(99),
            Some(&members),
            &Identity::numeric(50),
            true
        ),
        AccessResult {
            access: true,
            owner: false
        }
    );

    assert_eq!(
        evaluate_access(&Identity::numeric(3), None, &Identity::numeric(4), false),
        AccessResult {
            access: false,
            owner: false
        }
    );
}
