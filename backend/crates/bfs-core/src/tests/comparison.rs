use crate::catalog;
use crate::{
    DrugPriceFilter, Filter, PlanFilter, PlanType, Provider, ProviderFilter, apply_filter,
};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_empty_filter_when_applied_then_all_plans_returned_in_order() {
    let plans = catalog::plans();

    let filtered = apply_filter(plans, &PlanFilter::default());

    let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
    let expected: Vec<_> = plans.iter().map(|p| p.id).collect();
    assert_that!(ids, eq(&expected));
}

#[test]
fn given_plan_type_filter_when_applied_then_only_that_type_returned() {
    let filter = PlanFilter {
        plan_type: Some(PlanType::Medicare),
        ..Default::default()
    };

    let filtered = apply_filter(catalog::plans(), &filter);

    assert_that!(filtered.len(), eq(2));
    assert!(filtered.iter().all(|p| p.plan_type == PlanType::Medicare));
}

#[test]
fn given_network_and_max_premium_when_applied_then_both_criteria_hold() {
    let filter = PlanFilter {
        network: Some("ppo".to_string()),
        max_premium: Some(100.0),
        ..Default::default()
    };

    let filtered = apply_filter(catalog::plans(), &filter);

    let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
    assert_that!(ids, elements_are![eq(&"delta-dental-ppo")]);
}

#[test]
fn given_specialty_and_location_when_filtering_providers_then_case_insensitive() {
    let filter = ProviderFilter {
        specialty: Some("FAMILY".to_string()),
        location: Some("dallas".to_string()),
        ..Default::default()
    };

    let filtered = apply_filter(catalog::providers(), &filter);

    let names: Vec<_> = filtered.iter().map(|p| p.name).collect();
    assert_that!(names, elements_are![eq(&"Dr. Sarah Mitchell")]);
}

#[test]
fn given_blank_criteria_when_filtering_then_treated_as_absent() {
    let filter = ProviderFilter {
        name: Some("   ".to_string()),
        network: Some(String::new()),
        ..Default::default()
    };

    let filtered = apply_filter(catalog::providers(), &filter);

    assert_that!(filtered.len(), eq(catalog::providers().len()));
}

#[test]
fn given_drug_and_plan_when_filtering_prices_then_exact_plan_match() {
    let filter = DrugPriceFilter {
        drug: Some("eliquis".to_string()),
        plan_id: Some("humana-ma-advantage".to_string()),
    };

    let filtered = apply_filter(catalog::drug_prices(), &filter);

    assert_that!(filtered.len(), eq(1));
    assert_that!(filtered[0].monthly_cost, eq(47.0));
}

fn arb_provider() -> impl Strategy<Value = Provider> {
    let names = prop_oneof![Just("Dr. Ada"), Just("Dr. Ben"), Just("Dr. Cy")];
    let specialties = prop_oneof![Just("Cardiology"), Just("Family Medicine")];
    let networks = prop_oneof![Just("PPO"), Just("HMO")];
    (names, specialties, networks, any::<bool>()).prop_map(
        |(name, specialty, network, accepting)| Provider {
            id: "generated",
            name,
            specialty,
            location: "Dallas, TX",
            network,
            accepting_new_patients: accepting,
        },
    )
}

proptest! {
    #[test]
    fn given_any_providers_when_filtered_then_result_is_ordered_subsequence(
        providers in prop::collection::vec(arb_provider(), 0..40),
        network in prop_oneof![Just("PPO"), Just("HMO"), Just("")],
    ) {
        let filter = ProviderFilter {
            network: Some(network.to_string()),
            ..Default::default()
        };

        let filtered = apply_filter(&providers, &filter);

        // Every kept item matches, and the kept items appear in input order
        let mut cursor = 0;
        for kept in &filtered {
            prop_assert!(filter.matches(kept));
            let offset = providers[cursor..]
                .iter()
                .position(|p| std::ptr::eq(p, *kept));
            prop_assert!(offset.is_some());
            cursor += offset.unwrap() + 1;
        }
        let expected = providers.iter().filter(|p| filter.matches(p)).count();
        prop_assert_eq!(filtered.len(), expected);
    }
}
