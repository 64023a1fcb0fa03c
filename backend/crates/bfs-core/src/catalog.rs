//! Static seed catalog: plans, providers and formulary prices offered
//! through the brokerage.

use crate::{DrugPrice, InsurancePlan, PlanType, Provider};

use std::sync::LazyLock;

static PLANS: LazyLock<Vec<InsurancePlan>> = LazyLock::new(|| {
    vec![
        InsurancePlan {
            id: "bcbs-ppo-gold",
            name: "Blue Cross PPO Gold",
            carrier: "Blue Cross Blue Shield",
            plan_type: PlanType::Health,
            premium: 485.0,
            deductible: 1500.0,
            out_of_pocket_max: 6000.0,
            network: "PPO",
            coverage: vec![
                "Primary care visits: $25 copay",
                "Specialist visits: $50 copay",
                "Emergency room: $250 copay",
                "Generic drugs: $10 copay",
            ],
        },
        InsurancePlan {
            id: "aetna-hmo-silver",
            name: "Aetna HMO Silver",
            carrier: "Aetna",
            plan_type: PlanType::Health,
            premium: 365.0,
            deductible: 3000.0,
            out_of_pocket_max: 8150.0,
            network: "HMO",
            coverage: vec![
                "Primary care visits: $35 copay",
                "Specialist visits: $70 copay after referral",
                "Emergency room: 30% after deductible",
                "Generic drugs: $15 copay",
            ],
        },
        InsurancePlan {
            id: "humana-ma-advantage",
            name: "Humana Medicare Advantage",
            carrier: "Humana",
            plan_type: PlanType::Medicare,
            premium: 0.0,
            deductible: 0.0,
            out_of_pocket_max: 5900.0,
            network: "HMO",
            coverage: vec![
                "Part A and Part B benefits",
                "Part D prescription coverage",
                "Routine dental and vision",
                "Fitness membership",
            ],
        },
        InsurancePlan {
            id: "uhc-medigap-g",
            name: "UnitedHealthcare Medigap Plan G",
            carrier: "UnitedHealthcare",
            plan_type: PlanType::Medicare,
            premium: 142.0,
            deductible: 240.0,
            out_of_pocket_max: 240.0,
            network: "Any Medicare provider",
            coverage: vec![
                "Part A coinsurance and hospital costs",
                "Part B excess charges",
                "Foreign travel emergency (80%)",
            ],
        },
        InsurancePlan {
            id: "prudential-term-20",
            name: "Prudential Term Life 20",
            carrier: "Prudential",
            plan_type: PlanType::Life,
            premium: 38.0,
            deductible: 0.0,
            out_of_pocket_max: 0.0,
            network: "N/A",
            coverage: vec![
                "$500,000 death benefit",
                "Level premium for 20 years",
                "Conversion option to permanent coverage",
            ],
        },
        InsurancePlan {
            id: "delta-dental-ppo",
            name: "Delta Dental PPO",
            carrier: "Delta Dental",
            plan_type: PlanType::Dental,
            premium: 42.0,
            deductible: 50.0,
            out_of_pocket_max: 1500.0,
            network: "PPO",
            coverage: vec![
                "Preventive care: 100%",
                "Basic services: 80%",
                "Major services: 50%",
            ],
        },
        InsurancePlan {
            id: "vsp-vision-choice",
            name: "VSP Vision Choice",
            carrier: "VSP",
            plan_type: PlanType::Vision,
            premium: 14.0,
            deductible: 0.0,
            out_of_pocket_max: 0.0,
            network: "VSP Choice",
            coverage: vec![
                "Annual eye exam: $10 copay",
                "Frames allowance: $150",
                "Contact lens allowance: $130",
            ],
        },
        InsurancePlan {
            id: "guardian-ltd",
            name: "Guardian Long-Term Disability",
            carrier: "Guardian",
            plan_type: PlanType::Disability,
            premium: 96.0,
            deductible: 0.0,
            out_of_pocket_max: 0.0,
            network: "N/A",
            coverage: vec![
                "60% income replacement",
                "90-day elimination period",
                "Benefits to age 65",
            ],
        },
    ]
});

static PROVIDERS: LazyLock<Vec<Provider>> = LazyLock::new(|| {
    vec![
        Provider {
            id: "prov-001",
            name: "Dr. Sarah Mitchell",
            specialty: "Family Medicine",
            location: "Dallas, TX",
            network: "PPO",
            accepting_new_patients: true,
        },
        Provider {
            id: "prov-002",
            name: "Dr. James Okafor",
            specialty: "Cardiology",
            location: "Fort Worth, TX",
            network: "PPO",
            accepting_new_patients: false,
        },
        Provider {
            id: "prov-003",
            name: "Dr. Linda Chen",
            specialty: "Endocrinology",
            location: "Dallas, TX",
            network: "HMO",
            accepting_new_patients: true,
        },
        Provider {
            id: "prov-004",
            name: "Dr. Robert Alvarez",
            specialty: "Orthopedics",
            location: "Plano, TX",
            network: "HMO",
            accepting_new_patients: true,
        },
        Provider {
            id: "prov-005",
            name: "Dr. Emily Novak",
            specialty: "Family Medicine",
            location: "Arlington, TX",
            network: "HMO",
            accepting_new_patients: true,
        },
        Provider {
            id: "prov-006",
            name: "Dr. Marcus Reed",
            specialty: "Ophthalmology",
            location: "Dallas, TX",
            network: "VSP Choice",
            accepting_new_patients: true,
        },
    ]
});

static DRUG_PRICES: LazyLock<Vec<DrugPrice>> = LazyLock::new(|| {
    vec![
        DrugPrice {
            drug_name: "Atorvastatin 20mg",
            plan_id: "bcbs-ppo-gold",
            tier: 1,
            monthly_cost: 10.0,
        },
        DrugPrice {
            drug_name: "Atorvastatin 20mg",
            plan_id: "aetna-hmo-silver",
            tier: 1,
            monthly_cost: 15.0,
        },
        DrugPrice {
            drug_name: "Atorvastatin 20mg",
            plan_id: "humana-ma-advantage",
            tier: 1,
            monthly_cost: 0.0,
        },
        DrugPrice {
            drug_name: "Metformin 500mg",
            plan_id: "bcbs-ppo-gold",
            tier: 1,
            monthly_cost: 10.0,
        },
        DrugPrice {
            drug_name: "Metformin 500mg",
            plan_id: "humana-ma-advantage",
            tier: 1,
            monthly_cost: 0.0,
        },
        DrugPrice {
            drug_name: "Eliquis 5mg",
            plan_id: "bcbs-ppo-gold",
            tier: 3,
            monthly_cost: 95.0,
        },
        DrugPrice {
            drug_name: "Eliquis 5mg",
            plan_id: "aetna-hmo-silver",
            tier: 3,
            monthly_cost: 120.0,
        },
        DrugPrice {
            drug_name: "Eliquis 5mg",
            plan_id: "humana-ma-advantage",
            tier: 3,
            monthly_cost: 47.0,
        },
        DrugPrice {
            drug_name: "Ozempic 1mg",
            plan_id: "bcbs-ppo-gold",
            tier: 4,
            monthly_cost: 250.0,
        },
        DrugPrice {
            drug_name: "Ozempic 1mg",
            plan_id: "humana-ma-advantage",
            tier: 3,
            monthly_cost: 47.0,
        },
    ]
});

pub fn plans() -> &'static [InsurancePlan] {
    &PLANS
}

pub fn providers() -> &'static [Provider] {
    &PROVIDERS
}

pub fn drug_prices() -> &'static [DrugPrice] {
    &DRUG_PRICES
}

pub fn find_plan(id: &str) -> Option<&'static InsurancePlan> {
    PLANS.iter().find(|plan| plan.id == id)
}
