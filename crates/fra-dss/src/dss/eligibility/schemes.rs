use super::super::catalog::{
    HealthRules, HousingRules, JalJeevanRules, MgnregaRules, PmKisanRules,
};
use super::super::domain::{
    EligibilityStatus, FraHolder, SchemeEligibility, SchemeType, SocialCategory,
};

const DOCUMENT_PENALTY: f64 = 0.8;
const INCOME_PENALTY: f64 = 0.6;

pub(crate) fn pm_kisan(holder: &FraHolder, rules: &PmKisanRules) -> SchemeEligibility {
    let mut status = EligibilityStatus::Eligible;
    let mut confidence = 1.0;
    let mut reasons = Vec::new();
    let mut required_documents = Vec::new();

    if !holder.has_bank_account {
        status = EligibilityStatus::PendingDocuments;
        reasons.push("Bank account required".to_string());
        required_documents.push("Bank account details".to_string());
        confidence *= DOCUMENT_PENALTY;
    }

    if !holder.aadhaar_linked {
        status = EligibilityStatus::PendingDocuments;
        reasons.push("Aadhaar linking required".to_string());
        required_documents.push("Aadhaar card".to_string());
        confidence *= DOCUMENT_PENALTY;
    }

    // Exclusion is final: income and land checks never run for these holders.
    if rules.excludes_occupation(&holder.occupation) {
        reasons.push(format!("Excluded occupation: {}", holder.occupation));
        return SchemeEligibility {
            scheme: SchemeType::PmKisan,
            status: EligibilityStatus::NotEligible,
            confidence_score: 0.0,
            eligible_amount: None,
            reasons,
            required_documents,
            timeline_months: Some(6),
        };
    }

    if holder
        .annual_income
        .is_some_and(|income| income > rules.max_annual_income)
    {
        status = EligibilityStatus::RequiresVerification;
        reasons.push("Income verification needed".to_string());
        confidence *= INCOME_PENALTY;
    }

    // Land check runs last and can override every earlier outcome.
    let eligible_amount = if holder.land_area_hectares < rules.min_land_area {
        status = EligibilityStatus::NotEligible;
        reasons.push("Insufficient land holding".to_string());
        confidence = 0.0;
        None
    } else {
        reasons.push("Land ownership verified".to_string());
        Some(rules.annual_benefit)
    };

    let timeline_months = if status == EligibilityStatus::Eligible {
        3
    } else {
        6
    };

    SchemeEligibility {
        scheme: SchemeType::PmKisan,
        status,
        confidence_score: confidence,
        eligible_amount,
        reasons,
        required_documents,
        timeline_months: Some(timeline_months),
    }
}

pub(crate) fn jal_jeevan(_holder: &FraHolder, rules: &JalJeevanRules) -> SchemeEligibility {
    SchemeEligibility {
        scheme: SchemeType::JalJeevanMission,
        status: EligibilityStatus::Eligible,
        confidence_score: 1.0,
        eligible_amount: None,
        reasons: vec!["Universal household tap connection eligible".to_string()],
        required_documents: vec!["Village enrollment".to_string()],
        timeline_months: Some(rules.timeline_months),
    }
}

pub(crate) fn mgnrega(holder: &FraHolder, rules: &MgnregaRules) -> SchemeEligibility {
    if holder.age >= rules.minimum_age {
        SchemeEligibility {
            scheme: SchemeType::Mgnrega,
            status: EligibilityStatus::Eligible,
            confidence_score: 1.0,
            eligible_amount: Some(rules.annual_entitlement()),
            reasons: vec![format!(
                "Adult member eligible for {} days employment",
                rules.guaranteed_days
            )],
            required_documents: vec!["Job card application".to_string()],
            timeline_months: Some(1),
        }
    } else {
        SchemeEligibility {
            scheme: SchemeType::Mgnrega,
            status: EligibilityStatus::NotEligible,
            confidence_score: 0.0,
            eligible_amount: None,
            reasons: vec![format!("Below {} years age", rules.minimum_age)],
            required_documents: Vec::new(),
            timeline_months: Some(0),
        }
    }
}

/// Village-level convergence program, so no individual amount is attached.
pub(crate) fn dajgua(holder: &FraHolder) -> SchemeEligibility {
    if holder.social_category == SocialCategory::ScheduledTribe {
        SchemeEligibility {
            scheme: SchemeType::Dajgua,
            status: EligibilityStatus::Eligible,
            confidence_score: 1.0,
            eligible_amount: None,
            reasons: vec!["ST community eligible for village-level interventions".to_string()],
            required_documents: vec!["Community certificate".to_string()],
            timeline_months: Some(6),
        }
    } else {
        SchemeEligibility {
            scheme: SchemeType::Dajgua,
            status: EligibilityStatus::NotEligible,
            confidence_score: 0.0,
            eligible_amount: None,
            reasons: vec!["Only for Scheduled Tribe communities".to_string()],
            required_documents: Vec::new(),
            timeline_months: Some(0),
        }
    }
}

/// A missing toilet stands in for an inadequate (non-pucca) house.
pub(crate) fn housing(holder: &FraHolder, rules: &HousingRules) -> SchemeEligibility {
    if !holder.has_toilet {
        SchemeEligibility {
            scheme: SchemeType::PmAwasGramin,
            status: EligibilityStatus::Eligible,
            confidence_score: 0.8,
            eligible_amount: Some(rules.assistance_amount),
            reasons: vec!["Eligible for housing assistance".to_string()],
            required_documents: vec![
                "Housing assessment".to_string(),
                "Income certificate".to_string(),
            ],
            timeline_months: Some(6),
        }
    } else {
        SchemeEligibility {
            scheme: SchemeType::PmAwasGramin,
            status: EligibilityStatus::RequiresVerification,
            confidence_score: 0.7,
            eligible_amount: None,
            reasons: vec!["Housing condition verification needed".to_string()],
            required_documents: vec!["Detailed housing assessment".to_string()],
            timeline_months: Some(3),
        }
    }
}

pub(crate) fn health(holder: &FraHolder, rules: &HealthRules) -> SchemeEligibility {
    match holder.annual_income {
        Some(income) if income < rules.income_ceiling => SchemeEligibility {
            scheme: SchemeType::AyushmanBharat,
            status: EligibilityStatus::Eligible,
            confidence_score: 0.9,
            eligible_amount: Some(rules.coverage_amount),
            reasons: vec!["Eligible for health insurance coverage".to_string()],
            required_documents: vec!["Income certificate".to_string(), "Family card".to_string()],
            timeline_months: Some(2),
        },
        _ => SchemeEligibility {
            scheme: SchemeType::AyushmanBharat,
            status: EligibilityStatus::RequiresVerification,
            confidence_score: 0.6,
            eligible_amount: None,
            reasons: vec!["Income verification for health insurance".to_string()],
            required_documents: vec!["Income verification documents".to_string()],
            timeline_months: Some(4),
        },
    }
}
