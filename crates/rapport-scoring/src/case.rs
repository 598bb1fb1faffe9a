use rapport_core::models::case::CaseCategory;

/// Derive the case category from free-text patient background.
///
/// Case-insensitive substring rules, checked in priority order:
/// "vaccine" wins over "chronic"; anything else is `General`.
pub fn classify(background: &str) -> CaseCategory {
    let lower = background.to_lowercase();
    if lower.contains("vaccine") {
        CaseCategory::VaccineHesitant
    } else if lower.contains("chronic") {
        CaseCategory::ChronicIllness
    } else {
        CaseCategory::General
    }
}

const VACCINE_HESITANT_GUIDELINES: &[&str] = &[
    "Be empathetic and acknowledge concerns",
    "Provide factual information without being pushy",
    "Avoid judgmental language",
];

const CHRONIC_ILLNESS_GUIDELINES: &[&str] = &[
    "Show understanding of long-term challenges",
    "Emphasize patient's role in management",
    "Be encouraging but realistic",
];

/// Communication guidelines for a case category.
///
/// `General` has no table entry and resolves to an empty list.
pub fn guidelines_for(category: CaseCategory) -> &'static [&'static str] {
    match category {
        CaseCategory::VaccineHesitant => VACCINE_HESITANT_GUIDELINES,
        CaseCategory::ChronicIllness => CHRONIC_ILLNESS_GUIDELINES,
        CaseCategory::General => &[],
    }
}
