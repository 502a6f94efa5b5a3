//! Static persona keyword table.

/// Look up the interest keywords for a persona role.
///
/// Role lookup is exact and case-sensitive; unknown roles return an empty
/// slice, which scores neutrally downstream rather than failing.
pub fn keywords_for(role: &str) -> &'static [&'static str] {
    match role {
        "Travel Planner" => &[
            "travel",
            "trip",
            "destination",
            "hotel",
            "flight",
            "booking",
            "itinerary",
            "tourist",
            "vacation",
            "holiday",
        ],
        "Food Contractor" => &[
            "menu",
            "food",
            "catering",
            "recipe",
            "ingredients",
            "cooking",
            "meal",
            "breakfast",
            "lunch",
            "dinner",
            "restaurant",
        ],
        "Business Analyst" => &[
            "business",
            "strategy",
            "market",
            "analysis",
            "financial",
            "revenue",
            "profit",
            "growth",
            "competition",
            "industry",
        ],
        "Student" => &[
            "study",
            "education",
            "learning",
            "course",
            "assignment",
            "research",
            "academic",
            "university",
            "college",
            "school",
        ],
        "Researcher" => &[
            "research",
            "study",
            "analysis",
            "data",
            "findings",
            "methodology",
            "results",
            "conclusion",
            "experiment",
            "survey",
        ],
        _ => &[],
    }
}
