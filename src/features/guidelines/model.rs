/// One guideline category as translation keys
pub struct GuidelineCategory {
    pub key: &'static str,
    pub measures: [&'static str; 4],
}

pub const GUIDELINES: [GuidelineCategory; 4] = [
    GuidelineCategory {
        key: "hygiene",
        measures: [
            "wash_hands",
            "use_sanitizer",
            "cover_mouth",
            "disinfect_surfaces",
        ],
    },
    GuidelineCategory {
        key: "nutrition",
        measures: [
            "balanced_diet",
            "drink_water",
            "limit_sugar",
            "consume_vitamins",
        ],
    },
    GuidelineCategory {
        key: "lifestyle",
        measures: [
            "exercise_regularly",
            "get_sleep",
            "avoid_smoking",
            "manage_stress",
        ],
    },
    GuidelineCategory {
        key: "vaccination_checkups",
        measures: [
            "stay_vaccinated",
            "regular_checkups",
            "follow_medications",
            "seek_medical_advice",
        ],
    },
];

pub const TITLE_KEY: &str = "health_guidelines_title";
