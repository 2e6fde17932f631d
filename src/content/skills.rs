//! Skills catalog: the learner's in-progress skills and the browsable
//! learning categories with their detail sheets.

/// Identifier of a skill within one list (in-progress skills or categories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl ModuleStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            ModuleStatus::Completed => "Review",
            ModuleStatus::InProgress => "Continue",
            ModuleStatus::NotStarted => "Start",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillModule {
    pub name: &'static str,
    pub progress: u16,
    pub completed: bool,
}

impl SkillModule {
    pub fn status(&self) -> ModuleStatus {
        if self.completed {
            ModuleStatus::Completed
        } else if self.progress > 0 {
            ModuleStatus::InProgress
        } else {
            ModuleStatus::NotStarted
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressSkill {
    pub id: SkillId,
    pub title: &'static str,
    pub modules: &'static [SkillModule],
}

pub const MY_SKILLS: &[ProgressSkill] = &[
    ProgressSkill {
        id: SkillId(1),
        title: "Tailoring & Stitching",
        modules: &[
            SkillModule { name: "Basic Stitching", progress: 100, completed: true },
            SkillModule { name: "Pattern Making", progress: 65, completed: false },
            SkillModule { name: "Advanced Techniques", progress: 0, completed: false },
        ],
    },
    ProgressSkill {
        id: SkillId(2),
        title: "Organic Farming Techniques",
        modules: &[
            SkillModule { name: "Soil Preparation", progress: 85, completed: false },
            SkillModule { name: "Crop Rotation", progress: 30, completed: false },
            SkillModule { name: "Pest Management", progress: 0, completed: false },
        ],
    },
];

pub const CERTIFICATION_HINT: &str = "Complete 3 modules to earn your certification badge";

#[derive(Debug, Clone, Copy)]
pub struct SkillDetails {
    pub modules: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct LearningCategory {
    pub id: SkillId,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub details: SkillDetails,
}

/// Shown on every detail sheet.
pub const LEARNER_COUNT: &str = "2,500+";
pub const SUCCESS_RATE: &str = "94%";

pub const CATEGORIES: &[LearningCategory] = &[
    LearningCategory {
        id: SkillId(1),
        title: "Tailoring & Stitching",
        description: "Master traditional and modern stitching techniques, pattern making, and garment construction",
        duration: "6-8 weeks",
        level: "Beginner to Advanced",
        details: SkillDetails {
            modules: &["Basic Stitching", "Pattern Making", "Advanced Techniques", "Garment Construction"],
            outcomes: &["Create custom clothing", "Start tailoring business", "Master traditional techniques"],
            tools: &["Sewing machine", "Thread", "Needles", "Fabric scissors", "Measuring tape"],
        },
    },
    LearningCategory {
        id: SkillId(2),
        title: "Organic Farming Techniques",
        description: "Learn sustainable farming methods, crop rotation, and organic pest management",
        duration: "8-10 weeks",
        level: "Beginner to Intermediate",
        details: SkillDetails {
            modules: &["Soil Preparation", "Crop Rotation", "Pest Management", "Harvesting"],
            outcomes: &["Grow organic crops", "Improve soil health", "Sustainable farming practices"],
            tools: &["Seeds", "Organic fertilizer", "Farming tools", "pH testing kit"],
        },
    },
    LearningCategory {
        id: SkillId(3),
        title: "Handicrafts & Embroidery",
        description: "Create beautiful handmade items, learn embroidery patterns, and traditional crafts",
        duration: "4-6 weeks",
        level: "Beginner to Advanced",
        details: SkillDetails {
            modules: &["Basic Embroidery", "Pattern Design", "Color Theory", "Finishing Techniques"],
            outcomes: &["Create beautiful handicrafts", "Sell handmade items", "Preserve cultural arts"],
            tools: &["Embroidery thread", "Needles", "Fabric", "Hoops", "Design patterns"],
        },
    },
    LearningCategory {
        id: SkillId(4),
        title: "Food Processing & Packaging",
        description: "Food preservation, packaging techniques, and small-scale food business setup",
        duration: "5-7 weeks",
        level: "Beginner to Intermediate",
        details: SkillDetails {
            modules: &["Food Safety", "Processing Methods", "Packaging Techniques", "Quality Control"],
            outcomes: &["Start food business", "Preserve food safely", "Create value-added products"],
            tools: &["Processing equipment", "Packaging materials", "Storage containers"],
        },
    },
    LearningCategory {
        id: SkillId(5),
        title: "Mobile & Digital Literacy",
        description: "Master smartphone usage, digital payments, online selling, and basic computer skills",
        duration: "3-4 weeks",
        level: "Beginner",
        details: SkillDetails {
            modules: &["Basic Phone Usage", "Digital Payments", "Online Selling", "Social Media"],
            outcomes: &["Use smartphone confidently", "Make digital payments", "Sell products online"],
            tools: &["Smartphone", "Internet connection", "Banking app", "E-commerce apps"],
        },
    },
];

pub fn my_skill(id: SkillId) -> Option<&'static ProgressSkill> {
    MY_SKILLS.iter().find(|s| s.id == id)
}

pub fn category(id: SkillId) -> Option<&'static LearningCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_status_labels() {
        let tailoring = my_skill(SkillId(1)).unwrap();
        let labels: Vec<_> = tailoring
            .modules
            .iter()
            .map(|m| m.status().button_label())
            .collect();
        assert_eq!(labels, vec!["Review", "Continue", "Start"]);
    }

    #[test]
    fn test_ids_are_unique_within_each_list() {
        let mut mine: Vec<_> = MY_SKILLS.iter().map(|s| s.id).collect();
        mine.dedup();
        assert_eq!(mine.len(), MY_SKILLS.len());

        let mut cats: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        cats.sort();
        cats.dedup();
        assert_eq!(cats.len(), CATEGORIES.len());
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(category(SkillId(5)).map(|c| c.level), Some("Beginner"));
        assert!(category(SkillId(42)).is_none());
        assert!(my_skill(SkillId(3)).is_none());
    }
}
