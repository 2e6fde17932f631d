//! Static copy for the home page and the voice tutorial.

pub const HERO_TITLE: &str = "Transform Your Skills Into";
pub const HERO_HIGHLIGHT: &str = "Income & Independence";
pub const HERO_SUBTITLE: &str = "AI-powered skill development in your local language. Voice-guided learning, micro-loan matching, and market connections for rural women entrepreneurs.";

pub const HERO_HIGHLIGHTS: &[(&str, &str)] = &[
    ("Voice Learning", "Hands-free tutorials in your local language"),
    ("Smart Guidance", "AI chatbot answers your questions instantly"),
    ("Market Connect", "Link to buyers and cooperatives near you"),
];

/// Short blurbs for the home-page feature grid.
pub const FEATURE_GRID: &[(&str, &str)] = &[
    ("Voice Learning", "Hands-free tutorials in local languages for easy understanding and accessibility."),
    ("Smart Chatbot", "AI-powered guidance that answers questions instantly with friendly support."),
    ("Skill Tracker", "Monitor learning progress and unlock new levels as you improve your skills."),
    ("Loan Finder", "Discover suitable micro-loans and financial schemes based on your goals."),
    ("Market Connect", "Connect with local buyers, cooperatives, and online selling platforms."),
    ("Product Helper", "Generate pricing tips and compelling product descriptions to boost sales."),
    ("Badge Rewards", "Earn achievement badges for completed modules and celebrate your progress."),
    ("Offline Mode", "Learn without internet connection and sync progress when reconnected."),
];

pub const CURRENT_PATH: &str = "Tailoring Skills";
pub const OVERALL_PROGRESS: u16 = 68;

/// `(module, percent, badge)` rows on the progress card.
pub const PATH_MODULES: &[(&str, u16, &str)] = &[
    ("Basic Stitching", 100, "Complete"),
    ("Pattern Making", 45, "In Progress"),
];

pub const ACHIEVEMENTS: &[(&str, &str)] = &[
    ("First Sale!", "Earned ₹500"),
    ("Skill Builder", "5 modules completed"),
    ("Community Member", "Joined local group"),
];

pub const QUICK_STATS: &[(&str, &str)] = &[
    ("15", "Lessons Completed"),
    ("₹2,340", "Total Earnings"),
    ("7", "Day Streak"),
    ("3", "Active Projects"),
];

pub const TUTORIAL_TITLE: &str = "Basic Stitching Techniques";
pub const TUTORIAL_SUMMARY: &str = "Learn the basics of hand stitching and needle techniques";

pub const TUTORIAL_STEPS: &[&str] = &[
    "First, thread your needle with a single strand of thread, about 18 inches long. This is the perfect length to avoid tangling.",
    "Tie a small knot at the end of the thread so it does not slip through the fabric.",
    "Push the needle up from the back of the fabric and pull the thread through until the knot rests.",
    "Make a running stitch: weave the needle in and out along a straight line, keeping stitches even.",
    "Finish with two small backstitches and trim the excess thread.",
];

pub const VOICE_COMMANDS: &[&str] = &[
    "Next step",
    "Repeat that",
    "Show me how",
    "Go back",
    "What materials?",
    "Help me",
];
