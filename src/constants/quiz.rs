//! The fixed quiz: display catalog, answer key and recommendation tiers.

pub struct QuestionDef {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

pub const QUESTIONS: [QuestionDef; 5] = [
    QuestionDef {
        prompt: "Which language is mainly used with React?",
        options: ["Python", "JavaScript", "Ruby", "Go"],
    },
    QuestionDef {
        prompt: "What does HTML stand for?",
        options: [
            "Hyper Text Markup Lang",
            "Hyperlinks and Text Markup",
            "Hold The Line",
            "High Text Markup Language",
        ],
    },
    QuestionDef {
        prompt: "Which is a NoSQL DB?",
        options: ["MongoDB", "MySQL", "Postgres", "SQLite"],
    },
    QuestionDef {
        prompt: "Which command installs dependencies with npm?",
        options: ["npm remove", "npm init", "npm install", "npm start"],
    },
    QuestionDef {
        prompt: "Which hook manages state in React?",
        options: ["useEffect", "useMemo", "useState", "useContext"],
    },
];

pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// Correct option index per question. Never leaves the server.
pub(crate) const ANSWER_KEY: [u64; QUESTION_COUNT] = [1, 1, 0, 2, 3];

pub const ADVANCED_MIN_SCORE: u32 = 4;
pub const INTERMEDIATE_MIN_SCORE: u32 = 2;

pub const ADVANCED_MESSAGE: &str = "Excellent — you're advanced. Try our advanced course.";
pub const INTERMEDIATE_MESSAGE: &str = "Good — review the intermediate topics.";
pub const BEGINNER_MESSAGE: &str = "Beginner — start with fundamentals and basic tutorials.";
