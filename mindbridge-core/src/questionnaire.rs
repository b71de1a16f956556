//! Questionnaire catalog
//!
//! Static definitions of the four self-assessments. Every option offered
//! here appears in the scoring table of its questionnaire.

use serde::Serialize;

use crate::scoring::AssessmentType;

/// A single question and the answer labels offered for it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

/// A complete questionnaire as presented to the client
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Questionnaire {
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub questions: &'static [Question],
}

const FREQUENCY: &[&str] = &[
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

const STRESS_FREQUENCY: &[&str] = &["Never", "Almost never", "Sometimes", "Fairly often", "Very often"];

const fn frequency(id: &'static str, question: &'static str) -> Question {
    Question {
        id,
        question,
        options: FREQUENCY,
    }
}

const fn stress(id: &'static str, question: &'static str) -> Question {
    Question {
        id,
        question,
        options: STRESS_FREQUENCY,
    }
}

const ANXIETY_QUESTIONS: &[Question] = &[
    frequency(
        "1",
        "Over the last 2 weeks, how often have you been bothered by feeling nervous, anxious, or on edge?",
    ),
    frequency(
        "2",
        "Over the last 2 weeks, how often have you been bothered by not being able to stop or control worrying?",
    ),
    frequency(
        "3",
        "Over the last 2 weeks, how often have you been bothered by worrying too much about different things?",
    ),
    frequency(
        "4",
        "Over the last 2 weeks, how often have you been bothered by trouble relaxing?",
    ),
    frequency(
        "5",
        "Over the last 2 weeks, how often have you been bothered by being so restless that it's hard to sit still?",
    ),
    frequency(
        "6",
        "Over the last 2 weeks, how often have you been bothered by becoming easily annoyed or irritable?",
    ),
    frequency(
        "7",
        "Over the last 2 weeks, how often have you been bothered by feeling afraid as if something awful might happen?",
    ),
];

const DEPRESSION_QUESTIONS: &[Question] = &[
    frequency(
        "1",
        "Over the last 2 weeks, how often have you been bothered by little interest or pleasure in doing things?",
    ),
    frequency(
        "2",
        "Over the last 2 weeks, how often have you been bothered by feeling down, depressed, or hopeless?",
    ),
    frequency(
        "3",
        "Over the last 2 weeks, how often have you been bothered by trouble falling or staying asleep, or sleeping too much?",
    ),
    frequency(
        "4",
        "Over the last 2 weeks, how often have you been bothered by feeling tired or having little energy?",
    ),
    frequency(
        "5",
        "Over the last 2 weeks, how often have you been bothered by poor appetite or overeating?",
    ),
    frequency(
        "6",
        "Over the last 2 weeks, how often have you been bothered by feeling bad about yourself - or that you are a failure or have let yourself or your family down?",
    ),
    frequency(
        "7",
        "Over the last 2 weeks, how often have you been bothered by trouble concentrating on things, such as reading the newspaper or watching television?",
    ),
    frequency(
        "8",
        "Over the last 2 weeks, how often have you been bothered by moving or speaking so slowly that other people could have noticed? Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual?",
    ),
    frequency(
        "9",
        "Over the last 2 weeks, how often have you been bothered by thoughts that you would be better off dead, or of hurting yourself?",
    ),
];

const STRESS_QUESTIONS: &[Question] = &[
    stress(
        "1",
        "In the last month, how often have you been upset because of something that happened unexpectedly?",
    ),
    stress(
        "2",
        "In the last month, how often have you felt that you were unable to control the important things in your life?",
    ),
    stress(
        "3",
        "In the last month, how often have you felt nervous and stressed?",
    ),
    stress(
        "4",
        "In the last month, how often have you felt confident about your ability to handle your personal problems?",
    ),
];

const SLEEP_QUESTIONS: &[Question] = &[
    Question {
        id: "1",
        question: "During the past month, how would you rate your sleep quality overall?",
        options: &["Very good", "Fairly good", "Fairly bad", "Very bad"],
    },
    Question {
        id: "2",
        question: "During the past month, how long (in minutes) has it usually taken you to fall asleep each night?",
        options: &["≤15 minutes", "16-30 minutes", "31-60 minutes", ">60 minutes"],
    },
    Question {
        id: "3",
        question: "During the past month, how many hours of actual sleep did you get at night?",
        options: &[">7 hours", "6-7 hours", "5-6 hours", "<5 hours"],
    },
    Question {
        id: "4",
        question: "During the past month, how often have you had trouble sleeping because you wake up in the middle of the night or early morning?",
        options: &[
            "Not during the past month",
            "Less than once a week",
            "Once or twice a week",
            "Three or more times a week",
        ],
    },
];

static CATALOG: [Questionnaire; 4] = [
    Questionnaire {
        kind: AssessmentType::Anxiety,
        name: "Anxiety Assessment",
        description: "GAD-7 questionnaire designed for college students to identify anxiety symptoms and their severity. Commonly used in campus mental health services.",
        duration: "5 minutes",
        questions: ANXIETY_QUESTIONS,
    },
    Questionnaire {
        kind: AssessmentType::Depression,
        name: "Depression Screening",
        description: "PHQ-9 questionnaire for depression screening among college students. Widely validated for young adult populations in academic settings.",
        duration: "7 minutes",
        questions: DEPRESSION_QUESTIONS,
    },
    Questionnaire {
        kind: AssessmentType::Stress,
        name: "Stress Level Check",
        description: "Perceived Stress Scale adapted for college students to assess stress levels related to academic and personal challenges.",
        duration: "4 minutes",
        questions: STRESS_QUESTIONS,
    },
    Questionnaire {
        kind: AssessmentType::Sleep,
        name: "Sleep Quality Index",
        description: "Sleep Quality Assessment specifically relevant for college students dealing with academic schedules and campus life demands.",
        duration: "6 minutes",
        questions: SLEEP_QUESTIONS,
    },
];

/// All questionnaires in catalog order
pub fn questionnaires() -> &'static [Questionnaire] {
    &CATALOG
}

/// Look up one questionnaire
pub fn questionnaire(kind: AssessmentType) -> &'static Questionnaire {
    match kind {
        AssessmentType::Anxiety => &CATALOG[0],
        AssessmentType::Depression => &CATALOG[1],
        AssessmentType::Stress => &CATALOG[2],
        AssessmentType::Sleep => &CATALOG[3],
    }
}

impl Questionnaire {
    /// Highest score reachable by answering every question
    pub fn max_score(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| {
                q.options
                    .iter()
                    .filter_map(|o| crate::scoring::answer_points(self.kind, o))
                    .max()
                    .unwrap_or(0)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::answer_points;

    #[test]
    fn catalog_order_matches_type_order() {
        let kinds: Vec<_> = questionnaires().iter().map(|q| q.kind).collect();
        assert_eq!(kinds, AssessmentType::ALL.to_vec());
    }

    #[test]
    fn lookup_returns_matching_questionnaire() {
        for kind in AssessmentType::ALL {
            assert_eq!(questionnaire(kind).kind, kind);
        }
    }

    #[test]
    fn question_counts() {
        assert_eq!(questionnaire(AssessmentType::Anxiety).questions.len(), 7);
        assert_eq!(questionnaire(AssessmentType::Depression).questions.len(), 9);
        assert_eq!(questionnaire(AssessmentType::Stress).questions.len(), 4);
        assert_eq!(questionnaire(AssessmentType::Sleep).questions.len(), 4);
    }

    #[test]
    fn every_option_is_scored() {
        for q in questionnaires() {
            for question in q.questions {
                for option in question.options {
                    assert!(
                        answer_points(q.kind, option).is_some(),
                        "{} question {} offers unscored option {:?}",
                        q.kind,
                        question.id,
                        option
                    );
                }
            }
        }
    }

    #[test]
    fn max_scores() {
        assert_eq!(questionnaire(AssessmentType::Anxiety).max_score(), 21);
        assert_eq!(questionnaire(AssessmentType::Depression).max_score(), 27);
        assert_eq!(questionnaire(AssessmentType::Stress).max_score(), 16);
        assert_eq!(questionnaire(AssessmentType::Sleep).max_score(), 12);
    }

    #[test]
    fn serializes_type_field() {
        let json = serde_json::to_value(questionnaire(AssessmentType::Stress)).unwrap();
        assert_eq!(json["type"], "stress");
        assert_eq!(json["questions"][0]["options"][4], "Very often");
    }
}
