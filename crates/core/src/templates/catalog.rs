//! Compiled-in definitions of the supported instruments.
//!
//! Question wording and option labels follow the published instruments;
//! option values are the instrument's point contributions (0-3 for the
//! frequency/intensity scales, 0-4 for PCL-5).

use super::{AssessmentTemplate, Question, ResponseOption};

const FREQUENCY_LABELS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

const BAI_LABELS: [&str; 4] = [
    "Not at all",
    "Mildly, but it didn't bother me much",
    "Moderately - it wasn't pleasant at times",
    "Severely - it bothered me a lot",
];

const PCL5_LABELS: [&str; 5] = [
    "Not at all",
    "A little bit",
    "Moderately",
    "Quite a bit",
    "Extremely",
];

fn options<const N: usize>(labels: [&'static str; N]) -> Vec<ResponseOption> {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| ResponseOption {
            value: i as i64,
            label,
        })
        .collect()
}

/// Builds a question bank where every item shares the same option scale.
fn scale_questions<const N: usize>(
    texts: &[&'static str],
    labels: [&'static str; N],
) -> Vec<Question> {
    texts
        .iter()
        .copied()
        .enumerate()
        .map(|(i, text)| Question {
            id: (i + 1) as u32,
            text,
            options: options(labels),
        })
        .collect()
}

/// A BDI-II item: one symptom, four graded self-statements.
fn graded_question(id: u32, text: &'static str, labels: [&'static str; 4]) -> Question {
    Question {
        id,
        text,
        options: options(labels),
    }
}

pub(super) fn all() -> Vec<AssessmentTemplate> {
    vec![phq9(), gad7(), bdi_ii(), bai(), pcl5()]
}

fn phq9() -> AssessmentTemplate {
    AssessmentTemplate {
        type_id: "PHQ-9",
        display_name: "PHQ-9",
        full_name: "Patient Health Questionnaire-9",
        description: "Depression screening and severity assessment",
        category: "Depression",
        time_estimate: "5 minutes",
        questions: scale_questions(
            &[
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading the newspaper or watching television",
                "Moving or speaking so slowly that other people could have noticed. Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself in some way",
            ],
            FREQUENCY_LABELS,
        ),
    }
}

fn gad7() -> AssessmentTemplate {
    AssessmentTemplate {
        type_id: "GAD-7",
        display_name: "GAD-7",
        full_name: "Generalized Anxiety Disorder 7-item",
        description: "Anxiety screening and severity assessment",
        category: "Anxiety",
        time_estimate: "3 minutes",
        questions: scale_questions(
            &[
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it is hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
            ],
            FREQUENCY_LABELS,
        ),
    }
}

fn bdi_ii() -> AssessmentTemplate {
    AssessmentTemplate {
        type_id: "BDI-II",
        display_name: "BDI-II",
        full_name: "Beck Depression Inventory-II",
        description: "Comprehensive depression assessment measuring cognitive, affective, and somatic symptoms",
        category: "Depression",
        time_estimate: "10 minutes",
        questions: vec![
            graded_question(1, "Sadness: I do not feel sad.", [
                "I do not feel sad",
                "I feel sad much of the time",
                "I am sad all the time",
                "I am so sad or unhappy that I can't stand it",
            ]),
            graded_question(2, "Pessimism: I am not discouraged about my future.", [
                "I am not discouraged about my future",
                "I feel more discouraged about my future than I used to be",
                "I do not expect things to work out for me",
                "I feel my future is hopeless and will only get worse",
            ]),
            graded_question(3, "Past Failure: I do not feel like a failure.", [
                "I do not feel like a failure",
                "I have failed more than I should have",
                "As I look back, I see a lot of failures",
                "I feel I am a total failure as a person",
            ]),
            graded_question(4, "Loss of Pleasure: I get as much pleasure as I ever did from the things I enjoy.", [
                "I get as much pleasure as I ever did from the things I enjoy",
                "I don't enjoy things as much as I used to",
                "I get very little pleasure from the things I used to enjoy",
                "I can't get any pleasure from the things I used to enjoy",
            ]),
            graded_question(5, "Guilty Feelings: I don't feel particularly guilty.", [
                "I don't feel particularly guilty",
                "I feel guilty over many things I have done or should have done",
                "I feel quite guilty most of the time",
                "I feel guilty all of the time",
            ]),
            graded_question(6, "Punishment Feelings: I don't feel I am being punished.", [
                "I don't feel I am being punished",
                "I have a sense that something bad may happen to me",
                "I feel I may be punished",
                "I expect to be punished",
            ]),
            graded_question(7, "Self-Dislike: I feel the same about myself as ever.", [
                "I feel the same about myself as ever",
                "I have lost confidence in myself",
                "I am disappointed in myself",
                "I dislike myself",
            ]),
            graded_question(8, "Self-Criticalness: I don't criticize or blame myself more than usual.", [
                "I don't criticize or blame myself more than usual",
                "I am more critical of myself than I used to be",
                "I criticize myself for all of my faults",
                "I blame myself for everything bad that happens",
            ]),
            graded_question(9, "Suicidal Thoughts: I don't have any thoughts of killing myself.", [
                "I don't have any thoughts of killing myself",
                "I have thoughts of killing myself, but I would not carry them out",
                "I would like to kill myself",
                "I would kill myself if I had the chance",
            ]),
            graded_question(10, "Crying: I don't cry any more than I used to.", [
                "I don't cry any more than I used to",
                "I cry more than I used to",
                "I cry over every little thing",
                "I feel like crying, but I can't",
            ]),
            graded_question(11, "Agitation: I am no more restless or wound up than usual.", [
                "I am no more restless or wound up than usual",
                "I feel more restless or wound up than usual",
                "I am so restless or agitated that it's hard to stay still",
                "I am so restless or agitated that I have to keep moving or doing something",
            ]),
            graded_question(12, "Loss of Interest: I have not lost interest in other people or activities.", [
                "I have not lost interest in other people or activities",
                "I am less interested in other people or things than before",
                "I have lost most of my interest in other people or things",
                "It's hard to get interested in anything",
            ]),
            graded_question(13, "Indecisiveness: I make decisions about as well as ever.", [
                "I make decisions about as well as ever",
                "I find it more difficult to make decisions than usual",
                "I have much greater difficulty in making decisions than I used to",
                "I have trouble making any decisions",
            ]),
            graded_question(14, "Worthlessness: I do not feel I am worthless.", [
                "I do not feel I am worthless",
                "I don't consider myself as worthwhile and useful as I used to",
                "I feel more worthless as compared to other people",
                "I feel utterly worthless",
            ]),
            graded_question(15, "Loss of Energy: I have as much energy as ever.", [
                "I have as much energy as ever",
                "I have less energy than I used to have",
                "I don't have enough energy to do very much",
                "I don't have enough energy to do anything",
            ]),
            graded_question(16, "Changes in Sleeping Pattern: I sleep as well as usual.", [
                "I sleep as well as usual",
                "I sleep somewhat less well than usual",
                "I sleep a lot less than usual",
                "I sleep most of the night",
            ]),
            graded_question(17, "Irritability: I am no more irritable than usual.", [
                "I am no more irritable than usual",
                "I am more irritable than usual",
                "I am much more irritable than usual",
                "I am irritable all the time",
            ]),
            graded_question(18, "Changes in Appetite: My appetite is no different than usual.", [
                "My appetite is no different than usual",
                "My appetite is somewhat less than usual",
                "My appetite is much less than usual",
                "I have no appetite at all",
            ]),
            graded_question(19, "Concentration Difficulty: I can concentrate as well as ever.", [
                "I can concentrate as well as ever",
                "I have a little trouble concentrating",
                "It's hard to concentrate on anything for very long",
                "I find I can't concentrate on anything",
            ]),
            graded_question(20, "Tiredness or Fatigue: I am not more tired or fatigued than usual.", [
                "I am not more tired or fatigued than usual",
                "I get more tired or fatigued more easily than usual",
                "I am too tired or fatigued to do a lot of the things I used to do",
                "I am too tired or fatigued to do most of the things I used to do",
            ]),
            graded_question(21, "Loss of Interest in Sex: I have not noticed any recent change in my interest in sex.", [
                "I have not noticed any recent change in my interest in sex",
                "I am less interested in sex than I used to be",
                "I am much less interested in sex now",
                "I have lost interest in sex completely",
            ]),
        ],
    }
}

fn bai() -> AssessmentTemplate {
    AssessmentTemplate {
        type_id: "BAI",
        display_name: "BAI",
        full_name: "Beck Anxiety Inventory",
        description: "Measures the severity of anxiety symptoms",
        category: "Anxiety",
        time_estimate: "8 minutes",
        questions: scale_questions(
            &[
                "Numbness or tingling",
                "Feeling hot",
                "Wobbliness in legs",
                "Unable to relax",
                "Fear of worst happening",
                "Dizzy or lightheaded",
                "Heart pounding or racing",
                "Unsteady",
                "Terrified or afraid",
                "Nervous",
                "Feeling of choking",
                "Hands trembling",
                "Shaky or unsteady",
                "Fear of losing control",
                "Difficulty in breathing",
                "Fear of dying",
                "Scared",
                "Indigestion",
                "Faint or lightheaded",
                "Face flushed",
                "Hot or cold sweats",
            ],
            BAI_LABELS,
        ),
    }
}

fn pcl5() -> AssessmentTemplate {
    AssessmentTemplate {
        type_id: "PCL-5",
        display_name: "PCL-5",
        full_name: "PTSD Checklist for DSM-5",
        description: "Assessment for Post-Traumatic Stress Disorder symptoms",
        category: "Trauma",
        time_estimate: "7 minutes",
        questions: scale_questions(
            &[
                "Repeated, disturbing, and unwanted memories of the stressful experience",
                "Repeated, disturbing dreams of the stressful experience",
                "Suddenly feeling or acting as if the stressful experience were actually happening again (as if you were actually back there reliving it)",
                "Feeling very upset when something reminded you of the stressful experience",
                "Having strong physical reactions when something reminded you of the stressful experience (for example, heart pounding, trouble breathing, sweating)",
                "Avoiding memories, thoughts, or feelings related to the stressful experience",
                "Avoiding external reminders of the stressful experience (for example, people, places, conversations, activities, objects, or situations)",
                "Trouble remembering important parts of the stressful experience",
                "Having strong negative beliefs about yourself, other people, or the world (for example, having thoughts such as: I am bad, there is something seriously wrong with me, no one can be trusted, the world is completely dangerous)",
                "Blaming yourself or someone else for the stressful experience or what happened after it",
                "Having strong negative feelings such as fear, horror, anger, guilt, or shame",
                "Loss of interest in activities that you used to enjoy",
                "Feeling distant or cut off from other people",
                "Trouble experiencing positive feelings (for example, being unable to feel happiness or have loving feelings for people close to you)",
                "Irritable behavior, angry outbursts, or acting aggressively",
                "Taking too many risks or doing things that could cause you harm",
                "Being \"superalert\" or watchful or on guard",
                "Feeling jumpy or easily startled",
                "Having difficulty concentrating",
                "Trouble falling or staying asleep",
            ],
            PCL5_LABELS,
        ),
    }
}
