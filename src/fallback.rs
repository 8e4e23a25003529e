//! Static question banks and canned feedback, served whenever generation
//! fails. This is the system's only failure-recovery path: pure and
//! deterministic, so a quiz can always be completed.

use crate::quiz::{FeedbackMessage, Question, QuestionSet, ScoreResult, ScoreTier, OPTION_COUNT};
use crate::topic::Topic;

type BankEntry = (&'static str, [&'static str; OPTION_COUNT], usize);

/// The full five-question bank for a topic. Never fails; the banks satisfy
/// the same validity rules the parser enforces on model output.
pub fn questions(topic: Topic) -> QuestionSet {
    let bank: [BankEntry; 5] = match topic {
        Topic::Wellness => [
            (
                "Which of these is recommended for better sleep?",
                ["Caffeine before bed", "Regular sleep schedule", "Screen time", "Heavy meals"],
                1,
            ),
            (
                "What is mindfulness?",
                ["Sleeping more", "Present moment awareness", "Multitasking", "Speed reading"],
                1,
            ),
            (
                "How much water should adults drink daily?",
                ["1 cup", "8 cups", "20 cups", "No water needed"],
                1,
            ),
            (
                "Which activity reduces stress?",
                ["Meditation", "Overworking", "Skipping meals", "Isolation"],
                0,
            ),
            (
                "What's a benefit of regular exercise?",
                ["Fatigue", "Better mood", "Weight gain", "Insomnia"],
                1,
            ),
        ],
        Topic::TechTrends => [
            (
                "What does AI stand for?",
                ["Artificial Intelligence", "Automated Internet", "Advanced Integration", "Auto Interface"],
                0,
            ),
            (
                "What is cloud computing?",
                ["Weather prediction", "Remote data storage and processing", "Airplane technology", "Photography"],
                1,
            ),
            (
                "What is blockchain?",
                ["A game", "Distributed ledger technology", "Social media", "Email service"],
                1,
            ),
            (
                "What does IoT mean?",
                ["Internet of Things", "Input of Text", "Internal Operations", "Image Optimization"],
                0,
            ),
            (
                "What is machine learning?",
                ["Robot building", "AI learning from data", "Computer repair", "Typing practice"],
                1,
            ),
        ],
        Topic::Space => [
            (
                "Which planet is known as the Red Planet?",
                ["Venus", "Mars", "Jupiter", "Saturn"],
                1,
            ),
            (
                "What is the closest star to Earth?",
                ["Polaris", "Sirius", "The Sun", "Alpha Centauri"],
                2,
            ),
            (
                "Who was the first human in space?",
                ["Neil Armstrong", "Yuri Gagarin", "Buzz Aldrin", "John Glenn"],
                1,
            ),
            (
                "What is a light-year?",
                ["Time unit", "Distance unit", "Speed unit", "Weight unit"],
                1,
            ),
            (
                "Which planet has the most moons?",
                ["Earth", "Mars", "Saturn", "Mercury"],
                2,
            ),
        ],
        Topic::History => [
            (
                "In which year did World War II end?",
                ["1943", "1945", "1947", "1950"],
                1,
            ),
            (
                "Who was the first President of the United States?",
                ["Abraham Lincoln", "Thomas Jefferson", "George Washington", "John Adams"],
                2,
            ),
            (
                "Which ancient wonder was located in Egypt?",
                ["Colossus of Rhodes", "Great Pyramid of Giza", "Hanging Gardens", "Temple of Artemis"],
                1,
            ),
            (
                "The Renaissance began in which country?",
                ["France", "England", "Italy", "Spain"],
                2,
            ),
            (
                "Who discovered America in 1492?",
                ["Vasco da Gama", "Ferdinand Magellan", "Christopher Columbus", "Amerigo Vespucci"],
                2,
            ),
        ],
        Topic::Science => [
            (
                "What is the chemical symbol for water?",
                ["O2", "H2O", "CO2", "NaCl"],
                1,
            ),
            (
                "What is the largest organ in the human body?",
                ["Heart", "Liver", "Skin", "Brain"],
                2,
            ),
            (
                "What gas do plants absorb from the air?",
                ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
                2,
            ),
            (
                "What is the hardest natural substance?",
                ["Gold", "Iron", "Diamond", "Platinum"],
                2,
            ),
            (
                "How many bones are in the adult human body?",
                ["106", "206", "306", "406"],
                1,
            ),
        ],
        Topic::PopCulture => [
            (
                "Which band performed 'Bohemian Rhapsody'?",
                ["The Beatles", "Queen", "Led Zeppelin", "Pink Floyd"],
                1,
            ),
            (
                "What year was the first iPhone released?",
                ["2005", "2007", "2009", "2010"],
                1,
            ),
            (
                "Who directed the movie 'Titanic'?",
                ["Steven Spielberg", "James Cameron", "Christopher Nolan", "Martin Scorsese"],
                1,
            ),
            (
                "Which streaming platform produces 'Stranger Things'?",
                ["Amazon Prime", "Hulu", "Netflix", "Disney+"],
                2,
            ),
            (
                "What social media app is known for short videos?",
                ["Facebook", "Twitter", "TikTok", "LinkedIn"],
                2,
            ),
        ],
    };

    let questions = bank
        .into_iter()
        .map(|(prompt, options, correct)| {
            Question::new(prompt, options.map(str::to_string), correct)
                .expect("static bank entry is valid")
        })
        .collect();
    QuestionSet::new(questions).expect("static bank holds five questions")
}

/// Canned encouragement line for a score tier.
pub fn feedback(score: &ScoreResult, topic: Topic) -> FeedbackMessage {
    let name = topic.display_name();
    let text = match score.tier() {
        ScoreTier::Excellent => format!("Excellent! You really know your {name}."),
        ScoreTier::Good => format!("Good job! Solid understanding of {name}."),
        ScoreTier::Fair => format!("Nice try! Keep learning about {name}."),
        ScoreTier::Poor => format!("Keep going! {name} takes practice."),
    };
    FeedbackMessage::new(text)
}
