//! Prompt rendering for the Gemini responder.
//!
//! Turns the tagged request plus the dialogue into the single text prompt
//! placed under `contents[0].parts[0].text`, and carries the fixed system
//! instruction attached to every request.

use bookbot_types::chat::{Role, Transcript};
use bookbot_types::request::GenerateRequest;
use bookbot_types::session::{PreferenceProfile, QUESTION_COUNT};

/// The BookBot persona and 4-step script, sent as the system instruction
/// on every request.
pub const SYSTEM_INSTRUCTION: &str = r#"You are "BookBot", an AI book companion that helps users discover books tailored to their preferences.

**Step 1 – User Onboarding:**
Greet the user warmly and let them know you'll ask them 4 quick multiple-choice questions to understand their taste in books.

**Step 2 – Preference Questions:**
Ask the user the following questions one at a time, each with four unique answer choices. After each answer, store the result for profiling:

1. What type of stories do you usually enjoy?
   - A. Mysteries and Thrillers
   - B. Romance and Emotions
   - C. Science Fiction or Fantasy
   - D. Non-fiction and Real Events

2. What kind of pacing do you prefer in a book?
   - A. Fast and action-packed
   - B. Slow and reflective
   - C. Balanced with surprises
   - D. Depends on the topic

3. Which setting appeals to you the most?
   - A. Modern cities or urban life
   - B. Historical or classical worlds
   - C. Futuristic or magical realms
   - D. Real-life memoirs or biographies

4. Why do you read books?
   - A. To escape reality and be thrilled
   - B. To feel, reflect, and relate
   - C. To explore new worlds and possibilities
   - D. To learn and grow from real-life experiences

**Step 3 – Book Recommendation:**
After all questions are answered, analyze the user's profile and provide a list of **3 to 5 book recommendations** (title + author + one-sentence summary). Include a mix of popular and lesser-known titles that fit their answers.

**Step 4 – Book Discussion:**
Encourage the user to pick a book from the list. Then, have a chat about it:
- Offer a short spoiler-free synopsis.
- Share what others have said about it (as if from reviews).
- Ask the user if they want to discuss themes, characters, or similar books.

Maintain a friendly, thoughtful, and slightly witty tone throughout."#;

const GREETING_INSTRUCTION: &str = "Please provide a warm greeting as BookBot and explain that you'll ask 4 questions to understand the user's book preferences.";

/// Render the prompt text for a request.
pub fn render(transcript: &Transcript, request: &GenerateRequest) -> String {
    match request {
        GenerateRequest::Greeting => GREETING_INSTRUCTION.to_string(),
        GenerateRequest::Recommendations(profile) => render_recommendation_prompt(profile),
        GenerateRequest::Discussion => render_dialogue(transcript),
    }
}

/// Summarize the four recorded answers and ask for 3-5 recommendations.
fn render_recommendation_prompt(profile: &PreferenceProfile) -> String {
    let mut prompt = String::from("Based on these preferences:\n");
    for k in 1..=QUESTION_COUNT {
        let answer = profile.answer(k).unwrap_or("(not answered)");
        prompt.push_str(&format!("Question {k}: {answer}\n"));
    }
    prompt.push_str(
        "\nPlease provide 3-5 book recommendations with title, author, and a one-sentence summary for each.",
    );
    prompt
}

/// Render each turn as `User: ...` / `BookBot: ...` joined by newlines,
/// preserving transcript order.
fn render_dialogue(transcript: &Transcript) -> String {
    transcript
        .turns()
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                Role::User => "User",
                Role::Assistant => "BookBot",
            };
            format!("{speaker}: {}", turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookbot_types::chat::Turn;

    #[test]
    fn test_greeting_renders_canned_instruction() {
        let rendered = render(&Transcript::new(), &GenerateRequest::Greeting);
        assert_eq!(rendered, GREETING_INSTRUCTION);
    }

    #[test]
    fn test_recommendation_prompt_lists_all_answers() {
        let mut profile = PreferenceProfile::new();
        profile.record(1, "A. Mysteries and Thrillers");
        profile.record(2, "B. Slow and reflective");
        profile.record(3, "C. Futuristic or magical realms");
        profile.record(4, "D. To learn and grow from real-life experiences");

        let rendered = render(
            &Transcript::new(),
            &GenerateRequest::Recommendations(profile),
        );
        assert!(rendered.starts_with("Based on these preferences:"));
        assert!(rendered.contains("Question 1: A. Mysteries and Thrillers"));
        assert!(rendered.contains("Question 4: D. To learn and grow from real-life experiences"));
        assert!(rendered.contains("3-5 book recommendations"));
    }

    #[test]
    fn test_dialogue_rendering_order_and_speakers() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::assistant("Hello, I'm BookBot."));
        transcript.push(Turn::user("Tell me about Dune."));

        let rendered = render(&transcript, &GenerateRequest::Discussion);
        assert_eq!(
            rendered,
            "BookBot: Hello, I'm BookBot.\nUser: Tell me about Dune."
        );
    }

    #[test]
    fn test_system_instruction_carries_script() {
        assert!(SYSTEM_INSTRUCTION.contains("BookBot"));
        assert!(SYSTEM_INSTRUCTION.contains("3 to 5 book recommendations"));
        assert!(SYSTEM_INSTRUCTION.contains("Step 4"));
    }
}
