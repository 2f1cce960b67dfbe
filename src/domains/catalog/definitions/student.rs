//! Student & academic tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "📝 Student & Academic Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-mortarboard-fill",
        vec![
            tool("GPA / CGPA Calculator", "bi-calculator-fill", "gpa-calculator.html"),
            tool("Flashcard Maker", "bi-card-checklist", "flashcard-maker.html"),
            tool("MCQ Quiz Generator", "bi-patch-question-fill", "mcq-quiz-generator.html"),
            tool("Exam Timer", "bi-stopwatch-fill", "exam-timer.html"),
            tool("ID Card Generator", "bi-person-badge", "id-card-generator.html"),
            tool("Certificate Generator", "bi-award-fill", "certificate-generator.html"),
            tool("Equation Editor", "bi-function", "equation-editor.html"),
            tool("Periodic Table", "bi-border-all", "periodic-table.html"),
            tool("Equation Balancer", "bi-symmetry-horizontal", "chemistry-equation-balancer.html"),
            tool("Physics Calculator", "bi-boxes", "physics-formula-calculator.html"),
            tool("Typing Speed Test", "bi-keyboard-fill", "typing-speed-test.html"),
            tool("Reading Speed Test", "bi-book-fill", "reading-speed-test.html"),
        ],
    )
}
