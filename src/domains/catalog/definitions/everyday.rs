//! Everyday life & miscellaneous tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "🏠 Everyday Life & Miscellaneous Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-house-heart-fill",
        vec![
            tool("QR Code Generator", "bi-qr-code", "qr-code-generator.html"),
            tool("Barcode Generator", "bi-upc-scan", "barcode-generator.html"),
            tool("To-Do List", "bi-list-check", "todo-list.html"),
            tool("Grocery List Maker", "bi-cart4", "grocery-list-maker.html"),
            tool("Health Tracker", "bi-heart-pulse-fill", "health-tracker.html"),
            tool("BMI Calculator", "bi-person-fill", "bmi-calculator.html"),
            tool("Calorie Calculator", "bi-fire", "calorie-calculator.html"),
            tool("Ovulation Calculator", "bi-calendar-heart-fill", "ovulation-pregnancy-calculator.html"),
            tool("Baby Growth Chart", "bi-graph-up", "baby-growth-chart.html"),
            tool("Birthday Reminder", "bi-gift-fill", "birthday-reminder.html"),
            tool("Decision Maker", "bi-bullseye", "random-decision-maker.html"),
            tool("Flip a Coin", "bi-coin", "coin-flip-simulator.html"),
            tool("Dice Roller", "bi-dice-5-fill", "dice-roller.html"),
            tool("Random Number Gen", "bi-dice-3-fill", "random-number-generator.html"),
            tool("Lottery Number Gen", "bi-ticket-perforated-fill", "lottery-number-generator.html"),
            tool("Business Name Gen", "bi-lightbulb", "business-name-generator.html"),
            tool("Language Translator", "bi-translate", "language-translator.html"),
            tool("Wedding Invitation Gen", "bi-envelope-heart-fill", "wedding-invitation-generator.html"),
            tool("Horoscope Tool", "bi-stars", "horoscope-tool.html"),
            tool("Leap Year Checker", "bi-calendar3-fill", "leap-year-checker.html"),
            tool("Numerology Calculator", "bi-calculator", "name-numerology-calculator.html"),
        ],
    )
}
