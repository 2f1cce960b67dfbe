//! Calculators & financial tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "📊 Calculators & Financial Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-calculator",
        vec![
            tool("Scientific Calculator", "bi-superscript", "scientific-calculator.html"),
            tool("Percentage Calculator", "bi-percent", "percentage-calculator.html"),
            tool("Discount Calculator", "bi-tag-fill", "discount-calculator.html"),
            tool("Age Calculator", "bi-cake2-fill", "age-calculator.html"),
            tool("Date Calculator", "bi-calendar-date-fill", "date-calculator.html"),
            tool("Loan / EMI Calculator", "bi-bank", "loan-emi-calculator.html"),
            tool("Interest Calculator", "bi-graph-up", "interest-calculator.html"),
            tool("Retirement Calculator", "bi-piggy-bank-fill", "retirement-calculator.html"),
            tool("Currency Converter", "bi-currency-exchange", "currency-converter.html"),
            tool("Fuel Cost Calculator", "bi-fuel-pump-fill", "fuel-cost-calculator.html"),
            tool("Unit Price Calculator", "bi-cart-fill", "unit-price-calculator.html"),
            tool("Bill Splitter", "bi-people-fill", "bill-splitter.html"),
            tool("Tip Calculator", "bi-cash", "tip-calculator.html"),
            tool("Budget Planner", "bi-wallet2", "budget-planner.html"),
            tool("Shopping List Price Estimator", "bi-basket-fill", "shopping-list-price-estimator.html"),
            tool("Electricity Bill Calculator", "bi-lightning-charge-fill", "electricity-bill-calculator.html"),
        ],
    )
}
