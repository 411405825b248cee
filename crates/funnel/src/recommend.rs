//! Product recommendation
//!
//! Scores every catalog product against the accumulated shopper profile and
//! keeps the best. Pure over its inputs; the sort is stable, so catalog order
//! breaks ties.

use once_cell::sync::Lazy;
use regex::Regex;
use sales_agent_core::{Product, ScoredProduct, UserProfile};

static BUDGET_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?(\d+)").expect("budget pattern compiles"));

/// Score the catalog and return the top `limit` products, best first
pub fn recommend(
    user_data: &UserProfile,
    tags: &[String],
    products: &[Product],
    limit: usize,
) -> Vec<ScoredProduct> {
    let budget = user_data.budget.clone().or_else(|| {
        tags.iter()
            .find_map(|tag| tag.strip_prefix("budget:").map(str::to_string))
    });

    let mut scored: Vec<ScoredProduct> = products
        .iter()
        .map(|product| ScoredProduct {
            product: product.clone(),
            recommendation_score: score_product(product, user_data, budget.as_deref()),
        })
        .collect();

    scored.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));
    scored.truncate(limit);
    scored
}

fn score_product(product: &Product, user_data: &UserProfile, budget: Option<&str>) -> u32 {
    let mut score = 0;
    let haystack = format!(
        "{} {} {}",
        product.title, product.description, product.product_type
    )
    .to_lowercase();

    for interest in &user_data.interests {
        if haystack.contains(&interest.to_lowercase()) {
            score += 3;
        }
    }
    if let Some(preferences) = &user_data.preferences {
        if haystack.contains(&preferences.to_lowercase()) {
            score += 4;
        }
    }

    if let Some(budget) = budget {
        score += budget_bonus(budget, product.price);
    }

    // Higher-margin items get a nudge when everything else is equal
    if product.price > 100.0 {
        score += 1;
    }
    if product.price > 500.0 {
        score += 1;
    }

    score
}

fn budget_bonus(budget: &str, price: f64) -> u32 {
    let budget = budget.to_lowercase();
    if budget.contains("premium") || budget.contains("high-end") {
        return if price > 200.0 { 2 } else { 0 };
    }
    if budget.contains("affordable") || budget.contains("budget") {
        return if price < 100.0 { 2 } else { 0 };
    }
    if budget.contains("mid-range") || budget.contains("medium") {
        return if (50.0..=200.0).contains(&price) { 2 } else { 0 };
    }
    if let Some(amount) = BUDGET_AMOUNT
        .captures(&budget)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
    {
        if price <= amount {
            return 2;
        }
        if price <= amount * 1.2 {
            return 1;
        }
    }
    0
}
