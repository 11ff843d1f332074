// Local-insights prompt: products as an object array, then trends as a string array.
// The extractor relies on that order.

use crate::llm_client::CompletionRequest;
use crate::llm_client::CompletionError;

pub const PRODUCT_COUNT: usize = 6;
pub const TREND_COUNT: usize = 6;

/// Replace `{place}`, `{product_count}` and `{trend_count}` before sending.
pub const LOCAL_INSIGHTS_PROMPT_TEMPLATE: &str = r#"You are an AI marketing assistant.

1. Recommend {product_count} trending products available in {place}. Each product should include:
- name
- category

Format it as a JSON array like this:
[
  {
    "name": "Product A",
    "category": "Electronics"
  }
]

2. Then provide {trend_count} upcoming marketing trends in {place} as a JSON array of strings."#;

pub fn build_local_insights_prompt(
    city: &str,
    country: &str,
) -> Result<CompletionRequest, CompletionError> {
    let place = match country.trim() {
        "" => city.trim().to_string(),
        country => format!("{}, {country}", city.trim()),
    };
    let prompt = LOCAL_INSIGHTS_PROMPT_TEMPLATE
        .replace("{product_count}", &PRODUCT_COUNT.to_string())
        .replace("{trend_count}", &TREND_COUNT.to_string())
        .replace("{place}", &place);
    CompletionRequest::new(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_place_twice_and_shapes() {
        let request = build_local_insights_prompt("Pune", "India").unwrap();
        let text = request.render();
        assert_eq!(text.matches("Pune, India").count(), 2);
        assert!(text.contains("JSON array of strings"));
        assert!(text.contains("\"category\": \"Electronics\""));
        assert!(!text.contains("{place}"));
        assert!(text.contains("Recommend 6 trending products"));
        assert!(request.style_directives().is_empty());
    }

    #[test]
    fn test_prompt_without_country() {
        let text = build_local_insights_prompt("Lisbon", "").unwrap().render();
        assert!(text.contains("available in Lisbon."));
    }

    #[test]
    fn test_products_are_requested_before_trends() {
        let text = build_local_insights_prompt("Pune", "India").unwrap().render();
        let products = text.find("trending products").unwrap();
        let trends = text.find("marketing trends").unwrap();
        assert!(products < trends);
    }
}
