use crate::llm_client::prompts::labeled_line;
use crate::llm_client::{CompletionError, CompletionRequest};
use crate::models::marketing::ProductDetails;

pub const TOOL_COUNT: usize = 5;

pub fn build_tool_recommendation_prompt(
    product: &ProductDetails,
) -> Result<CompletionRequest, CompletionError> {
    let fields = [
        labeled_line("- Name", &product.name),
        labeled_line("- Category", product.category.label()),
        labeled_line("- Price", &product.price),
        labeled_line("- Description", &product.description),
    ];

    let prompt = format!(
        "A user is marketing a product with the following details:\n\n\
         {fields}\n\n\
         The product is most likely a {kind}.\n\n\
         Please recommend {TOOL_COUNT} tools that can help in promoting this product effectively in the given category. \
         Recommend specific, high-quality marketing tools that are relevant to the product type and target channel \
         (e.g., social media, email, ads, SEO).\n\n\
         Return only the names of the tools in a numbered list.",
        fields = fields.join("\n"),
        kind = product.category.product_kind_hint(),
    );

    CompletionRequest::new(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::marketing::ProductCategory;

    fn product(category: ProductCategory) -> ProductDetails {
        ProductDetails {
            name: "LaunchKit".into(),
            category,
            price: "$49/month".into(),
            description: "Landing page builder".into(),
        }
    }

    #[test]
    fn test_prompt_lists_product_fields() {
        let text = build_tool_recommendation_prompt(&product(ProductCategory::SeoTools))
            .unwrap()
            .render();
        assert!(text.contains("- Name: LaunchKit\n- Category: SEO Tools\n- Price: $49/month"));
        assert!(text.contains("- Description: Landing page builder"));
        assert!(text.contains("most likely a SaaS tool or service."));
        assert!(text.contains("recommend 5 tools"));
        assert!(text.ends_with("Return only the names of the tools in a numbered list."));
    }

    #[test]
    fn test_social_media_product_is_digital_content() {
        let text = build_tool_recommendation_prompt(&product(ProductCategory::SocialMedia))
            .unwrap()
            .render();
        assert!(text.contains("most likely a digital content (e.g., book or course)."));
    }
}
