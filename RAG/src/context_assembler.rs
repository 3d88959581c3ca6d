use crate::models::RetrievalResultItem;

pub const NO_CONTEXT: &str = "No relevant information found in the documents.";
const UNKNOWN_TITLE: &str = "Unknown Document";

/// Concatenates DOCUMENT results, in the order given, into the context block
/// embedded in the prompt. Nothing is truncated, deduplicated or re-ranked.
pub fn build_context(items: &[RetrievalResultItem]) -> String {
    let mut context = String::new();
    let mut documents = 0;

    for item in items.iter().filter(|item| item.is_document()) {
        let title = item.document_title.as_deref().unwrap_or(UNKNOWN_TITLE);
        let excerpt = item.document_excerpt.as_deref().unwrap_or_default();
        context.push_str(&format!("Document: {}\nExcerpt: {}\n\n", title, excerpt));
        documents += 1;
    }

    if context.is_empty() {
        log::info!("No document results among {} result items", items.len());
        return NO_CONTEXT.to_string();
    }

    log::info!(
        "Assembled context from {} documents ({} chars)",
        documents,
        context.chars().count()
    );
    context
}
