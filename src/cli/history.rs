//! Query history command handlers.

use anyhow::Result;

use lukman::LukmanClient;

use super::render_advice;

/// List a page of past queries.
pub(crate) async fn cmd_history(client: &LukmanClient, limit: u32, offset: u32) -> Result<()> {
    let page = client.get_history(limit, offset).await?;
    if page.queries.is_empty() {
        println!("No queries found.");
        return Ok(());
    }

    let first = u64::from(offset) + 1;
    let last = u64::from(offset) + page.queries.len() as u64;
    println!("Showing {}-{} of {} queries:", first, last, page.total);
    for item in &page.queries {
        println!(
            "- #{} | {} | {}",
            item.id,
            item.created_at.format("%Y-%m-%d %H:%M"),
            truncate(&item.question, 60)
        );
    }

    if last < page.total {
        println!();
        println!(
            "Next page: lukman history --limit {} --offset {}",
            limit, last
        );
    }
    Ok(())
}

/// Display one past query with its stored advice.
pub(crate) async fn cmd_show(client: &LukmanClient, id: i64) -> Result<()> {
    let item = client.get_query_by_id(id).await?;

    println!("Query #{}", item.id);
    println!("Asked:  {}", item.created_at.format("%Y-%m-%d %H:%M:%S"));
    if let Some(age) = item.age {
        println!("Age:    {age}");
    }
    if let Some(gender) = &item.gender {
        println!("Gender: {gender}");
    }
    println!("Model:  {}", item.ai_model);
    println!();
    println!("{}", item.question);
    println!();
    render_advice(&item.advice);
    Ok(())
}

/// Shorten a question for one-line listing output.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Kelläm agyrýar", 60), "Kelläm agyrýar");
    }

    #[test]
    fn test_truncate_long_text_char_safe() {
        let long = "ý".repeat(80);
        let short = truncate(&long, 60);
        assert_eq!(short.chars().count(), 61); // 60 kept + ellipsis
        assert!(short.ends_with('…'));
    }
}
