use anyhow::{Context, Result};

use crate::blog::Blog;
use crate::cli::StatsArgs;
use crate::stats::StatsSummary;

pub fn execute_stats(args: StatsArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file))?;
    let summary = summarize_json(&content, args.author.as_deref())
        .with_context(|| format!("Failed to parse blogs from {}", args.file))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Parse a JSON array of blogs and aggregate it.
pub fn summarize_json(content: &str, author: Option<&str>) -> Result<StatsSummary> {
    let mut blogs: Vec<Blog> = serde_json::from_str(content)?;
    if let Some(author) = author {
        blogs.retain(|b| b.author.as_deref() == Some(author));
    }
    Ok(StatsSummary::from_blogs(&blogs))
}
