use std::fmt;

use serde::Serialize;

use crate::change::PriceChange;
use crate::news::Article;
use crate::prices::DailyBar;

/// Placeholder used when an article carries no summary text.
const NO_DESCRIPTION: &str = "(no description)";

/// Summary of the comparison between the two most recent closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeReport {
    pub symbol: String,
    pub company: String,
    pub latest: DailyBar,
    pub previous: DailyBar,
    pub change: PriceChange,
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company: {} ({})", self.company, self.symbol)?;
        writeln!(
            f,
            "Latest close on {}: {:.2}",
            self.latest.date, self.latest.close
        )?;
        writeln!(
            f,
            "Previous close on {}: {:.2}",
            self.previous.date, self.previous.close
        )?;
        writeln!(
            f,
            "Percentage difference: {:.2}% {} ({:+.2})",
            self.change.percent,
            self.change.direction().arrow(),
            self.change.delta
        )
    }
}

/// Renders one SMS body per article, in the order given.
#[must_use]
pub fn message_bodies(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .map(|a| {
            format!(
                "Headline: {}\nDescription: {}",
                a.title,
                a.description.as_deref().unwrap_or(NO_DESCRIPTION)
            )
        })
        .collect()
}
