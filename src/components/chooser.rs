use dialoguer::{Input, Select};

use crate::models::SearchResult;

pub const NOT_FOUND: &str = "Not Found";

/// The interactive side of a search session.
pub trait Chooser {
    fn keyword(&self) -> anyhow::Result<String>;

    /// Index into `results`, or `None` when the user picked [`NOT_FOUND`].
    fn choose(&self, results: &[SearchResult]) -> anyhow::Result<Option<usize>>;
}

/// Labels shown to the user, with the `Not Found` sentinel last.
pub fn choices(results: &[SearchResult]) -> Vec<String> {
    results
        .iter()
        .map(|result| result.text.clone())
        .chain(std::iter::once(NOT_FOUND.to_string()))
        .collect()
}

/// Maps a picked position in [`choices`] back to a result index.
pub fn selected(results: &[SearchResult], picked: usize) -> Option<usize> {
    if picked < results.len() {
        Some(picked)
    } else {
        None
    }
}

/// Terminal prompts.
pub struct PromptChooser;

impl Chooser for PromptChooser {
    fn keyword(&self) -> anyhow::Result<String> {
        let keyword = Input::<String>::new()
            .with_prompt("Enter title/keyword to search on LNDB.info")
            .interact_text()?;

        Ok(keyword)
    }

    fn choose(&self, results: &[SearchResult]) -> anyhow::Result<Option<usize>> {
        let picked = Select::new()
            .with_prompt("Select Novel")
            .items(&choices(results))
            .default(0)
            .interact()?;

        Ok(selected(results, picked))
    }
}

#[cfg(test)]
mod tests {
    use super::{choices, selected};
    use crate::models::SearchResult;

    fn results() -> Vec<SearchResult> {
        ["A", "B"]
            .iter()
            .map(|text| SearchResult {
                text: text.to_string(),
                url: format!("/light_novel/{}", text),
            })
            .collect()
    }

    #[test]
    fn not_found_is_last_choice() {
        assert_eq!(vec!["A", "B", "Not Found"], choices(&results()));
        assert_eq!(vec!["Not Found"], choices(&[]));
    }

    #[test]
    fn sentinel_maps_to_none() {
        let results = results();

        assert_eq!(Some(1), selected(&results, 1));
        assert_eq!(None, selected(&results, 2));
    }
}
