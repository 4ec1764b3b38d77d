//! Cow registry queries: search, filtering and lookups.

use log::debug;

use crate::backend::domain::commands::herd::CowFilterQuery;
use crate::backend::domain::models::cow::Cow;

#[derive(Clone, Default)]
pub struct HerdService;

impl HerdService {
    pub fn new() -> Self {
        Self
    }

    /// Apply the registry screen's filter: optional gender, then a
    /// case-insensitive substring match over name, tag id and breed.
    /// Herd order is preserved.
    pub fn filter_cows(&self, cows: &[Cow], query: &CowFilterQuery) -> Vec<Cow> {
        let search = query.search.trim().to_lowercase();
        let matches: Vec<Cow> = cows
            .iter()
            .filter(|cow| match query.gender {
                Some(gender) => cow.gender == gender,
                None => true,
            })
            .filter(|cow| {
                search.is_empty()
                    || cow.name.to_lowercase().contains(&search)
                    || cow.tag_id.to_lowercase().contains(&search)
                    || cow.breed.to_lowercase().contains(&search)
            })
            .cloned()
            .collect();

        debug!("cow filter matched {} of {} cows", matches.len(), cows.len());
        matches
    }

    /// The animals that appear on the milk entry form and in per-cow reports.
    pub fn milking_cows(&self, cows: &[Cow]) -> Vec<Cow> {
        cows.iter().filter(|cow| cow.is_milking()).cloned().collect()
    }

    pub fn find_cow<'a>(&self, cows: &'a [Cow], cow_id: &str) -> Option<&'a Cow> {
        cows.iter().find(|cow| cow.id == cow_id)
    }
}
