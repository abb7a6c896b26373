// src/aggregator/stats.rs
//! Pure statistics over a sequence of blog records.

use serde::Serialize;
use std::collections::HashMap;

use super::EmptyInputError;
use crate::blog::BlogRecord;

/// Projection of the most liked record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: i64,
}

/// Author with the largest number of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostBlogs {
    pub author: Option<String>,
    pub blogs: usize,
}

/// Author with the largest like total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostLikes {
    pub author: Option<String>,
    pub likes: i128,
}

/// Per-author post count and like sum. Sums are `i128` so no run of `i64` likes can overflow.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorTally {
    pub count: usize,
    pub total_likes: i128,
}

impl AuthorTally {
    pub fn accumulate(&mut self, record: &BlogRecord<'_>) {
        self.count += 1;
        self.total_likes += i128::from(record.likes);
    }
}

/// Author tallies in order of each author's first appearance.
///
/// Authors are compared by exact text; a missing author is its own key.
#[derive(Default, Debug)]
pub struct AuthorTallies<'a> {
    index: HashMap<Option<&'a str>, usize>,
    tallies: Vec<(Option<&'a str>, AuthorTally)>,
}

impl<'a> AuthorTallies<'a> {
    pub fn from_records(records: &[BlogRecord<'a>]) -> Self {
        let mut tallies = Self::default();
        for record in records {
            tallies.accumulate(record);
        }
        tallies
    }

    pub fn accumulate(&mut self, record: &BlogRecord<'a>) {
        let slot = match self.index.get(&record.author) {
            Some(&slot) => slot,
            None => {
                self.tallies.push((record.author, AuthorTally::default()));
                self.index.insert(record.author, self.tallies.len() - 1);
                self.tallies.len() - 1
            }
        };
        self.tallies[slot].1.accumulate(record);
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    pub fn get(&self, author: Option<&str>) -> Option<AuthorTally> {
        self.index.get(&author).map(|&slot| self.tallies[slot].1)
    }

    /// First author whose key is strictly greater than every earlier one.
    fn max_by_key<K: Ord>(
        &self,
        key: impl Fn(&AuthorTally) -> K,
    ) -> Option<(Option<&'a str>, AuthorTally)> {
        let mut best: Option<(Option<&'a str>, AuthorTally)> = None;
        for &(author, tally) in &self.tallies {
            match best {
                Some((_, current)) if key(&tally) <= key(&current) => {}
                _ => best = Some((author, tally)),
            }
        }
        best
    }
}

/// Sum of likes across all records. Zero for an empty sequence.
pub fn total_likes(records: &[BlogRecord<'_>]) -> i128 {
    records.iter().map(|r| i128::from(r.likes)).sum()
}

/// The record with the most likes; the earliest one wins a tie.
pub fn favorite_blog(records: &[BlogRecord<'_>]) -> Result<FavoriteBlog, EmptyInputError> {
    let mut iter = records.iter();
    let mut best = iter.next().ok_or(EmptyInputError)?;
    for record in iter {
        if record.likes > best.likes {
            best = record;
        }
    }

    Ok(FavoriteBlog {
        title: best.title.to_string(),
        author: best.author.map(str::to_string),
        likes: best.likes,
    })
}

/// The author with the most posts; the first author to reach the maximum wins a tie.
pub fn most_blogs(records: &[BlogRecord<'_>]) -> Result<MostBlogs, EmptyInputError> {
    let tallies = AuthorTallies::from_records(records);
    let (author, tally) = tallies.max_by_key(|t| t.count).ok_or(EmptyInputError)?;

    Ok(MostBlogs {
        author: author.map(str::to_string),
        blogs: tally.count,
    })
}

/// The author with the highest like total; the first author to reach the maximum wins a tie.
pub fn most_likes(records: &[BlogRecord<'_>]) -> Result<MostLikes, EmptyInputError> {
    let tallies = AuthorTallies::from_records(records);
    let (author, tally) = tallies
        .max_by_key(|t| t.total_likes)
        .ok_or(EmptyInputError)?;

    Ok(MostLikes {
        author: author.map(str::to_string),
        likes: tally.total_likes,
    })
}
