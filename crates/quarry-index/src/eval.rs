//! Query evaluation against the index.

use std::collections::HashMap;

use quarry_query::Query;

use crate::{
    DocId,
    index::{InvertedIndex, PostingsMap},
};

/// Returns the documents satisfying every atom of `query`.
///
/// Candidates are seeded from the term with the fewest documents and
/// narrowed through the remaining terms before any positional work
/// happens; each phrase then keeps only candidates where its terms
/// occur at consecutive positions. Result order is unspecified;
/// entries are unique because candidates are posting-map keys.
pub(crate) fn execute(query: &Query, index: &InvertedIndex) -> Vec<DocId> {
    // Resolve every distinct term up front; a single absent term
    // empties the whole conjunction.
    let mut by_term: HashMap<&str, &PostingsMap> = HashMap::new();
    for term in query.distinct_terms() {
        match index.postings(term) {
            Some(map) => {
                by_term.insert(term, map);
            }
            None => return Vec::new(),
        }
    }

    let mut maps: Vec<&PostingsMap> = by_term.values().copied().collect();
    maps.sort_by_key(|map| map.len());
    let Some((seed, rest)) = maps.split_first() else {
        return Vec::new();
    };

    let mut candidates: Vec<&DocId> = seed
        .keys()
        .filter(|doc| rest.iter().all(|map| map.contains_key(*doc)))
        .collect();

    for phrase in &query.phrases {
        if candidates.is_empty() {
            break;
        }
        let lists: Option<Vec<&PostingsMap>> = phrase
            .iter()
            .map(|term| by_term.get(term.as_str()).copied())
            .collect();
        match lists {
            Some(lists) => candidates.retain(|doc| phrase_matches(doc, &lists)),
            None => return Vec::new(),
        }
    }

    candidates.into_iter().cloned().collect()
}

/// Returns true if the phrase whose per-term postings are `lists`
/// occurs contiguously in `doc`.
///
/// One advancing cursor per follower term: for each occurrence `start`
/// of the first term, cursor `i` advances to the first position ≥
/// `start + i + 1` and the phrase matches when every cursor lands
/// exactly there. Starts ascend, so cursors never move backwards and
/// the walk is linear in the total posting length.
fn phrase_matches(doc: &DocId, lists: &[&PostingsMap]) -> bool {
    let mut positions = Vec::with_capacity(lists.len());
    for map in lists {
        match map.get(doc) {
            Some(list) => positions.push(list.as_slice()),
            None => return false,
        }
    }
    let Some((first, followers)) = positions.split_first() else {
        return false;
    };

    let mut cursors = vec![0usize; followers.len()];
    'starts: for &start in *first {
        for (i, list) in followers.iter().enumerate() {
            let target = start + i + 1;
            let cursor = &mut cursors[i];
            while *cursor < list.len() && list[*cursor] < target {
                *cursor += 1;
            }
            match list.get(*cursor) {
                // Exhausted follower: later starts only need larger
                // targets, so nothing can match anymore.
                None => return false,
                Some(&position) if position == target => {}
                Some(_) => continue 'starts,
            }
        }
        return true;
    }
    false
}
