//! Pool standings derived from computed statuses.
//!
//! Survivors rank above eliminated participants. Survivors are ordered by
//! lives remaining, then wins. Eliminated participants are ordered by how
//! late they went out. Equal records share a rank (1, 1, 3).

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::status::{CalculatedStatus, RoundOutcome};

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing<K> {
    /// 1-based rank. Ties share a rank.
    pub rank: usize,
    pub participant: K,
    pub lives_remaining: u32,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub no_picks: usize,
    pub eliminated_at_round: Option<String>,
}

/// Sort key: higher is better.
fn record_key(status: &CalculatedStatus) -> (bool, u32, usize, usize) {
    match status.eliminated_round_index() {
        None if !status.is_eliminated => {
            (true, status.lives_remaining, status.count(RoundOutcome::Win), 0)
        }
        index => (false, 0, 0, index.unwrap_or(0)),
    }
}

/// Rank participants. Ties are listed in participant order.
pub fn standings<'a, K, I>(statuses: I) -> Vec<Standing<K>>
where
    K: Ord + Clone + 'a,
    I: IntoIterator<Item = (&'a K, &'a CalculatedStatus)>,
{
    let mut rows: Vec<_> = statuses
        .into_iter()
        .map(|(participant, status)| (record_key(status), participant, status))
        .collect();
    rows.sort_by(|a, b| Reverse(a.0).cmp(&Reverse(b.0)).then_with(|| a.1.cmp(b.1)));

    let mut table: Vec<Standing<K>> = Vec::with_capacity(rows.len());
    let mut previous_key = None;
    let mut rank = 0;

    for (position, (key, participant, status)) in rows.into_iter().enumerate() {
        if previous_key != Some(key) {
            rank = position + 1;
            previous_key = Some(key);
        }
        table.push(Standing {
            rank,
            participant: participant.clone(),
            lives_remaining: status.lives_remaining,
            wins: status.count(RoundOutcome::Win),
            draws: status.count(RoundOutcome::Draw),
            losses: status.count(RoundOutcome::Loss),
            no_picks: status.count(RoundOutcome::NoPick),
            eliminated_at_round: status.eliminated_at_round.clone(),
        });
    }

    table
}
