//! Batch evaluation tests.
//!
//! These tests verify that batch mode fetches each round once and returns
//! exactly what single-participant evaluation returns.

use std::cell::Cell;
use std::collections::HashMap;

use survivor_pool::core::{Competition, FixtureId, LeagueId, PoolConfig, TeamId};
use survivor_pool::elimination::{
    evaluate_with_fixtures, standings, RoundFixtureMap, RoundOutcome, SurvivorEngine,
};
use survivor_pool::fixtures::{
    parse_fixtures_response, FetchError, Fixture, FixtureSide, FixtureSource, FixtureStatus,
    FnFixtures, StaticFixtures,
};
use survivor_pool::picks::Pick;
use survivor_pool::rounds::Round;

fn fixture(id: u64, round: &str, code: &str, home_won: Option<bool>) -> Fixture {
    Fixture::new(
        FixtureId::new(id),
        round,
        FixtureStatus::from_code(code),
        FixtureSide::new(TeamId::new(id * 10)).with_winner(home_won),
        FixtureSide::new(TeamId::new(id * 10 + 1)).with_winner(home_won.map(|won| !won)),
    )
}

fn home(id: u64, round: &str) -> Pick {
    Pick::new(FixtureId::new(id), round, TeamId::new(id * 10))
}

fn away(id: u64, round: &str) -> Pick {
    Pick::new(FixtureId::new(id), round, TeamId::new(id * 10 + 1))
}

/// A three-round season: R1 finished, R2 half played, R3 not started.
fn season() -> (StaticFixtures, Vec<Round>) {
    let fixtures = StaticFixtures::from_fixtures(vec![
        fixture(1, "R1", "FT", Some(true)),
        fixture(2, "R1", "FT", None),
        fixture(3, "R2", "FT", Some(false)),
        fixture(4, "R2", "2H", None),
        fixture(5, "R3", "NS", None),
        fixture(6, "R3", "NS", None),
    ]);
    let rounds = vec![Round::new("R1"), Round::new("R2"), Round::new("R3")];
    (fixtures, rounds)
}

fn participants() -> HashMap<&'static str, Vec<Pick>> {
    let mut picks = HashMap::new();
    picks.insert("winner", vec![home(1, "R1"), away(3, "R2"), home(5, "R3")]);
    picks.insert("drawer", vec![home(2, "R1"), home(4, "R2")]);
    picks.insert("loser", vec![away(1, "R1"), home(3, "R2")]);
    picks.insert("idle", Vec::new());
    picks.insert("dangling", vec![home(99, "R1")]);
    picks
}

/// Source that counts fetches per round.
struct CountingSource {
    inner: StaticFixtures,
    calls: Cell<usize>,
}

impl FixtureSource for CountingSource {
    fn round_fixtures(
        &self,
        competition: &Competition,
        round: &str,
    ) -> Result<Vec<Fixture>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.round_fixtures(competition, round)
    }
}

#[test]
fn test_batch_matches_single() {
    let (fixtures, rounds) = season();
    let engine = SurvivorEngine::new(fixtures, PoolConfig::default().with_lives(2)).unwrap();
    let picks = participants();

    let batch = engine.evaluate_batch(&picks, &rounds);

    assert_eq!(batch.len(), picks.len());
    for (participant, participant_picks) in &picks {
        let single = engine.evaluate(participant_picks, &rounds);
        assert_eq!(batch[&participant], single, "{participant}");
    }
}

#[test]
fn test_batch_results() {
    let (fixtures, rounds) = season();
    let engine = SurvivorEngine::new(fixtures, PoolConfig::default().with_lives(2)).unwrap();
    let batch = engine.evaluate_batch(participants(), &rounds);

    let winner = &batch["winner"];
    assert_eq!(winner.lives_remaining, 2);
    assert_eq!(winner.count(RoundOutcome::Win), 2);
    assert_eq!(winner.round_results[2].result, RoundOutcome::Pending);

    let drawer = &batch["drawer"];
    assert_eq!(drawer.round_results[0].result, RoundOutcome::Draw);
    assert_eq!(drawer.round_results[1].result, RoundOutcome::Pending);
    assert_eq!(drawer.lives_remaining, 2);

    let loser = &batch["loser"];
    assert!(loser.is_eliminated);
    assert_eq!(loser.eliminated_at_round.as_deref(), Some("R2"));

    // R1 finished without a pick, R2 under way without a pick.
    let idle = &batch["idle"];
    assert_eq!(idle.eliminated_at_round.as_deref(), Some("R2"));
    assert_eq!(idle.round_results[1].result, RoundOutcome::NoPick);

    let dangling = &batch["dangling"];
    assert_eq!(dangling.round_results[0].result, RoundOutcome::Loss);
}

#[test]
fn test_batch_fetch_count_independent_of_participants() {
    let (inner, rounds) = season();

    for count in [1usize, 10, 200] {
        let source = CountingSource {
            inner: inner.clone(),
            calls: Cell::new(0),
        };
        let engine = SurvivorEngine::new(&source, PoolConfig::default().with_lives(3)).unwrap();
        let picks: Vec<(usize, Vec<Pick>)> =
            (0..count).map(|id| (id, vec![home(1, "R1")])).collect();

        let (statuses, stats) = engine.evaluate_batch_with_stats(picks, &rounds);

        assert_eq!(statuses.len(), count);
        assert_eq!(source.calls.get(), rounds.len());
        assert_eq!(stats.rounds_fetched, rounds.len());
        assert_eq!(stats.participants, count);
    }
}

#[test]
fn test_batch_with_duplicate_round_names() {
    let (inner, _) = season();
    let source = CountingSource {
        inner,
        calls: Cell::new(0),
    };
    let engine = SurvivorEngine::new(&source, PoolConfig::default()).unwrap();
    let rounds = vec![Round::new("R1"), Round::new("R1"), Round::new("R3")];

    let (_, stats) = engine.evaluate_batch_with_stats(vec![(1u8, vec![home(1, "R1")])], &rounds);

    assert_eq!(source.calls.get(), 2);
    assert_eq!(stats.rounds_requested, 3);
    assert_eq!(stats.rounds_fetched, 2);
}

/// A round enrolled twice can be where a participant goes out the second time.
#[test]
fn test_standings_with_repeated_round_name() {
    let source = StaticFixtures::from_fixtures(vec![
        fixture(1, "R1", "FT", Some(true)),
        fixture(2, "R2", "FT", Some(true)),
    ]);
    let engine = SurvivorEngine::new(source, PoolConfig::default().with_lives(2)).unwrap();
    let rounds = vec![Round::new("R1"), Round::new("R2"), Round::new("R1")];

    let mut picks = HashMap::new();
    picks.insert("late", vec![away(1, "R1"), home(2, "R2")]);
    picks.insert("early", vec![away(1, "R1"), away(2, "R2")]);

    let statuses = engine.evaluate_batch(&picks, &rounds);

    let late = &statuses[&"late"];
    assert_eq!(late.eliminated_at_round.as_deref(), Some("R1"));
    assert_eq!(late.eliminated_round_index(), Some(2));
    assert_eq!(statuses[&"early"].eliminated_round_index(), Some(1));

    let table = standings(&statuses);
    assert_eq!(*table[0].participant, "late");
    assert_eq!(table[0].rank, 1);
    assert_eq!(*table[1].participant, "early");
    assert_eq!(table[1].rank, 2);
}

#[test]
fn test_batch_empty_participants() {
    let (fixtures, rounds) = season();
    let engine = SurvivorEngine::new(fixtures, PoolConfig::default()).unwrap();

    let nobody = Vec::<(u32, Vec<Pick>)>::new();
    let (statuses, stats) = engine.evaluate_batch_with_stats(nobody, &rounds);

    assert!(statuses.is_empty());
    assert_eq!(stats.participants, 0);
    assert_eq!(stats.survival_rate(), 0.0);
}

#[test]
fn test_failed_round_never_costs_a_life() {
    let source = FnFixtures::new(|_: &Competition, round: &str| match round {
        "R1" => Ok(vec![fixture(1, "R1", "FT", Some(true))]),
        _ => Err(FetchError::Unavailable("provider down".to_string())),
    });
    let engine = SurvivorEngine::new(source, PoolConfig::default()).unwrap();
    let rounds = vec![Round::new("R1"), Round::new("R2")];
    let picks = vec![(1u32, vec![home(1, "R1")]), (2u32, vec![home(1, "R1")])];

    let (statuses, stats) = engine.evaluate_batch_with_stats(picks, &rounds);

    assert_eq!(stats.fetch_failures, 1);
    assert_eq!(stats.eliminated, 0);
    for status in statuses.values() {
        assert_eq!(status.round_results[1].result, RoundOutcome::Pending);
        assert_eq!(status.lives_remaining, 1);
    }
}

#[test]
fn test_evaluate_with_prefetched_fixtures() {
    let (source, rounds) = season();
    let competition = Competition::new(LeagueId::new(39), 2024);
    let fixtures = RoundFixtureMap::prefetch(&source, &competition, &rounds);

    let statuses = evaluate_with_fixtures(participants(), &rounds, 2, &fixtures);
    let engine = SurvivorEngine::new(source, PoolConfig::default().with_lives(2)).unwrap();

    assert_eq!(statuses["loser"], engine.evaluate(&participants()["loser"], &rounds));
}

#[test]
fn test_batch_from_provider_json() {
    let body = r#"{"response": [
        {"fixture": {"id": 11, "status": {"short": "FT"}},
         "league": {"round": "Regular Season - 1"},
         "teams": {"home": {"id": 50, "name": "Man City", "winner": true},
                   "away": {"id": 65, "name": "Forest", "winner": false}}},
        {"fixture": {"id": 12, "status": {"short": "FT"}},
         "league": {"round": "Regular Season - 1"},
         "teams": {"home": {"id": 40, "name": "Liverpool", "winner": null},
                   "away": {"id": 42, "name": "Arsenal", "winner": null}}}
    ]}"#;
    let source = StaticFixtures::from_fixtures(parse_fixtures_response(body).unwrap());
    let engine = SurvivorEngine::new(source, PoolConfig::default()).unwrap();
    let rounds = vec![Round::new("Regular Season - 1")];

    let week_one = |fixture: u64, team: u64| {
        vec![Pick::new(FixtureId::new(fixture), "Regular Season - 1", TeamId::new(team))]
    };
    let mut picks = HashMap::new();
    picks.insert("city", week_one(11, 50));
    picks.insert("forest", week_one(11, 65));
    picks.insert("arsenal", week_one(12, 42));

    let statuses = engine.evaluate_batch(&picks, &rounds);
    let table = standings(&statuses);

    assert_eq!(statuses[&"city"].round_results[0].result, RoundOutcome::Win);
    assert_eq!(statuses[&"arsenal"].round_results[0].result, RoundOutcome::Draw);
    assert!(statuses[&"forest"].is_eliminated);

    assert_eq!(*table[0].participant, "city");
    assert_eq!(*table[1].participant, "arsenal");
    assert_eq!(table[2].rank, 3);
}
