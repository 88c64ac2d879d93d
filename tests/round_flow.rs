//! End-to-end round flow tests: commit -> reveal -> resolve -> settle

use ceelo::{
    compare, Chips, Config, Error, GameConfig, HouseEdge, Outcome, PendingSeed, PvpRound, Round,
    RoundOrdering, SeedCommit, SeedReveal,
};

const ALICE: [u8; 32] = [1u8; 32];
const BOB: [u8; 32] = [2u8; 32];

#[test]
fn test_house_round_full_flow() {
    // Server generates and commits before the round runs
    let pending = PendingSeed::generate();
    let commitment = pending.commitment();

    let commit = SeedCommit::from_commitment(ALICE, 1, commitment);
    let round = Round::new(commit);

    // Reveal after bets are locked
    let reveal = pending.into_reveal(ALICE, 1);
    let result = round.reveal(&reveal).unwrap();

    // The published record replays cleanly
    assert_eq!(result.commitment, commitment);
    assert!(result.verify());

    // Terminal outcomes settle; non-terminal ones are refused
    let edge = HouseEdge::from_fraction(0.03).unwrap();
    let stake = Chips::new(1_000).unwrap();
    match result.outcome {
        Outcome::Win { .. } => {
            let settlement = result.settle(stake, edge).unwrap();
            assert_eq!(
                settlement.payout.amount() as i128,
                stake.amount() as i128 + settlement.profit
            );
        }
        Outcome::Lose => {
            let settlement = result.settle(stake, edge).unwrap();
            assert_eq!(settlement.payout.amount(), 0);
            assert_eq!(settlement.profit, -(stake.amount() as i128));
        }
        Outcome::Point { .. } | Outcome::Reroll => {
            assert!(result.settle(stake, edge).is_err());
        }
    }
}

#[test]
fn test_substituted_seed_is_rejected_and_detectable() {
    let commit = SeedCommit::new(ALICE, 2, b"the committed seed");
    let round = Round::new(commit);

    let substituted = SeedReveal::new(ALICE, 2, b"a more favorable seed".to_vec());
    match round.reveal(&substituted) {
        Err(Error::CommitmentMismatch { round_id }) => assert_eq!(round_id, 2),
        other => panic!("expected CommitmentMismatch, got {:?}", other),
    }

    // The honest reveal still goes through afterwards: the engine
    // surfaced the failure, the session layer decides what to do with it
    let honest = SeedReveal::new(ALICE, 2, b"the committed seed".to_vec());
    assert!(round.reveal(&honest).is_ok());
}

#[test]
fn test_replay_reproduces_identical_results() {
    let commit = SeedCommit::new(ALICE, 3, b"replay seed");
    let reveal = SeedReveal::new(ALICE, 3, b"replay seed".to_vec());

    let first = Round::new(commit.clone()).reveal(&reveal).unwrap();
    let second = Round::new(commit).reveal(&reveal).unwrap();

    assert_eq!(first.dice, second.dice);
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn test_pvp_round_choreography() {
    let commit_a = SeedCommit::new(ALICE, 7, b"alice entropy");
    let commit_b = SeedCommit::new(BOB, 7, b"bob entropy");
    let mut round = PvpRound::new(commit_a, commit_b).unwrap();

    round
        .reveal(&SeedReveal::new(BOB, 7, b"bob entropy".to_vec()))
        .unwrap();
    round
        .reveal(&SeedReveal::new(ALICE, 7, b"alice entropy".to_vec()))
        .unwrap();

    let result = round.resolve().unwrap();
    assert_eq!(result.ordering, compare(&result.a.outcome, &result.b.outcome));
    assert!(result.a.verify());
    assert!(result.b.verify());

    // Resolution is pure; resolving again yields the same answer
    let again = round.resolve().unwrap();
    assert_eq!(result.ordering, again.ordering);
    assert_eq!(result.a.dice, again.a.dice);
}

#[test]
fn test_pvp_double_reroll_needs_redo() {
    // Hunt for two seeds that both resolve to Reroll, then confirm the
    // round reports a redo instead of scoring the tie
    let mut found = None;
    'outer: for i in 0..500u32 {
        for j in 0..500u32 {
            if i == j {
                continue;
            }
            let seed_a = format!("redo-a-{}", i).into_bytes();
            let seed_b = format!("redo-b-{}", j).into_bytes();
            let out_a = ceelo::resolve(ceelo::derive(&seed_a)).unwrap();
            let out_b = ceelo::resolve(ceelo::derive(&seed_b)).unwrap();
            if out_a == Outcome::Reroll && out_b == Outcome::Reroll {
                found = Some((seed_a, seed_b));
                break 'outer;
            }
        }
    }
    let (seed_a, seed_b) = found.expect("no double-reroll pair in search space");

    let mut round = PvpRound::new(
        SeedCommit::new(ALICE, 8, &seed_a),
        SeedCommit::new(BOB, 8, &seed_b),
    )
    .unwrap();
    round
        .reveal(&SeedReveal::new(ALICE, 8, seed_a))
        .unwrap();
    round
        .reveal(&SeedReveal::new(BOB, 8, seed_b))
        .unwrap();

    let result = round.resolve().unwrap();
    assert_eq!(result.ordering, RoundOrdering::Tie);
    assert!(result.needs_redo());
}

#[test]
fn test_reroll_chain_until_scoreable() {
    // A table keeps re-deriving with the next index until a hand scores;
    // the whole chain replays from the one revealed seed
    let seed = b"chain seed";
    let mut index = 0u64;
    let outcome = loop {
        let dice = ceelo::derive_indexed(seed, index);
        let outcome = ceelo::resolve(dice).unwrap();
        if outcome != Outcome::Reroll {
            break outcome;
        }
        index += 1;
        assert!(index < 1_000, "reroll chain failed to terminate");
    };
    assert_ne!(outcome, Outcome::Reroll);

    // Replay lands on the same roll at the same index
    let replayed = ceelo::resolve(ceelo::derive_indexed(seed, index)).unwrap();
    assert_eq!(outcome, replayed);
}

#[test]
fn test_stake_limits_gate_settlement() {
    let config = Config::development();
    let game = GameConfig {
        min_bet: 100,
        max_bet: 10_000,
        ..config.game
    };

    assert!(ceelo::gaming::round::validate_stake(Chips::new(100).unwrap(), &game).is_ok());
    assert!(ceelo::gaming::round::validate_stake(Chips::new(99).unwrap(), &game).is_err());
    assert!(ceelo::gaming::round::validate_stake(Chips::new(10_001).unwrap(), &game).is_err());
}
