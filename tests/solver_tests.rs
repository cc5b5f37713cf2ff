use belotree::{Card, CardSet, Deal, Rank, Solver, Suit};

use belotree::rng::{random_hands, rng_for_deal};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn full_suit(suit: Suit) -> CardSet {
    Rank::all().iter().map(|&r| card(suit, r)).collect()
}

fn set(cards: &[Card]) -> CardSet {
    cards.iter().copied().collect()
}

#[test]
fn capot_with_belote_scores_272() {
    // Player 0 holds every heart; nobody else can win a single trick.
    // 162 card points + 90 capot + 20 belote (K and Q of trump together).
    let hands = [
        full_suit(Suit::Hearts),
        full_suit(Suit::Diamonds),
        full_suit(Suit::Clubs),
        full_suit(Suit::Spades),
    ];
    let deal = Deal::new(hands, Suit::Hearts, 0, 0);

    let mut solver = Solver::with_capacity_pow2(1 << 20);
    assert_eq!(solver.solve(&deal), 272);
}

#[test]
fn capot_with_split_belote_scores_252() {
    // The contracting side still sweeps every trick, but K and Q of trump
    // sit in different hands, so no belote: 162 + 90.
    let hands = [
        set(&[
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Hearts, Rank::Queen),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Ace),
        ]),
        set(&[
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Clubs, Rank::Jack),
            card(Suit::Clubs, Rank::Queen),
        ]),
        set(&[
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Ace),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Diamonds, Rank::Jack),
        ]),
        set(&[
            card(Suit::Clubs, Rank::King),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Spades, Rank::Jack),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Spades, Rank::King),
        ]),
    ];
    let deal = Deal::new(hands, Suit::Hearts, 0, 0);

    let mut solver = Solver::with_capacity_pow2(1 << 20);
    assert_eq!(solver.solve(&deal), 252);
}

#[test]
fn random_full_deal_is_within_score_range() {
    let mut rng = rng_for_deal(12345, 0);
    let hands = random_hands(&mut rng);
    let deal = Deal::new(hands, Suit::Spades, 1, 1);

    let mut solver = Solver::with_capacity_pow2(1 << 20);
    let score = solver.solve(&deal);
    assert!(
        (0..=272).contains(&score),
        "score {score} outside the legal range"
    );

    // Deterministic on a warm solver and on a fresh one.
    assert_eq!(solver.solve(&deal), score);
    let mut fresh = Solver::with_capacity_pow2(1 << 20);
    assert_eq!(fresh.solve(&deal), score);
}

#[test]
fn jack_of_trump_wins_the_endgame() {
    // One-trick endgame: the Jack of trump beats the Nine no matter who
    // leads. Defenders carry prior points so the last trick is no capot.
    let hands = [
        set(&[card(Suit::Hearts, Rank::Jack)]),
        set(&[card(Suit::Hearts, Rank::Seven)]),
        set(&[card(Suit::Hearts, Rank::Nine)]),
        set(&[card(Suit::Hearts, Rank::Eight)]),
    ];
    // Trick value: J(20) + 9(14) + 10 dix de der = 44, all to NS.
    let mut solver = Solver::with_capacity_pow2(1 << 16);

    let deal = Deal::from_hands(&hands, Suit::Hearts, 0, &[], 0, 0, 5).unwrap();
    assert_eq!(solver.solve(&deal), 44);

    let from_partner = Deal::from_hands(&hands, Suit::Hearts, 0, &[], 2, 0, 5).unwrap();
    assert_eq!(solver.solve(&from_partner), 44);
}

#[test]
fn prior_points_fold_into_the_result() {
    let hands = [
        set(&[card(Suit::Hearts, Rank::Jack)]),
        set(&[card(Suit::Hearts, Rank::Seven)]),
        set(&[card(Suit::Hearts, Rank::Nine)]),
        set(&[card(Suit::Hearts, Rank::Eight)]),
    ];
    let mut solver = Solver::with_capacity_pow2(1 << 16);

    // Both deals have nonzero priors on both sides, so the solver keeps
    // one warm table across all three calls: cached subtree values are
    // score-free deltas, and only the folded-in prior may differ.
    let base = Deal::from_hands(&hands, Suit::Hearts, 0, &[], 0, 50, 5).unwrap();
    let shifted = Deal::from_hands(&hands, Suit::Hearts, 0, &[], 0, 80, 5).unwrap();

    assert_eq!(solver.solve(&base), 94);
    assert_eq!(solver.solve(&shifted), 124);
    assert_eq!(solver.solve(&base), 94);
}

#[test]
fn solve_all_suits_matches_individual_solves() {
    let mut rng = rng_for_deal(98765, 3);
    let hands = random_hands(&mut rng);
    let deal = Deal::new(hands, Suit::Hearts, 2, 2);

    let mut solver = Solver::with_capacity_pow2(1 << 20);
    let all = solver.solve_all_suits(&deal);

    for suit in Suit::playable() {
        let mut single = Solver::with_capacity_pow2(1 << 20);
        let mut d = deal;
        d.trump = suit;
        assert_eq!(
            all[suit.index() as usize],
            single.solve(&d),
            "mismatch for trump {suit:?}"
        );
    }
}

#[test]
fn solve_all_suits_is_idempotent_on_a_reused_solver() {
    let mut rng = rng_for_deal(555, 1);
    let hands = random_hands(&mut rng);
    let deal = Deal::new(hands, Suit::Hearts, 0, 0);

    let mut solver = Solver::with_capacity_pow2(1 << 20);
    let first = solver.solve_all_suits(&deal);
    let second = solver.solve_all_suits(&deal);
    assert_eq!(first, second);
}

#[test]
fn malformed_hand_count_is_rejected() {
    let hands = vec![CardSet::new(); 3];
    let err = Deal::from_hands(&hands, Suit::Hearts, 0, &[], 0, 0, 0).unwrap_err();
    assert!(err.contains("expected 4 hands"), "unexpected message: {err}");
}
