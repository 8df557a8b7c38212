//! Tests for the Markov predictor.

use evil_rps::core::{History, Move, PredictorConfig, Round};
use evil_rps::predictor::{Context, PredictError, PredictorModel};

fn r(human: Move, engine: Move) -> Round {
    Round::new(human, engine)
}

/// Feed every prefix of `rounds` the way the engine does after each round.
fn fed(rounds: &[Round]) -> PredictorModel {
    let mut model = PredictorModel::default();
    model.replay(&History::from(rounds.to_vec()));
    model
}

// =============================================================================
// Prediction
// =============================================================================

#[test]
fn test_empty_history_has_no_prediction() {
    let model = PredictorModel::default();
    assert_eq!(model.predict(&[]), Err(PredictError::InsufficientContext));
}

#[test]
fn test_unseen_context_has_no_prediction() {
    let model = fed(&[r(Move::Rock, Move::Rock), r(Move::Paper, Move::Paper)]);
    let unseen = [r(Move::Scissors, Move::Scissors)];
    assert_eq!(model.predict(&unseen), Err(PredictError::InsufficientContext));
}

#[test]
fn test_learned_pattern() {
    // Every (Rock, Scissors) round is followed by the human throwing Rock.
    let rs = r(Move::Rock, Move::Scissors);
    let history = vec![rs; 5];
    let model = fed(&history);

    assert_eq!(model.predict(&history), Ok(Move::Rock));
    let follow = model.follow_ups(&Context::from(rs)).unwrap();
    assert_eq!(follow.count(Move::Rock), 4);
    assert_eq!(follow.total(), 4);
}

#[test]
fn test_prediction_uses_only_last_round() {
    let a = r(Move::Rock, Move::Paper);
    let b = r(Move::Scissors, Move::Rock);
    // a -> Scissors, b -> Rock, repeated.
    let history = [a, b, a, b, a, b];
    let model = fed(&history);

    assert_eq!(model.predict(&history), Ok(Move::Rock));
    assert_eq!(model.predict(&history[..5]), Ok(Move::Scissors));
}

#[test]
fn test_tie_goes_to_most_recent() {
    let ctx = r(Move::Paper, Move::Paper);
    // ctx -> Rock, then ctx -> Scissors. One each; Scissors is fresher.
    let history = [ctx, r(Move::Rock, Move::Rock), ctx, r(Move::Scissors, Move::Rock)];
    let model = fed(&history);

    assert_eq!(model.predict(&[ctx]), Ok(Move::Scissors));

    // Reinforce Rock again: now it leads on count.
    let mut more = history.to_vec();
    more.extend([ctx, r(Move::Rock, Move::Paper)]);
    let model = fed(&more);
    assert_eq!(model.predict(&[ctx]), Ok(Move::Rock));
}

#[test]
fn test_predictions_stay_in_domain() {
    let history: Vec<Round> = (0..60)
        .map(|i| r(Move::ALL[(i * 5 + i / 7) % 3], Move::ALL[(i * 2) % 3]))
        .collect();
    let model = fed(&history);

    for end in 1..=history.len() {
        if let Ok(m) = model.predict(&history[..end]) {
            assert!(Move::ALL.contains(&m));
        }
    }
}

// =============================================================================
// Feeding
// =============================================================================

#[test]
fn test_feed_fills_every_order() {
    let history = [
        r(Move::Rock, Move::Paper),
        r(Move::Paper, Move::Scissors),
        r(Move::Scissors, Move::Rock),
    ];
    let mut model = PredictorModel::default();
    model.feed(&history);

    assert_eq!(model.observations(), 1);
    for order in 0..=2 {
        assert_eq!(model.table(order).unwrap().len(), 1, "order {order}");
    }
    let order2 = Context::from_rounds(&history[..2]);
    assert_eq!(model.follow_ups(&order2).unwrap().count(Move::Scissors), 1);
    assert_eq!(
        model.follow_ups(&Context::empty()).unwrap().count(Move::Scissors),
        1
    );
}

#[test]
fn test_short_window_skips_high_orders() {
    let mut model = PredictorModel::default();
    model.feed(&[r(Move::Rock, Move::Rock), r(Move::Paper, Move::Rock)]);

    assert_eq!(model.table(0).unwrap().len(), 1);
    assert_eq!(model.table(1).unwrap().len(), 1);
    assert!(model.table(2).unwrap().is_empty());
}

#[test]
fn test_single_round_only_counts_order_zero() {
    let mut model = PredictorModel::default();
    model.feed(&[r(Move::Rock, Move::Rock)]);

    assert_eq!(model.observations(), 1);
    assert_eq!(model.table(0).unwrap().len(), 1);
    assert!(model.table(1).unwrap().is_empty());
    assert_eq!(model.predict(&[r(Move::Rock, Move::Rock)]), Err(PredictError::InsufficientContext));
}

#[test]
fn test_empty_feed_is_ignored() {
    let mut model = PredictorModel::default();
    model.feed(&[]);
    assert_eq!(model.observations(), 0);
    assert!(model.table(0).unwrap().is_empty());
}

#[test]
fn test_feed_truncates_to_window() {
    let mut model = PredictorModel::new(PredictorConfig::default().with_window(2));
    let history = [
        r(Move::Rock, Move::Rock),
        r(Move::Paper, Move::Paper),
        r(Move::Scissors, Move::Scissors),
    ];
    model.feed(&history);

    // Only the last two rounds count, so no order-2 context exists.
    assert!(model.table(2).unwrap().is_empty());
    assert_eq!(
        model
            .follow_ups(&Context::from(history[1]))
            .unwrap()
            .count(Move::Scissors),
        1
    );
}

#[test]
fn test_higher_max_order_builds_more_tables() {
    let config = PredictorConfig::default().with_max_order(4).with_window(5);
    let history: Vec<Round> = (0..5).map(|i| r(Move::ALL[i % 3], Move::Rock)).collect();
    let mut model = PredictorModel::new(config);
    model.feed(&history);

    for order in 0..=4 {
        assert_eq!(model.table(order).unwrap().len(), 1, "order {order}");
    }
    assert!(model.table(5).is_none());
}
