//! Property tests over random histories and inputs.

use proptest::prelude::*;

use evil_rps::core::{GameRng, History, Move, Outcome, PredictorConfig, Round};
use evil_rps::engine::{GameEngine, ScriptedInput};
use evil_rps::predictor::PredictorModel;
use evil_rps::storage::{decode, encode, sanitize, MemoryStore, PlayerKey};

fn arb_move() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissors)]
}

fn arb_round() -> impl Strategy<Value = Round> {
    (arb_move(), arb_move()).prop_map(|(human, engine)| Round::new(human, engine))
}

fn arb_history(max: usize) -> impl Strategy<Value = Vec<Round>> {
    prop::collection::vec(arb_round(), 0..max)
}

proptest! {
    #[test]
    fn test_every_pair_has_one_outcome(a in arb_move(), b in arb_move()) {
        let forward = a.versus(b);
        let backward = b.versus(a);
        match forward {
            Outcome::Draw => prop_assert_eq!(backward, Outcome::Draw),
            Outcome::Win => prop_assert_eq!(backward, Outcome::Lose),
            Outcome::Lose => prop_assert_eq!(backward, Outcome::Win),
        }
        prop_assert_eq!(forward == Outcome::Draw, a == b);
        prop_assert_eq!(a.beaten_by().beats(), a);
    }

    #[test]
    fn test_predictions_are_moves(rounds in arb_history(80), tail in arb_round()) {
        let mut model = PredictorModel::default();
        model.replay(&History::from(rounds.clone()));

        let mut probe = rounds;
        probe.push(tail);
        if let Ok(m) = model.predict(&probe) {
            prop_assert!(Move::ALL.contains(&m));
        }
    }

    #[test]
    fn test_records_round_trip(rounds in arb_history(50)) {
        let history = History::from(rounds);
        let text = encode(&history).unwrap();
        prop_assert_eq!(decode(&text).unwrap(), history);
    }

    #[test]
    fn test_decode_never_panics(text in ".{0,64}") {
        let _ = decode(&text);
    }

    #[test]
    fn test_sanitized_names_are_safe(raw in ".{0,32}") {
        let clean = sanitize(&raw);
        prop_assert!(clean.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '));
        prop_assert_eq!(sanitize(&clean), clean.clone());
    }

    #[test]
    fn test_scores_sum_to_rounds_played(
        moves in prop::collection::vec(arb_move(), 0..60),
        seed in any::<u64>(),
    ) {
        let store = MemoryStore::new();
        let mut engine = GameEngine::resume(
            PlayerKey::from_display_name("Prop"),
            &store,
            PredictorConfig::default(),
            GameRng::new(seed),
        );
        let mut input = ScriptedInput::new(moves.clone());
        let summary = engine.run(&mut input, &store, |_| {}).unwrap();

        let scores = summary.scores;
        prop_assert_eq!((scores.engine + scores.human + scores.draws) as usize, moves.len());
        prop_assert_eq!(summary.total_rounds, moves.len());
    }
}
