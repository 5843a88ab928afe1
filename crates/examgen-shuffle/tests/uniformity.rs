//! Statistical checks that the permutations are roughly uniform.
//!
//! Seeded, so the counts are deterministic; the bounds are far looser than
//! the expected sampling noise.

use rand::SeedableRng;
use rand::rngs::StdRng;

use examgen_model::{Item, ItemBank, ShuffleOptions};
use examgen_shuffle::generate_with;

const TRIALS: usize = 4000;

#[test]
fn every_option_visits_every_slot() {
    let options = ShuffleOptions::new().with_answers(true);
    let mut rng = StdRng::seed_from_u64(7);
    // counts[slot] = how often the tracked option landed there
    let mut counts = [0usize; 4];

    for _ in 0..TRIALS {
        let bank = ItemBank::try_new(vec![Item::new(
            "q",
            vec![
                "tracked#".to_string(),
                "o1".to_string(),
                "o2".to_string(),
                "o3".to_string(),
            ],
        )])
        .unwrap();
        let (exam, _) = generate_with(bank, &options, &mut rng).unwrap();
        let slot = exam.items()[0]
            .options
            .iter()
            .position(|o| o == "tracked")
            .unwrap();
        counts[slot] += 1;
    }

    let expected = TRIALS / 4;
    for (slot, &count) in counts.iter().enumerate() {
        assert!(
            count > expected / 2 && count < expected * 2,
            "option stuck around slot {slot}: {counts:?}"
        );
    }
}

#[test]
fn every_row_visits_every_position() {
    let options = ShuffleOptions::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut counts = [0usize; 3];

    for _ in 0..TRIALS {
        let bank = ItemBank::try_new(vec![
            Item::new("tracked", vec!["a#".to_string(), "b".to_string()]),
            Item::new("q1", vec!["a#".to_string(), "b".to_string()]),
            Item::new("q2", vec!["a#".to_string(), "b".to_string()]),
        ])
        .unwrap();
        let (exam, _) = generate_with(bank, &options, &mut rng).unwrap();
        let position = exam
            .items()
            .iter()
            .position(|item| item.question == "tracked")
            .unwrap();
        counts[position] += 1;
    }

    let expected = TRIALS / 3;
    for (position, &count) in counts.iter().enumerate() {
        assert!(
            count > expected / 2 && count < expected * 2,
            "row stuck around position {position}: {counts:?}"
        );
    }
}
